#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::Participants;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_field, validate_url, Validate};
use toml_config::TomlConfig;

/// Settings after merging flags, environment and the config file.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub base_url: String,
    pub participants: Participants,
}

impl TrackerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            participants: Participants::default(),
        }
    }

    /// `base_url` (flag or environment) wins over the file.
    pub fn resolve(base_url: Option<String>, file: Option<&TomlConfig>) -> Result<Self> {
        let base_url = base_url.or_else(|| file.and_then(|f| f.base_url().map(str::to_string)));
        let base_url = validate_required_field("backend.base_url", &base_url)?.clone();

        let participants = match file {
            Some(f) => f.participants()?.unwrap_or_default(),
            None => Participants::default(),
        };

        let config = Self {
            base_url,
            participants,
        };
        config.validate()?;

        tracing::debug!("Resolved config: {:?}", config);
        Ok(config)
    }
}

impl ConfigProvider for TrackerConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("backend.base_url", &self.base_url)
    }
}
