use crate::domain::model::Participants;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub backend: Option<BackendConfig>,
    pub participants: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(TrackerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BACKEND_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| TrackerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.backend.as_ref().and_then(|b| b.base_url.as_deref())
    }

    /// 參與者固定為兩人
    pub fn participants(&self) -> Result<Option<Participants>> {
        let Some(names) = &self.participants else {
            return Ok(None);
        };

        match names.as_slice() {
            [first, second] => {
                validate_non_empty_string("participants", first)?;
                validate_non_empty_string("participants", second)?;
                if first.to_lowercase() == second.to_lowercase() {
                    return Err(TrackerError::InvalidConfigValueError {
                        field: "participants".to_string(),
                        value: names.join(", "),
                        reason: "Participant names must differ".to_string(),
                    });
                }
                Ok(Some(Participants::new(first.clone(), second.clone())))
            }
            _ => Err(TrackerError::InvalidConfigValueError {
                field: "participants".to_string(),
                value: names.join(", "),
                reason: format!("Exactly two participants are supported, got {}", names.len()),
            }),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(url) = self.base_url() {
            validate_url("backend.base_url", url)?;
        }
        self.participants()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
participants = ["Asha", "Vikram"]

[backend]
base_url = "http://localhost:3001"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), Some("http://localhost:3001"));
        let participants = config.participants().unwrap().unwrap();
        assert_eq!(participants.first(), "Asha");
        assert_eq!(participants.second(), "Vikram");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EXPENSE_TOML_TEST_URL", "https://expenses.example.com");

        let toml_content = r#"
[backend]
base_url = "${EXPENSE_TOML_TEST_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), Some("https://expenses.example.com"));

        std::env::remove_var("EXPENSE_TOML_TEST_URL");
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[backend]
base_url = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(r#"participants = ["Only"]"#).unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(r#"participants = ["Sam", "sam"]"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.base_url().is_none());
        assert!(config.participants().unwrap().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[backend]\nbase_url = \"http://127.0.0.1:8080\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_url(), Some("http://127.0.0.1:8080"));
    }
}
