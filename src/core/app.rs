use crate::adapters::http::HttpExpenseApi;
use crate::config::TrackerConfig;
use crate::core::tracker::{ExpenseForm, ExpenseTracker};
use crate::utils::error::Result;

/// Single route of the client: mounts the tracker against the configured backend.
pub struct TrackerApp {
    config: TrackerConfig,
}

impl TrackerApp {
    pub fn new(config: TrackerConfig) -> Self {
        Self { config }
    }

    /// Builds the tracker and runs the initial fetch.
    pub async fn mount(&self) -> ExpenseTracker<HttpExpenseApi> {
        tracing::info!("🚀 Mounting expense tracker against {}", self.config.base_url);

        let api = HttpExpenseApi::from_config(&self.config);
        let mut tracker = ExpenseTracker::new(api, self.config.participants.clone());
        tracker.load().await;
        tracker
    }

    /// Mounts, opens the form and submits it.
    pub async fn add(&self, form: &ExpenseForm) -> Result<ExpenseTracker<HttpExpenseApi>> {
        let mut tracker = self.mount().await;
        tracker.open_form();
        tracker.submit(form).await?;
        Ok(tracker)
    }
}
