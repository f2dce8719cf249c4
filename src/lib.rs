pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};

pub use adapters::http::HttpExpenseApi;
pub use config::{toml_config::TomlConfig, TrackerConfig};
pub use core::{
    app::TrackerApp,
    tracker::{ExpenseForm, ExpenseTracker, TrackerView},
};
pub use utils::error::{Result, TrackerError};
