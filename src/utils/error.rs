use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error on {field}: {message}")]
    ValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TrackerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TrackerError::ApiError(_) => ErrorCategory::Network,
            TrackerError::SerializationError(_) => ErrorCategory::Data,
            TrackerError::ConfigError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            TrackerError::ValidationError { .. } => ErrorCategory::Input,
            TrackerError::IoError(_) => ErrorCategory::System,
        }
    }

    /// 對應 CLI 的退出碼：Medium → 2, High → 1, Critical → 3
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TrackerError::ApiError(_) => ErrorSeverity::Medium,
            TrackerError::SerializationError(_) | TrackerError::ValidationError { .. } => {
                ErrorSeverity::High
            }
            TrackerError::ConfigError { .. }
            | TrackerError::MissingConfigError { .. }
            | TrackerError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            TrackerError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TrackerError::ApiError(e) => match e.status() {
                Some(status) => format!("The expense backend answered with {}", status),
                None => format!("Could not reach the expense backend: {}", e),
            },
            TrackerError::SerializationError(e) => {
                format!("The expense backend sent data that could not be read: {}", e)
            }
            TrackerError::IoError(e) => format!("File system error: {}", e),
            TrackerError::ConfigError { message } => message.clone(),
            TrackerError::MissingConfigError { field } => {
                format!("Required setting '{}' is not set", field)
            }
            TrackerError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Setting '{}' has invalid value '{}': {}", field, value, reason),
            TrackerError::ValidationError { field, message } => {
                format!("{}: {}", field, message)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the backend is running and the base URL is correct",
            ErrorCategory::Data => "Check that the backend serves expense records in the expected JSON shape",
            ErrorCategory::Configuration => {
                "Pass --base-url, set EXPENSE_TRACKER_BASE_URL, or add [backend] base_url to the config file"
            }
            ErrorCategory::Input => "Correct the expense form values and try again",
            ErrorCategory::System => "Check file permissions and paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
