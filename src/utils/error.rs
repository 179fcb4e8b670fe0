use thiserror::Error;

#[derive(Error, Debug)]
pub enum BadgeError {
    #[error("Failed to list branches: {status}")]
    ListingFailed { status: u16 },

    #[error("Failed to parse branch list: {message}")]
    MalformedListing { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Listing,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BadgeError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BadgeError::ListingFailed { .. }
            | BadgeError::MalformedListing { .. }
            | BadgeError::ApiError(_) => ErrorCategory::Listing,
            BadgeError::IoError(_) => ErrorCategory::Output,
            BadgeError::ConfigError { .. }
            | BadgeError::ConfigValidationError { .. }
            | BadgeError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Listing => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Failures of the fetch phase; these are reported inline to the sink.
    pub fn is_listing_failure(&self) -> bool {
        self.category() == ErrorCategory::Listing
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BadgeError::ListingFailed { status } => {
                format!("The branch listing endpoint answered with status {}", status)
            }
            BadgeError::MalformedListing { .. } => {
                "The branch listing was not a JSON array of branches".to_string()
            }
            BadgeError::ApiError(_) => "Could not reach the branch listing endpoint".to_string(),
            BadgeError::IoError(_) => "Could not write the badge table".to_string(),
            BadgeError::ConfigError { message } => format!("Invalid configuration: {}", message),
            BadgeError::ConfigValidationError { field, message } => {
                format!("Invalid configuration for '{}': {}", field, message)
            }
            BadgeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid value for '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BadgeError::ListingFailed { status: 403 } => {
                "The API may be rate limiting this client; wait a while or set a distinct --user-agent"
            }
            BadgeError::ListingFailed { status: 404 } => {
                "Check that the repository in --endpoint exists and is public"
            }
            BadgeError::ListingFailed { .. } => {
                "Check --success-status matches what this deployment of the API returns"
            }
            BadgeError::MalformedListing { .. } => {
                "Make sure --endpoint points at a branch listing, not a web page"
            }
            BadgeError::ApiError(_) => "Check network connectivity and the endpoint URL",
            BadgeError::IoError(_) => "Check that --output-path is writable",
            BadgeError::ConfigError { .. }
            | BadgeError::ConfigValidationError { .. }
            | BadgeError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, BadgeError>;
