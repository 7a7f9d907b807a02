use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("No course selected")]
    EmptySelection,

    #[error("Full name is required")]
    MissingName,

    #[error("Invalid email address: '{email}'")]
    InvalidEmail { email: String },

    #[error("Could not open link '{uri}': {reason}")]
    LinkDispatchFailure {
        uri: String,
        reason: String,
        fallback: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Dispatch,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl QuoteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            QuoteError::EmptySelection | QuoteError::MissingName | QuoteError::InvalidEmail { .. } => {
                ErrorCategory::Input
            }
            QuoteError::LinkDispatchFailure { .. } => ErrorCategory::Dispatch,
            QuoteError::ConfigValidationError { .. }
            | QuoteError::MissingConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            QuoteError::IoError(_) | QuoteError::SerializationError(_) | QuoteError::CsvError(_) => {
                ErrorCategory::System
            }
        }
    }

    /// Input and dispatch errors are corrected by the user and never abort the process.
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Dispatch => ErrorSeverity::Low,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Alert title shown to the user, matching the app's dialogs.
    pub fn title(&self) -> &'static str {
        match self {
            QuoteError::EmptySelection => "Select courses",
            QuoteError::MissingName => "Name required",
            QuoteError::InvalidEmail { .. } => "Valid email required",
            QuoteError::LinkDispatchFailure { .. } => "Could not open link",
            _ => "Something went wrong",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            QuoteError::EmptySelection => "Please select at least one course.".to_string(),
            QuoteError::MissingName => "Please enter your full name.".to_string(),
            QuoteError::InvalidEmail { .. } => "Please enter a valid email address.".to_string(),
            QuoteError::LinkDispatchFailure { fallback, .. } => fallback.clone(),
            QuoteError::ConfigValidationError { field, message } => {
                format!("The configuration is invalid ({}): {}", field, message)
            }
            QuoteError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            QuoteError::InvalidConfigValueError { field, reason, .. } => {
                format!("The configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            QuoteError::EmptySelection => "Pick one or more courses from the catalog",
            QuoteError::MissingName => "Provide the name the enrollment should be made under",
            QuoteError::InvalidEmail { .. } => "Use an address of the form name@example.com",
            QuoteError::LinkDispatchFailure { .. } => "Contact the provider manually using the address shown",
            QuoteError::ConfigValidationError { .. }
            | QuoteError::MissingConfigError { .. }
            | QuoteError::InvalidConfigValueError { .. } => "Check the configuration file and try again",
            QuoteError::IoError(_) => "Check that the file exists and is readable",
            QuoteError::SerializationError(_) | QuoteError::CsvError(_) => {
                "Try a different output format"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;
