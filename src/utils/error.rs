use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid pattern: {0}")]
    RegexError(#[from] regex::Error),

    #[error("DNS lookup failed for {domain}: {message}")]
    DnsError { domain: String, message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed ({field}): {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, ValidatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Network,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ValidatorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidatorError::IoError(_) => ErrorCategory::Io,
            ValidatorError::SerializationError(_) | ValidatorError::CsvError(_) => {
                ErrorCategory::Data
            }
            ValidatorError::DnsError { .. } => ErrorCategory::Network,
            ValidatorError::RegexError(_)
            | ValidatorError::ConfigError { .. }
            | ValidatorError::ConfigValidationError { .. }
            | ValidatorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // DNS 失敗可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ValidatorError::IoError(_) => {
                "Check that the file exists and that you have permission to read it".to_string()
            }
            ValidatorError::SerializationError(_) => {
                "Check that the output location is writable".to_string()
            }
            ValidatorError::CsvError(_) => {
                "Make sure the input is CSV with a `kind,value` header row".to_string()
            }
            ValidatorError::RegexError(_) => {
                "Fix the [email] pattern or remove it to use the built-in one".to_string()
            }
            ValidatorError::DnsError { .. } => {
                "Check network connectivity or choose different nameservers".to_string()
            }
            ValidatorError::ConfigError { .. } | ValidatorError::ConfigValidationError { .. } => {
                "Check the configuration file syntax".to_string()
            }
            ValidatorError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of `{}` in the configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ValidatorError::IoError(e) => format!("Could not access a file: {}", e),
            ValidatorError::CsvError(e) => format!("Could not read the batch input: {}", e),
            ValidatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value `{}` is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}
