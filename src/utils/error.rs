use thiserror::Error;

#[derive(Error, Debug)]
pub enum BouquetError {
    #[error("No flower found in the stem length range [{min}, {max}]")]
    NotFound { min: i32, max: i32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lookup,
    Storage,
    Serialization,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BouquetError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BouquetError::NotFound { .. } => ErrorCategory::Lookup,
            BouquetError::IoError(_) => ErrorCategory::Storage,
            BouquetError::SerializationError(_) | BouquetError::CsvError(_) => {
                ErrorCategory::Serialization
            }
            BouquetError::ConfigError { .. }
            | BouquetError::ConfigValidationError { .. }
            | BouquetError::InvalidConfigValueError { .. }
            | BouquetError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BouquetError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Lookup => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Medium,
            ErrorCategory::Serialization | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            BouquetError::NotFound { min, max } => {
                format!("No flower has a stem length between {} and {}", min, max)
            }
            BouquetError::IoError(e) => format!("Could not access a file: {}", e),
            BouquetError::SerializationError(_) | BouquetError::CsvError(_) => {
                "Failed to render the bouquet report".to_string()
            }
            BouquetError::ConfigError { message } => {
                format!("The job configuration is invalid: {}", message)
            }
            BouquetError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            BouquetError::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for '{}' ({})", value, field, reason)
            }
            BouquetError::MissingConfigError { field } => {
                format!("The configuration is missing '{}'", field)
            }
            BouquetError::ProcessingError { message } => format!("Processing failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BouquetError::NotFound { .. } => "Widen the stem length range or add more flowers",
            BouquetError::IoError(_) => "Check that the path exists and is readable/writable",
            BouquetError::SerializationError(_) | BouquetError::CsvError(_) => {
                "Try another output format"
            }
            BouquetError::ConfigError { .. } | BouquetError::ConfigValidationError { .. } => {
                "Make sure the file is valid TOML and matches the job layout"
            }
            BouquetError::InvalidConfigValueError { .. } => {
                "Fix the highlighted value and run again"
            }
            BouquetError::MissingConfigError { .. } => "Add the missing section to the job file",
            BouquetError::ProcessingError { .. } => "Run again with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, BouquetError>;
