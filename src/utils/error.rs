use thiserror::Error;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV rendering error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("Rendering error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SplitError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SplitError::ConfigValidationError { .. }
            | SplitError::InvalidConfigValueError { .. }
            | SplitError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SplitError::IoError(_) => ErrorCategory::Input,
            SplitError::SerializationError(_)
            | SplitError::CsvError(_)
            | SplitError::RenderError { .. } => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SplitError::MissingConfigError { .. } => ErrorSeverity::Medium,
            SplitError::ConfigValidationError { .. }
            | SplitError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            SplitError::SerializationError(_)
            | SplitError::CsvError(_)
            | SplitError::RenderError { .. } => ErrorSeverity::High,
            SplitError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SplitError::IoError(_) => {
                "Check that the file exists and is readable".to_string()
            }
            SplitError::ConfigValidationError { field, .. } => {
                format!("Fix the '{}' section of the configuration file", field)
            }
            SplitError::InvalidConfigValueError { field, .. } => {
                format!("Provide a valid value for '{}'", field)
            }
            SplitError::MissingConfigError { field } => {
                format!("Set '{}' on the command line or in the configuration file", field)
            }
            SplitError::SerializationError(_)
            | SplitError::CsvError(_)
            | SplitError::RenderError { .. } => {
                "Try a different output format (text, json, csv, tsv)".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Could not read input: {}", self),
            ErrorCategory::Output => format!("Could not render preview: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_or_medium() {
        let invalid = SplitError::InvalidConfigValueError {
            field: "display.utc_offset_hours".to_string(),
            value: "99".to_string(),
            reason: "out of range".to_string(),
        };
        assert_eq!(invalid.category(), ErrorCategory::Configuration);
        assert_eq!(invalid.severity(), ErrorSeverity::High);
        assert!(invalid.recovery_suggestion().contains("display.utc_offset_hours"));

        let missing = SplitError::MissingConfigError {
            field: "form".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::Medium);
        assert!(missing.user_friendly_message().starts_with("Configuration problem"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: SplitError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
