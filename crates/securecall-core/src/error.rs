//! Error types for `SecureCall` analytics

use std::{error::Error as StdError, fmt, path::PathBuf};

/// Main error type for `SecureCall` analytics
#[derive(Debug)]
pub enum Error {
    /// I/O error
    Io(std::io::Error),

    /// Configuration error
    Configuration {
        /// Error message
        message: String,
    },

    /// Validation error
    Validation {
        /// Field that failed validation
        field: String,
        /// Validation error message
        message: String,
    },

    /// Dataset could not be loaded
    DataLoad {
        /// Path that failed to load
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// CSV export error
    Csv(String),

    /// Not found error
    NotFound {
        /// Resource that was not found
        resource: String,
    },

    /// Serialization error
    Serialization(serde_json::Error),

    /// Other error
    Other(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Configuration { message } => write!(f, "Configuration error: {message}"),
            Self::Validation { field, message } => {
                write!(f, "Validation error: {field} - {message}")
            }
            Self::DataLoad { path, message } => {
                write!(f, "Failed to load dataset {}: {message}", path.display())
            }
            Self::Csv(msg) => write!(f, "CSV export error: {msg}"),
            Self::NotFound { resource } => write!(f, "Resource not found: {resource}"),
            Self::Serialization(err) => write!(f, "Serialization error: {err}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
            _ => None,
        }
    }
}

// From implementations for automatic conversions
impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

#[cfg(test)]
#[allow(
    clippy::missing_panics_doc,
    clippy::uninlined_format_args,
    clippy::match_same_arms
)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let app_error = Error::from(io_error);

        match app_error {
            Error::Io(_) => {}
            _ => panic!("Expected Io error variant"),
        }

        assert!(format!("{}", app_error).contains("I/O error"));
    }

    #[test]
    fn test_configuration_error() {
        let error = Error::Configuration {
            message: "Invalid detection threshold".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Configuration error: Invalid detection threshold"
        );
    }

    #[test]
    fn test_validation_error() {
        let error = Error::Validation {
            field: "confidence".to_string(),
            message: "Must be between 0 and 100".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Validation error: confidence - Must be between 0 and 100"
        );
    }

    #[test]
    fn test_data_load_error() {
        let error = Error::DataLoad {
            path: PathBuf::from("/tmp/calls.json"),
            message: "unexpected end of file".to_string(),
        };

        assert_eq!(
            format!("{}", error),
            "Failed to load dataset /tmp/calls.json: unexpected end of file"
        );
    }

    #[test]
    fn test_csv_error() {
        let error = Error::Csv("broken pipe".to_string());
        assert_eq!(format!("{}", error), "CSV export error: broken pipe");
    }

    #[test]
    fn test_not_found_error() {
        let error = Error::NotFound {
            resource: "CALL-999".to_string(),
        };

        assert_eq!(format!("{}", error), "Resource not found: CALL-999");
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_str = r#"{"invalid": json}"#;
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let app_error = Error::from(json_error);

        match app_error {
            Error::Serialization(_) => {}
            _ => panic!("Expected Serialization error variant"),
        }

        assert!(format!("{}", app_error).contains("Serialization error"));
    }

    #[test]
    fn test_other_error() {
        let error = Error::Other("Unexpected error occurred".to_string());
        assert_eq!(format!("{}", error), "Unexpected error occurred");
    }

    #[test]
    fn test_error_chain() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let app_error = Error::from(io_error);

        assert!(app_error.source().is_some());
    }

    #[test]
    fn test_error_source_for_plain_variants() {
        let error = Error::Configuration {
            message: "test".to_string(),
        };
        assert!(error.source().is_none());

        let error = Error::Csv("test".to_string());
        assert!(error.source().is_none());

        let error = Error::Validation {
            field: "test".to_string(),
            message: "test".to_string(),
        };
        assert!(error.source().is_none());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<String> {
            Ok("success".to_string())
        }

        fn returns_error() -> Result<String> {
            Err(Error::Other("test error".to_string()))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = Error::Configuration {
            message: "Missing required field".to_string(),
        };

        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Configuration"));
        assert!(debug_str.contains("Missing required field"));
    }
}
