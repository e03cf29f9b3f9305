//! Error handling for the sortlab library
//!
//! Every fallible operation in the crate returns [`Result`], carrying a
//! [`SortlabError`] that names what went wrong and where it is recoverable.

use thiserror::Error;

/// Main error type for the sortlab library
#[derive(Error, Debug)]
pub enum SortlabError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input violates a sort precondition (e.g. a negative value)
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message describing the issue
        message: String,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// A count table would exceed the configured size limit
    #[error("Value range too large: count table needs {required} slots, limit is {limit}")]
    RangeTooLarge {
        /// Slots the count table would need
        required: usize,
        /// Configured maximum number of slots
        limit: usize,
    },

    /// Dataset could not be read or parsed
    #[error("Dataset error: {message}")]
    Dataset {
        /// Error message describing the dataset issue
        message: String,
    },

    /// Report or configuration serialization failures
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message from the serializer
        message: String,
    },
}

impl SortlabError {
    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput { message: message.into() }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a range-too-large error
    pub fn range_too_large(required: usize, limit: usize) -> Self {
        Self::RangeTooLarge { required, limit }
    }

    /// Create a dataset error
    pub fn dataset<S: Into<String>>(message: S) -> Self {
        Self::Dataset { message: message.into() }
    }

    /// Create a serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization { message: message.into() }
    }

    /// Create an I/O error from a message
    pub fn io_error<S: Into<String>>(message: S) -> Self {
        Self::Io(std::io::Error::new(std::io::ErrorKind::Other, message.into()))
    }

    /// Check if this is a recoverable error
    ///
    /// [`Dataset::load_or_synthetic`](crate::benchmark::Dataset::load_or_synthetic)
    /// falls back to synthetic data on these and returns the rest.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::Dataset { .. } => true,
            Self::InvalidInput { .. } => false,
            Self::Configuration { .. } => false,
            Self::RangeTooLarge { .. } => false,
            Self::Serialization { .. } => false,
        }
    }

    /// Get the error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::InvalidInput { .. } => "input",
            Self::Configuration { .. } => "config",
            Self::RangeTooLarge { .. } => "range",
            Self::Dataset { .. } => "dataset",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<csv::Error> for SortlabError {
    fn from(err: csv::Error) -> Self {
        Self::dataset(err.to_string())
    }
}

impl From<serde_json::Error> for SortlabError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SortlabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SortlabError::invalid_input("negative value -3 at index 2");
        assert_eq!(err.category(), "input");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        let io_err = SortlabError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        assert_eq!(io_err.category(), "io");
        assert!(io_err.is_recoverable());

        let dataset_err = SortlabError::dataset("missing rating column");
        assert_eq!(dataset_err.category(), "dataset");
        assert!(dataset_err.is_recoverable());

        let range_err = SortlabError::range_too_large(1 << 40, 1 << 26);
        assert_eq!(range_err.category(), "range");
        assert!(!range_err.is_recoverable());

        let config_err = SortlabError::configuration("executions must be greater than 0");
        assert_eq!(config_err.category(), "config");
        assert!(!config_err.is_recoverable());

        let ser_err = SortlabError::serialization("trailing comma");
        assert_eq!(ser_err.category(), "serialization");
        assert!(!ser_err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = SortlabError::invalid_input("test message");
        let display = format!("{}", err);
        assert!(display.contains("Invalid input"));
        assert!(display.contains("test message"));

        let range_err = SortlabError::range_too_large(500, 100);
        let range_display = format!("{}", range_err);
        assert!(range_display.contains("500"));
        assert!(range_display.contains("100"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: SortlabError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(format!("{}", err).contains("I/O error"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i64>>("[1, 2,").unwrap_err();
        let err: SortlabError = json_err.into();
        assert_eq!(err.category(), "serialization");
    }
}
