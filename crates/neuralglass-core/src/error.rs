//! Error types for Neural Glass

use thiserror::Error;

/// Main error type for Neural Glass operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// The email relay rejected or failed to deliver a submission
    #[error("Relay error: {0}")]
    Relay(String),

    /// Configuration is incomplete or invalid
    #[error("Config error: {0}")]
    Config(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid operation for current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SiteError::Relay("status 400".to_string());
        assert_eq!(format!("{}", err), "Relay error: status 400");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let site_err: SiteError = json_err.into();
        assert!(matches!(site_err, SiteError::Serialization(_)));
    }
}
