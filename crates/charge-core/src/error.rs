//! # Error Types
//!
//! Typed error handling for the ChargeTunis backend.
//! All store and payment operations return `Result<T, ChargeError>`.

use thiserror::Error;

/// Core error type for station and payment operations
#[derive(Debug, Error)]
pub enum ChargeError {
    /// Configuration errors (bad env values, malformed catalog file)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A field failed its range or format constraint
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// Document store failure
    #[error("Store error: {0}")]
    Store(String),
}

impl ChargeError {
    /// Shorthand for a field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ChargeError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ChargeError::Configuration(_) => 500,
            ChargeError::Validation { .. } => 422,
            ChargeError::Store(_) => 500,
        }
    }
}

impl From<toml::de::Error> for ChargeError {
    fn from(err: toml::de::Error) -> Self {
        ChargeError::Configuration(err.to_string())
    }
}

/// Result type alias for station and payment operations
pub type ChargeResult<T> = Result<T, ChargeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ChargeError::validation("kwh", "must be > 0").status_code(), 422);
        assert_eq!(ChargeError::Store("down".into()).status_code(), 500);
        assert_eq!(ChargeError::Configuration("bad".into()).status_code(), 500);
    }

    #[test]
    fn test_validation_message() {
        let err = ChargeError::validation("power_kw", "must be between 3 and 350");
        assert_eq!(
            err.to_string(),
            "Validation failed for power_kw: must be between 3 and 350"
        );
    }

    #[test]
    fn test_toml_error_is_configuration() {
        let err: ChargeError = toml::from_str::<toml::Value>("= broken")
            .unwrap_err()
            .into();
        assert!(matches!(err, ChargeError::Configuration(_)));
    }
}
