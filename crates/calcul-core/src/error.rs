//! Error types for calcul-core

use thiserror::Error;

/// Startup configuration error
///
/// The automaton itself has no runtime errors: every key is a total
/// function over the current state. Only the startup parameters can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("expected 3 arguments, got {got}")]
    WrongArgCount { got: usize },

    #[error("{name} is not an integer: {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("invalid value: {reason}")]
    OutOfRange { reason: String },
}

impl ConfigError {
    /// Process exit status for this error
    ///
    /// Wrong argument count and invalid values use distinct codes.
    pub fn exit_code(&self) -> u8 {
        match self {
            ConfigError::WrongArgCount { .. } => 2,
            ConfigError::InvalidNumber { .. } | ConfigError::OutOfRange { .. } => 3,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let count = ConfigError::WrongArgCount { got: 1 };
        let number = ConfigError::InvalidNumber {
            name: "res_min",
            value: "x".to_string(),
        };
        let range = ConfigError::OutOfRange {
            reason: "res_min must be >= 4".to_string(),
        };

        assert_ne!(count.exit_code(), number.exit_code());
        assert_eq!(number.exit_code(), range.exit_code());
        assert_ne!(count.exit_code(), 0);
        assert_ne!(number.exit_code(), 0);
    }

    #[test]
    fn test_messages() {
        let err = ConfigError::WrongArgCount { got: 5 };
        assert_eq!(err.to_string(), "expected 3 arguments, got 5");

        let err = ConfigError::InvalidNumber {
            name: "score_max",
            value: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "score_max is not an integer: \"ten\"");
    }
}
