//! Error types for random-data generation.
//!
//! Draw operations over valid inputs are total; the only failures are
//! rejected arguments and configuration that cannot be loaded.

use thiserror::Error;

/// Errors raised by [`RandomGenerator`](crate::RandomGenerator) operations
/// and by [`GeneratorConfig`](crate::GeneratorConfig) loading.
///
/// # Examples
///
/// ```
/// use rando_core::RandomError;
///
/// let err = RandomError::invalid_argument("alphabet must not be empty");
/// assert!(err.is_invalid_argument());
/// assert_eq!(err.to_string(), "Invalid argument: alphabet must not be empty");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// An argument lies outside the operation's domain.
    ///
    /// Raised for an empty alphabet and for sample sizes that are negative
    /// or larger than the input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generator configuration could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RandomError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an invalid argument error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

impl From<toml::de::Error> for RandomError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RandomError::invalid_argument("size -1 is negative");
        assert_eq!(err.to_string(), "Invalid argument: size -1 is negative");

        let err = RandomError::config("alphabet override is empty");
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_error_predicates() {
        assert!(RandomError::invalid_argument("x").is_invalid_argument());
        assert!(!RandomError::invalid_argument("x").is_config());
        assert!(RandomError::config("x").is_config());
    }

    #[test]
    fn test_toml_error_converts_to_config() {
        let parse_err = toml::from_str::<toml::Table>("seed = ").unwrap_err();
        let err: RandomError = parse_err.into();
        assert!(err.is_config());
    }
}
