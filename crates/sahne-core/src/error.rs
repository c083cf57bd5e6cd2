//! Error types for Sahne

use thiserror::Error;

/// The main error type for Sahne operations
#[derive(Debug, Error)]
pub enum SahneError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Invalid enum value: {value} is not one of {allowed:?}")]
    InvalidEnumValue {
        value: String,
        allowed: Vec<String>,
    },
}

/// Result type alias for Sahne operations
pub type Result<T> = std::result::Result<T, SahneError>;

impl From<toml::de::Error> for SahneError {
    fn from(err: toml::de::Error) -> Self {
        SahneError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for SahneError {
    fn from(err: toml::ser::Error) -> Self {
        SahneError::TomlSerError(err.to_string())
    }
}

impl SahneError {
    /// Build a [`SahneError::InvalidEnumValue`] from a value and the accepted ids
    pub fn invalid_value(value: &str, allowed: &[&str]) -> Self {
        SahneError::InvalidEnumValue {
            value: value.to_string(),
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_message() {
        let err = SahneError::invalid_value("sepia", &["warm", "cool"]);
        assert_eq!(
            err.to_string(),
            "Invalid enum value: sepia is not one of [\"warm\", \"cool\"]"
        );
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("style = ");
        let err: SahneError = parsed.unwrap_err().into();
        assert!(matches!(err, SahneError::TomlParseError(_)));
    }
}
