use thiserror::Error;

use crate::types::AddressFamily;

/// Subnet matching error types
#[derive(Error, Debug)]
pub enum SubnetError {
    #[error("Invalid prefix length {prefix_len} for {family}: must be at most {max}")]
    InvalidPrefixLength {
        family: AddressFamily,
        prefix_len: u8,
        max: u8,
    },

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SubnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_prefix_is_matchable() {
        let err = SubnetError::InvalidPrefixLength {
            family: AddressFamily::V4,
            prefix_len: 33,
            max: 32,
        };
        match &err {
            SubnetError::InvalidPrefixLength {
                family, prefix_len, ..
            } => {
                assert_eq!(*family, AddressFamily::V4);
                assert_eq!(*prefix_len, 33);
            }
            _ => panic!("expected InvalidPrefixLength"),
        }
    }

    #[test]
    fn test_invalid_prefix_display() {
        let err = SubnetError::InvalidPrefixLength {
            family: AddressFamily::V6,
            prefix_len: 129,
            max: 128,
        };
        let display = format!("{}", err);
        assert!(display.contains("129"), "got: {}", display);
        assert!(display.contains("IPv6"), "got: {}", display);
    }

    #[test]
    fn test_json_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SubnetError = json_err.into();
        assert!(matches!(err, SubnetError::JsonError(_)));
    }
}
