use thiserror::Error;

/// Address encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
    #[error("invalid hex input: {0}")]
    InvalidHexInput(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_hex_input() {
        let err = AddressError::InvalidHexInput("Invalid character 'z' at position 0".into());
        assert_eq!(
            err.to_string(),
            "invalid hex input: Invalid character 'z' at position 0"
        );
    }

    #[test]
    fn display_invalid_input() {
        let err = AddressError::InvalidInput("address too long".into());
        assert_eq!(err.to_string(), "invalid input: address too long");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(AddressError::InvalidInput("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
