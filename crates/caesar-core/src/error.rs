//! Error types for cipher validation and rotation.

use thiserror::Error;

/// Errors raised while validating or rotating text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// The text to rotate was empty.
    #[error("input cannot be empty")]
    EmptyInput,

    /// A symbol outside the A-Z alphabet was found.
    #[error("invalid symbol {symbol:?} at position {position}: only a-z and A-Z are supported")]
    InvalidSymbol { symbol: char, position: usize },

    /// The shift amount lies outside 1..=25.
    #[error("shift amount {0} is out of range: has to be between 1 and 25")]
    ShiftOutOfRange(i64),

    /// The shift amount could not be parsed as an integer.
    #[error("shift amount {0:?} is not a number")]
    InvalidShift(String),
}

/// Result alias for cipher operations.
pub type Result<T> = std::result::Result<T, CipherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_symbol_message_names_position() {
        let err = CipherError::InvalidSymbol {
            symbol: '1',
            position: 1,
        };
        assert_eq!(
            err.to_string(),
            "invalid symbol '1' at position 1: only a-z and A-Z are supported"
        );
    }

    #[test]
    fn test_shift_out_of_range_message() {
        let err = CipherError::ShiftOutOfRange(26);
        assert!(err.to_string().contains("26"));
        assert!(err.to_string().contains("between 1 and 25"));
    }
}
