//! The fixed 26-symbol alphabet used as the rotation domain.
//!
//! All input is folded to uppercase, which is the canonical case: every
//! function here accepts either case and every produced symbol is `A..=Z`.

use crate::error::{CipherError, Result};

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// First symbol of the alphabet in canonical case.
pub const FIRST_SYMBOL: char = 'A';

/// Last symbol of the alphabet in canonical case.
pub const LAST_SYMBOL: char = 'Z';

/// Check whether a symbol belongs to the alphabet, ignoring case.
#[inline]
pub fn contains(symbol: char) -> bool {
    symbol.is_ascii_alphabetic()
}

/// Zero-based position of a symbol, or `None` if it is not a letter.
#[inline]
pub fn index_of(symbol: char) -> Option<u8> {
    if contains(symbol) {
        Some(symbol.to_ascii_uppercase() as u8 - FIRST_SYMBOL as u8)
    } else {
        None
    }
}

/// Symbol at a zero-based position. Indices past the end wrap around.
#[inline]
pub fn symbol_at(index: u8) -> char {
    (FIRST_SYMBOL as u8 + index % ALPHABET_LEN) as char
}

/// Check that text is non-empty and made only of alphabet symbols.
pub fn is_valid_text(text: &str) -> bool {
    !text.is_empty() && text.chars().all(contains)
}

/// Validate text and fold it to the canonical case.
///
/// Fails with [`CipherError::EmptyInput`] for empty text and with
/// [`CipherError::InvalidSymbol`] for the first symbol outside the alphabet.
/// Positions count characters, not bytes.
pub fn normalize(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(CipherError::EmptyInput);
    }

    if let Some((position, symbol)) = text.chars().enumerate().find(|(_, c)| !contains(*c)) {
        return Err(CipherError::InvalidSymbol { symbol, position });
    }

    Ok(text.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_of_bounds() {
        assert_eq!(index_of('A'), Some(0));
        assert_eq!(index_of('Z'), Some(25));
        assert_eq!(index_of('a'), Some(0));
        assert_eq!(index_of('z'), Some(25));
    }

    #[test]
    fn test_index_of_rejects_neighbours() {
        // Code points just outside both letter ranges
        assert_eq!(index_of('@'), None);
        assert_eq!(index_of('['), None);
        assert_eq!(index_of('`'), None);
        assert_eq!(index_of('{'), None);
    }

    #[test]
    fn test_index_of_rejects_non_ascii_letters() {
        assert_eq!(index_of('é'), None);
        assert_eq!(index_of('Ä'), None);
    }

    #[test]
    fn test_symbol_at_inverts_index_of() {
        for i in 0..ALPHABET_LEN {
            assert_eq!(index_of(symbol_at(i)), Some(i));
        }
        assert_eq!(symbol_at(0), FIRST_SYMBOL);
        assert_eq!(symbol_at(ALPHABET_LEN - 1), LAST_SYMBOL);
    }

    #[test]
    fn test_symbol_at_wraps_large_indices() {
        assert_eq!(symbol_at(ALPHABET_LEN), FIRST_SYMBOL);
        assert_eq!(symbol_at(200), 'S');
        assert_eq!(symbol_at(u8::MAX), 'V');
        for i in 0..=u8::MAX {
            assert!(contains(symbol_at(i)));
        }
    }

    #[test]
    fn test_normalize_uppercases() {
        assert_eq!(normalize("Hello").unwrap(), "HELLO");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), Err(CipherError::EmptyInput));
    }

    #[test]
    fn test_normalize_reports_first_bad_symbol() {
        assert_eq!(
            normalize("AB C1"),
            Err(CipherError::InvalidSymbol {
                symbol: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn test_normalize_position_counts_chars() {
        assert_eq!(
            normalize("ñA1"),
            Err(CipherError::InvalidSymbol {
                symbol: 'ñ',
                position: 0
            })
        );
        assert_eq!(
            normalize("AB€"),
            Err(CipherError::InvalidSymbol {
                symbol: '€',
                position: 2
            })
        );
    }

    #[test]
    fn test_is_valid_text() {
        assert!(is_valid_text("abcXYZ"));
        assert!(!is_valid_text(""));
        assert!(!is_valid_text("hello world"));
        assert!(!is_valid_text("A1B"));
    }
}
