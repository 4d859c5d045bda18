//! Caesar rotation over the 26-symbol alphabet.
//!
//! Every symbol is mapped to its alphabet position `p`, moved to
//! `(p + offset.rem_euclid(26)) % 26`, and mapped back. The offset is reduced
//! to `0..26` first, so any `i64` is valid and negative offsets wrap: rotating
//! by `-amount` (or `26 - amount`) decrypts.
//!
//! Text is validated before any symbol is rotated: either the whole rotated
//! string is returned or an error, never partial output.

use crate::alphabet::{self, ALPHABET_LEN};
use crate::error::{CipherError, Result};
use crate::shift::ShiftAmount;
use crate::CipherReport;

/// Rotate a single symbol by an arbitrary offset.
///
/// The result is always in canonical (uppercase) case. A symbol outside the
/// alphabet fails with [`CipherError::InvalidSymbol`] at position 0, the
/// symbol being its own one-character text.
pub fn shift_symbol(symbol: char, offset: i64) -> Result<char> {
    let p = alphabet::index_of(symbol).ok_or(CipherError::InvalidSymbol {
        symbol,
        position: 0,
    })?;
    Ok(alphabet::symbol_at(wrap(p, offset)))
}

/// Rotate text by an unconstrained offset.
///
/// Unlike [`rotate`], `offset` may be zero, negative, or larger than the
/// alphabet. Only the text is validated.
pub fn rotate_by(text: &str, offset: i64) -> Result<String> {
    let normalized = alphabet::normalize(text)?;
    Ok(rotate_normalized(&normalized, offset))
}

/// Rotate text by a validated shift amount.
pub fn rotate_shift(text: &str, shift: ShiftAmount) -> Result<String> {
    rotate_by(text, shift.get() as i64)
}

/// Encrypt text with a Caesar shift.
///
/// Fails with [`CipherError::EmptyInput`] or [`CipherError::InvalidSymbol`]
/// for bad text and [`CipherError::ShiftOutOfRange`] when `amount` is not in
/// `1..=25`. Input of either case is accepted; output is uppercase.
pub fn rotate(text: &str, amount: i64) -> Result<String> {
    let shift = ShiftAmount::new(amount)?;
    rotate_shift(text, shift)
}

/// Encrypt text and bundle the normalized input, shift, and output.
pub fn encrypt_report(text: &str, shift: ShiftAmount) -> Result<CipherReport> {
    let input = alphabet::normalize(text)?;
    let output = rotate_normalized(&input, shift.get() as i64);
    Ok(CipherReport {
        input,
        shift,
        output,
    })
}

/// Rotate text already known to be uppercase `A..=Z`.
fn rotate_normalized(text: &str, offset: i64) -> String {
    text.bytes()
        .map(|b| alphabet::symbol_at(wrap(b - b'A', offset)))
        .collect()
}

/// Move an alphabet position by `offset`, wrapping into `0..26`.
///
/// The offset is reduced first so the full `i64` range never overflows.
#[inline]
fn wrap(position: u8, offset: i64) -> u8 {
    let n = i64::from(ALPHABET_LEN);
    ((i64::from(position) + offset.rem_euclid(n)) % n) as u8
}
