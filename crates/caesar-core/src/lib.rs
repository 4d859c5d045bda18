//! Caesar Core - Caesar cipher library
//!
//! This crate provides the pure cipher logic: alphabet validation, shift
//! amount validation, and the modular rotation applied to each symbol.
//! It performs no I/O; the CLI and WASM crates supply already-read values.
//!
//! Uppercase is the canonical case. Input of either case is accepted and all
//! output is uppercase.

pub mod alphabet;
pub mod error;
pub mod rotate;
pub mod shift;

pub use error::{CipherError, Result};
pub use rotate::{encrypt_report, rotate, rotate_by, rotate_shift, shift_symbol};
pub use shift::{ShiftAmount, MAX_SHIFT, MIN_SHIFT};

/// Result of a single encryption, ready for display or serialization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CipherReport {
    /// Input text after case normalization
    pub input: String,
    /// Shift amount applied
    pub shift: ShiftAmount,
    /// Rotated output text
    pub output: String,
}
