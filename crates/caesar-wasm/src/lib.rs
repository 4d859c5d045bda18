//! Caesar WASM - WebAssembly bindings for the Caesar cipher
//!
//! This crate exposes the caesar-core validation and rotation functions to
//! JavaScript/TypeScript applications.
//!
//! # Usage
//!
//! ```typescript
//! import init, { caesar_shift, is_valid_text } from '@caesar/wasm';
//!
//! await init();
//!
//! if (is_valid_text(input)) {
//!   console.log(caesar_shift(input, 3));
//! }
//! ```

use wasm_bindgen::prelude::*;

mod cipher;

pub use cipher::{caesar_report, caesar_shift, is_valid_shift, is_valid_text};

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}
