//! WASM bindings for Caesar encryption.
//!
//! Validation failures cross into JavaScript as thrown strings carrying the
//! core error message.

use caesar_core::{alphabet, encrypt_report, rotate, ShiftAmount};
use wasm_bindgen::prelude::*;

/// Encrypt text with a Caesar shift.
///
/// # Arguments
///
/// * `text` - Letters a-z or A-Z only, non-empty
/// * `amount` - Shift between 1 and 25
///
/// # Returns
///
/// The uppercase ciphertext, same length as `text`.
///
/// # Example (TypeScript)
///
/// ```typescript
/// caesar_shift("hello", 3); // "KHOOR"
/// ```
#[wasm_bindgen]
pub fn caesar_shift(text: &str, amount: i32) -> Result<String, JsValue> {
    rotate(text, amount as i64).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encrypt text and return `{ input, shift, output }`.
///
/// `input` is the uppercased plaintext.
#[wasm_bindgen]
pub fn caesar_report(text: &str, amount: i32) -> Result<JsValue, JsValue> {
    let shift = ShiftAmount::new(amount as i64).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let report = encrypt_report(text, shift).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check that text is non-empty and made only of letters a-z/A-Z.
#[wasm_bindgen]
pub fn is_valid_text(text: &str) -> bool {
    alphabet::is_valid_text(text)
}

/// Check that a shift amount is between 1 and 25.
#[wasm_bindgen]
pub fn is_valid_shift(amount: i32) -> bool {
    ShiftAmount::new(amount as i64).is_ok()
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use caesar_core::CipherReport;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_caesar_shift() {
        assert_eq!(caesar_shift("hello", 3).unwrap(), "KHOOR");
        assert_eq!(caesar_shift("TESTABCXYZ", 6).unwrap(), "ZKYZGHIDEF");
    }

    #[wasm_bindgen_test]
    fn test_caesar_shift_errors() {
        assert!(caesar_shift("", 5).is_err());
        assert!(caesar_shift("A1B", 3).is_err());
        assert!(caesar_shift("HELLO", 26).is_err());
    }

    #[wasm_bindgen_test]
    fn test_caesar_report() {
        let value = caesar_report("xyz", 3).unwrap();
        let report: CipherReport = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(report.input, "XYZ");
        assert_eq!(report.shift.get(), 3);
        assert_eq!(report.output, "ABC");
    }

    #[wasm_bindgen_test]
    fn test_caesar_report_error_message() {
        let err = caesar_report("HELLO", 0).unwrap_err();
        assert!(err.as_string().unwrap().contains("out of range"));
    }
}
