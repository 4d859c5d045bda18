use std::io::Write;

use caesar_core::CipherReport;

use crate::error::CliResult;

/// Print the normalized input, the shift, and the ciphertext.
///
/// Labelled text by default, one JSON object per line with `json`.
pub fn write_report<W: Write>(output: &mut W, report: &CipherReport, json: bool) -> CliResult<()> {
    if json {
        serde_json::to_writer(&mut *output, report)?;
        writeln!(output)?;
    } else {
        writeln!(output, "User Input:            {}", report.input)?;
        writeln!(output, "Shift Amount:          {}", report.shift)?;
        writeln!(output, "Caesar Shifted Output: {}", report.output)?;
    }
    output.flush()?;
    Ok(())
}
