//! Interactive prompts for the plaintext and the shift amount.
//!
//! Both prompts loop until a valid value is entered. Reader and writer are
//! passed in so the loops can run against in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use caesar_core::{alphabet, CipherError, ShiftAmount};

use crate::error::CliResult;

pub const TEXT_PROMPT: &str = "Input string to encrypt with the Caesar Cipher (a-z A-Z): ";
pub const TEXT_REJECTED: &str = "Only a-z and A-Z characters are supported.";
pub const SHIFT_PROMPT: &str = "Amount of characters to shift (1-25): ";
pub const SHIFT_REJECTED: &str = "Number has to be between 1 and 25.";

/// Ask for plaintext until a non-empty line of letters is entered.
///
/// Returns the line in canonical (uppercase) case. Empty lines re-prompt
/// without a message.
pub fn prompt_text<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> CliResult<String> {
    loop {
        let Some(line) = ask(input, output, TEXT_PROMPT)? else {
            bail!("standard input closed before a valid string was entered");
        };

        match alphabet::normalize(&line) {
            Ok(text) => return Ok(text),
            Err(CipherError::EmptyInput) => continue,
            Err(e) => {
                tracing::debug!(error = %e, "rejected input text");
                writeln!(output, "{TEXT_REJECTED}")?;
            }
        }
    }
}

/// Ask for a shift amount until an integer in 1..=25 is entered.
pub fn prompt_shift<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> CliResult<ShiftAmount> {
    loop {
        let Some(line) = ask(input, output, SHIFT_PROMPT)? else {
            bail!("standard input closed before a valid shift amount was entered");
        };

        match ShiftAmount::parse(&line) {
            Ok(shift) => return Ok(shift),
            Err(e) => {
                tracing::debug!(error = %e, "rejected shift amount");
                writeln!(output, "{SHIFT_REJECTED}")?;
            }
        }
    }
}

/// Write a prompt and read one line without its terminator. `None` on EOF.
fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> CliResult<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from standard input")?;
    if read == 0 {
        return Ok(None);
    }

    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
