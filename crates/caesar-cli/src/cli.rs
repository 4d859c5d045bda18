use anyhow::{bail, Context};
use caesar_core::{alphabet, ShiftAmount};

use crate::error::CliResult;

/// What the binary was asked to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Encrypt(Options),
    Help,
}

/// Values supplied on the command line. Missing ones are prompted for.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Plaintext, already validated and uppercased.
    pub text: Option<String>,
    pub shift: Option<ShiftAmount>,
    pub json: bool,
}

impl Command {
    pub fn parse() -> CliResult<Self> {
        Self::parse_from(std::env::args().skip(1))
    }

    /// Parse arguments, excluding the program name.
    pub fn parse_from<I>(args: I) -> CliResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        let mut options = Options::default();

        let mut i = 0;
        while i < args.len() {
            let arg = &args[i];
            match arg.as_str() {
                "-h" | "--help" | "help" => return Ok(Command::Help),
                "-t" | "--text" => {
                    i += 1;
                    let Some(value) = args.get(i) else {
                        bail!("missing value after {arg}");
                    };
                    if options.text.is_some() {
                        bail!("--text given more than once");
                    }
                    let text = alphabet::normalize(value)
                        .with_context(|| format!("invalid value for {arg}"))?;
                    options.text = Some(text);
                }
                "-s" | "--shift" => {
                    i += 1;
                    let Some(value) = args.get(i) else {
                        bail!("missing value after {arg}");
                    };
                    if options.shift.is_some() {
                        bail!("--shift given more than once");
                    }
                    let shift = ShiftAmount::parse(value)
                        .with_context(|| format!("invalid value for {arg}"))?;
                    options.shift = Some(shift);
                }
                "--json" => options.json = true,
                other => bail!("unexpected argument `{other}`\n\n{}", usage()),
            }
            i += 1;
        }

        Ok(Command::Encrypt(options))
    }
}

pub fn usage() -> &'static str {
    "Caesar cipher\n\nUsage:\n  caesar [--text <TEXT>] [--shift <1-25>] [--json]\n  caesar --help\n\nMissing values are read interactively from standard input.\nSet RUST_LOG (e.g. RUST_LOG=caesar=debug) to control logging on stderr.\n"
}
