mod cli;
mod error;
mod prompt;
mod report;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use caesar_core::encrypt_report;

use crate::{
    cli::{usage, Command, Options},
    error::CliResult,
    prompt::{prompt_shift, prompt_text},
    report::write_report,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let result = Command::parse().and_then(|command| match command {
        Command::Help => {
            print!("{}", usage());
            Ok(())
        }
        Command::Encrypt(options) => run(options, &mut io::stdin().lock(), &mut io::stdout()),
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Fill in missing values from the prompts, encrypt, and print the report.
fn run<R: BufRead, W: Write>(options: Options, input: &mut R, output: &mut W) -> CliResult<()> {
    let text = match options.text {
        Some(text) => text,
        None => prompt_text(input, output)?,
    };
    let shift = match options.shift {
        Some(shift) => shift,
        None => prompt_shift(input, output)?,
    };

    let report = encrypt_report(&text, shift)?;
    tracing::info!(
        length = report.input.len(),
        shift = report.shift.get(),
        "encrypted input"
    );

    write_report(output, &report, options.json)
}
