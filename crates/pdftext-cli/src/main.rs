use std::io::Read;
use std::process::ExitCode;

use anyhow::{Context, bail};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use clap::Parser;

/// Extract text from a PDF supplied as base64 on standard input.
///
/// Writes the extracted text to standard output, or an `ERROR:` prefixed
/// message to standard error with a nonzero exit code.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {}

fn main() -> ExitCode {
    Cli::parse();

    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("ERROR: Failed to read stdin: {e}");
        return ExitCode::FAILURE;
    }

    match run(&input) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// One linear pass: trim -> base64-decode -> extract. Each stage fails fast;
/// later stages are never reached after a failure.
fn run(input: &str) -> anyhow::Result<String> {
    let input = input.trim();
    if input.is_empty() {
        bail!("No input received");
    }

    let data = STANDARD
        .decode(input)
        .context("Failed to decode base64")?;

    let extracted = pdftext_core::extract(&data).context("Failed to extract text")?;
    Ok(extracted.text)
}
