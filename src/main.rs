//! Binary entry point for linesum-rs.
//!
//! Reads standard input to completion, sums the first line, prints the sum
//! twice.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::Parser;
use linesum_rs::cli::output::{OutputFormat, format_error};
use linesum_rs::cli::{Cli, execute};
use linesum_rs::io::read_stdin;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = OutputFormat::parse(&cli.format);

    let input = match read_stdin() {
        Ok(input) => input,
        Err(e) => {
            let error_output = format_error(&e, format);
            match format {
                OutputFormat::Json => {
                    // JSON errors go to stdout for programmatic parsing
                    println!("{error_output}");
                }
                OutputFormat::Text => {
                    eprintln!("Error: {error_output}");
                }
            }
            return ExitCode::FAILURE;
        }
    };

    if cli.verbose {
        eprintln!("read {} bytes from stdin", input.len());
    }

    let output = execute(&input, format);

    // Handle broken pipe gracefully (e.g., when piped to `head` or `jq`)
    if let Err(e) = write!(io::stdout(), "{output}")
        && e.kind() != io::ErrorKind::BrokenPipe
    {
        eprintln!("Error writing to stdout: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
