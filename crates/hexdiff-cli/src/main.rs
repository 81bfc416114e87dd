//! hexdiff CLI
//!
//! Compares two files byte-for-byte from given starting offsets and prints a
//! side-by-side hexadecimal/ASCII view highlighting differences.

use clap::error::ErrorKind;
use clap::Parser;
use hexdiff_core::logging_facility::{self, Profile};
use hexdiff_core::{compare_files, CompareOptions, InterruptFlag};
use std::io::{self, BufWriter, IsTerminal};
use std::process::ExitCode;

mod args;
mod signal;

use args::Cli;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(e),
    };

    logging_facility::init(if cli.verbose {
        Profile::Verbose
    } else {
        Profile::Quiet
    });

    let interrupt = InterruptFlag::new();
    if let Err(e) = signal::install_ctrl_c(interrupt.clone()) {
        tracing::warn!(error = %e, "Ctrl-C handler not installed");
    }

    let options = CompareOptions {
        skip1: cli.skip1.unwrap_or(0),
        skip2: cli.skip2.unwrap_or(0),
        max_len: cli.max_len,
        show_all: cli.all,
    };
    let palette = cli.color.palette(io::stdout().is_terminal());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match compare_files(
        &cli.file1,
        &cli.file2,
        &options,
        palette,
        &interrupt,
        &mut out,
    ) {
        Ok(summary) => {
            tracing::debug!(?summary, "comparison finished");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Help and version go to standard error with success status; anything else
/// is a usage error.
fn report_parse_error(e: clap::Error) -> ExitCode {
    eprint!("{}", e.render());
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
