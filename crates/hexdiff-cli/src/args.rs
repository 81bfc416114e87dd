//! Command-line surface
//!
//! Usage: hexdiff [-ah] [-n len] file1 file2 [skip1 [skip2]]

use clap::{Parser, ValueEnum};
use hexdiff_core::{parse_offset, AnsiPalette, Palette, PlainPalette};
use std::path::PathBuf;

const EXTENDED_HELP: &str = "\
Numbers may be decimal, 0x-prefixed hexadecimal or 0-prefixed octal.
Runs of identical lines are shown once followed by '...' unless -a is given.";

#[derive(Debug, Parser)]
#[command(name = "hexdiff", version)]
#[command(about = "Side-by-side hexadecimal differencing", long_about = None)]
#[command(override_usage = "hexdiff [-ah] [-n len] file1 file2 [skip1 [skip2]]")]
#[command(after_help = EXTENDED_HELP)]
pub struct Cli {
    /// First file
    pub file1: PathBuf,

    /// Second file
    pub file2: PathBuf,

    /// Starting offset for file1
    #[arg(value_parser = parse_offset)]
    pub skip1: Option<u64>,

    /// Starting offset for file2
    #[arg(value_parser = parse_offset)]
    pub skip2: Option<u64>,

    /// Print all lines
    #[arg(short = 'a')]
    pub all: bool,

    /// Maximum number of bytes to compare (0 = unlimited)
    #[arg(short = 'n', value_name = "len", value_parser = parse_offset, default_value_t = 0)]
    pub max_len: u64,

    /// When to highlight differences
    #[arg(long, value_enum, value_name = "when", default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Log operation details to standard error
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Always emit ANSI colour sequences
    Always,
    /// Never emit colour sequences
    Never,
    /// Colour only when standard output is a terminal
    Auto,
}

impl ColorMode {
    pub fn palette(self, stdout_is_terminal: bool) -> &'static dyn Palette {
        match self {
            ColorMode::Always => &AnsiPalette,
            ColorMode::Never => &PlainPalette,
            ColorMode::Auto if stdout_is_terminal => &AnsiPalette,
            ColorMode::Auto => &PlainPalette,
        }
    }
}
