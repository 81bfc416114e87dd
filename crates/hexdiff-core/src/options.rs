//! Comparison settings and numeric argument parsing.

use crate::errors::{HexdiffError, Result};

/// Settings for one comparison run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompareOptions {
    /// Starting offset into the left stream
    pub skip1: u64,
    /// Starting offset into the right stream
    pub skip2: u64,
    /// Maximum bytes to compare per stream; 0 means unlimited
    pub max_len: u64,
    /// Print every equal chunk instead of collapsing runs
    pub show_all: bool,
}

impl CompareOptions {
    /// Whether another chunk may start after `consumed` bytes.
    pub fn within_limit(&self, consumed: u64) -> bool {
        self.max_len == 0 || consumed < self.max_len
    }
}

/// Parse an unsigned byte count or offset.
///
/// Base is chosen by prefix: `0x`/`0X` is hexadecimal, a leading `0` is
/// octal, anything else is decimal. Signs, whitespace, trailing garbage and
/// values that overflow `u64` are rejected.
///
/// # Errors
///
/// Returns `HexdiffError::Usage` naming the offending text.
pub fn parse_offset(text: &str) -> Result<u64> {
    let (digits, radix) = if let Some(hex) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        (hex, 16)
    } else if text.len() > 1 && text.starts_with('0') {
        (&text[1..], 8)
    } else {
        (text, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(HexdiffError::usage(format!("invalid number: '{}'", text)));
    }

    u64::from_str_radix(digits, radix)
        .map_err(|_| HexdiffError::usage(format!("number out of range: '{}'", text)))
}
