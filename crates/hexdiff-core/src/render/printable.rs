//! ASCII column filtering.

use crate::window::Chunk;

/// Replacement shown for bytes outside the printable ASCII range.
pub const PLACEHOLDER: u8 = b'.';

/// True for 0x20..=0x7e.
pub fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

/// Working copy of `chunk` with non-printable bytes replaced by `.`.
///
/// The input is untouched so the hex column still sees the raw values.
pub fn printable(chunk: &Chunk) -> Chunk {
    chunk.map(|b| if is_printable(b) { b } else { PLACEHOLDER })
}
