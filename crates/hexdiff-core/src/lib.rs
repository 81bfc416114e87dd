//! hexdiff core - positional side-by-side binary comparison
//!
//! This crate provides the comparison-and-rendering engine behind the
//! `hexdiff` command:
//! - Fixed-width chunk reading with zero-fill at end-of-input
//! - Per-byte classification of chunk pairs
//! - Highlight rendering with redundant-marker elimination
//! - Equal-run collapsing
//! - The comparison loop with byte limit and cooperative interrupt
//!
//! Streams are compared strictly by position relative to their own starting
//! offsets; there is no alignment or insertion detection.

pub mod classify;
pub mod collapse;
pub mod driver;
pub mod errors;
pub mod interrupt;
pub mod logging_facility;
pub mod options;
pub mod render;
pub mod source;
pub mod window;

pub use hexdiff_core_types as core_types;

// Re-export commonly used types
pub use classify::{classify, Classification};
pub use collapse::{Action, RunCollapser, RunState};
pub use driver::{compare, compare_files, CompareSummary, StopReason, StreamState};
pub use errors::{ExError, ExErrorKind, HexdiffError, Result};
pub use interrupt::InterruptFlag;
pub use options::{parse_offset, CompareOptions};
pub use render::{AnsiPalette, LineRenderer, Palette, PlainPalette, Style};
pub use window::{ByteWindow, Chunk, Filled, CHUNK_SIZE};
