//! Side-by-side hex/ASCII line rendering.
//!
//! Rendering is split so that the marker logic never sees terminal literals:
//!
//! - [`style`]: abstract [`Style`] markers and the [`Palette`] that resolves
//!   them at the output boundary
//! - [`markers`]: pure redundancy elimination over a [`crate::classify::Classification`]
//! - [`printable`]: ASCII column filtering
//! - [`line`]: the header, same-mode, diff-mode and ellipsis line layouts
//!
//! ## Entry point
//!
//! ```
//! use hexdiff_core::classify::classify;
//! use hexdiff_core::render::{LineRenderer, PlainPalette};
//!
//! let left = *b"hexdiff!";
//! let right = *b"hexdiff?";
//! let renderer = LineRenderer::new(&PlainPalette);
//! let mut out = Vec::new();
//! renderer
//!     .diff(&mut out, &left, &right, &classify(&left, &right), 0, 0)
//!     .unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("0x0000000000  6865786469666621"));
//! ```

pub mod line;
pub mod markers;
pub mod printable;
pub mod style;

pub use line::LineRenderer;
pub use markers::{highlight, markers, Markers};
pub use printable::printable;
pub use style::{AnsiPalette, Palette, PlainPalette, Style};
