//! Redundant-marker elimination for diff-mode lines.
//!
//! Every byte of a diff-mode line is tagged [`Style::Match`] or
//! [`Style::Difference`]. A marker is only emitted where the tag changes
//! from the one in effect after the previous byte. The marker ahead of
//! position 0 is additionally dropped when positions 0 and the last one are
//! both `Difference`: the hex column follows an offset that is always printed
//! in `Difference`, and the ASCII column follows the last hex byte, so the
//! style already in effect is correct in both places.
//!
//! The result depends only on the classification, so one marker set serves
//! the hex and ASCII columns of both sides.

use super::style::Style;
use crate::classify::Classification;
use crate::window::CHUNK_SIZE;

/// Marker to emit before each byte position, if any.
pub type Markers = [Option<Style>; CHUNK_SIZE];

/// Highlight tag per position.
pub fn highlight(class: &Classification) -> [Style; CHUNK_SIZE] {
    class.flags().map(|eq| {
        if eq {
            Style::Match
        } else {
            Style::Difference
        }
    })
}

pub fn markers(class: &Classification) -> Markers {
    let tags = highlight(class);
    let mut out: Markers = tags.map(Some);

    let mut in_effect = tags[0];
    for (slot, &tag) in out.iter_mut().zip(tags.iter()).skip(1) {
        if tag == in_effect {
            *slot = None;
        } else {
            in_effect = tag;
        }
    }

    if tags[0] == Style::Difference && tags[CHUNK_SIZE - 1] == Style::Difference {
        out[0] = None;
    }

    out
}
