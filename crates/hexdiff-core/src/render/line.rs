//! Line layouts.
//!
//! Each side of a line is `0x` + a 10-digit hex offset, two spaces, the hex
//! dump, one space and the ASCII dump. Sides are separated by four spaces.

use super::markers::{markers, Markers};
use super::printable::printable;
use super::style::{Palette, Style};
use crate::classify::Classification;
use crate::window::{Chunk, CHUNK_SIZE};
use std::io::{self, Write};

const OFFSET_LABEL: &str = "   offset      ";
const SIDE_SEPARATOR: &str = "    ";
const ELLIPSIS: &str = "...";

/// Writes formatted lines through a [`Palette`].
#[derive(Clone, Copy)]
pub struct LineRenderer<'p> {
    palette: &'p dyn Palette,
}

impl<'p> LineRenderer<'p> {
    pub fn new(palette: &'p dyn Palette) -> Self {
        Self { palette }
    }

    fn lit(&self, style: Option<Style>) -> &'static str {
        style.map_or("", |s| self.palette.marker(s))
    }

    /// Column header naming the offset, hex and ASCII columns of both sides.
    pub fn header<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let mut side = String::from(OFFSET_LABEL);
        for i in 0..CHUNK_SIZE {
            side.push_str(&format!("{:<2x}", i));
        }
        for i in 0..CHUNK_SIZE {
            side.push_str(&format!("{:x}", i));
        }

        let line = format!(
            "{}{}{}{}\n",
            self.lit(Some(Style::Reset)),
            side,
            SIDE_SEPARATOR,
            side
        );
        out.write_all(line.as_bytes())
    }

    /// Same-mode: a fully equal pair, printed without per-byte markers.
    pub fn same<W: Write + ?Sized>(
        &self,
        out: &mut W,
        left: &Chunk,
        right: &Chunk,
        left_offset: u64,
        right_offset: u64,
    ) -> io::Result<()> {
        let none: Markers = [None; CHUNK_SIZE];
        let mut line = String::new();
        self.push_side(&mut line, Some(Style::Reset), left_offset, left, &none);
        line.push_str(SIDE_SEPARATOR);
        self.push_side(&mut line, None, right_offset, right, &none);
        line.push('\n');
        out.write_all(line.as_bytes())
    }

    /// Diff-mode: each byte highlighted by `class`, redundant markers elided,
    /// followed by a trailing reset.
    pub fn diff<W: Write + ?Sized>(
        &self,
        out: &mut W,
        left: &Chunk,
        right: &Chunk,
        class: &Classification,
        left_offset: u64,
        right_offset: u64,
    ) -> io::Result<()> {
        let marks = markers(class);
        let lead = Some(Style::Difference);
        let mut line = String::new();
        self.push_side(&mut line, lead, left_offset, left, &marks);
        line.push_str(SIDE_SEPARATOR);
        self.push_side(&mut line, lead, right_offset, right, &marks);
        line.push('\n');
        line.push_str(self.lit(Some(Style::Reset)));
        out.write_all(line.as_bytes())
    }

    /// Stand-in for the collapsed remainder of an equal run.
    pub fn ellipsis<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", ELLIPSIS)
    }

    fn push_side(
        &self,
        line: &mut String,
        lead: Option<Style>,
        offset: u64,
        chunk: &Chunk,
        marks: &Markers,
    ) {
        line.push_str(self.lit(lead));
        line.push_str(&format!("0x{:010x}  ", offset));
        for (byte, mark) in chunk.iter().zip(marks) {
            line.push_str(self.lit(*mark));
            line.push_str(&format!("{:02x}", byte));
        }
        line.push(' ');
        for (byte, mark) in printable(chunk).iter().zip(marks) {
            line.push_str(self.lit(*mark));
            line.push(char::from(*byte));
        }
    }
}
