//! Abstract highlight markers and their concrete resolution.

/// A styling directive emitted ahead of a byte (or an offset) in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// Back to the default style
    Reset,
    /// Byte is identical on both sides
    Match,
    /// Byte differs between the sides
    Difference,
}

/// Resolves abstract [`Style`] markers to output literals.
pub trait Palette {
    fn marker(&self, style: Style) -> &'static str;
}

/// ANSI SGR colours: green for matches, red for differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiPalette;

impl Palette for AnsiPalette {
    fn marker(&self, style: Style) -> &'static str {
        match style {
            Style::Reset => "\x1b[0m",
            Style::Match => "\x1b[32m",
            Style::Difference => "\x1b[31m",
        }
    }
}

/// No styling at all; the layout is otherwise identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPalette;

impl Palette for PlainPalette {
    fn marker(&self, _style: Style) -> &'static str {
        ""
    }
}
