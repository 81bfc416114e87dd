use hexdiff_core::{
    compare, ByteWindow, CompareOptions, CompareSummary, InterruptFlag, LineRenderer, Palette,
    PlainPalette,
};
use std::io::Cursor;

/// Compare two in-memory buffers and return the rendered text
#[allow(dead_code)]
pub fn run_with(
    left: &[u8],
    right: &[u8],
    options: &CompareOptions,
    palette: &dyn Palette,
    interrupt: &InterruptFlag,
) -> (String, CompareSummary) {
    let mut l = ByteWindow::new(Cursor::new(left.to_vec()), "left");
    let mut r = ByteWindow::new(Cursor::new(right.to_vec()), "right");
    let renderer = LineRenderer::new(palette);
    let mut out = Vec::new();
    let summary = compare(&mut l, &mut r, options, &renderer, interrupt, &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

/// Plain-palette comparison with default interrupt flag
#[allow(dead_code)]
pub fn run_plain(left: &[u8], right: &[u8], options: &CompareOptions) -> (String, CompareSummary) {
    run_with(left, right, options, &PlainPalette, &InterruptFlag::new())
}

/// Rendered lines after the header
#[allow(dead_code)]
pub fn body_lines(text: &str) -> Vec<&str> {
    text.lines().skip(1).collect()
}
