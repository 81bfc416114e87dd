//! Comparison loop.
//!
//! Reads one chunk from each stream per iteration, classifies the pair, lets
//! the [`RunCollapser`] decide what to print and renders it. The loop runs
//! while neither stream has ended, the byte limit (if any) is not reached and
//! no interrupt has been requested. Every iteration advances both streams by
//! a full [`CHUNK_SIZE`], short reads included.

use crate::classify::classify;
use crate::collapse::{Action, RunCollapser};
use crate::errors::{HexdiffError, Result};
use crate::interrupt::InterruptFlag;
use crate::options::CompareOptions;
use crate::render::{LineRenderer, Palette};
use crate::source::open_at;
use crate::window::{ByteWindow, Filled, CHUNK_SIZE};
use crate::{log_op_end, log_op_error, log_op_start};
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Instant;

/// Why the loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A stream ended (the final pair, if it held any data, was rendered)
    EndOfInput,
    /// `max_len` bytes were compared
    LimitReached,
    /// The interrupt flag was raised
    Interrupted,
}

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareSummary {
    /// Chunk pairs compared
    pub chunks: u64,
    /// Bytes consumed per stream, counted in whole chunks
    pub bytes_compared: u64,
    pub differing_chunks: u64,
    /// Equal pairs hidden behind an ellipsis
    pub suppressed_chunks: u64,
    pub stop: StopReason,
}

/// Per-stream position bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamState {
    skip: u64,
    consumed: u64,
    ended: bool,
}

impl StreamState {
    pub fn new(skip: u64) -> Self {
        Self {
            skip,
            consumed: 0,
            ended: false,
        }
    }

    /// Offset of the chunk about to be rendered.
    pub fn offset(&self) -> u64 {
        self.skip.wrapping_add(self.consumed)
    }

    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    fn observe(&mut self, filled: &Filled) {
        if filled.is_short() {
            self.ended = true;
        }
    }

    fn advance(&mut self) {
        self.consumed = self.consumed.saturating_add(CHUNK_SIZE as u64);
    }
}

fn emit(result: io::Result<()>) -> Result<()> {
    result.map_err(|source| HexdiffError::Write { source })
}

/// Compare two streams and render the result to `out`.
///
/// Writes the header first, then one line per retained chunk pair.
///
/// # Errors
///
/// - `Read` if either stream fails
/// - `Write` if `out` fails
pub fn compare<L, R, W>(
    left: &mut ByteWindow<L>,
    right: &mut ByteWindow<R>,
    options: &CompareOptions,
    renderer: &LineRenderer<'_>,
    interrupt: &InterruptFlag,
    out: &mut W,
) -> Result<CompareSummary>
where
    L: Read,
    R: Read,
    W: Write + ?Sized,
{
    let started = Instant::now();
    log_op_start!(
        "compare",
        left = left.name(),
        right = right.name(),
        skip1 = options.skip1,
        skip2 = options.skip2,
        max_len = options.max_len,
        show_all = options.show_all,
    );

    match run(left, right, options, renderer, interrupt, out) {
        Ok(summary) => {
            log_op_end!(
                "compare",
                duration_ms = started.elapsed().as_millis() as u64,
                chunks = summary.chunks,
                bytes_compared = summary.bytes_compared,
                differing_chunks = summary.differing_chunks,
                stop = ?summary.stop,
            );
            Ok(summary)
        }
        Err(err) => {
            log_op_error!(
                "compare",
                &err,
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn run<L, R, W>(
    left: &mut ByteWindow<L>,
    right: &mut ByteWindow<R>,
    options: &CompareOptions,
    renderer: &LineRenderer<'_>,
    interrupt: &InterruptFlag,
    out: &mut W,
) -> Result<CompareSummary>
where
    L: Read,
    R: Read,
    W: Write + ?Sized,
{
    emit(renderer.header(out))?;

    let mut lstate = StreamState::new(options.skip1);
    let mut rstate = StreamState::new(options.skip2);
    let mut collapser = RunCollapser::new(options.show_all);
    let mut chunks = 0u64;
    let mut differing_chunks = 0u64;
    let mut suppressed_chunks = 0u64;

    let stop = loop {
        if lstate.is_ended() || rstate.is_ended() {
            break StopReason::EndOfInput;
        }
        if !options.within_limit(lstate.consumed()) {
            break StopReason::LimitReached;
        }
        if interrupt.is_requested() {
            break StopReason::Interrupted;
        }

        let a = left.next_chunk()?;
        let b = right.next_chunk()?;
        lstate.observe(&a);
        rstate.observe(&b);

        // Both streams ended exactly on a chunk boundary: nothing left to show.
        if a.is_empty() && b.is_empty() {
            break StopReason::EndOfInput;
        }

        let class = classify(&a.chunk, &b.chunk);
        let action = collapser.step(&class);
        tracing::trace!(
            left_offset = lstate.offset(),
            right_offset = rstate.offset(),
            action = ?action,
            "chunk"
        );

        match action {
            Action::Diff => {
                differing_chunks += 1;
                emit(renderer.diff(
                    out,
                    &a.chunk,
                    &b.chunk,
                    &class,
                    lstate.offset(),
                    rstate.offset(),
                ))?;
            }
            Action::Same => emit(renderer.same(
                out,
                &a.chunk,
                &b.chunk,
                lstate.offset(),
                rstate.offset(),
            ))?,
            Action::Ellipsis => {
                suppressed_chunks += 1;
                emit(renderer.ellipsis(out))?;
            }
            Action::Suppress => suppressed_chunks += 1,
        }

        chunks += 1;
        lstate.advance();
        rstate.advance();
    };

    emit(out.flush())?;

    Ok(CompareSummary {
        chunks,
        bytes_compared: lstate.consumed(),
        differing_chunks,
        suppressed_chunks,
        stop,
    })
}

/// Open both files at their starting offsets and compare them.
///
/// Both files are closed on every exit path. Every failure is logged once:
/// open and seek errors here, read and write errors by [`compare`].
///
/// # Errors
///
/// - `Open` / `Seek` if either file cannot be prepared
/// - anything [`compare`] returns
pub fn compare_files<W: Write + ?Sized>(
    path1: &Path,
    path2: &Path,
    options: &CompareOptions,
    palette: &dyn Palette,
    interrupt: &InterruptFlag,
    out: &mut W,
) -> Result<CompareSummary> {
    let started = Instant::now();
    let opened = open_at(path1, options.skip1)
        .and_then(|left| Ok((left, open_at(path2, options.skip2)?)));
    let (mut left, mut right) = match opened {
        Ok(pair) => pair,
        Err(err) => {
            log_op_error!(
                "open_at",
                &err,
                duration_ms = started.elapsed().as_millis() as u64
            );
            return Err(err);
        }
    };
    let renderer = LineRenderer::new(palette);
    compare(&mut left, &mut right, options, &renderer, interrupt, out)
}
