//! Render controller for trailer-pinned terminal output
//!
//! The controller owns a terminal-connected writer and maintains one
//! invariant between operations: the terminal's cursor is parked at the top
//! of the currently rendered trailer block, the partial line (if one is open)
//! counting as the block's first line. Every operation therefore starts by
//! clearing from the cursor to the end of the screen, which wipes exactly the
//! previously painted block, then writes any new scrollback and repaints the
//! trailer beneath it.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::cursor::{CursorStrategy, RelativeMove};
use crate::error::Result;

/// CSI J: clear from the cursor to the end of the screen.
const CLEAR_TO_END: &[u8] = b"\x1b[J";

/// CSI m: reset all character styles and attributes.
const STYLE_RESET: &[u8] = b"\x1b[m";

/// Shape of a single write with respect to line breaks.
///
/// Classified once per write and then dispatched, so the split point is never
/// re-derived downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteShape {
    /// No line break anywhere; the whole chunk extends the partial line.
    NoBreak,
    /// The final byte is a line break; the chunk commits cleanly.
    TrailingBreak,
    /// The last line break sits before the final byte; the bytes after it
    /// open a new partial line. Carries the index of that break.
    MixedBreak(usize),
}

impl WriteShape {
    fn classify(msg: &[u8]) -> Self {
        match msg.iter().rposition(|&b| b == b'\n') {
            None => WriteShape::NoBreak,
            Some(idx) if idx == msg.len() - 1 => WriteShape::TrailingBreak,
            Some(idx) => WriteShape::MixedBreak(idx),
        }
    }
}

/// Wraps a terminal-connected writer and keeps "trailer" content pinned to
/// the bottom of the output.
///
/// Bytes written through [`Controller::write`] (or the [`io::Write`] impl)
/// become scrollback, rendered above the trailer; [`Controller::set_trailer`]
/// replaces the pinned block wholesale. A line of scrollback that has not yet
/// received its terminating break is buffered and painted as if it were the
/// first trailer line until a later write completes it.
///
/// The sink is exclusively owned for the controller's lifetime. Nothing else
/// should write to it: uncontrolled output that ends with a line break will
/// be absorbed into scrollback at the next repaint, but uncontrolled output
/// without one gets overwritten, starting at the parked cursor. That is the
/// accepted degradation mode, not something the controller tries to detect.
///
/// There is no internal locking. Every operation takes `&mut self`, so a
/// controller shared across threads belongs behind a `Mutex` whose guard is
/// held for each whole call; the clear/content/repaint sequence must never
/// interleave with another on the same sink.
pub struct Controller<W: Write, S: CursorStrategy = RelativeMove> {
    sink: W,
    strategy: S,
    /// Scrollback bytes since the last line break. Never contains `b'\n'`.
    partial: Vec<u8>,
    /// Trailer lines in display order, top to bottom.
    trailer: Vec<Vec<u8>>,
}

impl<W: Write> Controller<W> {
    /// Create a controller bound to `sink`, tracking the repaint checkpoint
    /// with counted relative moves.
    pub fn new(sink: W) -> Result<Self> {
        Self::with_strategy(sink, RelativeMove)
    }
}

impl<W: Write, S: CursorStrategy> Controller<W, S> {
    /// Create a controller with an explicit cursor-tracking strategy.
    ///
    /// Wherever the cursor sits when this is called becomes the initial
    /// checkpoint; content already on screen above it is left alone.
    pub fn with_strategy(sink: W, strategy: S) -> Result<Self> {
        let mut controller = Self {
            sink,
            strategy,
            partial: Vec::new(),
            trailer: Vec::new(),
        };
        controller
            .strategy
            .save_checkpoint(&mut controller.sink)?;
        Ok(controller)
    }

    /// Append `msg` to the scrollback and repaint the trailer beneath it.
    ///
    /// The chunk may contain any number of line breaks. Everything up to and
    /// including the last break is committed to the sink now (preceded by the
    /// buffered partial line, if any); the remainder becomes the new partial
    /// line. The full input is always accepted, so the returned count is
    /// `msg.len()`.
    ///
    /// On a sink error the buffered partial still reflects exactly what was
    /// queued, but on-screen state is unspecified; discard the controller.
    pub fn write(&mut self, msg: &[u8]) -> Result<usize> {
        // The cursor was parked at the top of the old trailer block, so
        // clearing from here wipes exactly that block and nothing above it.
        self.sink.write_all(CLEAR_TO_END)?;

        let shape = WriteShape::classify(msg);
        trace!(len = msg.len(), ?shape, "scrollback write");
        match shape {
            WriteShape::NoBreak => {
                self.partial.extend_from_slice(msg);
            }
            WriteShape::TrailingBreak => {
                self.flush_partial()?;
                self.sink.write_all(msg)?;
                self.strategy.save_checkpoint(&mut self.sink)?;
            }
            WriteShape::MixedBreak(idx) => {
                self.flush_partial()?;
                self.sink.write_all(&msg[..=idx])?;
                self.strategy.save_checkpoint(&mut self.sink)?;
                self.partial.extend_from_slice(&msg[idx + 1..]);
            }
        }

        self.paint_trailer()?;
        Ok(msg.len())
    }

    /// Replace the trailer wholesale and repaint it.
    ///
    /// Lines are opaque byte sequences and may carry embedded style codes,
    /// but must not contain line breaks; rendering is undefined if they do.
    /// An empty `lines` removes the trailer. Scrollback history and the
    /// partial line are untouched.
    pub fn set_trailer(&mut self, lines: Vec<Vec<u8>>) -> Result<()> {
        debug!(lines = lines.len(), "trailer replaced");
        self.trailer = lines;
        self.sink.write_all(CLEAR_TO_END)?;
        self.paint_trailer()
    }

    /// Remove the trailer entirely. An open partial line stays visible.
    pub fn clear_trailer(&mut self) -> Result<()> {
        self.set_trailer(Vec::new())
    }

    /// The buffered partial line: everything written since the most recent
    /// line break.
    pub fn partial(&self) -> &[u8] {
        &self.partial
    }

    /// The current trailer lines, top to bottom.
    pub fn trailer_lines(&self) -> &[Vec<u8>] {
        &self.trailer
    }

    /// Number of lines the repainted block occupies: the trailer lines, plus
    /// one if a partial line is open.
    pub fn trailer_height(&self) -> usize {
        self.trailer.len() + usize::from(!self.partial.is_empty())
    }

    /// Consume the controller and return the sink.
    ///
    /// The cursor is left wherever the last repaint parked it, at the top of
    /// the trailer block; the block itself is still on screen.
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Commit the buffered partial line to the sink, without its break.
    fn flush_partial(&mut self) -> Result<()> {
        if !self.partial.is_empty() {
            self.sink.write_all(&self.partial)?;
            self.partial.clear();
        }
        Ok(())
    }

    /// Repaint the trailer block below the checkpoint.
    ///
    /// Expects the region below the cursor to have been cleared and any new
    /// scrollback already written. Ends by parking the cursor back at the top
    /// of the block. Parking here, rather than just before the next repaint,
    /// is what makes uncontrolled writes degrade gracefully: if they end with
    /// a line break they become ordinary scrollback instead of being smashed
    /// by our next clear. The cost is that the idle cursor blinks above the
    /// trailer rather than below it.
    fn paint_trailer(&mut self) -> Result<()> {
        if !self.partial.is_empty() {
            self.sink.write_all(&self.partial)?;
            self.sink.write_all(b"\n")?;
        }
        // Styles from scrollback content must not leak into the trailer, nor
        // into the next emission of the partial line.
        self.sink.write_all(STYLE_RESET)?;
        for line in &self.trailer {
            self.sink.write_all(line)?;
            self.sink.write_all(b"\n")?;
        }
        let height = self.trailer_height();
        self.strategy.rewind(&mut self.sink, height)?;
        Ok(())
    }
}

impl<W: Write, S: CursorStrategy> io::Write for Controller<W, S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Controller::write(self, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
