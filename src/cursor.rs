//! Cursor-tracking strategies
//!
//! The controller needs one navigational ability: after painting the trailer
//! block it must return the cursor to the block's top-left corner, so the
//! next operation can clear and repaint from there. Terminals offer two
//! families of sequence for this:
//!
//! - Relative motion: `\r` to reach column 0 and `CSI n A` to move up `n`
//!   rows. (`CSI n F` combines both, but composing `A` with `\r` is the more
//!   widely supported spelling.)
//! - Saved positions: `CSI s` / `CSI u` (and the DEC-private `ESC 7` /
//!   `ESC 8`) ask the terminal itself to remember and restore a position.
//!
//! Save/restore looks attractive because it needs no bookkeeping, but in
//! practice it does not track the row reliably once content wraps at the
//! terminal width: the restore tends to land on the right column and the
//! wrong row. Relative moves at least always do exactly what they say, even
//! when something outside our control has shifted the cursor. The strategies
//! are also documented as extensions and are a little less uniformly
//! supported than plain `A`. So [`RelativeMove`] is the default and only
//! shipped strategy; the trait exists so a save/restore variant can be
//! swapped in without touching the controller, should a terminal ever give
//! cause to.

use std::io::{self, Write};

/// How the controller finds its way back to the top of the trailer block.
///
/// The controller calls [`save_checkpoint`](CursorStrategy::save_checkpoint)
/// whenever the cursor sits at the start of a fresh line directly below the
/// last committed scrollback, and [`rewind`](CursorStrategy::rewind) after a
/// repaint to return there from a known number of lines further down. Both
/// may emit control bytes to the sink; neither may query the terminal.
pub trait CursorStrategy {
    /// Record the current cursor position as the repaint checkpoint.
    fn save_checkpoint(&mut self, sink: &mut dyn Write) -> io::Result<()>;

    /// Return the cursor to the checkpoint's line start from `height` lines
    /// below it.
    fn rewind(&mut self, sink: &mut dyn Write, height: usize) -> io::Result<()>;
}

/// Tracks the checkpoint by counted relative moves, never by asking the
/// terminal to remember anything.
///
/// Saving the checkpoint emits nothing; the controller already knows how many
/// lines it paints below the checkpoint, so rewinding is a single
/// `\r` + `CSI n A`. Robust against the terminal's own width-based wrapping
/// because no absolute column math is involved beyond "start of line".
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeMove;

impl CursorStrategy for RelativeMove {
    fn save_checkpoint(&mut self, _sink: &mut dyn Write) -> io::Result<()> {
        // Nothing to emit: the checkpoint is implied by the counted moves.
        Ok(())
    }

    fn rewind(&mut self, sink: &mut dyn Write, height: usize) -> io::Result<()> {
        // Terminals treat "CSI 0 A" the same as "CSI 1 A", so a zero-height
        // rewind must emit nothing at all.
        if height > 0 {
            write!(sink, "\r\x1b[{}A", height)?;
        }
        Ok(())
    }
}
