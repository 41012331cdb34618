//! Terminal Trailer Library
//!
//! Renders a continuously scrolling stream of output ("scrollback") to a
//! terminal while keeping a replaceable block of status lines (the "trailer")
//! pinned directly below the newest scrollback line. No full-screen or
//! alternate-buffer management is involved; the whole scheme rests on three
//! widely supported ANSI sequences (clear to end of screen, relative cursor
//! up, style reset).
//!
//! - `controller`: The render controller that owns the sink, the partial-line
//!   buffer, and the trailer block
//! - `cursor`: Cursor-tracking strategies for returning to the repaint
//!   checkpoint
//! - `error`: Error types

pub mod controller;
pub mod cursor;
pub mod error;

pub use controller::Controller;
pub use cursor::{CursorStrategy, RelativeMove};
pub use error::{Error, Result};
