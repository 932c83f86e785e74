//! Rendering backends.
//!
//! Views only produce `PaintCmd`s. A backend replays them onto a cell buffer: the terminal
//! backend wraps `ratatui`, the test backend keeps a plain in-memory grid.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

// The concrete terminal backend lives in `ratatui.rs`, but the module name stays generic so the
// rest of the codebase does not need to mention ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
