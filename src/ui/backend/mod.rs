//! Rendering backends.
//!
//! The trait keeps `ratatui` types out of the rest of the crate; tests paint
//! into the headless backend instead.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
