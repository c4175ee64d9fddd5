//! Terminal frontend glue (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`app` so those build and test without terminal
//! crates.

pub mod crossterm;
pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
