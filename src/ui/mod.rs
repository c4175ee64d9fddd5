//! UI layer (thin wrapper over `ratatui`).
//!
//! Views paint into a `Painter` and register click targets in a `UiTree`;
//! only `backend::terminal` touches `ratatui` types.

pub mod backend;
pub mod core;
pub mod widgets;
