//! todolist: a single-list task manager.
//!
//! Layers:
//! - kernel: tasks, pending input, derived stats, and the action store
//! - views: pure mapper from state to a visual tree, plus its painter
//! - ui: geometry, paint commands, widgets, and rendering backends
//! - services: settings file and key map
//! - app: `TodoApp`, which routes input events to actions
//! - tui: crossterm/ratatui glue (feature `tui`)

pub mod app;
pub mod core;
pub mod kernel;
pub mod services;
#[cfg(feature = "tui")]
pub mod tui;
pub mod ui;
pub mod views;
