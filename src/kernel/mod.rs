//! Headless application core (state/action/store).
//!
//! Nothing in here knows about terminals or painting; the views read a
//! `TodoState` snapshot and the app feeds `Action`s back in.

pub mod action;
pub mod id;
pub mod state;
pub mod stats;
pub mod store;

pub use action::Action;
pub use id::{IdGenerator, TaskId};
pub use state::{FocusTarget, Task, TodoState};
pub use stats::{task_noun, TaskStats};
pub use store::{DispatchResult, Store};
