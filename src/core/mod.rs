//! Frontend-facing primitives shared by the app and the terminal adapter:
//! input events, semantic commands and the `View` contract.

pub mod command;
pub mod event;
pub mod view;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent};
pub use view::{EventResult, View};
