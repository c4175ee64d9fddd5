//! Small input primitives painted through `Ui`.

pub mod button;
pub mod checkbox;
pub mod progress;
pub mod text_input;

pub use button::{Button, ButtonStyles};
pub use checkbox::Checkbox;
pub use progress::ProgressBar;
pub use text_input::{TextInput, TextInputStyles};
