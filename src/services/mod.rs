//! Startup services: the settings file and the key map built from it.

pub mod keybinding;
pub mod settings;

pub use keybinding::{KeybindingContext, KeybindingService};
pub use settings::{
    get_settings_path, load_settings, load_settings_or_default, Settings, SettingsError,
    ThemeSettings, ViewSettings,
};
