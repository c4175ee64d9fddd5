//! UI theme: the configurable colours in one place, turned into the concrete
//! styles the todo view paints with.

use crate::services::ThemeSettings;
use crate::ui::core::style::{Color, Mod, Style};
use crate::views::todo::TodoStyles;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub title_fg: Color,
    pub subtitle_fg: Color,
    pub text_fg: Color,
    pub muted_fg: Color,
    pub accent_fg: Color,
    pub border: Color,
    pub focus_border: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub delete_fg: Color,
    pub selected_bg: Color,
    pub progress_fg: Color,
    pub progress_track_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            title_fg: Color::Reset,
            subtitle_fg: Color::Indexed(8),
            text_fg: Color::Reset,
            muted_fg: Color::Indexed(8),
            accent_fg: Color::Indexed(2),
            border: Color::Indexed(8),
            focus_border: Color::Indexed(6),
            button_bg: Color::Indexed(6),
            button_fg: Color::Indexed(0),
            delete_fg: Color::Indexed(1),
            selected_bg: Color::Rgb(0x30, 0x33, 0x3a),
            progress_fg: Color::Indexed(2),
            progress_track_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    /// Overrides colours named in `settings`; unparseable values are logged
    /// and leave the default in place.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color, &str); 13] = [
            (&settings.title_fg, &mut self.title_fg, "title_fg"),
            (&settings.subtitle_fg, &mut self.subtitle_fg, "subtitle_fg"),
            (&settings.text_fg, &mut self.text_fg, "text_fg"),
            (&settings.muted_fg, &mut self.muted_fg, "muted_fg"),
            (&settings.accent_fg, &mut self.accent_fg, "accent_fg"),
            (&settings.border, &mut self.border, "border"),
            (&settings.focus_border, &mut self.focus_border, "focus_border"),
            (&settings.button_bg, &mut self.button_bg, "button_bg"),
            (&settings.button_fg, &mut self.button_fg, "button_fg"),
            (&settings.delete_fg, &mut self.delete_fg, "delete_fg"),
            (&settings.selected_bg, &mut self.selected_bg, "selected_bg"),
            (&settings.progress_fg, &mut self.progress_fg, "progress_fg"),
            (
                &settings.progress_track_fg,
                &mut self.progress_track_fg,
                "progress_track_fg",
            ),
        ];
        for (value, slot, name) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(c) => *slot = c,
                None => tracing::warn!(field = name, value = %value, "ignoring unknown colour"),
            }
        }
    }

    pub fn to_styles(&self) -> TodoStyles {
        TodoStyles {
            title: Style::default().fg(self.title_fg).add_mod(Mod::BOLD),
            subtitle: Style::default().fg(self.subtitle_fg),
            text: Style::default().fg(self.text_fg),
            muted: Style::default().fg(self.muted_fg),
            accent: Style::default().fg(self.accent_fg),
            border: Style::default().fg(self.border),
            focus_border: Style::default().fg(self.focus_border),
            placeholder: Style::default().fg(self.muted_fg).add_mod(Mod::ITALIC),
            button: Style::default()
                .fg(self.button_fg)
                .bg(self.button_bg)
                .add_mod(Mod::BOLD),
            button_disabled: Style::default().fg(self.muted_fg).add_mod(Mod::DIM),
            completed_text: Style::default().fg(self.muted_fg),
            selected_row: Style::default().bg(self.selected_bg),
            delete: Style::default().fg(self.delete_fg),
            progress_filled: Style::default().fg(self.progress_fg),
            progress_empty: Style::default().fg(self.progress_track_fg),
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" | "default" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
