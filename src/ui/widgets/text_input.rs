use crate::ui::core::geom::Pos;
use crate::ui::core::style::Style;
use crate::ui::core::text::{display_width, width_of_prefix};
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Copy, Debug, Default)]
pub struct TextInputStyles {
    pub text: Style,
    pub placeholder: Style,
}

/// Single-line field. Scrolls horizontally so the caret stays visible.
pub struct TextInput<'a> {
    pub text: &'a str,
    pub placeholder: &'a str,
    /// Caret position in chars.
    pub cursor: usize,
    pub focused: bool,
    pub styles: TextInputStyles,
    caret: Option<Pos>,
}

impl<'a> TextInput<'a> {
    pub fn new(text: &'a str, placeholder: &'a str, cursor: usize, focused: bool) -> Self {
        Self {
            text,
            placeholder,
            cursor,
            focused,
            styles: TextInputStyles::default(),
            caret: None,
        }
    }

    pub fn styles(mut self, styles: TextInputStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Where the terminal cursor belongs after `ui` ran, if the field is focused.
    pub fn caret(&self) -> Option<Pos> {
        self.caret
    }
}

impl Widget for TextInput<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        ui.tree.push(Node {
            rect,
            sense: Sense::HOVER | Sense::CLICK,
            kind: NodeKind::InputField,
        });

        if self.text.is_empty() {
            ui.painter
                .text_clipped(Pos::new(rect.x, rect.y), self.placeholder, self.styles.placeholder, rect);
            self.caret = self.focused.then_some(Pos::new(rect.x, rect.y));
            return;
        }

        // Keep one spare cell at the right edge for the caret.
        let caret_w = width_of_prefix(self.text, self.cursor);
        let scroll = caret_w.saturating_sub(rect.w.saturating_sub(1));

        let mut skipped = 0u16;
        let mut visible = String::new();
        for g in self.text.graphemes(true) {
            if skipped < scroll {
                skipped = skipped.saturating_add(g.width() as u16);
                continue;
            }
            visible.push_str(g);
            if display_width(&visible) >= rect.w {
                break;
            }
        }
        ui.painter
            .text_clipped(Pos::new(rect.x, rect.y), visible, self.styles.text, rect);

        if self.focused {
            let x = rect.x + caret_w.saturating_sub(skipped).min(rect.w - 1);
            self.caret = Some(Pos::new(x, rect.y));
        }
    }
}
