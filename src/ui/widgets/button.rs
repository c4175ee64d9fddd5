use crate::ui::core::geom::Pos;
use crate::ui::core::style::Style;
use crate::ui::core::text::display_width;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};

#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonStyles {
    pub enabled: Style,
    pub disabled: Style,
}

/// Clickable label, centred in its rect. A disabled button paints dimmed and registers no click
/// target, so clicks fall through to whatever is below.
pub struct Button<'a> {
    pub label: &'a str,
    pub enabled: bool,
    pub kind: NodeKind,
    pub styles: ButtonStyles,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: NodeKind) -> Self {
        Self {
            label,
            enabled: true,
            kind,
            styles: ButtonStyles::default(),
        }
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn styles(mut self, styles: ButtonStyles) -> Self {
        self.styles = styles;
        self
    }

    pub fn width(&self) -> u16 {
        display_width(self.label)
    }
}

impl Widget for Button<'_> {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        let style = if self.enabled {
            self.styles.enabled
        } else {
            self.styles.disabled
        };
        ui.painter.fill_rect(rect, style);
        let x = rect.x + rect.w.saturating_sub(self.width()) / 2;
        ui.painter
            .text_clipped(Pos::new(x, rect.y), self.label, style, rect);
        if self.enabled {
            ui.tree.push(Node {
                rect,
                sense: Sense::HOVER | Sense::CLICK,
                kind: self.kind,
            });
        }
    }
}
