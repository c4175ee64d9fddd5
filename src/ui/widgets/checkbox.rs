use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::Style;
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};

pub const CHECKBOX_WIDTH: u16 = 3;

pub struct Checkbox {
    pub checked: bool,
    pub kind: NodeKind,
    pub style: Style,
}

impl Checkbox {
    pub fn new(checked: bool, kind: NodeKind) -> Self {
        Self {
            checked,
            kind,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn glyph(checked: bool) -> &'static str {
        if checked {
            "[✓]"
        } else {
            "[ ]"
        }
    }
}

impl Widget for Checkbox {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = Rect::new(ui.rect.x, ui.rect.y, CHECKBOX_WIDTH.min(ui.rect.w), ui.rect.h.min(1));
        if rect.is_empty() {
            return;
        }
        ui.painter
            .text_clipped(Pos::new(rect.x, rect.y), Self::glyph(self.checked), self.style, rect);
        ui.tree.push(Node {
            rect,
            sense: Sense::HOVER | Sense::CLICK,
            kind: self.kind,
        });
    }
}
