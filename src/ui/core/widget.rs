use super::geom::Rect;
use super::painter::Painter;
use super::tree::UiTree;

/// Paint context handed to widgets: the rect they own plus the shared
/// painter and hit-test tree for this frame.
pub struct Ui<'a> {
    pub rect: Rect,
    pub painter: &'a mut Painter,
    pub tree: &'a mut UiTree,
}

impl<'a> Ui<'a> {
    pub fn new(rect: Rect, painter: &'a mut Painter, tree: &'a mut UiTree) -> Self {
        Self {
            rect,
            painter,
            tree,
        }
    }

    pub fn with_rect<R>(&mut self, rect: Rect, f: impl FnOnce(&mut Ui<'_>) -> R) -> R {
        let mut child = Ui {
            rect,
            painter: self.painter,
            tree: self.tree,
        };
        f(&mut child)
    }

    /// Cuts `h` rows off the top of the remaining rect.
    pub fn take_top(&mut self, h: u16) -> Rect {
        let (top, rest) = self.rect.split_top(h);
        self.rect = rest;
        top
    }

    pub fn skip(&mut self, h: u16) {
        self.take_top(h);
    }
}

pub trait Widget {
    fn ui(&mut self, ui: &mut Ui);
}
