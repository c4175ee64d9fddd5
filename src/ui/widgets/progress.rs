use crate::ui::core::geom::Pos;
use crate::ui::core::style::Style;
use crate::ui::core::widget::{Ui, Widget};

const FILLED: char = '█';
const EMPTY: char = '░';

/// One-row horizontal bar; `ratio` is clamped to `0.0..=1.0`.
pub struct ProgressBar {
    pub ratio: f64,
    pub filled: Style,
    pub empty: Style,
}

impl ProgressBar {
    pub fn new(ratio: f64) -> Self {
        Self {
            ratio,
            filled: Style::default(),
            empty: Style::default(),
        }
    }

    pub fn styles(mut self, filled: Style, empty: Style) -> Self {
        self.filled = filled;
        self.empty = empty;
        self
    }

    pub fn filled_cells(ratio: f64, width: u16) -> u16 {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        (ratio * f64::from(width)).round() as u16
    }
}

impl Widget for ProgressBar {
    fn ui(&mut self, ui: &mut Ui) {
        let rect = ui.rect;
        if rect.is_empty() {
            return;
        }
        let filled = Self::filled_cells(self.ratio, rect.w);
        ui.painter
            .hline(Pos::new(rect.x, rect.y), filled, FILLED, self.filled);
        ui.painter.hline(
            Pos::new(rect.x + filled, rect.y),
            rect.w - filled,
            EMPTY,
            self.empty,
        );
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/widgets/progress.rs"]
mod tests;
