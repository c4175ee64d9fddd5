use super::*;
use crate::ui::backend::test::TestBackend;
use crate::ui::backend::Backend;
use crate::ui::core::geom::Rect;
use crate::ui::core::painter::Painter;
use crate::ui::core::tree::UiTree;

fn paint(ratio: f64, width: u16) -> String {
    let area = Rect::new(0, 0, width, 1);
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    {
        let mut ui = Ui::new(area, &mut painter, &mut tree);
        ProgressBar::new(ratio).ui(&mut ui);
    }
    let mut backend = TestBackend::new(width, 1);
    backend.draw(area, painter.cmds());
    backend.buffer().row_text(0)
}

#[test]
fn filled_cells_rounds_and_clamps() {
    assert_eq!(ProgressBar::filled_cells(0.0, 10), 0);
    assert_eq!(ProgressBar::filled_cells(0.5, 10), 5);
    assert_eq!(ProgressBar::filled_cells(0.25, 10), 3);
    assert_eq!(ProgressBar::filled_cells(1.0, 10), 10);
    assert_eq!(ProgressBar::filled_cells(1.7, 10), 10);
    assert_eq!(ProgressBar::filled_cells(-0.3, 10), 0);
    assert_eq!(ProgressBar::filled_cells(f64::NAN, 10), 0);
}

#[test]
fn half_bar_fills_half_the_width() {
    assert_eq!(paint(0.5, 8), "████░░░░");
}

#[test]
fn empty_and_full_bars() {
    assert_eq!(paint(0.0, 4), "░░░░");
    assert_eq!(paint(1.0, 4), "████");
}

#[test]
fn bar_registers_no_click_targets() {
    let mut painter = Painter::new();
    let mut tree = UiTree::new();
    let mut ui = Ui::new(Rect::new(0, 0, 5, 1), &mut painter, &mut tree);
    ProgressBar::new(0.4).ui(&mut ui);
    assert!(tree.nodes().is_empty());
}
