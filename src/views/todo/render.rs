use super::{EmptyState, InputRow, Progress, StatsRow, TaskRow, TodoTree, TaskList};
use crate::kernel::FocusTarget;
use crate::ui::core::geom::{Insets, Pos, Rect};
use crate::ui::core::painter::BorderKind;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::text::{display_width, truncate_to_width};
use crate::ui::core::tree::{Node, NodeKind, Sense};
use crate::ui::core::widget::{Ui, Widget};
use crate::ui::widgets::checkbox::CHECKBOX_WIDTH;
use crate::ui::widgets::{Button, ButtonStyles, Checkbox, ProgressBar, TextInput, TextInputStyles};

pub const COLUMN_MAX_WIDTH: u16 = 72;

const INPUT_CARD_HEIGHT: u16 = 3;
const EMPTY_CARD_HEIGHT: u16 = 4;
const PROGRESS_HEIGHT: u16 = 3;
const DELETE_LABEL: &str = "✕";
const DELETE_WIDTH: u16 = 3;

#[derive(Clone, Copy, Debug, Default)]
pub struct TodoStyles {
    pub title: Style,
    pub subtitle: Style,
    pub text: Style,
    pub muted: Style,
    pub accent: Style,
    pub border: Style,
    pub focus_border: Style,
    pub placeholder: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub completed_text: Style,
    pub selected_row: Style,
    pub delete: Style,
    pub progress_filled: Style,
    pub progress_empty: Style,
}

pub struct RenderContext<'a> {
    pub focus: FocusTarget,
    pub selected: Option<usize>,
    /// Caret position in the pending input, in chars.
    pub input_cursor: usize,
    pub styles: &'a TodoStyles,
    /// Key hints painted on the last row, if there is room.
    pub footer: Option<&'a str>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub cursor: Option<Pos>,
    /// Index of the first task row on screen.
    pub first_visible_row: usize,
    pub visible_rows: usize,
}

/// Paints `tree` top to bottom inside `ui.rect` and registers click targets.
pub fn render(tree: &TodoTree, ui: &mut Ui, ctx: &RenderContext) -> RenderOutput {
    let mut out = RenderOutput::default();
    let area = ui.rect;
    if area.is_empty() {
        return out;
    }

    let mut column = area.centered_column(COLUMN_MAX_WIDTH).inset(Insets::xy(1, 0));
    if let Some(footer) = ctx.footer.filter(|_| column.h > 1) {
        let (rest, footer_rect) = split_bottom(column, 1);
        column = rest;
        ui.painter.text_clipped(
            Pos::new(footer_rect.x, footer_rect.y),
            truncate_to_width(footer, footer_rect.w),
            ctx.styles.muted,
            footer_rect,
        );
    }

    ui.with_rect(column, |ui| {
        paint_header(ui, &tree.header.title, &tree.header.subtitle, ctx.styles);
        out.cursor = paint_input(ui, &tree.input, ctx);
        ui.skip(1);

        if let Some(stats) = &tree.stats {
            paint_stats(ui, stats, ctx.styles);
            ui.skip(1);
        }

        let reserved = if tree.progress.is_some() {
            PROGRESS_HEIGHT
        } else {
            0
        };
        match &tree.list {
            TaskList::Empty(empty) => paint_empty(ui, empty, ctx.styles),
            TaskList::Rows(rows) => {
                let (first, count) = paint_rows(ui, rows, reserved, ctx);
                out.first_visible_row = first;
                out.visible_rows = count;
            }
        }

        if let Some(progress) = &tree.progress {
            paint_progress(ui, progress, ctx.styles);
        }
    });

    out
}

fn split_bottom(rect: Rect, h: u16) -> (Rect, Rect) {
    let h = h.min(rect.h);
    let rest = Rect::new(rect.x, rect.y, rect.w, rect.h - h);
    let bottom = Rect::new(rect.x, rect.y + rect.h - h, rect.w, h);
    (rest, bottom)
}

fn centered_text(ui: &mut Ui, rect: Rect, text: &str, style: Style) {
    let text = truncate_to_width(text, rect.w);
    let x = rect.x + (rect.w - display_width(&text)) / 2;
    ui.painter.text_clipped(Pos::new(x, rect.y), text, style, rect);
}

fn paint_header(ui: &mut Ui, title: &str, subtitle: &str, styles: &TodoStyles) {
    let title_rect = ui.take_top(1);
    centered_text(ui, title_rect, title, styles.title);
    let subtitle_rect = ui.take_top(1);
    centered_text(ui, subtitle_rect, subtitle, styles.subtitle);
    ui.skip(1);
}

fn paint_input(ui: &mut Ui, input: &InputRow, ctx: &RenderContext) -> Option<Pos> {
    let card = ui.take_top(INPUT_CARD_HEIGHT);
    if card.h < INPUT_CARD_HEIGHT {
        return None;
    }
    let focused = ctx.focus == FocusTarget::Input;
    let border = if focused {
        ctx.styles.focus_border
    } else {
        ctx.styles.border
    };
    ui.painter.border(card, border, BorderKind::Rounded);

    let inner = card.inset(Insets::xy(2, 1));
    let mut button = Button::new(&input.add_label, NodeKind::AddButton)
        .enabled(input.submit_enabled)
        .styles(ButtonStyles {
            enabled: ctx.styles.button,
            disabled: ctx.styles.button_disabled,
        });
    // Label plus one cell of padding on each side, and a one-cell gap.
    let button_w = button.width() + 2;
    let (field, button_rect) = inner.split_right(button_w);
    let field = Rect::new(field.x, field.y, field.w.saturating_sub(1), field.h);
    ui.with_rect(button_rect, |ui| button.ui(ui));

    let mut text_input = TextInput::new(&input.text, &input.placeholder, ctx.input_cursor, focused)
        .styles(TextInputStyles {
            text: ctx.styles.text,
            placeholder: ctx.styles.placeholder,
        });
    ui.with_rect(field, |ui| text_input.ui(ui));
    text_input.caret()
}

fn paint_stats(ui: &mut Ui, stats: &StatsRow, styles: &TodoStyles) {
    let rect = ui.take_top(1);
    if rect.is_empty() {
        return;
    }
    ui.painter.text_clipped(
        Pos::new(rect.x + 1, rect.y),
        &stats.total_label,
        styles.muted,
        rect,
    );
    let completed = format!("✓ {}", stats.completed_label);
    let w = display_width(&completed);
    let x = rect.right().saturating_sub(w + 1).max(rect.x);
    ui.painter.text_clipped(Pos::new(x, rect.y), "✓", styles.accent, rect);
    ui.painter.text_clipped(
        Pos::new(x + 2, rect.y),
        &stats.completed_label,
        styles.muted,
        rect,
    );
}

fn paint_empty(ui: &mut Ui, empty: &EmptyState, styles: &TodoStyles) {
    let card = ui.take_top(EMPTY_CARD_HEIGHT);
    if card.h < EMPTY_CARD_HEIGHT {
        return;
    }
    ui.painter.border(card, styles.border, BorderKind::Rounded);
    let inner = card.inset(Insets::xy(1, 1));
    let (headline, rest) = inner.split_top(1);
    centered_text(ui, headline, &empty.headline, styles.text.add_mod(Mod::BOLD));
    let (hint, _) = rest.split_top(1);
    centered_text(ui, hint, &empty.hint, styles.muted);
}

/// Returns `(first_visible, visible_count)`.
fn paint_rows(
    ui: &mut Ui,
    rows: &[TaskRow],
    reserved: u16,
    ctx: &RenderContext,
) -> (usize, usize) {
    let capacity = ui.rect.h.saturating_sub(reserved) as usize;
    let count = rows.len().min(capacity);
    if count == 0 {
        return (0, 0);
    }

    // Keep the selected row on screen.
    let first = match ctx.selected {
        Some(sel) if sel >= count => (sel + 1 - count).min(rows.len() - count),
        _ => 0,
    };

    for (index, row) in rows.iter().enumerate().skip(first).take(count) {
        let rect = ui.take_top(1);
        let selected = ctx.focus == FocusTarget::List && ctx.selected == Some(index);
        ui.with_rect(rect, |ui| paint_row(ui, index, row, selected, ctx.styles));
    }
    (first, count)
}

fn paint_row(ui: &mut Ui, index: usize, row: &TaskRow, selected: bool, styles: &TodoStyles) {
    let rect = ui.rect;
    let task_id = row.id.get();
    let base = if selected {
        styles.selected_row
    } else {
        Style::default()
    };
    if selected {
        ui.painter.fill_rect(rect, base);
    }
    ui.tree.push(Node {
        rect,
        sense: Sense::HOVER | Sense::CLICK,
        kind: NodeKind::TaskRow { index, task_id },
    });

    let (_, rest) = rect.split_left(1);
    let (check_rect, rest) = rest.split_left(CHECKBOX_WIDTH);
    let (_, rest) = rest.split_left(1);
    let (text_rect, delete_rect) = rest.split_right(DELETE_WIDTH + 1);
    let delete_rect = Rect::new(delete_rect.x, delete_rect.y, DELETE_WIDTH, 1);

    let check_style = if row.completed {
        base.patch(styles.accent)
    } else {
        base.patch(styles.muted)
    };
    ui.with_rect(check_rect, |ui| {
        Checkbox::new(row.completed, NodeKind::TaskToggle { task_id })
            .style(check_style)
            .ui(ui)
    });

    let text_style = if row.completed {
        base.patch(styles.completed_text)
            .add_mod(Mod::CROSSED_OUT | Mod::DIM)
    } else {
        base.patch(styles.text)
    };
    let text_w = text_rect.w.saturating_sub(1);
    ui.painter.text_clipped(
        Pos::new(text_rect.x, text_rect.y),
        truncate_to_width(&row.text, text_w),
        text_style,
        text_rect,
    );

    ui.with_rect(delete_rect, |ui| {
        Button::new(DELETE_LABEL, NodeKind::TaskDelete { task_id })
            .styles(ButtonStyles {
                enabled: base.patch(styles.delete),
                disabled: base.patch(styles.muted),
            })
            .ui(ui)
    });
}

fn paint_progress(ui: &mut Ui, progress: &Progress, styles: &TodoStyles) {
    ui.skip(1);
    let label_rect = ui.take_top(1);
    if label_rect.is_empty() {
        return;
    }
    ui.painter.text_clipped(
        Pos::new(label_rect.x + 1, label_rect.y),
        &progress.label,
        styles.text.add_mod(Mod::BOLD),
        label_rect,
    );
    let pct_w = display_width(&progress.percent_label);
    let x = label_rect.right().saturating_sub(pct_w + 1).max(label_rect.x);
    ui.painter.text_clipped(
        Pos::new(x, label_rect.y),
        &progress.percent_label,
        styles.muted,
        label_rect,
    );

    let bar_rect = ui.take_top(1).inset(Insets::xy(1, 0));
    ui.with_rect(bar_rect, |ui| {
        ProgressBar::new(progress.ratio)
            .styles(styles.progress_filled, styles.progress_empty)
            .ui(ui)
    });
}

#[cfg(test)]
#[path = "../../../tests/unit/views/todo_render.rs"]
mod tests;
