use super::*;

#[test]
fn display_width_counts_cells() {
    assert_eq!(display_width("abc"), 3);
    assert_eq!(display_width("日本"), 4);
    assert_eq!(display_width(""), 0);
}

#[test]
fn truncate_keeps_short_text() {
    assert_eq!(truncate_to_width("milk", 4), "milk");
    assert_eq!(truncate_to_width("milk", 10), "milk");
}

#[test]
fn truncate_adds_ellipsis() {
    assert_eq!(truncate_to_width("Buy groceries", 6), "Buy g…");
    assert_eq!(display_width(&truncate_to_width("Buy groceries", 6)), 6);
    assert_eq!(truncate_to_width("abc", 1), "…");
    assert_eq!(truncate_to_width("abc", 0), "");
}

#[test]
fn truncate_never_splits_wide_glyphs() {
    // Budget of 3 cells before the ellipsis fits only one 2-cell glyph.
    let out = truncate_to_width("日本語", 4);
    assert_eq!(out, "日…");
    assert!(display_width(&out) <= 4);
}

#[test]
fn width_of_prefix_counts_chars() {
    assert_eq!(width_of_prefix("héllo", 2), 2);
    assert_eq!(width_of_prefix("日本", 1), 2);
    assert_eq!(width_of_prefix("ab", 10), 2);
    assert_eq!(width_of_prefix("ab", 0), 0);
}
