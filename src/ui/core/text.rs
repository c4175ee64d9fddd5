use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> u16 {
    s.width().min(u16::MAX as usize) as u16
}

/// Cuts `s` to at most `max` cells, ending in `…` when something was dropped.
pub fn truncate_to_width(s: &str, max: u16) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let budget = max as usize - 1;
    let mut out = String::new();
    let mut used = 0usize;
    for g in s.graphemes(true) {
        let w = g.width();
        if used + w > budget {
            break;
        }
        out.push_str(g);
        used += w;
    }
    out.push('…');
    out
}

/// Display width of the first `chars` chars of `s`.
pub fn width_of_prefix(s: &str, chars: usize) -> u16 {
    let end = s
        .char_indices()
        .nth(chars)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    display_width(&s[..end])
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/text.rs"]
mod tests;
