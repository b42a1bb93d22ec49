//! Fixed-width column helpers for terminal tables.
//!
//! Widths are display widths, so wide characters in repository names or
//! GitHub messages keep the columns aligned.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest prefix of `s` that fits in `max_width` columns.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

/// Pad `s` with spaces to exactly `width` columns, or cut it with a trailing
/// `...` when it is too long (no ellipsis below 3 columns).
pub fn pad_or_truncate(s: &str, width: usize) -> String {
    let display_width = s.width();

    if display_width <= width {
        format!("{}{}", s, " ".repeat(width - display_width))
    } else if width < 3 {
        truncate_to_width(s, width)
    } else {
        let truncated = truncate_to_width(s, width - 3);
        // A wide char cut at the boundary leaves one column short.
        let padding = width.saturating_sub(truncated.width()).saturating_sub(3);
        format!("{}...{}", truncated, " ".repeat(padding))
    }
}

/// Width fitting the widest of `header` and `cells`, clamped to `max`.
pub fn column_width<'a>(header: &str, cells: impl IntoIterator<Item = &'a str>, max: usize) -> usize {
    cells
        .into_iter()
        .map(UnicodeWidthStr::width)
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
        .min(max)
}
