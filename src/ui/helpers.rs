//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components: cursor positioning, width-aware padding and truncation, and
//! search match highlighting with proper ANSI escape sequence management.

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Fits text into a fixed display width.
///
/// Truncates with a trailing ellipsis when the text is too long, pads with
/// spaces when it is too short. Widths are counted in characters.
#[must_use]
pub fn fit_to_width(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        if width <= 1 {
            return ".".repeat(width);
        }
        let keep: String = text.chars().take(width - 1).collect();
        format!("{keep}\u{2026}")
    } else {
        let mut out = text.to_string();
        out.push_str(&" ".repeat(width - len));
        out
    }
}

/// Renders text with highlighted byte ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the
/// provided byte ranges (inclusive start, exclusive end, non-overlapping,
/// ascending). Highlighted sections use match highlight colors unless the
/// row is selected, in which case selection colors take precedence and
/// highlighting is suppressed.
///
/// # Output
///
/// Prints to stdout using ANSI escape sequences:
/// - Normal sections: whatever styling is already active
/// - Highlighted sections: `match_highlight_fg` + `match_highlight_bg`
/// - After each highlight the previous foreground is restored
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let mut cursor = 0;
    for &(start, end) in ranges {
        if end > text.len()
            || start < cursor
            || !text.is_char_boundary(start)
            || !text.is_char_boundary(end)
        {
            continue;
        }
        print!("{}", &text[cursor..start]);
        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        print!("{}", &text[start..end]);
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        cursor = end;
    }
    print!("{}", &text[cursor..]);
}
