//! Filter chip row component renderer.
//!
//! Renders one chip per active filter, summarizing the column and value,
//! followed by a clear-all hint. The row is omitted entirely by the layout
//! when no filters are active.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterChip;

/// Renders the active filter chips at the specified row.
///
/// Each chip renders as ` Column: summary ✕ ` in the chip colors. Chips
/// that would overflow the line are dropped from the right; the clear-all
/// hint is kept visible whenever at least one chip rendered.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_filter_chips(row: usize, chips: &[FilterChip], theme: &Theme, cols: usize) -> usize {
    const CLEAR_HINT: &str = " clear all ";

    position_cursor(row, 1);
    let mut used = 0;

    for chip in chips {
        let text = format!(" {}: {} \u{2715} ", chip.column_label, chip.summary);
        let width = text.chars().count() + 1;
        if used + width + CLEAR_HINT.len() > cols {
            break;
        }
        print!("{}", Theme::fg(&theme.colors.chip_fg));
        print!("{}", Theme::bg(&theme.colors.chip_bg));
        print!("{text}");
        print!("{}", Theme::reset());
        print!(" ");
        used += width;
    }

    if used > 0 && used + CLEAR_HINT.len() <= cols {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{CLEAR_HINT}");
        used += CLEAR_HINT.len();
    }

    print!("{}", Theme::reset());
    print!("{}", " ".repeat(cols.saturating_sub(used)));
    row + 1
}
