//! Empty state component renderer.
//!
//! Shown in place of the body when no rows survive the current query:
//! every row was filtered away, the search found nothing, or the caller
//! supplied an empty collection.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state message, centered within the body area.
///
/// The primary message starts two rows into the body region in the
/// `empty_state_fg` color; the subtitle follows in dimmed secondary text.
pub fn render_empty_state(start_row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    let message_style = Theme::fg(&theme.colors.empty_state_fg);
    centered_line(start_row + 2, &empty.message, &message_style, cols);

    let subtitle_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(start_row + 3, &empty.subtitle, &subtitle_style, cols);
}

/// Prints one horizontally centered, full-width line in the given style.
fn centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let len = text.chars().count();
    let left = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(left + len);

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), " ".repeat(right), Theme::reset());
}
