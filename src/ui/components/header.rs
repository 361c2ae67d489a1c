//! Column header component renderer.
//!
//! Renders the column header row with bold styling and an ascending or
//! descending indicator on the actively sorted column only.

use crate::query::state::SortDirection;
use crate::ui::helpers::{fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TableViewModel;

/// Gap between rendered columns, in characters.
pub const COLUMN_GAP: usize = 2;

/// Renders the column headers at the specified row.
///
/// Each header shows its label (truncated to the column width) and, on the
/// sorted column, a `▲`/`▼` indicator in the sort indicator color. Sortable
/// columns that are not currently sorted render without any indicator.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_column_headers(
    row: usize,
    vm: &TableViewModel,
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    let mut used = 0;
    for (cell, width) in vm.header_cells.iter().zip(&vm.column_widths) {
        let indicator = match cell.indicator {
            Some(SortDirection::Ascending) => " \u{25b2}",
            Some(SortDirection::Descending) => " \u{25bc}",
            None => "",
        };
        let label_width = width.saturating_sub(indicator.chars().count());
        print!("{}", fit_to_width(&cell.label, label_width));
        if !indicator.is_empty() {
            print!("{}", Theme::fg(&theme.colors.sort_indicator_fg));
            print!("{indicator}");
            print!("{}", Theme::fg(&theme.colors.header_fg));
        }
        print!("{}", " ".repeat(COLUMN_GAP));
        used += width + COLUMN_GAP;
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}
