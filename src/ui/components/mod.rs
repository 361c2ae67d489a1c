//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the parts of a
//! table frame, following a component-based architecture. Each component is
//! responsible for rendering one region of the interface.
//!
//! # Components
//!
//! - [`header`]: Column headers with sort indicators
//! - [`body`]: Visible rows with selection, highlights, and action affordance
//! - [`footer`]: Range label, rows-per-page selector, and page strip
//! - [`chips`]: Active filter chips with a clear-all hint
//! - [`search`]: Search input box
//! - [`filter`]: Open filter control (side sheet or popover)
//! - [`empty`]: Empty state message for zero matching rows

mod body;
mod chips;
mod empty;
mod filter;
mod footer;
mod header;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::TableViewModel;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate the header region from the body and the body from the
/// footer.
///
/// # Returns
///
/// The next available row position (row + 1).
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "\u{2500}".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one complete table frame from a view model.
///
/// Layout structure:
/// ```text
/// [Search box - 3 lines, when searchable]
/// [Filter chips, when filters are active]
/// [Column headers]
/// [Border]
/// [Body rows | empty state]
/// [Blank padding to fill screen]
/// [Border]
/// [Range label + rows-per-page selector]
/// [Page navigation strip]
/// [Filter panel overlay, when open]
/// ```
pub fn render_table(vm: &TableViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 1;

    if let Some(search_bar) = &vm.search_bar {
        current_row = search::render_search_bar(current_row, search_bar, theme, cols);
    }
    if !vm.chips.is_empty() {
        current_row = chips::render_filter_chips(current_row, &vm.chips, theme, cols);
    }

    current_row = header::render_column_headers(current_row, vm, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(empty_state) = &vm.empty_state {
        empty::render_empty_state(current_row, empty_state, theme, cols);
    } else {
        body::render_rows(current_row, vm, theme, cols);
    }

    let pager_row = rows.saturating_sub(1);
    let label_row = pager_row.saturating_sub(1);
    let border_row = label_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    footer::render_range_line(label_row, &vm.footer, theme, cols);
    footer::render_pager_line(pager_row, &vm.footer, theme, cols);

    if let Some(panel) = &vm.filter_panel {
        filter::render_filter_panel(panel, theme, rows, cols);
    }
}
