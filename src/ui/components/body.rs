//! Table body component renderer.
//!
//! Renders the visible rows with selection highlighting, search match
//! highlighting, and a per-row actions affordance. The affordance is a
//! separate region at the end of the row; the selected row expands it into
//! the action labels.

use super::header::COLUMN_GAP;
use crate::ui::helpers::{self, fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DisplayRow, TableViewModel};

/// Renders all visible rows starting at the specified row position.
///
/// # Returns
///
/// The next available row position (row + number of visible rows).
pub fn render_rows(row: usize, vm: &TableViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in &vm.rows {
        current_row = render_row(current_row, item, &vm.column_widths, theme, cols);
    }
    current_row
}

/// Renders a single table row.
///
/// # Styling precedence
///
/// 1. Selection colors (full-row background) when the cursor is on the row
/// 2. Search match highlights (suppressed on the selected row)
/// 3. Normal text color
///
/// The row is padded to the full terminal width so selection backgrounds
/// render consistently.
fn render_row(
    row: usize,
    item: &DisplayRow,
    widths: &[usize],
    theme: &Theme,
    cols: usize,
) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let mut used = 0;
    for (cell, width) in item.cells.iter().zip(widths) {
        let fits = cell.text.chars().count() <= *width;
        if cell.highlight_ranges.is_empty() || !fits {
            // Truncation would shift the match ranges, so an overlong cell
            // renders without highlights.
            print!("{}", fit_to_width(&cell.text, *width));
        } else {
            helpers::render_highlighted_text(
                &cell.text,
                &cell.highlight_ranges,
                theme,
                item.is_selected,
            );
            print!(
                "{}",
                " ".repeat(width.saturating_sub(cell.text.chars().count()))
            );
        }
        print!("{}", " ".repeat(COLUMN_GAP));
        used += width + COLUMN_GAP;
    }

    let affordance = render_actions_affordance(item, theme, used, cols);
    used += affordance;

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the actions affordance for a row, returning its width.
///
/// Rows with actions show a `⋮` glyph; the selected row additionally lists
/// the action labels so the available operations are visible before
/// invoking one.
fn render_actions_affordance(
    item: &DisplayRow,
    theme: &Theme,
    used: usize,
    cols: usize,
) -> usize {
    if item.actions.is_empty() || used >= cols {
        return 0;
    }

    if !item.is_selected {
        print!("{}", Theme::dim());
        print!("\u{22ee}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));
        return 1;
    }

    let labels: Vec<String> = item
        .actions
        .iter()
        .map(|action| match &action.icon {
            Some(icon) => format!("{icon} {}", action.label),
            None => action.label.clone(),
        })
        .collect();
    let menu = format!("\u{22ee} {}", labels.join(" \u{00b7} "));
    let menu = fit_to_width(&menu, cols.saturating_sub(used).min(menu.chars().count()));
    let width = menu.chars().count();
    print!("{menu}");
    width
}
