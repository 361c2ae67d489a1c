//! Filter panel component renderer.
//!
//! Renders the open per-column filter control as either a full-width side
//! sheet (narrow viewports) or a compact popover anchored to the right edge
//! (wide viewports). The body is a dual date input or a searchable checklist
//! depending on the column's filter kind.

use crate::app::modes::FilterPlacement;
use crate::ui::helpers::{fit_to_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FilterPanelBody, FilterPanelView};

/// Width of the popover variant, in columns.
const POPOVER_WIDTH: usize = 38;

/// Maximum checklist options shown at once.
const MAX_VISIBLE_OPTIONS: usize = 8;

/// Renders the open filter control over the current frame.
///
/// Drawn after the body so it overlays it. Side sheets span the full width
/// starting under the chrome; popovers occupy a fixed-width box anchored at
/// the top right.
pub fn render_filter_panel(panel: &FilterPanelView, theme: &Theme, rows: usize, cols: usize) {
    let (start_row, start_col, width) = match panel.placement {
        FilterPlacement::SideSheet => (rows.saturating_sub(panel_height(panel) + 3), 1, cols),
        FilterPlacement::Popover => (
            2,
            cols.saturating_sub(POPOVER_WIDTH).max(1),
            POPOVER_WIDTH.min(cols),
        ),
    };

    let inner_width = width.saturating_sub(2);
    let mut row = start_row;

    position_cursor(row, start_col);
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("\u{250c}{}\u{2510}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());
    row += 1;

    row = render_panel_line(
        row,
        start_col,
        inner_width,
        theme,
        &format!(" Filter: {}", panel.column_label),
        true,
    );

    match &panel.body {
        FilterPanelBody::DateRange { from, to } => {
            let fmt = |d: &Option<chrono::NaiveDate>| {
                d.map_or_else(
                    || "(open)".to_string(),
                    |d| d.format("%Y-%m-%d").to_string(),
                )
            };
            row = render_panel_line(
                row,
                start_col,
                inner_width,
                theme,
                &format!(" From: {}", fmt(from)),
                false,
            );
            row = render_panel_line(
                row,
                start_col,
                inner_width,
                theme,
                &format!(" To:   {}", fmt(to)),
                false,
            );
        }
        FilterPanelBody::Checklist {
            query,
            options,
            disabled,
        } => {
            if *disabled {
                row = render_panel_line(
                    row,
                    start_col,
                    inner_width,
                    theme,
                    " (no options available)",
                    false,
                );
            } else {
                row = render_panel_line(
                    row,
                    start_col,
                    inner_width,
                    theme,
                    &format!(" Find: {query}"),
                    false,
                );
                for option in options.iter().take(MAX_VISIBLE_OPTIONS) {
                    let mark = if option.checked { "x" } else { " " };
                    row = render_panel_line(
                        row,
                        start_col,
                        inner_width,
                        theme,
                        &format!(" [{mark}] {}", option.label),
                        false,
                    );
                }
                if options.len() > MAX_VISIBLE_OPTIONS {
                    let hidden = options.len() - MAX_VISIBLE_OPTIONS;
                    row = render_panel_line(
                        row,
                        start_col,
                        inner_width,
                        theme,
                        &format!(" \u{2026} {hidden} more"),
                        false,
                    );
                }
            }
        }
    }

    position_cursor(row, start_col);
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders one framed interior line of the panel.
fn render_panel_line(
    row: usize,
    start_col: usize,
    inner_width: usize,
    theme: &Theme,
    text: &str,
    emphasized: bool,
) -> usize {
    position_cursor(row, start_col);
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("\u{2502}");
    if emphasized {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{}", fit_to_width(text, inner_width));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.panel_border));
    print!("\u{2502}");
    print!("{}", Theme::reset());
    row + 1
}

/// Computes the interior height of the panel body, excluding borders.
fn panel_height(panel: &FilterPanelView) -> usize {
    match &panel.body {
        FilterPanelBody::DateRange { .. } => 3,
        FilterPanelBody::Checklist {
            options, disabled, ..
        } => {
            if *disabled {
                2
            } else {
                let shown = options.len().min(MAX_VISIBLE_OPTIONS);
                let overflow = usize::from(options.len() > MAX_VISIBLE_OPTIONS);
                2 + shown + overflow
            }
        }
    }
}
