//! Pagination footer component renderer.
//!
//! Renders two footer lines: the "Showing X to Y of N entries" range label
//! with the rows-per-page selector, and the page navigation strip with
//! first/prev/numbered/next/last controls. Boundary controls render in the
//! disabled color on the first and last pages.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, PageItem};

/// Renders the range label line with the rows-per-page selector.
///
/// Layout: range label on the left, `Rows per page:` candidates on the
/// right, the active size emphasized.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_range_line(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", footer.range_label);

    let mut selector = String::from("Rows per page: ");
    for (i, size) in footer.page_size_options.iter().enumerate() {
        if i > 0 {
            selector.push(' ');
        }
        if *size == footer.page_size {
            selector.push_str(&format!("[{size}]"));
        } else {
            selector.push_str(&size.to_string());
        }
    }

    let used = footer.range_label.chars().count();
    let selector_len = selector.chars().count();
    if used + selector_len < cols {
        print!("{}", " ".repeat(cols - used - selector_len));
        print!("{selector}");
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the page navigation strip, centered.
///
/// Layout: `« ‹ 1 … 4 5 6 … 20 › »` with the current page highlighted.
/// First/prev render disabled on page 1, next/last on the final page.
///
/// # Returns
///
/// The next available row position (row + 1).
pub fn render_pager_line(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    // Measure the plain width first so the strip can be centered.
    let mut plain = String::new();
    plain.push_str("\u{00ab} \u{2039}");
    for item in &footer.items {
        match item {
            PageItem::Number { page, .. } => plain.push_str(&format!(" {page}")),
            PageItem::Ellipsis => plain.push_str(" \u{2026}"),
        }
    }
    plain.push_str(" \u{203a} \u{00bb}");

    let width = plain.chars().count();
    let padding = cols.saturating_sub(width) / 2;

    position_cursor(row, 1);
    print!("{}", " ".repeat(padding));

    render_nav_control(theme, "\u{00ab}", footer.at_first);
    print!(" ");
    render_nav_control(theme, "\u{2039}", footer.at_first);

    for item in &footer.items {
        print!(" ");
        match item {
            PageItem::Number { page, is_current } => {
                if *is_current {
                    print!("{}", Theme::fg(&theme.colors.pager_current_fg));
                    print!("{}", Theme::bg(&theme.colors.pager_current_bg));
                    print!("{page}");
                    print!("{}", Theme::reset());
                } else {
                    print!("{}", Theme::fg(&theme.colors.text_normal));
                    print!("{page}");
                    print!("{}", Theme::reset());
                }
            }
            PageItem::Ellipsis => {
                print!("{}", Theme::fg(&theme.colors.text_dim));
                print!("\u{2026}");
                print!("{}", Theme::reset());
            }
        }
    }

    print!(" ");
    render_nav_control(theme, "\u{203a}", footer.at_last);
    print!(" ");
    render_nav_control(theme, "\u{00bb}", footer.at_last);
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one arrow control, dimmed to the disabled color at a boundary.
fn render_nav_control(theme: &Theme, glyph: &str, disabled: bool) {
    if disabled {
        print!("{}", Theme::fg(&theme.colors.pager_disabled_fg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{glyph}");
    print!("{}", Theme::reset());
}
