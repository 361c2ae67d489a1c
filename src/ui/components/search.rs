//! Search bar component renderer.
//!
//! A three-line bordered input box at the top of the frame, showing the
//! current query or a dimmed placeholder while the query is empty.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin on each side of the search box.
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search input box at the specified row.
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────────┐ [margin]
/// [margin] │ Search: <query> │ [margin]
/// [margin] └─────────────────┘ [margin]
/// ```
///
/// # Returns
///
/// The next available row position (row + 3).
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let inner_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2 + 2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    let (content, content_style) = if search.query.is_empty() {
        (
            format!(" {}", search.placeholder),
            format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim)),
        )
    } else {
        (
            format!(" Search: {}", search.query),
            Theme::fg(&theme.colors.text_normal),
        )
    };
    let fill = " ".repeat(inner_width.saturating_sub(content.chars().count()));

    position_cursor(row, 1);
    print!(
        "{margin}{border}\u{250c}{}\u{2510}{}",
        "\u{2500}".repeat(inner_width),
        Theme::reset()
    );

    position_cursor(row + 1, 1);
    print!("{margin}{border}\u{2502}");
    print!("{content_style}{content}{}", Theme::reset());
    print!("{fill}{border}\u{2502}{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!(
        "{margin}{border}\u{2514}{}\u{2518}{}",
        "\u{2500}".repeat(inner_width),
        Theme::reset()
    );

    row + 3
}
