//! View model types representing renderable table state.
//!
//! View models are immutable snapshots computed from
//! [`TableState`](crate::app::TableState), following the MVVM pattern: they
//! contain display-ready data only (pre-computed widths, highlight ranges,
//! pager items), no business logic. The renderer consumes them without
//! touching the underlying state.

use crate::app::modes::FilterPlacement;
use crate::domain::action::RowAction;
use crate::query::state::SortDirection;
use chrono::NaiveDate;

/// Complete view model for one rendered frame of the table.
#[derive(Debug, Clone)]
pub struct TableViewModel {
    /// Header cells, one per column, in column order.
    pub header_cells: Vec<HeaderCell>,

    /// Display width per column, aligned with `header_cells`.
    pub column_widths: Vec<usize>,

    /// Visible rows of the current page, in display order.
    pub rows: Vec<DisplayRow>,

    /// Active filter chips (empty when no filters or filter UI hidden).
    pub chips: Vec<FilterChip>,

    /// Pagination footer information.
    pub footer: FooterInfo,

    /// Search bar state, present when the table is searchable.
    pub search_bar: Option<SearchBarInfo>,

    /// Empty state message, present when no rows match.
    pub empty_state: Option<EmptyState>,

    /// Open filter control, present while a column's filter UI is open.
    pub filter_panel: Option<FilterPanelView>,
}

/// One rendered column header.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    /// Header label text.
    pub label: String,
    /// Whether this column reacts to header clicks.
    pub sortable: bool,
    /// Sort indicator, present on the actively sorted column only.
    pub indicator: Option<SortDirection>,
}

/// One rendered cell.
#[derive(Debug, Clone)]
pub struct DisplayCell {
    /// Display text (already empty for missing values).
    pub text: String,
    /// Byte ranges of `text` to highlight as search matches.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// One rendered row.
#[derive(Debug, Clone)]
pub struct DisplayRow {
    /// The row's stable identifier.
    pub id: String,
    /// Cells in column order.
    pub cells: Vec<DisplayCell>,
    /// Whether the selection cursor is on this row.
    pub is_selected: bool,
    /// Actions available for this row, in menu order.
    pub actions: Vec<RowAction>,
}

/// A chip summarizing one active filter.
#[derive(Debug, Clone)]
pub struct FilterChip {
    /// Label of the filtered column.
    pub column_label: String,
    /// Short summary of the filter value.
    pub summary: String,
}

/// One slot in the page navigation strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageItem {
    /// A directly selectable page number.
    Number {
        /// The page, 1-based.
        page: usize,
        /// Whether this is the current page.
        is_current: bool,
    },
    /// A collapsed run of pages.
    Ellipsis,
}

/// Pagination footer information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// The "Showing X to Y of N entries" label.
    pub range_label: String,
    /// Page strip slots with ellipsis collapsing.
    pub items: Vec<PageItem>,
    /// Current rows-per-page.
    pub page_size: usize,
    /// Selectable rows-per-page candidates.
    pub page_size_options: Vec<usize>,
    /// Whether first/prev controls are disabled.
    pub at_first: bool,
    /// Whether next/last controls are disabled.
    pub at_last: bool,
}

/// Search bar state.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search term.
    pub query: String,
    /// Placeholder shown while the term is empty.
    pub placeholder: String,
}

/// Empty state message shown when no rows match.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,
    /// Secondary explanatory text.
    pub subtitle: String,
}

/// The open filter control for one column.
#[derive(Debug, Clone)]
pub struct FilterPanelView {
    /// Label of the column being filtered.
    pub column_label: String,
    /// Side sheet or popover, chosen from the viewport width.
    pub placement: FilterPlacement,
    /// The control body.
    pub body: FilterPanelBody,
}

/// The body of an open filter control.
#[derive(Debug, Clone)]
pub enum FilterPanelBody {
    /// Dual from/to date inputs.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
    /// A checklist of discrete values, narrowable by an internal search.
    Checklist {
        /// The internal option-narrowing query.
        query: String,
        /// Options surviving the narrowing query.
        options: Vec<ChecklistOption>,
        /// True when the column derived zero options; the control renders
        /// disabled instead of erroring.
        disabled: bool,
    },
}

/// One entry in a filter checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistOption {
    /// Option label.
    pub label: String,
    /// Whether the option is part of the active selection.
    pub checked: bool,
}
