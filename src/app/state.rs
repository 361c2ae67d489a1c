//! Table state management and view model computation.
//!
//! This module defines [`TableState`], the central state container for one
//! table instance, along with methods for data supply, selection management,
//! lifecycle, and UI view model generation. It is the single source of truth
//! for all transient table state.
//!
//! # Architecture
//!
//! `TableState` separates caller-owned data (row collection, column schema,
//! actions) from derived state (the current page and total) and interaction
//! state (query, selection, open filter panel). View models are computed
//! on-demand from state snapshots.
//!
//! # Data flow
//!
//! In local mode, [`refresh`](TableState::refresh) runs the query pipeline
//! over the master collection whenever the query changes. In delegated mode
//! the pipeline is bypassed entirely: [`apply_page`](TableState::apply_page)
//! installs whatever rows and total the caller supplied, trusted verbatim.
//!
//! # Example
//!
//! ```ignore
//! let mut state = TableState::new(TableConfig::default(), Theme::default(), columns);
//! state.mount();
//! state.set_rows(devices);
//! let vm = state.compute_viewmodel();
//! ```

use crate::app::modes::{DataMode, FilterPlacement};
use crate::delegate::RemotePage;
use crate::domain::action::RowActions;
use crate::domain::column::{Column, FilterSpec};
use crate::domain::filter::FilterValue;
use crate::domain::row::TableRow;
use crate::domain::value::CellValue;
use crate::query::debounce::SearchDebouncer;
use crate::query::executor::{match_ranges, run_query, QueryResult};
use crate::query::state::QueryState;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChecklistOption, DisplayCell, DisplayRow, EmptyState, FilterChip, FilterPanelBody,
    FilterPanelView, FooterInfo, HeaderCell, PageItem, SearchBarInfo, TableViewModel,
};
use crate::TableConfig;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::time::Duration;

/// Minimum rendered column width.
const MIN_COLUMN_WIDTH: usize = 4;

/// Maximum rendered column width.
const MAX_COLUMN_WIDTH: usize = 30;

/// Maximum slots in the page strip before runs collapse into ellipses.
const MAX_PAGE_SLOTS: usize = 7;

/// Current terminal viewport in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub rows: usize,
    pub cols: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { rows: 24, cols: 80 }
    }
}

/// State of an open per-column filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanelState {
    /// Key of the column whose filter UI is open.
    pub column: String,
    /// Internal text query narrowing the option checklist.
    pub option_query: String,
}

/// Central state container for one table instance.
///
/// Mutated by the event handler in response to user input and data supply.
/// View models are computed on-demand from state snapshots.
pub struct TableState<T: TableRow> {
    /// Construction-time options (searchability, page sizes, mode, UI knobs).
    pub config: TableConfig,

    /// Color scheme for rendering.
    pub theme: Theme,

    /// Column schema, in display order.
    pub columns: Vec<Column<T>>,

    /// Optional per-row action menu.
    pub actions: Option<RowActions<T>>,

    /// Where row data comes from; fixed at construction.
    pub mode: DataMode,

    /// Search/sort/filter/pagination state.
    pub query: QueryState,

    /// Zero-based selection cursor within the visible page.
    pub selected_index: usize,

    /// Debouncer for delegated-mode search input.
    pub debouncer: SearchDebouncer,

    /// Current terminal viewport; drives the filter UI placement.
    pub viewport: Viewport,

    /// Open filter control, if any.
    pub open_filter: Option<FilterPanelState>,

    /// Master row collection (local mode; stays empty when delegated).
    rows: Vec<T>,

    /// The current page and total matching count.
    current: QueryResult<T>,

    /// Whether the component is mounted (resize tracking active).
    mounted: bool,
}

impl<T: TableRow> TableState<T> {
    /// Creates a table with the given configuration, theme, and columns.
    ///
    /// Starts with no rows; supply data with [`set_rows`](Self::set_rows)
    /// (local mode) or [`apply_page`](Self::apply_page) (delegated mode).
    #[must_use]
    pub fn new(config: TableConfig, theme: Theme, columns: Vec<Column<T>>) -> Self {
        let mode = if config.delegated {
            DataMode::Delegated
        } else {
            DataMode::Local
        };
        let query = QueryState::new(config.page_size);
        let debouncer = SearchDebouncer::new(Duration::from_millis(config.debounce_ms));

        Self {
            config,
            theme,
            columns,
            actions: None,
            mode,
            query,
            selected_index: 0,
            debouncer,
            viewport: Viewport::default(),
            open_filter: None,
            rows: Vec::new(),
            current: QueryResult::empty(),
            mounted: false,
        }
    }

    /// Attaches a row action menu.
    #[must_use]
    pub fn with_actions(mut self, actions: RowActions<T>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Marks the component mounted, activating viewport tracking.
    ///
    /// Resize events received before `mount` (or after
    /// [`unmount`](Self::unmount)) are ignored, so no state outlives the
    /// component's lifecycle.
    pub fn mount(&mut self) {
        self.mounted = true;
        tracing::debug!("table mounted");
    }

    /// Tears the component down.
    ///
    /// Cancels any in-flight debounced search so no notification can fire
    /// after teardown, and deactivates viewport tracking.
    pub fn unmount(&mut self) {
        self.debouncer.cancel();
        self.mounted = false;
        tracing::debug!("table unmounted");
    }

    /// Returns whether the component is currently mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Replaces the master row collection (local mode) and recomputes.
    pub fn set_rows(&mut self, rows: Vec<T>) {
        tracing::debug!(row_count = rows.len(), "row collection replaced");
        self.rows = rows;
        self.refresh();
    }

    /// Installs a caller-supplied page (delegated mode).
    ///
    /// The rows are displayed verbatim and the reported total drives all
    /// pagination math; neither is validated against the other.
    pub fn apply_page(&mut self, page: RemotePage<T>) {
        tracing::debug!(
            rows = page.rows.len(),
            total = page.total,
            "delegated page applied"
        );
        self.current = QueryResult {
            rows: page.rows,
            total: page.total,
        };
        self.clamp_selection();
    }

    /// Recomputes the visible page from the master collection (local mode).
    ///
    /// If a data change left the current page beyond the last one, the page
    /// clamps back into range and the pipeline re-runs once. Delegated mode
    /// is a no-op: the caller owns recomputation.
    pub fn refresh(&mut self) {
        if self.mode == DataMode::Delegated {
            return;
        }

        let mut result = run_query(&self.rows, &self.columns, &self.query);
        let last_page = self.query.total_pages(result.total).max(1);
        if self.query.page > last_page {
            self.query.page = last_page;
            result = run_query(&self.rows, &self.columns, &self.query);
        }
        self.current = result;
        self.clamp_selection();
    }

    /// Returns the rows of the current page.
    #[must_use]
    pub fn visible_rows(&self) -> &[T] {
        &self.current.rows
    }

    /// Returns the total matching row count (reported total when delegated).
    #[must_use]
    pub const fn total(&self) -> usize {
        self.current.total
    }

    /// Returns the total page count for the current query.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.query.total_pages(self.current.total)
    }

    /// Returns a reference to the row under the selection cursor, if any.
    #[must_use]
    pub fn selected_row(&self) -> Option<&T> {
        self.current.rows.get(self.selected_index)
    }

    /// Moves the selection cursor down one row, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.current.rows.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.current.rows.len();
    }

    /// Moves the selection cursor up one row, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.current.rows.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.current.rows.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the filter UI placement for the current viewport width.
    #[must_use]
    pub const fn filter_placement(&self) -> FilterPlacement {
        FilterPlacement::for_width(self.viewport.cols, self.config.breakpoint_cols)
    }

    /// Returns the column with the given key, if present in the schema.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Computes a renderable view model from the current state.
    ///
    /// Pre-computes column widths, sort indicators, search match highlight
    /// ranges, filter chips, the pagination footer, and the open filter
    /// control (if any), so the renderer stays free of table logic.
    #[must_use]
    pub fn compute_viewmodel(&self) -> TableViewModel {
        let header_cells: Vec<HeaderCell> = self
            .columns
            .iter()
            .map(|column| HeaderCell {
                label: column.label.clone(),
                sortable: column.sortable,
                indicator: self.query.direction_for(&column.key),
            })
            .collect();

        let rows = self.compute_display_rows();
        let column_widths = self.compute_column_widths(&rows);

        let chips: Vec<FilterChip> = if self.config.show_filters {
            self.query
                .filters
                .iter()
                .map(|filter| FilterChip {
                    column_label: self
                        .column(&filter.column)
                        .map_or_else(|| filter.column.clone(), |c| c.label.clone()),
                    summary: filter.summary(),
                })
                .collect()
        } else {
            Vec::new()
        };

        let empty_state = if rows.is_empty() {
            Some(EmptyState {
                message: "No matching entries".to_string(),
                subtitle: "Adjust the search or active filters".to_string(),
            })
        } else {
            None
        };

        let search_bar = if self.config.searchable {
            Some(SearchBarInfo {
                query: self.query.search_term.clone(),
                placeholder: self.config.search_placeholder.clone(),
            })
        } else {
            None
        };

        TableViewModel {
            header_cells,
            column_widths,
            rows,
            chips,
            footer: self.compute_footer(),
            search_bar,
            empty_state,
            filter_panel: self.compute_filter_panel(),
        }
    }

    /// Builds display rows for the visible page.
    ///
    /// Highlight ranges are computed only for plain text cells in local mode
    /// while a search is active: the search itself only matches string
    /// fields, so highlighting anything else would mislead.
    fn compute_display_rows(&self) -> Vec<DisplayRow> {
        let highlight_term = match self.mode {
            DataMode::Local if !self.query.search_term.is_empty() => {
                Some(self.query.search_term.as_str())
            }
            _ => None,
        };

        self.current
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let cells = self
                    .columns
                    .iter()
                    .map(|column| {
                        let text = column.display(row);
                        let highlight_ranges = match highlight_term {
                            Some(term)
                                if column.cell.is_none()
                                    && matches!(column.value(row), CellValue::Text(_)) =>
                            {
                                match_ranges(&text, term)
                            }
                            _ => Vec::new(),
                        };
                        DisplayCell {
                            text,
                            highlight_ranges,
                        }
                    })
                    .collect();

                DisplayRow {
                    id: row.id(),
                    cells,
                    is_selected: index == self.selected_index,
                    actions: self
                        .actions
                        .as_ref()
                        .map_or_else(Vec::new, |actions| actions.for_row(row)),
                }
            })
            .collect()
    }

    /// Computes one display width per column from the header label and the
    /// visible cell texts, clamped to a sane range.
    fn compute_column_widths(&self, rows: &[DisplayRow]) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                // One extra cell for the sort indicator glyph.
                let mut width = column.label.chars().count() + 2;
                for row in rows {
                    if let Some(cell) = row.cells.get(index) {
                        width = width.max(cell.text.chars().count());
                    }
                }
                width.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH)
            })
            .collect()
    }

    /// Builds the pagination footer.
    ///
    /// The range label is computed from page, page size, and the total; in
    /// delegated mode that total is the caller's reported number, trusted
    /// even when it disagrees with the supplied row count.
    fn compute_footer(&self) -> FooterInfo {
        let total = self.current.total;
        let total_pages = self.total_pages();
        let page = self.query.page;
        let page_size = self.query.page_size;

        let (first, last) = if total == 0 {
            (0, 0)
        } else {
            let first = (page - 1) * page_size + 1;
            let last = (page * page_size).min(total);
            (first.min(total), last)
        };

        FooterInfo {
            range_label: format!("Showing {first} to {last} of {total} entries"),
            items: build_page_items(page, total_pages),
            page_size,
            page_size_options: self.config.page_size_options.clone(),
            at_first: page <= 1,
            at_last: page >= total_pages.max(1),
        }
    }

    /// Builds the open filter control view, if one is open.
    fn compute_filter_panel(&self) -> Option<FilterPanelView> {
        let open = self.open_filter.as_ref()?;
        let column = self.column(&open.column)?;
        let placement = self.filter_placement();

        let body = match &column.filter {
            Some(FilterSpec::DateRange) => {
                let (from, to) = match self.query.filter_for(&column.key) {
                    Some(FilterValue::DateRange { from, to }) => (*from, *to),
                    _ => (None, None),
                };
                FilterPanelBody::DateRange { from, to }
            }
            Some(FilterSpec::Options(_)) => {
                let labels = column.filter_option_labels(self.option_source_rows());
                let disabled = labels.is_empty();
                let options = narrow_options(&labels, &open.option_query)
                    .into_iter()
                    .map(|label| {
                        let checked = match self.query.filter_for(&column.key) {
                            Some(FilterValue::OneOf(set)) => set.contains(&label),
                            Some(FilterValue::Scalar(s)) => *s == label,
                            _ => false,
                        };
                        ChecklistOption { label, checked }
                    })
                    .collect();
                FilterPanelBody::Checklist {
                    query: open.option_query.clone(),
                    options,
                    disabled,
                }
            }
            None => return None,
        };

        Some(FilterPanelView {
            column_label: column.label.clone(),
            placement,
            body,
        })
    }

    /// The rows dynamic filter options derive from: the master collection in
    /// local mode, the current page in delegated mode (all that is held).
    fn option_source_rows(&self) -> &[T] {
        match self.mode {
            DataMode::Local => &self.rows,
            DataMode::Delegated => &self.current.rows,
        }
    }

    /// Clamps the selection cursor into the visible row range.
    fn clamp_selection(&mut self) {
        if self.current.rows.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.current.rows.len() - 1);
        }
    }
}

impl<T: TableRow> std::fmt::Debug for TableState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableState")
            .field("mode", &self.mode)
            .field("query", &self.query)
            .field("rows", &self.rows.len())
            .field("visible", &self.current.rows.len())
            .field("total", &self.current.total)
            .field("selected_index", &self.selected_index)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

/// Narrows option labels by a fuzzy match over the internal search query.
///
/// An empty query keeps every label in its original order.
fn narrow_options(labels: &[String], query: &str) -> Vec<String> {
    if query.is_empty() {
        return labels.to_vec();
    }
    let matcher = SkimMatcherV2::default();
    labels
        .iter()
        .filter(|label| matcher.fuzzy_match(label, query).is_some())
        .cloned()
        .collect()
}

/// Builds the page strip, collapsing long runs into ellipses.
///
/// At most [`MAX_PAGE_SLOTS`] slots are produced: the first and last pages
/// are always present, with a window around the current page and ellipsis
/// markers for collapsed runs.
fn build_page_items(current: usize, total_pages: usize) -> Vec<PageItem> {
    let number = |page: usize| PageItem::Number {
        page,
        is_current: page == current,
    };

    if total_pages <= MAX_PAGE_SLOTS {
        return (1..=total_pages).map(number).collect();
    }

    let mut items = Vec::with_capacity(MAX_PAGE_SLOTS);
    if current <= 4 {
        items.extend((1..=5).map(number));
        items.push(PageItem::Ellipsis);
        items.push(number(total_pages));
    } else if current >= total_pages - 3 {
        items.push(number(1));
        items.push(PageItem::Ellipsis);
        items.extend((total_pages - 4..=total_pages).map(number));
    } else {
        items.push(number(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(number));
        items.push(PageItem::Ellipsis);
        items.push(number(total_pages));
    }
    items
}
