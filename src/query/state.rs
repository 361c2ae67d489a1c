//! Query state: the single source of truth for search, sort, filter, and
//! pagination.
//!
//! [`QueryState`] owns the transition rules between its parts. Any change
//! that can reshape the result set (search or filter changes, page-size
//! changes) resets to page 1, so the user never lands on a page that no
//! longer exists. All transitions are total: there are no error conditions,
//! and out-of-range page requests are clamped rather than rejected.

use crate::domain::filter::{Filter, FilterValue};
use serde::{Deserialize, Serialize};

/// Direction of an active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// An active sort: a column key and a direction.
///
/// "No sort" is represented as `Option<SortState>::None`, so a direction
/// can never exist without a column (and vice versa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    /// Key of the sorted column.
    pub column: String,
    /// Sort direction.
    pub direction: SortDirection,
}

/// Aggregated query state for one table.
///
/// Mutated only through the transition methods below; the event handler is
/// the sole caller.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    /// Free-text search term. Empty means no search.
    pub search_term: String,
    /// Active sort, if any.
    pub sort: Option<SortState>,
    /// Active filters, at most one per column, in insertion order.
    pub filters: Vec<Filter>,
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
}

impl QueryState {
    /// Creates a query state with no search, sort, or filters, positioned on
    /// page 1 with the given page size.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            filters: Vec::new(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Updates the search term, resetting to page 1 when it changes.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term == self.search_term {
            return;
        }
        tracing::debug!(term_len = term.len(), "search term updated");
        self.search_term = term;
        self.page = 1;
    }

    /// Cycles the sort state for a column.
    ///
    /// On the already-sorted column the direction advances ascending, then
    /// descending, then back to no sort. Selecting a different column starts
    /// fresh at ascending. Pagination is left untouched; the executor
    /// re-slices the same page over the re-ordered set.
    pub fn cycle_sort(&mut self, column: &str) {
        self.sort = match self.sort.take() {
            Some(SortState {
                column: active,
                direction,
            }) if active == column => match direction {
                SortDirection::Ascending => Some(SortState {
                    column: active,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortState {
                column: column.to_string(),
                direction: SortDirection::Ascending,
            }),
        };
        tracing::debug!(column = %column, sort = ?self.sort, "sort cycled");
    }

    /// Replaces or removes the filter for a column, resetting to page 1.
    ///
    /// An empty value (empty string, empty selection, fully open date range)
    /// removes the column's entry rather than storing it, so the active set
    /// only ever holds effective filters.
    pub fn set_filter(&mut self, column: &str, value: FilterValue) {
        self.filters.retain(|f| f.column != column);
        if !value.is_empty() {
            self.filters.push(Filter::new(column, value));
        }
        tracing::debug!(
            column = %column,
            active_filters = self.filters.len(),
            "filter set updated"
        );
        self.page = 1;
    }

    /// Removes every active filter and resets to page 1.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.page = 1;
    }

    /// Moves to a page, clamped to `[1, total_pages]`.
    ///
    /// With zero pages (no rows) the page clamps to 1.
    pub fn set_page(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    /// Changes the rows-per-page and forces page 1.
    ///
    /// A zero size is ignored; the presentation layer only offers sizes from
    /// its fixed candidate list, so this is purely defensive.
    pub fn set_page_size(&mut self, size: usize) {
        if size == 0 {
            return;
        }
        self.page_size = size;
        self.page = 1;
    }

    /// Returns the active filter value for a column, if any.
    #[must_use]
    pub fn filter_for(&self, column: &str) -> Option<&FilterValue> {
        self.filters
            .iter()
            .find(|f| f.column == column)
            .map(|f| &f.value)
    }

    /// Returns the sort direction for a column, if it is the sorted column.
    #[must_use]
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.sort
            .as_ref()
            .filter(|s| s.column == column)
            .map(|s| s.direction)
    }

    /// Computes the page count for a total row count.
    ///
    /// `ceil(total / page_size)`; zero when there are no rows.
    #[must_use]
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }
}
