//! Client-side query execution.
//!
//! A pure mapping from (full row collection, query state, column schema) to
//! (visible page, total matching count). The pipeline order is fixed and
//! load-bearing: search, then filters, then sort, then pagination. Sorting
//! must act on the searched-and-filtered set, and the total count is taken
//! after filtering but before pagination.

use crate::domain::column::Column;
use crate::domain::row::TableRow;
use crate::domain::value::CellValue;
use crate::query::state::{QueryState, SortDirection};

/// The outcome of running a query against a row collection.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult<T> {
    /// The rows of the current page, in display order.
    pub rows: Vec<T>,
    /// Total matching rows before pagination; drives the page count and the
    /// "Showing X to Y of N entries" label.
    pub total: usize,
}

impl<T> QueryResult<T> {
    /// An empty result.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }
}

/// Runs the full query pipeline over a row collection.
///
/// The input rows are never mutated; the result holds clones of the rows on
/// the requested page only. Applying the same query state to the same
/// collection twice yields identical results.
pub fn run_query<T: TableRow>(
    rows: &[T],
    columns: &[Column<T>],
    query: &QueryState,
) -> QueryResult<T> {
    let _span = tracing::debug_span!(
        "run_query",
        total_rows = rows.len(),
        query_len = query.search_term.len(),
        filter_count = query.filters.len(),
        page = query.page,
    )
    .entered();

    let mut matched: Vec<&T> = rows.iter().collect();

    if !query.search_term.is_empty() {
        let needle = query.search_term.to_lowercase();
        matched.retain(|row| row_matches_search(*row, &needle));
    }

    for filter in &query.filters {
        // A filter naming a column outside the schema has nothing to resolve
        // its value against; it is skipped rather than rejecting every row.
        let Some(column) = columns.iter().find(|c| c.key == filter.column) else {
            tracing::debug!(column = %filter.column, "filter references unknown column, skipping");
            continue;
        };
        matched.retain(|row| filter.value.accepts(&column.value(row)));
    }

    if let Some(sort) = &query.sort {
        if let Some(column) = columns.iter().find(|c| c.key == sort.column) {
            // sort_by is stable: ties keep their relative input order, so
            // cycling a sort back to "none" restores the original order.
            matched.sort_by(|a, b| {
                let ordering = column.value(a).compare(&column.value(b));
                match sort.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }
    }

    let total = matched.len();
    let start = (query.page.saturating_sub(1)) * query.page_size;
    let page_rows: Vec<T> = matched
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .cloned()
        .collect();

    tracing::debug!(
        matched = total,
        visible = page_rows.len(),
        "query executed"
    );

    QueryResult {
        rows: page_rows,
        total,
    }
}

/// Tests whether any string-typed field of a row contains the lowercased
/// search needle.
///
/// Only fields resolving to [`CellValue::Text`] participate; numbers,
/// booleans, dates, and lists are never matched by free-text search.
fn row_matches_search<T: TableRow>(row: &T, needle: &str) -> bool {
    T::field_names().iter().any(|key| match row.field(key) {
        CellValue::Text(text) => text.to_lowercase().contains(needle),
        _ => false,
    })
}

/// Computes all case-insensitive occurrences of a search term in a cell's
/// display text, as byte ranges into the original string.
///
/// Used by the presentation layer to highlight matches in visible cells.
/// Returns an empty list for an empty term.
#[must_use]
pub fn match_ranges(text: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    let needle = term.to_lowercase();
    // Lowercasing can change byte lengths for non-ASCII text; ranges are only
    // valid when the fold is length-preserving.
    if haystack.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        ranges.push((start, end));
        from = end;
    }
    ranges
}
