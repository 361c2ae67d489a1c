//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user
//! interaction and data-supply events, translating them into state changes
//! and host-side actions. It is the primary control flow coordinator for a
//! table instance.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (input translation, resize, data supply)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `TableState` and `QueryState` methods
//! 4. Actions are collected and returned for the host to execute
//!
//! # Debounce ordering
//!
//! In delegated mode, search input arms the debouncer instead of notifying
//! immediately; [`TableEvent::Tick`] settles it. An explicit page or
//! page-size change cancels any pending debounce *before* mutating the page,
//! so a stale search can never settle afterwards and silently reset the page
//! the user just navigated to.

use crate::app::actions::TableAction;
use crate::app::modes::DataMode;
use crate::app::state::{FilterPanelState, TableState};
use crate::delegate::{QueryNotification, RemotePage};
use crate::domain::error::Result;
use crate::domain::filter::FilterValue;
use crate::domain::row::TableRow;
use std::collections::BTreeSet;
use std::time::Instant;

/// Events the host feeds into a table instance.
///
/// Each event represents a discrete user interaction or data arrival. The
/// handler processes them sequentially, ensuring deterministic transitions.
#[derive(Debug, Clone)]
pub enum TableEvent<T> {
    /// The search term changed (carries the full current term).
    SearchInput(String),
    /// A column header was clicked (sort cycling).
    HeaderClicked(String),
    /// A filter value was applied to a column (empty values remove it).
    FilterApplied {
        /// Column key.
        column: String,
        /// New filter value.
        value: FilterValue,
    },
    /// All active filters were cleared.
    ClearFilters,

    /// A specific page was selected.
    PageSelected(usize),
    /// The next-page control was activated.
    NextPage,
    /// The previous-page control was activated.
    PrevPage,
    /// The first-page control was activated.
    FirstPage,
    /// The last-page control was activated.
    LastPage,
    /// A rows-per-page candidate was selected.
    PageSizeSelected(usize),

    /// Selection cursor moved down one row.
    CursorDown,
    /// Selection cursor moved up one row.
    CursorUp,
    /// The cursor row was activated (Enter).
    ActivateRow,
    /// A visible row was clicked directly (zero-based index into the page).
    RowClicked(usize),
    /// A row action was invoked from the actions affordance.
    ///
    /// Carries only the action; the row click deliberately does not fire
    /// alongside it.
    ActionClicked {
        /// Zero-based index into the visible page.
        row: usize,
        /// Label of the invoked action.
        action: String,
    },

    /// A column's filter control was opened.
    OpenFilterPanel(String),
    /// The open filter control's option-narrowing query changed.
    FilterOptionQuery(String),
    /// An option in the open checklist was toggled.
    ToggleFilterOption(String),
    /// The open filter control was closed.
    CloseFilterPanel,

    /// The caller supplied a page of rows (delegated mode).
    PageLoaded(RemotePage<T>),
    /// The terminal viewport changed size.
    Resized {
        rows: usize,
        cols: usize,
    },
    /// Clock tick; settles a pending debounced search.
    Tick(Instant),
}

/// Processes an event, mutates table state, and returns actions to execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair: whether the UI needs re-rendering, and
/// the side effects the host must carry out (delegate notifications, row
/// events).
///
/// # Errors
///
/// The engine's transitions are total; the `Result` exists for parity with
/// host integration points that can fail, and currently always returns `Ok`.
#[allow(clippy::too_many_lines)]
pub fn handle_event<T: TableRow>(
    state: &mut TableState<T>,
    event: &TableEvent<T>,
) -> Result<(bool, Vec<TableAction<T>>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event_name(event)).entered();

    match event {
        TableEvent::SearchInput(term) => {
            if !state.config.searchable || *term == state.query.search_term {
                return Ok((false, vec![]));
            }
            state.query.set_search_term(term.clone());
            match state.mode {
                DataMode::Local => {
                    state.refresh();
                    Ok((true, vec![]))
                }
                DataMode::Delegated => {
                    // Forwarded only after the quiet window elapses, so rapid
                    // typing does not flood the caller.
                    state.debouncer.note(term.clone(), Instant::now());
                    Ok((true, vec![]))
                }
            }
        }

        TableEvent::Tick(now) => {
            if let Some(term) = state.debouncer.poll(*now) {
                tracing::debug!(term = %term, "debounced search settled");
                return Ok((
                    false,
                    vec![TableAction::Notify(QueryNotification::SearchChanged {
                        term,
                    })],
                ));
            }
            Ok((false, vec![]))
        }

        TableEvent::HeaderClicked(key) => {
            let Some(column) = state.column(key) else {
                return Ok((false, vec![]));
            };
            if !column.sortable {
                tracing::debug!(column = %key, "header click on unsortable column ignored");
                return Ok((false, vec![]));
            }
            state.query.cycle_sort(key);
            match state.mode {
                DataMode::Local => {
                    state.refresh();
                    Ok((true, vec![]))
                }
                DataMode::Delegated => {
                    let sort = state.query.sort.clone();
                    Ok((
                        true,
                        vec![TableAction::Notify(QueryNotification::SortChanged {
                            column: sort.as_ref().map(|s| s.column.clone()),
                            direction: sort.map(|s| s.direction),
                        })],
                    ))
                }
            }
        }

        TableEvent::FilterApplied { column, value } => {
            state.query.set_filter(column, value.clone());
            Ok((true, filters_changed(state)))
        }

        TableEvent::ToggleFilterOption(label) => {
            let Some(open) = state.open_filter.clone() else {
                return Ok((false, vec![]));
            };
            let mut selected: BTreeSet<String> =
                match state.query.filter_for(&open.column) {
                    Some(FilterValue::OneOf(set)) => set.clone(),
                    Some(FilterValue::Scalar(s)) => BTreeSet::from([s.clone()]),
                    _ => BTreeSet::new(),
                };
            if !selected.remove(label) {
                selected.insert(label.clone());
            }
            // Deselecting the last option empties the set, which removes the
            // filter entirely per the emptiness rule.
            state
                .query
                .set_filter(&open.column, FilterValue::OneOf(selected));
            Ok((true, filters_changed(state)))
        }

        TableEvent::ClearFilters => {
            if state.query.filters.is_empty() {
                return Ok((false, vec![]));
            }
            state.query.clear_filters();
            Ok((true, filters_changed(state)))
        }

        TableEvent::PageSelected(page) => goto_page(state, *page),
        TableEvent::NextPage => goto_page(state, state.query.page.saturating_add(1)),
        TableEvent::PrevPage => goto_page(state, state.query.page.saturating_sub(1).max(1)),
        TableEvent::FirstPage => goto_page(state, 1),
        TableEvent::LastPage => goto_page(state, state.total_pages().max(1)),

        TableEvent::PageSizeSelected(size) => {
            if *size == 0 || *size == state.query.page_size {
                return Ok((false, vec![]));
            }
            // Cancel first: a stale debounced search settling later must not
            // override the pagination the user just changed.
            state.debouncer.cancel();
            state.query.set_page_size(*size);
            match state.mode {
                DataMode::Local => {
                    state.refresh();
                    Ok((true, vec![]))
                }
                DataMode::Delegated => Ok((
                    true,
                    vec![TableAction::Notify(QueryNotification::PageChanged {
                        page: state.query.page,
                        page_size: state.query.page_size,
                    })],
                )),
            }
        }

        TableEvent::CursorDown => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        TableEvent::CursorUp => {
            state.move_selection_up();
            Ok((true, vec![]))
        }

        TableEvent::ActivateRow => Ok(state.selected_row().cloned().map_or_else(
            || (false, vec![]),
            |row| {
                tracing::debug!(row_id = %row.id(), "row activated");
                (false, vec![TableAction::RowActivated(row)])
            },
        )),

        TableEvent::RowClicked(index) => {
            let Some(row) = state.visible_rows().get(*index).cloned() else {
                return Ok((false, vec![]));
            };
            state.selected_index = *index;
            tracing::debug!(row_id = %row.id(), "row clicked");
            Ok((true, vec![TableAction::RowActivated(row)]))
        }

        TableEvent::ActionClicked { row, action } => {
            let Some(row) = state.visible_rows().get(*row).cloned() else {
                return Ok((false, vec![]));
            };
            let available = state
                .actions
                .as_ref()
                .map_or_else(Vec::new, |actions| actions.for_row(&row));
            if !available.iter().any(|a| a.label == *action) {
                tracing::debug!(action = %action, "unknown row action ignored");
                return Ok((false, vec![]));
            }
            tracing::debug!(row_id = %row.id(), action = %action, "row action invoked");
            Ok((
                false,
                vec![TableAction::RowActionInvoked {
                    action: action.clone(),
                    row,
                }],
            ))
        }

        TableEvent::OpenFilterPanel(key) => {
            if !state.config.show_filters {
                return Ok((false, vec![]));
            }
            let has_filter = state.column(key).is_some_and(|c| c.filter.is_some());
            if !has_filter {
                tracing::debug!(column = %key, "filter open on unfilterable column ignored");
                return Ok((false, vec![]));
            }
            state.open_filter = Some(FilterPanelState {
                column: key.clone(),
                option_query: String::new(),
            });
            Ok((true, vec![]))
        }

        TableEvent::FilterOptionQuery(query) => {
            let Some(open) = state.open_filter.as_mut() else {
                return Ok((false, vec![]));
            };
            open.option_query = query.clone();
            Ok((true, vec![]))
        }

        TableEvent::CloseFilterPanel => {
            if state.open_filter.take().is_none() {
                return Ok((false, vec![]));
            }
            Ok((true, vec![]))
        }

        TableEvent::PageLoaded(page) => {
            if state.mode != DataMode::Delegated {
                tracing::debug!("page supply ignored in local mode");
                return Ok((false, vec![]));
            }
            state.apply_page(page.clone());
            Ok((true, vec![]))
        }

        TableEvent::Resized { rows, cols } => {
            if !state.is_mounted() {
                tracing::debug!("resize ignored while unmounted");
                return Ok((false, vec![]));
            }
            state.viewport.rows = *rows;
            state.viewport.cols = *cols;
            Ok((true, vec![]))
        }
    }
}

/// Applies a page transition with clamping and debounce cancellation.
fn goto_page<T: TableRow>(
    state: &mut TableState<T>,
    target: usize,
) -> Result<(bool, Vec<TableAction<T>>)> {
    // Cancel first: a stale debounced search settling later must not reset
    // the page the user just navigated to.
    state.debouncer.cancel();

    let before = state.query.page;
    state.query.set_page(target, state.total_pages());
    if state.query.page == before {
        return Ok((false, vec![]));
    }

    match state.mode {
        DataMode::Local => {
            state.refresh();
            Ok((true, vec![]))
        }
        DataMode::Delegated => Ok((
            true,
            vec![TableAction::Notify(QueryNotification::PageChanged {
                page: state.query.page,
                page_size: state.query.page_size,
            })],
        )),
    }
}

/// Builds the actions for a filter-set change: a notification when
/// delegated, nothing when local (the refresh happens in place).
fn filters_changed<T: TableRow>(state: &mut TableState<T>) -> Vec<TableAction<T>> {
    match state.mode {
        DataMode::Local => {
            state.refresh();
            vec![]
        }
        DataMode::Delegated => vec![TableAction::Notify(QueryNotification::FiltersChanged {
            filters: state.query.filters.clone(),
        })],
    }
}

/// Returns a short event name for tracing.
fn event_name<T>(event: &TableEvent<T>) -> &'static str {
    match event {
        TableEvent::SearchInput(_) => "SearchInput",
        TableEvent::HeaderClicked(_) => "HeaderClicked",
        TableEvent::FilterApplied { .. } => "FilterApplied",
        TableEvent::ClearFilters => "ClearFilters",
        TableEvent::PageSelected(_) => "PageSelected",
        TableEvent::NextPage => "NextPage",
        TableEvent::PrevPage => "PrevPage",
        TableEvent::FirstPage => "FirstPage",
        TableEvent::LastPage => "LastPage",
        TableEvent::PageSizeSelected(_) => "PageSizeSelected",
        TableEvent::CursorDown => "CursorDown",
        TableEvent::CursorUp => "CursorUp",
        TableEvent::ActivateRow => "ActivateRow",
        TableEvent::RowClicked(_) => "RowClicked",
        TableEvent::ActionClicked { .. } => "ActionClicked",
        TableEvent::OpenFilterPanel(_) => "OpenFilterPanel",
        TableEvent::FilterOptionQuery(_) => "FilterOptionQuery",
        TableEvent::ToggleFilterOption(_) => "ToggleFilterOption",
        TableEvent::CloseFilterPanel => "CloseFilterPanel",
        TableEvent::PageLoaded(_) => "PageLoaded",
        TableEvent::Resized { .. } => "Resized",
        TableEvent::Tick(_) => "Tick",
    }
}
