//! Server-side delegation: outbound query notifications and inbound pages.
//!
//! When a table operates in delegated mode, the client-side executor is
//! bypassed. Row data arrives pre-searched, pre-filtered, pre-sorted and
//! pre-paginated from the caller; the engine's only job on a query change is
//! to notify the caller, then trust whatever rows and total count come back.
//!
//! # Trust contract
//!
//! The caller is responsible for returning exactly `page_size` rows (or
//! fewer on the last page) and an accurate total. The engine does not
//! validate this. If the caller mis-reports the total, the pagination math
//! reflects the caller's number while the body displays the rows actually
//! supplied; the divergence surfaces as a wrong "Showing X to Y of N
//! entries" label, never as a crash.
//!
//! # Wire form
//!
//! Notifications are plain serde values, so a host that fronts a remote
//! backend can forward them unchanged:
//!
//! ```
//! use marquee::delegate::QueryNotification;
//!
//! let n = QueryNotification::PageChanged { page: 3, page_size: 25 };
//! let json = n.to_json().unwrap();
//! assert!(json.contains("page_changed"));
//! ```

use crate::domain::error::Result;
use crate::domain::filter::Filter;
use crate::query::state::SortDirection;
use serde::{Deserialize, Serialize};

/// An outbound notification describing one query-state transition.
///
/// Emitted by the event handler in delegated mode and dispatched to a
/// [`TableDelegate`] (or serialized for a remote host).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QueryNotification {
    /// The debounced search term settled.
    SearchChanged {
        /// The settled term; empty when the search was cleared.
        term: String,
    },

    /// The sort column or direction changed.
    SortChanged {
        /// Sorted column key, or `None` when the sort was cleared.
        column: Option<String>,
        /// Sort direction, present exactly when `column` is.
        direction: Option<SortDirection>,
    },

    /// The active filter set changed.
    FiltersChanged {
        /// The complete active filter set after the change.
        filters: Vec<Filter>,
    },

    /// The page or page size changed.
    PageChanged {
        /// Current page, 1-based.
        page: usize,
        /// Rows per page.
        page_size: usize,
    },
}

impl QueryNotification {
    /// Serializes this notification as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One page of rows supplied by a delegated-mode caller.
///
/// The engine displays `rows` verbatim and uses `total` for all pagination
/// math, without cross-checking the two.
#[derive(Debug, Clone, PartialEq)]
pub struct RemotePage<T> {
    /// The rows of the current page, already windowed by the caller.
    pub rows: Vec<T>,
    /// Total matching rows across all pages, as reported by the caller.
    pub total: usize,
}

impl<T> RemotePage<T> {
    /// An empty page.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
        }
    }
}

/// Receiver for delegated-mode query notifications.
///
/// Hosts implement this against whatever actually answers queries (a mock
/// backend, an HTTP API, a database). Each method maps to one transition;
/// [`dispatch`](TableDelegate::dispatch) fans a [`QueryNotification`] out to
/// the right method for hosts that consume the typed value directly.
pub trait TableDelegate {
    /// Called when the debounced search term settles.
    fn on_search_change(&mut self, term: &str);

    /// Called when the sort column or direction changes. `None`/`None`
    /// means the sort was cleared.
    fn on_sort_change(&mut self, column: Option<&str>, direction: Option<SortDirection>);

    /// Called when the active filter set changes.
    fn on_filter_change(&mut self, filters: &[Filter]);

    /// Called when the page or page size changes.
    fn on_pagination_change(&mut self, page: usize, page_size: usize);

    /// Routes a typed notification to the matching callback.
    fn dispatch(&mut self, notification: &QueryNotification) {
        match notification {
            QueryNotification::SearchChanged { term } => self.on_search_change(term),
            QueryNotification::SortChanged { column, direction } => {
                self.on_sort_change(column.as_deref(), *direction);
            }
            QueryNotification::FiltersChanged { filters } => self.on_filter_change(filters),
            QueryNotification::PageChanged { page, page_size } => {
                self.on_pagination_change(*page, *page_size);
            }
        }
    }
}
