//! Actions emitted by the event handler for the host to execute.
//!
//! The handler mutates table state and returns a list of actions describing
//! the side effects the host must carry out: forwarding a query notification
//! to the backing data source, or reacting to a row-level interaction. Row
//! events carry the full row object so the caller needs no index bookkeeping.

use crate::delegate::QueryNotification;

/// A side effect for the host, produced while handling one event.
#[derive(Debug, Clone)]
pub enum TableAction<T> {
    /// Forward a query-state change to the delegated data source.
    ///
    /// Only emitted in delegated mode. Local mode recomputes internally and
    /// never produces this variant.
    Notify(QueryNotification),

    /// The user activated a row (click or Enter on the cursor row).
    RowActivated(T),

    /// The user invoked a row action from the actions affordance.
    ///
    /// Deliberately does not imply [`RowActivated`](Self::RowActivated):
    /// clicking the affordance must not double as a row click.
    RowActionInvoked {
        /// Label of the invoked action.
        action: String,
        /// The row the action applies to.
        row: T,
    },
}
