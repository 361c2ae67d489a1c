//! Query layer: state transitions, client-side execution, and debouncing.
//!
//! This module is the engine's computational core:
//!
//! - [`state`]: [`QueryState`](state::QueryState), the single source of truth
//!   for search/sort/filter/pagination, with its transition rules
//! - [`executor`]: the pure search → filter → sort → paginate pipeline used
//!   when the data source is local
//! - [`debounce`]: coalescing of rapid search input for delegated mode
//!
//! The executor is bypassed entirely in delegated mode; see
//! [`crate::delegate`] for the outbound notification contract.

pub mod debounce;
pub mod executor;
pub mod state;

pub use debounce::SearchDebouncer;
pub use executor::{match_ranges, run_query, QueryResult};
pub use state::{QueryState, SortDirection, SortState};
