//! Domain layer for the Marquee table engine.
//!
//! This module contains the core data model the engine operates on,
//! independent of presentation or host concerns: opaque rows, column
//! schemas, cell values, filters, and per-row actions.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`value`]: The displayable cell value union
//! - [`row`]: The row contract implemented by caller record types
//! - [`column`]: Column schema with tagged accessors and filter specs
//! - [`filter`]: Filter values and the active filter set
//! - [`action`]: Per-row action menus
//!
//! # Examples
//!
//! ```
//! use marquee::domain::{CellValue, Filter, FilterValue};
//!
//! let filter = Filter::new("status", FilterValue::Scalar("Online".to_string()));
//! assert!(filter.value.accepts(&CellValue::Text("Online".to_string())));
//! ```

pub mod action;
pub mod column;
pub mod error;
pub mod filter;
pub mod row;
pub mod value;

pub use action::{RowAction, RowActions};
pub use column::{Accessor, Column, FilterOptions, FilterSpec};
pub use error::{MarqueeError, Result};
pub use filter::{Filter, FilterValue};
pub use row::TableRow;
pub use value::CellValue;
