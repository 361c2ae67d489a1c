//! Filter values and the active filter set.
//!
//! A filter pairs a column key with a [`FilterValue`]. The value's shape is
//! fixed when the filter is created (a tagged union), never inferred at
//! application time. An empty value removes the filter from the active set
//! rather than being stored.

use crate::domain::value::CellValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The value shape of one filter.
///
/// Serializable so delegated-mode hosts can forward the active filter set
/// over a wire unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    /// Exact match against the stringified cell value.
    Scalar(String),
    /// Multi-select: the cell must contain (list cells) or equal (scalar
    /// cells) at least one of the selected values.
    OneOf(BTreeSet<String>),
    /// Inclusive date range; either end may be open.
    DateRange {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl FilterValue {
    /// Builds a multi-select value from an iterator of labels.
    pub fn one_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::OneOf(values.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if this is the value's empty representation.
    ///
    /// An empty scalar, an empty selection set, or a date range with both
    /// ends open all count as empty. Setting an empty value on a column
    /// removes its filter entirely.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Scalar(s) => s.is_empty(),
            Self::OneOf(set) => set.is_empty(),
            Self::DateRange { from, to } => from.is_none() && to.is_none(),
        }
    }

    /// Tests whether a cell value satisfies this filter.
    ///
    /// - Date range: the cell must coerce to a date inside the inclusive
    ///   bounds; with one open end only the present bound is checked. A cell
    ///   that does not coerce to a date fails the filter.
    /// - Multi-select: list cells pass when any selected value is present in
    ///   the list; scalar cells pass when their display string is selected.
    /// - Scalar: exact equality against the cell's display string.
    #[must_use]
    pub fn accepts(&self, cell: &CellValue) -> bool {
        match self {
            Self::Scalar(expected) => cell.display() == *expected,
            Self::OneOf(selected) => match cell {
                CellValue::List(items) => items.iter().any(|item| selected.contains(item)),
                other => selected.contains(&other.display()),
            },
            Self::DateRange { from, to } => {
                let Some(date) = cell.as_date() else {
                    return false;
                };
                if from.is_some_and(|lower| date < lower) {
                    return false;
                }
                !to.is_some_and(|upper| date > upper)
            }
        }
    }
}

/// One active filter: a column key and its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Key of the column this filter applies to. A column appears at most
    /// once in the active filter set.
    pub column: String,
    /// The filter value.
    pub value: FilterValue,
}

impl Filter {
    /// Creates a filter for the given column.
    #[must_use]
    pub fn new(column: impl Into<String>, value: FilterValue) -> Self {
        Self {
            column: column.into(),
            value,
        }
    }

    /// Returns a short human-readable summary for chip rendering.
    ///
    /// Scalars render verbatim, selections join with `", "`, and date ranges
    /// render as `from..to` with open ends left blank.
    #[must_use]
    pub fn summary(&self) -> String {
        match &self.value {
            FilterValue::Scalar(s) => s.clone(),
            FilterValue::OneOf(set) => set.iter().cloned().collect::<Vec<_>>().join(", "),
            FilterValue::DateRange { from, to } => {
                let fmt = |d: &Option<NaiveDate>| {
                    d.map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default()
                };
                format!("{}..{}", fmt(from), fmt(to))
            }
        }
    }
}
