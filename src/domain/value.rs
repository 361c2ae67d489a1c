//! Cell value representation and comparison.
//!
//! This module defines [`CellValue`], the displayable value a column accessor
//! produces for one cell. Rows are opaque to the engine; every read goes
//! through an accessor that resolves to one of these variants, so searching,
//! filtering, sorting and rendering can handle values uniformly and
//! exhaustively.

use chrono::NaiveDate;
use std::cmp::Ordering;

/// Date format used when displaying and parsing plain dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single displayable cell value.
///
/// The engine never inspects row types directly. Accessors produce a
/// `CellValue`, and all downstream behavior is defined per variant:
///
/// - Free-text search matches `Text` values only.
/// - Date-range filters apply to values that [coerce to a date](CellValue::as_date).
/// - Multi-select filters treat `List` values as collections and everything
///   else as scalars.
/// - `Missing` displays as an empty string, never as `"null"` or similar.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// A plain string value.
    Text(String),
    /// A signed integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
    /// A calendar date (no time component).
    Date(NaiveDate),
    /// A collection of string values (e.g. tags).
    List(Vec<String>),
    /// An absent value; a row missing an expected field resolves to this.
    Missing,
}

impl CellValue {
    /// Returns the display string for this value.
    ///
    /// `Missing` renders as an empty string. `List` values are joined with
    /// `", "`. Dates use the `YYYY-MM-DD` format.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Date(d) => d.format(DATE_FORMAT).to_string(),
            Self::List(items) => items.join(", "),
            Self::Missing => String::new(),
        }
    }

    /// Attempts to interpret this value as a calendar date.
    ///
    /// `Date` values convert directly. `Text` values are parsed first as
    /// `YYYY-MM-DD`, then as an RFC 3339 timestamp (keeping the date part).
    /// All other variants return `None`.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Text(s) => NaiveDate::parse_from_str(s, DATE_FORMAT)
                .ok()
                .or_else(|| {
                    chrono::DateTime::parse_from_rfc3339(s)
                        .ok()
                        .map(|dt| dt.date_naive())
                }),
            _ => None,
        }
    }

    /// Returns `true` if this value is absent.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Totally orders two cell values for sorting.
    ///
    /// Same-variant values compare naturally: strings case-insensitively
    /// (with a case-sensitive tiebreak so the order stays deterministic),
    /// numbers, booleans and dates by their natural order, lists by their
    /// joined display form. `Missing` sorts before everything else. Values
    /// of different variants fall back to comparing display strings, so the
    /// ordering is total even over heterogeneous columns.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Less,
            (_, Self::Missing) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => compare_strings(a, b),
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Int(a), Self::Float(b)) => {
                (*a as f64).partial_cmp(b).unwrap_or(Ordering::Equal)
            }
            (Self::Float(a), Self::Int(b)) => {
                a.partial_cmp(&(*b as f64)).unwrap_or(Ordering::Equal)
            }
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::List(a), Self::List(b)) => compare_strings(&a.join(", "), &b.join(", ")),
            (a, b) => compare_strings(&a.display(), &b.display()),
        }
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Compares two strings case-insensitively with a case-sensitive tiebreak.
fn compare_strings(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}
