//! Row contract for types displayed in a table.
//!
//! The engine treats rows as opaque records: it never mutates them, only
//! reads, reorders and slices. The [`TableRow`] trait is the minimal contract
//! a caller's record type implements to be displayable.

use crate::domain::value::CellValue;

/// Trait for records that can be displayed as table rows.
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Device {
///     serial: String,
///     name: String,
///     screens: u32,
/// }
///
/// impl TableRow for Device {
///     fn id(&self) -> String {
///         self.serial.clone()
///     }
///
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "serial" => CellValue::Text(self.serial.clone()),
///             "name" => CellValue::Text(self.name.clone()),
///             "screens" => CellValue::Int(i64::from(self.screens)),
///             _ => CellValue::Missing,
///         }
///     }
///
///     fn field_names() -> &'static [&'static str] {
///         &["serial", "name", "screens"]
///     }
/// }
/// ```
pub trait TableRow: Clone + std::fmt::Debug {
    /// Returns a unique, stable identifier for this row.
    fn id(&self) -> String;

    /// Resolves a named field to its cell value.
    ///
    /// Unknown keys must return [`CellValue::Missing`] rather than panic, so
    /// a column referencing a field the row lacks renders as empty.
    fn field(&self, key: &str) -> CellValue;

    /// Enumerates this type's field keys.
    ///
    /// Free-text search walks these keys and matches against the fields that
    /// resolve to [`CellValue::Text`]; every other variant is skipped.
    fn field_names() -> &'static [&'static str];
}
