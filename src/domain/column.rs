//! Column schema: how to extract, render, sort, and filter one field.
//!
//! A [`Column`] describes one table column over a row type `T`. Value
//! extraction goes through a tagged [`Accessor`] (a field key or a derivation
//! function) so the executor and presentation layer resolve cell values the
//! same way, without runtime type inspection.

use crate::domain::row::TableRow;
use crate::domain::value::CellValue;

/// How a column obtains its value from a row.
#[derive(Clone)]
pub enum Accessor<T> {
    /// Look the value up by field key via [`TableRow::field`].
    Field(String),
    /// Compute the value from the whole row.
    Derived(fn(&T) -> CellValue),
}

impl<T: TableRow> Accessor<T> {
    /// Resolves this accessor against a row.
    pub fn resolve(&self, row: &T) -> CellValue {
        match self {
            Self::Field(key) => row.field(key),
            Self::Derived(f) => f(row),
        }
    }
}

impl<T> std::fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Field(key) => f.debug_tuple("Field").field(key).finish(),
            Self::Derived(_) => f.debug_tuple("Derived").field(&"fn").finish(),
        }
    }
}

/// Where a filterable column's discrete options come from.
#[derive(Clone)]
pub enum FilterOptions<T> {
    /// A fixed list of option labels.
    Static(Vec<String>),
    /// Options derived from the full row collection.
    Derived(fn(&[T]) -> Vec<String>),
}

impl<T> std::fmt::Debug for FilterOptions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(opts) => f.debug_tuple("Static").field(opts).finish(),
            Self::Derived(_) => f.debug_tuple("Derived").field(&"fn").finish(),
        }
    }
}

/// The kind of filter control a column offers.
#[derive(Debug, Clone)]
pub enum FilterSpec<T> {
    /// A searchable checklist of discrete values.
    Options(FilterOptions<T>),
    /// A dual from/to date picker with optional ends.
    DateRange,
}

/// A table column definition.
///
/// Built with [`Column::new`] (field-backed) or [`Column::derived`]
/// (computed), then refined with the chained setters:
///
/// ```ignore
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("status", "Status")
///         .with_options(vec!["Online".into(), "Offline".into()]),
///     Column::new("last_seen", "Last seen").sortable().with_date_range(),
/// ];
/// ```
#[derive(Clone)]
pub struct Column<T> {
    /// Unique key identifying this column (also the sort and filter key).
    pub key: String,
    /// Header label displayed at the top.
    pub label: String,
    /// How the column obtains its value from a row.
    pub accessor: Accessor<T>,
    /// Optional custom cell renderer. When absent, cells display the
    /// accessor value's display string.
    pub cell: Option<fn(&T) -> String>,
    /// Whether clicking the header cycles a sort on this column.
    pub sortable: bool,
    /// Optional filter control specification.
    pub filter: Option<FilterSpec<T>>,
}

impl<T: TableRow> Column<T> {
    /// Creates a field-backed column with the given key and header label.
    ///
    /// The accessor resolves the row field named `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            accessor: Accessor::Field(key.clone()),
            key,
            label: label.into(),
            cell: None,
            sortable: false,
            filter: None,
        }
    }

    /// Creates a derived column whose value is computed from the whole row.
    #[must_use]
    pub fn derived(
        key: impl Into<String>,
        label: impl Into<String>,
        accessor: fn(&T) -> CellValue,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            accessor: Accessor::Derived(accessor),
            cell: None,
            sortable: false,
            filter: None,
        }
    }

    /// Sets a custom cell renderer for this column.
    #[must_use]
    pub fn cell(mut self, renderer: fn(&T) -> String) -> Self {
        self.cell = Some(renderer);
        self
    }

    /// Marks this column as sortable.
    #[must_use]
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Attaches a static-option checklist filter to this column.
    #[must_use]
    pub fn with_options(mut self, options: Vec<String>) -> Self {
        self.filter = Some(FilterSpec::Options(FilterOptions::Static(options)));
        self
    }

    /// Attaches a checklist filter whose options derive from the row collection.
    #[must_use]
    pub fn with_derived_options(mut self, derive: fn(&[T]) -> Vec<String>) -> Self {
        self.filter = Some(FilterSpec::Options(FilterOptions::Derived(derive)));
        self
    }

    /// Attaches a date-range filter to this column.
    #[must_use]
    pub fn with_date_range(mut self) -> Self {
        self.filter = Some(FilterSpec::DateRange);
        self
    }

    /// Resolves this column's value for a row.
    pub fn value(&self, row: &T) -> CellValue {
        self.accessor.resolve(row)
    }

    /// Renders this column's display string for a row.
    ///
    /// Uses the custom cell renderer when one is set, otherwise the accessor
    /// value's display string (empty for missing values).
    pub fn display(&self, row: &T) -> String {
        match self.cell {
            Some(renderer) => renderer(row),
            None => self.value(row).display(),
        }
    }

    /// Returns the discrete filter options for this column, if any.
    ///
    /// Derived options are computed from the full row collection. A column
    /// without a checklist filter (or with a date-range filter) returns an
    /// empty list; the presentation layer renders a disabled control for a
    /// checklist that derives zero options rather than erroring.
    pub fn filter_option_labels(&self, rows: &[T]) -> Vec<String> {
        match &self.filter {
            Some(FilterSpec::Options(FilterOptions::Static(options))) => options.clone(),
            Some(FilterSpec::Options(FilterOptions::Derived(derive))) => derive(rows),
            _ => Vec::new(),
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("has_filter", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}
