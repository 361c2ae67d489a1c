//! Marquee: a tabular view engine for terminal admin consoles.
//!
//! Marquee is the list-screen core of a fleet administration console: a
//! single abstraction providing client-side and server-side search,
//! multi-column filtering (including date ranges), sortable columns,
//! pagination, and pluggable row actions over an opaque row type. Callers
//! supply a row collection, a column schema, and callbacks; they get back
//! user-initiated selections, query-change notifications, and rendered
//! frames.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host Shim (main.rs or embedding application)       │  ← Input translation
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Transition rules
//! │  - Action emission                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Query Layer   │   │ Delegate Layer│
//! │ (ui/)         │   │ (query/)      │   │ (delegate/)   │
//! │ - Rendering   │   │ - Executor    │   │ - Notifications│
//! │ - Theming     │   │ - Debounce    │   │ - Remote pages│
//! │ - Components  │   │ - Transitions │   │ - Trust model │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data model (domain/)                             │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Observability (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Operating Modes
//!
//! **Local**: the caller supplies the full row collection once; every query
//! change re-runs the search → filter → sort → paginate pipeline in-process.
//!
//! **Delegated**: the caller answers query changes itself. The engine emits
//! [`QueryNotification`](delegate::QueryNotification)s (search changes
//! debounced, pagination/sort/filter changes immediate) and displays
//! whatever rows and total count come back, trusted verbatim.
//!
//! # Example
//!
//! ```
//! use marquee::domain::{CellValue, Column, TableRow};
//! use marquee::{handle_event, initialize, TableConfig, TableEvent};
//!
//! #[derive(Debug, Clone)]
//! struct Title {
//!     id: String,
//!     name: String,
//! }
//!
//! impl TableRow for Title {
//!     fn id(&self) -> String {
//!         self.id.clone()
//!     }
//!     fn field(&self, key: &str) -> CellValue {
//!         match key {
//!             "name" => CellValue::Text(self.name.clone()),
//!             _ => CellValue::Missing,
//!         }
//!     }
//!     fn field_names() -> &'static [&'static str] {
//!         &["name"]
//!     }
//! }
//!
//! let columns = vec![Column::new("name", "Name").sortable()];
//! let mut table = initialize(&TableConfig::default(), columns);
//! table.mount();
//! table.set_rows(vec![Title { id: "t-1".into(), name: "Metropolis".into() }]);
//!
//! let (should_render, actions) =
//!     handle_event(&mut table, &TableEvent::SearchInput("metro".into())).unwrap();
//! assert!(should_render);
//! assert!(actions.is_empty());
//! assert_eq!(table.total(), 1);
//! ```
//!
//! # Key Design Decisions
//!
//! ## Fixed query pipeline order
//!
//! Search narrows first, filters narrow further, sorting orders the
//! surviving set, pagination slices last. The total count is taken after
//! filtering and before slicing, which is what drives the page count and
//! the "Showing X to Y of N entries" label.
//!
//! ## Debounced delegated search
//!
//! Delegated-mode search input arms a deadline; the notification fires only
//! once input goes quiet. Page and page-size changes cancel a pending
//! deadline so a stale search can never settle afterwards and yank the user
//! back to page 1.
//!
//! ## Immutable view models
//!
//! Rendering consumes computed view models: clear separation between state
//! and display, and pre-computation of expensive pieces (column widths,
//! match highlight ranges, pager ellipsis collapsing).

pub mod app;
pub mod delegate;
pub mod domain;
pub mod infrastructure;
pub mod query;

pub mod ui;

pub mod observability;

pub use app::{handle_event, DataMode, FilterPlacement, TableAction, TableEvent, TableState};
pub use delegate::{QueryNotification, RemotePage, TableDelegate};
pub use domain::{
    CellValue, Column, Filter, FilterValue, MarqueeError, Result, RowAction, RowActions, TableRow,
};
pub use query::{QueryState, SortDirection, SortState};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Default rows-per-page.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Default rows-per-page candidates offered by the footer selector.
const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Default search debounce window in milliseconds.
const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Default viewport-width breakpoint (columns) switching the filter UI
/// between side sheet and popover.
const DEFAULT_BREAKPOINT_COLS: usize = 100;

/// Table construction options.
///
/// Values are provided by the embedding host, either directly or parsed
/// from a string map via [`TableConfig::from_map`].
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Whether the free-text search bar is shown and active. Default: `true`
    pub searchable: bool,

    /// Placeholder text shown while the search term is empty.
    pub search_placeholder: String,

    /// Initial rows-per-page. Default: 10
    pub page_size: usize,

    /// Rows-per-page candidates offered by the footer selector.
    /// Default: 10/25/50/100
    pub page_size_options: Vec<usize>,

    /// Whether the caller answers queries itself (server-side mode).
    /// Default: `false`
    pub delegated: bool,

    /// Whether per-column filter UI and chips are shown. Default: `true`
    pub show_filters: bool,

    /// Search debounce quiet window in milliseconds (delegated mode).
    /// Default: 300
    pub debounce_ms: u64,

    /// Viewport width (columns) below which the filter UI renders as a side
    /// sheet instead of a popover. Default: 100
    pub breakpoint_cols: usize,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            search_placeholder: "Search\u{2026}".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            delegated: false,
            show_filters: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            breakpoint_cols: DEFAULT_BREAKPOINT_COLS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl TableConfig {
    /// Parses configuration from a host-supplied string map.
    ///
    /// Hosts that read configuration from files or launch parameters can
    /// hand over a flat `BTreeMap<String, String>`; typed values are
    /// extracted with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `searchable`, `delegated`, `show_filters`: `"true"`/`"false"`
    /// - `page_size`: integer (falls back to 10 on parse error)
    /// - `page_size_options`: comma-separated integers (invalid or empty
    ///   entries are dropped; an empty result falls back to the default set)
    /// - `debounce_ms`, `breakpoint_cols`: integers with defaults
    /// - `search_placeholder`, `theme`, `theme_file`, `trace_level`: strings
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use marquee::TableConfig;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "25".to_string());
    /// map.insert("delegated".to_string(), "true".to_string());
    ///
    /// let config = TableConfig::from_map(&map);
    /// assert_eq!(config.page_size, 25);
    /// assert!(config.delegated);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let parse_bool = |key: &str, fallback: bool| {
            config
                .get(key)
                .and_then(|s| s.parse::<bool>().ok())
                .unwrap_or(fallback)
        };
        let parse_usize = |key: &str, fallback: usize| {
            config
                .get(key)
                .and_then(|s| s.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(fallback)
        };

        let page_size_options = config
            .get("page_size_options")
            .map(|s| {
                s.split(',')
                    .filter_map(|part| part.trim().parse::<usize>().ok())
                    .filter(|n| *n > 0)
                    .collect::<Vec<_>>()
            })
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| defaults.page_size_options.clone());

        Self {
            searchable: parse_bool("searchable", defaults.searchable),
            search_placeholder: config
                .get("search_placeholder")
                .cloned()
                .unwrap_or(defaults.search_placeholder),
            page_size: parse_usize("page_size", defaults.page_size),
            page_size_options,
            delegated: parse_bool("delegated", defaults.delegated),
            show_filters: parse_bool("show_filters", defaults.show_filters),
            debounce_ms: config
                .get("debounce_ms")
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(defaults.debounce_ms),
            breakpoint_cols: parse_usize("breakpoint_cols", defaults.breakpoint_cols),
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes a table instance with configuration and a column schema.
///
/// Creates a new [`TableState`] with:
/// - The loaded theme (from file, name, or default)
/// - An empty row collection (populated later by the host via
///   [`TableState::set_rows`] or delegated page supply)
///
/// # Theme Resolution
///
/// `theme_file` (with `~` expansion) takes precedence over `theme_name`;
/// failures log at debug level and fall back to the default theme.
pub fn initialize<T: TableRow>(config: &TableConfig, columns: Vec<Column<T>>) -> TableState<T> {
    tracing::debug!(column_count = columns.len(), "initializing table engine");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            let path = infrastructure::paths::expand_tilde(theme_file);
            Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    TableState::new(config.clone(), theme, columns)
}
