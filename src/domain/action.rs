//! Per-row operations offered in a row's action menu.
//!
//! Actions are plain data. The engine renders the affordance and, when one
//! is invoked, emits an event carrying the action label and the full row back
//! to the caller, who owns the handler. This keeps the core free of stored
//! callbacks while still supporting status-dependent menus via [`RowActions::ForRow`].

/// One operation a user can invoke on a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    /// Display label (also the identifier echoed back on invocation).
    pub label: String,
    /// Optional short icon or glyph shown before the label.
    pub icon: Option<String>,
}

impl RowAction {
    /// Creates an action with the given label and no icon.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
        }
    }

    /// Sets an icon glyph for this action.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The action menu supplied for a table: static or derived per row.
#[derive(Clone)]
pub enum RowActions<T> {
    /// The same actions for every row.
    Static(Vec<RowAction>),
    /// Actions computed from the row, enabling status-dependent menus.
    ForRow(fn(&T) -> Vec<RowAction>),
}

impl<T> RowActions<T> {
    /// Resolves the actions available for one row.
    pub fn for_row(&self, row: &T) -> Vec<RowAction> {
        match self {
            Self::Static(actions) => actions.clone(),
            Self::ForRow(derive) => derive(row),
        }
    }
}

impl<T> std::fmt::Debug for RowActions<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(actions) => f.debug_tuple("Static").field(actions).finish(),
            Self::ForRow(_) => f.debug_tuple("ForRow").field(&"fn").finish(),
        }
    }
}
