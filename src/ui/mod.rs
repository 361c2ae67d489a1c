//! User interface rendering layer with component-based architecture.
//!
//! This module orchestrates the terminal-based table UI, transforming view
//! models into ANSI-styled output through composable rendering components.
//! It provides theme support, responsive filter UI placement, and search
//! match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! TableState → compute_viewmodel → TableViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable table state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    ChecklistOption, DisplayCell, DisplayRow, EmptyState, FilterChip, FilterPanelBody,
    FilterPanelView, FooterInfo, HeaderCell, PageItem, SearchBarInfo, TableViewModel,
};
