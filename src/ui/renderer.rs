//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view
//! model computation and delegation to the UI components.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View model computation**: transform `TableState` into `TableViewModel`
//! 2. **Component rendering**: delegate to the specialized component renderers

use crate::app::state::TableState;
use crate::domain::row::TableRow;
use crate::ui::components;

/// Renders the table UI to stdout.
///
/// Computes the view model from the table state and delegates to the
/// component renderers.
///
/// # Parameters
///
/// * `state` - Current table state
/// * `rows` - Terminal height in rows
/// * `cols` - Terminal width in columns
///
/// # Output
///
/// Prints ANSI-styled output to stdout using `print!` macros with explicit
/// cursor positioning. Does not clear the screen; the host owns frame
/// management.
pub fn render<T: TableRow>(state: &TableState<T>, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel();
    components::render_table(&viewmodel, &state.theme, rows, cols);
}
