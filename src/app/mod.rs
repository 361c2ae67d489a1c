//! Application layer coordinating state, events, and actions.
//!
//! This module defines the component logic layer, sitting between the host
//! (input translation, rendering loop) and the query/domain layers. It
//! implements the event-driven architecture that powers the interactive
//! table.
//!
//! # Architecture
//!
//! The layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Delegated Pages / Ticks ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Data sourcing and filter UI placement types
//! - [`state`]: Central table state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::TableAction;
pub use handler::{handle_event, TableEvent};
pub use modes::{DataMode, FilterPlacement};
pub use state::{FilterPanelState, TableState, Viewport};
