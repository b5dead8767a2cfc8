//! Statekit: hierarchical state-machine nodes with handler inheritance
//!
//! Statekit provides the node layer of a hierarchical finite-state machine:
//! named states with optional parents, per-state event-to-handler bindings,
//! and named child states. The core algorithm is handler resolution: an
//! event name is looked up on a node and, when absent, on each ancestor in
//! turn, so a child state only binds the events it overrides.
//!
//! # Core Concepts
//!
//! - **StateChart**: arena that owns every node and keeps the hierarchy
//!   consistent (parent and child links are mutual inverses, cycles are
//!   rejected)
//! - **StateNode**: a named state with its own handler and child mappings
//! - **Handler**: a deferred, zero-argument action bound to an event name
//! - **Lookup chain**: the ancestor sequence consulted nearest-first to
//!   resolve which handler answers an event
//!
//! The chart holds no "current state" pointer. A machine driver tracks the
//! active node, dispatches incoming event names through `lookup_handler`,
//! and moves its pointer between nodes by its own policy.
//!
//! # Example
//!
//! ```rust
//! use statekit::StateChart;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), statekit::ChartError> {
//! let mut chart = StateChart::new();
//! let app = chart.add_state("App");
//! let menu = chart.add_child_state(app, "Menu")?;
//!
//! let selections = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&selections);
//! chart.set_event(menu, "select", move || {
//!     counter.fetch_add(1, Ordering::SeqCst);
//! })?;
//! chart.set_event(app, "back", || {})?;
//!
//! // Menu answers "select" itself.
//! let handler = chart.lookup_handler(menu, "select")?.unwrap();
//! handler();
//! assert_eq!(selections.load(Ordering::SeqCst), 1);
//!
//! // "back" is inherited from App; unbound events resolve to absent.
//! assert!(chart.lookup_handler(menu, "back")?.is_some());
//! assert!(chart.lookup_handler(menu, "unknown")?.is_none());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, ChartBuilder, StateDef};
pub use core::{ChartError, Handler, StateChart, StateId, StateNode};
