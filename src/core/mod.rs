//! Core hierarchical state-node types.
//!
//! This module contains the data-structure core of the library:
//! - `StateNode`: a named state with event handlers and named children
//! - `StateChart`: the arena that owns nodes and resolves handler lookups
//! - `ChartError`: the structural misuse errors
//!
//! All operations are synchronous in-memory mutations and traversals with
//! no suspension points and no interior locking; embedders in concurrent
//! systems serialize access to a chart externally.

mod chart;
mod error;
mod node;

pub use chart::{StateChart, StateId};
pub use error::ChartError;
pub use node::{Handler, StateNode};
