//! Builder API for ergonomic chart construction.
//!
//! This module provides a declarative alternative to wiring a
//! [`StateChart`](crate::core::StateChart) call by call: describe each state
//! with [`StateDef`], nest children, and let [`ChartBuilder`] validate and
//! materialize the hierarchy.
//!
//! # Example
//!
//! ```rust
//! use statekit::builder::{ChartBuilder, StateDef};
//!
//! let (chart, app) = ChartBuilder::new()
//!     .root(
//!         StateDef::new("App")
//!             .on("back", || {})
//!             .child(StateDef::new("Menu").on("select", || {})),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let menu = chart.child(app, "Menu").unwrap().unwrap();
//! assert!(chart.lookup_handler(menu, "back").unwrap().is_some());
//! ```

pub mod chart;
pub mod error;
pub mod state;

pub use chart::ChartBuilder;
pub use error::BuildError;
pub use state::StateDef;
