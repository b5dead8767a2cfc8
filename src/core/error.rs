//! Chart errors for hierarchy mutations and lookups.

use crate::core::chart::StateId;
use thiserror::Error;

/// Errors that can occur when operating on a state chart.
///
/// A handler lookup that finds nothing is not an error; it resolves to
/// `Ok(None)`. These variants cover misuse of the chart structure itself.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("state id {0:?} does not belong to this chart")]
    UnknownState(StateId),

    #[error("attaching state '{state}' would make it its own ancestor")]
    CycleDetected { state: String },
}
