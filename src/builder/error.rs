//! Build errors for declarative chart construction.

use crate::core::ChartError;
use thiserror::Error;

/// Errors that can occur when building a chart from state definitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Root state not specified. Call .root(def) before .build()")]
    MissingRoot,

    #[error("State names must be non-empty")]
    EmptyStateName,

    #[error("State '{parent}' declares two children named '{child}'")]
    DuplicateChildName { parent: String, child: String },

    #[error(transparent)]
    Chart(#[from] ChartError),
}
