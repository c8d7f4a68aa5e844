//! Build errors for table and row builders.

use thiserror::Error;

/// Errors that can occur when building tables and rows.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Row source state not specified. Call .from(state)")]
    MissingSourceState,

    #[error("Row event kind not specified. Call .on(kind)")]
    MissingEventKind,

    #[error("Row target state not specified. Call .to(state)")]
    MissingTargetState,

    #[error("No rows defined. Add at least one row")]
    EmptyTable,
}
