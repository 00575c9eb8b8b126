//! Error types for the diff crate.

use crate::change::ChangeStatus;

/// Errors raised when a run list does not form a valid [`DiffResult`].
///
/// [`compute`](crate::compute) never produces these; they guard results that
/// are assembled by hand or deserialized from an external source.
///
/// [`DiffResult`]: crate::DiffResult
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// A run carried no characters.
    #[error("run {index} has empty text")]
    EmptyRun { index: usize },

    /// Two neighbouring runs share a status and should have been one run.
    #[error("run {index} repeats the {status} status of the run before it")]
    AdjacentRuns { index: usize, status: ChangeStatus },
}
