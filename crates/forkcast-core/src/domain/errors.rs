//! Engine errors.

use thiserror::Error;

/// The single recoverable error a round can produce.
///
/// Everything else (unknown policy names, blank display names) is resolved
/// at the input boundary before the engine is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// Both participants' lists were empty after normalization, so there is
    /// nothing to draw from. The round aborts with no outcome and no state
    /// change.
    #[error("no suggestions were provided by either participant")]
    NoSuggestions,
}
