//! Error types for the search engine.

use thiserror::Error;

/// Errors surfaced by the engine core.
///
/// Note what is deliberately *not* an error: an empty frontier or a state
/// with no legal moves is a well-defined "no result" outcome (`None`), and
/// an early termination requested through an observation callback is a
/// normal, incomplete outcome. Panics raised by caller-supplied heuristic
/// or evaluation functions propagate unmodified.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum EngineError {
    /// A transition was applied that is not among the state's legal actions.
    ///
    /// Avoiding this is the caller's responsibility; problem
    /// implementations may surface it instead of producing a wrong state.
    #[error("illegal action: {action}")]
    IllegalAction { action: String },

    /// An invalid algorithm/strategy/configuration combination, rejected
    /// before any search starts.
    #[error("misconfiguration: {0}")]
    Misconfiguration(String),
}

impl EngineError {
    /// Build an `IllegalAction` from any debuggable action value.
    pub fn illegal_action(action: &impl std::fmt::Debug) -> Self {
        Self::IllegalAction {
            action: format!("{action:?}"),
        }
    }
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
