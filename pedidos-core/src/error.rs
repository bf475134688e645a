//! Transition engine errors

use crate::status::Status;
use thiserror::Error;

/// Why a proposed status change was rejected
///
/// Every failure is a returned value; the engine never panics on caller
/// input. Messages are user-facing Spanish and the UI surfaces them
/// verbatim, so `Display` of [`IllegalTransition`](Self::IllegalTransition)
/// is exactly the configured rule message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Requested destination is not a member of the status set
    #[error("Estado de destino no reconocido: {value}")]
    InvalidDestination {
        /// The unrecognized raw value, as supplied
        value: String,
    },

    /// Supplied current status could not be resolved to a canonical value
    #[error("Estado actual no reconocido: {value}")]
    InvalidCurrentStatus {
        /// The unrecognized raw value, as supplied
        value: String,
    },

    /// Both statuses are valid but no edge connects them
    #[error("{message}")]
    IllegalTransition {
        /// Resolved current status
        from: Status,
        /// Requested destination status
        to: Status,
        /// Configured message of the destination rule
        message: &'static str,
    },
}
