//! Order status domain for the pedidos CRM
//!
//! Holds the status vocabulary shared with the backend, the rule table of
//! legal status transitions, and two pure queries over it: validate a
//! proposed change, and enumerate the changes reachable from a status. The
//! engine is advisory — it never mutates an order and never touches storage
//! or network; callers gate UI actions on [`available_transitions`] and
//! re-validate with [`can_transition`] before committing through the backend.

pub mod error;
pub mod models;
pub mod status;
pub mod transition;

// Re-exports
pub use error::TransitionError;
pub use models::{StatusChangeRequest, StatusSummary};
pub use status::{InvalidStatusCode, InvalidStatusLabel, Status, StatusRef};
pub use transition::{TransitionRule, available_transitions, can_transition, rule_for};
