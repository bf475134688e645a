//! Legal order status transitions
//!
//! The rule table is keyed by *destination*: each status declares the set of
//! statuses an order may arrive from, plus the message surfaced when a change
//! into it is rejected. The table is compile-time constant and shared
//! read-only by every caller; an exhaustive match keeps it total over the
//! status set.
//!
//! ```text
//! QUOTED ──► TRANSMITTED ──► IN_PROGRESS ──► SHIPPED (terminal)
//!   │ ▲           │                │
//!   ▼ │           ▼                ▼
//!  CANCELLED ◄────┴────────────────┘
//!      (reopen: CANCELLED ──► QUOTED)
//! ```
//!
//! SHIPPED has no outgoing edges at all, including no path to CANCELLED:
//! shipped orders are final under this rule set. A returned or refunded order
//! would need new vocabulary, not a quiet extra edge here.

use crate::error::TransitionError;
use crate::status::{Status, StatusRef};

// ==================== Rule table ====================

/// Rule gating entry into a single destination status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// Statuses an order may arrive from
    pub allowed_from: &'static [Status],
    /// Message surfaced when the change is rejected
    pub error_message: &'static str,
}

const TO_QUOTED: TransitionRule = TransitionRule {
    allowed_from: &[Status::Cancelled],
    error_message: "La orden debe estar en estado CANCELADO para cambiar a COTIZADO",
};

const TO_TRANSMITTED: TransitionRule = TransitionRule {
    allowed_from: &[Status::Quoted],
    error_message: "La orden debe estar en estado COTIZADO para cambiar a TRANSMITIDO",
};

const TO_IN_PROGRESS: TransitionRule = TransitionRule {
    allowed_from: &[Status::Transmitted],
    error_message: "La orden debe estar en estado TRANSMITIDO para cambiar a EN_CURSO",
};

const TO_SHIPPED: TransitionRule = TransitionRule {
    allowed_from: &[Status::InProgress],
    error_message: "La orden debe estar en estado EN_CURSO para cambiar a ENVIADO",
};

const TO_CANCELLED: TransitionRule = TransitionRule {
    allowed_from: &[Status::Quoted, Status::Transmitted, Status::InProgress],
    error_message: "Una orden ENVIADA ya no se puede cancelar",
};

/// Get the entry rule for `destination`
///
/// Total over the status set: the exhaustive match guarantees every
/// destination has a rule, so there is no "no rule found" path at runtime.
pub const fn rule_for(destination: Status) -> &'static TransitionRule {
    match destination {
        Status::Quoted => &TO_QUOTED,
        Status::Transmitted => &TO_TRANSMITTED,
        Status::InProgress => &TO_IN_PROGRESS,
        Status::Shipped => &TO_SHIPPED,
        Status::Cancelled => &TO_CANCELLED,
    }
}

// ==================== Operations ====================

/// Validate a proposed status change
///
/// Checks run in order: the destination must resolve to a known status
/// ([`InvalidDestination`](TransitionError::InvalidDestination)), then the
/// current value must resolve
/// ([`InvalidCurrentStatus`](TransitionError::InvalidCurrentStatus)), then
/// the destination rule must list the current status
/// ([`IllegalTransition`](TransitionError::IllegalTransition) carrying the
/// rule's message otherwise).
///
/// A no-op change (current equal to destination) is not modeled by any rule
/// and is rejected like any other missing edge.
///
/// Pure and deterministic: for a fixed rule table the result depends only on
/// the two inputs. Never panics.
pub fn can_transition<'a>(
    current: impl Into<StatusRef<'a>>,
    destination: impl Into<StatusRef<'a>>,
) -> Result<(), TransitionError> {
    let destination = destination.into();
    let Some(to) = destination.resolve() else {
        tracing::debug!(destination = %destination, "destination status not recognized");
        return Err(TransitionError::InvalidDestination {
            value: destination.to_string(),
        });
    };

    let current = current.into();
    let Some(from) = current.resolve() else {
        tracing::debug!(current = %current, "current status not recognized");
        return Err(TransitionError::InvalidCurrentStatus {
            value: current.to_string(),
        });
    };

    let rule = rule_for(to);
    if rule.allowed_from.contains(&from) {
        Ok(())
    } else {
        tracing::debug!(from = %from, to = %to, "transition rejected");
        Err(TransitionError::IllegalTransition {
            from,
            to,
            message: rule.error_message,
        })
    }
}

/// Enumerate the statuses reachable in one step from `current`
///
/// Destinations come back in [`Status`] declaration order, stable across
/// calls. An empty sequence means the order is terminal for this engine
/// (SHIPPED). Callers use the result to decide which actions to offer; the
/// engine itself knows nothing about UI.
pub fn available_transitions<'a>(
    current: impl Into<StatusRef<'a>>,
) -> Result<Vec<Status>, TransitionError> {
    let current = current.into();
    let Some(from) = current.resolve() else {
        tracing::debug!(current = %current, "current status not recognized");
        return Err(TransitionError::InvalidCurrentStatus {
            value: current.to_string(),
        });
    };

    Ok(Status::ALL
        .into_iter()
        .filter(|destination| rule_for(*destination).allowed_from.contains(&from))
        .collect())
}
