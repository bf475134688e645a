//! Wire value types shared with the CRM backend
//!
//! The engine has no wire format of its own; these are the payload shapes
//! its callers exchange with the backend around a status change. Field names
//! follow the backend's camelCase JSON.

use crate::status::{InvalidStatusCode, Status};
use serde::{Deserialize, Serialize};

/// One per-status grouping bucket as the backend reports it
///
/// The orders listing endpoint groups orders by status; each group carries
/// the full status triple (numeric id, label token, display name) plus a
/// count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusSummary {
    /// Numeric wire code
    pub status_id: u16,
    /// Uppercase label token
    pub status_code: String,
    /// Human-readable display name
    pub status_label: String,
    /// Orders currently in this status
    pub order_count: u32,
}

impl StatusSummary {
    /// Build the bucket for `status` holding `order_count` orders
    pub fn new(status: Status, order_count: u32) -> Self {
        Self {
            status_id: status.code(),
            status_code: status.label().to_string(),
            status_label: status.display_name().to_string(),
            order_count,
        }
    }

    /// Resolve the canonical status for this bucket
    pub fn status(&self) -> Result<Status, InvalidStatusCode> {
        Status::try_from(self.status_id)
    }
}

/// Payload for the status-commit call a caller issues after validating
///
/// Engine validation is necessary but not sufficient: the backend re-checks
/// at commit time and may still reject (stale status, missing order, network
/// failure). The commit call itself is owned by the backend collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeRequest {
    /// Order to change
    pub order_id: i64,
    /// Destination status, serialized as its label token
    pub status_code: Status,
    /// Acting user
    pub user_id: String,
}

impl StatusChangeRequest {
    /// Build a commit payload for `order_id` moving to `status_code`
    pub fn new(order_id: i64, status_code: Status, user_id: impl Into<String>) -> Self {
        Self {
            order_id,
            status_code,
            user_id: user_id.into(),
        }
    }
}
