//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An immutable record of one audited service invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Unique audit entry identifier.
    pub id: i64,
    /// The invoked operation (e.g. `"add_car"`).
    pub method_name: String,
    /// Stringified argument list, e.g. `"[7, Car { .. }]"`.
    pub method_args: String,
    /// Wall-clock duration of the invocation in milliseconds.
    pub execution_time_ms: i64,
    /// Stringified return value, if the call succeeded.
    pub result: Option<String>,
    /// Error message, if the call failed.
    pub exception: Option<String>,
    /// When the invocation finished.
    pub timestamp: DateTime<Utc>,
}

/// Data required to append an audit log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuditLogEntry {
    /// The invoked operation.
    pub method_name: String,
    /// Stringified argument list.
    pub method_args: String,
    /// Duration in milliseconds.
    pub execution_time_ms: i64,
    /// Stringified return value.
    pub result: Option<String>,
    /// Error message.
    pub exception: Option<String>,
    /// When the invocation finished.
    pub timestamp: DateTime<Utc>,
}
