//! Read-only access to the audit trail.

use std::sync::Arc;

use carshop_core::result::AppResult;
use carshop_core::traits::AuditReader;
use carshop_entity::audit::AuditLogEntry;

/// Default number of entries returned by [`AuditService::recent`].
pub const DEFAULT_RECENT_LIMIT: u32 = 100;

/// Upper bound on entries returned by one [`AuditService::recent`] call.
pub const MAX_RECENT_LIMIT: u32 = 1000;

/// Lists stored audit entries. Entries are never modified.
#[derive(Clone)]
pub struct AuditService {
    reader: Arc<dyn AuditReader<AuditLogEntry>>,
}

impl AuditService {
    /// Creates a new audit service.
    pub fn new(reader: Arc<dyn AuditReader<AuditLogEntry>>) -> Self {
        Self { reader }
    }

    /// The most recent entries, newest first.
    ///
    /// `None` means [`DEFAULT_RECENT_LIMIT`]; larger requests are capped at
    /// [`MAX_RECENT_LIMIT`].
    pub async fn recent(&self, limit: Option<u32>) -> AppResult<Vec<AuditLogEntry>> {
        self.reader.recent(clamp_limit(limit)).await
    }
}

fn clamp_limit(limit: Option<u32>) -> i64 {
    i64::from(limit.unwrap_or(DEFAULT_RECENT_LIMIT).min(MAX_RECENT_LIMIT))
}
