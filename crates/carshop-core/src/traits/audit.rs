//! Destination for audit records.

use async_trait::async_trait;

use crate::result::AppResult;

/// Append-only store for audit entries.
///
/// Implemented by the audit log repository; the service layer only ever
/// appends through this trait.
#[async_trait]
pub trait AuditSink<Entry>: Send + Sync + 'static
where
    Entry: Send + Sync + 'static,
{
    /// Persist a single audit entry.
    async fn append(&self, entry: &Entry) -> AppResult<()>;
}

/// Read access to stored audit entries.
#[async_trait]
pub trait AuditReader<Entry>: Send + Sync + 'static
where
    Entry: Send + Sync + 'static,
{
    /// The `limit` most recent entries, newest first.
    async fn recent(&self, limit: i64) -> AppResult<Vec<Entry>>;
}
