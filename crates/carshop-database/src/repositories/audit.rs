//! Audit log repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carshop_core::result::AppResult;
use carshop_core::traits::{AuditReader, AuditSink};
use carshop_entity::audit::{AuditLogEntry, NewAuditLogEntry};

use super::database_error;
use crate::sql;

/// Append-only repository for audit log entries.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: PgPool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuditSink<NewAuditLogEntry> for AuditLogRepository {
    async fn append(&self, entry: &NewAuditLogEntry) -> AppResult<()> {
        sqlx::query(sql::audit::INSERT)
            .bind(&entry.method_name)
            .bind(&entry.method_args)
            .bind(entry.execution_time_ms)
            .bind(&entry.result)
            .bind(&entry.exception)
            .bind(entry.timestamp)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to append audit entry"))?;
        Ok(())
    }
}

#[async_trait]
impl AuditReader<AuditLogEntry> for AuditLogRepository {
    async fn recent(&self, limit: i64) -> AppResult<Vec<AuditLogEntry>> {
        sqlx::query_as::<_, AuditLogEntry>(sql::audit::SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to list audit entries"))
    }
}
