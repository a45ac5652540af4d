//! Statements for the append-only `audit_log` table.

pub const INSERT: &str = "INSERT INTO audit_log \
     (method_name, method_args, execution_time_ms, result, exception, timestamp) \
     VALUES ($1, $2, $3, $4, $5, $6)";

/// Newest entries first, at most `$1` rows.
pub const SELECT_RECENT: &str = "SELECT id, method_name, method_args, execution_time_ms, result, exception, timestamp \
     FROM audit_log ORDER BY id DESC LIMIT $1";
