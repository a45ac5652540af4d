//! Wraps service calls and records each one to the audit trail.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use tracing::{debug, error};

use carshop_core::result::AppResult;
use carshop_core::traits::AuditSink;
use carshop_entity::audit::NewAuditLogEntry;

/// Records the name, arguments, duration and outcome of service calls.
///
/// Persisting an entry never changes what the wrapped call returns: a
/// failing sink is logged and otherwise ignored.
#[derive(Clone)]
pub struct Auditor {
    sink: Option<Arc<dyn AuditSink<NewAuditLogEntry>>>,
}

impl Auditor {
    /// Create an auditor that appends every entry to `sink`.
    pub fn new(sink: Arc<dyn AuditSink<NewAuditLogEntry>>) -> Self {
        Self { sink: Some(sink) }
    }

    /// Create an auditor that times calls but persists nothing.
    pub fn disabled() -> Self {
        Self { sink: None }
    }

    /// Whether entries are persisted.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Run `operation`, then append an audit entry describing it.
    ///
    /// `args` is the already-stringified argument list (see
    /// [`describe_args`]). The successful value is stringified with
    /// `Debug`; an error contributes its display message. The wrapped
    /// outcome is returned unchanged.
    pub async fn record<T, F>(&self, method: &str, args: String, operation: F) -> AppResult<T>
    where
        T: fmt::Debug,
        F: Future<Output = AppResult<T>>,
    {
        let start = Instant::now();
        let outcome = operation.await;
        let execution_time_ms = i64::try_from(start.elapsed().as_millis()).unwrap_or(i64::MAX);

        debug!(
            method = %method,
            duration_ms = execution_time_ms,
            success = outcome.is_ok(),
            "Service call"
        );

        if let Some(sink) = &self.sink {
            let (result, exception) = match &outcome {
                Ok(value) => (Some(format!("{value:?}")), None),
                Err(err) => (None, Some(err.to_string())),
            };
            let entry = NewAuditLogEntry {
                method_name: method.to_string(),
                method_args: args,
                execution_time_ms,
                result,
                exception,
                timestamp: Utc::now(),
            };
            if let Err(e) = sink.append(&entry).await {
                error!(method = %method, error = %e, "Failed to write audit entry");
            }
        }

        outcome
    }
}

impl fmt::Debug for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auditor")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// Render an argument list as `[a, b, ...]` using each value's `Debug`.
///
/// The `Sync` bound keeps callers' futures `Send` when the slice is built
/// inline in an awaited expression.
pub fn describe_args(args: &[&(dyn fmt::Debug + Sync)]) -> String {
    let rendered: Vec<String> = args.iter().map(|arg| format!("{arg:?}")).collect();
    format!("[{}]", rendered.join(", "))
}
