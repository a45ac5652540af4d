//! Audit trail: the invocation wrapper and read access to stored entries.

pub mod auditor;
pub mod service;

pub use auditor::{Auditor, describe_args};
pub use service::AuditService;
