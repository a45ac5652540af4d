//! Core traits defined in `carshop-core` and implemented by other crates.

pub mod audit;
pub mod repository;

pub use audit::{AuditReader, AuditSink};
pub use repository::{Repository, Searchable, UpdateKeepingDate, UserStore};
