//! # carshop-service
//!
//! Business logic service layer for CarShop. Each entity service is a thin
//! pass-through to its repository, composed with the [`Auditor`] so that
//! every invocation lands in the audit trail.
//!
//! Services follow constructor injection: stores and the auditor are
//! provided at construction time via `Arc` references.

pub mod audit;
pub mod car;
pub mod client;
pub mod order;
pub mod user;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use audit::{AuditService, Auditor, describe_args};
pub use car::{CarService, CarStorage};
pub use client::{ClientService, ClientStorage};
pub use order::{OrderService, OrderStorage};
pub use user::{UserService, UserStorage};
