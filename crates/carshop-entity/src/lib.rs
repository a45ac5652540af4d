//! # carshop-entity
//!
//! Domain entity models for the CarShop backend. Every struct in this crate
//! represents a database table row or a search value object. All entities
//! derive `Clone`, `Serialize`, `Deserialize`, and database entities
//! additionally derive `sqlx::FromRow`.

pub mod audit;
pub mod car;
pub mod client;
pub mod order;
pub mod user;

pub use audit::{AuditLogEntry, NewAuditLogEntry};
pub use car::{Car, CarCondition, CarSearchCriteria};
pub use client::Client;
pub use order::{Order, OrderStatus};
pub use user::{User, UserRole, UserSearchCriteria};
