//! # carshop-database
//!
//! PostgreSQL connection management, the SQL statement catalog and
//! concrete repository implementations for all CarShop entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod sql;

pub use connection::DatabasePool;
