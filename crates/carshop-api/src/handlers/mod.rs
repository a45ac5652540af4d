//! HTTP request handlers, one module per resource.

pub mod audit;
pub mod car;
pub mod client;
pub mod health;
pub mod order;
pub mod user;
