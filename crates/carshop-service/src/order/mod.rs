//! Order management.

pub mod service;

pub use service::{OrderService, OrderStorage};
