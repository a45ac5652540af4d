//! Car stock management.

pub mod service;

pub use service::{CarService, CarStorage};
