//! User account management.

pub mod service;

pub use service::{UserService, UserStorage};
