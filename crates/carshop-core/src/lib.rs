//! # carshop-core
//!
//! Core crate for the CarShop backend. Contains configuration schemas,
//! the repository and audit traits implemented by the database crate,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other CarShop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::{AppError, ErrorKind};
pub use result::{AppResult, OrNotFound};
