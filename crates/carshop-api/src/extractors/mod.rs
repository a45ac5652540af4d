//! Custom Axum extractors.

pub mod path;
pub mod query;
pub mod valid_json;

pub use path::parse_id;
pub use query::SearchQuery;
pub use valid_json::{ValidJson, validation_messages};
