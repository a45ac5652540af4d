//! Order domain entities.

pub mod model;
pub mod status;

pub use model::Order;
pub use status::OrderStatus;
