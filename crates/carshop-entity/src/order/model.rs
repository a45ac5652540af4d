//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::OrderStatus;

/// A purchase of a car by a client.
///
/// Status changes are unconstrained; any status may replace any other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Sequence-generated identifier.
    pub id: i32,
    /// Purchasing client.
    pub client_id: i32,
    /// Purchased car.
    pub car_id: i32,
    /// When the order was placed.
    pub creation_date: DateTime<Utc>,
    /// Approval state.
    pub status: OrderStatus,
}

impl Order {
    /// Build an order that has not been persisted yet (id `0`).
    pub fn new(
        client_id: i32,
        car_id: i32,
        creation_date: DateTime<Utc>,
        status: OrderStatus,
    ) -> Self {
        Self {
            id: 0,
            client_id,
            car_id,
            creation_date,
            status,
        }
    }

    /// Return a copy carrying the given id.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}
