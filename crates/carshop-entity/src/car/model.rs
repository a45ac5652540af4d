//! Car entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::condition::CarCondition;

/// A car offered by the dealership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Sequence-generated identifier.
    pub id: i32,
    /// Manufacturer.
    pub make: String,
    /// Model name.
    pub model: String,
    /// Production year.
    pub year: i32,
    /// Asking price.
    pub price: f64,
    /// Physical condition.
    pub condition: CarCondition,
}

impl Car {
    /// Build a car that has not been persisted yet (id `0`).
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        year: i32,
        price: f64,
        condition: CarCondition,
    ) -> Self {
        Self {
            id: 0,
            make: make.into(),
            model: model.into(),
            year,
            price,
            condition,
        }
    }

    /// Return a copy carrying the given id.
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }
}
