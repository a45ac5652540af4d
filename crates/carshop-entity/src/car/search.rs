//! Car search criteria.

use serde::{Deserialize, Serialize};

use super::condition::CarCondition;

/// Optional filters for a car search.
///
/// `make` and `model` match as case-sensitive substrings; the remaining
/// fields must match exactly. Unset fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarSearchCriteria {
    /// Substring of the manufacturer.
    pub make: Option<String>,
    /// Substring of the model name.
    pub model: Option<String>,
    /// Exact production year.
    pub year: Option<i32>,
    /// Exact price.
    pub price: Option<f64>,
    /// Exact condition.
    pub condition: Option<CarCondition>,
}
