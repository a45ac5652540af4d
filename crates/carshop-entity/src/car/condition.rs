//! Car condition enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical condition of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "car_condition", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum CarCondition {
    /// Brand new.
    New,
    /// Previously owned.
    Used,
    /// Needs repair.
    Damaged,
}

impl CarCondition {
    /// Return the condition as its symbolic name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Used => "USED",
            Self::Damaged => "DAMAGED",
        }
    }
}

impl fmt::Display for CarCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CarCondition {
    type Err = carshop_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "NEW" => Ok(Self::New),
            "USED" => Ok(Self::Used),
            "DAMAGED" => Ok(Self::Damaged),
            _ => Err(carshop_core::AppError::bad_request(format!(
                "Invalid car condition: '{s}'. Expected one of: NEW, USED, DAMAGED"
            ))),
        }
    }
}
