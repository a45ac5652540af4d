//! Request DTOs with declarative validation.
//!
//! Numeric and string fields default to `0` / `""` when absent so that a
//! missing field is reported as a constraint violation instead of a parse
//! error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use carshop_core::error::AppError;
use carshop_entity::car::{Car, CarCondition, CarSearchCriteria};
use carshop_entity::client::Client;
use carshop_entity::order::{Order, OrderStatus};
use carshop_entity::user::{User, UserRole, UserSearchCriteria};

/// Earliest production year accepted for a car (exclusive).
pub const MIN_CAR_YEAR: i32 = 1830;

/// Car create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_year_after_min", skip_on_field_errors = false))]
pub struct CarRequest {
    /// Must be positive but is ignored on write; the path or the database
    /// decides the id.
    #[serde(default)]
    #[validate(range(min = 1, message = "ID should be positive"))]
    pub id: i32,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Make is mandatory"),
        length(max = 255, message = "Make must be at most 255 characters")
    )]
    pub make: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Model is mandatory"),
        length(max = 255, message = "Model must be at most 255 characters")
    )]
    pub model: String,
    #[serde(default)]
    #[validate(range(min = 1, message = "Year should be positive"))]
    pub year: i32,
    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "Price should be positive"))]
    pub price: f64,
    #[validate(required(message = "Car condition cannot be null"))]
    pub condition: Option<CarCondition>,
}

impl CarRequest {
    /// Convert a validated request into an unsaved car.
    pub fn into_car(self) -> Result<Car, AppError> {
        let condition = self
            .condition
            .ok_or_else(|| AppError::validation("Car condition cannot be null"))?;
        Ok(Car::new(
            self.make,
            self.model,
            self.year,
            self.price,
            condition,
        ))
    }
}

// Only meaningful once the year is positive; non-positive years already
// carry their own message.
fn validate_year_after_min(car: &CarRequest) -> Result<(), ValidationError> {
    if car.year > 0 && car.year <= MIN_CAR_YEAR {
        return Err(violation("year_range", "Year must be after 1830"));
    }
    Ok(())
}

/// Client create/update payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientRequest {
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Client name is mandatory"),
        length(max = 255, message = "Client name must be at most 255 characters")
    )]
    pub client_name: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Contact information is mandatory"),
        length(max = 255, message = "Contact information must be at most 255 characters")
    )]
    pub contact_info: String,
}

impl ClientRequest {
    /// Convert into an unsaved client.
    pub fn into_client(self) -> Client {
        Client::new(self.client_name, self.contact_info)
    }
}

/// Order create/update payload.
///
/// `creationDate` may be omitted: it then means "now" on create and
/// "unchanged" on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "ID should be positive"))]
    pub id: i32,
    #[serde(default)]
    #[validate(range(min = 1, message = "Client ID is mandatory"))]
    pub client_id: i32,
    #[serde(default)]
    #[validate(range(min = 1, message = "Car ID is mandatory"))]
    pub car_id: i32,
    pub creation_date: Option<DateTime<Utc>>,
    #[validate(required(message = "Order status cannot be null"))]
    pub status: Option<OrderStatus>,
}

impl OrderRequest {
    /// Convert into an unsaved order, using `default_date` when the request
    /// carries no creation date.
    pub fn into_order(self, default_date: DateTime<Utc>) -> Result<Order, AppError> {
        let status = self
            .status
            .ok_or_else(|| AppError::validation("Order status cannot be null"))?;
        Ok(Order::new(
            self.client_id,
            self.car_id,
            self.creation_date.unwrap_or(default_date),
            status,
        ))
    }
}

/// User create/update payload.
#[derive(Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    #[validate(range(min = 1, message = "ID should be positive"))]
    pub id: i32,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Username is mandatory"),
        length(max = 255, message = "Username must be at most 255 characters")
    )]
    pub username: String,
    #[serde(default)]
    #[validate(
        custom(function = "not_blank", message = "Password is mandatory"),
        length(
            min = 1,
            max = 100,
            message = "Password must be between 1 and 100 characters"
        )
    )]
    pub password: String,
    #[validate(required(message = "User role cannot be null"))]
    pub role: Option<UserRole>,
}

impl UserRequest {
    /// Convert into an unsaved user.
    pub fn into_user(self) -> Result<User, AppError> {
        let role = self
            .role
            .ok_or_else(|| AppError::validation("User role cannot be null"))?;
        Ok(User::new(self.username, self.password, role))
    }
}

impl std::fmt::Debug for UserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRequest")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Query string of `GET /api/cars/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CarSearchQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<f64>,
    pub condition: Option<CarCondition>,
}

impl From<CarSearchQuery> for CarSearchCriteria {
    fn from(query: CarSearchQuery) -> Self {
        Self {
            make: query.make,
            model: query.model,
            year: query.year,
            price: query.price,
            condition: query.condition,
        }
    }
}

/// Query string of `GET /api/users/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSearchQuery {
    pub username: Option<String>,
    pub role: Option<UserRole>,
}

impl From<UserSearchQuery> for UserSearchCriteria {
    fn from(query: UserSearchQuery) -> Self {
        Self {
            username: query.username,
            role: query.role,
        }
    }
}

/// Query string of `GET /api/audit`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditQuery {
    /// Maximum number of entries (default 100, capped at 1000).
    pub limit: Option<u32>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn violation(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::validation_messages;

    fn messages<T: Validate>(value: &T) -> Vec<String> {
        match value.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_messages(&errors),
        }
    }

    fn valid_car() -> CarRequest {
        CarRequest {
            id: 1,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2020,
            price: 25_000.0,
            condition: Some(CarCondition::New),
        }
    }

    #[test]
    fn test_valid_car_has_no_violations() {
        assert!(messages(&valid_car()).is_empty());
    }

    #[test]
    fn test_empty_car_reports_every_field() {
        let car: CarRequest = serde_json::from_str("{}").unwrap();
        let mut expected = vec![
            "Car condition cannot be null",
            "ID should be positive",
            "Make is mandatory",
            "Model is mandatory",
            "Price should be positive",
            "Year should be positive",
        ];
        expected.sort();
        assert_eq!(messages(&car), expected);
    }

    #[test]
    fn test_car_year_must_be_after_1830() {
        let car = CarRequest {
            year: 1830,
            ..valid_car()
        };
        assert_eq!(messages(&car), vec!["Year must be after 1830"]);

        let car = CarRequest {
            year: 1831,
            ..valid_car()
        };
        assert!(messages(&car).is_empty());
    }

    #[test]
    fn test_car_blank_strings_and_negative_id() {
        let car = CarRequest {
            id: -1,
            make: "   ".to_string(),
            ..valid_car()
        };
        assert_eq!(messages(&car), vec!["ID should be positive", "Make is mandatory"]);
    }

    #[test]
    fn test_missing_id_is_reported() {
        let car: CarRequest = serde_json::from_str(
            r#"{"make": "Toyota", "model": "Camry", "year": 2020, "price": 1.0, "condition": "NEW"}"#,
        )
        .unwrap();
        assert_eq!(car.id, 0);
        assert_eq!(messages(&car), vec!["ID should be positive"]);

        let order: OrderRequest =
            serde_json::from_str(r#"{"clientId": 1, "carId": 2, "status": "PENDING"}"#).unwrap();
        assert_eq!(messages(&order), vec!["ID should be positive"]);

        let client: ClientRequest =
            serde_json::from_str(r#"{"clientName": "Anna", "contactInfo": "anna@example.com"}"#)
                .unwrap();
        assert!(messages(&client).is_empty());
    }

    #[test]
    fn test_strings_longer_than_columns_are_rejected() {
        let car = CarRequest {
            make: "M".repeat(256),
            model: "m".repeat(255),
            ..valid_car()
        };
        assert_eq!(messages(&car), vec!["Make must be at most 255 characters"]);

        let client = ClientRequest {
            id: None,
            client_name: "n".repeat(256),
            contact_info: "c".repeat(256),
        };
        assert_eq!(
            messages(&client),
            vec![
                "Client name must be at most 255 characters",
                "Contact information must be at most 255 characters",
            ]
        );

        let user = UserRequest {
            id: 1,
            username: "u".repeat(256),
            password: "secret".to_string(),
            role: Some(UserRole::Client),
        };
        assert_eq!(messages(&user), vec!["Username must be at most 255 characters"]);
    }

    #[test]
    fn test_car_zero_price_is_rejected() {
        let car = CarRequest {
            price: 0.0,
            ..valid_car()
        };
        assert_eq!(messages(&car), vec!["Price should be positive"]);
    }

    #[test]
    fn test_client_messages() {
        let client = ClientRequest::default();
        assert_eq!(
            messages(&client),
            vec!["Client name is mandatory", "Contact information is mandatory"]
        );
        let client = ClientRequest {
            id: None,
            client_name: "Anna".to_string(),
            contact_info: "anna@example.com".to_string(),
        };
        assert!(messages(&client).is_empty());
    }

    #[test]
    fn test_order_messages() {
        let order: OrderRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            messages(&order),
            vec![
                "Car ID is mandatory",
                "Client ID is mandatory",
                "ID should be positive",
                "Order status cannot be null",
            ]
        );

        let order: OrderRequest = serde_json::from_str(
            r#"{"id": 1, "clientId": 1, "carId": 2, "status": "APPROVED"}"#,
        )
        .unwrap();
        assert!(messages(&order).is_empty());
        assert!(order.creation_date.is_none());
    }

    #[test]
    fn test_user_messages() {
        let user: UserRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(
            messages(&user),
            vec![
                "ID should be positive",
                "Password is mandatory",
                "Password must be between 1 and 100 characters",
                "User role cannot be null",
                "Username is mandatory",
            ]
        );

        let user = UserRequest {
            id: 1,
            username: "alice".to_string(),
            password: "x".repeat(101),
            role: Some(UserRole::Admin),
        };
        assert_eq!(
            messages(&user),
            vec!["Password must be between 1 and 100 characters"]
        );

        let user = UserRequest {
            password: "x".repeat(100),
            ..user
        };
        assert!(messages(&user).is_empty());
    }

    #[test]
    fn test_order_defaults_creation_date() {
        let now = Utc::now();
        let order: OrderRequest =
            serde_json::from_str(r#"{"clientId": 1, "carId": 2, "status": "PENDING"}"#).unwrap();
        let order = order.into_order(now).unwrap();
        assert_eq!(order.creation_date, now);
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_user_request_debug_hides_password() {
        let user = UserRequest {
            id: 1,
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            role: Some(UserRole::Client),
        };
        assert!(!format!("{user:?}").contains("hunter2"));
    }
}
