//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use carshop_entity::car::{Car, CarCondition};
use carshop_entity::client::Client;
use carshop_entity::order::{Order, OrderStatus};
use carshop_entity::user::{User, UserRole};

/// Car as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarResponse {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price: f64,
    pub condition: CarCondition,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            make: car.make,
            model: car.model,
            year: car.year,
            price: car.price,
            condition: car.condition,
        }
    }
}

/// Client as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
    pub id: i32,
    pub client_name: String,
    pub contact_info: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            client_name: client.client_name,
            contact_info: client.contact_info,
        }
    }
}

/// Order as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i32,
    pub client_id: i32,
    pub car_id: i32,
    pub creation_date: DateTime<Utc>,
    pub status: OrderStatus,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            client_id: order.client_id,
            car_id: order.car_id,
            creation_date: order.creation_date,
            status: order.status,
        }
    }
}

/// User as returned by the API. The password round-trips unchanged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub password: String,
    pub role: UserRole,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            password: user.password,
            role: user.role,
        }
    }
}

impl std::fmt::Debug for UserResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserResponse")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency answered, `degraded` otherwise.
    pub status: String,
    /// Server version.
    pub version: String,
    /// `connected`, `unavailable` or `not configured`.
    pub database: String,
}

/// Convert a list of entities into their response shape.
pub fn collect<E, R: From<E>>(items: Vec<E>) -> Vec<R> {
    items.into_iter().map(R::from).collect()
}
