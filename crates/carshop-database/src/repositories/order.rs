//! Order repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carshop_core::error::AppError;
use carshop_core::result::AppResult;
use carshop_core::traits::{Repository, UpdateKeepingDate};
use carshop_entity::order::Order;

use super::{database_error, is_foreign_key_violation, violated_constraint};
use crate::sql;

/// Repository for order CRUD operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Turn a broken reference into a validation error naming the missing row.
fn map_write_error(order: &Order, context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    let client_id = order.client_id;
    let car_id = order.car_id;
    move |e| {
        if !is_foreign_key_violation(&e) {
            return database_error(context)(e);
        }
        match violated_constraint(&e) {
            Some(sql::order::CLIENT_FK) => {
                AppError::validation(format!("Client {client_id} does not exist"))
            }
            Some(sql::order::CAR_FK) => AppError::validation(format!("Car {car_id} does not exist")),
            _ => AppError::validation("Order references a missing client or car"),
        }
    }
}

#[async_trait]
impl Repository<Order, i32> for OrderRepository {
    async fn find_all(&self) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>(sql::order::SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to list orders"))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(sql::order::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to find order by id"))
    }

    async fn create(&self, order: &Order) -> AppResult<Order> {
        sqlx::query_as::<_, Order>(sql::order::INSERT)
            .bind(order.client_id)
            .bind(order.car_id)
            .bind(order.creation_date)
            .bind(order.status)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error(order, "Failed to create order"))
    }

    async fn update(&self, id: i32, order: &Order) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(sql::order::UPDATE)
            .bind(order.client_id)
            .bind(order.car_id)
            .bind(order.creation_date)
            .bind(order.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error(order, "Failed to update order"))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(sql::order::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to delete order"))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UpdateKeepingDate<Order, i32> for OrderRepository {
    async fn update_keeping_date(&self, id: i32, order: &Order) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(sql::order::UPDATE_KEEPING_DATE)
            .bind(order.client_id)
            .bind(order.car_id)
            .bind(order.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error(order, "Failed to update order"))
    }
}
