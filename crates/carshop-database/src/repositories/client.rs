//! Client repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carshop_core::error::AppError;
use carshop_core::result::AppResult;
use carshop_core::traits::Repository;
use carshop_entity::client::Client;

use super::{database_error, is_foreign_key_violation};
use crate::sql;

/// Repository for client CRUD operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: PgPool,
}

impl ClientRepository {
    /// Create a new client repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Client, i32> for ClientRepository {
    async fn find_all(&self) -> AppResult<Vec<Client>> {
        sqlx::query_as::<_, Client>(sql::client::SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to list clients"))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>(sql::client::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to find client by id"))
    }

    async fn create(&self, client: &Client) -> AppResult<Client> {
        sqlx::query_as::<_, Client>(sql::client::INSERT)
            .bind(&client.client_name)
            .bind(&client.contact_info)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("Failed to create client"))
    }

    async fn update(&self, id: i32, client: &Client) -> AppResult<Option<Client>> {
        sqlx::query_as::<_, Client>(sql::client::UPDATE)
            .bind(&client.client_name)
            .bind(&client.contact_info)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to update client"))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(sql::client::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict(format!("Client {id} is referenced by existing orders"))
                } else {
                    database_error("Failed to delete client")(e)
                }
            })?;
        Ok(result.rows_affected() > 0)
    }
}
