//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carshop_core::error::AppError;
use carshop_core::result::AppResult;
use carshop_core::traits::{Repository, Searchable, UserStore};
use carshop_entity::user::{User, UserSearchCriteria};

use super::{database_error, violated_constraint};
use crate::sql::{self, Filter};

/// Repository for user CRUD, search and username lookups.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Map the username unique violation to `DuplicateUsername`.
fn map_write_error(username: &str, context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    let username = username.to_string();
    move |e| {
        if violated_constraint(&e) == Some(sql::user::USERNAME_UNIQUE) {
            AppError::duplicate_username(&username)
        } else {
            database_error(context)(e)
        }
    }
}

#[async_trait]
impl Repository<User, i32> for UserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(sql::user::SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to list users"))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(sql::user::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to find user by id"))
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        sqlx::query_as::<_, User>(sql::user::INSERT)
            .bind(&user.username)
            .bind(&user.password)
            .bind(user.role)
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error(&user.username, "Failed to create user"))
    }

    async fn update(&self, id: i32, user: &User) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(sql::user::UPDATE)
            .bind(&user.username)
            .bind(&user.password)
            .bind(user.role)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error(&user.username, "Failed to update user"))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(sql::user::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error("Failed to delete user"))?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Searchable<User, UserSearchCriteria> for UserRepository {
    async fn search(&self, criteria: &UserSearchCriteria) -> AppResult<Vec<User>> {
        let mut filters = Vec::new();
        if criteria.username.is_some() {
            filters.push(Filter::Contains(sql::user::USERNAME));
        }
        if criteria.role.is_some() {
            filters.push(Filter::Equals(sql::user::ROLE));
        }

        let query_sql = sql::search_query(sql::user::SELECT_BASE, &filters);
        let mut query = sqlx::query_as::<_, User>(&query_sql);
        if let Some(username) = &criteria.username {
            query = query.bind(sql::contains_pattern(username));
        }
        if let Some(role) = criteria.role {
            query = query.bind(role);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to search users"))
    }
}

#[async_trait]
impl UserStore<i32> for UserRepository {
    async fn is_username_taken(&self, username: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(sql::user::EXISTS_BY_USERNAME)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("Failed to check username"))
    }

    async fn find_id_by_username(&self, username: &str) -> AppResult<Option<i32>> {
        sqlx::query_scalar::<_, i32>(sql::user::SELECT_ID_BY_USERNAME)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to find user by username"))
    }
}
