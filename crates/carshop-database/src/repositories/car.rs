//! Car repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use carshop_core::error::AppError;
use carshop_core::result::AppResult;
use carshop_core::traits::{Repository, Searchable};
use carshop_entity::car::{Car, CarSearchCriteria};

use super::{database_error, is_foreign_key_violation};
use crate::sql::{self, Filter};

/// Repository for car CRUD and search operations.
#[derive(Debug, Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    /// Create a new car repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Car, i32> for CarRepository {
    async fn find_all(&self) -> AppResult<Vec<Car>> {
        sqlx::query_as::<_, Car>(sql::car::SELECT_ALL)
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to list cars"))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        sqlx::query_as::<_, Car>(sql::car::SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to find car by id"))
    }

    async fn create(&self, car: &Car) -> AppResult<Car> {
        sqlx::query_as::<_, Car>(sql::car::INSERT)
            .bind(&car.make)
            .bind(&car.model)
            .bind(car.year)
            .bind(car.price)
            .bind(car.condition)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error("Failed to create car"))
    }

    async fn update(&self, id: i32, car: &Car) -> AppResult<Option<Car>> {
        sqlx::query_as::<_, Car>(sql::car::UPDATE)
            .bind(&car.make)
            .bind(&car.model)
            .bind(car.year)
            .bind(car.price)
            .bind(car.condition)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(database_error("Failed to update car"))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query(sql::car::DELETE)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    AppError::conflict(format!("Car {id} is referenced by existing orders"))
                } else {
                    database_error("Failed to delete car")(e)
                }
            })?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl Searchable<Car, CarSearchCriteria> for CarRepository {
    async fn search(&self, criteria: &CarSearchCriteria) -> AppResult<Vec<Car>> {
        let mut filters = Vec::new();
        if criteria.make.is_some() {
            filters.push(Filter::Contains(sql::car::MAKE));
        }
        if criteria.model.is_some() {
            filters.push(Filter::Contains(sql::car::MODEL));
        }
        if criteria.year.is_some() {
            filters.push(Filter::Equals(sql::car::YEAR));
        }
        if criteria.price.is_some() {
            filters.push(Filter::Equals(sql::car::PRICE));
        }
        if criteria.condition.is_some() {
            filters.push(Filter::Equals(sql::car::CONDITION));
        }

        let query_sql = sql::search_query(sql::car::SELECT_BASE, &filters);
        let mut query = sqlx::query_as::<_, Car>(&query_sql);

        // Bind in the same order the filters were pushed.
        if let Some(make) = &criteria.make {
            query = query.bind(sql::contains_pattern(make));
        }
        if let Some(model) = &criteria.model {
            query = query.bind(sql::contains_pattern(model));
        }
        if let Some(year) = criteria.year {
            query = query.bind(year);
        }
        if let Some(price) = criteria.price {
            query = query.bind(price);
        }
        if let Some(condition) = criteria.condition {
            query = query.bind(condition);
        }

        query
            .fetch_all(&self.pool)
            .await
            .map_err(database_error("Failed to search cars"))
    }
}
