//! Car service: audited pass-through to the car repository.

use std::sync::Arc;

use tracing::info;

use carshop_core::result::AppResult;
use carshop_core::traits::{Repository, Searchable};
use carshop_entity::car::{Car, CarSearchCriteria};

use crate::audit::{Auditor, describe_args};

/// Storage required by [`CarService`].
pub trait CarStorage: Repository<Car, i32> + Searchable<Car, CarSearchCriteria> {}

impl<T> CarStorage for T where T: Repository<Car, i32> + Searchable<Car, CarSearchCriteria> {}

/// Car CRUD and search.
#[derive(Clone)]
pub struct CarService {
    store: Arc<dyn CarStorage>,
    auditor: Auditor,
}

impl CarService {
    /// Creates a new car service.
    pub fn new(store: Arc<dyn CarStorage>, auditor: Auditor) -> Self {
        Self { store, auditor }
    }

    /// Every car, ordered by id.
    pub async fn get_all_cars(&self) -> AppResult<Vec<Car>> {
        self.auditor
            .record("get_all_cars", describe_args(&[]), self.store.find_all())
            .await
    }

    /// The car with `id`, if any.
    pub async fn get_car_by_id(&self, id: i32) -> AppResult<Option<Car>> {
        self.auditor
            .record("get_car_by_id", describe_args(&[&id]), self.store.find_by_id(id))
            .await
    }

    /// Store a new car. The returned car carries the generated id.
    pub async fn add_car(&self, car: &Car) -> AppResult<Car> {
        let created = self
            .auditor
            .record("add_car", describe_args(&[car]), self.store.create(car))
            .await?;
        info!(car_id = created.id, make = %created.make, model = %created.model, "Car added");
        Ok(created)
    }

    /// Overwrite car `id`. `None` if no such car exists.
    pub async fn update_car(&self, id: i32, car: &Car) -> AppResult<Option<Car>> {
        let updated = self
            .auditor
            .record("update_car", describe_args(&[&id, car]), self.store.update(id, car))
            .await?;
        if updated.is_some() {
            info!(car_id = id, "Car updated");
        }
        Ok(updated)
    }

    /// Remove car `id`. `false` if no such car exists.
    pub async fn delete_car_by_id(&self, id: i32) -> AppResult<bool> {
        let deleted = self
            .auditor
            .record("delete_car_by_id", describe_args(&[&id]), self.store.delete(id))
            .await?;
        if deleted {
            info!(car_id = id, "Car deleted");
        }
        Ok(deleted)
    }

    /// Cars matching every populated criterion; empty when none match.
    pub async fn search_cars(&self, criteria: &CarSearchCriteria) -> AppResult<Vec<Car>> {
        self.auditor
            .record(
                "search_cars",
                describe_args(&[criteria]),
                self.store.search(criteria),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use carshop_entity::car::CarCondition;

    use crate::testing::MemoryServices;

    use super::*;

    fn camry() -> Car {
        Car::new("Toyota", "Camry", 2020, 25_000.0, CarCondition::New)
    }

    #[tokio::test]
    async fn test_add_then_get_round_trip() {
        let services = MemoryServices::new();
        let created = services.cars.add_car(&camry()).await.unwrap();
        assert!(created.id > 0);

        let fetched = services.cars.get_car_by_id(created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_unknown_id_reports_not_found() {
        let services = MemoryServices::new();
        assert_eq!(services.cars.get_car_by_id(999).await.unwrap(), None);
        assert_eq!(services.cars.update_car(999, &camry()).await.unwrap(), None);
        assert!(!services.cars.delete_car_by_id(999).await.unwrap());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let services = MemoryServices::new();
        let created = services.cars.add_car(&camry()).await.unwrap();

        let mut changed = created.clone();
        changed.price = 21_500.0;
        changed.condition = CarCondition::Used;
        let updated = services
            .cars
            .update_car(created.id, &changed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, 21_500.0);
        assert_eq!(updated.condition, CarCondition::Used);
    }

    #[tokio::test]
    async fn test_search_filters() {
        let services = MemoryServices::new();
        services.cars.add_car(&camry()).await.unwrap();
        services
            .cars
            .add_car(&Car::new("Toyota", "Corolla", 2018, 15_000.0, CarCondition::Used))
            .await
            .unwrap();
        services
            .cars
            .add_car(&Car::new("Honda", "Civic", 2018, 15_000.0, CarCondition::Damaged))
            .await
            .unwrap();

        let toyotas = CarSearchCriteria {
            make: Some("Toy".to_string()),
            ..Default::default()
        };
        assert_eq!(services.cars.search_cars(&toyotas).await.unwrap().len(), 2);

        let used_2018 = CarSearchCriteria {
            year: Some(2018),
            condition: Some(CarCondition::Used),
            ..Default::default()
        };
        let found = services.cars.search_cars(&used_2018).await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].model, "Corolla");

        // Substring match is case-sensitive.
        let lower = CarSearchCriteria {
            make: Some("toyota".to_string()),
            ..Default::default()
        };
        assert!(services.cars.search_cars(&lower).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_criteria_returns_everything() {
        let services = MemoryServices::new();
        services.cars.add_car(&camry()).await.unwrap();
        let all = services
            .cars
            .search_cars(&CarSearchCriteria::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_every_call_is_audited() {
        let services = MemoryServices::new();
        let created = services.cars.add_car(&camry()).await.unwrap();
        services.cars.get_all_cars().await.unwrap();
        services.cars.delete_car_by_id(created.id).await.unwrap();

        let names: Vec<String> = services
            .audit_log
            .entries()
            .into_iter()
            .map(|e| e.method_name)
            .collect();
        assert_eq!(names, vec!["add_car", "get_all_cars", "delete_car_by_id"]);

        let delete_entry = &services.audit_log.entries()[2];
        assert_eq!(delete_entry.method_args, format!("[{}]", created.id));
        assert_eq!(delete_entry.result.as_deref(), Some("true"));
    }
}
