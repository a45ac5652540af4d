//! Order service: audited pass-through to the order repository.

use std::sync::Arc;

use tracing::info;

use carshop_core::result::AppResult;
use carshop_core::traits::{Repository, UpdateKeepingDate};
use carshop_entity::order::Order;

use crate::audit::{Auditor, describe_args};

/// Storage required by [`OrderService`].
pub trait OrderStorage: Repository<Order, i32> + UpdateKeepingDate<Order, i32> {}

impl<T> OrderStorage for T where T: Repository<Order, i32> + UpdateKeepingDate<Order, i32> {}

/// Order CRUD. Any status may replace any other.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStorage>,
    auditor: Auditor,
}

impl OrderService {
    /// Creates a new order service.
    pub fn new(store: Arc<dyn OrderStorage>, auditor: Auditor) -> Self {
        Self { store, auditor }
    }

    pub async fn get_all_orders(&self) -> AppResult<Vec<Order>> {
        self.auditor
            .record("get_all_orders", describe_args(&[]), self.store.find_all())
            .await
    }

    pub async fn get_order_by_id(&self, id: i32) -> AppResult<Option<Order>> {
        self.auditor
            .record("get_order_by_id", describe_args(&[&id]), self.store.find_by_id(id))
            .await
    }

    /// Place an order.
    ///
    /// Fails with `Validation` when the client or car does not exist.
    pub async fn add_order(&self, order: &Order) -> AppResult<Order> {
        let created = self
            .auditor
            .record("add_order", describe_args(&[order]), self.store.create(order))
            .await?;
        info!(
            order_id = created.id,
            client_id = created.client_id,
            car_id = created.car_id,
            status = %created.status,
            "Order added"
        );
        Ok(created)
    }

    /// Overwrite order `id`. `None` if no such order exists.
    pub async fn update_order(&self, id: i32, order: &Order) -> AppResult<Option<Order>> {
        let updated = self
            .auditor
            .record(
                "update_order",
                describe_args(&[&id, order]),
                self.store.update(id, order),
            )
            .await?;
        if let Some(order) = &updated {
            info!(order_id = id, status = %order.status, "Order updated");
        }
        Ok(updated)
    }

    /// Overwrite order `id` but keep its stored creation date; the date in
    /// `order` is ignored. Audited as `update_order`.
    pub async fn update_order_keeping_date(
        &self,
        id: i32,
        order: &Order,
    ) -> AppResult<Option<Order>> {
        let updated = self
            .auditor
            .record(
                "update_order",
                describe_args(&[&id, order]),
                self.store.update_keeping_date(id, order),
            )
            .await?;
        if let Some(order) = &updated {
            info!(order_id = id, status = %order.status, "Order updated");
        }
        Ok(updated)
    }

    /// Remove order `id`. `false` if no such order exists.
    pub async fn delete_order_by_id(&self, id: i32) -> AppResult<bool> {
        self.auditor
            .record("delete_order_by_id", describe_args(&[&id]), self.store.delete(id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use carshop_entity::order::OrderStatus;

    use crate::testing::MemoryServices;

    use super::*;

    #[tokio::test]
    async fn test_delete_on_empty_table_reports_not_found() {
        let services = MemoryServices::new();
        assert!(!services.orders.delete_order_by_id(99).await.unwrap());

        let entries = services.audit_log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].method_name, "delete_order_by_id");
        assert_eq!(entries[0].result.as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_status_can_move_freely() {
        let services = MemoryServices::new();
        let created = services
            .orders
            .add_order(&Order::new(1, 1, Utc::now(), OrderStatus::Rejected))
            .await
            .unwrap();

        for status in [OrderStatus::Approved, OrderStatus::Pending, OrderStatus::Rejected] {
            let mut changed = created.clone();
            changed.status = status;
            let updated = services
                .orders
                .update_order(created.id, &changed)
                .await
                .unwrap()
                .unwrap();
            assert_eq!(updated.status, status);
        }
    }

    #[tokio::test]
    async fn test_update_keeping_date_ignores_new_date() {
        let services = MemoryServices::new();
        let placed = Utc::now() - chrono::Duration::days(30);
        let created = services
            .orders
            .add_order(&Order::new(1, 2, placed, OrderStatus::Pending))
            .await
            .unwrap();

        let changed = Order::new(5, 6, Utc::now(), OrderStatus::Approved);
        let updated = services
            .orders
            .update_order_keeping_date(created.id, &changed)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.creation_date, placed);
        assert_eq!(updated.client_id, 5);
        assert_eq!(updated.status, OrderStatus::Approved);

        let missing = services
            .orders
            .update_order_keeping_date(99, &changed)
            .await
            .unwrap();
        assert!(missing.is_none());

        let methods: Vec<String> = services
            .audit_log
            .entries()
            .into_iter()
            .map(|e| e.method_name)
            .collect();
        assert_eq!(methods, vec!["add_order", "update_order", "update_order"]);
    }

    #[tokio::test]
    async fn test_round_trip_keeps_creation_date() {
        let services = MemoryServices::new();
        let placed = Utc::now();
        let created = services
            .orders
            .add_order(&Order::new(3, 4, placed, OrderStatus::Pending))
            .await
            .unwrap();
        let fetched = services
            .orders
            .get_order_by_id(created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.creation_date, placed);
        assert_eq!(services.orders.get_all_orders().await.unwrap().len(), 1);
    }
}
