//! In-memory store implementations standing in for PostgreSQL in tests.
//!
//! They follow the same contracts as the database repositories: ids come
//! from a per-store sequence starting at 1, `update` / `delete` report
//! unknown ids, and the user store enforces unique usernames.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use carshop_core::error::AppError;
use carshop_core::result::AppResult;
use carshop_core::traits::{
    AuditReader, AuditSink, Repository, Searchable, UpdateKeepingDate, UserStore,
};
use carshop_entity::audit::{AuditLogEntry, NewAuditLogEntry};
use carshop_entity::car::{Car, CarSearchCriteria};
use carshop_entity::client::Client;
use carshop_entity::order::Order;
use carshop_entity::user::{User, UserSearchCriteria};

use crate::audit::Auditor;
use crate::{AuditService, CarService, ClientService, OrderService, UserService};

/// An entity with a sequence-assigned `i32` key.
pub trait Keyed: Clone + Send + Sync + 'static {
    /// Primary key.
    fn key(&self) -> i32;
    /// Replace the primary key.
    fn set_key(&mut self, id: i32);
}

macro_rules! impl_keyed {
    ($($entity:ty),*) => {
        $(impl Keyed for $entity {
            fn key(&self) -> i32 {
                self.id
            }
            fn set_key(&mut self, id: i32) {
                self.id = id;
            }
        })*
    };
}

impl_keyed!(Car, Client, Order, User);

/// Vector-backed table.
#[derive(Debug)]
pub struct MemoryStore<T> {
    rows: Mutex<Vec<T>>,
    next_id: Mutex<i32>,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }
}

impl<T: Keyed> MemoryStore<T> {
    fn rows(&self) -> MutexGuard<'_, Vec<T>> {
        self.rows.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn allocate_id(&self) -> i32 {
        let mut next = self.next_id.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let id = *next;
        *next += 1;
        id
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows().iter().filter(|row| predicate(row)).cloned().collect()
    }
}

#[async_trait]
impl<T: Keyed> Repository<T, i32> for MemoryStore<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        Ok(self.rows().clone())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>> {
        Ok(self.rows().iter().find(|row| row.key() == id).cloned())
    }

    async fn create(&self, entity: &T) -> AppResult<T> {
        let mut stored = entity.clone();
        stored.set_key(self.allocate_id());
        self.rows().push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, id: i32, entity: &T) -> AppResult<Option<T>> {
        let mut rows = self.rows();
        Ok(rows.iter_mut().find(|row| row.key() == id).map(|row| {
            let mut replacement = entity.clone();
            replacement.set_key(id);
            *row = replacement.clone();
            replacement
        }))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let mut rows = self.rows();
        let before = rows.len();
        rows.retain(|row| row.key() != id);
        Ok(rows.len() < before)
    }
}

#[async_trait]
impl UpdateKeepingDate<Order, i32> for MemoryStore<Order> {
    async fn update_keeping_date(&self, id: i32, order: &Order) -> AppResult<Option<Order>> {
        let mut rows = self.rows();
        Ok(rows.iter_mut().find(|row| row.id == id).map(|row| {
            let replacement = Order {
                id,
                creation_date: row.creation_date,
                ..order.clone()
            };
            *row = replacement.clone();
            replacement
        }))
    }
}

#[async_trait]
impl Searchable<Car, CarSearchCriteria> for MemoryStore<Car> {
    async fn search(&self, criteria: &CarSearchCriteria) -> AppResult<Vec<Car>> {
        Ok(self.filter(|car| {
            criteria.make.as_ref().is_none_or(|m| car.make.contains(m.as_str()))
                && criteria.model.as_ref().is_none_or(|m| car.model.contains(m.as_str()))
                && criteria.year.is_none_or(|y| car.year == y)
                && criteria.price.is_none_or(|p| car.price == p)
                && criteria.condition.is_none_or(|c| car.condition == c)
        }))
    }
}

/// User table that also enforces unique usernames on write, like the
/// `users_username_key` constraint.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: MemoryStore<User>,
}

impl MemoryUserStore {
    fn owner_of(&self, username: &str) -> Option<i32> {
        self.inner
            .rows()
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id)
    }
}

#[async_trait]
impl Repository<User, i32> for MemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.inner.find_by_id(id).await
    }

    async fn create(&self, user: &User) -> AppResult<User> {
        if self.owner_of(&user.username).is_some() {
            return Err(AppError::duplicate_username(&user.username));
        }
        self.inner.create(user).await
    }

    async fn update(&self, id: i32, user: &User) -> AppResult<Option<User>> {
        if self.owner_of(&user.username).is_some_and(|owner| owner != id) {
            return Err(AppError::duplicate_username(&user.username));
        }
        self.inner.update(id, user).await
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        self.inner.delete(id).await
    }
}

#[async_trait]
impl Searchable<User, UserSearchCriteria> for MemoryUserStore {
    async fn search(&self, criteria: &UserSearchCriteria) -> AppResult<Vec<User>> {
        Ok(self.inner.filter(|user| {
            criteria
                .username
                .as_ref()
                .is_none_or(|u| user.username.contains(u.as_str()))
                && criteria.role.is_none_or(|r| user.role == r)
        }))
    }
}

#[async_trait]
impl UserStore<i32> for MemoryUserStore {
    async fn is_username_taken(&self, username: &str) -> AppResult<bool> {
        Ok(self.owner_of(username).is_some())
    }

    async fn find_id_by_username(&self, username: &str) -> AppResult<Option<i32>> {
        Ok(self.owner_of(username))
    }
}

/// Audit trail kept in memory.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<AuditLogEntry>>,
    next_id: AtomicI64,
}

impl MemoryAuditLog {
    /// Snapshot of every stored entry, oldest first.
    pub fn entries(&self) -> Vec<AuditLogEntry> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl AuditSink<NewAuditLogEntry> for MemoryAuditLog {
    async fn append(&self, entry: &NewAuditLogEntry) -> AppResult<()> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(AuditLogEntry {
                id,
                method_name: entry.method_name.clone(),
                method_args: entry.method_args.clone(),
                execution_time_ms: entry.execution_time_ms,
                result: entry.result.clone(),
                exception: entry.exception.clone(),
                timestamp: entry.timestamp,
            });
        Ok(())
    }
}

#[async_trait]
impl AuditReader<AuditLogEntry> for MemoryAuditLog {
    async fn recent(&self, limit: i64) -> AppResult<Vec<AuditLogEntry>> {
        let take = usize::try_from(limit).unwrap_or(0);
        Ok(self.entries().into_iter().rev().take(take).collect())
    }
}

/// Sink whose every append fails.
#[derive(Debug, Default)]
pub struct FailingAuditSink;

#[async_trait]
impl AuditSink<NewAuditLogEntry> for FailingAuditSink {
    async fn append(&self, _entry: &NewAuditLogEntry) -> AppResult<()> {
        Err(AppError::database("audit_log is unavailable"))
    }
}

/// Every service wired to fresh in-memory stores sharing one audit log.
#[derive(Clone)]
pub struct MemoryServices {
    pub cars: CarService,
    pub clients: ClientService,
    pub orders: OrderService,
    pub users: UserService,
    pub audit: AuditService,
    pub audit_log: Arc<MemoryAuditLog>,
}

impl MemoryServices {
    pub fn new() -> Self {
        let audit_log = Arc::new(MemoryAuditLog::default());
        let auditor = Auditor::new(audit_log.clone());
        Self {
            cars: CarService::new(Arc::new(MemoryStore::<Car>::default()), auditor.clone()),
            clients: ClientService::new(
                Arc::new(MemoryStore::<Client>::default()),
                auditor.clone(),
            ),
            orders: OrderService::new(Arc::new(MemoryStore::<Order>::default()), auditor.clone()),
            users: UserService::new(Arc::new(MemoryUserStore::default()), auditor),
            audit: AuditService::new(audit_log.clone()),
            audit_log,
        }
    }
}

impl Default for MemoryServices {
    fn default() -> Self {
        Self::new()
    }
}
