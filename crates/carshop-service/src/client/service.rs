//! Client service: audited pass-through to the client repository.

use std::sync::Arc;

use tracing::info;

use carshop_core::result::AppResult;
use carshop_core::traits::Repository;
use carshop_entity::client::Client;

use crate::audit::{Auditor, describe_args};

/// Storage required by [`ClientService`].
pub trait ClientStorage: Repository<Client, i32> {}

impl<T> ClientStorage for T where T: Repository<Client, i32> {}

/// Client CRUD.
#[derive(Clone)]
pub struct ClientService {
    store: Arc<dyn ClientStorage>,
    auditor: Auditor,
}

impl ClientService {
    /// Creates a new client service.
    pub fn new(store: Arc<dyn ClientStorage>, auditor: Auditor) -> Self {
        Self { store, auditor }
    }

    pub async fn get_all_clients(&self) -> AppResult<Vec<Client>> {
        self.auditor
            .record("get_all_clients", describe_args(&[]), self.store.find_all())
            .await
    }

    pub async fn get_client_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        self.auditor
            .record("get_client_by_id", describe_args(&[&id]), self.store.find_by_id(id))
            .await
    }

    pub async fn add_client(&self, client: &Client) -> AppResult<Client> {
        let created = self
            .auditor
            .record("add_client", describe_args(&[client]), self.store.create(client))
            .await?;
        info!(client_id = created.id, "Client added");
        Ok(created)
    }

    /// Overwrite client `id`. `None` if no such client exists.
    pub async fn update_client(&self, id: i32, client: &Client) -> AppResult<Option<Client>> {
        self.auditor
            .record(
                "update_client",
                describe_args(&[&id, client]),
                self.store.update(id, client),
            )
            .await
    }

    /// Remove client `id`. `false` if no such client exists.
    ///
    /// Fails with `Conflict` while orders still reference the client.
    pub async fn delete_client_by_id(&self, id: i32) -> AppResult<bool> {
        let deleted = self
            .auditor
            .record("delete_client_by_id", describe_args(&[&id]), self.store.delete(id))
            .await?;
        if deleted {
            info!(client_id = id, "Client deleted");
        }
        Ok(deleted)
    }
}
