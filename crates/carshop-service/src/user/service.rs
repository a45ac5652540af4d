//! User service: audited pass-through that keeps usernames unique.

use std::sync::Arc;

use tracing::{info, warn};

use carshop_core::error::AppError;
use carshop_core::result::AppResult;
use carshop_core::traits::{Repository, Searchable, UserStore};
use carshop_entity::user::{User, UserSearchCriteria};

use crate::audit::{Auditor, describe_args};

/// Storage required by [`UserService`].
pub trait UserStorage:
    Repository<User, i32> + Searchable<User, UserSearchCriteria> + UserStore<i32>
{
}

impl<T> UserStorage for T where
    T: Repository<User, i32> + Searchable<User, UserSearchCriteria> + UserStore<i32>
{
}

/// User CRUD and search.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStorage>,
    auditor: Auditor,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(store: Arc<dyn UserStorage>, auditor: Auditor) -> Self {
        Self { store, auditor }
    }

    pub async fn get_all_users(&self) -> AppResult<Vec<User>> {
        self.auditor
            .record("get_all_users", describe_args(&[]), self.store.find_all())
            .await
    }

    pub async fn get_user_by_id(&self, id: i32) -> AppResult<Option<User>> {
        self.auditor
            .record("get_user_by_id", describe_args(&[&id]), self.store.find_by_id(id))
            .await
    }

    /// Register a user.
    ///
    /// Fails with `DuplicateUsername` when the login name is already taken.
    /// The check and the insert are not atomic; the storage's unique
    /// constraint reports a lost race with the same error.
    pub async fn add_user(&self, user: &User) -> AppResult<User> {
        let created = self
            .auditor
            .record("add_user", describe_args(&[user]), async {
                if self.store.is_username_taken(&user.username).await? {
                    warn!(username = %user.username, "Rejected duplicate username");
                    return Err(AppError::duplicate_username(&user.username));
                }
                self.store.create(user).await
            })
            .await?;
        info!(user_id = created.id, username = %created.username, role = %created.role, "User added");
        Ok(created)
    }

    /// Overwrite user `id`. `None` if no such user exists.
    ///
    /// Renaming to a username held by another user fails with
    /// `DuplicateUsername`.
    pub async fn update_user(&self, id: i32, user: &User) -> AppResult<Option<User>> {
        self.auditor
            .record("update_user", describe_args(&[&id, user]), async {
                match self.store.find_id_by_username(&user.username).await? {
                    Some(owner) if owner != id => {
                        warn!(username = %user.username, user_id = id, "Rejected duplicate username");
                        Err(AppError::duplicate_username(&user.username))
                    }
                    _ => self.store.update(id, user).await,
                }
            })
            .await
    }

    /// Remove user `id`. `false` if no such user exists.
    pub async fn delete_user_by_id(&self, id: i32) -> AppResult<bool> {
        self.auditor
            .record("delete_user_by_id", describe_args(&[&id]), self.store.delete(id))
            .await
    }

    /// Users matching every populated criterion; empty when none match.
    pub async fn search_users(&self, criteria: &UserSearchCriteria) -> AppResult<Vec<User>> {
        self.auditor
            .record(
                "search_users",
                describe_args(&[criteria]),
                self.store.search(criteria),
            )
            .await
    }
}
