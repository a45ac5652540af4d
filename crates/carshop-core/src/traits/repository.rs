//! Generic repository traits for database access.

use async_trait::async_trait;

use crate::result::AppResult;

/// Generic CRUD repository trait.
///
/// This trait is defined with generic type parameters so that each
/// entity can have a strongly typed repository. Entity-specific
/// query methods are defined on the concrete repository structs.
///
/// Mutating operations report "not found" explicitly instead of
/// silently succeeding: `update` yields `None` and `delete` yields
/// `false` when no row matched the id.
#[async_trait]
pub trait Repository<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Fetch every row, ordered by primary key.
    async fn find_all(&self) -> AppResult<Vec<Entity>>;

    /// Find an entity by its primary key.
    async fn find_by_id(&self, id: Id) -> AppResult<Option<Entity>>;

    /// Insert a new entity and return it with its generated id.
    ///
    /// The `id` carried by `entity` is ignored.
    async fn create(&self, entity: &Entity) -> AppResult<Entity>;

    /// Overwrite the row with the given id. Returns `None` if no row matched.
    async fn update(&self, id: Id, entity: &Entity) -> AppResult<Option<Entity>>;

    /// Delete an entity by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: Id) -> AppResult<bool>;
}

/// Overwrite that leaves the stored creation date as it is.
#[async_trait]
pub trait UpdateKeepingDate<Entity, Id>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Id: Send + Sync + 'static,
{
    /// Like [`Repository::update`], but the creation date carried by
    /// `entity` is ignored and the stored one is returned.
    async fn update_keeping_date(&self, id: Id, entity: &Entity) -> AppResult<Option<Entity>>;
}

/// Criteria-based lookup for entities that expose a search endpoint.
#[async_trait]
pub trait Searchable<Entity, Criteria>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
    Criteria: Send + Sync + 'static,
{
    /// Return every entity matching all populated criteria.
    ///
    /// Never fails with "not found"; no match yields an empty vector.
    async fn search(&self, criteria: &Criteria) -> AppResult<Vec<Entity>>;
}

/// Login-name lookups needed to keep usernames unique.
#[async_trait]
pub trait UserStore<Id>: Send + Sync + 'static
where
    Id: Send + Sync + 'static,
{
    /// Whether any user already holds `username` (exact, case-sensitive).
    async fn is_username_taken(&self, username: &str) -> AppResult<bool>;

    /// Id of the user holding `username`, if any.
    async fn find_id_by_username(&self, username: &str) -> AppResult<Option<Id>>;
}
