//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::entity::Entity;

/// Generic CRUD repository trait.
///
/// Controllers depend on `Arc<dyn Repository<T>>` so the store can be
/// swapped for a mock in tests. Every mutating call commits before it
/// returns.
#[async_trait]
pub trait Repository<T>: Send + Sync + 'static
where
    T: Entity,
{
    /// Return all persisted entities. No ordering guarantee.
    async fn get_all(&self) -> AppResult<Vec<T>>;

    /// Find an entity by its identity.
    async fn get_by_id(&self, id: i32) -> AppResult<Option<T>>;

    /// Insert an entity and return it with its assigned identity.
    async fn create(&self, entity: &T) -> AppResult<T>;

    /// Overwrite every column of an existing entity.
    ///
    /// Does not verify that the entity exists; an unknown identity is a
    /// silent no-op.
    async fn update(&self, entity: &T) -> AppResult<()>;

    /// Remove a previously loaded entity.
    async fn delete(&self, entity: &T) -> AppResult<()>;
}
