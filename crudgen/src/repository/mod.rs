//! Repository port and adapters
//!
//! [`CrudRepository`] is the port every generated repository trait extends.
//! Two adapters implement it for any [`Entity`]:
//! - [`MemoryRepository`] keeps rows in process memory (tests, prototypes)
//! - [`SqliteRepository`] persists rows through a sqlx `SQLite` pool
//!
//! Both follow the same listing algorithm: drop soft-deleted rows, apply the
//! search term, sort, skip `offset`, take `limit`, and report the pre-pagination
//! total.

mod memory;
mod sqlite;

pub use memory::MemoryRepository;
pub use sqlite::SqliteRepository;

use async_trait::async_trait;

use crate::entity::{Changes, Entity};
use crate::error::CrudResult;
use crate::pagination::{FilterQuery, Paginated, PaginationQuery};

/// Persistence port for one entity type
#[async_trait]
pub trait CrudRepository<E: Entity>: Send + Sync {
    /// Insert a row built from `changes`, assigning id and timestamps
    async fn create(&self, changes: Changes) -> CrudResult<E>;

    /// List live rows one page at a time
    async fn find_all(&self, pagination: &PaginationQuery) -> CrudResult<Paginated<E>>;

    /// Fetch a live row
    async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>>;

    /// Fetch a row even if it has been soft-deleted
    async fn find_by_id_with_deleted(&self, id: &str) -> CrudResult<Option<E>>;

    /// List live rows matching the filter's search term
    async fn find_with_filter(&self, filter: &FilterQuery) -> CrudResult<Paginated<E>>;

    /// Apply `changes` to a live row and refresh `updated_at`
    ///
    /// Fails with `NotFound` when no live row has this id.
    async fn update(&self, id: &str, changes: Changes) -> CrudResult<E>;

    /// Soft-delete a live row by setting `deleted_at`
    ///
    /// Fails with `NotFound` when no live row has this id.
    async fn delete(&self, id: &str) -> CrudResult<()>;
}
