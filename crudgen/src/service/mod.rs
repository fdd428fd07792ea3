//! Service orchestration over a repository port
//!
//! [`CrudService`] is the thin layer generated services delegate to:
//! - `create` passes straight through
//! - listings are wrapped into the `{data, paginate}` envelope
//! - `find_one` turns an absent row into [`CrudError::NotFound`]
//! - `update` and `delete` run `find_one` first, so a missing id is reported
//!   before any mutation is attempted

use std::marker::PhantomData;
use std::sync::Arc;

use crate::entity::{Changes, Entity};
use crate::error::{CrudError, CrudResult};
use crate::pagination::{FilterQuery, PaginatedResponse, PaginationQuery};
use crate::repository::CrudRepository;

/// Generic CRUD service for one entity type
///
/// `R` defaults to the port trait object; generated services use their own
/// repository trait object (for example `dyn RoomRepository`), which extends
/// [`CrudRepository`].
pub struct CrudService<E, R: ?Sized = dyn CrudRepository<E>> {
    repository: Arc<R>,
    _entity: PhantomData<fn() -> E>,
}

impl<E, R: ?Sized> Clone for CrudService<E, R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            _entity: PhantomData,
        }
    }
}

impl<E, R> CrudService<E, R>
where
    E: Entity,
    R: CrudRepository<E> + ?Sized,
{
    /// Create a service over an explicitly constructed repository
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    /// Repository this service delegates to
    #[must_use]
    pub const fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Insert a new row
    pub async fn create(&self, changes: Changes) -> CrudResult<E> {
        self.repository.create(changes).await
    }

    /// One page of live rows in the response envelope
    pub async fn find_all(&self, pagination: &PaginationQuery) -> CrudResult<PaginatedResponse<E>> {
        Ok(self.repository.find_all(pagination).await?.into_response())
    }

    /// One page of live rows matching the filter, in the response envelope
    pub async fn find_with_filter(&self, filter: &FilterQuery) -> CrudResult<PaginatedResponse<E>> {
        Ok(self.repository.find_with_filter(filter).await?.into_response())
    }

    /// Fetch a live row or fail with not-found
    pub async fn find_one(&self, id: &str) -> CrudResult<E> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| CrudError::not_found(E::NAME, id))
    }

    /// Update a live row after checking that it exists
    pub async fn update(&self, id: &str, changes: Changes) -> CrudResult<E> {
        self.find_one(id).await?;
        self.repository.update(id, changes).await
    }

    /// Soft-delete a live row after checking that it exists
    pub async fn delete(&self, id: &str) -> CrudResult<()> {
        self.find_one(id).await?;
        self.repository.delete(id).await
    }
}
