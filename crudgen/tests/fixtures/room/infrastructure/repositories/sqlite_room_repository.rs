//! `SQLite` adapter for the Room repository port

use crudgen::prelude::*;
use sqlx::SqlitePool;

use super::super::entities::room_entity::RoomEntity;

/// Room repository backed by a sqlx `SQLite` pool
#[derive(Clone)]
pub struct SqliteRoomRepository {
    rows: SqliteRepository<RoomEntity>,
}

impl SqliteRoomRepository {
    /// Create an adapter over a connection pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            rows: SqliteRepository::new(pool),
        }
    }
}

#[async_trait]
impl CrudRepository<RoomEntity> for SqliteRoomRepository {
    async fn create(&self, changes: Changes) -> CrudResult<RoomEntity> {
        self.rows.create(changes).await
    }

    async fn find_all(&self, pagination: &PaginationQuery) -> CrudResult<Paginated<RoomEntity>> {
        self.rows.find_all(pagination).await
    }

    async fn find_by_id(&self, id: &str) -> CrudResult<Option<RoomEntity>> {
        self.rows.find_by_id(id).await
    }

    async fn find_by_id_with_deleted(&self, id: &str) -> CrudResult<Option<RoomEntity>> {
        self.rows.find_by_id_with_deleted(id).await
    }

    async fn find_with_filter(&self, filter: &FilterQuery) -> CrudResult<Paginated<RoomEntity>> {
        self.rows.find_with_filter(filter).await
    }

    async fn update(&self, id: &str, changes: Changes) -> CrudResult<RoomEntity> {
        self.rows.update(id, changes).await
    }

    async fn delete(&self, id: &str) -> CrudResult<()> {
        self.rows.delete(id).await
    }
}
