//! Construction of the Room repository and service

use std::sync::Arc;

use sqlx::SqlitePool;

use super::super::super::domain::room_repository::RoomRepository;
use super::super::super::room_service::RoomService;
use super::super::repositories::sqlite_room_repository::SqliteRoomRepository;

/// Room repository over a connection pool
#[must_use]
pub fn room_repository(pool: SqlitePool) -> Arc<dyn RoomRepository> {
    Arc::new(SqliteRoomRepository::new(pool))
}

/// Room service wired to its `SQLite` repository
#[must_use]
pub fn room_service(pool: SqlitePool) -> Arc<RoomService> {
    Arc::new(RoomService::new(room_repository(pool)))
}
