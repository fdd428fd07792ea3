//! Room module
//!
//! CRUD endpoints for rooms under `/room`, backed by the `room` table.

use axum::Router;
use sqlx::SqlitePool;

/// Domain model and repository port
pub mod domain {
    pub mod room;
    pub mod room_repository;
}

/// Request payloads
pub mod dto {
    pub mod create_room;
    pub mod filter_room;
    pub mod update_room;
}

/// Persistence entity, adapter and wiring
pub mod infrastructure {
    /// Persistence entities
    pub mod entities {
        pub mod room_entity;
    }

    /// Repository adapters
    pub mod repositories {
        pub mod sqlite_room_repository;
    }

    /// Construction of repositories and services
    pub mod providers {
        pub mod room_providers;
    }
}

/// Conversions between layers
pub mod mappers {
    pub mod room_mapper;
}

pub mod room_controller;
pub mod room_service;

pub use domain::room::Room;
pub use domain::room_repository::RoomRepository;
pub use infrastructure::entities::room_entity::RoomEntity;
pub use infrastructure::entities::room_entity::ROOM_SCHEMA;
pub use infrastructure::entities::room_entity::ROOM_TABLE;
pub use room_controller::ROOM_ENDPOINTS;
pub use room_service::RoomService;

/// Room routes backed by the `SQLite` pool
pub fn router(pool: SqlitePool) -> Router {
    room_controller::router(infrastructure::providers::room_providers::room_service(pool))
}
