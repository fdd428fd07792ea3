//! Room persistence entity

use chrono::{DateTime, Utc};
use crudgen::prelude::*;
use serde::{Deserialize, Serialize};

/// Table backing rooms
pub const ROOM_TABLE: &str = "room";

/// Table definition for rooms
pub const ROOM_SCHEMA: &str = "CREATE TABLE IF NOT EXISTS room (
    id TEXT PRIMARY KEY NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
)";

/// A row of the `room` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomEntity {
    /// UUID v4 primary key
    pub id: String,
    /// Insert timestamp
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Entity for RoomEntity {
    const TABLE: &'static str = ROOM_TABLE;
    const NAME: &'static str = "Room";

    fn id(&self) -> &str {
        &self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}
