//! Test helpers shared by the unit tests of this crate
//!
//! - [`Widget`] - a small entity with a searchable name and an optional color
//! - [`memory_pool`] - an in-memory `SQLite` pool with the `widget` table created
//! - [`widget_changes`] - change set for a new widget

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use crate::entity::{Changes, Entity, BASE_SORTABLE};

/// Schema for [`Widget`]
pub const WIDGET_SCHEMA: &str = "CREATE TABLE widget (
    id TEXT PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    color TEXT,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
)";

/// Entity used across the runtime tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Widget {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

const WIDGET_SORTABLE: &[(&str, &str)] = &[
    BASE_SORTABLE[0],
    BASE_SORTABLE[1],
    BASE_SORTABLE[2],
    ("name", "name"),
];

impl Entity for Widget {
    const TABLE: &'static str = "widget";
    const NAME: &'static str = "Widget";
    const SORTABLE: &'static [(&'static str, &'static str)] = WIDGET_SORTABLE;
    const SEARCHABLE: &'static [&'static str] = &["name", "color"];

    fn id(&self) -> &str {
        &self.id
    }

    fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

/// Change set for a new widget
pub fn widget_changes(name: &str, color: Option<&str>) -> Changes {
    let mut changes = Changes::new();
    changes.insert("name".to_string(), name.into());
    changes.insert("color".to_string(), color.into());
    changes
}

/// Single-connection in-memory pool with the widget table in place
///
/// The pool is pinned to one connection that never expires, since every new
/// `SQLite` memory connection starts from an empty database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite pool");

    sqlx::query(WIDGET_SCHEMA)
        .execute(&pool)
        .await
        .expect("widget schema");

    pool
}
