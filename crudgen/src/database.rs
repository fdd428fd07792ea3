//! `SQLite` connection pool

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::DatabaseSettings;
use crate::error::CrudResult;

/// Build a connection pool from settings
///
/// # Errors
///
/// Returns [`CrudError::Database`](crate::CrudError::Database) if the URL is
/// malformed or the database cannot be opened.
pub async fn connect(settings: &DatabaseSettings) -> CrudResult<SqlitePool> {
    let options =
        SqliteConnectOptions::from_str(&settings.url)?.create_if_missing(settings.create_if_missing);

    let pool = SqlitePoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_with(options)
        .await?;

    tracing::info!(
        url = %settings.url,
        max_connections = settings.max_connections,
        "database pool ready"
    );
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_creates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rooms.db");
        let settings = DatabaseSettings {
            url: format!("sqlite://{}", path.display()),
            max_connections: 1,
            create_if_missing: true,
        };

        let pool = connect(&settings).await.unwrap();
        sqlx::query("SELECT 1").execute(&pool).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_connect_without_create_fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let settings = DatabaseSettings {
            url: format!("sqlite://{}", dir.path().join("absent.db").display()),
            max_connections: 1,
            create_if_missing: false,
        };

        assert!(connect(&settings).await.is_err());
    }
}
