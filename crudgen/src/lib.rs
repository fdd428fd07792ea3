//! crudgen: pagination contract and CRUD runtime for generated modules
//!
//! Every module scaffolded by `crudgen-cli` is a thin layer over the pieces in
//! this crate:
//! - **Pagination contract**: [`PaginationQuery`], [`FilterQuery`], and the
//!   `{data, paginate}` envelope [`PaginatedResponse`]
//! - **Repository port**: [`CrudRepository`], with an in-memory adapter and a
//!   `SQLite` adapter built on sqlx
//! - **Service orchestration**: [`CrudService`], which turns repository pages
//!   into envelopes and guards mutations with a not-found check
//! - **HTTP boundary**: validated extractors and error-to-response mapping for axum
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use crudgen::prelude::*;
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone, serde::Serialize, serde::Deserialize, sqlx::FromRow)]
//! struct NoteEntity {
//!     id: String,
//!     created_at: chrono::DateTime<chrono::Utc>,
//!     updated_at: chrono::DateTime<chrono::Utc>,
//!     deleted_at: Option<chrono::DateTime<chrono::Utc>>,
//! }
//!
//! impl Entity for NoteEntity {
//!     const TABLE: &'static str = "note";
//!     const NAME: &'static str = "Note";
//!
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     fn deleted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
//!         self.deleted_at
//!     }
//! }
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = CrudgenConfig::load_for_service("notes")?;
//! let pool = crudgen::database::connect(&config.database).await?;
//! let repository: Arc<dyn CrudRepository<NoteEntity>> =
//!     Arc::new(SqliteRepository::<NoteEntity>::new(pool));
//! let service = CrudService::new(repository);
//! let page = service.find_all(&PaginationQuery::default()).await?;
//! println!("{} notes", page.paginate.total);
//!
//! // Generated modules contribute their routers here
//! let app = axum::Router::new();
//! let listener = tokio::net::TcpListener::bind(config.service.socket_addr()?).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod database;
pub mod docs;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod observability;
pub mod pagination;
pub mod repository;
pub mod service;

#[cfg(test)]
pub mod testing;

pub use config::CrudgenConfig;
pub use entity::{changes_from, Changes, Entity};
pub use error::{CrudError, CrudResult};
pub use pagination::{
    FilterQuery, PageMeta, Paginated, PaginatedResponse, PaginationQuery, SortOrder,
};
pub use repository::{CrudRepository, MemoryRepository, SqliteRepository};
pub use service::CrudService;

pub mod prelude {
    //! Convenience re-exports for generated modules
    //!
    //! ```rust
    //! use crudgen::prelude::*;
    //! ```

    pub use crate::config::{CrudgenConfig, DatabaseSettings};
    pub use crate::docs::EndpointDoc;
    pub use crate::entity::{changes_from, Changes, Entity, BASE_SORTABLE};
    pub use crate::error::{CrudError, CrudResult};
    pub use crate::extractors::{ValidatedJson, ValidatedQuery, ValidationError};
    pub use crate::pagination::{
        FilterQuery, PageMeta, Paginated, PaginatedResponse, PaginationQuery, SortOrder,
    };
    pub use crate::repository::{CrudRepository, MemoryRepository, SqliteRepository};
    pub use crate::service::CrudService;

    pub use async_trait::async_trait;
}
