//! Error types and error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Result alias used by repositories and services
pub type CrudResult<T> = Result<T, CrudError>;

/// Runtime error type
#[derive(Debug, Error)]
pub enum CrudError {
    /// No live row exists for the given id (404)
    #[error("{entity} with id '{id}' not found")]
    NotFound {
        /// Entity display name
        entity: String,
        /// Requested identifier
        id: String,
    },

    /// Sort key is not one of the entity's sortable keys (400)
    #[error("Cannot sort by '{key}'; expected one of: {allowed}")]
    InvalidSort {
        /// Requested sort key
        key: String,
        /// Comma separated list of accepted keys
        allowed: String,
    },

    /// Change set names a column that is not a plain identifier (500)
    #[error("Invalid column name: {0}")]
    InvalidColumn(String),

    /// Change set could not be built from or applied to a record (500)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database error (500)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl CrudError {
    /// Build a not-found error for an entity display name and id
    #[must_use]
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Check whether this is a not-found condition
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// HTTP status this error maps to at the boundary
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidSort { .. } => StatusCode::BAD_REQUEST,
            Self::InvalidColumn(_) | Self::Serialization(_) | Self::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for CrudError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.to_string(),
        });

        (status, Json(body)).into_response()
    }
}
