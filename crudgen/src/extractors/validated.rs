//! Validated query and JSON extractors
//!
//! Both extractors deserialize with axum's own extractor and then run the
//! `validator` rules of the target type. Malformed input is rejected with 400,
//! input that parses but breaks a rule with 422.
//!
//! ```rust,no_run
//! use axum::Json;
//! use crudgen::extractors::ValidatedQuery;
//! use crudgen::pagination::PaginationQuery;
//!
//! async fn list(ValidatedQuery(query): ValidatedQuery<PaginationQuery>) -> Json<u64> {
//!     // query.limit is at least 1 here
//!     Json(query.limit)
//! }
//! ```

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Json, Query, Request,
    },
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

/// Query string extractor that validates after deserializing
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| ValidationError::Query(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// JSON body extractor that validates after deserializing
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ValidationError::Json(rejection.body_text()))?;

        value.validate()?;
        Ok(Self(value))
    }
}

/// Rejection produced by the validated extractors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Query string could not be deserialized (400)
    #[error("Invalid query string: {0}")]
    Query(String),

    /// Body could not be deserialized (400)
    #[error("Invalid request body: {0}")]
    Json(String),

    /// Input parsed but failed its rules (422)
    #[error("Validation failed: {}", format_validation_errors(.0))]
    Validation(#[from] validator::ValidationErrors),
}

impl ValidationError {
    /// HTTP status this rejection maps to
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Query(_) | Self::Json(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, "request rejected");

        let mut body = serde_json::json!({
            "statusCode": status.as_u16(),
            "error": status.canonical_reason().unwrap_or("Error"),
            "message": self.to_string(),
        });
        if let Self::Validation(errors) = &self {
            body["errors"] = validation_errors_json(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// Format validation errors as `field: message` pairs
#[must_use]
pub fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_errors)| {
            field_errors.iter().map(move |error| {
                error.message.as_ref().map_or_else(
                    || format!("{field}: {}", error.code),
                    |message| format!("{field}: {message}"),
                )
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// Validation errors as a JSON object of field to messages
#[must_use]
pub fn validation_errors_json(errors: &validator::ValidationErrors) -> serde_json::Value {
    let map: serde_json::Map<String, serde_json::Value> = errors
        .field_errors()
        .into_iter()
        .map(|(field, field_errors)| {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|error| {
                    error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string)
                })
                .collect();
            (field.to_string(), serde_json::json!(messages))
        })
        .collect();

    serde_json::Value::Object(map)
}
