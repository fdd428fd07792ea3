//! Persistence entity contract
//!
//! Every generated persistence entity carries the same four base columns:
//!
//! | column       | type                      | set when                 |
//! |--------------|---------------------------|--------------------------|
//! | `id`         | UUID v4 text              | insert                   |
//! | `created_at` | timestamp                 | insert                   |
//! | `updated_at` | timestamp                 | insert, every update     |
//! | `deleted_at` | nullable timestamp        | soft delete              |
//!
//! Entities serialize with their column names, so a serde object of an entity
//! is also its row.

use chrono::{DateTime, Utc};
use convert_case::{Case, Casing};
use serde::{de::DeserializeOwned, Serialize};

use crate::error::{CrudError, CrudResult};

/// Primary key column
pub const ID_COLUMN: &str = "id";
/// Insert timestamp column
pub const CREATED_AT_COLUMN: &str = "created_at";
/// Last mutation timestamp column
pub const UPDATED_AT_COLUMN: &str = "updated_at";
/// Soft-delete marker column
pub const DELETED_AT_COLUMN: &str = "deleted_at";

/// Columns managed by the repositories; change sets never write them
pub const BASE_COLUMNS: [&str; 4] = [
    ID_COLUMN,
    CREATED_AT_COLUMN,
    UPDATED_AT_COLUMN,
    DELETED_AT_COLUMN,
];

/// Sort keys every entity accepts, as `(request key, column)` pairs
pub const BASE_SORTABLE: &[(&str, &str)] = &[
    ("id", ID_COLUMN),
    ("createdAt", CREATED_AT_COLUMN),
    ("updatedAt", UPDATED_AT_COLUMN),
];

/// Column values to write, keyed by column name
pub type Changes = serde_json::Map<String, serde_json::Value>;

/// A soft-deletable row addressed by a string id
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + Unpin + 'static {
    /// Table backing this entity
    const TABLE: &'static str;

    /// Display name used in not-found messages
    const NAME: &'static str;

    /// Accepted sort keys, as `(request key, column)` pairs
    const SORTABLE: &'static [(&'static str, &'static str)] = BASE_SORTABLE;

    /// Columns matched by free-text search
    const SEARCHABLE: &'static [&'static str] = &[];

    /// Primary identifier
    fn id(&self) -> &str;

    /// Soft-delete marker
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    /// Whether this row has been soft-deleted
    fn is_deleted(&self) -> bool {
        self.deleted_at().is_some()
    }
}

/// Resolve a requested sort key to a column of `E`
///
/// Both the request key (`createdAt`) and the column itself (`created_at`) are
/// accepted. Anything else is rejected, so the returned column is always one of
/// the entity's own `'static` names and safe to splice into SQL.
pub fn resolve_sort<E: Entity>(key: &str) -> CrudResult<&'static str> {
    E::SORTABLE
        .iter()
        .find(|(request_key, column)| *request_key == key || *column == key)
        .map(|(_, column)| *column)
        .ok_or_else(|| CrudError::InvalidSort {
            key: key.to_string(),
            allowed: E::SORTABLE
                .iter()
                .map(|(request_key, _)| *request_key)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Build a change set from a request DTO
///
/// DTO keys are converted to `snake_case` column names and the base columns are
/// dropped, so clients can never overwrite ids or timestamps. Optional fields
/// should use `skip_serializing_if` so that absent values leave columns alone.
pub fn changes_from<T: Serialize>(dto: &T) -> CrudResult<Changes> {
    Ok(to_fields(dto)?
        .into_iter()
        .map(|(key, value)| (key.to_case(Case::Snake), value))
        .filter(|(column, _)| !BASE_COLUMNS.contains(&column.as_str()))
        .collect())
}

/// Serialize a value that must be a JSON object into its fields
pub(crate) fn to_fields<T: Serialize>(value: &T) -> CrudResult<Changes> {
    match serde_json::to_value(value)? {
        serde_json::Value::Object(fields) => Ok(fields),
        _ => Err(CrudError::Serialization(serde::ser::Error::custom(
            "expected a value that serializes to an object",
        ))),
    }
}

/// Whether a column name is a plain SQL identifier
#[must_use]
pub fn is_plain_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() || c == '_')
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
