//! In-memory repository adapter

use std::cmp::Ordering;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde_json::Value;
use uuid::Uuid;

use super::CrudRepository;
use crate::entity::{
    resolve_sort, to_fields, Changes, Entity, BASE_COLUMNS, CREATED_AT_COLUMN, DELETED_AT_COLUMN,
    ID_COLUMN, UPDATED_AT_COLUMN,
};
use crate::error::{CrudError, CrudResult};
use crate::pagination::{FilterQuery, Paginated, PaginationQuery, SortOrder};

/// Repository keeping rows in insertion order in process memory
///
/// Soft-deleted rows stay in the store, exactly like the `SQLite` adapter.
///
/// # Example
///
/// ```rust
/// use crudgen::prelude::*;
/// use std::sync::Arc;
/// # #[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
/// # struct TagEntity {
/// #     id: String,
/// #     created_at: chrono::DateTime<chrono::Utc>,
/// #     updated_at: chrono::DateTime<chrono::Utc>,
/// #     deleted_at: Option<chrono::DateTime<chrono::Utc>>,
/// # }
/// # impl Entity for TagEntity {
/// #     const TABLE: &'static str = "tag";
/// #     const NAME: &'static str = "Tag";
/// #     fn id(&self) -> &str { &self.id }
/// #     fn deleted_at(&self) -> Option<chrono::DateTime<chrono::Utc>> { self.deleted_at }
/// # }
///
/// let repository: Arc<dyn CrudRepository<TagEntity>> =
///     Arc::new(MemoryRepository::<TagEntity>::new());
/// ```
pub struct MemoryRepository<E> {
    rows: RwLock<Vec<E>>,
}

impl<E: Entity> MemoryRepository<E> {
    /// Create an empty repository
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }

    /// Number of stored rows, soft-deleted ones included
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    /// Whether the store holds no rows at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    fn insert(&self, mut changes: Changes) -> CrudResult<E> {
        let now = serde_json::to_value(Utc::now())?;
        changes.retain(|column, _| !BASE_COLUMNS.contains(&column.as_str()));
        changes.insert(ID_COLUMN.to_string(), Value::String(Uuid::new_v4().to_string()));
        changes.insert(CREATED_AT_COLUMN.to_string(), now.clone());
        changes.insert(UPDATED_AT_COLUMN.to_string(), now);
        changes.insert(DELETED_AT_COLUMN.to_string(), Value::Null);

        let entity: E = serde_json::from_value(Value::Object(changes))?;
        self.rows.write().push(entity.clone());
        Ok(entity)
    }

    fn get(&self, id: &str, with_deleted: bool) -> Option<E> {
        self.rows
            .read()
            .iter()
            .find(|row| row.id() == id && (with_deleted || !row.is_deleted()))
            .cloned()
    }

    fn list(&self, pagination: &PaginationQuery, search: Option<&str>) -> CrudResult<Paginated<E>> {
        let column = resolve_sort::<E>(&pagination.sort)?;
        let needle = search
            .filter(|_| !E::SEARCHABLE.is_empty())
            .map(str::to_ascii_lowercase);

        let mut matching = Vec::new();
        for (position, row) in self.rows.read().iter().enumerate() {
            if row.is_deleted() {
                continue;
            }
            let fields = to_fields(row)?;
            if let Some(needle) = &needle {
                let hit = E::SEARCHABLE.iter().any(|searchable| {
                    fields
                        .get(*searchable)
                        .and_then(value_text)
                        .is_some_and(|text| text.to_ascii_lowercase().contains(needle.as_str()))
                });
                if !hit {
                    continue;
                }
            }
            let key = fields.get(column).cloned().unwrap_or(Value::Null);
            matching.push((position, key, row.clone()));
        }

        matching.sort_by(|(left_pos, left, _), (right_pos, right, _)| {
            let ordering = compare_values(left, right).then(left_pos.cmp(right_pos));
            match pagination.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = u64::try_from(matching.len()).unwrap_or(u64::MAX);
        let data = matching
            .into_iter()
            .skip(usize::try_from(pagination.offset).unwrap_or(usize::MAX))
            .take(usize::try_from(pagination.limit).unwrap_or(usize::MAX))
            .map(|(_, _, row)| row)
            .collect();

        Ok(Paginated {
            data,
            total,
            limit: pagination.limit,
            offset: pagination.offset,
        })
    }

    fn patch(&self, id: &str, changes: Changes) -> CrudResult<E> {
        let mut rows = self.rows.write();
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id && !row.is_deleted())
            .ok_or_else(|| CrudError::not_found(E::NAME, id))?;

        let mut fields = to_fields(&*row)?;
        fields.extend(changes);
        let updated: E = serde_json::from_value(Value::Object(fields))?;
        *row = updated.clone();
        Ok(updated)
    }
}

impl<E: Entity> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> CrudRepository<E> for MemoryRepository<E> {
    async fn create(&self, changes: Changes) -> CrudResult<E> {
        let entity = self.insert(changes)?;
        tracing::info!(entity = E::NAME, id = entity.id(), "created row");
        Ok(entity)
    }

    async fn find_all(&self, pagination: &PaginationQuery) -> CrudResult<Paginated<E>> {
        tracing::debug!(entity = E::NAME, ?pagination, "listing rows");
        self.list(pagination, None)
    }

    async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>> {
        Ok(self.get(id, false))
    }

    async fn find_by_id_with_deleted(&self, id: &str) -> CrudResult<Option<E>> {
        Ok(self.get(id, true))
    }

    async fn find_with_filter(&self, filter: &FilterQuery) -> CrudResult<Paginated<E>> {
        tracing::debug!(entity = E::NAME, ?filter, "searching rows");
        self.list(&filter.pagination(), filter.search_term())
    }

    async fn update(&self, id: &str, mut changes: Changes) -> CrudResult<E> {
        changes.retain(|column, _| !BASE_COLUMNS.contains(&column.as_str()));
        changes.insert(
            UPDATED_AT_COLUMN.to_string(),
            serde_json::to_value(Utc::now())?,
        );
        let entity = self.patch(id, changes)?;
        tracing::info!(entity = E::NAME, id, "updated row");
        Ok(entity)
    }

    async fn delete(&self, id: &str) -> CrudResult<()> {
        let mut marker = Changes::new();
        marker.insert(
            DELETED_AT_COLUMN.to_string(),
            serde_json::to_value(Utc::now())?,
        );
        self.patch(id, marker)?;
        tracing::info!(entity = E::NAME, id, "soft-deleted row");
        Ok(())
    }
}

/// Text form of a scalar used for search matching
fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Order two column values the way `SQLite` would: nulls first, then by value
fn compare_values(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Number(left), Value::Number(right)) => left
            .as_f64()
            .partial_cmp(&right.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
        (Value::String(left), Value::String(right)) => {
            match (
                DateTime::parse_from_rfc3339(left),
                DateTime::parse_from_rfc3339(right),
            ) {
                (Ok(left), Ok(right)) => left.cmp(&right),
                _ => left.cmp(right),
            }
        }
        _ => left.to_string().cmp(&right.to_string()),
    }
}
