//! `SQLite` repository adapter built on sqlx

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use sqlx::query_builder::Separated;
use sqlx::sqlite::{Sqlite, SqlitePool, SqliteRow};
use sqlx::{FromRow, QueryBuilder};
use uuid::Uuid;

use super::CrudRepository;
use crate::entity::{
    is_plain_identifier, resolve_sort, Changes, Entity, BASE_COLUMNS, CREATED_AT_COLUMN,
    DELETED_AT_COLUMN, ID_COLUMN, UPDATED_AT_COLUMN,
};
use crate::error::{CrudError, CrudResult};
use crate::pagination::{FilterQuery, Paginated, PaginationQuery};

/// Repository persisting one entity type in one `SQLite` table
///
/// Table and column names come from the entity's `'static` metadata; every
/// value, search pattern, limit and offset is bound as a parameter.
pub struct SqliteRepository<E> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for SqliteRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> SqliteRepository<E>
where
    E: Entity + for<'r> FromRow<'r, SqliteRow>,
{
    /// Create a repository over a connection pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Underlying connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn fetch(&self, id: &str, with_deleted: bool) -> CrudResult<Option<E>> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT * FROM {} WHERE {ID_COLUMN} = ",
            E::TABLE
        ));
        query.push_bind(id.to_string());
        if !with_deleted {
            query.push(format!(" AND {DELETED_AT_COLUMN} IS NULL"));
        }

        Ok(query.build_query_as::<E>().fetch_optional(&self.pool).await?)
    }

    async fn list(
        &self,
        pagination: &PaginationQuery,
        search: Option<&str>,
    ) -> CrudResult<Paginated<E>> {
        let column = resolve_sort::<E>(&pagination.sort)?;

        let mut count = QueryBuilder::<Sqlite>::new(format!("SELECT COUNT(*) FROM {}", E::TABLE));
        push_live_filter::<E>(&mut count, search);
        let total: i64 = count.build_query_scalar().fetch_one(&self.pool).await?;

        let mut select = QueryBuilder::<Sqlite>::new(format!("SELECT * FROM {}", E::TABLE));
        push_live_filter::<E>(&mut select, search);
        let direction = pagination.order.as_sql();
        select.push(format!(" ORDER BY {column} {direction}, rowid {direction} LIMIT "));
        select.push_bind(i64::try_from(pagination.limit).unwrap_or(i64::MAX));
        select.push(" OFFSET ");
        select.push_bind(i64::try_from(pagination.offset).unwrap_or(i64::MAX));

        let data = select.build_query_as::<E>().fetch_all(&self.pool).await?;

        Ok(Paginated {
            data,
            total: u64::try_from(total).unwrap_or_default(),
            limit: pagination.limit,
            offset: pagination.offset,
        })
    }
}

#[async_trait]
impl<E> CrudRepository<E> for SqliteRepository<E>
where
    E: Entity + for<'r> FromRow<'r, SqliteRow>,
{
    async fn create(&self, changes: Changes) -> CrudResult<E> {
        let id = Uuid::new_v4().to_string();
        let now = timestamp();
        let columns = writable(changes)?;

        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "INSERT INTO {} ({ID_COLUMN}, {CREATED_AT_COLUMN}, {UPDATED_AT_COLUMN}",
            E::TABLE
        ));
        for (column, _) in &columns {
            query.push(", ").push(column);
        }
        query.push(") VALUES (");
        {
            let mut values = query.separated(", ");
            values.push_bind(id.clone());
            values.push_bind(now.clone());
            values.push_bind(now);
            for (_, value) in columns {
                bind_json(&mut values, value);
            }
        }
        query.push(")");
        query.build().execute(&self.pool).await?;

        tracing::info!(entity = E::NAME, id = %id, "created row");
        self.fetch(&id, true)
            .await?
            .ok_or_else(|| CrudError::not_found(E::NAME, id))
    }

    async fn find_all(&self, pagination: &PaginationQuery) -> CrudResult<Paginated<E>> {
        tracing::debug!(entity = E::NAME, ?pagination, "listing rows");
        self.list(pagination, None).await
    }

    async fn find_by_id(&self, id: &str) -> CrudResult<Option<E>> {
        self.fetch(id, false).await
    }

    async fn find_by_id_with_deleted(&self, id: &str) -> CrudResult<Option<E>> {
        self.fetch(id, true).await
    }

    async fn find_with_filter(&self, filter: &FilterQuery) -> CrudResult<Paginated<E>> {
        tracing::debug!(entity = E::NAME, ?filter, "searching rows");
        self.list(&filter.pagination(), filter.search_term()).await
    }

    async fn update(&self, id: &str, changes: Changes) -> CrudResult<E> {
        let columns = writable(changes)?;

        let mut query = QueryBuilder::<Sqlite>::new(format!("UPDATE {} SET ", E::TABLE));
        {
            let mut assignments = query.separated(", ");
            assignments.push(format!("{UPDATED_AT_COLUMN} = "));
            assignments.push_bind_unseparated(timestamp());
            for (column, value) in columns {
                assignments.push(format!("{column} = "));
                bind_json_unseparated(&mut assignments, value);
            }
        }
        query.push(format!(" WHERE {ID_COLUMN} = "));
        query.push_bind(id.to_string());
        query.push(format!(" AND {DELETED_AT_COLUMN} IS NULL"));

        let result = query.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(CrudError::not_found(E::NAME, id));
        }

        tracing::info!(entity = E::NAME, id, "updated row");
        self.fetch(id, false)
            .await?
            .ok_or_else(|| CrudError::not_found(E::NAME, id))
    }

    async fn delete(&self, id: &str) -> CrudResult<()> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "UPDATE {} SET {DELETED_AT_COLUMN} = ",
            E::TABLE
        ));
        query.push_bind(timestamp());
        query.push(format!(" WHERE {ID_COLUMN} = "));
        query.push_bind(id.to_string());
        query.push(format!(" AND {DELETED_AT_COLUMN} IS NULL"));

        let result = query.build().execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(CrudError::not_found(E::NAME, id));
        }

        tracing::info!(entity = E::NAME, id, "soft-deleted row");
        Ok(())
    }
}

/// Current time as fixed-width RFC 3339 text, so column order is time order
fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Restrict to live rows and, when searching, to rows matching the term
///
/// `LIKE` folds ASCII letters only, which is the rule both adapters share.
fn push_live_filter<E: Entity>(query: &mut QueryBuilder<'_, Sqlite>, search: Option<&str>) {
    query.push(format!(" WHERE {DELETED_AT_COLUMN} IS NULL"));

    let Some(term) = search else { return };
    if E::SEARCHABLE.is_empty() {
        return;
    }

    let pattern = format!("%{}%", escape_like(term));
    query.push(" AND (");
    for (index, column) in E::SEARCHABLE.iter().enumerate() {
        if index > 0 {
            query.push(" OR ");
        }
        query.push(format!("{column} LIKE "));
        query.push_bind(pattern.clone());
        query.push(" ESCAPE '\\'");
    }
    query.push(")");
}

/// Escape `LIKE` wildcards so the term matches literally
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Drop repository-managed columns and reject names that are not identifiers
fn writable(changes: Changes) -> CrudResult<Vec<(String, Value)>> {
    changes
        .into_iter()
        .filter(|(column, _)| !BASE_COLUMNS.contains(&column.as_str()))
        .map(|(column, value)| {
            if is_plain_identifier(&column) {
                Ok((column, value))
            } else {
                Err(CrudError::InvalidColumn(column))
            }
        })
        .collect()
}

fn bind_json(values: &mut Separated<'_, '_, Sqlite, &'static str>, value: Value) {
    match value {
        Value::Null => values.push_bind(None::<String>),
        Value::Bool(flag) => values.push_bind(flag),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => values.push_bind(integer),
            None => values.push_bind(number.as_f64()),
        },
        Value::String(text) => values.push_bind(text),
        nested @ (Value::Array(_) | Value::Object(_)) => values.push_bind(nested.to_string()),
    };
}

fn bind_json_unseparated(values: &mut Separated<'_, '_, Sqlite, &'static str>, value: Value) {
    match value {
        Value::Null => values.push_bind_unseparated(None::<String>),
        Value::Bool(flag) => values.push_bind_unseparated(flag),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => values.push_bind_unseparated(integer),
            None => values.push_bind_unseparated(number.as_f64()),
        },
        Value::String(text) => values.push_bind_unseparated(text),
        nested @ (Value::Array(_) | Value::Object(_)) => {
            values.push_bind_unseparated(nested.to_string())
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::SortOrder;
    use crate::repository::MemoryRepository;
    use crate::testing::{memory_pool, widget_changes, Widget};

    async fn repository() -> SqliteRepository<Widget> {
        SqliteRepository::new(memory_pool().await)
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_writable_rejects_unsafe_columns() {
        let mut changes = Changes::new();
        changes.insert("name; DROP TABLE widget".to_string(), Value::Null);
        assert!(matches!(
            writable(changes),
            Err(CrudError::InvalidColumn(_))
        ));
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repository = repository().await;
        let created = repository
            .create(widget_changes("gear", Some("red")))
            .await
            .unwrap();

        let found = repository.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(found.name, "gear");
        assert_eq!(found.color.as_deref(), Some("red"));
        assert!(found.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_listing_sorts_and_pages() {
        let repository = repository().await;
        for name in ["delta", "alpha", "charlie", "bravo"] {
            repository.create(widget_changes(name, None)).await.unwrap();
        }

        let query = PaginationQuery::new(2, 1).sorted_by("name", SortOrder::Asc);
        let page = repository.find_all(&query).await.unwrap();
        let names: Vec<_> = page.data.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["bravo", "charlie"]);
        assert_eq!(page.total, 4);
        assert_eq!(page.limit, 2);
        assert_eq!(page.offset, 1);
    }

    #[tokio::test]
    async fn test_offset_beyond_total_keeps_total() {
        let repository = repository().await;
        repository.create(widget_changes("only", None)).await.unwrap();

        let page = repository
            .find_all(&PaginationQuery::new(10, 5))
            .await
            .unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 1);
    }

    #[tokio::test]
    async fn test_search_matches_literal_substring_case_insensitively() {
        let repository = repository().await;
        repository.create(widget_changes("Blue Gear", None)).await.unwrap();
        repository.create(widget_changes("axle", Some("blueish"))).await.unwrap();
        repository.create(widget_changes("100% cog", None)).await.unwrap();
        repository.create(widget_changes("100 cogs", None)).await.unwrap();

        let blue = repository
            .find_with_filter(&FilterQuery::default().with_search("BLUE"))
            .await
            .unwrap();
        assert_eq!(blue.total, 2);

        let percent = repository
            .find_with_filter(&FilterQuery::default().with_search("100%"))
            .await
            .unwrap();
        assert_eq!(percent.total, 1);
        assert_eq!(percent.data[0].name, "100% cog");
    }

    #[tokio::test]
    async fn test_search_folds_ascii_case_only_in_both_adapters() {
        let sqlite = repository().await;
        let memory = MemoryRepository::<Widget>::new();
        let adapters: [&dyn CrudRepository<Widget>; 2] = [&sqlite, &memory];

        for adapter in adapters {
            adapter.create(widget_changes("ÉCLAIR", None)).await.unwrap();
            adapter.create(widget_changes("éclair", Some("Crème"))).await.unwrap();

            let search = |term: &str| FilterQuery::default().with_search(term);
            let totals = [
                adapter.find_with_filter(&search("clair")).await.unwrap().total,
                adapter.find_with_filter(&search("éclair")).await.unwrap().total,
                adapter.find_with_filter(&search("ÉCLAIR")).await.unwrap().total,
                adapter.find_with_filter(&search("CRÈME")).await.unwrap().total,
                adapter.find_with_filter(&search("crème")).await.unwrap().total,
            ];
            assert_eq!(totals, [2, 1, 1, 0, 1]);
        }
    }

    #[tokio::test]
    async fn test_update_and_soft_delete() {
        let repository = repository().await;
        let created = repository.create(widget_changes("gear", None)).await.unwrap();

        let mut changes = Changes::new();
        changes.insert("color".to_string(), Value::String("teal".to_string()));
        let updated = repository.update(&created.id, changes).await.unwrap();
        assert_eq!(updated.color.as_deref(), Some("teal"));
        assert!(updated.updated_at >= created.updated_at);

        repository.delete(&created.id).await.unwrap();
        assert!(repository.find_by_id(&created.id).await.unwrap().is_none());

        let row = repository
            .find_by_id_with_deleted(&created.id)
            .await
            .unwrap()
            .unwrap();
        assert!(row.deleted_at.is_some());

        let err = repository.update(&created.id, Changes::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_row_is_not_found() {
        let repository = repository().await;
        let err = repository.delete("missing").await.unwrap_err();
        assert!(err.is_not_found());
    }
}
