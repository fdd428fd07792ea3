//! Pagination and filter contract
//!
//! One request shape for every listing endpoint of every generated module:
//!
//! ```text
//! GET /room?limit=10&offset=0&sort=createdAt&order=DESC
//! GET /room/filter/search?search=blue&limit=5
//! ```
//!
//! Responses use the envelope:
//!
//! ```json
//! { "data": [...], "paginate": { "total": 42, "limit": 10, "offset": 0, "pages": 5 } }
//! ```
//!
//! Query values arrive as text and are coerced by serde. Values below the floor
//! (`limit < 1`, negative `offset`) are rejected at the boundary, never clamped.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default page size
pub const DEFAULT_LIMIT: u64 = 10;

/// Default number of rows to skip
pub const DEFAULT_OFFSET: u64 = 0;

/// Default sort key
pub const DEFAULT_SORT: &str = "createdAt";

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Ascending
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    /// Descending (default)
    #[default]
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction
    #[must_use]
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Pagination request shared by every listing endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PaginationQuery {
    /// Maximum number of rows to return
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: u64,

    /// Number of matching rows to skip
    pub offset: u64,

    /// Sort key, resolved against the entity's sortable keys
    pub sort: String,

    /// Sort direction
    pub order: SortOrder,
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::default(),
        }
    }
}

impl PaginationQuery {
    /// Create a query for one page with default sorting
    #[must_use]
    pub fn new(limit: u64, offset: u64) -> Self {
        Self {
            limit,
            offset,
            ..Self::default()
        }
    }

    /// Set the sort key and direction
    #[must_use]
    pub fn sorted_by(mut self, sort: impl Into<String>, order: SortOrder) -> Self {
        self.sort = sort.into();
        self.order = order;
        self
    }
}

/// Filter request: pagination plus optional free-text search
///
/// Fields are spelled out rather than flattened from [`PaginationQuery`] so
/// that query-string coercion of `limit`/`offset` keeps working.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct FilterQuery {
    /// Maximum number of rows to return
    #[validate(range(min = 1, message = "limit must be at least 1"))]
    pub limit: u64,

    /// Number of matching rows to skip
    pub offset: u64,

    /// Sort key, resolved against the entity's sortable keys
    pub sort: String,

    /// Sort direction
    pub order: SortOrder,

    /// Substring matched against searchable columns, ignoring ASCII case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self::from(PaginationQuery::default())
    }
}

impl From<PaginationQuery> for FilterQuery {
    fn from(pagination: PaginationQuery) -> Self {
        Self {
            limit: pagination.limit,
            offset: pagination.offset,
            sort: pagination.sort,
            order: pagination.order,
            search: None,
        }
    }
}

impl FilterQuery {
    /// Attach a search term
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Pagination half of the filter
    #[must_use]
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            limit: self.limit,
            offset: self.offset,
            sort: self.sort.clone(),
            order: self.order,
        }
    }

    /// Trimmed search term; blank terms count as absent
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}

/// One page of rows as returned by a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Rows in this page, in sort order
    pub data: Vec<T>,
    /// Number of rows matching the query before pagination
    pub total: u64,
    /// Page size that was requested
    pub limit: u64,
    /// Offset that was requested
    pub offset: u64,
}

impl<T> Paginated<T> {
    /// Convert every row, keeping the pagination metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }

    /// Wrap into the response envelope, computing the page count
    #[must_use]
    pub fn into_response(self) -> PaginatedResponse<T> {
        PaginatedResponse {
            paginate: PageMeta {
                total: self.total,
                limit: self.limit,
                offset: self.offset,
                pages: page_count(self.total, self.limit),
            },
            data: self.data,
        }
    }
}

/// Pagination metadata of the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Number of rows matching the query
    pub total: u64,
    /// Page size
    pub limit: u64,
    /// Rows skipped
    pub offset: u64,
    /// `ceil(total / limit)`
    pub pages: u64,
}

/// Listing response envelope: `{data, paginate}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// Rows in this page
    pub data: Vec<T>,
    /// Pagination metadata
    pub paginate: PageMeta,
}

impl<T> PaginatedResponse<T> {
    /// Convert every row, keeping the metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResponse<U> {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            paginate: self.paginate,
        }
    }
}

/// Number of pages needed to show `total` rows `limit` at a time
///
/// A zero limit never passes validation; it yields zero pages here rather than
/// dividing by zero.
#[must_use]
pub const fn page_count(total: u64, limit: u64) -> u64 {
    if limit == 0 {
        0
    } else {
        total.div_ceil(limit)
    }
}
