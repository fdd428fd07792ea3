//! Endpoint documentation metadata
//!
//! Generated controllers publish an `ENDPOINTS` table describing each route
//! they register. The table is plain data so any API documentation tool can
//! consume it.

use serde::Serialize;

/// One documented route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EndpointDoc {
    /// HTTP method, upper case
    pub method: &'static str,
    /// Route path in axum syntax
    pub path: &'static str,
    /// Human readable summary
    pub description: &'static str,
}

impl EndpointDoc {
    /// Describe a route
    #[must_use]
    pub const fn new(method: &'static str, path: &'static str, description: &'static str) -> Self {
        Self {
            method,
            path,
            description,
        }
    }
}

impl std::fmt::Display for EndpointDoc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} - {}", self.method, self.path, self.description)
    }
}
