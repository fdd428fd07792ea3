//! Room domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A Room as exposed at the HTTP boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Identifier, absent until persisted
    pub id: Option<String>,
    /// When the Room was created
    pub created_at: DateTime<Utc>,
    /// When the Room was last changed
    pub updated_at: DateTime<Utc>,
    /// When the Room was deleted
    pub deleted_at: Option<DateTime<Utc>>,
}
