//! Request body for creating a Room

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields accepted by `POST /room`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomDto {}
