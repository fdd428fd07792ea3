//! Request body for updating a Room

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields accepted by `PATCH /room/{id}`
///
/// Declare fields as `Option` with `skip_serializing_if` so that omitted
/// fields leave their columns unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoomDto {}
