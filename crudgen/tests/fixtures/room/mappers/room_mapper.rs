//! Conversions between Room DTOs, entity and domain model

use crudgen::prelude::*;

use super::super::domain::room::Room;
use super::super::dto::create_room::CreateRoomDto;
use super::super::dto::update_room::UpdateRoomDto;
use super::super::infrastructure::entities::room_entity::RoomEntity;

/// Room mapper
pub struct RoomMapper;

impl RoomMapper {
    /// Domain model for a stored row
    #[must_use]
    pub fn to_domain(entity: RoomEntity) -> Room {
        Room {
            id: Some(entity.id),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            deleted_at: entity.deleted_at,
        }
    }

    /// Column values for a new row
    pub fn create_changes(dto: &CreateRoomDto) -> CrudResult<Changes> {
        changes_from(dto)
    }

    /// Column values to overwrite on an existing row
    pub fn update_changes(dto: &UpdateRoomDto) -> CrudResult<Changes> {
        changes_from(dto)
    }
}
