//! Room service

use std::sync::Arc;

use crudgen::prelude::*;

use super::domain::room::Room;
use super::domain::room_repository::RoomRepository;
use super::dto::create_room::CreateRoomDto;
use super::dto::filter_room::FilterRoomDto;
use super::dto::update_room::UpdateRoomDto;
use super::infrastructure::entities::room_entity::RoomEntity;
use super::mappers::room_mapper::RoomMapper;

/// Use cases for rooms
#[derive(Clone)]
pub struct RoomService {
    crud: CrudService<RoomEntity, dyn RoomRepository>,
}

impl RoomService {
    /// Create a service over a repository
    #[must_use]
    pub const fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self {
            crud: CrudService::new(repository),
        }
    }

    /// Create a Room
    pub async fn create(&self, dto: CreateRoomDto) -> CrudResult<Room> {
        let changes = RoomMapper::create_changes(&dto)?;
        Ok(RoomMapper::to_domain(self.crud.create(changes).await?))
    }

    /// One page of rooms
    pub async fn find_all(&self, pagination: &PaginationQuery) -> CrudResult<PaginatedResponse<Room>> {
        Ok(self.crud.find_all(pagination).await?.map(RoomMapper::to_domain))
    }

    /// One page of rooms matching the filter
    pub async fn find_with_filter(&self, filter: &FilterRoomDto) -> CrudResult<PaginatedResponse<Room>> {
        Ok(self.crud.find_with_filter(filter).await?.map(RoomMapper::to_domain))
    }

    /// A Room by id
    pub async fn find_one(&self, id: &str) -> CrudResult<Room> {
        Ok(RoomMapper::to_domain(self.crud.find_one(id).await?))
    }

    /// Update a Room
    pub async fn update(&self, id: &str, dto: UpdateRoomDto) -> CrudResult<Room> {
        let changes = RoomMapper::update_changes(&dto)?;
        Ok(RoomMapper::to_domain(self.crud.update(id, changes).await?))
    }

    /// Soft-delete a Room
    pub async fn delete(&self, id: &str) -> CrudResult<()> {
        self.crud.delete(id).await
    }
}
