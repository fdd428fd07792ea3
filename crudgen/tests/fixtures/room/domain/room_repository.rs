//! Room repository port

use crudgen::prelude::*;

use super::super::infrastructure::entities::room_entity::RoomEntity;

/// Persistence operations for rooms
///
/// Every [`CrudRepository`] over [`RoomEntity`] is a `RoomRepository`. Add
/// Room-specific queries here and implement them in the adapter.
pub trait RoomRepository: CrudRepository<RoomEntity> {}

impl<T: CrudRepository<RoomEntity>> RoomRepository for T {}
