//! HTTP routes for rooms

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crudgen::prelude::*;

use super::domain::room::Room;
use super::dto::create_room::CreateRoomDto;
use super::dto::filter_room::FilterRoomDto;
use super::dto::update_room::UpdateRoomDto;
use super::room_service::RoomService;

/// Routes registered by [`router`]
pub const ROOM_ENDPOINTS: &[EndpointDoc] = &[
    EndpointDoc::new("POST", "/room", "Create a Room"),
    EndpointDoc::new("GET", "/room", "List rooms one page at a time"),
    EndpointDoc::new("GET", "/room/filter/search", "Search rooms one page at a time"),
    EndpointDoc::new("GET", "/room/{id}", "Get a Room by id"),
    EndpointDoc::new("PATCH", "/room/{id}", "Update a Room by id"),
    EndpointDoc::new("DELETE", "/room/{id}", "Delete a Room by id"),
];

/// Room routes over a service
pub fn router(service: Arc<RoomService>) -> Router {
    Router::new()
        .route("/room", get(find_all).post(create))
        .route("/room/filter/search", get(find_with_filter))
        .route("/room/{id}", get(find_one).patch(update).delete(delete))
        .with_state(service)
}

async fn create(
    State(service): State<Arc<RoomService>>,
    ValidatedJson(dto): ValidatedJson<CreateRoomDto>,
) -> CrudResult<(StatusCode, Json<Room>)> {
    let room = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn find_all(
    State(service): State<Arc<RoomService>>,
    ValidatedQuery(pagination): ValidatedQuery<PaginationQuery>,
) -> CrudResult<Json<PaginatedResponse<Room>>> {
    Ok(Json(service.find_all(&pagination).await?))
}

async fn find_with_filter(
    State(service): State<Arc<RoomService>>,
    ValidatedQuery(filter): ValidatedQuery<FilterRoomDto>,
) -> CrudResult<Json<PaginatedResponse<Room>>> {
    Ok(Json(service.find_with_filter(&filter).await?))
}

async fn find_one(
    State(service): State<Arc<RoomService>>,
    Path(id): Path<String>,
) -> CrudResult<Json<Room>> {
    Ok(Json(service.find_one(&id).await?))
}

async fn update(
    State(service): State<Arc<RoomService>>,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateRoomDto>,
) -> CrudResult<Json<Room>> {
    Ok(Json(service.update(&id, dto).await?))
}

async fn delete(
    State(service): State<Arc<RoomService>>,
    Path(id): Path<String>,
) -> CrudResult<StatusCode> {
    service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
