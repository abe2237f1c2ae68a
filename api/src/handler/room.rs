use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::RoomId,
    list::ListOptions,
    room::{
        event::{CreateRoom, UpdateRoom},
        ResourceTags,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::room::{CreateRoomRequest, RoomListQuery, RoomResponse, UpdateRoomRequest},
};

pub async fn show_room_list(
    _user: AuthorizedUser,
    Query(query): Query<RoomListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<RoomResponse>>> {
    query.validate(&())?;

    registry
        .room_repository()
        .find_all(query.into())
        .await
        .map(|rooms| rooms.into_iter().map(RoomResponse::from).collect())
        .map(Json)
}

pub async fn show_room(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<RoomResponse>> {
    registry
        .room_repository()
        .find_by_id(room_id)
        .await
        .and_then(|found| match found {
            Some(found) => Ok(Json(found.into())),
            None => Err(AppError::EntityNotFound("Sala no encontrada".into())),
        })
}

pub async fn register_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateRoomRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;
    let resources = ResourceTags::parse(&req.resources)?;

    let created = registry
        .room_repository()
        .create(CreateRoom::new(req.name, req.campus, req.capacity, resources))
        .await?;

    Ok((StatusCode::CREATED, Json(RoomResponse::from(created))))
}

pub async fn update_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<Json<RoomResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let existing = registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Sala no encontrada".into()))?;

    let resources = match req.resources.as_deref() {
        Some(raw) => ResourceTags::parse(raw)?,
        None => existing.resources,
    };
    let event = UpdateRoom::new(
        room_id,
        req.name.unwrap_or(existing.name),
        req.campus.unwrap_or(existing.campus),
        req.capacity.unwrap_or(existing.capacity),
        resources,
    );

    registry
        .room_repository()
        .update(event)
        .await
        .map(RoomResponse::from)
        .map(Json)
}

pub async fn delete_room(
    user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    if registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Sala no encontrada".into()));
    }

    // Referential guard, mirroring the user-side delete.
    let referenced = registry
        .reservation_repository()
        .find_by_room_id(room_id, ListOptions { skip: 0, limit: 1 })
        .await?;
    if !referenced.is_empty() {
        return Err(AppError::ConflictError(
            "La sala tiene reservas asociadas".into(),
        ));
    }

    registry.room_repository().delete(room_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
