use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use garde::Validate;
use kernel::model::{
    id::UserId,
    list::ListOptions,
    user::event::{CreateUser, UpdateUser},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        list::ListQuery,
        user::{parse_role, CreateUserRequest, UpdateUserRequest, UserResponse},
    },
};

pub async fn show_user_list(
    _user: AuthorizedUser,
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<UserResponse>>> {
    query.validate(&())?;

    registry
        .user_repository()
        .find_all(query.into())
        .await
        .map(|users| users.into_iter().map(UserResponse::from).collect())
        .map(Json)
}

pub async fn show_current_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user.id())
        .await
        .and_then(|found| match found {
            Some(found) => Ok(Json(found.into())),
            None => Err(AppError::EntityNotFound("Usuario no encontrado".into())),
        })
}

pub async fn show_user(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<UserResponse>> {
    registry
        .user_repository()
        .find_by_id(user_id)
        .await
        .and_then(|found| match found {
            Some(found) => Ok(Json(found.into())),
            None => Err(AppError::EntityNotFound("Usuario no encontrado".into())),
        })
}

pub async fn register_user(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;
    let role = parse_role(req.role.as_deref())?;

    let created = registry
        .user_repository()
        .create(CreateUser::new(req.name, req.email, req.password, role))
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(created))))
}

pub async fn update_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let existing = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Usuario no encontrado".into()))?;

    let role = match req.role.as_deref() {
        Some(raw) => parse_role(Some(raw))?,
        None => existing.role,
    };
    let event = UpdateUser::new(
        user_id,
        req.name.unwrap_or(existing.name),
        req.email.unwrap_or(existing.email),
        req.password,
        role,
    );

    registry
        .user_repository()
        .update(event)
        .await
        .map(UserResponse::from)
        .map(Json)
}

pub async fn delete_user(
    user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    if registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Usuario no encontrado".into()));
    }

    // Referential guard: a user that still owns reservations cannot be
    // removed; reservations keep a weak reference and are never cascaded.
    let owned = registry
        .reservation_repository()
        .find_by_user_id(user_id, ListOptions { skip: 0, limit: 1 })
        .await?;
    if !owned.is_empty() {
        return Err(AppError::ConflictError(
            "El usuario tiene reservas asociadas".into(),
        ));
    }

    registry.user_repository().delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
