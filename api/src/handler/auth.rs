use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use garde::Validate;
use kernel::model::user::event::CreateUser;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        auth::{LoginRequest, RegisterRequest, TokenResponse, VerifyTokenResponse},
        user::{parse_role, UserResponse},
    },
};

pub async fn register(
    State(registry): State<AppRegistry>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate(&())?;
    let role = parse_role(req.role.as_deref())?;

    let user = registry
        .user_repository()
        .create(CreateUser::new(req.name, req.email, req.password, role))
        .await?;

    let token = registry.auth_repository().issue_token(&user)?;
    let expires_in = registry.auth_repository().token_ttl();

    Ok((
        StatusCode::CREATED,
        Json(TokenResponse::new(token, &user, expires_in)),
    ))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    req.validate(&())?;

    let user = registry
        .auth_repository()
        .verify_user(&req.email, &req.password)
        .await?;

    let token = registry.auth_repository().issue_token(&user)?;
    let expires_in = registry.auth_repository().token_ttl();

    Ok(Json(TokenResponse::new(token, &user, expires_in)))
}

pub async fn verify_token(user: AuthorizedUser) -> Json<VerifyTokenResponse> {
    Json(VerifyTokenResponse {
        valid: true,
        user_id: user.id(),
        email: user.email().to_string(),
        role: user.claims.role,
    })
}

pub async fn get_current_user(
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
