use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use kernel::model::{auth::TokenClaims, id::UserId, role::Role};
use registry::AppRegistry;
use shared::error::AppError;

/// Extractor guarding every authenticated route: pulls the bearer token out
/// of the `Authorization` header and verifies it against the identity
/// provider before the handler runs.
pub struct AuthorizedUser {
    pub claims: TokenClaims,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.claims.user_id
    }

    pub fn email(&self) -> &str {
        &self.claims.sub
    }

    pub fn is_admin(&self) -> bool {
        self.claims.role == Role::Admin
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or_else(|| AppError::UnauthenticatedError("Token inválido".into()))?;

        let claims = registry.auth_repository().verify_token(token)?;
        Ok(Self { claims })
    }
}
