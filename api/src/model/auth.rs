use garde::Validate;
use kernel::model::{auth::AccessToken, id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(rename = "nombre")]
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[serde(rename = "contrasena")]
    #[garde(length(min = 6))]
    pub password: String,
    #[serde(rename = "rol", default)]
    #[garde(skip)]
    pub role: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[serde(rename = "contrasena")]
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
    pub user_id: UserId,
    pub user_role: Role,
}

impl TokenResponse {
    pub fn new(token: AccessToken, user: &User, expires_in: u64) -> Self {
        Self {
            access_token: token.0,
            token_type: "bearer".into(),
            expires_in,
            user_id: user.id,
            user_role: user.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
}
