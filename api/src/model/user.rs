use std::str::FromStr;

use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::User};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: UserId,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
        } = value;
        Self {
            id,
            name,
            email,
            role,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
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
pub struct UpdateUserRequest {
    #[serde(rename = "nombre", default)]
    #[garde(inner(length(min = 1, max = 255)))]
    pub name: Option<String>,
    #[garde(inner(email))]
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "contrasena", default)]
    #[garde(inner(length(min = 6)))]
    pub password: Option<String>,
    #[serde(rename = "rol", default)]
    #[garde(skip)]
    pub role: Option<String>,
}

/// The role arrives as a free string so an unknown value can be answered
/// with the API's own message instead of a deserialization rejection.
pub fn parse_role(value: Option<&str>) -> AppResult<Role> {
    match value {
        None => Ok(Role::default()),
        Some(raw) => Role::from_str(raw).map_err(|_| {
            AppError::UnprocessableEntity("Rol inválido. Debe ser 'user' o 'admin'".into())
        }),
    }
}
