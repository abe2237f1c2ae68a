use std::str::FromStr;

use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            id,
            name,
            email,
            role,
        } = row;
        let role = Role::from_str(&role)
            .map_err(|_| AppError::ConversionEntityError(format!("unknown role value: {role}")))?;
        Ok(Self {
            id,
            name,
            email,
            role,
        })
    }
}

/// Row used by credential verification; the password hash never leaves the
/// auth repository.
#[derive(sqlx::FromRow)]
pub struct UserAuthRow {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl TryFrom<UserAuthRow> for User {
    type Error = AppError;

    fn try_from(row: UserAuthRow) -> Result<Self, Self::Error> {
        let role = Role::from_str(&row.role).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown role value: {}", row.role))
        })?;
        Ok(Self {
            id: row.id,
            name: row.name,
            email: row.email,
            role,
        })
    }
}
