use serde::{Deserialize, Serialize};

use crate::model::{id::UserId, role::Role};

/// Claims carried by a signed access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Login identifier (email) of the token holder.
    pub sub: String,
    pub user_id: UserId,
    pub role: Role,
    pub iat: u64,
    pub exp: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(pub String);
