use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    auth::{AccessToken, TokenClaims},
    user::User,
};

/// Identity provider surface: credential verification plus issuing and
/// verifying signed, time-limited access tokens.
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Checks the credential pair against the stored hash and returns the
    /// matching user. Unknown emails and wrong passwords are
    /// indistinguishable to the caller.
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User>;

    fn issue_token(&self, user: &User) -> AppResult<AccessToken>;

    fn verify_token(&self, token: &str) -> AppResult<TokenClaims>;

    /// Lifetime of issued tokens, in seconds.
    fn token_ttl(&self) -> u64;
}
