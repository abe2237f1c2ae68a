use async_trait::async_trait;
use chrono::Utc;
use derive_new::new;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use kernel::model::{
    auth::{AccessToken, TokenClaims},
    user::User,
};
use kernel::repository::auth::AuthRepository;
use shared::{
    config::AuthConfig,
    error::{AppError, AppResult},
};

use crate::database::{model::user::UserAuthRow, ConnectionPool};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    auth: AuthConfig,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<User> {
        let row: Option<UserAuthRow> = sqlx::query_as(
            r#"
                SELECT id, name, email, password_hash, role
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(row) = row else {
            return Err(AppError::UnauthenticatedError(
                "Email o contraseña incorrectos".into(),
            ));
        };

        if !bcrypt::verify(password, &row.password_hash)? {
            return Err(AppError::UnauthenticatedError(
                "Email o contraseña incorrectos".into(),
            ));
        }

        row.try_into()
    }

    fn issue_token(&self, user: &User) -> AppResult<AccessToken> {
        let iat = Utc::now().timestamp() as u64;
        let claims = TokenClaims {
            sub: user.email.clone(),
            user_id: user.id,
            role: user.role,
            iat,
            exp: iat + self.auth.ttl,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.auth.jwt_secret.as_bytes()),
        )?;
        Ok(AccessToken(token))
    }

    fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        jsonwebtoken::decode::<TokenClaims>(
            token,
            &DecodingKey::from_secret(self.auth.jwt_secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| AppError::UnauthenticatedError("Token inválido".into()))
    }

    fn token_ttl(&self) -> u64 {
        self.auth.ttl
    }
}
