use anyhow::{Context, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST").context("DATABASE_HOST is not set")?,
            port: std::env::var("DATABASE_PORT")
                .context("DATABASE_PORT is not set")?
                .parse()
                .context("DATABASE_PORT is not a valid port number")?,
            username: std::env::var("DATABASE_USERNAME").context("DATABASE_USERNAME is not set")?,
            password: std::env::var("DATABASE_PASSWORD").context("DATABASE_PASSWORD is not set")?,
            database: std::env::var("DATABASE_NAME").context("DATABASE_NAME is not set")?,
        };
        let auth = AuthConfig {
            jwt_secret: std::env::var("JWT_SECRET_KEY").context("JWT_SECRET_KEY is not set")?,
            ttl: std::env::var("JWT_EXPIRE_MINUTES")
                .ok()
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("JWT_EXPIRE_MINUTES is not a valid number of minutes")?
                .unwrap_or(30)
                * 60,
        };
        Ok(Self { database, auth })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Access token lifetime in seconds.
    pub ttl: u64,
}
