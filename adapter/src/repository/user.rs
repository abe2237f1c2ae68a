use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    list::ListOptions,
    user::{
        event::{CreateUser, UpdateUser},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let row: UserRow = sqlx::query_as(
            r#"
                INSERT INTO users (name, email, password_hash, role)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, email, role
            "#,
        )
        .bind(&event.name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role.as_ref())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(email_conflict)?;

        row.try_into()
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT id, name, email, role
                FROM users
                ORDER BY id
                LIMIT $1 OFFSET $2
            "#,
        )
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT id, name, email, role
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, event: UpdateUser) -> AppResult<User> {
        let password_hash = event
            .password
            .as_deref()
            .map(|password| bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .transpose()?;

        let row: Option<UserRow> = sqlx::query_as(
            r#"
                UPDATE users
                SET name = $1,
                    email = $2,
                    role = $3,
                    password_hash = COALESCE($4, password_hash)
                WHERE id = $5
                RETURNING id, name, email, role
            "#,
        )
        .bind(&event.name)
        .bind(&event.email)
        .bind(event.role.as_ref())
        .bind(password_hash)
        .bind(event.user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(email_conflict)?;

        row.ok_or_else(|| AppError::EntityNotFound("Usuario no encontrado".into()))?
            .try_into()
    }

    async fn delete(&self, user_id: UserId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Usuario no encontrado".into()));
        }

        Ok(())
    }
}

// The users table carries a unique index on email; a violation surfaces as
// the API-level duplicate-registration conflict.
fn email_conflict(err: sqlx::Error) -> AppError {
    match err {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            AppError::ConflictError("El email ya está registrado".into())
        }
        e => AppError::SpecificOperationError(e),
    }
}
