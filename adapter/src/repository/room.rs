use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::RoomId,
    room::{
        event::{CreateRoom, UpdateRoom},
        Room, RoomQuery,
    },
};
use kernel::repository::room::RoomRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::room::RoomRow, ConnectionPool};

#[derive(new)]
pub struct RoomRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl RoomRepository for RoomRepositoryImpl {
    async fn create(&self, event: CreateRoom) -> AppResult<Room> {
        let row: RoomRow = sqlx::query_as(
            r#"
                INSERT INTO rooms (name, campus, capacity, resources)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, campus, capacity, resources
            "#,
        )
        .bind(&event.name)
        .bind(event.campus.as_ref())
        .bind(event.capacity)
        .bind(event.resources.as_canonical())
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self, query: RoomQuery) -> AppResult<Vec<Room>> {
        // Both filters are optional; a NULL bind disables the predicate.
        let rows: Vec<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, campus, capacity, resources
                FROM rooms
                WHERE ($1::VARCHAR IS NULL OR campus = $1)
                  AND ($2::VARCHAR IS NULL OR resources LIKE '%' || $2 || '%')
                ORDER BY id
                LIMIT $3 OFFSET $4
            "#,
        )
        .bind(query.campus.map(|campus| campus.as_ref().to_string()))
        .bind(query.resource.map(|resource| resource.as_ref().to_string()))
        .bind(query.options.limit)
        .bind(query.options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT id, name, campus, capacity, resources
                FROM rooms
                WHERE id = $1
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn update(&self, event: UpdateRoom) -> AppResult<Room> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                UPDATE rooms
                SET name = $1, campus = $2, capacity = $3, resources = $4
                WHERE id = $5
                RETURNING id, name, campus, capacity, resources
            "#,
        )
        .bind(&event.name)
        .bind(event.campus.as_ref())
        .bind(event.capacity)
        .bind(event.resources.as_canonical())
        .bind(event.room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.ok_or_else(|| AppError::EntityNotFound("Sala no encontrada".into()))?
            .try_into()
    }

    async fn delete(&self, room_id: RoomId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(room_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Sala no encontrada".into()));
        }

        Ok(())
    }
}
