use async_trait::async_trait;
use chrono::NaiveDate;
use derive_new::new;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    list::ListOptions,
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation,
    },
};
use kernel::repository::reservation::ReservationRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::reservation::ReservationRow, ConnectionPool};

#[derive(new)]
pub struct ReservationRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ReservationRepository for ReservationRepositoryImpl {
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation> {
        let row: ReservationRow = sqlx::query_as(
            r#"
                INSERT INTO reservations (user_id, room_id, "date", start_time, end_time, status)
                VALUES ($1, $2, $3, $4, $5, 'pendiente')
                RETURNING id, user_id, room_id, "date", start_time, end_time, status
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .bind(event.slot.date)
        .bind(event.slot.start_time)
        .bind(event.slot.end_time)
        .fetch_one(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.try_into()
    }

    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, room_id, "date", start_time, end_time, status
                FROM reservations
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

    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, room_id, "date", start_time, end_time, status
                FROM reservations
                WHERE id = $1
            "#,
        )
        .bind(reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(TryInto::try_into).transpose()
    }

    async fn find_by_user_id(
        &self,
        user_id: UserId,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, room_id, "date", start_time, end_time, status
                FROM reservations
                WHERE user_id = $1
                ORDER BY id
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_room_id(
        &self,
        room_id: RoomId,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, room_id, "date", start_time, end_time, status
                FROM reservations
                WHERE room_id = $1
                ORDER BY id
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(room_id)
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn find_by_date(
        &self,
        date: NaiveDate,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>> {
        let rows: Vec<ReservationRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, room_id, "date", start_time, end_time, status
                FROM reservations
                WHERE "date" = $1
                ORDER BY id
                LIMIT $2 OFFSET $3
            "#,
        )
        .bind(date)
        .bind(options.limit)
        .bind(options.skip)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation> {
        let row: Option<ReservationRow> = sqlx::query_as(
            r#"
                UPDATE reservations
                SET user_id = $1,
                    room_id = $2,
                    "date" = $3,
                    start_time = $4,
                    end_time = $5,
                    status = $6
                WHERE id = $7
                RETURNING id, user_id, room_id, "date", start_time, end_time, status
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .bind(event.slot.date)
        .bind(event.slot.start_time)
        .bind(event.slot.end_time)
        .bind(event.status.as_ref())
        .bind(event.reservation_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.ok_or_else(|| AppError::EntityNotFound("Reserva no encontrada".into()))?
            .try_into()
    }

    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(reservation_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("Reserva no encontrada".into()));
        }

        Ok(())
    }
}
