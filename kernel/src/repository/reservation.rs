use async_trait::async_trait;
use chrono::NaiveDate;
use shared::error::AppResult;

use crate::model::{
    id::{ReservationId, RoomId, UserId},
    list::ListOptions,
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation,
    },
};

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Persists an admission-checked reservation with status `pendiente`
    /// and returns the stored record including its generated id.
    async fn create(&self, event: CreateReservation) -> AppResult<Reservation>;
    async fn find_all(&self, options: ListOptions) -> AppResult<Vec<Reservation>>;
    async fn find_by_id(&self, reservation_id: ReservationId) -> AppResult<Option<Reservation>>;
    async fn find_by_user_id(
        &self,
        user_id: UserId,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>>;
    async fn find_by_room_id(
        &self,
        room_id: RoomId,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>>;
    async fn find_by_date(
        &self,
        date: NaiveDate,
        options: ListOptions,
    ) -> AppResult<Vec<Reservation>>;
    async fn update(&self, event: UpdateReservation) -> AppResult<Reservation>;
    async fn delete(&self, reservation_id: ReservationId) -> AppResult<()>;
}
