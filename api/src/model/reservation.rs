use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus, ReservationWithDetails},
};
use serde::{Deserialize, Serialize};

use crate::model::{room::RoomResponse, user::UserResponse};

#[derive(Debug, Deserialize)]
pub struct CreateReservationRequest {
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "sala_id")]
    pub room_id: RoomId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    pub start_time: NaiveTime,
    #[serde(rename = "hora_fin")]
    pub end_time: NaiveTime,
    /// Accepted for wire compatibility but ignored: new reservations always
    /// start out `pendiente`.
    #[serde(rename = "estado", default)]
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateReservationRequest {
    #[serde(rename = "usuario_id", default)]
    pub user_id: Option<UserId>,
    #[serde(rename = "sala_id", default)]
    pub room_id: Option<RoomId>,
    #[serde(rename = "fecha", default)]
    pub date: Option<NaiveDate>,
    #[serde(rename = "hora_inicio", default)]
    pub start_time: Option<NaiveTime>,
    #[serde(rename = "hora_fin", default)]
    pub end_time: Option<NaiveTime>,
    #[serde(rename = "estado", default)]
    pub status: Option<ReservationStatus>,
}

#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: ReservationId,
    #[serde(rename = "usuario_id")]
    pub user_id: UserId,
    #[serde(rename = "sala_id")]
    pub room_id: RoomId,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "hora_inicio")]
    pub start_time: NaiveTime,
    #[serde(rename = "hora_fin")]
    pub end_time: NaiveTime,
    #[serde(rename = "estado")]
    pub status: ReservationStatus,
}

impl From<Reservation> for ReservationResponse {
    fn from(value: Reservation) -> Self {
        let Reservation {
            id,
            user_id,
            room_id,
            date,
            start_time,
            end_time,
            status,
        } = value;
        Self {
            id,
            user_id,
            room_id,
            date,
            start_time,
            end_time,
            status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReservationWithDetailsResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    /// Snapshot of the reserving user, `null` when the record is gone.
    #[serde(rename = "usuario")]
    pub user: Option<UserResponse>,
    /// Snapshot of the reserved room, `null` when the record is gone.
    #[serde(rename = "sala")]
    pub room: Option<RoomResponse>,
}

impl From<ReservationWithDetails> for ReservationWithDetailsResponse {
    fn from(value: ReservationWithDetails) -> Self {
        let ReservationWithDetails {
            reservation,
            user,
            room,
        } = value;
        Self {
            reservation: reservation.into(),
            user: user.map(UserResponse::from),
            room: room.map(RoomResponse::from),
        }
    }
}
