pub mod event;

use chrono::{Duration, NaiveDate, NaiveTime};
use derive_new::new;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{
    id::{ReservationId, RoomId, UserId},
    room::Room,
    user::User,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: ReservationStatus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pendiente,
    Confirmada,
    Cancelada,
}

/// The booked interval: one calendar date plus a start and end time of day.
#[derive(Debug, Clone, Copy, new)]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl TimeSlot {
    /// Admission rule for the interval: the end must lie strictly after the
    /// start, and the booked duration must be exactly one hour. Both times
    /// are anchored to the slot's own date so the duration computation can
    /// never wrap across midnight.
    pub fn validate(&self) -> AppResult<()> {
        if self.end_time <= self.start_time {
            return Err(AppError::UnprocessableEntity(
                "La hora de fin debe ser mayor que la hora de inicio".into(),
            ));
        }

        let start = self.date.and_time(self.start_time);
        let end = self.date.and_time(self.end_time);
        if end.signed_duration_since(start) != Duration::hours(1) {
            return Err(AppError::UnprocessableEntity(
                "Las reservas deben ser de exactamente 1 hora".into(),
            ));
        }

        Ok(())
    }
}

/// Point-in-time read model: a reservation together with snapshots of its
/// related user and room. Either side is `None` when the referenced record
/// no longer exists.
#[derive(Debug)]
pub struct ReservationWithDetails {
    pub reservation: Reservation,
    pub user: Option<User>,
    pub room: Option<Room>,
}
