use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{Reservation, ReservationStatus},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct ReservationRow {
    pub id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: String,
}

impl TryFrom<ReservationRow> for Reservation {
    type Error = AppError;

    fn try_from(row: ReservationRow) -> Result<Self, Self::Error> {
        let ReservationRow {
            id,
            user_id,
            room_id,
            date,
            start_time,
            end_time,
            status,
        } = row;
        let status = ReservationStatus::from_str(&status).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown reservation status: {status}"))
        })?;
        Ok(Self {
            id,
            user_id,
            room_id,
            date,
            start_time,
            end_time,
            status,
        })
    }
}
