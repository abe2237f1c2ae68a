use derive_new::new;

use crate::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{ReservationStatus, TimeSlot},
};

/// Admission-checked input for a new reservation. New reservations always
/// start out `pendiente`, so no status is carried here.
#[derive(Debug, new)]
pub struct CreateReservation {
    pub user_id: UserId,
    pub room_id: RoomId,
    pub slot: TimeSlot,
}

/// Fully merged state for a reservation update. Callers resolve the partial
/// input against the stored record (and re-validate the result) before
/// building this event; the store just writes it.
#[derive(Debug, new)]
pub struct UpdateReservation {
    pub reservation_id: ReservationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub slot: TimeSlot,
    pub status: ReservationStatus,
}
