use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use garde::Validate;
use kernel::model::{
    id::{ReservationId, RoomId, UserId},
    reservation::{
        event::{CreateReservation, UpdateReservation},
        Reservation, ReservationStatus, ReservationWithDetails, TimeSlot,
    },
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::{
        list::ListQuery,
        reservation::{
            CreateReservationRequest, ReservationResponse, ReservationWithDetailsResponse,
            UpdateReservationRequest,
        },
    },
};

/// Admission path for a new reservation: both references must resolve before
/// the interval is even looked at, and the stored status is always
/// `pendiente` no matter what the request carried.
pub async fn register_reservation(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    ensure_user_and_room(&registry, req.user_id, req.room_id).await?;

    let slot = TimeSlot::new(req.date, req.start_time, req.end_time);
    slot.validate()?;

    let created = registry
        .reservation_repository()
        .create(CreateReservation::new(req.user_id, req.room_id, slot))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReservationResponse::from(created)),
    ))
}

/// Partial update. The checks always run against the merged record, so an
/// update that leaves the times untouched still fails when the stored slot
/// no longer satisfies the one-hour rule.
pub async fn update_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateReservationRequest>,
) -> AppResult<Json<ReservationResponse>> {
    let existing = find_reservation(&registry, reservation_id).await?;

    let user_id = req.user_id.unwrap_or(existing.user_id);
    let room_id = req.room_id.unwrap_or(existing.room_id);
    ensure_user_and_room(&registry, user_id, room_id).await?;

    let slot = TimeSlot::new(
        req.date.unwrap_or(existing.date),
        req.start_time.unwrap_or(existing.start_time),
        req.end_time.unwrap_or(existing.end_time),
    );
    slot.validate()?;

    let status = req.status.unwrap_or(existing.status);

    registry
        .reservation_repository()
        .update(UpdateReservation::new(
            reservation_id,
            user_id,
            room_id,
            slot,
            status,
        ))
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

/// Cancellation is unconditional once admitted: no reference or interval
/// re-validation, only the idempotency guard on an already cancelled record.
pub async fn cancel_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    let existing = find_reservation(&registry, reservation_id).await?;

    if existing.status == ReservationStatus::Cancelada {
        return Err(AppError::UnprocessableEntity(
            "La reserva ya está cancelada".into(),
        ));
    }

    let slot = TimeSlot::new(existing.date, existing.start_time, existing.end_time);
    registry
        .reservation_repository()
        .update(UpdateReservation::new(
            existing.id,
            existing.user_id,
            existing.room_id,
            slot,
            ReservationStatus::Cancelada,
        ))
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn delete_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    find_reservation(&registry, reservation_id).await?;

    registry
        .reservation_repository()
        .delete(reservation_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn show_reservation_list(
    _user: AuthorizedUser,
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationResponse>>> {
    query.validate(&())?;

    registry
        .reservation_repository()
        .find_all(query.into())
        .await
        .map(|items| items.into_iter().map(ReservationResponse::from).collect())
        .map(Json)
}

pub async fn show_reservation(
    _user: AuthorizedUser,
    Path(reservation_id): Path<ReservationId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ReservationResponse>> {
    find_reservation(&registry, reservation_id)
        .await
        .map(ReservationResponse::from)
        .map(Json)
}

pub async fn show_reservation_list_with_details(
    _user: AuthorizedUser,
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationWithDetailsResponse>>> {
    query.validate(&())?;

    let reservations = registry
        .reservation_repository()
        .find_all(query.into())
        .await?;

    with_details(&registry, reservations).await.map(Json)
}

pub async fn show_reservations_by_user(
    _user: AuthorizedUser,
    Path(user_id): Path<UserId>,
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationWithDetailsResponse>>> {
    query.validate(&())?;

    if registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Usuario no encontrado".into()));
    }

    let reservations = registry
        .reservation_repository()
        .find_by_user_id(user_id, query.into())
        .await?;

    with_details(&registry, reservations).await.map(Json)
}

pub async fn show_reservations_by_room(
    _user: AuthorizedUser,
    Path(room_id): Path<RoomId>,
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationWithDetailsResponse>>> {
    query.validate(&())?;

    if registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Sala no encontrada".into()));
    }

    let reservations = registry
        .reservation_repository()
        .find_by_room_id(room_id, query.into())
        .await?;

    with_details(&registry, reservations).await.map(Json)
}

pub async fn show_reservations_by_date(
    _user: AuthorizedUser,
    Path(date): Path<NaiveDate>,
    Query(query): Query<ListQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<ReservationWithDetailsResponse>>> {
    query.validate(&())?;

    let reservations = registry
        .reservation_repository()
        .find_by_date(date, query.into())
        .await?;

    with_details(&registry, reservations).await.map(Json)
}

async fn find_reservation(
    registry: &AppRegistry,
    reservation_id: ReservationId,
) -> AppResult<Reservation> {
    registry
        .reservation_repository()
        .find_by_id(reservation_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("Reserva no encontrada".into()))
}

async fn ensure_user_and_room(
    registry: &AppRegistry,
    user_id: UserId,
    room_id: RoomId,
) -> AppResult<()> {
    if registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Usuario no encontrado".into()));
    }
    if registry
        .room_repository()
        .find_by_id(room_id)
        .await?
        .is_none()
    {
        return Err(AppError::EntityNotFound("Sala no encontrada".into()));
    }
    Ok(())
}

/// Read-side composition: embed a point-in-time snapshot of the related
/// user and room into each reservation. A reference that no longer resolves
/// is rendered as `null` rather than failing the read.
async fn with_details(
    registry: &AppRegistry,
    reservations: Vec<Reservation>,
) -> AppResult<Vec<ReservationWithDetailsResponse>> {
    let mut items = Vec::with_capacity(reservations.len());
    for reservation in reservations {
        let user = registry
            .user_repository()
            .find_by_id(reservation.user_id)
            .await?;
        let room = registry
            .room_repository()
            .find_by_id(reservation.room_id)
            .await?;
        items.push(
            ReservationWithDetails {
                reservation,
                user,
                room,
            }
            .into(),
        );
    }
    Ok(items)
}
