use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::reservation::{
    cancel_reservation, delete_reservation, register_reservation, show_reservation,
    show_reservation_list, show_reservation_list_with_details, show_reservations_by_date,
    show_reservations_by_room, show_reservations_by_user, update_reservation,
};

pub fn build_reservation_routers() -> Router<AppRegistry> {
    let reservations_routers = Router::new()
        .route("/", post(register_reservation))
        .route("/", get(show_reservation_list))
        .route("/details", get(show_reservation_list_with_details))
        .route("/user/:user_id", get(show_reservations_by_user))
        .route("/room/:room_id", get(show_reservations_by_room))
        .route("/date/:date", get(show_reservations_by_date))
        .route("/:reservation_id", get(show_reservation))
        .route("/:reservation_id", patch(update_reservation))
        .route("/:reservation_id", delete(delete_reservation))
        .route("/:reservation_id/cancel", post(cancel_reservation));

    Router::new().nest("/reservations", reservations_routers)
}
