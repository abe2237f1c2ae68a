use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::room::{delete_room, register_room, show_room, show_room_list, update_room};

pub fn build_room_routers() -> Router<AppRegistry> {
    let rooms_routers = Router::new()
        .route("/", get(show_room_list))
        .route("/", post(register_room))
        .route("/:room_id", get(show_room))
        .route("/:room_id", patch(update_room))
        .route("/:room_id", delete(delete_room));

    Router::new().nest("/rooms", rooms_routers)
}
