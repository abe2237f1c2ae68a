use derive_new::new;

use crate::model::{
    id::RoomId,
    room::{Campus, ResourceTags},
};

#[derive(Debug, new)]
pub struct CreateRoom {
    pub name: String,
    pub campus: Campus,
    pub capacity: i32,
    pub resources: ResourceTags,
}

/// Fully merged state for a room update; partial inputs are resolved against
/// the stored record before this event is built.
#[derive(Debug, new)]
pub struct UpdateRoom {
    pub room_id: RoomId,
    pub name: String,
    pub campus: Campus,
    pub capacity: i32,
    pub resources: ResourceTags,
}
