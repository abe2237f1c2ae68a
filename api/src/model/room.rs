use garde::Validate;
use kernel::model::{
    id::RoomId,
    list::ListOptions,
    room::{Campus, Resource, Room, RoomQuery},
};
use serde::{Deserialize, Serialize};

use crate::model::list::default_limit;

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub id: RoomId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "sede")]
    pub campus: Campus,
    #[serde(rename = "capacidad")]
    pub capacity: i32,
    #[serde(rename = "recursos")]
    pub resources: String,
}

impl From<Room> for RoomResponse {
    fn from(value: Room) -> Self {
        let Room {
            id,
            name,
            campus,
            capacity,
            resources,
        } = value;
        Self {
            id,
            name,
            campus,
            capacity,
            resources: resources.as_canonical(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateRoomRequest {
    #[serde(rename = "nombre")]
    #[garde(length(min = 1, max = 255))]
    pub name: String,
    #[serde(rename = "sede")]
    #[garde(skip)]
    pub campus: Campus,
    #[serde(rename = "capacidad")]
    #[garde(range(min = 1))]
    pub capacity: i32,
    /// Free-form comma-separated list; canonicalized before it is stored.
    #[serde(rename = "recursos")]
    #[garde(skip)]
    pub resources: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRoomRequest {
    #[serde(rename = "nombre", default)]
    #[garde(inner(length(min = 1, max = 255)))]
    pub name: Option<String>,
    #[serde(rename = "sede", default)]
    #[garde(skip)]
    pub campus: Option<Campus>,
    #[serde(rename = "capacidad", default)]
    #[garde(inner(range(min = 1)))]
    pub capacity: Option<i32>,
    #[serde(rename = "recursos", default)]
    #[garde(skip)]
    pub resources: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RoomListQuery {
    #[garde(range(min = 0))]
    #[serde(default)]
    pub skip: i64,
    #[garde(range(min = 1, max = 1000))]
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(rename = "sede", default)]
    #[garde(skip)]
    pub campus: Option<Campus>,
    #[serde(rename = "recurso", default)]
    #[garde(skip)]
    pub resource: Option<Resource>,
}

impl From<RoomListQuery> for RoomQuery {
    fn from(value: RoomListQuery) -> Self {
        let RoomListQuery {
            skip,
            limit,
            campus,
            resource,
        } = value;
        Self {
            campus,
            resource,
            options: ListOptions { skip, limit },
        }
    }
}
