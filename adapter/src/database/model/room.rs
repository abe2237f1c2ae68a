use std::str::FromStr;

use kernel::model::{
    id::RoomId,
    room::{Campus, ResourceTags, Room},
};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub id: RoomId,
    pub name: String,
    pub campus: String,
    pub capacity: i32,
    pub resources: String,
}

impl TryFrom<RoomRow> for Room {
    type Error = AppError;

    fn try_from(row: RoomRow) -> Result<Self, Self::Error> {
        let RoomRow {
            id,
            name,
            campus,
            capacity,
            resources,
        } = row;
        let campus = Campus::from_str(&campus).map_err(|_| {
            AppError::ConversionEntityError(format!("unknown campus value: {campus}"))
        })?;
        // Stored values are already canonical; parsing keeps reads canonical
        // even if a row was written by hand.
        let resources = ResourceTags::parse(&resources)?;
        Ok(Self {
            id,
            name,
            campus,
            capacity,
            resources,
        })
    }
}
