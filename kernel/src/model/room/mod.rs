pub mod event;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{AsRefStr, Display, EnumString};

use crate::model::{id::RoomId, list::ListOptions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub campus: Campus,
    pub capacity: i32,
    pub resources: ResourceTags,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Campus {
    ZonaFranca,
    Cajasan,
    Bogota,
    Cucuta,
    Guatemala,
}

/// Room amenities. The variant order is the canonical (lexicographic) order
/// of the wire names, which `ResourceTags` relies on when sorting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    AsRefStr,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Pizarra,
    Proyector,
    Televisor,
}

/// A validated, canonicalized set of room resources.
///
/// Parsing accepts any comma-separated spelling and normalizes it: segments
/// are trimmed, empty segments dropped, duplicates removed and the result
/// sorted, so the stored and rendered form is always the same string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTags(Vec<Resource>);

impl ResourceTags {
    pub fn parse(input: &str) -> AppResult<Self> {
        let mut tags = Vec::new();
        for raw in input.split(',') {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            let tag = Resource::from_str(raw)
                .map_err(|_| AppError::UnprocessableEntity(format!("Recurso inválido: {raw}")))?;
            tags.push(tag);
        }
        if tags.is_empty() {
            return Err(AppError::UnprocessableEntity(
                "La lista de recursos no puede estar vacía".into(),
            ));
        }
        tags.sort();
        tags.dedup();
        Ok(Self(tags))
    }

    pub fn as_canonical(&self) -> String {
        self.0
            .iter()
            .map(|tag| tag.as_ref())
            .collect::<Vec<&str>>()
            .join(",")
    }

    pub fn contains(&self, resource: Resource) -> bool {
        self.0.contains(&resource)
    }
}

impl std::fmt::Display for ResourceTags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_canonical())
    }
}

/// Filter handed to the room store: optional campus and resource predicates
/// on top of plain pagination.
#[derive(Debug, Clone, Copy)]
pub struct RoomQuery {
    pub campus: Option<Campus>,
    pub resource: Option<Resource>,
    pub options: ListOptions,
}
