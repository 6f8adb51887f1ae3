//! Category and room reference lists.
//!
//! Items link to these by display name rather than by id, and duplicate names
//! are permitted; the lists exist to populate the dashboard's filter dropdowns
//! and badges.

use serde::{Deserialize, Serialize};

use homevault_core::{CategoryId, Entity, RoomId};

/// Category reference entry: classifies items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display color (hex string, e.g. `#3B82F6`).
    pub color: String,
    /// Icon reference understood by the UI layer.
    pub icon: String,
}

/// Room reference entry: locates items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
}

/// Creation payload for a category (identifier assigned by the store).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// Creation payload for a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl Entity for Room {
    type Id = RoomId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
