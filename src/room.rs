//! Room resources from the v2 snapshot.

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::icons;
use crate::resource::{ResourceRef, ResourceType};

/// A room resource from `rooms-v2.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Room {
    pub id: Uuid,
    pub id_v1: Option<String>,
    pub name: String,
    pub archetype: Option<RoomArchetype>,
    #[serde(default)]
    pub children: Vec<ResourceRef>,
    #[serde(default)]
    pub services: Vec<ResourceRef>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Room {
    /// Whether this room's children contain the given light.
    pub fn contains_light(&self, light_id: &Uuid) -> bool {
        self.children
            .iter()
            .any(|child| child.rtype == ResourceType::Light && child.rid == *light_id)
    }

    /// Display glyph for this room's archetype.
    pub fn glyph(&self) -> &'static str {
        icons::room_glyph(self.archetype.as_ref())
    }
}

/// Room archetypes reported by the bridge.
///
/// The bridge vocabulary is open-ended; anything unrecognized is
/// carried through as [`RoomArchetype::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString, SerializeDisplay, DeserializeFromStr)]
#[strum(serialize_all = "snake_case")]
pub enum RoomArchetype {
    LivingRoom,
    Kitchen,
    Dining,
    Bedroom,
    Bathroom,
    Office,
    Hallway,
    Garage,
    Garden,
    Balcony,
    #[strum(default)]
    Other(String),
}
