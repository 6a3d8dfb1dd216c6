//! Keyword-to-glyph lookup tables for dashboard display.
//!
//! Each table is an ordered association list evaluated top to bottom
//! with first match wins, so the priority order is data rather than a
//! chain of conditionals.

use crate::room::RoomArchetype;

/// Scene-name keywords, highest priority first.
const SCENE_GLYPHS: &[(&[&str], &str)] = &[
    (&["galaxy"], "🌌"),
    (&["candle"], "🕯️"),
    (&["bright", "energize"], "☀️"),
    (&["relax", "rest"], "🧘"),
    (&["concentrate", "read"], "📚"),
    (&["party", "dance"], "🎉"),
    (&["night", "dimmed"], "🌙"),
    (&["tropical", "sunset"], "🌅"),
    (&["spring", "blossom"], "🌸"),
    (&["autumn", "fall"], "🍂"),
    (&["winter", "snow"], "❄️"),
    (&["ocean", "blue"], "🌊"),
    (&["forest", "green"], "🌲"),
    (&["savanna", "yellow"], "🦁"),
    (&["modern", "soho", "fairfax"], "🏙️"),
];

const DEFAULT_SCENE_GLYPH: &str = "🎨";

/// Device keywords matched against archetype or product name,
/// highest priority first.
const DEVICE_GLYPHS: &[(&str, &str)] = &[
    ("bridge", "🌉"),
    ("button", "🔘"),
    ("dimmer", "🎛️"),
    ("motion", "🏃"),
    ("switch", "🔄"),
    ("sensor", "📡"),
    ("light", "💡"),
    ("strip", "📏"),
    ("bulb", "💡"),
];

const DEFAULT_DEVICE_GLYPH: &str = "📱";

/// Glyph for a scene name; case-insensitive substring match.
pub fn scene_glyph(name: &str) -> &'static str {
    let name = name.to_lowercase();
    SCENE_GLYPHS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| name.contains(keyword)))
        .map_or(DEFAULT_SCENE_GLYPH, |(_, glyph)| *glyph)
}

/// Glyph for a room archetype.
pub fn room_glyph(archetype: Option<&RoomArchetype>) -> &'static str {
    match archetype {
        Some(RoomArchetype::LivingRoom) => "🛋️",
        Some(RoomArchetype::Kitchen) => "🍳",
        Some(RoomArchetype::Dining) => "🍽️",
        Some(RoomArchetype::Bedroom) => "🛏️",
        Some(RoomArchetype::Bathroom) => "🛁",
        Some(RoomArchetype::Office) => "💼",
        Some(RoomArchetype::Hallway) => "🚪",
        Some(RoomArchetype::Garage) => "🚗",
        Some(RoomArchetype::Garden) => "🌱",
        Some(RoomArchetype::Balcony) => "🌸",
        Some(RoomArchetype::Other(_)) | None => "🏠",
    }
}

/// Glyph for a device; case-insensitive substring match over the
/// archetype and the product name.
pub fn device_glyph(archetype: &str, product_name: &str) -> &'static str {
    let archetype = archetype.to_lowercase();
    let product = product_name.to_lowercase();
    DEVICE_GLYPHS
        .iter()
        .find(|(keyword, _)| archetype.contains(keyword) || product.contains(keyword))
        .map_or(DEFAULT_DEVICE_GLYPH, |(_, glyph)| *glyph)
}
