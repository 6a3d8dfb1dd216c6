//! Scene resources and scene-derived display data.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color;
use crate::icons;
use crate::resource::{ResourceRef, ResourceType};
use crate::types::{Brightness, Chromaticity, Mirek, Rgb};

/// Number of representative colors shown per scene.
pub const DEFAULT_SCENE_COLORS: usize = 5;

/// A scene resource from `scenes-v2.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Scene {
    pub id: Uuid,
    pub id_v1: Option<String>,
    pub name: String,
    pub image: Option<ResourceRef>,
    pub group: Option<ResourceRef>,
    #[serde(default)]
    pub actions: Vec<SceneAction>,
    pub speed: Option<f64>,
    pub auto_dynamic: Option<bool>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl Scene {
    /// Representative display colors, one per stored action, at most
    /// `max_colors` entries.
    ///
    /// Actions are visited in stored order and duplicates are kept; a
    /// scene returns fewer entries only when it holds fewer actions
    /// than the cap.
    pub fn colors(&self, max_colors: usize) -> Vec<Rgb> {
        self.actions
            .iter()
            .take(max_colors)
            .map(SceneAction::display_color)
            .collect()
    }

    /// Number of actions targeting individual lights.
    ///
    /// Scenes can also target groups; those actions do not count.
    pub fn light_action_count(&self) -> usize {
        self.actions
            .iter()
            .filter(|action| action.target.rtype == ResourceType::Light)
            .count()
    }

    /// Display glyph for this scene's name.
    pub fn glyph(&self) -> &'static str {
        icons::scene_glyph(&self.name)
    }
}

/// A single per-light action stored in a scene.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SceneAction {
    pub target: ResourceRef,
    pub action: ActionEffect,
}

impl SceneAction {
    /// Display color for this action.
    ///
    /// An xy color wins over color temperature; an action that only
    /// turns the light on shows the default-on swatch, and anything
    /// else (off, or no usable color data) shows the neutral swatch.
    pub fn display_color(&self) -> Rgb {
        let effect = &self.action;
        let brightness =
            Brightness::create_or(effect.dimming.as_ref().map(|d| d.brightness));

        if let Some(color_effect) = &effect.color {
            return color::xy_to_rgb(color_effect.xy, brightness)
                .unwrap_or(color::SCENE_NEUTRAL);
        }
        if let Some(mirek) = effect
            .color_temperature
            .as_ref()
            .and_then(|t| t.mirek)
            .and_then(Mirek::create)
        {
            return color::mirek_to_rgb(mirek, brightness);
        }
        if effect.on.as_ref().is_some_and(|o| o.on) {
            return color::DEFAULT_ON;
        }
        color::SCENE_NEUTRAL
    }
}

/// The light effect a scene action applies when recalled.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ActionEffect {
    pub on: Option<OnEffect>,
    pub dimming: Option<DimmingEffect>,
    pub color: Option<ColorEffect>,
    pub color_temperature: Option<TemperatureEffect>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OnEffect {
    pub on: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DimmingEffect {
    pub brightness: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ColorEffect {
    pub xy: Chromaticity,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TemperatureEffect {
    pub mirek: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scene_from(value: serde_json::Value) -> Scene {
        serde_json::from_value(value).unwrap()
    }

    fn scene_with_actions(actions: serde_json::Value) -> Scene {
        scene_from(json!({
            "id": "0fcf9b42-0000-4000-8000-444444444444",
            "name": "Tropical Twilight",
            "actions": actions,
        }))
    }

    fn light_target() -> serde_json::Value {
        json!({"rid": "2d4d9b42-0000-4000-8000-111111111111", "rtype": "light"})
    }

    #[test]
    fn test_colors_follow_action_order_and_cap() {
        let scene = scene_with_actions(json!([
            {"target": light_target(), "action": {"color": {"xy": {"x": 0.3, "y": 0.3}}}},
            {"target": light_target(), "action": {"color_temperature": {"mirek": 366}, "dimming": {"brightness": 100.0}}},
            {"target": light_target(), "action": {"on": {"on": true}}},
            {"target": light_target(), "action": {"on": {"on": false}}},
            {"target": light_target(), "action": {}},
            {"target": light_target(), "action": {"on": {"on": true}}},
        ]));

        let colors = scene.colors(DEFAULT_SCENE_COLORS);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0].hex(), "#e1e5ff");
        assert_eq!(
            colors[1],
            color::mirek_to_rgb(Mirek::create(366).unwrap(), Brightness::new())
        );
        assert_eq!(colors[2], color::DEFAULT_ON);
        assert_eq!(colors[3], color::SCENE_NEUTRAL);
        assert_eq!(colors[4], color::SCENE_NEUTRAL);
    }

    #[test]
    fn test_colors_use_action_brightness() {
        let scene = scene_with_actions(json!([
            {"target": light_target(), "action": {
                "color_temperature": {"mirek": 366},
                "dimming": {"brightness": 50.0},
            }},
        ]));
        let expected = color::mirek_to_rgb(
            Mirek::create(366).unwrap(),
            Brightness::create(50.0).unwrap(),
        );
        assert_eq!(scene.colors(DEFAULT_SCENE_COLORS), vec![expected]);
    }

    #[test]
    fn test_degenerate_action_color_is_neutral() {
        let scene = scene_with_actions(json!([
            {"target": light_target(), "action": {"color": {"xy": {"x": 0.0, "y": 0.0}}}},
            {"target": light_target(), "action": {"color_temperature": {"mirek": 0}}},
        ]));
        let colors = scene.colors(DEFAULT_SCENE_COLORS);
        assert_eq!(colors[0], color::SCENE_NEUTRAL);
        assert_eq!(colors[1], color::SCENE_NEUTRAL);
    }

    #[test]
    fn test_empty_scene_has_no_colors() {
        let scene = scene_with_actions(json!([]));
        assert!(scene.colors(DEFAULT_SCENE_COLORS).is_empty());
        assert_eq!(scene.light_action_count(), 0);
    }

    #[test]
    fn test_light_action_count_ignores_group_targets() {
        let scene = scene_with_actions(json!([
            {"target": light_target(), "action": {"on": {"on": true}}},
            {"target": {"rid": "91e9d9a1-0000-4000-8000-222222222222", "rtype": "grouped_light"},
             "action": {"on": {"on": true}}},
        ]));
        assert_eq!(scene.light_action_count(), 1);
        assert_eq!(scene.colors(DEFAULT_SCENE_COLORS).len(), 2);
    }

    #[test]
    fn test_scene_glyph() {
        let scene = scene_with_actions(json!([]));
        assert_eq!(scene.glyph(), "🌅");
    }
}
