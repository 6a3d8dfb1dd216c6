//! Light resources from the v2 snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color;
use crate::types::{Brightness, Chromaticity, Mirek, Rgb};

/// A light resource from `lights-v2.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Light {
    pub id: Uuid,
    pub id_v1: Option<String>,
    pub name: String,
    pub archetype: Option<String>,
    pub function: Option<String>,
    #[serde(default)]
    pub state: LightState,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    pub mode: Option<String>,
}

/// The exported state of a light.
///
/// At most one of `color_xy` / `color_temperature` is semantically
/// active; the export writes `null` for whichever the light is not
/// using.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct LightState {
    #[serde(default)]
    pub on: bool,
    pub brightness: Option<f64>,
    pub color_temperature: Option<u16>,
    pub color_xy: Option<Chromaticity>,
}

impl Light {
    /// Display color for this light; see [`LightState::display_color`].
    pub fn display_color(&self) -> Rgb {
        self.state.display_color()
    }

    /// Readable brightness percentage for this light.
    pub fn brightness_label(&self) -> String {
        Brightness::label(self.state.brightness)
    }
}

impl LightState {
    /// Display color for this state.
    ///
    /// An off light is always neutral gray regardless of stored color
    /// data. Otherwise the xy color wins over color temperature, and a
    /// light with neither shows the default warm white. Degenerate
    /// color data (a zero chromaticity y, a zero mirek) falls back to
    /// the neutral gray or warm-white default rather than erroring.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_snapshot_rs::LightState;
    ///
    /// let state = LightState {
    ///     on: false,
    ///     brightness: Some(80.0),
    ///     color_temperature: Some(366),
    ///     color_xy: None,
    /// };
    /// assert_eq!(state.display_color().hex(), "#374151");
    /// ```
    pub fn display_color(&self) -> Rgb {
        if !self.on {
            return color::NEUTRAL_GRAY;
        }

        let brightness = Brightness::create_or(self.brightness);
        if let Some(xy) = self.color_xy {
            return color::xy_to_rgb(xy, brightness).unwrap_or(color::NEUTRAL_GRAY);
        }
        if let Some(mirek) = self.color_temperature.and_then(Mirek::create) {
            return color::mirek_to_rgb(mirek, brightness);
        }
        color::mirek_to_rgb(Mirek::DEFAULT_WARM_WHITE, brightness)
    }
}
