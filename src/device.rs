//! Device resources from the v2 snapshot.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::icons;
use crate::resource::{ResourceRef, ResourceType};

/// A device resource from `devices-v2.json`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Device {
    pub id: Uuid,
    pub id_v1: Option<String>,
    pub name: String,
    pub archetype: Option<String>,
    pub product_data: ProductData,
    #[serde(default)]
    pub services: Vec<ResourceRef>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Manufacturer data for a device.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductData {
    pub model_id: String,
    pub manufacturer_name: String,
    pub product_name: String,
    pub product_archetype: Option<String>,
    pub certified: Option<bool>,
    pub software_version: Option<String>,
    pub hardware_platform_type: Option<String>,
}

impl Device {
    /// Whether this device is a physical switch of any kind.
    pub fn is_switch(&self) -> bool {
        self.product_data.product_name.to_lowercase().contains("switch")
    }

    /// Whether this device is a dimmer switch.
    pub fn is_dimmer_switch(&self) -> bool {
        self.product_data.product_name.to_lowercase().contains("dimmer")
    }

    /// Services of the given type, for example the buttons on a switch.
    pub fn services_of(&self, rtype: ResourceType) -> impl Iterator<Item = &ResourceRef> {
        self.services.iter().filter(move |s| s.rtype == rtype)
    }

    /// Display glyph for this device.
    pub fn glyph(&self) -> &'static str {
        icons::device_glyph(
            self.archetype.as_deref().unwrap_or(""),
            &self.product_data.product_name,
        )
    }

    /// First run of digits in the device name.
    ///
    /// The bridge numbers its dimmer switches, and the rule names use
    /// the same number; this pairs a device with its rule-derived
    /// scene cycle.
    pub fn name_number(&self) -> Option<String> {
        let start = self.name.find(|c: char| c.is_ascii_digit())?;
        let digits: String = self.name[start..]
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        Some(digits)
    }
}
