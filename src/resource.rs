//! Resource references shared across snapshot records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A typed reference to another bridge resource.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub rid: Uuid,
    pub rtype: ResourceType,
}

/// Resource types that appear in snapshot references.
///
/// The bridge vocabulary is open-ended; anything this crate does not
/// model explicitly deserializes as [`ResourceType::Unknown`].
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Light,
    Room,
    Zone,
    Scene,
    Device,
    Button,
    DevicePower,
    ZigbeeConnectivity,
    ZgpConnectivity,
    DeviceSoftwareUpdate,
    GroupedLight,
    Bridge,
    BridgeHome,
    #[serde(other)]
    Unknown,
}
