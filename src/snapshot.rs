//! Loading exported snapshot directories.
//!
//! A snapshot directory holds the JSON files written by the export
//! tooling: `lights-v2.json`, `rooms-v2.json`, `scenes-v2.json`, and
//! `devices-v2.json`, plus the optional legacy `bridge.json` and
//! `scenes.json` needed only for switch-cycle reconstruction.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::cycle::{self, SwitchSceneCycle};
use crate::device::Device;
use crate::errors::Error;
use crate::light::Light;
use crate::room::Room;
use crate::scene::Scene;
use crate::v1::{BridgeConfig, SceneTable};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Deserialize)]
struct LightsFile {
    #[serde(default)]
    lights: HashMap<Uuid, Light>,
}

#[derive(Debug, Deserialize)]
struct RoomsFile {
    #[serde(default)]
    rooms: HashMap<Uuid, Room>,
}

#[derive(Debug, Deserialize)]
struct ScenesFile {
    #[serde(default)]
    scenes: HashMap<Uuid, Scene>,
}

#[derive(Debug, Deserialize)]
struct DevicesFile {
    #[serde(default)]
    devices: HashMap<Uuid, Device>,
}

/// A loaded bridge configuration snapshot.
///
/// Everything derived from a snapshot is recomputed on demand from
/// this in-memory data; nothing is mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub lights: HashMap<Uuid, Light>,
    pub rooms: HashMap<Uuid, Room>,
    pub scenes: HashMap<Uuid, Scene>,
    pub devices: HashMap<Uuid, Device>,
    pub bridge: Option<BridgeConfig>,
    pub scenes_v1: Option<SceneTable>,
}

impl Snapshot {
    /// Load a snapshot from a directory of exported JSON files.
    ///
    /// The four v2 resource files are required; the legacy
    /// `bridge.json` and `scenes.json` are optional and their absence
    /// simply leaves the switch cycles empty.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let lights: LightsFile = read_json(&dir.join("lights-v2.json"))?;
        let rooms: RoomsFile = read_json(&dir.join("rooms-v2.json"))?;
        let scenes: ScenesFile = read_json(&dir.join("scenes-v2.json"))?;
        let devices: DevicesFile = read_json(&dir.join("devices-v2.json"))?;
        let bridge = read_json_opt(&dir.join("bridge.json"))?;
        let scenes_v1 = read_json_opt(&dir.join("scenes.json"))?;

        Ok(Snapshot {
            lights: lights.lights,
            rooms: rooms.rooms,
            scenes: scenes.scenes,
            devices: devices.devices,
            bridge,
            scenes_v1,
        })
    }

    /// Lights that belong to a room.
    pub fn room_lights(&self, room: &Room) -> Vec<&Light> {
        self.lights
            .values()
            .filter(|light| room.contains_light(&light.id))
            .collect()
    }

    /// Scenes grouped under a room.
    pub fn room_scenes(&self, room: &Room) -> Vec<&Scene> {
        self.scenes
            .values()
            .filter(|scene| scene.group.as_ref().is_some_and(|group| group.rid == room.id))
            .collect()
    }

    /// Physical switch devices in the snapshot.
    pub fn switches(&self) -> Vec<&Device> {
        self.devices.values().filter(|d| d.is_switch()).collect()
    }

    /// Scene cycles derived from the legacy rule data.
    ///
    /// Empty when `bridge.json` or `scenes.json` was not part of the
    /// snapshot.
    pub fn switch_cycles(&self) -> Vec<SwitchSceneCycle> {
        match (&self.bridge, &self.scenes_v1) {
            (Some(bridge), Some(scenes_v1)) => cycle::resolve_switch_cycles(bridge, scenes_v1),
            _ => Vec::new(),
        }
    }

    /// The resolved cycle for a switch device, paired by the number in
    /// its name.
    pub fn cycle_for_device(&self, device: &Device) -> Option<SwitchSceneCycle> {
        let number = device.name_number()?;
        self.switch_cycles()
            .into_iter()
            .find(|cycle| cycle.switch_id == number)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|err| Error::snapshot_read(path, err))?;
    serde_json::from_str(&contents).map_err(Error::JsonLoad)
}

fn read_json_opt<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        debug!("optional snapshot file missing: {}", path.display());
        return Ok(None);
    }
    read_json(path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs::File;
    use std::io::Write;

    const LIGHT_ID: &str = "2d4d9b42-0000-4000-8000-111111111111";
    const ROOM_ID: &str = "91e9d9a1-0000-4000-8000-222222222222";
    const SCENE_ID: &str = "0fcf9b42-0000-4000-8000-444444444444";
    const DEVICE_ID: &str = "5a0e9b42-0000-4000-8000-333333333333";

    fn write_file(dir: &Path, name: &str, value: &serde_json::Value) {
        let mut file = File::create(dir.join(name)).unwrap();
        file.write_all(value.to_string().as_bytes()).unwrap();
    }

    fn write_v2_files(dir: &Path) {
        write_file(
            dir,
            "lights-v2.json",
            &json!({"lights": {(LIGHT_ID): {
                "id": LIGHT_ID,
                "name": "Desk Lamp",
                "state": {"on": true, "brightness": 80.0, "color_temperature": 366, "color_xy": null},
            }}}),
        );
        write_file(
            dir,
            "rooms-v2.json",
            &json!({"rooms": {(ROOM_ID): {
                "id": ROOM_ID,
                "name": "Office",
                "archetype": "office",
                "children": [{"rid": LIGHT_ID, "rtype": "light"}],
            }}}),
        );
        write_file(
            dir,
            "scenes-v2.json",
            &json!({"scenes": {(SCENE_ID): {
                "id": SCENE_ID,
                "name": "Concentrate",
                "group": {"rid": ROOM_ID, "rtype": "room"},
                "actions": [{"target": {"rid": LIGHT_ID, "rtype": "light"},
                             "action": {"on": {"on": true}, "color_temperature": {"mirek": 233}}}],
            }}}),
        );
        write_file(
            dir,
            "devices-v2.json",
            &json!({"devices": {(DEVICE_ID): {
                "id": DEVICE_ID,
                "name": "Hue dimmer switch 1",
                "product_data": {
                    "model_id": "RWL021",
                    "manufacturer_name": "Signify Netherlands B.V.",
                    "product_name": "Hue dimmer switch",
                },
                "services": [{"rid": LIGHT_ID, "rtype": "button"}],
            }}}),
        );
    }

    fn write_v1_files(dir: &Path) {
        write_file(
            dir,
            "bridge.json",
            &json!({"rules": {
                "1": {
                    "name": "dimmer switch 1.cycle1",
                    "conditions": [{"address": "/sensors/12/state/status", "operator": "eq", "value": "1"}],
                    "actions": [{"address": "/groups/1/action", "method": "PUT", "body": {"scene": "legacy1"}}],
                },
            }}),
        );
        write_file(
            dir,
            "scenes.json",
            &json!({"scenes": {"legacy1": {"name": "Concentrate"}}}),
        );
    }

    #[test]
    fn test_load_full_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        write_v2_files(dir.path());
        write_v1_files(dir.path());

        let snapshot = Snapshot::load(dir.path()).unwrap();
        assert_eq!(snapshot.lights.len(), 1);
        assert_eq!(snapshot.rooms.len(), 1);
        assert_eq!(snapshot.scenes.len(), 1);
        assert_eq!(snapshot.devices.len(), 1);

        let room = snapshot.rooms.values().next().unwrap();
        assert_eq!(snapshot.room_lights(room).len(), 1);
        assert_eq!(snapshot.room_scenes(room).len(), 1);
        assert_eq!(snapshot.switches().len(), 1);

        let cycles = snapshot.switch_cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].scenes[0].name, "Concentrate");

        let device = snapshot.devices.values().next().unwrap();
        let paired = snapshot.cycle_for_device(device).unwrap();
        assert_eq!(paired.switch_id, "1");
    }

    #[test]
    fn test_missing_legacy_files_mean_no_cycles() {
        let dir = tempfile::tempdir().unwrap();
        write_v2_files(dir.path());

        let snapshot = Snapshot::load(dir.path()).unwrap();
        assert!(snapshot.bridge.is_none());
        assert!(snapshot.scenes_v1.is_none());
        assert!(snapshot.switch_cycles().is_empty());
    }

    #[test]
    fn test_missing_required_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Snapshot::load(dir.path());
        assert!(matches!(result, Err(Error::SnapshotRead { .. })));
    }
}
