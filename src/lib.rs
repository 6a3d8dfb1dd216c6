//! # hue_snapshot_rs
//!
//! A Rust library for inspecting Philips Hue bridge configuration
//! snapshots.
//!
//! This crate consumes the static JSON files a bridge export produces
//! (lights, rooms, scenes, devices, plus the legacy v1 rule dump) and
//! derives display data from them:
//!
//! - **Colors**: CIE xy chromaticity and mirek color temperatures
//!   convert to display RGB/hex via [`xy_to_rgb`], [`mirek_to_rgb`],
//!   and [`Light::display_color`].
//! - **Scenes**: [`Scene::colors`] derives representative swatches
//!   from a scene's stored actions, and [`scene_glyph`] picks a
//!   display glyph from the scene name.
//! - **Switch cycles**: [`resolve_switch_cycles`] reconstructs the
//!   scene sequence a dimmer switch's ON button steps through from
//!   the bridge's automation rules.
//!
//! Everything here is a pure, synchronous function over in-memory
//! snapshot data: no network access, no control path, no mutation.
//! Snapshots are read-only views of the bridge at export time and
//! make no claim of staying in sync with it.
//!
//! ## Quick Start
//!
//! ```
//! use hue_snapshot_rs::{Brightness, Chromaticity, xy_to_rgb};
//!
//! let rgb = xy_to_rgb(Chromaticity::new(0.3, 0.3), Brightness::new()).unwrap();
//! assert_eq!(rgb.hex(), "#e1e5ff");
//! ```
//!
//! Loading a full snapshot directory:
//!
//! ```no_run
//! use hue_snapshot_rs::Snapshot;
//!
//! fn main() -> Result<(), hue_snapshot_rs::Error> {
//!     let snapshot = Snapshot::load("config")?;
//!     for cycle in snapshot.switch_cycles() {
//!         println!("{}: {} scenes", cycle.switch_name, cycle.scenes.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Snapshot files
//!
//! A snapshot directory is expected to contain `lights-v2.json`,
//! `rooms-v2.json`, `scenes-v2.json`, and `devices-v2.json`, with the
//! optional `bridge.json` and `scenes.json` (both API v1) enabling
//! switch-cycle reconstruction. See [`Snapshot::load`].

mod color;
mod cycle;
mod device;
mod errors;
mod icons;
mod light;
mod resource;
mod room;
mod scene;
mod snapshot;
mod types;
mod v1;

// Re-export public API
pub use color::{
    DEFAULT_ON, NEUTRAL_GRAY, SCENE_NEUTRAL, mirek_swatch, mirek_to_rgb, xy_to_rgb,
};
pub use cycle::{CycleStep, SwitchSceneCycle, resolve_switch_cycles};
pub use device::{Device, ProductData};
pub use errors::Error;
pub use icons::{device_glyph, room_glyph, scene_glyph};
pub use light::{Light, LightState};
pub use resource::{ResourceRef, ResourceType};
pub use room::{Room, RoomArchetype};
pub use scene::{
    ActionEffect, ColorEffect, DEFAULT_SCENE_COLORS, DimmingEffect, OnEffect, Scene,
    SceneAction, TemperatureEffect,
};
pub use snapshot::Snapshot;
pub use types::{Brightness, Chromaticity, Mirek, Rgb};
pub use v1::{
    BridgeConfig, Rule, RuleAction, RuleActionBody, RuleCondition, SceneTable, SceneV1,
    UNKNOWN_SCENE,
};
