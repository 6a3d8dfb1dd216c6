//! Scene-cycle reconstruction for physical dimmer switches.
//!
//! The bridge stores a dimmer's ON-button behavior as v1 automation
//! rules following its `dimmer switch <N>` naming convention: one rule
//! per sensor status value, each recalling a scene, plus a `.on` rule
//! for the press that brings the lights up from off. This module
//! reverse-engineers those rules back into the ordered scene list the
//! button steps through.

use std::collections::BTreeMap;

use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::v1::{BridgeConfig, Rule, SceneTable};

static SWITCH_RULE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"dimmer switch (\d+)").unwrap());

/// The scene cycle a physical switch steps through.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SwitchSceneCycle {
    pub switch_id: String,
    pub switch_name: String,
    pub scenes: Vec<CycleStep>,
}

/// One step of a switch's scene cycle.
///
/// Order 0 is the power-on scene; positive orders are repeated
/// ON-button presses.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CycleStep {
    pub id: String,
    pub name: String,
    pub order: i64,
}

/// Extract the numeric switch id from a rule name.
///
/// Rule-name parsing is the one string-convention seam in this module;
/// names that do not follow the convention yield `None`.
fn switch_id_from_rule_name(name: &str) -> Option<&str> {
    SWITCH_RULE_NAME
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Reconstruct the scene cycles configured for every dimmer switch.
///
/// Malformed rules are skipped, never fatal; empty rule or scene-table
/// data yields an empty list. Switches whose rules resolve to no
/// scenes at all are dropped rather than emitted as empty cycles.
pub fn resolve_switch_cycles(
    bridge: &BridgeConfig,
    scenes_v1: &SceneTable,
) -> Vec<SwitchSceneCycle> {
    if bridge.rules.is_empty() || scenes_v1.scenes.is_empty() {
        return Vec::new();
    }

    let mut groups: BTreeMap<&str, Vec<&Rule>> = BTreeMap::new();
    for rule in bridge.rules.values() {
        if rule.actions.is_empty() || rule.conditions.is_empty() {
            continue;
        }
        let Some(switch_id) = switch_id_from_rule_name(&rule.name) else {
            continue;
        };
        groups.entry(switch_id).or_default().push(rule);
    }

    let mut cycles = Vec::new();
    for (switch_id, rules) in groups {
        let mut scenes: Vec<CycleStep> = rules
            .iter()
            .filter_map(|rule| {
                let scene_id = rule.scene_action()?;
                let order = rule.status_condition()?.numeric_value()?;
                Some(CycleStep {
                    id: scene_id.to_string(),
                    name: scenes_v1.name_or_unknown(scene_id).to_string(),
                    order,
                })
            })
            .collect();

        // The ".on" rule recalls the power-on scene; it has no status
        // condition, so it is searched for separately.
        let on_scene = rules
            .iter()
            .filter(|rule| rule.name.contains(".on"))
            .find_map(|rule| rule.scene_action());
        if let Some(scene_id) = on_scene {
            scenes.push(CycleStep {
                id: scene_id.to_string(),
                name: scenes_v1.name_or_unknown(scene_id).to_string(),
                order: 0,
            });
        }

        if scenes.is_empty() {
            debug!("no resolvable scenes for dimmer switch {switch_id}");
            continue;
        }

        scenes.sort_by_key(|step| step.order);
        cycles.push(SwitchSceneCycle {
            switch_id: switch_id.to_string(),
            switch_name: format!("Hue dimmer switch {switch_id}"),
            scenes,
        });
    }

    cycles
}
