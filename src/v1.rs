//! Legacy (API v1) bridge data: automation rules and the scene-name table.
//!
//! The v1 dump is the only place the bridge exposes its automation
//! rules, and its scene ids are the ones those rules reference, so
//! both files ride along with the v2 snapshot for switch-cycle
//! reconstruction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder name for scene ids missing from the v1 table.
pub const UNKNOWN_SCENE: &str = "Unknown Scene";

/// The v1 bridge dump (`bridge.json`).
///
/// Only the automation rules are modeled; the other sections are
/// carried as raw JSON.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BridgeConfig {
    #[serde(default)]
    pub rules: HashMap<String, Rule>,
    pub config: Option<Value>,
    pub schedules: Option<Value>,
    pub resourcelinks: Option<Value>,
}

/// A bridge automation rule.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Rule {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub conditions: Vec<RuleCondition>,
    #[serde(default)]
    pub actions: Vec<RuleAction>,
}

impl Rule {
    /// First scene id referenced by this rule's actions.
    pub fn scene_action(&self) -> Option<&str> {
        self.actions.iter().find_map(|action| action.body.scene.as_deref())
    }

    /// First sensor status condition (`.../state/status` with operator `eq`).
    pub fn status_condition(&self) -> Option<&RuleCondition> {
        self.conditions
            .iter()
            .find(|c| c.address.contains("/state/status") && c.operator == "eq")
    }
}

/// A sensor-state condition guarding a rule.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RuleCondition {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub operator: String,
    pub value: Option<Value>,
}

impl RuleCondition {
    /// Numeric condition value, if present and numeric.
    ///
    /// The bridge writes condition values as strings; a bare number is
    /// accepted too.
    pub fn numeric_value(&self) -> Option<i64> {
        match self.value.as_ref()? {
            Value::String(s) => s.trim().parse().ok(),
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }
}

/// An action the bridge performs when a rule fires.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RuleAction {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub method: String,
    #[serde(default)]
    pub body: RuleActionBody,
}

/// The body of a rule action; only scene recalls are modeled, the rest
/// of the body is carried as raw JSON.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RuleActionBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// The v1 scene-name table (`scenes.json`).
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SceneTable {
    #[serde(default)]
    pub scenes: HashMap<String, SceneV1>,
}

impl SceneTable {
    /// Scene name for a v1 scene id, or the placeholder for ids the
    /// table no longer knows.
    pub fn name_or_unknown(&self, scene_id: &str) -> &str {
        self.scenes
            .get(scene_id)
            .map_or(UNKNOWN_SCENE, |scene| scene.name.as_str())
    }
}

/// A legacy scene record.
#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SceneV1 {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub lights: Vec<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rule_scene_action_and_status_condition() {
        let rule: Rule = serde_json::from_value(json!({
            "name": "dimmer switch 1.cycle1",
            "conditions": [
                {"address": "/sensors/2/state/buttonevent", "operator": "eq", "value": "1000"},
                {"address": "/sensors/12/state/status", "operator": "eq", "value": "1"},
            ],
            "actions": [
                {"address": "/sensors/12/state", "method": "PUT", "body": {"status": 2}},
                {"address": "/groups/1/action", "method": "PUT", "body": {"scene": "AB12Cd34EF"}},
            ],
        }))
        .unwrap();
        assert_eq!(rule.scene_action(), Some("AB12Cd34EF"));
        assert_eq!(rule.status_condition().unwrap().numeric_value(), Some(1));
    }

    #[test]
    fn test_condition_value_tolerates_number_and_garbage() {
        let stringly: RuleCondition = serde_json::from_value(
            json!({"address": "/sensors/12/state/status", "operator": "eq", "value": "3"}),
        )
        .unwrap();
        assert_eq!(stringly.numeric_value(), Some(3));

        let numeric: RuleCondition = serde_json::from_value(
            json!({"address": "/sensors/12/state/status", "operator": "eq", "value": 3}),
        )
        .unwrap();
        assert_eq!(numeric.numeric_value(), Some(3));

        let garbage: RuleCondition = serde_json::from_value(
            json!({"address": "/sensors/12/state/status", "operator": "eq", "value": "soon"}),
        )
        .unwrap();
        assert_eq!(garbage.numeric_value(), None);
    }

    #[test]
    fn test_rule_with_missing_fields_deserializes() {
        let rule: Rule = serde_json::from_value(json!({})).unwrap();
        assert!(rule.name.is_empty());
        assert!(rule.scene_action().is_none());
        assert!(rule.status_condition().is_none());
    }

    #[test]
    fn test_scene_table_name_lookup() {
        let table: SceneTable = serde_json::from_value(json!({
            "scenes": {
                "AB12Cd34EF": {"name": "Savanna sunset", "lights": ["3", "4"]},
            },
        }))
        .unwrap();
        assert_eq!(table.name_or_unknown("AB12Cd34EF"), "Savanna sunset");
        assert_eq!(table.name_or_unknown("missing"), UNKNOWN_SCENE);
    }
}
