//! Serde shapes shared between the species and addition documents.
//!
//! Field names match the game's JSON format exactly (camelCase for most
//! keys, snake_case inside stat blocks, `variant`-tagged requirement
//! objects).

use cobbleforge_core::{DropEntry, EvolutionRule, EvolutionTrigger};
use serde::Serialize;

/// An evolution rule in document form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionDoc {
    /// Rule identifier (`<source>_<target>`).
    pub id: String,
    /// Trigger variant name (`level_up`, `item_interact`, `trade`).
    pub variant: &'static str,
    /// Target species.
    pub result: String,
    /// Whether the held item is consumed. Always `false` here.
    pub consume_held_item: bool,
    /// Moves learned on evolution. Always empty here.
    pub learnable_moves: Vec<String>,
    /// Trigger requirements.
    pub requirements: Vec<RequirementDoc>,
    /// Required interaction item (`item_interact` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_context: Option<String>,
}

/// One requirement entry inside an evolution rule.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum RequirementDoc {
    /// Minimum level requirement.
    #[serde(rename_all = "camelCase")]
    Level {
        /// Minimum level.
        min_level: u32,
    },
    /// Held item requirement.
    HeldItem {
        /// Required held item.
        item: String,
    },
}

impl From<&EvolutionRule> for EvolutionDoc {
    fn from(rule: &EvolutionRule) -> Self {
        let mut doc = Self {
            id: rule.id.clone(),
            variant: trigger_variant(&rule.trigger),
            result: rule.result.clone(),
            consume_held_item: false,
            learnable_moves: Vec::new(),
            requirements: Vec::new(),
            required_context: None,
        };
        match &rule.trigger {
            EvolutionTrigger::LevelUp { level } => {
                doc.requirements.push(RequirementDoc::Level { min_level: *level });
            }
            EvolutionTrigger::ItemInteract { item } => {
                doc.required_context = Some(item.clone());
            }
            EvolutionTrigger::Trade { held_item } => {
                if let Some(item) = held_item {
                    doc.requirements.push(RequirementDoc::HeldItem { item: item.clone() });
                }
            }
        }
        doc
    }
}

fn trigger_variant(trigger: &EvolutionTrigger) -> &'static str {
    match trigger {
        EvolutionTrigger::LevelUp { .. } => "level_up",
        EvolutionTrigger::ItemInteract { .. } => "item_interact",
        EvolutionTrigger::Trade { .. } => "trade",
    }
}

/// The `behaviour` block.
#[derive(Debug, Clone, Serialize)]
pub struct BehaviourDoc {
    /// Movement behaviour.
    pub moving: MovingDoc,
}

/// The `behaviour.moving` block. Fly/swim sub-objects appear only when the
/// corresponding capability is enabled.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovingDoc {
    /// Head tracking; omitted in addition documents when not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_look: Option<bool>,
    /// Flight block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fly: Option<FlyDoc>,
    /// Swim block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swim: Option<SwimDoc>,
}

/// The `behaviour.moving.fly` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlyDoc {
    /// The creature can fly.
    pub can_fly: bool,
}

/// The `behaviour.moving.swim` block.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwimDoc {
    /// Swim speed; full definitions set 0.3, additions omit it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swim_speed: Option<f64>,
    /// The creature can swim in water.
    pub can_swim_in_water: bool,
    /// The creature can breathe underwater.
    pub can_breathe_underwater: bool,
}

/// The drop table block.
#[derive(Debug, Clone, Serialize)]
pub struct DropsDoc {
    /// Drop count range.
    pub amount: String,
    /// Drop entries.
    pub entries: Vec<DropEntry>,
}

impl DropsDoc {
    /// Drop table with the standard `1-2` amount range.
    pub fn new(entries: Vec<DropEntry>) -> Self {
        Self { amount: "1-2".to_string(), entries }
    }
}

#[cfg(test)]
mod tests {
    use cobbleforge_core::{EvolutionRule, EvolutionTrigger};
    use serde_json::json;

    use super::*;

    #[test]
    fn level_up_produces_exactly_one_level_requirement() {
        let rule = EvolutionRule {
            id: "eevee_charizard".to_string(),
            trigger: EvolutionTrigger::LevelUp { level: 36 },
            result: "charizard".to_string(),
        };
        let value = serde_json::to_value(EvolutionDoc::from(&rule)).unwrap();
        assert_eq!(
            value["requirements"],
            json!([{ "variant": "level", "minLevel": 36 }])
        );
        assert_eq!(value["variant"], "level_up");
        assert!(value.get("requiredContext").is_none());
    }

    #[test]
    fn item_interact_sets_required_context_and_no_requirements() {
        let rule = EvolutionRule {
            id: "eevee_dragvee".to_string(),
            trigger: EvolutionTrigger::ItemInteract { item: "cobblemon:dragon_scale".to_string() },
            result: "dragvee".to_string(),
        };
        let value = serde_json::to_value(EvolutionDoc::from(&rule)).unwrap();
        assert_eq!(value["requiredContext"], "cobblemon:dragon_scale");
        assert_eq!(value["requirements"], json!([]));
    }

    #[test]
    fn trade_without_item_has_no_requirements() {
        let rule = EvolutionRule {
            id: "machoke_machamp".to_string(),
            trigger: EvolutionTrigger::Trade { held_item: None },
            result: "machamp".to_string(),
        };
        let value = serde_json::to_value(EvolutionDoc::from(&rule)).unwrap();
        assert_eq!(value["requirements"], json!([]));
    }

    #[test]
    fn trade_with_held_item_appends_one_requirement() {
        let rule = EvolutionRule {
            id: "machoke_machamp".to_string(),
            trigger: EvolutionTrigger::Trade { held_item: Some("cobblemon:link_cable".to_string()) },
            result: "machamp".to_string(),
        };
        let value = serde_json::to_value(EvolutionDoc::from(&rule)).unwrap();
        assert_eq!(
            value["requirements"],
            json!([{ "variant": "held_item", "item": "cobblemon:link_cable" }])
        );
    }

    #[test]
    fn moving_block_omits_absent_sub_objects() {
        let value = serde_json::to_value(MovingDoc {
            can_look: Some(true),
            fly: None,
            swim: None,
        })
        .unwrap();
        assert_eq!(value, json!({ "canLook": true }));
    }
}
