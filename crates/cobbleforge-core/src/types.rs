//! Canonical species types.
//!
//! [`SpeciesProfile`] is the normalized, immutable view of one creature for
//! one synthesis run. All defaults are already applied by the time a profile
//! exists; document synthesis never fills gaps itself.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The 18 type names the game ships with.
///
/// Validation against this list is advisory: unknown names are accepted and
/// emitted with a [`Warning::UnknownType`], since newer game versions may
/// add types.
pub const TYPE_NAMES: [&str; 18] = [
    "normal", "fire", "water", "electric", "grass", "ice", "fighting", "poison", "ground",
    "flying", "psychic", "bug", "rock", "ghost", "dragon", "dark", "steel", "fairy",
];

/// Lowercase species identifier used in every path and cross-reference.
///
/// Never empty; always lowercased on construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(String);

impl SpeciesId {
    /// Build an identifier from a display name, lowercasing it.
    ///
    /// Returns `None` for empty or whitespace-only input.
    pub fn new(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Namespaced reference (`cobblemon:<id>`) used in cross-document fields.
    pub fn qualified(&self, namespace: &str) -> String {
        format!("{namespace}:{}", self.0)
    }
}

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The six base stats (also reused for EV yields).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    /// Hit points.
    pub hp: u32,
    /// Physical attack.
    pub attack: u32,
    /// Physical defence.
    pub defence: u32,
    /// Special attack.
    pub special_attack: u32,
    /// Special defence.
    pub special_defence: u32,
    /// Speed.
    pub speed: u32,
}

impl BaseStats {
    /// Flat stat line, the default for every base stat.
    pub fn flat(value: u32) -> Self {
        Self {
            hp: value,
            attack: value,
            defence: value,
            special_attack: value,
            special_defence: value,
            speed: value,
        }
    }

    /// Default EV yield: 1 HP, nothing else.
    pub fn ev_default() -> Self {
        Self { hp: 1, ..Self::flat(0) }
    }
}

impl Default for BaseStats {
    fn default() -> Self {
        Self::flat(50)
    }
}

/// Collision hitbox, parsed from a `"width,height"` string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Width in blocks.
    pub width: f64,
    /// Height in blocks.
    pub height: f64,
    /// Whether the hitbox ignores model scale. Always written as `false`.
    pub fixed: bool,
}

/// Movement capability flags, cross-field rules already applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Movement {
    /// The creature can fly.
    pub can_fly: bool,
    /// The creature can swim in water.
    pub can_swim: bool,
    /// The creature can breathe underwater. Forced off unless `can_swim`.
    pub can_breathe_underwater: bool,
    /// The creature's head tracks nearby entities. Forced off when the
    /// model declares no head bone.
    pub can_look: bool,
}

/// One entry in the drop table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    /// Item identifier (e.g. `minecraft:apple`).
    pub item: String,
    /// Drop chance in percent.
    pub percentage: f64,
}

/// World spawn parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSettings {
    /// Rarity bucket (`common`, `uncommon`, `rare`, `ultra-rare`).
    pub bucket: String,
    /// Level range string (e.g. `"5-30"`).
    pub level_range: String,
    /// Spawn weight within the bucket.
    pub weight: f64,
    /// Biome tags or identifiers the creature spawns in.
    pub biomes: Vec<String>,
    /// Whether the spawn position must see the sky.
    pub see_sky: bool,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            bucket: "common".to_string(),
            level_range: "5-30".to_string(),
            weight: 10.0,
            biomes: vec!["#minecraft:is_overworld".to_string()],
            see_sky: true,
        }
    }
}

/// How an evolution is triggered, with trigger-specific parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum EvolutionTrigger {
    /// Evolves on level-up at or above `level`.
    LevelUp {
        /// Minimum level.
        level: u32,
    },
    /// Evolves when the player uses `item` on the creature.
    ItemInteract {
        /// Required item identifier.
        item: String,
    },
    /// Evolves when traded, optionally while holding an item.
    Trade {
        /// Item the creature must hold during the trade, if any.
        held_item: Option<String>,
    },
}

/// A single evolution rule targeting another species.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionRule {
    /// Rule identifier, derived as `<source>_<target>`.
    pub id: String,
    /// The trigger and its parameters.
    pub trigger: EvolutionTrigger,
    /// Target species identifier.
    pub result: String,
}

/// Fallback item used when an `item_interact` evolution names no item.
pub const PLACEHOLDER_EVOLUTION_ITEM: &str = "minecraft:stone";

/// Advisory problem recorded during normalization or asset processing.
///
/// Warnings never abort a run; they are collected and rendered by the
/// caller (and mirrored to `tracing::warn!` at the site that raised them).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A type name outside the known 18 was used.
    UnknownType {
        /// The unrecognized name.
        name: String,
    },
    /// An `item_interact` evolution named no item; the placeholder was used.
    MissingEvolutionItem {
        /// The affected rule id.
        rule_id: String,
    },
    /// A drop segment without `item:percentage` form was skipped.
    MalformedDropSegment {
        /// The skipped segment text.
        segment: String,
    },
    /// An animation file lacks recommended animations.
    MissingAnimations {
        /// The animation file name.
        file: String,
        /// The missing animation names.
        missing: Vec<String>,
    },
    /// An animation file could not be parsed for validation.
    UnreadableAnimation {
        /// The animation file name.
        file: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownType { name } => {
                write!(f, "'{name}' is not one of the {} known types", TYPE_NAMES.len())
            }
            Self::MissingEvolutionItem { rule_id } => write!(
                f,
                "evolution {rule_id} uses item_interact without an item; defaulting to {PLACEHOLDER_EVOLUTION_ITEM}"
            ),
            Self::MalformedDropSegment { segment } => {
                write!(f, "skipping drop segment {segment:?}: expected \"item:percentage\"")
            }
            Self::MissingAnimations { file, missing } => {
                write!(f, "{file} is missing recommended animations: {}", missing.join(", "))
            }
            Self::UnreadableAnimation { file, reason } => {
                write!(f, "could not validate animations in {file}: {reason}")
            }
        }
    }
}

/// The canonical, normalized description of one creature.
///
/// Produced by [`crate::SpeciesAttributes::normalize`]; immutable for the
/// rest of the run. Every numeric field already carries its default.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    /// Lowercase identifier used in all paths and cross-references.
    pub id: SpeciesId,
    /// Original-casing display name for the localization table.
    pub display_name: String,
    /// National dex number.
    pub dex_number: u32,
    /// Primary type (always present; defaults to `normal`).
    pub primary_type: String,
    /// Secondary type, if any.
    pub secondary_type: Option<String>,
    /// The six base stats.
    pub base_stats: BaseStats,
    /// Height in decimeters.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    /// Model scale multiplier, if requested.
    pub base_scale: Option<f64>,
    /// Collision hitbox, if requested.
    pub hitbox: Option<Hitbox>,
    /// Movement capabilities with cross-field rules applied.
    pub movement: Movement,
    /// Head bone name; `None` when the model has no head (sentinel `"none"`
    /// or absent), in which case `movement.can_look` is false.
    pub head_bone: Option<String>,
    /// Learnable moves (empty means no moves).
    pub moves: Vec<String>,
    /// Abilities (empty means none declared).
    pub abilities: Vec<String>,
    /// Evolution rules.
    pub evolutions: Vec<EvolutionRule>,
    /// Drop table entries.
    pub drops: Vec<DropEntry>,
    /// World spawn parameters.
    pub spawn: SpawnSettings,
    /// Catch rate.
    pub catch_rate: u32,
    /// Male ratio in [0, 1].
    pub male_ratio: f64,
    /// Base experience yield.
    pub base_experience_yield: u32,
    /// Experience growth group.
    pub experience_group: String,
    /// Egg cycles.
    pub egg_cycles: u32,
    /// Egg groups.
    pub egg_groups: Vec<String>,
    /// Base friendship.
    pub base_friendship: u32,
    /// EV yield per stat.
    pub ev_yield: BaseStats,
    /// Pre-evolution species, if any.
    pub pre_evolution: Option<String>,
    /// First pokedex description line, if supplied.
    pub desc1: Option<String>,
    /// Second pokedex description line, if supplied.
    pub desc2: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_id_lowercases() {
        let id = SpeciesId::new("FlameBird").unwrap();
        assert_eq!(id.as_str(), "flamebird");
        assert_eq!(id.qualified("cobblemon"), "cobblemon:flamebird");
    }

    #[test]
    fn species_id_rejects_empty() {
        assert!(SpeciesId::new("").is_none());
        assert!(SpeciesId::new("   ").is_none());
    }

    #[test]
    fn base_stats_defaults_are_flat_50() {
        let stats = BaseStats::default();
        assert_eq!(stats.hp, 50);
        assert_eq!(stats.speed, 50);
    }

    #[test]
    fn ev_default_is_one_hp() {
        let ev = BaseStats::ev_default();
        assert_eq!(ev.hp, 1);
        assert_eq!(ev.attack, 0);
    }

    #[test]
    fn warning_display_names_the_placeholder() {
        let w = Warning::MissingEvolutionItem { rule_id: "eevee_dragvee".to_string() };
        assert!(w.to_string().contains(PLACEHOLDER_EVOLUTION_ITEM));
    }
}
