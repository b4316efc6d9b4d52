//! Attribute bag normalization.
//!
//! [`SpeciesAttributes`] is the flat input for a full species definition;
//! [`AdditionChanges`] is the sparse change set for editing an existing
//! species. Both parse their compound string fields here and apply the
//! cross-field defaulting rules, so document synthesis works on structured
//! data only.
//!
//! Defaulting precedence:
//! 1. `can_look` is forced off when no head bone is declared (absent or the
//!    sentinel `"none"`), overriding any explicit request.
//! 2. `can_breathe_underwater` is dropped unless `can_swim` is set.
//! 3. Numeric fields fall back to fixed constants; nothing is inferred.
//! 4. Type names are validated advisorily; unknown names are kept.

use tracing::warn;

use crate::errors::ProfileError;
use crate::types::{
    BaseStats, DropEntry, EvolutionRule, EvolutionTrigger, Hitbox, Movement, SpawnSettings,
    SpeciesId, SpeciesProfile, Warning, PLACEHOLDER_EVOLUTION_ITEM, TYPE_NAMES,
};

/// Sentinel head bone value meaning "this model has no head".
const NO_HEAD_SENTINEL: &str = "none";

/// How an evolution is triggered, as requested by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvolutionMethod {
    /// Evolve on level-up (the default).
    #[default]
    LevelUp,
    /// Evolve when an item is used on the creature.
    ItemInteract,
    /// Evolve when traded.
    Trade,
}

/// A requested evolution, before normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvolutionRequest {
    /// Target species name.
    pub target: String,
    /// Trigger method.
    pub method: EvolutionMethod,
    /// Minimum level for [`EvolutionMethod::LevelUp`]; defaults to 36.
    pub level: Option<u32>,
    /// Item for [`EvolutionMethod::ItemInteract`], or held item for
    /// [`EvolutionMethod::Trade`].
    pub item: Option<String>,
}

/// Flat attribute bag for a full species definition.
///
/// Everything except `name` and `dex_number` is optional; absent fields get
/// fixed defaults during [`SpeciesAttributes::normalize`]. Compound fields
/// keep the string encodings the CLI takes (`"2,2"` hitboxes,
/// `"item:pct,item:pct"` drops, comma-separated lists).
#[derive(Debug, Clone, Default)]
pub struct SpeciesAttributes {
    /// Display name; lowercased to form the identifier.
    pub name: String,
    /// National dex number.
    pub dex_number: u32,
    /// Primary type name.
    pub primary_type: Option<String>,
    /// Secondary type name.
    pub secondary_type: Option<String>,
    /// Base stats; any absent stat defaults to 50.
    pub hp: Option<u32>,
    /// Physical attack.
    pub attack: Option<u32>,
    /// Physical defence.
    pub defence: Option<u32>,
    /// Special attack.
    pub special_attack: Option<u32>,
    /// Special defence.
    pub special_defence: Option<u32>,
    /// Speed.
    pub speed: Option<u32>,
    /// Comma-separated move list.
    pub moves: Option<String>,
    /// Comma-separated ability list.
    pub abilities: Option<String>,
    /// Height in decimeters (default 10).
    pub height: Option<u32>,
    /// Weight in hectograms (default 100).
    pub weight: Option<u32>,
    /// Model scale multiplier.
    pub base_scale: Option<f64>,
    /// Hitbox string in `"width,height"` form.
    pub hitbox: Option<String>,
    /// Drop table string in `"item:percentage,item:percentage"` form.
    pub drops: Option<String>,
    /// The creature can fly.
    pub can_fly: bool,
    /// The creature can swim.
    pub can_swim: bool,
    /// The creature can breathe underwater (ignored without `can_swim`).
    pub breathe_underwater: bool,
    /// Explicit head-tracking request; overridden to `false` when no head
    /// bone is declared.
    pub can_look: Option<bool>,
    /// Head bone name; absent or `"none"` means the model has no head.
    pub head_bone: Option<String>,
    /// Evolution to attach, if any.
    pub evolution: Option<EvolutionRequest>,
    /// Spawn rarity bucket (default `common`).
    pub rarity: Option<String>,
    /// Spawn level range (default `"5-30"`).
    pub spawn_level: Option<String>,
    /// Spawn weight (default 10.0).
    pub spawn_weight: Option<f64>,
    /// Comma-separated spawn biome list (default `#minecraft:is_overworld`).
    pub spawn_biomes: Option<String>,
    /// Whether spawns must see the sky (default true).
    pub spawn_surface: Option<bool>,
    /// Catch rate (default 45).
    pub catch_rate: Option<u32>,
    /// Male ratio (default 0.5).
    pub male_ratio: Option<f64>,
    /// Base experience yield (default 100).
    pub base_exp: Option<u32>,
    /// Experience group (default `medium_fast`).
    pub exp_group: Option<String>,
    /// Egg cycles (default 20).
    pub egg_cycles: Option<u32>,
    /// Egg group (default `field`).
    pub egg_group: Option<String>,
    /// Base friendship (default 50).
    pub friendship: Option<u32>,
    /// Pre-evolution species name.
    pub pre_evolution: Option<String>,
    /// First pokedex description line.
    pub desc1: Option<String>,
    /// Second pokedex description line.
    pub desc2: Option<String>,
}

impl SpeciesAttributes {
    /// Bag with just the required fields set.
    pub fn new(name: impl Into<String>, dex_number: u32) -> Self {
        Self {
            name: name.into(),
            dex_number,
            ..Self::default()
        }
    }

    /// Resolve every cross-field default and parse compound fields.
    ///
    /// Advisory problems come back as [`Warning`]s next to the profile;
    /// only structurally malformed input (bad hitbox, bad drop percentage,
    /// empty name) fails.
    pub fn normalize(&self) -> Result<(SpeciesProfile, Vec<Warning>), ProfileError> {
        let id = SpeciesId::new(&self.name).ok_or(ProfileError::EmptyName)?;
        let mut warnings = Vec::new();

        let primary_type = normalize_type(
            self.primary_type.as_deref().unwrap_or("normal"),
            &mut warnings,
        );
        let secondary_type = self
            .secondary_type
            .as_deref()
            .map(|t| normalize_type(t, &mut warnings));

        let head_bone = resolve_head_bone(self.head_bone.as_deref());
        let movement = Movement {
            can_fly: self.can_fly,
            can_swim: self.can_swim,
            can_breathe_underwater: self.can_swim && self.breathe_underwater,
            // No head bone means the head cannot track, whatever was asked.
            can_look: head_bone.is_some() && self.can_look.unwrap_or(true),
        };

        let hitbox = self.hitbox.as_deref().map(parse_hitbox).transpose()?;
        let drops = match self.drops.as_deref() {
            Some(raw) => parse_drops(raw, &mut warnings)?,
            None => Vec::new(),
        };

        let evolutions = match &self.evolution {
            Some(req) => vec![build_evolution(&id, req, &mut warnings)?],
            None => Vec::new(),
        };

        let profile = SpeciesProfile {
            display_name: self.name.trim().to_string(),
            id,
            dex_number: self.dex_number,
            primary_type,
            secondary_type,
            base_stats: BaseStats {
                hp: self.hp.unwrap_or(50),
                attack: self.attack.unwrap_or(50),
                defence: self.defence.unwrap_or(50),
                special_attack: self.special_attack.unwrap_or(50),
                special_defence: self.special_defence.unwrap_or(50),
                speed: self.speed.unwrap_or(50),
            },
            height: self.height.unwrap_or(10),
            weight: self.weight.unwrap_or(100),
            base_scale: self.base_scale,
            hitbox,
            movement,
            head_bone,
            moves: parse_list(self.moves.as_deref()),
            abilities: parse_list(self.abilities.as_deref()),
            evolutions,
            drops,
            spawn: SpawnSettings {
                bucket: self
                    .rarity
                    .clone()
                    .unwrap_or_else(|| "common".to_string()),
                level_range: self
                    .spawn_level
                    .clone()
                    .unwrap_or_else(|| "5-30".to_string()),
                weight: self.spawn_weight.unwrap_or(10.0),
                biomes: match self.spawn_biomes.as_deref() {
                    Some(raw) => parse_list(Some(raw)),
                    None => SpawnSettings::default().biomes,
                },
                see_sky: self.spawn_surface.unwrap_or(true),
            },
            catch_rate: self.catch_rate.unwrap_or(45),
            male_ratio: self.male_ratio.unwrap_or(0.5),
            base_experience_yield: self.base_exp.unwrap_or(100),
            experience_group: self
                .exp_group
                .clone()
                .unwrap_or_else(|| "medium_fast".to_string()),
            egg_cycles: self.egg_cycles.unwrap_or(20),
            egg_groups: vec![self.egg_group.clone().unwrap_or_else(|| "field".to_string())],
            base_friendship: self.friendship.unwrap_or(50),
            ev_yield: BaseStats::ev_default(),
            pre_evolution: self.pre_evolution.clone(),
            desc1: self.desc1.clone(),
            desc2: self.desc2.clone(),
        };

        Ok((profile, warnings))
    }
}

/// Sparse change set for editing an existing species.
///
/// Every field is optional; absent means "no change" and must stay absent
/// in the emitted addition document. `normalize` only parses what is
/// present.
#[derive(Debug, Clone, Default)]
pub struct AdditionChanges {
    /// Replacement move list (comma-separated). Replaces ALL moves.
    pub moves: Option<String>,
    /// Evolution to add.
    pub evolution: Option<EvolutionRequest>,
    /// New primary type.
    pub primary_type: Option<String>,
    /// New secondary type.
    pub secondary_type: Option<String>,
    /// New model scale multiplier.
    pub base_scale: Option<f64>,
    /// New hitbox in `"width,height"` form.
    pub hitbox: Option<String>,
    /// Replacement ability list (comma-separated).
    pub abilities: Option<String>,
    /// New drop table in `"item:percentage,..."` form.
    pub drops: Option<String>,
    /// Enable flight.
    pub can_fly: bool,
    /// Enable swimming.
    pub can_swim: bool,
    /// Enable underwater breathing (only meaningful with `can_swim`).
    pub breathe_underwater: bool,
}

/// Structured, parsed form of [`AdditionChanges`].
///
/// Absent fields stay `None`; the addition document serializer omits them
/// so the game treats them as "no change".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesPatch {
    /// Replacement move list.
    pub moves: Option<Vec<String>>,
    /// Evolutions to add.
    pub evolutions: Option<Vec<EvolutionRule>>,
    /// New primary type.
    pub primary_type: Option<String>,
    /// New secondary type.
    pub secondary_type: Option<String>,
    /// New model scale multiplier.
    pub base_scale: Option<f64>,
    /// New hitbox.
    pub hitbox: Option<Hitbox>,
    /// Replacement ability list.
    pub abilities: Option<Vec<String>>,
    /// New drop table.
    pub drops: Option<Vec<DropEntry>>,
    /// Enable flight.
    pub can_fly: bool,
    /// Enable swimming.
    pub can_swim: bool,
    /// Enable underwater breathing.
    pub breathe_underwater: bool,
}

impl SpeciesPatch {
    /// Whether the patch requests no changes at all.
    pub fn is_empty(&self) -> bool {
        self.moves.is_none()
            && self.evolutions.is_none()
            && self.primary_type.is_none()
            && self.secondary_type.is_none()
            && self.base_scale.is_none()
            && self.hitbox.is_none()
            && self.abilities.is_none()
            && self.drops.is_none()
            && !self.can_fly
            && !self.can_swim
    }
}

impl AdditionChanges {
    /// Parse the present fields into a [`SpeciesPatch`] for `target`.
    pub fn normalize(&self, target: &SpeciesId) -> Result<(SpeciesPatch, Vec<Warning>), ProfileError> {
        let mut warnings = Vec::new();

        let patch = SpeciesPatch {
            moves: self.moves.as_deref().map(|raw| parse_list(Some(raw))),
            evolutions: match &self.evolution {
                Some(req) => Some(vec![build_evolution(target, req, &mut warnings)?]),
                None => None,
            },
            primary_type: self
                .primary_type
                .as_deref()
                .map(|t| normalize_type(t, &mut warnings)),
            secondary_type: self
                .secondary_type
                .as_deref()
                .map(|t| normalize_type(t, &mut warnings)),
            base_scale: self.base_scale,
            hitbox: self.hitbox.as_deref().map(parse_hitbox).transpose()?,
            abilities: self.abilities.as_deref().map(|raw| parse_list(Some(raw))),
            drops: match self.drops.as_deref() {
                Some(raw) => Some(parse_drops(raw, &mut warnings)?),
                None => None,
            },
            can_fly: self.can_fly,
            can_swim: self.can_swim,
            breathe_underwater: self.can_swim && self.breathe_underwater,
        };

        Ok((patch, warnings))
    }
}

/// Lowercase a type name, recording a warning when it is not a known type.
fn normalize_type(raw: &str, warnings: &mut Vec<Warning>) -> String {
    let name = raw.trim().to_lowercase();
    if !TYPE_NAMES.contains(&name.as_str()) {
        warn!(type_name = %name, "unrecognized type name, emitting anyway");
        warnings.push(Warning::UnknownType { name: name.clone() });
    }
    name
}

/// Resolve the head bone: absent or the `"none"` sentinel means no head.
fn resolve_head_bone(raw: Option<&str>) -> Option<String> {
    match raw {
        None => None,
        Some(bone) => {
            let trimmed = bone.trim();
            if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_HEAD_SENTINEL) {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
    }
}

/// Parse a `"width,height"` hitbox string.
fn parse_hitbox(raw: &str) -> Result<Hitbox, ProfileError> {
    let malformed = || ProfileError::MalformedHitbox { value: raw.to_string() };
    let (width, height) = raw.split_once(',').ok_or_else(malformed)?;
    Ok(Hitbox {
        width: width.trim().parse().map_err(|_| malformed())?,
        height: height.trim().parse().map_err(|_| malformed())?,
        fixed: false,
    })
}

/// Parse an `"item:percentage,item:percentage"` drop table string.
///
/// A segment with no `:` is skipped with a warning; the rest still parse.
/// A non-numeric percentage aborts with an error. The item may itself be
/// namespaced (`minecraft:apple:50`), so the percentage is everything after
/// the last colon.
fn parse_drops(raw: &str, warnings: &mut Vec<Warning>) -> Result<Vec<DropEntry>, ProfileError> {
    let mut entries = Vec::new();
    for segment in raw.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let Some((item, percentage)) = segment.rsplit_once(':') else {
            warn!(%segment, "skipping drop segment without item:percentage form");
            warnings.push(Warning::MalformedDropSegment { segment: segment.to_string() });
            continue;
        };
        let percentage: f64 = percentage.trim().parse().map_err(|_| {
            ProfileError::MalformedDropPercentage { segment: segment.to_string() }
        })?;
        entries.push(DropEntry { item: item.trim().to_string(), percentage });
    }
    Ok(entries)
}

/// Split a comma-separated list, trimming and dropping empty segments.
fn parse_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

/// Build an [`EvolutionRule`] from a request, applying trigger defaults.
fn build_evolution(
    source: &SpeciesId,
    req: &EvolutionRequest,
    warnings: &mut Vec<Warning>,
) -> Result<EvolutionRule, ProfileError> {
    let target = req.target.trim().to_lowercase();
    if target.is_empty() {
        return Err(ProfileError::EmptyEvolutionTarget);
    }
    let id = format!("{source}_{target}");

    let trigger = match req.method {
        EvolutionMethod::LevelUp => EvolutionTrigger::LevelUp { level: req.level.unwrap_or(36) },
        EvolutionMethod::ItemInteract => {
            let item = match &req.item {
                Some(item) => item.clone(),
                None => {
                    warn!(rule = %id, "item_interact evolution without an item, using placeholder");
                    warnings.push(Warning::MissingEvolutionItem { rule_id: id.clone() });
                    PLACEHOLDER_EVOLUTION_ITEM.to_string()
                }
            };
            EvolutionTrigger::ItemInteract { item }
        }
        EvolutionMethod::Trade => EvolutionTrigger::Trade { held_item: req.item.clone() },
    };

    Ok(EvolutionRule { id, trigger, result: target })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn normalize_applies_numeric_defaults() {
        let attrs = SpeciesAttributes::new("Flamebird", 999);
        let (profile, warnings) = attrs.normalize().unwrap();
        assert!(warnings.is_empty());
        assert_eq!(profile.id.as_str(), "flamebird");
        assert_eq!(profile.base_stats.hp, 50);
        assert_eq!(profile.height, 10);
        assert_eq!(profile.weight, 100);
        assert_eq!(profile.catch_rate, 45);
        assert_eq!(profile.experience_group, "medium_fast");
        assert_eq!(profile.egg_groups, vec!["field".to_string()]);
        assert_eq!(profile.spawn.bucket, "common");
        assert_eq!(profile.spawn.level_range, "5-30");
    }

    #[test]
    fn normalize_rejects_empty_name() {
        let attrs = SpeciesAttributes::new("  ", 1);
        assert_matches!(attrs.normalize(), Err(ProfileError::EmptyName));
    }

    #[test]
    fn can_look_forced_off_without_head_bone() {
        let mut attrs = SpeciesAttributes::new("Slitherer", 1);
        attrs.head_bone = Some("none".to_string());
        attrs.can_look = Some(true);
        let (profile, _) = attrs.normalize().unwrap();
        assert!(!profile.movement.can_look);
        assert!(profile.head_bone.is_none());
    }

    #[test]
    fn can_look_forced_off_when_head_bone_absent() {
        let mut attrs = SpeciesAttributes::new("Slitherer", 1);
        attrs.can_look = Some(true);
        let (profile, _) = attrs.normalize().unwrap();
        assert!(!profile.movement.can_look);
    }

    #[test]
    fn can_look_defaults_true_with_head_bone() {
        let mut attrs = SpeciesAttributes::new("Owler", 1);
        attrs.head_bone = Some("head".to_string());
        let (profile, _) = attrs.normalize().unwrap();
        assert!(profile.movement.can_look);
        assert_eq!(profile.head_bone.as_deref(), Some("head"));
    }

    #[test]
    fn breathe_underwater_dropped_without_swim() {
        let mut attrs = SpeciesAttributes::new("Landfish", 1);
        attrs.breathe_underwater = true;
        let (profile, _) = attrs.normalize().unwrap();
        assert!(!profile.movement.can_breathe_underwater);
    }

    #[test]
    fn breathe_underwater_kept_with_swim() {
        let mut attrs = SpeciesAttributes::new("Seafish", 1);
        attrs.can_swim = true;
        attrs.breathe_underwater = true;
        let (profile, _) = attrs.normalize().unwrap();
        assert!(profile.movement.can_breathe_underwater);
    }

    #[test]
    fn unknown_type_warns_but_is_kept() {
        let mut attrs = SpeciesAttributes::new("Weirdo", 1);
        attrs.primary_type = Some("cosmic".to_string());
        let (profile, warnings) = attrs.normalize().unwrap();
        assert_eq!(profile.primary_type, "cosmic");
        assert_eq!(
            warnings,
            vec![Warning::UnknownType { name: "cosmic".to_string() }]
        );
    }

    #[test]
    fn hitbox_parses_width_and_height() {
        let parsed = parse_hitbox("2,2").unwrap();
        assert_eq!(parsed, Hitbox { width: 2.0, height: 2.0, fixed: false });
    }

    #[test]
    fn hitbox_without_comma_is_an_error() {
        assert_matches!(parse_hitbox("2"), Err(ProfileError::MalformedHitbox { .. }));
    }

    #[test]
    fn hitbox_with_junk_number_is_an_error() {
        assert_matches!(parse_hitbox("2,tall"), Err(ProfileError::MalformedHitbox { .. }));
    }

    #[test]
    fn drops_parse_namespaced_items() {
        let mut warnings = Vec::new();
        let drops = parse_drops("minecraft:apple:50,minecraft:stick:10", &mut warnings).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(drops.len(), 2);
        assert_eq!(drops[0].item, "minecraft:apple");
        assert!((drops[0].percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(drops[1].item, "minecraft:stick");
        assert!((drops[1].percentage - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn drop_segment_without_colon_is_skipped() {
        let mut warnings = Vec::new();
        let drops = parse_drops("apple,minecraft:stick:10", &mut warnings).unwrap();
        assert_eq!(drops.len(), 1);
        assert_eq!(drops[0].item, "minecraft:stick");
        assert_eq!(
            warnings,
            vec![Warning::MalformedDropSegment { segment: "apple".to_string() }]
        );
    }

    #[test]
    fn drop_with_bad_percentage_aborts() {
        let mut warnings = Vec::new();
        assert_matches!(
            parse_drops("minecraft:apple:lots", &mut warnings),
            Err(ProfileError::MalformedDropPercentage { .. })
        );
    }

    #[test]
    fn level_up_evolution_defaults_to_36() {
        let id = SpeciesId::new("eevee").unwrap();
        let mut warnings = Vec::new();
        let req = EvolutionRequest { target: "Charizard".to_string(), ..Default::default() };
        let rule = build_evolution(&id, &req, &mut warnings).unwrap();
        assert_eq!(rule.id, "eevee_charizard");
        assert_eq!(rule.result, "charizard");
        assert_eq!(rule.trigger, EvolutionTrigger::LevelUp { level: 36 });
        assert!(warnings.is_empty());
    }

    #[test]
    fn item_interact_without_item_uses_placeholder() {
        let id = SpeciesId::new("eevee").unwrap();
        let mut warnings = Vec::new();
        let req = EvolutionRequest {
            target: "dragvee".to_string(),
            method: EvolutionMethod::ItemInteract,
            ..Default::default()
        };
        let rule = build_evolution(&id, &req, &mut warnings).unwrap();
        assert_eq!(
            rule.trigger,
            EvolutionTrigger::ItemInteract { item: PLACEHOLDER_EVOLUTION_ITEM.to_string() }
        );
        assert_eq!(
            warnings,
            vec![Warning::MissingEvolutionItem { rule_id: "eevee_dragvee".to_string() }]
        );
    }

    #[test]
    fn trade_evolution_keeps_optional_held_item() {
        let id = SpeciesId::new("machoke").unwrap();
        let mut warnings = Vec::new();
        let req = EvolutionRequest {
            target: "machamp".to_string(),
            method: EvolutionMethod::Trade,
            item: Some("cobblemon:link_cable".to_string()),
            ..Default::default()
        };
        let rule = build_evolution(&id, &req, &mut warnings).unwrap();
        assert_eq!(
            rule.trigger,
            EvolutionTrigger::Trade { held_item: Some("cobblemon:link_cable".to_string()) }
        );
    }

    #[test]
    fn empty_evolution_target_is_an_error() {
        let id = SpeciesId::new("eevee").unwrap();
        let mut warnings = Vec::new();
        let req = EvolutionRequest::default();
        assert_matches!(
            build_evolution(&id, &req, &mut warnings),
            Err(ProfileError::EmptyEvolutionTarget)
        );
    }

    #[test]
    fn patch_reports_empty_when_nothing_requested() {
        let target = SpeciesId::new("pikachu").unwrap();
        let (patch, warnings) = AdditionChanges::default().normalize(&target).unwrap();
        assert!(patch.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn patch_parses_only_requested_fields() {
        let target = SpeciesId::new("pikachu").unwrap();
        let changes = AdditionChanges {
            primary_type: Some("Dragon".to_string()),
            hitbox: Some("2,2".to_string()),
            ..Default::default()
        };
        let (patch, warnings) = changes.normalize(&target).unwrap();
        assert!(warnings.is_empty());
        assert_eq!(patch.primary_type.as_deref(), Some("dragon"));
        assert_eq!(patch.hitbox, Some(Hitbox { width: 2.0, height: 2.0, fixed: false }));
        assert!(patch.moves.is_none());
        assert!(patch.drops.is_none());
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_move_list_replaces_rather_than_appends() {
        let target = SpeciesId::new("bulbasaur").unwrap();
        let changes = AdditionChanges {
            moves: Some("flamethrower, earthquake,thunderbolt".to_string()),
            ..Default::default()
        };
        let (patch, _) = changes.normalize(&target).unwrap();
        assert_eq!(
            patch.moves,
            Some(vec![
                "flamethrower".to_string(),
                "earthquake".to_string(),
                "thunderbolt".to_string(),
            ])
        );
    }

    #[test]
    fn comma_lists_drop_empty_segments() {
        assert_eq!(parse_list(Some("a,,b, ")), vec!["a".to_string(), "b".to_string()]);
        assert!(parse_list(None).is_empty());
    }
}
