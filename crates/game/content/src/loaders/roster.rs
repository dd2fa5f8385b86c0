//! Fighter roster loader.
//!
//! A roster lists every fighter taking part in a fight, together with the
//! per-fighter data the AI reads each turn (style ranks, strategy,
//! conditions).
//!
//! ```ron
//! [
//!     (
//!         id: 1,
//!         name: "Kenji",
//!         role: Opponent,
//!         techniques: [
//!             (name: "jab", body_part: LeftArm, targets: [Head], proficiency: 0.7),
//!         ],
//!         style_ranks: [(style: "karate", rank: 0.6)],
//!         strategy: WinTheFight,
//!         conditions: [6.0, 7.0, 9.0, 10.0],
//!     ),
//! ]
//! ```
//!
//! `conditions` keeps the legacy positional layout (mental, emotional,
//! health, physical) and is converted to keyed conditions while loading.

use std::path::Path;

use anyhow::Context;
use fight_core::{
    BodyPart, BodyPartKind, BodyParts, DecisionInput, Fighter, FighterConditions, FighterId,
    FighterRole, FightingStyleRank, Strategy, Technique, TechniqueProficiency, Turn,
};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// A technique as written in roster files.
#[derive(Clone, Debug, Deserialize)]
pub struct TechniqueSpec {
    pub name: String,
    pub body_part: BodyPartKind,
    pub targets: Vec<BodyPartKind>,
    pub proficiency: f32,
}

/// One fighter as written in roster files.
#[derive(Clone, Debug, Deserialize)]
pub struct RosterEntry {
    pub id: u32,
    pub name: String,
    pub role: FighterRole,
    /// Damaged body parts; parts not listed are intact.
    #[serde(default)]
    pub damage: Vec<BodyPart>,
    #[serde(default)]
    pub techniques: Vec<TechniqueSpec>,
    #[serde(default)]
    pub style_ranks: Vec<FightingStyleRank>,
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub conditions: Vec<f32>,
    #[serde(default = "default_actions_per_turn")]
    pub actions_per_turn: u32,
}

fn default_actions_per_turn() -> u32 {
    1
}

/// Validated roster: fighters plus the per-turn data of each.
#[derive(Clone, Debug)]
pub struct Roster {
    fighters: Vec<Fighter>,
    profiles: Vec<Profile>,
}

/// Per-turn decision data of one fighter.
#[derive(Clone, Debug)]
struct Profile {
    id: FighterId,
    style_ranks: Vec<FightingStyleRank>,
    strategy: Strategy,
    conditions: FighterConditions,
    actions_per_turn: u32,
}

impl Roster {
    /// Fighters in file order.
    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    pub fn into_fighters(self) -> Vec<Fighter> {
        self.fighters
    }

    /// Builds the decision input of fighter `id` for `turn`.
    ///
    /// # Errors
    ///
    /// Fails when `id` is not in the roster.
    pub fn decision_input(&self, id: FighterId, turn: Turn) -> LoadResult<DecisionInput> {
        let profile = self
            .profiles
            .iter()
            .find(|profile| profile.id == id)
            .ok_or_else(|| anyhow::anyhow!("{} is not in the roster", id))?;

        let input = profile.style_ranks.iter().cloned().fold(
            DecisionInput::new(turn)
                .with_actions_per_turn(profile.actions_per_turn)
                .with_strategy(profile.strategy)
                .with_conditions(profile.conditions.clone()),
            DecisionInput::with_rank,
        );
        Ok(input)
    }
}

/// Loader for fighter rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load a roster from a RON file.
    ///
    /// RON format: `Vec<RosterEntry>`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a roster from RON text.
    pub fn parse(content: &str) -> LoadResult<Roster> {
        let entries: Vec<RosterEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        let mut fighters = Vec::with_capacity(entries.len());
        let mut profiles = Vec::with_capacity(entries.len());
        for entry in entries {
            let (fighter, profile) = Self::resolve(entry)?;
            if fighters.iter().any(|other: &Fighter| other.id == fighter.id) {
                anyhow::bail!("duplicate fighter id {} in roster", fighter.id);
            }
            fighters.push(fighter);
            profiles.push(profile);
        }

        Ok(Roster { fighters, profiles })
    }

    fn resolve(entry: RosterEntry) -> LoadResult<(Fighter, Profile)> {
        let id = FighterId(entry.id);

        let proficiencies = entry
            .techniques
            .into_iter()
            .map(|spec| {
                let technique = Technique::new(spec.name, spec.body_part, spec.targets);
                TechniqueProficiency::new(technique, spec.proficiency)
            })
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid technique for fighter '{}'", entry.name))?;

        let mut body = BodyParts::intact();
        for damaged in entry.damage {
            body.find_by_kind_mut(damaged.kind)?.damage_percentage = damaged.damage_percentage;
        }

        // Player entries usually carry no AI data at all.
        let conditions = if entry.conditions.is_empty() {
            FighterConditions::new()
        } else {
            FighterConditions::from_positional(&entry.conditions)
                .with_context(|| format!("invalid conditions for fighter '{}'", entry.name))?
        };

        let fighter = Fighter::new(id, entry.name, entry.role)
            .with_body(body)
            .with_proficiencies(proficiencies);
        let profile = Profile {
            id,
            style_ranks: entry.style_ranks,
            strategy: entry.strategy,
            conditions,
            actions_per_turn: entry.actions_per_turn,
        };

        Ok((fighter, profile))
    }
}
