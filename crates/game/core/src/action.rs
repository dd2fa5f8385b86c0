//! Candidate actions, logged turn actions and queued fighting actions.

use crate::body::BodyPartKind;
use crate::fighter::FighterId;
use crate::technique::{Technique, TechniqueProficiency};

/// Something the controlled character can do this turn.
///
/// Two actions are identical when their underlying data is identical; for
/// techniques that means the same [`TechniqueProficiency`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Technique(TechniqueAction),
}

impl Action {
    pub fn technique(proficiency: TechniqueProficiency) -> Self {
        Self::Technique(TechniqueAction::new(proficiency))
    }

    /// The proficiency behind this action.
    pub fn proficiency(&self) -> &TechniqueProficiency {
        match self {
            Self::Technique(action) => &action.proficiency,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Technique(action) => action.proficiency.name(),
        }
    }

    /// Structural identity, as used by the action history.
    pub fn is_identical_to(&self, other: &Action) -> bool {
        self == other
    }
}

/// A candidate technique wrapping the character's proficiency in it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueAction {
    pub proficiency: TechniqueProficiency,
}

impl TechniqueAction {
    pub fn new(proficiency: TechniqueProficiency) -> Self {
        Self { proficiency }
    }
}

/// Turn number within a fight, starting at 1.
pub type Turn = u32;

/// An action chosen on a given turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnAction {
    pub turn: Turn,
    pub action: Action,
}

impl TurnAction {
    pub fn new(turn: Turn, action: Action) -> Self {
        Self { turn, action }
    }
}

/// A technique queued for the fight to resolve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightingAction {
    /// Fighter performing the technique.
    pub actor: FighterId,
    /// Fighter on the receiving end.
    pub target: FighterId,
    pub attacker_body_part: BodyPartKind,
    pub target_body_part: BodyPartKind,
    pub technique: Technique,
}

/// A counter technique performed by the receiving fighter (block, dodge,
/// taking the hit) in response to a [`FightingAction`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CounterAction {
    pub performer: FighterId,
    pub body_part: BodyPartKind,
    pub name: String,
}
