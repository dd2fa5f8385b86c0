//! Fighter records.

use core::fmt;

use crate::body::BodyParts;
use crate::technique::TechniqueProficiency;

/// Unique identifier for a fighter within one fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FighterId(pub u32);

impl fmt::Display for FighterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fighter#{}", self.0)
    }
}

/// Who controls a fighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FighterRole {
    /// Controlled by the human player.
    Player,
    /// Controlled by the fighter AI.
    Opponent,
}

/// A participant in the fight.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub id: FighterId,
    pub name: String,
    pub role: FighterRole,
    pub body: BodyParts,
    pub proficiencies: Vec<TechniqueProficiency>,
    /// While set, the AI keeps watching the other fighter's turn.
    #[cfg_attr(feature = "serde", serde(default))]
    pub observing_opponent: bool,
}

impl Fighter {
    pub fn new(id: FighterId, name: impl Into<String>, role: FighterRole) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            body: BodyParts::intact(),
            proficiencies: Vec::new(),
            observing_opponent: false,
        }
    }

    #[must_use]
    pub fn with_body(mut self, body: BodyParts) -> Self {
        self.body = body;
        self
    }

    #[must_use]
    pub fn with_proficiencies(mut self, proficiencies: Vec<TechniqueProficiency>) -> Self {
        self.proficiencies = proficiencies;
        self
    }

    #[must_use]
    pub fn observing(mut self, observing: bool) -> Self {
        self.observing_opponent = observing;
        self
    }

    pub fn is_player(&self) -> bool {
        self.role == FighterRole::Player
    }

    pub fn is_opponent(&self) -> bool {
        self.role == FighterRole::Opponent
    }
}
