//! Fighting styles, style ranks and fight strategies.

/// A named fighting-arts style (e.g. boxing, karate).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FightingStyle(pub String);

impl FightingStyle {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

/// A character's standing in one fighting style.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightingStyleRank {
    pub style: FightingStyle,
    pub rank: f32,
}

impl FightingStyleRank {
    pub fn new(style: FightingStyle, rank: f32) -> Self {
        Self { style, rank }
    }
}

/// What the opponent is trying to get out of the fight.
///
/// Only the action-history factor reads it: practicing favours variety much
/// more aggressively than trying to win.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    #[default]
    None,
    PracticeTechniques,
    WinTheFight,
}
