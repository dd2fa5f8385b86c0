//! Per-turn snapshot consumed by the decision engine.

use crate::action::Turn;
use crate::condition::FighterConditions;
use crate::error::CoreError;
use crate::style::{FightingStyleRank, Strategy};

/// Everything the decision engine needs to know about the current turn.
///
/// Rebuilt by the caller every turn and handed to the engine by value or
/// reference; the engine never keeps it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecisionInput {
    /// How many actions the AI fighter picks this turn.
    pub actions_per_turn: u32,
    pub turn: Turn,
    /// The AI fighter's style ranks; the first entry is its primary style.
    pub opponent_ranks: Vec<FightingStyleRank>,
    pub strategy: Strategy,
    pub conditions: FighterConditions,
}

impl DecisionInput {
    pub fn new(turn: Turn) -> Self {
        Self {
            actions_per_turn: 1,
            turn,
            opponent_ranks: Vec::new(),
            strategy: Strategy::None,
            conditions: FighterConditions::new(),
        }
    }

    #[must_use]
    pub fn with_actions_per_turn(mut self, actions_per_turn: u32) -> Self {
        self.actions_per_turn = actions_per_turn;
        self
    }

    #[must_use]
    pub fn with_rank(mut self, rank: FightingStyleRank) -> Self {
        self.opponent_ranks.push(rank);
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_conditions(mut self, conditions: FighterConditions) -> Self {
        self.conditions = conditions;
        self
    }

    /// The primary fighting-style rank.
    pub fn primary_rank(&self) -> Result<&FightingStyleRank, CoreError> {
        self.opponent_ranks
            .first()
            .ok_or(CoreError::NoFightingStyleRanks)
    }

    /// Checks the preconditions the engine relies on before any scoring.
    ///
    /// Zero actions per turn is valid: the engine then picks nothing.
    pub fn validate(&self) -> Result<(), CoreError> {
        self.primary_rank()?;
        self.conditions.endurance()?;
        Ok(())
    }
}
