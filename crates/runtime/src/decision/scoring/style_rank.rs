//! Fighting-style rank factor.

use fight_core::Action;

use super::{Appraisal, Factor, FactorContext};
use crate::api::DecisionError;

/// Scores every action by the fighter's rank in its primary style.
///
/// Only the first style rank is read: a fighter with several styles is
/// judged by the one listed first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FightingStyleRankFactor;

impl Factor for FightingStyleRankFactor {
    fn name(&self) -> &'static str {
        "fighting-style-rank"
    }

    fn evaluate(&self, _action: &Action, ctx: &FactorContext<'_>) -> Result<Appraisal, DecisionError> {
        let rank = ctx.input.primary_rank()?;
        Ok(Appraisal::new(rank.rank))
    }
}
