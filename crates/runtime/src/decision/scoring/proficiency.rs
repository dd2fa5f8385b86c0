//! Technique proficiency factor.

use fight_core::Action;

use super::{Appraisal, Factor, FactorContext};
use crate::api::DecisionError;

/// Favours techniques the fighter is good at: the score is the proficiency.
#[derive(Debug, Clone, Copy, Default)]
pub struct TechniqueProficiencyFactor;

impl Factor for TechniqueProficiencyFactor {
    fn name(&self) -> &'static str {
        "technique-proficiency"
    }

    fn evaluate(&self, action: &Action, _ctx: &FactorContext<'_>) -> Result<Appraisal, DecisionError> {
        Ok(Appraisal::new(action.proficiency().proficiency))
    }
}
