//! Utility scoring for candidate actions.
//!
//! Every candidate is judged by the same ordered set of [`Factor`]s. Each
//! factor looks at one aspect of the situation and returns an [`Appraisal`];
//! the engine sums the appraisals and adds a random perturbation.
//!
//! # Factors
//!
//! | factor | reads | range |
//! |---|---|---|
//! | [`FightingStyleRankFactor`] | primary style rank | rank as-is |
//! | [`TechniqueProficiencyFactor`] | the action's proficiency | [0, 1] |
//! | [`PhysicalConditionFactor`] | endurance | [0, 2] |
//! | [`AttackerBodyPartFactor`] | damage of the executing body part | [0, 1] |
//! | [`ActionHistoryFactor`] | turns since last use | [0.5, 1] |
//!
//! # Score Formula
//!
//! ```text
//! total = Σ factor appraisals + uniform draw in [0, 1)
//! ```

pub mod action_history;
pub mod attacker_body_part;
pub mod physical_condition;
pub mod proficiency;
pub mod style_rank;

pub use action_history::ActionHistoryFactor;
pub use attacker_body_part::AttackerBodyPartFactor;
pub use physical_condition::PhysicalConditionFactor;
pub use proficiency::TechniqueProficiencyFactor;
pub use style_rank::FightingStyleRankFactor;

use fight_core::{Action, ActionHistory, DecisionInput, Fighter, ScoringConfig};

use crate::api::DecisionError;

/// The scalar judgment of one factor about one action.
///
/// Conventionally near [0, 1] per factor but not bounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appraisal {
    score: f32,
}

impl Appraisal {
    /// Score of an appraisal built without an explicit value.
    pub const DEFAULT_SCORE: f32 = 0.5;

    pub const fn new(score: f32) -> Self {
        Self { score }
    }

    pub const fn score(&self) -> f32 {
        self.score
    }
}

impl Default for Appraisal {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SCORE)
    }
}

/// Everything a factor may read while appraising an action.
#[derive(Debug, Clone, Copy)]
pub struct FactorContext<'a> {
    pub input: &'a DecisionInput,
    /// The fighter the action would be performed by.
    pub fighter: &'a Fighter,
    pub history: &'a ActionHistory,
    pub config: &'a ScoringConfig,
}

/// A pluggable scoring rule.
pub trait Factor: Send + Sync {
    /// Short identifier used in logs and score breakdowns.
    fn name(&self) -> &'static str;

    /// Appraises `action` in the given context.
    ///
    /// # Errors
    ///
    /// Fails when reference data the factor depends on is missing (body
    /// part, condition, style rank). Such failures are never defaulted.
    fn evaluate(&self, action: &Action, ctx: &FactorContext<'_>) -> Result<Appraisal, DecisionError>;
}

/// One factor's contribution to a score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorAppraisal {
    pub factor: &'static str,
    pub appraisal: Appraisal,
}

/// Per-factor appraisals of one action plus the random draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    pub appraisals: Vec<FactorAppraisal>,
    pub random: f32,
}

impl ScoreBreakdown {
    /// Sum of the factor appraisals, without the random draw.
    pub fn deterministic(&self) -> f32 {
        self.appraisals.iter().map(|a| a.appraisal.score()).sum()
    }

    pub fn total(&self) -> f32 {
        self.deterministic() + self.random
    }

    /// Appraisal of a single factor, by name.
    pub fn factor(&self, name: &str) -> Option<Appraisal> {
        self.appraisals
            .iter()
            .find(|a| a.factor == name)
            .map(|a| a.appraisal)
    }
}

/// Ordered set of factors applied to every candidate.
pub struct Factors {
    factors: Vec<Box<dyn Factor>>,
}

impl Factors {
    pub fn new(factors: Vec<Box<dyn Factor>>) -> Self {
        Self { factors }
    }

    /// The five standard factors, in scoring order.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(FightingStyleRankFactor),
            Box::new(TechniqueProficiencyFactor),
            Box::new(PhysicalConditionFactor),
            Box::new(AttackerBodyPartFactor),
            Box::new(ActionHistoryFactor),
        ])
    }

    /// Runs every factor on `action`, in order.
    pub fn appraise(
        &self,
        action: &Action,
        ctx: &FactorContext<'_>,
    ) -> Result<Vec<FactorAppraisal>, DecisionError> {
        self.factors
            .iter()
            .map(|factor| {
                let appraisal = factor.evaluate(action, ctx)?;
                Ok(FactorAppraisal {
                    factor: factor.name(),
                    appraisal,
                })
            })
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factors.iter().map(|factor| factor.name())
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }
}

impl Default for Factors {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use fight_core::{
        Action, ActionHistory, BodyPart, BodyPartKind, BodyParts, DecisionInput, Fighter,
        FighterConditions, FighterId, FighterRole, FightingStyle, FightingStyleRank, ScoringConfig,
        Strategy, Technique, TechniqueProficiency,
    };

    pub fn proficiency(name: &str, body_part: BodyPartKind, value: f32) -> TechniqueProficiency {
        let technique = Technique::new(name, body_part, vec![BodyPartKind::Head]);
        TechniqueProficiency::new(technique, value).unwrap()
    }

    pub fn action(name: &str, body_part: BodyPartKind, value: f32) -> Action {
        Action::technique(proficiency(name, body_part, value))
    }

    pub fn input(strategy: Strategy, endurance: f32) -> DecisionInput {
        DecisionInput::new(1)
            .with_rank(FightingStyleRank::new(FightingStyle::new("boxing"), 0.6))
            .with_strategy(strategy)
            .with_conditions(FighterConditions::from_positional(&[1.0, 1.0, 1.0, endurance]).unwrap())
    }

    pub fn fighter_with_damage(kind: BodyPartKind, damage: f32) -> Fighter {
        let body = BodyParts::new(
            BodyParts::intact()
                .iter()
                .map(|part| {
                    if part.kind == kind {
                        BodyPart::new(kind).with_damage(damage)
                    } else {
                        *part
                    }
                })
                .collect(),
        );
        Fighter::new(FighterId(1), "Opponent", FighterRole::Opponent).with_body(body)
    }

    /// Owns the data a [`super::FactorContext`] borrows.
    pub struct Scene {
        pub input: DecisionInput,
        pub fighter: Fighter,
        pub history: ActionHistory,
        pub config: ScoringConfig,
    }

    impl Scene {
        pub fn new(input: DecisionInput, fighter: Fighter) -> Self {
            Self {
                input,
                fighter,
                history: ActionHistory::new(),
                config: ScoringConfig::default(),
            }
        }

        pub fn ctx(&self) -> super::FactorContext<'_> {
            super::FactorContext {
                input: &self.input,
                fighter: &self.fighter,
                history: &self.history,
                config: &self.config,
            }
        }
    }
}
