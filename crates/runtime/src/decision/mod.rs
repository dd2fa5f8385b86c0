//! Utility-based decision engine.
//!
//! [`TacticalMind`] ranks the techniques a fighter knows and commits the best
//! ones for the current turn. It is an explicit instance owned by one fighter's
//! mind, together with that fighter's [`ActionHistory`].
//!
//! # Selection
//!
//! For each of `actions_per_turn` iterations:
//!
//! 1. Every candidate is scored: Σ factor appraisals + one uniform draw in [0, 1)
//! 2. The strictly highest total wins. The running best starts at 0.0, so a
//!    turn where nothing scores above zero yields no pick for that iteration
//! 3. The winner is emitted and appended to the history
//!
//! A turn is all or nothing: if any iteration fails, the picks already made
//! for that turn are dropped from the history again.
//!
//! Candidates are not removed after being picked, so later iterations of the
//! same turn may choose the same technique again.

pub mod catalog;
pub mod scoring;

pub use catalog::ActionCatalog;
pub use scoring::{
    Appraisal, Factor, FactorAppraisal, FactorContext, Factors, ScoreBreakdown,
};

use fight_core::{Action, ActionHistory, DecisionInput, Fighter, FightingAction, ScoringConfig};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::api::{DecisionError, FightArena};

/// The decision engine of one AI fighter.
pub struct TacticalMind<R = ChaCha8Rng> {
    factors: Factors,
    config: ScoringConfig,
    history: ActionHistory,
    rng: R,
}

impl TacticalMind<ChaCha8Rng> {
    /// Creates an engine with the standard factors, seeded from OS entropy.
    pub fn new(config: ScoringConfig) -> Self {
        Self::with_rng(config, ChaCha8Rng::from_entropy())
    }

    /// Creates an engine whose random draws are reproducible.
    pub fn with_seed(config: ScoringConfig, seed: u64) -> Self {
        Self::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> TacticalMind<R> {
    pub fn with_rng(config: ScoringConfig, rng: R) -> Self {
        Self {
            factors: Factors::standard(),
            config,
            history: ActionHistory::new(),
            rng,
        }
    }

    /// Replaces the standard factor set.
    #[must_use]
    pub fn with_factors(mut self, factors: Factors) -> Self {
        self.factors = factors;
        self
    }

    /// Every action this engine has committed, oldest first.
    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn factors(&self) -> &Factors {
        &self.factors
    }

    /// Scores one action, including a fresh random draw.
    ///
    /// # Errors
    ///
    /// Propagates the first factor failure (missing body part, condition or
    /// style rank).
    pub fn evaluate(
        &mut self,
        action: &Action,
        input: &DecisionInput,
        fighter: &Fighter,
    ) -> Result<ScoreBreakdown, DecisionError> {
        let ctx = FactorContext {
            input,
            fighter,
            history: &self.history,
            config: &self.config,
        };
        let appraisals = self.factors.appraise(action, &ctx)?;
        let random = self.rng.gen_range(0.0f32..1.0);

        Ok(ScoreBreakdown { appraisals, random })
    }

    /// Runs one selection round over `catalog` without committing anything.
    ///
    /// # Returns
    ///
    /// The winning action and its total score, or `None` when no candidate
    /// scored above zero. In case of tie, the earlier candidate wins.
    pub fn choose(
        &mut self,
        catalog: &ActionCatalog,
        input: &DecisionInput,
        fighter: &Fighter,
    ) -> Result<Option<(Action, f32)>, DecisionError> {
        let mut best: Option<&Action> = None;
        let mut best_score = 0.0f32;

        for action in catalog.iter() {
            let breakdown = self.evaluate(action, input, fighter)?;
            let total = breakdown.total();

            tracing::debug!(
                "  Candidate {:?}: total={} (factors={:?}, random={})",
                action.name(),
                total,
                breakdown
                    .appraisals
                    .iter()
                    .map(|a| (a.factor, a.appraisal.score()))
                    .collect::<Vec<_>>(),
                breakdown.random
            );

            if total > best_score {
                best = Some(action);
                best_score = total;
            }
        }

        Ok(best.map(|action| (action.clone(), best_score)))
    }

    /// Picks and commits this turn's actions for `fighter`.
    ///
    /// Every pick is appended to the history under `input.turn`. Zero
    /// actions per turn picks nothing.
    ///
    /// # Errors
    ///
    /// Fails before any scoring if the input is incomplete, the fighter
    /// knows no technique or `input.turn` precedes the last recorded turn;
    /// fails mid-way if a factor lacks reference data. A failed turn
    /// leaves the history as it was.
    pub fn pick_actions(
        &mut self,
        input: &DecisionInput,
        fighter: &Fighter,
    ) -> Result<Vec<Action>, DecisionError> {
        self.pick_with(input, fighter, |_| Ok(()))
    }

    /// Picks this turn's actions for the active fighter and queues them in the
    /// arena, aimed at the inactive fighter.
    ///
    /// Each technique targets only its first declared body part, which must
    /// exist on the target.
    ///
    /// # Returns
    ///
    /// The fighting actions that were queued, in pick order.
    pub fn decide(
        &mut self,
        input: &DecisionInput,
        arena: &mut dyn FightArena,
    ) -> Result<Vec<FightingAction>, DecisionError> {
        let fighter = arena
            .active_fighter()
            .ok_or(DecisionError::NoActiveFighter)?
            .clone();
        let target = arena
            .inactive_fighter()
            .ok_or(DecisionError::NoInactiveFighter)?;
        let target_id = target.id;
        let target_body = target.body.clone();

        let mut queued = Vec::new();
        self.pick_with(input, &fighter, |action| {
            let technique = &action.proficiency().technique;
            let target_body_part = technique.primary_target()?;
            target_body.find_by_kind(target_body_part)?;

            queued.push(FightingAction {
                actor: fighter.id,
                target: target_id,
                attacker_body_part: technique.body_part,
                target_body_part,
                technique: technique.clone(),
            });
            Ok(())
        })?;

        for action in &queued {
            arena.queue_action(action.clone());
        }

        Ok(queued)
    }

    /// Selection loop shared by [`Self::pick_actions`] and [`Self::decide`].
    ///
    /// `emit` runs on each winner before it is recorded. Later iterations see
    /// the earlier picks of the same turn; if any iteration fails they are
    /// rolled back, so the history only ever holds whole turns.
    fn pick_with<F>(
        &mut self,
        input: &DecisionInput,
        fighter: &Fighter,
        emit: F,
    ) -> Result<Vec<Action>, DecisionError>
    where
        F: FnMut(&Action) -> Result<(), DecisionError>,
    {
        input.validate()?;
        self.history.check_turn(input.turn)?;
        let catalog = ActionCatalog::for_fighter(fighter)?;

        tracing::debug!(
            "TacticalMind: {} picking {} action(s) from {} candidate(s) on turn {}",
            fighter.id,
            input.actions_per_turn,
            catalog.len(),
            input.turn
        );

        let checkpoint = self.history.len();
        let picked = self.pick_turn(&catalog, input, fighter, emit);
        if let Err(e) = &picked {
            tracing::warn!("{} abandons turn {}: {}", fighter.id, input.turn, e);
            self.history.truncate(checkpoint);
        }
        picked
    }

    fn pick_turn<F>(
        &mut self,
        catalog: &ActionCatalog,
        input: &DecisionInput,
        fighter: &Fighter,
        mut emit: F,
    ) -> Result<Vec<Action>, DecisionError>
    where
        F: FnMut(&Action) -> Result<(), DecisionError>,
    {
        let mut picks = Vec::new();
        for iteration in 0..input.actions_per_turn {
            match self.choose(catalog, input, fighter)? {
                Some((action, score)) => {
                    emit(&action)?;
                    tracing::info!(
                        "{} picked {:?} (score={}) on turn {}",
                        fighter.id,
                        action.name(),
                        score,
                        input.turn
                    );
                    self.history.record(input.turn, action.clone())?;
                    picks.push(action);
                }
                None => {
                    tracing::warn!(
                        "{} found no action scoring above zero (iteration {})",
                        fighter.id,
                        iteration
                    );
                }
            }
        }

        Ok(picks)
    }
}
