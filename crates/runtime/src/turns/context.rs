//! Context shared by the turn states of one fighter's mind.

use std::time::Duration;

use fight_core::{DecisionInput, Fighter, FighterId, FightingAction, TimingConfig};

use crate::api::{Collaborators, FightArena, Result, RuntimeError, StateKind};
use crate::decision::TacticalMind;
use crate::turns::delay::{Delay, DelayHandle};

/// Everything the turn states read and mutate while ticking.
pub struct MindContext {
    pub(crate) fighter: Option<FighterId>,
    pub(crate) tactical: TacticalMind,
    pub(crate) services: Collaborators,
    pub(crate) timing: TimingConfig,
    input: Option<DecisionInput>,
    pending: Option<DelayHandle>,
    /// Techniques just performed, waiting for the receiving side's counters.
    counters_due: Option<Vec<FightingAction>>,
}

impl MindContext {
    pub fn new(
        fighter: Option<FighterId>,
        tactical: TacticalMind,
        services: Collaborators,
        timing: TimingConfig,
    ) -> Self {
        Self {
            fighter,
            tactical,
            services,
            timing,
            input: None,
            pending: None,
            counters_due: None,
        }
    }

    /// The controlled fighter's id.
    ///
    /// # Errors
    ///
    /// [`RuntimeError::NoControlledFighter`] naming `state` when the mind was
    /// built without a fighter.
    pub fn controlled_id(&self, state: StateKind) -> Result<FighterId> {
        self.fighter
            .ok_or(RuntimeError::NoControlledFighter { state })
    }

    pub fn controlled_fighter(&self, state: StateKind) -> Result<&Fighter> {
        let id = self.controlled_id(state)?;
        self.services
            .arena
            .fighter(id)
            .ok_or(RuntimeError::FighterNotFound(id))
    }

    pub fn controlled_fighter_mut(&mut self, state: StateKind) -> Result<&mut Fighter> {
        let id = self.controlled_id(state)?;
        self.services
            .arena
            .fighter_mut(id)
            .ok_or(RuntimeError::FighterNotFound(id))
    }

    pub fn arena(&self) -> &dyn FightArena {
        self.services.arena.as_ref()
    }

    pub fn arena_mut(&mut self) -> &mut dyn FightArena {
        self.services.arena.as_mut()
    }

    pub fn tactical(&self) -> &TacticalMind {
        &self.tactical
    }

    pub fn timing(&self) -> &TimingConfig {
        &self.timing
    }

    pub fn decision_input(&self) -> Option<&DecisionInput> {
        self.input.as_ref()
    }

    pub fn set_decision_input(&mut self, input: DecisionInput) {
        self.input = Some(input);
    }

    /// Hands the input to the deciding step; the next turn needs a new one.
    pub(crate) fn take_decision_input(&mut self) -> Result<DecisionInput> {
        self.input.take().ok_or(RuntimeError::MissingDecisionInput)
    }

    /// Starts a delay and remembers its handle so it can be cancelled from
    /// outside the state machine.
    pub(crate) fn start_delay(&mut self, duration: Duration) -> Delay {
        let delay = Delay::start(duration);
        self.pending = Some(delay.handle());
        delay
    }

    pub(crate) fn clear_pending(&mut self) {
        self.pending = None;
    }

    /// Handle of the delay the current state is waiting on, if any.
    pub fn pending_delay(&self) -> Option<&DelayHandle> {
        self.pending.as_ref()
    }

    pub(crate) fn schedule_counters(&mut self, performed: Vec<FightingAction>) {
        self.counters_due = Some(performed);
    }

    pub(crate) fn take_counters_due(&mut self) -> Option<Vec<FightingAction>> {
        self.counters_due.take()
    }
}
