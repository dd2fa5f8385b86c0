//! The AI fighter's turn cycle.
//!
//! [`FightersMind`] drives one AI-controlled fighter through
//!
//! ```text
//! Observing ──(stops observing)──▶ Strategizing ──(delay)──▶ Deciding
//!     ▲                                                         │
//!     └────(playback + switch delay, turn passes)── Performing ◀┘
//! ```
//!
//! The machine is ticked by an external scheduler: call
//! [`FightersMind::update`] once per frame, or let
//! [`FightersMind::run_until`] tick it on a tokio interval. Delays are
//! polled, never awaited, so a tick always returns promptly.

mod context;
mod deciding;
pub mod delay;
mod observing;
mod performing;
mod strategizing;

pub use context::MindContext;
pub use deciding::Deciding;
pub use delay::{Completion, Delay, DelayHandle};
pub use observing::Observing;
pub use performing::Performing;
pub use strategizing::Strategizing;

use fight_core::{DecisionInput, FighterId, MindConfig, TimingConfig};
use state_machine::{State, StateMachine, Transition};
use tokio::time::{self, MissedTickBehavior};

use crate::api::{Collaborators, FightArena, Result, RuntimeError, StateKind};
use crate::decision::TacticalMind;

/// A boxed turn state.
pub type MindState = Box<dyn State<MindContext, RuntimeError>>;
/// Transition returned by turn states.
pub type MindTransition = Transition<MindContext, RuntimeError>;

/// One AI fighter's mind: its turn state machine plus everything the states
/// need.
pub struct FightersMind {
    machine: StateMachine<MindContext, RuntimeError>,
    ctx: MindContext,
}

impl FightersMind {
    /// Creates a mind controlling `fighter`, with an entropy-seeded engine.
    pub fn new(fighter: FighterId, config: &MindConfig, services: Collaborators) -> Self {
        Self::with_tactical(
            Some(fighter),
            TacticalMind::new(config.scoring.clone()),
            config.timing.clone(),
            services,
        )
    }

    /// Creates a mind around an existing engine.
    ///
    /// `fighter` may be `None`; every state then refuses to be entered with
    /// [`RuntimeError::NoControlledFighter`], so [`Self::start`] fails.
    pub fn with_tactical(
        fighter: Option<FighterId>,
        tactical: TacticalMind,
        timing: TimingConfig,
        services: Collaborators,
    ) -> Self {
        Self {
            machine: StateMachine::new(),
            ctx: MindContext::new(fighter, tactical, services, timing),
        }
    }

    /// Puts the machine into [`Observing`].
    pub fn start(&mut self) -> Result<()> {
        tracing::info!("Starting fighter's mind for {:?}", self.ctx.fighter);
        self.change_state(Box::new(Observing::new()))
    }

    /// Runs one scheduler tick.
    ///
    /// Counters owed for techniques performed during this tick are picked
    /// and performed after the machine has settled.
    pub fn update(&mut self) -> Result<()> {
        self.machine.update(&mut self.ctx)?;
        self.dispatch_counters();
        Ok(())
    }

    pub fn change_state(&mut self, state: MindState) -> Result<()> {
        self.machine.change_state(state, &mut self.ctx)
    }

    /// Re-enters the previous state. One level only.
    ///
    /// # Errors
    ///
    /// [`state_machine::MachineError`] when there is no previous state or the
    /// last switch already was a revert.
    pub fn revert_to_previous_state(&mut self) -> Result<()> {
        self.machine.revert_to_previous_state(&mut self.ctx)
    }

    pub fn set_global_state(&mut self, state: Option<MindState>) {
        self.machine.set_global_state(state);
    }

    /// The current phase, or [`StateKind::None`] before [`Self::start`].
    pub fn state(&self) -> StateKind {
        self.machine
            .current_state()
            .and_then(StateKind::from_name)
            .unwrap_or(StateKind::None)
    }

    pub fn previous_state(&self) -> Option<StateKind> {
        self.machine.previous_state().and_then(StateKind::from_name)
    }

    /// Sets the input the next Deciding phase consumes.
    pub fn set_decision_input(&mut self, input: DecisionInput) {
        self.ctx.set_decision_input(input);
    }

    /// Stops the delay the current state is waiting on.
    ///
    /// # Returns
    ///
    /// `false` when no delay was in flight.
    pub fn cancel_pending_delay(&mut self) -> bool {
        match self.ctx.pending_delay() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn fighter(&self) -> Option<FighterId> {
        self.ctx.fighter
    }

    pub fn context(&self) -> &MindContext {
        &self.ctx
    }

    pub fn arena(&self) -> &dyn FightArena {
        self.ctx.arena()
    }

    pub fn arena_mut(&mut self) -> &mut dyn FightArena {
        self.ctx.arena_mut()
    }

    pub fn tactical(&self) -> &TacticalMind {
        self.ctx.tactical()
    }

    /// Ticks the machine on a tokio interval until `done` holds.
    ///
    /// # Arguments
    ///
    /// * `done` - Checked after every tick
    /// * `max_ticks` - Upper bound on the number of ticks
    ///
    /// # Returns
    ///
    /// `true` if `done` held within the budget.
    pub async fn run_until<F>(&mut self, mut done: F, max_ticks: usize) -> Result<bool>
    where
        F: FnMut(&Self) -> bool,
    {
        let mut interval = time::interval(self.ctx.timing.tick_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        for _ in 0..max_ticks {
            interval.tick().await;
            self.update()?;
            if done(self) {
                return Ok(true);
            }
        }

        tracing::warn!(
            "Tick budget of {} spent while in state {}",
            max_ticks,
            self.state()
        );
        Ok(false)
    }

    fn dispatch_counters(&mut self) {
        let Some(incoming) = self.ctx.take_counters_due() else {
            return;
        };

        let services = &mut self.ctx.services;
        let counters = services
            .counter_picker
            .pick_actions(&incoming, services.arena.as_ref());

        tracing::debug!(
            "Dispatching {} counter(s) to {} incoming technique(s)",
            counters.len(),
            incoming.len()
        );
        services.counter_performer.perform_techniques(counters);
    }
}
