//! Collaborators the fighter AI calls into.
//!
//! The AI decides; everything else about the fight (who is on the field,
//! whose turn it is, how damage accrues, how techniques are animated) belongs
//! to the host game. The host plugs those concerns in through the traits
//! below, and the turn states call them at fixed points of the cycle.
use std::time::Duration;

use fight_core::{CounterAction, Fighter, FighterId, FightingAction, Turn};

/// The fight as seen by the AI: fighters, turn ownership and the queue of
/// techniques waiting to be resolved.
pub trait FightArena {
    /// All fighters taking part, in a stable order.
    fn fighters(&self) -> &[Fighter];

    fn fighter(&self, id: FighterId) -> Option<&Fighter> {
        self.fighters().iter().find(|fighter| fighter.id == id)
    }

    fn fighter_mut(&mut self, id: FighterId) -> Option<&mut Fighter>;

    /// The fighter whose turn it is.
    fn active_fighter(&self) -> Option<&Fighter>;

    /// The fighter waiting for its turn (the one techniques are aimed at).
    fn inactive_fighter(&self) -> Option<&Fighter>;

    /// Current turn number, starting at 1.
    fn turn(&self) -> Turn;

    /// Appends a technique to the active fighter's queue.
    fn queue_action(&mut self, action: FightingAction);

    /// Techniques queued for the active fighter this turn.
    fn fighting_actions(&self) -> &[FightingAction];

    /// Hands the turn to the other fighter and clears the queue.
    fn set_next_turn(&mut self);
}

/// Recomputes the aggregate fight status (damage, conditions) after a turn.
pub trait StatusUpdater {
    fn update_status(&mut self, arena: &mut dyn FightArena);
}

/// Plays the queued techniques back (animation, sound).
pub trait ActionPlayback {
    /// Starts playback and returns how long it takes.
    fn play(&mut self, actions: &[FightingAction]) -> Duration;
}

/// Chooses how the receiving fighter responds to incoming techniques.
pub trait TechniqueActionPicker {
    fn pick_actions(&mut self, incoming: &[FightingAction], arena: &dyn FightArena) -> Vec<CounterAction>;
}

/// Performs counter techniques. Fire-and-forget: the AI never observes the
/// outcome.
pub trait TechniquePerformer {
    fn perform_techniques(&mut self, actions: Vec<CounterAction>);
}

/// The collaborators one fighter's mind needs, bundled.
pub struct Collaborators {
    pub arena: Box<dyn FightArena>,
    pub status: Box<dyn StatusUpdater>,
    pub playback: Box<dyn ActionPlayback>,
    pub counter_picker: Box<dyn TechniqueActionPicker>,
    pub counter_performer: Box<dyn TechniquePerformer>,
}

impl Collaborators {
    /// Bundles an arena with the no-op services.
    pub fn with_arena(arena: impl FightArena + 'static) -> Self {
        Self {
            arena: Box::new(arena),
            status: Box::new(NoopServices),
            playback: Box::new(NoopServices),
            counter_picker: Box::new(NoopServices),
            counter_performer: Box::new(NoopServices),
        }
    }

    #[must_use]
    pub fn status(mut self, status: impl StatusUpdater + 'static) -> Self {
        self.status = Box::new(status);
        self
    }

    #[must_use]
    pub fn playback(mut self, playback: impl ActionPlayback + 'static) -> Self {
        self.playback = Box::new(playback);
        self
    }

    #[must_use]
    pub fn counter_picker(mut self, picker: impl TechniqueActionPicker + 'static) -> Self {
        self.counter_picker = Box::new(picker);
        self
    }

    #[must_use]
    pub fn counter_performer(mut self, performer: impl TechniquePerformer + 'static) -> Self {
        self.counter_performer = Box::new(performer);
        self
    }
}

/// Services that do nothing: instant playback, no status changes, no
/// counters. Useful for headless simulations and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopServices;

impl StatusUpdater for NoopServices {
    fn update_status(&mut self, _arena: &mut dyn FightArena) {}
}

impl ActionPlayback for NoopServices {
    fn play(&mut self, _actions: &[FightingAction]) -> Duration {
        Duration::ZERO
    }
}

impl TechniqueActionPicker for NoopServices {
    fn pick_actions(&mut self, _incoming: &[FightingAction], _arena: &dyn FightArena) -> Vec<CounterAction> {
        Vec::new()
    }
}

impl TechniquePerformer for NoopServices {
    fn perform_techniques(&mut self, _actions: Vec<CounterAction>) {}
}
