//! Fighter AI runtime: turn state machine and utility decision engine.
//!
//! This crate drives an AI-controlled fighter through a turn-based fight.
//! [`FightersMind`] sequences the fighter through observing, strategizing,
//! deciding and performing; at the deciding step it asks [`TacticalMind`]
//! which techniques to use this turn.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the error types and the collaborator traits the host
//!   game implements
//! - [`decision`] hosts the decision engine, its candidate catalog and the
//!   scoring factors
//! - [`turns`] hosts the turn states, their delays and the mind driving them
//! - [`arena`] provides an in-memory fight for simulations and tests
pub mod api;
pub mod arena;
pub mod decision;
pub mod turns;

pub use api::{
    ActionPlayback, Collaborators, DecisionError, FightArena, NoopServices, Result, RuntimeError,
    StateKind, StatusUpdater, TechniqueActionPicker, TechniquePerformer,
};
pub use arena::{Arena, FightState};
pub use decision::{ActionCatalog, Appraisal, Factor, Factors, ScoreBreakdown, TacticalMind};
pub use turns::{
    Completion, Deciding, Delay, DelayHandle, FightersMind, MindContext, Observing, Performing,
    Strategizing,
};
