//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate:
//! the error types and the collaborator traits the host game implements.

pub mod errors;
pub mod services;

pub use errors::{DecisionError, Result, RuntimeError, StateKind};
pub use services::{
    ActionPlayback, Collaborators, FightArena, NoopServices, StatusUpdater, TechniqueActionPicker,
    TechniquePerformer,
};
