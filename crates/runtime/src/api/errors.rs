//! Unified error types surfaced by the fighter AI runtime.
//!
//! Wraps failures from the decision engine, the state machine and the
//! reference data so callers can bubble them up with consistent context.
//! Every variant is a precondition violation: nothing here is retried, and
//! the scheduler driving the ticks decides what to do with the failure.
use std::fmt;

use fight_core::{CoreError, ErrorSeverity, FightError, FighterId};
use state_machine::MachineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Failures raised by [`crate::TacticalMind`] while picking actions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecisionError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("no active fighter in the fight")]
    NoActiveFighter,

    #[error("no inactive fighter to aim techniques at")]
    NoInactiveFighter,

    #[error("{fighter} has no technique proficiencies to build candidate actions from")]
    NoCandidateActions { fighter: FighterId },
}

impl FightError for DecisionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Core(err) => err.severity(),
            Self::NoActiveFighter | Self::NoInactiveFighter => ErrorSeverity::Fatal,
            Self::NoCandidateActions { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Core(err) => err.error_code(),
            Self::NoActiveFighter => "NO_ACTIVE_FIGHTER",
            Self::NoInactiveFighter => "NO_INACTIVE_FIGHTER",
            Self::NoCandidateActions { .. } => "NO_CANDIDATE_ACTIONS",
        }
    }
}

/// Failures raised while driving a fighter's turn cycle.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Decision(#[from] DecisionError),

    #[error(transparent)]
    Machine(#[from] MachineError),

    #[error("{state} requires a controlled fighter, none is set")]
    NoControlledFighter { state: StateKind },

    #[error("controlled {0} is not part of the fight")]
    FighterNotFound(FighterId),

    #[error("no decision input was provided for turn deciding")]
    MissingDecisionInput,

    #[error("{fighter} tried to decide while {active} holds the turn")]
    NotFightersTurn {
        fighter: FighterId,
        active: FighterId,
    },
}

impl From<CoreError> for RuntimeError {
    fn from(err: CoreError) -> Self {
        Self::Decision(DecisionError::Core(err))
    }
}

impl FightError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Decision(err) => err.severity(),
            Self::Machine(_) => ErrorSeverity::Validation,
            Self::NoControlledFighter { .. }
            | Self::FighterNotFound(_)
            | Self::MissingDecisionInput
            | Self::NotFightersTurn { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Decision(err) => err.error_code(),
            Self::Machine(MachineError::NoPreviousState) => "NO_PREVIOUS_STATE",
            Self::Machine(MachineError::ConsecutiveRevert) => "CONSECUTIVE_REVERT",
            Self::NoControlledFighter { .. } => "NO_CONTROLLED_FIGHTER",
            Self::FighterNotFound(_) => "FIGHTER_NOT_FOUND",
            Self::MissingDecisionInput => "MISSING_DECISION_INPUT",
            Self::NotFightersTurn { .. } => "NOT_FIGHTERS_TURN",
        }
    }
}

/// The phases of a fighter's turn cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StateKind {
    /// Placeholder before the machine is started.
    None,
    Observing,
    Strategizing,
    Deciding,
    Performing,
}

impl StateKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StateKind::None => "none",
            StateKind::Observing => "observing",
            StateKind::Strategizing => "strategizing",
            StateKind::Deciding => "deciding",
            StateKind::Performing => "performing",
        }
    }

    /// Maps a state name back to its kind.
    pub fn from_name(name: &str) -> Option<Self> {
        [
            StateKind::None,
            StateKind::Observing,
            StateKind::Strategizing,
            StateKind::Deciding,
            StateKind::Performing,
        ]
        .into_iter()
        .find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_keep_their_classification() {
        let err: RuntimeError = CoreError::EmptyConditions.into();
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.error_code(), "EMPTY_CONDITIONS");
        assert_eq!(err.to_string(), "condition list is empty");
    }

    #[test]
    fn missing_collaborators_are_fatal_and_descriptive() {
        let err = RuntimeError::NoControlledFighter {
            state: StateKind::Deciding,
        };
        assert!(err.severity().is_fatal());
        assert_eq!(err.to_string(), "deciding requires a controlled fighter, none is set");
    }

    #[test]
    fn state_names_round_trip() {
        assert_eq!(StateKind::from_name("performing"), Some(StateKind::Performing));
        assert_eq!(StateKind::from_name("sleeping"), None);
    }
}
