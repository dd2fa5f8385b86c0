//! Common error infrastructure for fight-core.
//!
//! Every error raised by the fighter AI is a precondition or input violation:
//! nothing here is retried. The [`ErrorSeverity`] classification lets callers
//! tell malformed input apart from a broken fight setup when they log or
//! surface a failure.

use crate::action::Turn;
use crate::body::BodyPartKind;
use crate::condition::ConditionKind;

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: Invalid input that should be rejected without retry
/// - **Fatal**: A required reference is missing; the fight cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: empty condition list, proficiency outside [0, 1]
    Validation,

    /// Missing collaborator or reference data.
    ///
    /// Examples: no controlled fighter, body part not found
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error means the fight setup is broken.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all fighter AI errors.
///
/// Implemented by the error enums of this crate and of the runtime so
/// logging code can classify failures uniformly.
pub trait FightError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Errors raised while validating or querying fight reference data.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("body part {kind} not found in body-part set")]
    BodyPartNotFound { kind: BodyPartKind },

    #[error("technique `{technique}` declares no target body parts")]
    NoTargetBodyParts { technique: String },

    #[error("condition list is empty")]
    EmptyConditions,

    #[error("{kind} condition not found")]
    ConditionNotFound { kind: ConditionKind },

    #[error("positional condition list has {found} entries, expected at least {expected}")]
    ConditionListTooShort { expected: usize, found: usize },

    #[error("proficiency {value} for technique `{technique}` is outside [0, 1]")]
    ProficiencyOutOfRange { technique: String, value: f32 },

    #[error("fighting style rank list is empty")]
    NoFightingStyleRanks,

    #[error("cannot record turn {turn} after turn {last}")]
    HistoryOutOfOrder { last: Turn, turn: Turn },
}

impl FightError for CoreError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::BodyPartNotFound { .. }
            | Self::ConditionNotFound { .. }
            | Self::NoFightingStyleRanks
            | Self::HistoryOutOfOrder { .. } => ErrorSeverity::Fatal,
            Self::NoTargetBodyParts { .. }
            | Self::EmptyConditions
            | Self::ConditionListTooShort { .. }
            | Self::ProficiencyOutOfRange { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BodyPartNotFound { .. } => "BODY_PART_NOT_FOUND",
            Self::NoTargetBodyParts { .. } => "NO_TARGET_BODY_PARTS",
            Self::EmptyConditions => "EMPTY_CONDITIONS",
            Self::ConditionNotFound { .. } => "CONDITION_NOT_FOUND",
            Self::ConditionListTooShort { .. } => "CONDITION_LIST_TOO_SHORT",
            Self::ProficiencyOutOfRange { .. } => "PROFICIENCY_OUT_OF_RANGE",
            Self::NoFightingStyleRanks => "NO_FIGHTING_STYLE_RANKS",
            Self::HistoryOutOfOrder { .. } => "HISTORY_OUT_OF_ORDER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_references_are_fatal() {
        let err = CoreError::BodyPartNotFound {
            kind: BodyPartKind::LeftArm,
        };
        assert!(err.severity().is_fatal());
        assert_eq!(err.error_code(), "BODY_PART_NOT_FOUND");
        assert_eq!(err.to_string(), "body part left-arm not found in body-part set");
    }

    #[test]
    fn malformed_input_is_validation() {
        let err = CoreError::ConditionListTooShort {
            expected: 4,
            found: 2,
        };
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(err.severity().as_str(), "validation");
    }
}
