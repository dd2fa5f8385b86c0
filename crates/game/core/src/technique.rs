//! Techniques and per-character technique proficiencies.

use crate::body::BodyPartKind;
use crate::error::CoreError;

/// A fighting technique: what executes it and what it is aimed at.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Technique {
    pub name: String,
    /// Body part the technique is executed with.
    pub body_part: BodyPartKind,
    /// Body parts the technique can land on, in preference order.
    pub targets: Vec<BodyPartKind>,
}

impl Technique {
    pub fn new(name: impl Into<String>, body_part: BodyPartKind, targets: Vec<BodyPartKind>) -> Self {
        Self {
            name: name.into(),
            body_part,
            targets,
        }
    }

    /// The target used when the technique is queued.
    ///
    /// Only the first declared target is ever aimed at.
    pub fn primary_target(&self) -> Result<BodyPartKind, CoreError> {
        self.targets
            .first()
            .copied()
            .ok_or_else(|| CoreError::NoTargetBodyParts {
                technique: self.name.clone(),
            })
    }
}

/// How well a character performs one technique.
///
/// Reference data: the fighter AI only reads it. Two proficiencies are the
/// same proficiency when every field matches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechniqueProficiency {
    pub technique: Technique,
    /// Skill level in [0, 1].
    pub proficiency: f32,
}

impl TechniqueProficiency {
    /// Creates a proficiency, rejecting values outside [0, 1].
    pub fn new(technique: Technique, proficiency: f32) -> Result<Self, CoreError> {
        if !(0.0..=1.0).contains(&proficiency) {
            return Err(CoreError::ProficiencyOutOfRange {
                technique: technique.name,
                value: proficiency,
            });
        }
        Ok(Self {
            technique,
            proficiency,
        })
    }

    /// Body part that executes the technique.
    pub fn body_part(&self) -> BodyPartKind {
        self.technique.body_part
    }

    pub fn name(&self) -> &str {
        &self.technique.name
    }
}
