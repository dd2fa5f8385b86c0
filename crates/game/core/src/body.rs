//! Body parts and the per-fighter body-part set.
//!
//! Damage simulation lives outside the fighter AI; the AI only reads the
//! damage percentage each part currently carries.

use crate::error::CoreError;

/// Anatomical slot a technique is executed with or aimed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodyPartKind {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPartKind {
    /// Returns true for punches and other arm techniques.
    pub const fn is_arm(self) -> bool {
        matches!(self, Self::LeftArm | Self::RightArm)
    }

    /// Returns true for kicks and other leg techniques.
    pub const fn is_leg(self) -> bool {
        matches!(self, Self::LeftLeg | Self::RightLeg)
    }
}

/// A single body part with its accumulated damage.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyPart {
    pub kind: BodyPartKind,
    /// Damage taken, in percent (0 = intact, 100 = destroyed).
    #[cfg_attr(feature = "serde", serde(default))]
    pub damage_percentage: f32,
}

impl BodyPart {
    pub const fn new(kind: BodyPartKind) -> Self {
        Self {
            kind,
            damage_percentage: 0.0,
        }
    }

    #[must_use]
    pub const fn with_damage(mut self, damage_percentage: f32) -> Self {
        self.damage_percentage = damage_percentage;
        self
    }
}

/// The body parts belonging to one fighter.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BodyParts(Vec<BodyPart>);

impl BodyParts {
    pub fn new(parts: Vec<BodyPart>) -> Self {
        Self(parts)
    }

    /// A full, undamaged body.
    pub fn intact() -> Self {
        use strum::IntoEnumIterator;
        Self(BodyPartKind::iter().map(BodyPart::new).collect())
    }

    /// Finds the first body part of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::BodyPartNotFound`] when the set has no such part.
    pub fn find_by_kind(&self, kind: BodyPartKind) -> Result<&BodyPart, CoreError> {
        self.0
            .iter()
            .find(|part| part.kind == kind)
            .ok_or(CoreError::BodyPartNotFound { kind })
    }

    /// Mutable variant of [`BodyParts::find_by_kind`].
    pub fn find_by_kind_mut(&mut self, kind: BodyPartKind) -> Result<&mut BodyPart, CoreError> {
        self.0
            .iter_mut()
            .find(|part| part.kind == kind)
            .ok_or(CoreError::BodyPartNotFound { kind })
    }

    pub fn iter(&self) -> impl Iterator<Item = &BodyPart> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
