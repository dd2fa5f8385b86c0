//! Fighter conditions keyed by kind.
//!
//! The fight status system publishes conditions as an ordered list where the
//! physical (endurance) condition sits at position 3. [`FighterConditions`]
//! converts that positional contract into a keyed map once, at the boundary,
//! so scoring code never indexes by position.

use std::collections::BTreeMap;

use crate::error::CoreError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConditionKind {
    Mental,
    Emotional,
    Health,
    /// Endurance; drives the physical-condition factor.
    Physical,
}

impl ConditionKind {
    /// Order in which the fight status system publishes conditions.
    pub const POSITIONAL_ORDER: [ConditionKind; 4] = [
        ConditionKind::Mental,
        ConditionKind::Emotional,
        ConditionKind::Health,
        ConditionKind::Physical,
    ];
}

/// Live condition values of one fighter.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FighterConditions(BTreeMap<ConditionKind, f32>);

impl FighterConditions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Converts a positional condition list into a keyed map.
    ///
    /// # Errors
    ///
    /// - [`CoreError::EmptyConditions`] if `values` is empty
    /// - [`CoreError::ConditionListTooShort`] if the physical slot is absent
    pub fn from_positional(values: &[f32]) -> Result<Self, CoreError> {
        if values.is_empty() {
            return Err(CoreError::EmptyConditions);
        }
        let expected = ConditionKind::POSITIONAL_ORDER.len();
        if values.len() < expected {
            return Err(CoreError::ConditionListTooShort {
                expected,
                found: values.len(),
            });
        }

        Ok(Self(
            ConditionKind::POSITIONAL_ORDER
                .iter()
                .copied()
                .zip(values.iter().copied())
                .collect(),
        ))
    }

    #[must_use]
    pub fn with(mut self, kind: ConditionKind, value: f32) -> Self {
        self.0.insert(kind, value);
        self
    }

    pub fn set(&mut self, kind: ConditionKind, value: f32) {
        self.0.insert(kind, value);
    }

    /// Looks up a condition value.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyConditions`] when no condition is present at all,
    /// [`CoreError::ConditionNotFound`] when only this kind is missing.
    pub fn get(&self, kind: ConditionKind) -> Result<f32, CoreError> {
        if self.0.is_empty() {
            return Err(CoreError::EmptyConditions);
        }
        self.0
            .get(&kind)
            .copied()
            .ok_or(CoreError::ConditionNotFound { kind })
    }

    /// Endurance, read by the physical-condition factor.
    pub fn endurance(&self) -> Result<f32, CoreError> {
        self.get(ConditionKind::Physical)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_list_maps_physical_from_slot_three() {
        let conditions = FighterConditions::from_positional(&[1.0, 2.0, 3.0, 7.5]).unwrap();
        assert_eq!(conditions.endurance(), Ok(7.5));
        assert_eq!(conditions.get(ConditionKind::Mental), Ok(1.0));
    }

    #[test]
    fn positional_list_must_reach_physical_slot() {
        assert_eq!(
            FighterConditions::from_positional(&[]),
            Err(CoreError::EmptyConditions)
        );
        assert_eq!(
            FighterConditions::from_positional(&[1.0, 2.0]),
            Err(CoreError::ConditionListTooShort {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn missing_kind_is_distinct_from_empty() {
        assert_eq!(
            FighterConditions::new().endurance(),
            Err(CoreError::EmptyConditions)
        );

        let conditions = FighterConditions::new().with(ConditionKind::Health, 10.0);
        assert_eq!(
            conditions.endurance(),
            Err(CoreError::ConditionNotFound {
                kind: ConditionKind::Physical
            })
        );
    }
}
