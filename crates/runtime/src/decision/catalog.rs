//! Candidate actions available to a fighter on one turn.

use fight_core::{Action, Fighter};

use crate::api::DecisionError;

/// One candidate [`Action`] per technique proficiency, in proficiency order.
///
/// Built fresh for every Deciding phase and dropped once the picks are made.
/// Picked actions stay in the catalog: the same technique may be chosen more
/// than once when a fighter acts several times per turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCatalog {
    actions: Vec<Action>,
}

impl ActionCatalog {
    /// Builds the catalog from the fighter's proficiencies.
    ///
    /// # Errors
    ///
    /// Returns [`DecisionError::NoCandidateActions`] when the fighter knows no
    /// technique.
    pub fn for_fighter(fighter: &Fighter) -> Result<Self, DecisionError> {
        if fighter.proficiencies.is_empty() {
            return Err(DecisionError::NoCandidateActions {
                fighter: fighter.id,
            });
        }

        let actions = fighter
            .proficiencies
            .iter()
            .cloned()
            .map(Action::technique)
            .collect();

        Ok(Self { actions })
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
