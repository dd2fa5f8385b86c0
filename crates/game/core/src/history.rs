//! Append-only log of the actions an AI fighter has chosen.

use crate::action::{Action, Turn, TurnAction};
use crate::error::CoreError;

/// Ordered log of `(turn, action)` pairs for one fighter over a whole fight.
///
/// Entries are only ever appended, in turn order; recency queries depend on
/// insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionHistory {
    entries: Vec<TurnAction>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chosen action.
    ///
    /// # Errors
    ///
    /// [`CoreError::HistoryOutOfOrder`] if `turn` precedes the last recorded
    /// turn; nothing is appended.
    pub fn record(&mut self, turn: Turn, action: Action) -> Result<(), CoreError> {
        self.check_turn(turn)?;
        self.entries.push(TurnAction::new(turn, action));
        Ok(())
    }

    /// Fails if an entry for `turn` could not be appended in order.
    pub fn check_turn(&self, turn: Turn) -> Result<(), CoreError> {
        match self.entries.last() {
            Some(last) if last.turn > turn => Err(CoreError::HistoryOutOfOrder {
                last: last.turn,
                turn,
            }),
            _ => Ok(()),
        }
    }

    /// Drops every entry past the first `len`.
    ///
    /// Only meant for abandoning a turn that failed part-way; committed
    /// turns are never rewritten.
    pub fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    /// Counts the turns since `action` was last chosen.
    ///
    /// The log is scanned from the newest entry to the oldest. The first
    /// scanned entry counts as one elapsed turn (the turn being decided is
    /// not logged yet); each later entry whose turn differs from the entry
    /// scanned before it adds one more. The scan stops at the first entry
    /// identical to `action`.
    ///
    /// A found action yields at least `1`; an action that was never chosen
    /// yields `0`.
    pub fn turns_since_last_use(&self, action: &Action) -> u32 {
        let mut previous_turn: Option<Turn> = None;
        let mut turns = 0;

        for entry in self.entries.iter().rev() {
            if previous_turn != Some(entry.turn) {
                turns += 1;
            }
            if action.is_identical_to(&entry.action) {
                return turns;
            }
            previous_turn = Some(entry.turn);
        }

        0
    }

    /// Returns true if `action` was ever chosen.
    pub fn contains(&self, action: &Action) -> bool {
        self.entries.iter().any(|entry| action.is_identical_to(&entry.action))
    }

    /// Entries chosen on `turn`, oldest first.
    pub fn for_turn(&self, turn: Turn) -> impl Iterator<Item = &TurnAction> {
        self.entries.iter().filter(move |entry| entry.turn == turn)
    }

    pub fn last(&self) -> Option<&TurnAction> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TurnAction> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyPartKind;
    use crate::technique::{Technique, TechniqueProficiency};

    fn action(name: &str) -> Action {
        let technique = Technique::new(name, BodyPartKind::RightArm, vec![BodyPartKind::Head]);
        Action::technique(TechniqueProficiency::new(technique, 0.5).unwrap())
    }

    #[test]
    fn never_used_is_zero() {
        let mut history = ActionHistory::new();
        assert_eq!(history.turns_since_last_use(&action("jab")), 0);

        history.record(1, action("cross")).unwrap();
        history.record(2, action("hook")).unwrap();
        assert_eq!(history.turns_since_last_use(&action("jab")), 0);
        assert!(!history.contains(&action("jab")));
    }

    #[test]
    fn most_recent_entry_counts_one_turn() {
        let mut history = ActionHistory::new();
        history.record(1, action("cross")).unwrap();
        history.record(2, action("jab")).unwrap();
        assert_eq!(history.turns_since_last_use(&action("jab")), 1);
    }

    #[test]
    fn counts_turn_boundaries_not_entries() {
        let mut history = ActionHistory::new();
        history.record(1, action("jab")).unwrap();
        history.record(2, action("cross")).unwrap();
        history.record(2, action("hook")).unwrap();
        history.record(3, action("uppercut")).unwrap();
        history.record(3, action("cross")).unwrap();

        // Scan: turn 3 (1), turn 3 (1), turn 2 (2), turn 2 (2), turn 1 (3)
        assert_eq!(history.turns_since_last_use(&action("jab")), 3);
        assert_eq!(history.turns_since_last_use(&action("hook")), 2);
        assert_eq!(history.turns_since_last_use(&action("uppercut")), 1);
    }

    #[test]
    fn stops_at_most_recent_use() {
        let mut history = ActionHistory::new();
        history.record(1, action("jab")).unwrap();
        history.record(2, action("cross")).unwrap();
        history.record(3, action("jab")).unwrap();
        history.record(4, action("cross")).unwrap();
        assert_eq!(history.turns_since_last_use(&action("jab")), 2);
    }

    #[test]
    fn for_turn_filters_entries() {
        let mut history = ActionHistory::new();
        history.record(1, action("jab")).unwrap();
        history.record(2, action("cross")).unwrap();
        history.record(2, action("hook")).unwrap();

        let names: Vec<_> = history.for_turn(2).map(|e| e.action.name().to_string()).collect();
        assert_eq!(names, ["cross", "hook"]);
        assert_eq!(history.last().map(|e| e.turn), Some(2));
    }

    #[test]
    fn turns_never_go_backwards() {
        let mut history = ActionHistory::new();
        history.record(3, action("jab")).unwrap();
        history.record(3, action("cross")).unwrap();

        assert_eq!(
            history.record(2, action("hook")),
            Err(CoreError::HistoryOutOfOrder { last: 3, turn: 2 })
        );
        assert_eq!(history.len(), 2);
        assert!(history.check_turn(4).is_ok());
    }

    #[test]
    fn truncate_abandons_trailing_entries() {
        let mut history = ActionHistory::new();
        history.record(1, action("jab")).unwrap();
        history.record(2, action("cross")).unwrap();
        history.record(2, action("hook")).unwrap();

        history.truncate(1);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().map(|entry| entry.turn), Some(1));
    }
}
