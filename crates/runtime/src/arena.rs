//! In-memory fight arena and roster queries.
//!
//! [`Arena`] is a complete [`FightArena`] for headless simulations and tests:
//! fighters take turns in roster order and the queue is cleared whenever the
//! turn passes. Observing flags follow turn ownership: the fighter holding
//! the turn is not observing, everyone else is. Host games with their own
//! fight manager implement [`FightArena`] directly instead.

use fight_core::{Fighter, FighterId, FightingAction, Turn};

use crate::api::FightArena;

/// Fighters, turn ownership and the technique queue of one fight.
#[derive(Debug, Clone)]
pub struct Arena {
    fighters: Vec<Fighter>,
    active: usize,
    turn: Turn,
    queue: Vec<FightingAction>,
}

impl Arena {
    /// Creates an arena where the first fighter holds turn 1.
    pub fn new(fighters: Vec<Fighter>) -> Self {
        let mut arena = Self {
            fighters,
            active: 0,
            turn: 1,
            queue: Vec::new(),
        };
        arena.sync_observers();
        arena
    }

    /// Hands turn 1 to the given fighter instead of the first one.
    #[must_use]
    pub fn starting_with(mut self, id: FighterId) -> Self {
        if let Some(index) = self.fighters.iter().position(|fighter| fighter.id == id) {
            self.active = index;
            self.sync_observers();
        }
        self
    }

    fn sync_observers(&mut self) {
        let active = self.active;
        for (index, fighter) in self.fighters.iter_mut().enumerate() {
            fighter.observing_opponent = index != active;
        }
    }

    fn inactive_index(&self) -> Option<usize> {
        match self.fighters.len() {
            0 | 1 => None,
            len => Some((self.active + 1) % len),
        }
    }
}

impl FightArena for Arena {
    fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    fn fighter_mut(&mut self, id: FighterId) -> Option<&mut Fighter> {
        self.fighters.iter_mut().find(|fighter| fighter.id == id)
    }

    fn active_fighter(&self) -> Option<&Fighter> {
        self.fighters.get(self.active)
    }

    fn inactive_fighter(&self) -> Option<&Fighter> {
        self.inactive_index().and_then(|index| self.fighters.get(index))
    }

    fn turn(&self) -> Turn {
        self.turn
    }

    fn queue_action(&mut self, action: FightingAction) {
        self.queue.push(action);
    }

    fn fighting_actions(&self) -> &[FightingAction] {
        &self.queue
    }

    fn set_next_turn(&mut self) {
        if let Some(next) = self.inactive_index() {
            self.active = next;
        }
        self.sync_observers();
        self.turn += 1;
        self.queue.clear();

        tracing::debug!(
            "Turn {} now held by {:?}",
            self.turn,
            self.active_fighter().map(|fighter| fighter.id)
        );
    }
}

/// Role-based roster queries over any arena.
pub struct FightState<'a> {
    arena: &'a dyn FightArena,
}

impl<'a> FightState<'a> {
    pub fn new(arena: &'a dyn FightArena) -> Self {
        Self { arena }
    }

    /// The fighter controlled by the human player, if present.
    pub fn main_character(&self) -> Option<&'a Fighter> {
        self.arena.fighters().iter().find(|fighter| fighter.is_player())
    }

    /// Every AI-controlled fighter, in roster order.
    pub fn opponents(&self) -> Vec<&'a Fighter> {
        self.arena
            .fighters()
            .iter()
            .filter(|fighter| fighter.is_opponent())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::{BodyPartKind, FighterRole, Technique};

    fn roster() -> Vec<Fighter> {
        vec![
            Fighter::new(FighterId(0), "Player", FighterRole::Player),
            Fighter::new(FighterId(1), "Opponent", FighterRole::Opponent),
        ]
    }

    fn queued(actor: FighterId, target: FighterId) -> FightingAction {
        FightingAction {
            actor,
            target,
            attacker_body_part: BodyPartKind::RightArm,
            target_body_part: BodyPartKind::Head,
            technique: Technique::new("cross", BodyPartKind::RightArm, vec![BodyPartKind::Head]),
        }
    }

    #[test]
    fn turns_alternate_and_clear_queue() {
        let mut arena = Arena::new(roster());
        assert_eq!(arena.turn(), 1);
        assert_eq!(arena.active_fighter().map(|f| f.id), Some(FighterId(0)));
        assert_eq!(arena.inactive_fighter().map(|f| f.id), Some(FighterId(1)));

        arena.queue_action(queued(FighterId(0), FighterId(1)));
        assert_eq!(arena.fighting_actions().len(), 1);

        arena.set_next_turn();
        assert_eq!(arena.turn(), 2);
        assert_eq!(arena.active_fighter().map(|f| f.id), Some(FighterId(1)));
        assert_eq!(arena.inactive_fighter().map(|f| f.id), Some(FighterId(0)));
        assert!(arena.fighting_actions().is_empty());
    }

    #[test]
    fn observing_follows_turn_ownership() {
        let mut arena = Arena::new(roster());
        let observing = |arena: &Arena| {
            arena
                .fighters()
                .iter()
                .map(|f| f.observing_opponent)
                .collect::<Vec<_>>()
        };
        assert_eq!(observing(&arena), [false, true]);

        arena.set_next_turn();
        assert_eq!(observing(&arena), [true, false]);
    }

    #[test]
    fn starting_fighter_can_be_chosen() {
        let arena = Arena::new(roster()).starting_with(FighterId(1));
        assert_eq!(arena.active_fighter().map(|f| f.id), Some(FighterId(1)));
    }

    #[test]
    fn lone_fighter_has_no_inactive_side() {
        let arena = Arena::new(vec![Fighter::new(FighterId(7), "Solo", FighterRole::Opponent)]);
        assert!(arena.inactive_fighter().is_none());
    }

    #[test]
    fn roster_queries_use_role_tag() {
        let mut fighters = roster();
        fighters.push(Fighter::new(FighterId(2), "Second", FighterRole::Opponent));
        let arena = Arena::new(fighters);
        let state = FightState::new(&arena);

        assert_eq!(state.main_character().map(|f| f.id), Some(FighterId(0)));
        let opponents: Vec<_> = state.opponents().iter().map(|f| f.id).collect();
        assert_eq!(opponents, [FighterId(1), FighterId(2)]);
    }
}
