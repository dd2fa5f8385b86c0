//! A scripted fight between the roster's player and its first opponent.
//!
//! The opponent is driven by a [`FightersMind`] ticking on the tokio clock.
//! The player's turns are played instantly by a second [`TacticalMind`]
//! standing in for a human.
use std::time::Duration;

use anyhow::{Context, Result};
use fight_content::Roster;
use fight_core::{FighterId, MindConfig, Turn, TurnAction};
use fight_runtime::{Arena, Collaborators, FightState, FightersMind, TacticalMind};

use crate::config::SimConfig;
use crate::console::ConsoleServices;

/// Upper bound on scheduler ticks one opponent turn may take.
const TURN_TICK_BUDGET: usize = 100_000;

/// What happened during a simulated fight.
#[derive(Debug)]
pub struct FightSummary {
    pub turns_played: Turn,
    pub opponent_picks: Vec<TurnAction>,
}

pub struct Simulation {
    mind: FightersMind,
    player: TacticalMind,
    roster: Roster,
    player_id: FighterId,
    opponent_id: FighterId,
    turns: u32,
}

impl Simulation {
    /// Pairs the roster's player with its first opponent.
    ///
    /// # Errors
    ///
    /// Fails when the roster has no player or no opponent.
    pub fn new(roster: Roster, config: &MindConfig, sim: &SimConfig) -> Result<Self> {
        let everyone = Arena::new(roster.fighters().to_vec());
        let state = FightState::new(&everyone);
        let player = state
            .main_character()
            .context("roster has no player fighter")?
            .clone();
        let opponents = state.opponents();
        let opponent = opponents
            .first()
            .copied()
            .context("roster has no opponent fighter")?
            .clone();
        if opponents.len() > 1 {
            tracing::warn!(
                "Roster lists {} opponents; only {} takes part",
                opponents.len(),
                opponent.name
            );
        }

        let (player_id, opponent_id) = (player.id, opponent.id);
        tracing::info!("{} ({}) faces {} ({})", player.name, player_id, opponent.name, opponent_id);

        let services = ConsoleServices::new(Duration::from_millis(sim.playback_ms));
        let collaborators = Collaborators::with_arena(Arena::new(vec![player, opponent]))
            .status(services.clone())
            .playback(services.clone())
            .counter_picker(services.clone())
            .counter_performer(services);

        let (opponent_engine, player_engine) = match sim.seed {
            Some(seed) => (
                TacticalMind::with_seed(config.scoring.clone(), seed),
                TacticalMind::with_seed(config.scoring.clone(), seed.wrapping_add(1)),
            ),
            None => (
                TacticalMind::new(config.scoring.clone()),
                TacticalMind::new(config.scoring.clone()),
            ),
        };

        let mind = FightersMind::with_tactical(
            Some(opponent_id),
            opponent_engine,
            config.timing.clone(),
            collaborators,
        );

        Ok(Self {
            mind,
            player: player_engine,
            roster,
            player_id,
            opponent_id,
            turns: sim.turns,
        })
    }

    /// Plays turns until the configured number has been played.
    pub async fn run(&mut self) -> Result<FightSummary> {
        self.mind.start()?;

        loop {
            let turn = self.mind.arena().turn();
            if turn > self.turns {
                break;
            }

            let active = self.mind.arena().active_fighter().map(|fighter| fighter.id);
            if active == Some(self.player_id) {
                self.play_player_turn(turn);
            } else {
                self.play_opponent_turn(turn).await?;
            }
        }

        Ok(FightSummary {
            turns_played: self.mind.arena().turn() - 1,
            opponent_picks: self.mind.tactical().history().iter().cloned().collect(),
        })
    }

    async fn play_opponent_turn(&mut self, turn: Turn) -> Result<()> {
        let input = self.roster.decision_input(self.opponent_id, turn)?;
        self.mind.set_decision_input(input);

        let passed = self
            .mind
            .run_until(|mind| mind.arena().turn() > turn, TURN_TICK_BUDGET)
            .await?;
        if !passed {
            anyhow::bail!(
                "{} did not finish turn {} within {} ticks",
                self.opponent_id,
                turn,
                TURN_TICK_BUDGET
            );
        }
        Ok(())
    }

    fn play_player_turn(&mut self, turn: Turn) {
        let picked = self
            .roster
            .decision_input(self.player_id, turn)
            .and_then(|input| Ok(self.player.decide(&input, self.mind.arena_mut())?));

        match picked {
            Ok(actions) => {
                for action in &actions {
                    tracing::info!("{} answers with {}", self.player_id, action.technique.name);
                }
            }
            Err(e) => tracing::warn!("{} passes turn {}: {:#}", self.player_id, turn, e),
        }

        self.mind.arena_mut().set_next_turn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_content::RosterLoader;
    use fight_core::TimingConfig;

    const ROSTER: &str = r#"[
        (
            id: 0,
            name: "Player",
            role: Player,
            techniques: [(name: "jab", body_part: LeftArm, targets: [Head], proficiency: 0.5)],
            style_ranks: [(style: "boxing", rank: 0.4)],
            strategy: WinTheFight,
            conditions: [5.0, 5.0, 5.0, 10.0],
        ),
        (
            id: 1,
            name: "Kenji",
            role: Opponent,
            techniques: [
                (name: "cross", body_part: RightArm, targets: [Head], proficiency: 0.8),
                (name: "front kick", body_part: RightLeg, targets: [Torso], proficiency: 0.6),
            ],
            style_ranks: [(style: "karate", rank: 0.6)],
            strategy: PracticeTechniques,
            conditions: [6.0, 7.0, 9.0, 10.0],
        ),
    ]"#;

    fn quick_config() -> MindConfig {
        MindConfig {
            timing: TimingConfig {
                strategizing_secs: 0.1,
                deciding_secs: 0.1,
                turn_switch_secs: 0.1,
                tick_interval_ms: 10,
            },
            ..MindConfig::default()
        }
    }

    fn sim(turns: u32) -> SimConfig {
        SimConfig {
            turns,
            seed: Some(3),
            playback_ms: 50,
            ..SimConfig::default()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn opponent_acts_on_its_own_turns() {
        let roster = RosterLoader::parse(ROSTER).unwrap();
        let mut simulation = Simulation::new(roster, &quick_config(), &sim(4)).unwrap();

        let summary = simulation.run().await.unwrap();

        assert_eq!(summary.turns_played, 4);
        let turns: Vec<_> = summary.opponent_picks.iter().map(|entry| entry.turn).collect();
        assert_eq!(turns, [2, 4]);
    }

    #[tokio::test(start_paused = true)]
    async fn player_without_techniques_passes() {
        let roster = RosterLoader::parse(&ROSTER.replacen(
            r#"techniques: [(name: "jab", body_part: LeftArm, targets: [Head], proficiency: 0.5)],"#,
            "",
            1,
        ))
        .unwrap();
        let mut simulation = Simulation::new(roster, &quick_config(), &sim(3)).unwrap();

        let summary = simulation.run().await.unwrap();

        assert_eq!(summary.turns_played, 3);
        assert_eq!(summary.opponent_picks.len(), 1);
    }

    #[test]
    fn roster_needs_both_sides() {
        let solo = RosterLoader::parse(
            r#"[(id: 1, name: "Kenji", role: Opponent)]"#,
        )
        .unwrap();
        let error = Simulation::new(solo, &quick_config(), &sim(2)).err().unwrap();
        assert!(error.to_string().contains("no player"));
    }
}
