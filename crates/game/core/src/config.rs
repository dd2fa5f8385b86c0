use core::time::Duration;

/// Tunable parameters of the fighter AI.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MindConfig {
    pub scoring: ScoringConfig,
    pub timing: TimingConfig,
}

/// Constants used by the scoring factors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoringConfig {
    /// Endurance value of a fully rested fighter.
    pub max_physical_condition: f32,
    /// Fraction of max endurance below which cheaper techniques are favoured.
    pub physical_threshold: f32,
    /// Damage (percent) up to which a body part counts as intact.
    pub intact_damage_limit: f32,
    /// Damage (percent) up to which the linear penalty applies undivided.
    pub light_damage_limit: f32,
    /// Damage (percent) above which a body part counts as disabled.
    pub disabled_damage_limit: f32,
    /// Divides the linear penalty for heavily damaged body parts.
    pub body_part_damage_coefficient: f32,
    pub history_base_score: f32,
    pub history_max_modifier: f32,
    /// Turns-since-last-use divisor under `Strategy::PracticeTechniques`.
    pub practice_divisor: f32,
    /// Turns-since-last-use divisor under `Strategy::WinTheFight`.
    pub win_divisor: f32,
}

impl ScoringConfig {
    pub const DEFAULT_MAX_PHYSICAL_CONDITION: f32 = 10.0;
    pub const DEFAULT_PHYSICAL_THRESHOLD: f32 = 0.75;
    pub const DEFAULT_BODY_PART_DAMAGE_COEFFICIENT: f32 = 1.5;
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_physical_condition: Self::DEFAULT_MAX_PHYSICAL_CONDITION,
            physical_threshold: Self::DEFAULT_PHYSICAL_THRESHOLD,
            intact_damage_limit: 5.0,
            light_damage_limit: 35.0,
            disabled_damage_limit: 85.0,
            body_part_damage_coefficient: Self::DEFAULT_BODY_PART_DAMAGE_COEFFICIENT,
            history_base_score: 0.5,
            history_max_modifier: 0.5,
            practice_divisor: 10.0,
            win_divisor: 100.0,
        }
    }
}

/// Simulated thinking times and the scheduler tick rate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    pub strategizing_secs: f32,
    pub deciding_secs: f32,
    /// Pause after the AI's techniques play out, before the turn passes.
    pub turn_switch_secs: f32,
    pub tick_interval_ms: u64,
}

impl TimingConfig {
    pub fn strategizing_delay(&self) -> Duration {
        Duration::from_secs_f32(self.strategizing_secs.max(0.0))
    }

    pub fn deciding_delay(&self) -> Duration {
        Duration::from_secs_f32(self.deciding_secs.max(0.0))
    }

    pub fn turn_switch_delay(&self) -> Duration {
        Duration::from_secs_f32(self.turn_switch_secs.max(0.0))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            strategizing_secs: 1.0,
            deciding_secs: 2.0,
            turn_switch_secs: 1.0,
            tick_interval_ms: 16,
        }
    }
}
