use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Base score awarded per difficulty tier on a successful guess.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BaseScores {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
}

impl BaseScores {
    pub const fn for_difficulty(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }
}

impl Default for BaseScores {
    fn default() -> Self {
        Self {
            easy: 50,
            medium: 75,
            hard: 100,
        }
    }
}

/// Tunable constants of a round. Every field falls back to its default when
/// missing from a JSON document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameRules {
    pub hint_limit: u8,
    pub hint_penalty: u32,
    pub time_limit_ms: Millis,
    pub bonus_window_ms: Millis,
    pub min_success_score: u32,
    pub base_scores: BaseScores,
    pub fast_batch_ticks: u32,
    pub fast_batch_size: CellCount,
    pub slow_batch_size: CellCount,
    pub tick_interval_ms: Millis,
    pub auto_reveal_interval_ms: Millis,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            hint_limit: 3,
            hint_penalty: 10,
            time_limit_ms: 120_000,
            bonus_window_ms: 60_000,
            min_success_score: 10,
            base_scores: BaseScores::default(),
            fast_batch_ticks: 16,
            fast_batch_size: 12,
            slow_batch_size: 8,
            tick_interval_ms: 10,
            auto_reveal_interval_ms: 1000,
        }
    }
}

impl GameRules {
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self =
            serde_json::from_str(json).map_err(|err| GameError::InvalidRules(err.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(reason: &str) -> Result<()> {
            Err(GameError::InvalidRules(String::from(reason)))
        }

        if self.tick_interval_ms == 0 {
            return invalid("tick interval must be non-zero");
        }
        if self.auto_reveal_interval_ms == 0 {
            return invalid("auto-reveal interval must be non-zero");
        }
        if self.time_limit_ms == 0 {
            return invalid("time limit must be non-zero");
        }
        if self.slow_batch_size == 0 {
            return invalid("slow batch size must be non-zero");
        }
        // A zero hint limit or zero fast ticks only switches that feature off.
        if self.fast_batch_size < self.slow_batch_size {
            return invalid("fast batch size must not be smaller than slow batch size");
        }
        Ok(())
    }
}
