use serde::{Deserialize, Serialize};

use crate::*;

/// How a final score was put together.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub base: u32,
    pub time_bonus: u32,
    pub hint_penalty: u32,
    pub total: u32,
}

impl ScoreBreakdown {
    /// A failed round always scores zero. A successful one scores base plus
    /// one point per second left in the bonus window minus the hint penalty,
    /// but never less than the minimum success score.
    pub fn compute(
        rules: &GameRules,
        difficulty: Difficulty,
        elapsed_ms: Millis,
        hints_used: u8,
        success: bool,
    ) -> Self {
        if !success {
            return Self::default();
        }

        let base = rules.base_scores.for_difficulty(difficulty);
        let time_bonus = rules.bonus_window_ms.saturating_sub(elapsed_ms) / 1000;
        let time_bonus = u32::try_from(time_bonus).unwrap_or(u32::MAX);
        let hint_penalty = u32::from(hints_used).saturating_mul(rules.hint_penalty);
        let total = base
            .saturating_add(time_bonus)
            .saturating_sub(hint_penalty)
            .max(rules.min_success_score);

        Self {
            base,
            time_bonus,
            hint_penalty,
            total,
        }
    }
}
