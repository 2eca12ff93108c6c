//! Payloads exchanged with the persistence sink that records finished
//! rounds and per-player statistics.

use std::cmp::Ordering;

use pixelguess_core::{Difficulty, Millis, RoundSummary};
use serde::{Deserialize, Serialize};

/// Request body to look up or create a player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPlayer {
    pub name: String,
}

impl NewPlayer {
    /// Trims the name, `None` when nothing is left.
    pub fn new(name: &str) -> Option<Self> {
        let name = name.trim();
        (!name.is_empty()).then(|| Self {
            name: name.to_owned(),
        })
    }
}

/// One finished round as stored by the sink.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub player_name: String,
    pub score: u32,
    pub time_elapsed: Millis,
    #[serde(default)]
    pub hints_used: u8,
    pub image_name: String,
    pub category: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub completed: bool,
}

impl SessionRecord {
    pub fn from_summary(player_name: impl Into<String>, summary: &RoundSummary) -> Self {
        Self {
            player_name: player_name.into(),
            score: summary.score,
            time_elapsed: summary.elapsed_ms,
            hints_used: summary.hints_used,
            image_name: summary.image_name.clone(),
            category: summary.category.clone(),
            difficulty: summary.difficulty,
            completed: summary.success,
        }
    }

    /// Higher score first, faster time breaks ties.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(self.time_elapsed.cmp(&other.time_elapsed))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub name: String,
    #[serde(default)]
    pub best_score: u32,
    #[serde(default)]
    pub games_played: u32,
    #[serde(default)]
    pub games_won: u32,
}

impl PlayerStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            best_score: 0,
            games_played: 0,
            games_won: 0,
        }
    }

    /// Folds a recorded round into the totals. Only completed rounds count
    /// as wins or can raise the best score.
    pub fn record(&mut self, session: &SessionRecord) {
        self.games_played = self.games_played.saturating_add(1);
        if session.completed {
            self.games_won = self.games_won.saturating_add(1);
            self.best_score = self.best_score.max(session.score);
        }
    }

    /// Share of won games in `[0, 1]`, zero before the first game.
    pub fn win_rate(&self) -> f32 {
        if self.games_played == 0 {
            return 0.0;
        }
        self.games_won as f32 / self.games_played as f32
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub name: String,
    pub score: u32,
    pub time_elapsed: Millis,
}

/// Ranks completed sessions by score, faster time first on ties, at most
/// `limit` entries.
pub fn leaderboard(records: &[SessionRecord], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<&SessionRecord> =
        records.iter().filter(|record| record.completed).collect();
    ranked.sort_by(|a, b| a.rank_cmp(b));

    ranked
        .into_iter()
        .take(limit)
        .zip(1..)
        .map(|(record, rank)| LeaderboardEntry {
            rank,
            name: record.player_name.clone(),
            score: record.score,
            time_elapsed: record.time_elapsed,
        })
        .collect()
}
