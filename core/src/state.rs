use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

pub const DEFAULT_CATEGORY: &str = "animals";

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Menu,
    Playing,
    Paused,
    Completed,
    Failed,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }

    /// Whether the round is still running, paused or not.
    pub const fn is_in_round(self) -> bool {
        matches!(self, Self::Playing | Self::Paused)
    }
}

/// Snapshot of a single game. All mutation goes through the transition
/// function in the engine module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub(crate) rules: GameRules,
    pub(crate) image: Option<PixelImage>,
    pub(crate) selected_category: String,
    pub(crate) mask: RevealMask,
    pub(crate) status: GameStatus,
    pub(crate) score: u32,
    pub(crate) best_score: u32,
    pub(crate) hints_used: u8,
    pub(crate) elapsed_ms: Millis,
    pub(crate) guesses: Vec<String>,
    pub(crate) auto_reveal: AutoRevealCounters,
    pub(crate) seed: u64,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    pub fn with_rules(rules: GameRules) -> Self {
        Self {
            rules,
            image: None,
            selected_category: String::from(DEFAULT_CATEGORY),
            mask: RevealMask::empty(),
            status: GameStatus::Menu,
            score: 0,
            best_score: 0,
            hints_used: 0,
            elapsed_ms: 0,
            guesses: Vec::new(),
            auto_reveal: AutoRevealCounters::default(),
            seed: 0,
        }
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn image(&self) -> Option<&PixelImage> {
        self.image.as_ref()
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn mask(&self) -> &RevealMask {
        &self.mask
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn hints_used(&self) -> u8 {
        self.hints_used
    }

    pub fn hints_left(&self) -> u8 {
        self.rules.hint_limit.saturating_sub(self.hints_used)
    }

    pub fn elapsed_ms(&self) -> Millis {
        self.elapsed_ms
    }

    pub fn guesses(&self) -> &[String] {
        &self.guesses
    }

    pub fn auto_reveal_counters(&self) -> AutoRevealCounters {
        self.auto_reveal
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Percentage of the grid revealed, always derived from the mask.
    pub fn reveal_progress(&self) -> f32 {
        self.mask.progress()
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.mask.is_revealed(coords)
    }

    /// Outcome of a finished round, `None` until the round completes or fails.
    pub fn summary(&self) -> Option<RoundSummary> {
        if !self.status.is_finished() {
            return None;
        }
        let image = self.image.as_ref()?;
        Some(RoundSummary {
            image_name: image.name.clone(),
            category: image.category.clone(),
            difficulty: image.difficulty,
            score: self.score,
            elapsed_ms: self.elapsed_ms,
            hints_used: self.hints_used,
            success: matches!(self.status, GameStatus::Completed),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// The fields a persistence sink needs once a round is over.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSummary {
    pub image_name: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub score: u32,
    pub elapsed_ms: Millis,
    pub hints_used: u8,
    pub success: bool,
}
