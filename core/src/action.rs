use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// The vocabulary of state transitions.
///
/// On the wire an action is `{"type": "...", "payload": ...}`. Tags that do
/// not name a known action decode as [`Action::Unrecognized`], which leaves
/// the state untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    StartGame {
        image: PixelImage,
        category: String,
        #[serde(default)]
        seed: u64,
    },
    RevealPixel {
        row: Coord,
        col: Coord,
    },
    SubmitGuess(String),
    UseHint,
    UpdateTime(Millis),
    CompleteGame {
        success: bool,
    },
    ResetGame,
    AutoRevealPixels,
    SetCategory(String),
    Pause,
    Resume,
    #[serde(other)]
    Unrecognized,
}

impl Action {
    pub fn start_game(image: PixelImage, seed: u64) -> Self {
        let category = image.category.clone();
        Self::StartGame {
            image,
            category,
            seed,
        }
    }

    pub const fn reveal_pixel((row, col): Coord2) -> Self {
        Self::RevealPixel { row, col }
    }

    pub const fn complete(success: bool) -> Self {
        Self::CompleteGame { success }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::StartGame { .. } => "START_GAME",
            Self::RevealPixel { .. } => "REVEAL_PIXEL",
            Self::SubmitGuess(_) => "SUBMIT_GUESS",
            Self::UseHint => "USE_HINT",
            Self::UpdateTime(_) => "UPDATE_TIME",
            Self::CompleteGame { .. } => "COMPLETE_GAME",
            Self::ResetGame => "RESET_GAME",
            Self::AutoRevealPixels => "AUTO_REVEAL_PIXELS",
            Self::SetCategory(_) => "SET_CATEGORY",
            Self::Pause => "PAUSE",
            Self::Resume => "RESUME",
            Self::Unrecognized => "UNRECOGNIZED",
        }
    }
}
