use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Difficulty tier of a puzzle, drives the base score.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}

/// A puzzle as supplied by the image catalog. The engine treats it as an
/// opaque value apart from `grid_size` and `difficulty`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PixelImage {
    pub id: String,
    /// The answer the player has to guess.
    pub name: String,
    pub category: String,
    /// Reference to the raw image (path or URL), never decoded here.
    pub image_data: String,
    pub grid_size: Coord,
    pub difficulty: Difficulty,
}

impl PixelImage {
    pub const DEFAULT_GRID_SIZE: Coord = 16;

    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        image_data: impl Into<String>,
        grid_size: Coord,
        difficulty: Difficulty,
    ) -> Result<Self> {
        let image = Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            image_data: image_data.into(),
            grid_size,
            difficulty,
        };
        image.validate()?;
        Ok(image)
    }

    /// Builds an image whose answer is the file name without its extension.
    pub fn from_file_name(
        file_name: &str,
        category: &str,
        difficulty: Difficulty,
        grid_size: Coord,
    ) -> Result<Self> {
        let stem = match file_name.rfind('.') {
            Some(dot) if dot > 0 => &file_name[..dot],
            _ => file_name,
        };
        Self::new(
            format!("{category}/{stem}"),
            stem,
            category,
            format!("/images/{file_name}"),
            grid_size,
            difficulty,
        )
    }

    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(GameError::InvalidGridSize);
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.grid_size, self.grid_size)
    }

    /// Case-insensitive comparison of a trimmed guess against the answer.
    pub fn matches_guess(&self, guess: &str) -> bool {
        let guess = guess.trim();
        !guess.is_empty() && guess.to_lowercase() == self.name.to_lowercase()
    }

    /// Hint text for the given hint index, later indices repeat the last hint.
    pub fn hint(&self, index: u8) -> String {
        match index {
            0 => format!("Category: {}", self.category),
            1 => {
                let first: String = self
                    .name
                    .chars()
                    .next()
                    .map(|c| c.to_uppercase().collect())
                    .unwrap_or_default();
                format!("First letter: {first}")
            }
            _ => format!("Length: {} letters", self.name.chars().count()),
        }
    }
}
