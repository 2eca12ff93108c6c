use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Grid size must be at least 1")]
    InvalidGridSize,
    #[error("Unknown difficulty tier: {0}")]
    UnknownDifficulty(String),
    #[error("Image catalog is empty")]
    EmptyCatalog,
    #[error("No images in category: {0}")]
    UnknownCategory(String),
    #[error("Invalid image manifest: {0}")]
    InvalidManifest(String),
    #[error("Invalid game rules: {0}")]
    InvalidRules(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
