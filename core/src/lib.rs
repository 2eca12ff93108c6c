//! Game state engine for a pixel-reveal guessing game.
//!
//! A [`GameState`] is only ever changed by dispatching an [`Action`] to it,
//! see [`GameState::dispatch`] and [`GameState::reduce`]. The surrounding
//! modules are the collaborators a host needs to run rounds: a
//! [`RevealScheduler`] turning clock readings into actions, an
//! [`ImageCatalog`] to pick puzzles from, and [`GameSession`] tying them
//! together with guess judging and hints.

#![no_std]

extern crate alloc;

pub use action::*;
pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use image::*;
pub use mask::*;
pub use reveal::*;
pub use rules::*;
pub use scheduler::*;
pub use scoring::*;
pub use session::*;
pub use state::*;
pub use types::*;

mod action;
mod catalog;
mod engine;
mod error;
mod image;
mod mask;
mod reveal;
mod rules;
mod scheduler;
mod scoring;
mod session;
mod state;
mod types;
