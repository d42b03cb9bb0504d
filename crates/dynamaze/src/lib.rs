//! # DynaMaze
//!
//! Core of a Labyrinth-style board game played on a shifting maze of
//! tiles. Each turn a player rotates and inserts the loose tile, sliding
//! a whole lane of the board, then moves their token through the
//! passages the maze now forms, hunting their current target.
//!
//! ## Architecture
//!
//! - **Board**: tile grid, loose-tile insertion, reachability
//! - **Controller**: turn phases, target scoring, win detection
//! - **View**: board geometry as host-agnostic draw commands
//! - **Sound**: music/cue sequencing behind an [`AudioBackend`] seam
//! - **Options**: persisted music/sound levels with a process-wide handle
//!
//! The crate is platform-neutral: hosts supply rendering and audio.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod board;
pub mod controller;
pub mod error;
pub mod options;
pub mod player;
pub mod sound;
pub mod tile;
pub mod view;

// Re-export main types
pub use board::{Board, PlayerToken, MAX_PLAYERS};
pub use controller::{BoardController, GameEvent, GameSettings, TurnPhase};
pub use error::{GameError, OptionsError, Result};
pub use options::{GameOptions, OptionsHandle};
pub use player::{Color, Player, PlayerId};
pub use sound::{AudioBackend, Music, Sound, SoundEngine};
pub use tile::{Direction, Shape, Tile};
pub use view::{BoardView, DrawCommand, ViewSettings};

/// DynaMaze version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
