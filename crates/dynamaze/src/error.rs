//! Error types for DynaMaze game operations

use thiserror::Error;

use crate::tile::Direction;

/// Main error type for game operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GameError {
    /// Board dimensions the maze cannot be built on
    #[error("invalid board size {width}x{height}: dimensions must be odd and at least 3")]
    InvalidBoardSize {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },

    /// More players than the board has starting corners
    #[error("too many players: {count} (maximum {max})")]
    TooManyPlayers {
        /// Number of players requested
        count: usize,
        /// Maximum supported
        max: usize,
    },

    /// A game needs at least one player
    #[error("cannot start a game with no players")]
    NoPlayers,

    /// Operation attempted in the wrong turn phase
    #[error("out of phase: expected {expected}, currently {current}")]
    OutOfPhase {
        /// Phase the operation belongs to
        expected: String,
        /// Phase the game is actually in
        current: String,
    },

    /// Guide position does not address an interior lane
    #[error("invalid guide position {index} on the {edge} edge ({lanes} lanes available)")]
    InvalidGuidePosition {
        /// Edge the loose tile was parked at
        edge: Direction,
        /// Guide index along that edge
        index: usize,
        /// Number of interior lanes on that edge
        lanes: usize,
    },

    /// Insertion requested before the loose tile was parked
    #[error("the loose tile has not been parked at an edge")]
    LooseTileNotParked,

    /// Token move to a cell the maze does not connect to
    #[error("cell {to:?} is not reachable from {from:?}")]
    UnreachableCell {
        /// Token's current (row, col)
        from: (usize, usize),
        /// Requested destination (row, col)
        to: (usize, usize),
    },

    /// Operation attempted after a player has already won
    #[error("the game is over")]
    GameOver,
}

/// Errors from loading or saving persisted game options
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Underlying filesystem failure
    #[error("options i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file could not be serialized
    #[error("options serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;
