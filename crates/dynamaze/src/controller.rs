//! Turn and game flow on top of the board

use std::fmt;

use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::{Board, MAX_PLAYERS};
use crate::error::{GameError, Result};
use crate::player::{Player, PlayerId};
use crate::tile::Direction;

/// Game configuration knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSettings {
    /// Board width (odd, at least 3)
    pub width: usize,
    /// Board height (odd, at least 3)
    pub height: usize,
    /// Targets a player must reach to win
    pub score_limit: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            width: 7,
            height: 7,
            score_limit: 3,
        }
    }
}

/// The two halves of a player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Rotate and park the loose tile, then insert it
    InsertTile,
    /// Move the token somewhere the maze reaches
    MoveToken,
}

impl fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TurnPhase::InsertTile => "insert tile",
            TurnPhase::MoveToken => "move token",
        };
        write!(f, "{}", name)
    }
}

/// Things that happened as the result of a game operation.
///
/// Hosts use these to drive audio cues and UI updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A new player's turn began
    TurnStarted(PlayerId),
    /// A player landed on their target
    TargetReached {
        /// Who scored
        player: PlayerId,
        /// Their new score
        score: u32,
    },
    /// A player reached the score limit
    GameWon(PlayerId),
}

/// Handles game rules and turn sequencing.
///
/// Operations that would violate the rules return a [`GameError`] and
/// leave the game state untouched.
#[derive(Debug)]
pub struct BoardController {
    board: Board,
    players: IndexMap<PlayerId, Player>,
    settings: GameSettings,
    current: usize,
    phase: TurnPhase,
    winner: Option<PlayerId>,
    rng: StdRng,
}

impl BoardController {
    /// Start a new game with the given players, in join order.
    pub fn new(players: Vec<Player>, settings: GameSettings) -> Result<BoardController> {
        BoardController::new_with_rng(players, settings, StdRng::from_entropy())
    }

    /// Start a new game from the given source of randomness.
    pub fn new_with_rng(
        players: Vec<Player>,
        settings: GameSettings,
        mut rng: StdRng,
    ) -> Result<BoardController> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: players.len(),
                max: MAX_PLAYERS,
            });
        }
        let mut players: IndexMap<PlayerId, Player> =
            players.into_iter().map(|p| (p.id, p)).collect();
        let mut board = Board::new_with_rng(settings.width, settings.height, &players, &mut rng)?;
        for (id, player) in players.iter_mut() {
            player.home = board.player_tokens[id].position;
            board.place_target(*id, &mut rng);
        }
        Ok(BoardController {
            board,
            players,
            settings,
            current: 0,
            phase: TurnPhase::InsertTile,
            winner: None,
            rng,
        })
    }

    /// The board being played on.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts that manage state outside the
    /// rules (editors, scripted setups). Rule checks only cover the
    /// controller's own operations.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// All players, in join order.
    pub fn players(&self) -> &IndexMap<PlayerId, Player> {
        &self.players
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> &Player {
        // the registry is never empty and current is always in range
        match self.players.get_index(self.current) {
            Some((_, player)) => player,
            None => unreachable!("current player index out of range"),
        }
    }

    /// Current phase of the turn.
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// The winner, once a player reaches the score limit.
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Configured settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    fn require_phase(&self, expected: TurnPhase) -> Result<()> {
        if self.winner.is_some() {
            return Err(GameError::GameOver);
        }
        if self.phase != expected {
            return Err(GameError::OutOfPhase {
                expected: expected.to_string(),
                current: self.phase.to_string(),
            });
        }
        Ok(())
    }

    /// Rotate the loose tile a quarter turn clockwise.
    pub fn rotate_loose_tile(&mut self) -> Result<()> {
        self.require_phase(TurnPhase::InsertTile)?;
        self.board.loose_tile.rotate_cw();
        Ok(())
    }

    /// Park the loose tile at a guide position on an edge.
    pub fn park_loose_tile(&mut self, edge: Direction, guide_idx: usize) -> Result<()> {
        self.require_phase(TurnPhase::InsertTile)?;
        self.board.park_loose_tile(edge, guide_idx)
    }

    /// Insert the parked loose tile, shifting its lane and ending the
    /// insert phase.
    pub fn insert_loose_tile(&mut self) -> Result<()> {
        self.require_phase(TurnPhase::InsertTile)?;
        if self.board.loose_tile_position.is_none() {
            return Err(GameError::LooseTileNotParked);
        }
        self.board.insert_loose_tile();
        self.board.loose_tile_position = None;
        self.phase = TurnPhase::MoveToken;
        Ok(())
    }

    /// Move the current player's token to a reachable cell, ending the
    /// turn. Staying put is legal.
    pub fn move_token(&mut self, dest: (usize, usize)) -> Result<Vec<GameEvent>> {
        self.require_phase(TurnPhase::MoveToken)?;
        let id = self.current_player().id;
        let from = self.board.player_tokens[&id].position;
        if !self.board.reachable_coords(from).contains(&dest) {
            return Err(GameError::UnreachableCell { from, to: dest });
        }
        if let Some(token) = self.board.player_tokens.get_mut(&id) {
            token.position = dest;
        }

        let mut events = Vec::new();
        if self.board.tile(dest).whose_target == Some(id) {
            self.board.tile_mut(dest).whose_target = None;
            let score_limit = self.settings.score_limit;
            let score = {
                let player = &mut self.players[&id];
                player.score += 1;
                player.score
            };
            events.push(GameEvent::TargetReached { player: id, score });
            if score >= score_limit {
                self.winner = Some(id);
                events.push(GameEvent::GameWon(id));
                return Ok(events);
            }
            self.board.place_target(id, &mut self.rng);
        }

        self.current = (self.current + 1) % self.players.len();
        self.phase = TurnPhase::InsertTile;
        events.push(GameEvent::TurnStarted(self.current_player().id));
        Ok(events)
    }
}
