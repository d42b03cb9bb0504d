//! Board state and maze logic

use std::collections::{BTreeMap, HashSet};

use indexmap::IndexMap;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::player::{Player, PlayerId};
use crate::tile::{Direction, Shape, Tile};

/// Most tokens a board can seat (one per corner).
pub const MAX_PLAYERS: usize = 4;

/// Information about a player's token on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerToken {
    /// ID of player the token is for
    pub player_id: PlayerId,
    /// Position of token (row, col)
    pub position: (usize, usize),
}

impl PlayerToken {
    /// Create a new token for the given player at the given position
    pub fn new(player: &Player, position: (usize, usize)) -> PlayerToken {
        PlayerToken {
            player_id: player.id,
            position,
        }
    }
}

/// Information about board state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Cells
    cells: Vec<Vec<Tile>>,
    /// Loose tile
    pub loose_tile: Tile,
    /// Loose tile position
    pub loose_tile_position: Option<(Direction, usize)>,
    /// Player tokens
    pub player_tokens: BTreeMap<PlayerId, PlayerToken>,
}

impl Board {
    /// Creates a new board with random tiles, fixed corner tiles, and one
    /// token per player seeded at the corners in join order.
    pub fn new(width: usize, height: usize, players: &IndexMap<PlayerId, Player>) -> Result<Board> {
        Board::new_with_rng(width, height, players, &mut rand::thread_rng())
    }

    /// Creates a new board from the given source of randomness.
    ///
    /// Dimensions must be odd and at least 3 so that the corners are fixed
    /// and every movable lane is interior.
    pub fn new_with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        players: &IndexMap<PlayerId, Player>,
        rng: &mut R,
    ) -> Result<Board> {
        if width < 3 || height < 3 || width % 2 == 0 || height % 2 == 0 {
            return Err(GameError::InvalidBoardSize { width, height });
        }
        if players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers {
                count: players.len(),
                max: MAX_PLAYERS,
            });
        }
        let mut cells = vec![];
        for _ in 0..height {
            let mut row = vec![];
            for _ in 0..width {
                row.push(rng.gen::<Tile>());
            }
            cells.push(row);
        }
        // corners are L tiles with both openings pointing into the board
        cells[0][0] = Tile::new(Shape::L, Direction::East);
        cells[0][width - 1] = Tile::new(Shape::L, Direction::South);
        cells[height - 1][0] = Tile::new(Shape::L, Direction::North);
        cells[height - 1][width - 1] = Tile::new(Shape::L, Direction::West);
        let mut player_tokens = BTreeMap::new();
        for (i, player) in players.values().enumerate() {
            let position = match i {
                0 => (0, 0),
                1 => (height - 1, width - 1),
                2 => (0, width - 1),
                3 => (height - 1, 0),
                _ => unreachable!("player count checked above"),
            };
            player_tokens.insert(player.id, PlayerToken::new(player, position));
        }
        Ok(Board {
            cells,
            loose_tile: rng.gen(),
            loose_tile_position: None,
            player_tokens,
        })
    }

    /// Gets a cell from the board by `[col, row]` index
    pub fn get(&self, ind: [usize; 2]) -> &Tile {
        &self.cells[ind[1]][ind[0]]
    }

    /// Gets a cell from the board by `(row, col)` coordinate
    pub fn tile(&self, pos: (usize, usize)) -> &Tile {
        &self.cells[pos.0][pos.1]
    }

    /// Gets a mutable cell from the board by `(row, col)` coordinate
    pub fn tile_mut(&mut self, pos: (usize, usize)) -> &mut Tile {
        &mut self.cells[pos.0][pos.1]
    }

    /// Gets the width of the board
    pub fn width(&self) -> usize {
        self.cells[0].len()
    }

    /// Gets the height of the board
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Number of interior lanes along the given edge.
    pub fn guide_lanes(&self, edge: Direction) -> usize {
        let size = match edge {
            Direction::North | Direction::South => self.width(),
            Direction::East | Direction::West => self.height(),
        };
        (size - 1) / 2
    }

    /// Parks the loose tile at a guide position on an edge.
    pub fn park_loose_tile(&mut self, edge: Direction, guide_idx: usize) -> Result<()> {
        let lanes = self.guide_lanes(edge);
        if guide_idx >= lanes {
            return Err(GameError::InvalidGuidePosition {
                edge,
                index: guide_idx,
                lanes,
            });
        }
        self.loose_tile_position = Some((edge, guide_idx));
        Ok(())
    }

    fn valid(&self, ind: (usize, usize), dir: Direction) -> bool {
        let (j, i) = ind;
        match dir {
            Direction::North => j > 0,
            Direction::South => j < self.height() - 1,
            Direction::West => i > 0,
            Direction::East => i < self.width() - 1,
        }
    }

    /// Inserts the loose tile at its current position.
    ///
    /// The lane shifts one cell away from the parked edge and the ejected
    /// edge tile becomes the new loose tile. Tokens standing on the lane
    /// ride along with it; a token pushed off the edge wraps around onto
    /// the freshly inserted tile. Does nothing if the tile is not parked.
    pub fn insert_loose_tile(&mut self) {
        if let Some((dir, guide_idx)) = self.loose_tile_position {
            let target_idx = 2 * guide_idx + 1;
            // general process: copy into the current position, so start opposite correct margin
            let (mut j, mut i) = match dir {
                Direction::North => (self.height() - 1, target_idx),
                Direction::South => (0, target_idx),
                Direction::West => (target_idx, self.width() - 1),
                Direction::East => (target_idx, 0),
            };
            let next_loose_tile = self.cells[j][i].clone();
            while self.valid((j, i), dir) {
                let (next_j, next_i) = (j, i) + dir;
                self.cells[j][i] = self.cells[next_j][next_i].clone();
                j = next_j;
                i = next_i;
            }
            self.cells[j][i] = self.loose_tile.clone();
            self.loose_tile = next_loose_tile;

            // tokens ride the shifted lane, wrapping onto the inserted tile
            let push = dir.opposite();
            let inserted = (j, i);
            let lane_is_row = matches!(dir, Direction::East | Direction::West);
            let height = self.cells.len();
            let width = self.cells[0].len();
            for token in self.player_tokens.values_mut() {
                let (row, col) = token.position;
                let on_lane = if lane_is_row {
                    row == target_idx
                } else {
                    col == target_idx
                };
                if on_lane {
                    let off_edge = match push {
                        Direction::North => row == 0,
                        Direction::South => row == height - 1,
                        Direction::West => col == 0,
                        Direction::East => col == width - 1,
                    };
                    token.position = if off_edge {
                        inserted
                    } else {
                        (row, col) + push
                    };
                }
            }
        }
    }

    /// Gets all the coordinates reachable from the given (row, col)
    pub fn reachable_coords(&self, from: (usize, usize)) -> HashSet<(usize, usize)> {
        // result contains everything seen, frontier contains only things not yet scanned
        let mut result = HashSet::new();
        result.insert(from);
        let mut frontier = vec![from];
        // while frontier is nonempty...
        while let Some((curr_row, curr_col)) = frontier.pop() {
            // for each reachable direction...
            for dir in self.cells[curr_row][curr_col].paths() {
                // if it doesn't fall off the board...
                if self.valid((curr_row, curr_col), dir) {
                    // find the connecting tile
                    let (next_row, next_col) = (curr_row, curr_col) + dir;
                    // if that tile connects up as well...
                    if self.cells[next_row][next_col].connects(dir * Direction::South) {
                        // if we've never seen that location before...
                        if !result.contains(&(next_row, next_col)) {
                            // add it to frontier and result
                            frontier.push((next_row, next_col));
                            result.insert((next_row, next_col));
                        }
                    }
                }
            }
        }
        result
    }

    /// Finds the cell carrying the given player's target marker.
    ///
    /// Returns `None` when the player has no target on the board, which
    /// includes the case where the marker rode the ejected tile and is
    /// currently loose.
    pub fn find_target(&self, player: PlayerId) -> Option<(usize, usize)> {
        for (j, row) in self.cells.iter().enumerate() {
            for (i, tile) in row.iter().enumerate() {
                if tile.whose_target == Some(player) {
                    return Some((j, i));
                }
            }
        }
        None
    }

    /// Places a fresh target for the player on a random tile that carries
    /// no other target and no token.
    pub fn place_target<R: Rng + ?Sized>(&mut self, player: PlayerId, rng: &mut R) {
        let occupied: HashSet<(usize, usize)> = self
            .player_tokens
            .values()
            .map(|token| token.position)
            .collect();
        loop {
            let pos = (rng.gen_range(0..self.height()), rng.gen_range(0..self.width()));
            if occupied.contains(&pos) || self.tile(pos).whose_target.is_some() {
                continue;
            }
            self.tile_mut(pos).whose_target = Some(player);
            return;
        }
    }
}
