//! Tiles, shapes, and the direction algebra the maze is built on

use std::fmt;
use std::ops::{Add, Mul};

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::player::PlayerId;

/// A cardinal direction on the board.
///
/// Directions double as rotations: `North` is the identity, `East` a
/// quarter turn clockwise, `South` a half turn, `West` three quarters.
/// Composing two directions with `*` adds their rotations, so
/// `d * Direction::South` is always the opposite of `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Up (towards row 0)
    North,
    /// Down (towards the last row)
    South,
    /// Right (towards the last column)
    East,
    /// Left (towards column 0)
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Number of clockwise quarter turns from North.
    fn quarter_turns(self) -> u8 {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Direction after the given number of clockwise quarter turns from North.
    fn from_quarter_turns(turns: u8) -> Direction {
        match turns % 4 {
            0 => Direction::North,
            1 => Direction::East,
            2 => Direction::South,
            _ => Direction::West,
        }
    }

    /// The opposite direction.
    pub fn opposite(self) -> Direction {
        self * Direction::South
    }

    /// Rotate a quarter turn clockwise.
    pub fn rotate_cw(self) -> Direction {
        self * Direction::East
    }

    /// Rotate a quarter turn counterclockwise.
    pub fn rotate_ccw(self) -> Direction {
        self * Direction::West
    }
}

impl Mul for Direction {
    type Output = Direction;

    /// Compose two rotations.
    fn mul(self, rhs: Direction) -> Direction {
        Direction::from_quarter_turns(self.quarter_turns() + rhs.quarter_turns())
    }
}

/// Move a `(row, col)` coordinate one cell in the given direction.
///
/// The caller guarantees the move stays on the board; stepping north from
/// row 0 (or west from column 0) underflows.
impl Add<Direction> for (usize, usize) {
    type Output = (usize, usize);

    fn add(self, dir: Direction) -> (usize, usize) {
        let (row, col) = self;
        match dir {
            Direction::North => (row - 1, col),
            Direction::South => (row + 1, col),
            Direction::East => (row, col + 1),
            Direction::West => (row, col - 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        write!(f, "{}", name)
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::from_quarter_turns(rng.gen_range(0..4))
    }
}

/// The three tile shapes, named for the letter their open paths trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    /// Straight passage (two opposite openings)
    I,
    /// Corner passage (two adjacent openings)
    L,
    /// Tee passage (three openings)
    T,
}

impl Shape {
    /// Open directions of this shape at orientation `North`.
    fn base_paths(self) -> &'static [Direction] {
        match self {
            Shape::I => &[Direction::North, Direction::South],
            Shape::L => &[Direction::North, Direction::East],
            Shape::T => &[Direction::East, Direction::West, Direction::South],
        }
    }
}

impl Distribution<Shape> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Shape {
        match rng.gen_range(0..3) {
            0 => Shape::I,
            1 => Shape::L,
            _ => Shape::T,
        }
    }
}

/// A single maze tile: a shape, the rotation applied to it, and an
/// optional target marker for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Passage shape
    pub shape: Shape,
    /// Rotation applied to the shape
    pub orientation: Direction,
    /// Player whose current target sits on this tile, if any
    pub whose_target: Option<PlayerId>,
}

impl Tile {
    /// Create a tile with no target marker.
    pub fn new(shape: Shape, orientation: Direction) -> Tile {
        Tile {
            shape,
            orientation,
            whose_target: None,
        }
    }

    /// The directions this tile is open towards.
    ///
    /// Two neighboring tiles connect iff each lists the facing direction.
    pub fn paths(&self) -> Vec<Direction> {
        self.shape
            .base_paths()
            .iter()
            .map(|&d| d * self.orientation)
            .collect()
    }

    /// Whether this tile is open towards `dir`.
    pub fn connects(&self, dir: Direction) -> bool {
        self.shape
            .base_paths()
            .iter()
            .any(|&d| d * self.orientation == dir)
    }

    /// Rotate the tile a quarter turn clockwise.
    pub fn rotate_cw(&mut self) {
        self.orientation = self.orientation.rotate_cw();
    }

    /// Rotate the tile a quarter turn counterclockwise.
    pub fn rotate_ccw(&mut self) {
        self.orientation = self.orientation.rotate_ccw();
    }
}

impl Distribution<Tile> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        Tile::new(rng.gen(), rng.gen())
    }
}
