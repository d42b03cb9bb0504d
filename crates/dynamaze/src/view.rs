//! Board view geometry
//!
//! Computes the draw list for a board as plain commands so any host
//! (canvas, terminal, test harness) can render it.

use crate::controller::BoardController;
use crate::player::Color;
use crate::tile::Direction;

/// A single drawing instruction, in board pixel space.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle `[x, y, w, h]`
    Rect {
        /// Fill color
        color: Color,
        /// Rectangle `[x, y, w, h]`
        rect: [f64; 4],
    },
    /// Rectangle outline `[x, y, w, h]`
    BorderRect {
        /// Stroke color
        color: Color,
        /// Stroke radius
        radius: f64,
        /// Rectangle `[x, y, w, h]`
        rect: [f64; 4],
    },
    /// Line segment `[x1, y1, x2, y2]`
    Line {
        /// Stroke color
        color: Color,
        /// Stroke radius
        radius: f64,
        /// Segment `[x1, y1, x2, y2]`
        line: [f64; 4],
    },
}

/// Stores board view settings
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    /// Position from top left corner
    pub position: [f64; 2],
    /// Size of board
    pub size: f64,
    /// Background color
    pub background_color: Color,
    /// Edge color around the whole board
    pub board_edge_color: Color,
    /// Edge color between cells
    pub cell_edge_color: Color,
    /// Edge radius around the whole board
    pub board_edge_radius: f64,
    /// Edge radius between cells
    pub cell_edge_radius: f64,
    /// Wall color
    pub wall_color: Color,
    /// Floor color
    pub floor_color: Color,
    /// Tile wall width
    pub wall_width: f64,
    /// Token marker inset from the cell edge
    pub token_inset: f64,
}

impl ViewSettings {
    /// Creates new board view settings
    pub fn new() -> ViewSettings {
        ViewSettings {
            position: [10.0; 2],
            size: 400.0,
            background_color: [0.8, 0.8, 1.0, 1.0],
            board_edge_color: [0.0, 0.0, 0.2, 1.0],
            cell_edge_color: [0.0, 0.0, 0.2, 1.0],
            board_edge_radius: 3.0,
            cell_edge_radius: 1.0,
            wall_color: [0.2, 0.2, 0.3, 1.0],
            floor_color: [0.9, 0.9, 0.8, 1.0],
            wall_width: 20.0,
            token_inset: 12.0,
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::new()
    }
}

/// Stores visual information about a board
#[derive(Debug, Clone)]
pub struct BoardView {
    /// Stores board view settings
    pub settings: ViewSettings,
}

impl BoardView {
    /// Creates a new board view
    pub fn new(settings: ViewSettings) -> BoardView {
        BoardView { settings }
    }

    /// Compute the draw list for the board.
    ///
    /// Order: background first, then floors and walls per cell, then cell
    /// grid lines, then token markers, and the board edge last.
    pub fn draw(&self, controller: &BoardController) -> Vec<DrawCommand> {
        let settings = &self.settings;
        let board = controller.board();
        let mut out = Vec::new();

        let board_rect = [
            settings.position[0],
            settings.position[1],
            settings.size,
            settings.size,
        ];
        out.push(DrawCommand::Rect {
            color: settings.background_color,
            rect: board_rect,
        });

        let cell_w = settings.size / (board.width() as f64);
        let cell_h = settings.size / (board.height() as f64);

        // draw the tiles
        for j in 0..board.height() {
            for i in 0..board.width() {
                let north = settings.position[1] + j as f64 * cell_h;
                let south = north + cell_h;
                let south_ish = south - settings.wall_width;
                let west = settings.position[0] + i as f64 * cell_w;
                let east = west + cell_w;
                let east_ish = east - settings.wall_width;

                out.push(DrawCommand::Rect {
                    color: settings.floor_color,
                    rect: [west, north, cell_w, cell_h],
                });

                // corner blocks are always walled
                for corner in [
                    [west, north],
                    [east_ish, north],
                    [west, south_ish],
                    [east_ish, south_ish],
                ] {
                    out.push(DrawCommand::Rect {
                        color: settings.wall_color,
                        rect: [corner[0], corner[1], settings.wall_width, settings.wall_width],
                    });
                }

                let mut walled_directions = vec![
                    Direction::North,
                    Direction::South,
                    Direction::East,
                    Direction::West,
                ];
                for d in board.get([i, j]).paths() {
                    walled_directions.retain(|x| *x != d);
                }

                for d in walled_directions {
                    let rect = match d {
                        Direction::North => [west, north, cell_w, settings.wall_width],
                        Direction::South => [west, south_ish, cell_w, settings.wall_width],
                        Direction::East => [east_ish, north, settings.wall_width, cell_h],
                        Direction::West => [west, north, settings.wall_width, cell_h],
                    };
                    out.push(DrawCommand::Rect {
                        color: settings.wall_color,
                        rect,
                    });
                }
            }
        }

        // cell grid
        for i in 0..board.width() {
            let x = settings.position[0] + i as f64 * cell_w;
            let y2 = settings.position[1] + settings.size;
            out.push(DrawCommand::Line {
                color: settings.cell_edge_color,
                radius: settings.cell_edge_radius,
                line: [x, settings.position[1], x, y2],
            });
        }
        for j in 0..board.height() {
            let y = settings.position[1] + j as f64 * cell_h;
            let x2 = settings.position[0] + settings.size;
            out.push(DrawCommand::Line {
                color: settings.cell_edge_color,
                radius: settings.cell_edge_radius,
                line: [settings.position[0], y, x2, y],
            });
        }

        // token markers
        for token in board.player_tokens.values() {
            let (row, col) = token.position;
            let color = controller
                .players()
                .get(&token.player_id)
                .map(|p| p.color)
                .unwrap_or([0.0, 0.0, 0.0, 1.0]);
            let x = settings.position[0] + col as f64 * cell_w + settings.token_inset;
            let y = settings.position[1] + row as f64 * cell_h + settings.token_inset;
            out.push(DrawCommand::Rect {
                color,
                rect: [
                    x,
                    y,
                    cell_w - 2.0 * settings.token_inset,
                    cell_h - 2.0 * settings.token_inset,
                ],
            });
        }

        // Draw board edge.
        out.push(DrawCommand::BorderRect {
            color: settings.board_edge_color,
            radius: settings.board_edge_radius,
            rect: board_rect,
        });

        out
    }
}
