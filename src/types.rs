use std::fmt;

use serde::{Deserialize, Serialize};

use crate::outcome::Winner;

/// Disk color of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    White,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// Wire value used in snapshots: 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::Black => 1,
            Self::White => 2,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "black",
            Self::White => "white",
        })
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Wire value used in snapshots: 0=empty, 1=black, 2=white.
    pub fn to_u8(self) -> u8 {
        self.color().map_or(0, Color::to_u8)
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// Result of a submitted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// `false` only under the pass policy, when the placement captured nothing
    /// and the turn was handed over without placing a disk.
    pub captured: bool,
    pub flipped: Vec<Position>,
    pub next_turn: Color,
    pub is_game_over: bool,
}

/// Legality of the position for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Legality {
    /// The active player has at least one capturing placement.
    Available,
    /// The active player must pass; the opponent can still move.
    MustPass,
    /// Neither player can move.
    Blocked,
}

/// Public game state handed to front ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub rows: u8,
    pub cols: u8,
    /// Row-major cells: 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: Color,
    pub black_count: u32,
    pub white_count: u32,
    pub is_game_over: bool,
    /// Contract:
    /// - `true` when the previous action was a pass.
    /// - `false` when the previous action was a capturing move.
    pub is_pass: bool,
    /// Contract:
    /// - Capturing move: positions flipped by it.
    /// - Pass: must be an empty list.
    pub flipped: Vec<Position>,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: Winner,
    pub black_count: u32,
    pub white_count: u32,
}
