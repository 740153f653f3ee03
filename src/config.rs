use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::error::Result;
use crate::outcome::ScoringMode;
use crate::types::Color;

/// What happens when a placement on an empty cell captures nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonCapturePolicy {
    /// Fail with `NoCapture`; the same player moves again.
    #[default]
    Reject,
    /// Place nothing and hand the turn to the opponent.
    Pass,
}

/// Setup parameters for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub starting_color: Color,
    pub top_left_color: Color,
    pub scoring_mode: ScoringMode,
    pub non_capture_policy: NonCapturePolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 8,
            cols: 8,
            starting_color: Color::Black,
            top_left_color: Color::White,
            scoring_mode: ScoringMode::HigherWins,
            non_capture_policy: NonCapturePolicy::Reject,
        }
    }
}

impl GameConfig {
    /// Builds the initial board, failing with `Dimension` for invalid sizes.
    pub fn build_board(&self) -> Result<Board> {
        Board::new(self.rows, self.cols, self.top_left_color)
    }
}
