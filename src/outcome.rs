use serde::{Deserialize, Serialize};

use crate::score::Score;

/// Which disk count wins a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    #[default]
    HigherWins,
    LowerWins,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
    Undetermined,
}

/// Decides the winner once the board is full.
///
/// Double-pass termination is evaluated by passing `board_full = true`
/// regardless of the actual fill state.
pub fn evaluate_winner(board_full: bool, mode: ScoringMode, score: Score) -> Winner {
    if !board_full {
        return Winner::Undetermined;
    }

    let (high, low) = if score.black > score.white {
        (Winner::Black, Winner::White)
    } else if score.white > score.black {
        (Winner::White, Winner::Black)
    } else {
        return Winner::Draw;
    };

    match mode {
        ScoringMode::HigherWins => high,
        ScoringMode::LowerWins => low,
    }
}
