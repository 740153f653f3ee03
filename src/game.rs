use tracing::{debug, info, trace};

use crate::board::Board;
use crate::capture;
use crate::config::{GameConfig, NonCapturePolicy};
use crate::error::{OthelloError, Result};
use crate::outcome::{self, ScoringMode, Winner};
use crate::score::Score;
use crate::turn::TurnController;
use crate::types::{Color, GameResult, GameState, Legality, MoveOutcome, Position};

/// A single game session. The only writer of its board.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: TurnController,
    score: Score,
    is_game_over: bool,
    is_pass: bool,
    consecutive_passes: u8,
    flipped: Vec<Position>,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self> {
        let board = config.build_board()?;
        debug!(
            rows = config.rows,
            cols = config.cols,
            starting = %config.starting_color,
            top_left = %config.top_left_color,
            "new game"
        );

        Ok(Self {
            config,
            score: Score::recompute(&board),
            board,
            turn: TurnController::new(config.starting_color),
            is_game_over: false,
            is_pass: false,
            consecutive_passes: 0,
            flipped: Vec::new(),
        })
    }

    /// Starts a game with default scoring and non-capture policy.
    pub fn new_game(rows: usize, cols: usize, starting: Color, top_left: Color) -> Result<Self> {
        Self::new(GameConfig {
            rows,
            cols,
            starting_color: starting,
            top_left_color: top_left,
            ..GameConfig::default()
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.turn.active()
    }

    pub fn scores(&self) -> Score {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn any_legal_move_exists(&self) -> bool {
        capture::any_legal_move_exists(&self.board, self.current_turn())
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        capture::legal_moves(&self.board, self.current_turn())
            .iter()
            .map(|idx| self.board.position_of(idx))
            .collect()
    }

    pub fn legality(&self) -> Legality {
        let active = self.current_turn();
        if capture::any_legal_move_exists(&self.board, active) {
            Legality::Available
        } else if capture::any_legal_move_exists(&self.board, active.opponent()) {
            Legality::MustPass
        } else {
            Legality::Blocked
        }
    }

    /// Fails with `NoLegalMove` when the active player has to pass.
    pub fn require_legal_move(&self) -> Result<()> {
        if self.any_legal_move_exists() {
            Ok(())
        } else {
            Err(OthelloError::NoLegalMove {
                color: self.current_turn(),
            })
        }
    }

    /// Places a disk for the active player.
    ///
    /// A placement on an empty cell that captures nothing is handled by the
    /// configured [`NonCapturePolicy`].
    pub fn submit_move(&mut self, row: i64, col: i64) -> Result<MoveOutcome> {
        if self.is_game_over {
            return Err(OthelloError::GameOver);
        }

        let active = self.current_turn();
        let pos = self.board.position(row, col)?;
        let applied = capture::commit_move(&mut self.board, pos, active)?;

        if !applied.captured {
            return match self.config.non_capture_policy {
                NonCapturePolicy::Reject => {
                    trace!(row, col, color = %active, "placement captures nothing");
                    Err(OthelloError::NoCapture {
                        row: pos.row,
                        col: pos.col,
                    })
                }
                NonCapturePolicy::Pass => {
                    info!(row, col, color = %active, "non-capturing placement passes the turn");
                    let forced = !self.any_legal_move_exists();
                    let next_turn = self.hand_over_turn(forced);
                    Ok(self.outcome(false, next_turn))
                }
            };
        }

        self.is_pass = false;
        self.consecutive_passes = 0;
        self.flipped = applied.flipped_positions(&self.board);
        self.score = Score::recompute(&self.board);
        let next_turn = self.turn.advance();
        debug!(
            row,
            col,
            color = %active,
            flipped = self.flipped.len(),
            black = self.score.black,
            white = self.score.white,
            "move committed"
        );

        if self.board.is_full() {
            self.end_game();
        }

        Ok(self.outcome(true, next_turn))
    }

    /// Forfeits the turn of a player with no legal move.
    /// Two consecutive passes end the game.
    pub fn pass(&mut self) -> Result<Color> {
        if self.is_game_over {
            return Err(OthelloError::GameOver);
        }
        let active = self.current_turn();
        if self.any_legal_move_exists() {
            return Err(OthelloError::PassNotAllowed { color: active });
        }

        info!(color = %active, "pass");
        Ok(self.hand_over_turn(true))
    }

    /// Evaluates the winner, treating the board as full when
    /// `board_full_override` is set.
    pub fn evaluate_winner(&self, board_full_override: bool, mode: ScoringMode) -> Winner {
        outcome::evaluate_winner(
            board_full_override || self.board.is_full(),
            mode,
            self.score,
        )
    }

    /// Result under the configured scoring mode. Undetermined until game over.
    pub fn result(&self) -> GameResult {
        GameResult {
            winner: self.evaluate_winner(self.is_game_over, self.config.scoring_mode),
            black_count: self.score.black,
            white_count: self.score.white,
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            rows: self.board.rows() as u8,
            cols: self.board.cols() as u8,
            board: self.board.to_array(),
            current_player: self.current_turn(),
            black_count: self.score.black,
            white_count: self.score.white,
            is_game_over: self.is_game_over,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    fn outcome(&self, captured: bool, next_turn: Color) -> MoveOutcome {
        MoveOutcome {
            captured,
            flipped: self.flipped.clone(),
            next_turn,
            is_game_over: self.is_game_over,
        }
    }

    /// Passes the turn without placing a disk. Only `forced` passes, made by a
    /// player with no legal move, count toward double-pass termination.
    fn hand_over_turn(&mut self, forced: bool) -> Color {
        self.is_pass = true;
        self.flipped.clear();
        if forced {
            self.consecutive_passes += 1;
        } else {
            self.consecutive_passes = 0;
        }
        let next_turn = self.turn.advance();

        if self.consecutive_passes >= 2 {
            self.end_game();
        }

        next_turn
    }

    fn end_game(&mut self) {
        self.is_game_over = true;
        let result = self.result();
        info!(
            winner = ?result.winner,
            black = result.black_count,
            white = result.white_count,
            "game over"
        );
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, current_player: Color) {
        self.board = board;
        self.score = Score::recompute(&board);
        self.turn = TurnController::new(current_player);
        self.is_game_over = false;
        self.is_pass = false;
        self.consecutive_passes = 0;
        self.flipped.clear();
    }
}
