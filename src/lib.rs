//! Rules engine for Othello/Reversi on even-sized boards from 4x4 to 16x16.
//!
//! [`game::Game`] is the entry point for front ends; [`wasm`] exposes it to
//! JavaScript.

pub mod board;
pub mod capture;
pub mod config;
pub mod error;
pub mod game;
pub mod mask;
pub mod outcome;
pub mod score;
pub mod turn;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::{GameConfig, NonCapturePolicy};
pub use error::{OthelloError, Result};
pub use game::Game;
pub use outcome::{ScoringMode, Winner};
pub use score::Score;
pub use types::{Cell, Color, GameResult, GameState, Legality, MoveOutcome, Position};
