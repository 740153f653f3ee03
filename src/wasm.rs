//! JavaScript bindings. Snapshots cross the boundary as plain objects via
//! `serde-wasm-bindgen`; engine errors become `JsError` with their display text.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::outcome::ScoringMode;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

#[wasm_bindgen]
pub struct OthelloGame {
    inner: Game,
}

#[wasm_bindgen]
impl OthelloGame {
    /// `config` may be `undefined` or a partial `GameConfig` object.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<OthelloGame, JsError> {
        let config = if config.is_undefined() || config.is_null() {
            GameConfig::default()
        } else {
            from_js(config)?
        };
        Ok(Self {
            inner: Game::new(config)?,
        })
    }

    pub fn state(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.to_game_state())
    }

    pub fn submit_move(&mut self, row: i32, col: i32) -> Result<JsValue, JsError> {
        let outcome = self.inner.submit_move(row.into(), col.into())?;
        to_js(&outcome)
    }

    /// Returns the color to move after the pass.
    pub fn pass(&mut self) -> Result<JsValue, JsError> {
        let next = self.inner.pass()?;
        to_js(&next)
    }

    pub fn legal_moves(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.legal_moves())
    }

    pub fn legality(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.legality())
    }

    pub fn any_legal_move_exists(&self) -> bool {
        self.inner.any_legal_move_exists()
    }

    pub fn is_board_full(&self) -> bool {
        self.inner.is_board_full()
    }

    pub fn is_game_over(&self) -> bool {
        self.inner.is_game_over()
    }

    pub fn scores(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.scores())
    }

    /// `mode` is `"higher_wins"` or `"lower_wins"`.
    pub fn evaluate_winner(
        &self,
        board_full_override: bool,
        mode: JsValue,
    ) -> Result<JsValue, JsError> {
        let mode: ScoringMode = from_js(mode)?;
        to_js(&self.inner.evaluate_winner(board_full_override, mode))
    }

    pub fn result(&self) -> Result<JsValue, JsError> {
        to_js(&self.inner.result())
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsError::new(&err.to_string()))
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|err| JsError::new(&err.to_string()))
}
