#![cfg(target_arch = "wasm32")]

use js_sys::{Object, Reflect};
use othello::wasm::{OthelloGame, wasm_ready};
use wasm_bindgen::{JsError, JsValue};
use wasm_bindgen_test::wasm_bindgen_test;

fn ok<T>(result: Result<T, JsError>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => panic!("binding call failed"),
    }
}

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).expect("field must exist")
}

fn config(rows: u32, cols: u32) -> JsValue {
    let obj = Object::new();
    Reflect::set(&obj, &"rows".into(), &rows.into()).unwrap();
    Reflect::set(&obj, &"cols".into(), &cols.into()).unwrap();
    Reflect::set(&obj, &"top_left_color".into(), &"black".into()).unwrap();
    obj.into()
}

#[wasm_bindgen_test]
fn wasm_ready_returns_true() {
    assert!(wasm_ready());
}

#[wasm_bindgen_test]
fn default_game_state_is_exposed() {
    let game = ok(OthelloGame::new(JsValue::UNDEFINED));
    let state = ok(game.state());

    assert_eq!(field(&state, "rows").as_f64(), Some(8.0));
    assert_eq!(field(&state, "black_count").as_f64(), Some(2.0));
    assert_eq!(field(&state, "current_player").as_string().as_deref(), Some("black"));
}

#[wasm_bindgen_test]
fn submit_move_reports_capture() {
    let mut game = ok(OthelloGame::new(config(4, 4)));

    let outcome = ok(game.submit_move(1, 3));

    assert_eq!(field(&outcome, "captured").as_bool(), Some(true));
    assert_eq!(field(&outcome, "next_turn").as_string().as_deref(), Some("white"));
    assert!(game.any_legal_move_exists());
}

#[wasm_bindgen_test]
fn invalid_inputs_surface_as_errors() {
    assert!(OthelloGame::new(config(5, 4)).is_err());

    let mut game = ok(OthelloGame::new(config(4, 4)));
    assert!(game.submit_move(-1, 0).is_err());
    assert!(game.submit_move(1, 1).is_err());
    assert!(game.pass().is_err());
}

#[wasm_bindgen_test]
fn evaluate_winner_accepts_mode_string() {
    let game = ok(OthelloGame::new(config(4, 4)));

    let winner = ok(game.evaluate_winner(true, JsValue::from_str("lower_wins")));

    assert_eq!(winner.as_string().as_deref(), Some("draw"));
}
