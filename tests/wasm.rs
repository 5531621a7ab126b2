#![cfg(target_arch = "wasm32")]

//! Snapshot serialization checks run under `wasm-pack test`.

use wasm_bindgen_test::*;

use landrush::board::Board;
use landrush::bot::ClaimGenerator;
use landrush::game::GameInstance;

struct FixedClaim(Vec<usize>);

impl ClaimGenerator for FixedClaim {
    fn claim(&mut self, _board: &Board) -> Vec<usize> {
        self.0.clone()
    }

    fn think_delay_ms(&mut self) -> u32 {
        1500
    }
}

fn get(value: &wasm_bindgen::JsValue, key: &str) -> wasm_bindgen::JsValue {
    js_sys::Reflect::get(value, &key.into()).unwrap()
}

#[wasm_bindgen_test]
fn snapshot_round_trips_to_a_js_object() {
    let mut game = GameInstance::new(6, 6, Box::new(FixedClaim(vec![5])));
    game.place(0).unwrap();
    game.place(1).unwrap();

    let snapshot = serde_wasm_bindgen::to_value(&game.to_snapshot()).unwrap();

    assert_eq!(get(&snapshot, "day").as_f64(), Some(1.0));
    assert_eq!(get(&snapshot, "width").as_f64(), Some(6.0));
    let mode = get(&snapshot, "mode");
    assert_eq!(get(&mode, "kind").as_string().as_deref(), Some("editing"));
}

#[wasm_bindgen_test]
fn awaiting_mode_carries_the_timer_contract() {
    let mut game = GameInstance::new(6, 6, Box::new(FixedClaim(vec![5])));
    game.place(0).unwrap();
    game.submit();

    let snapshot = serde_wasm_bindgen::to_value(&game.to_snapshot()).unwrap();
    let mode = get(&snapshot, "mode");

    assert_eq!(
        get(&mode, "kind").as_string().as_deref(),
        Some("awaiting_opponent")
    );
    assert_eq!(get(&mode, "delay_ms").as_f64(), Some(1500.0));
}
