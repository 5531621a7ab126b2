use wasm_bindgen::prelude::*;

pub mod board;
pub mod bot;
pub mod claim;
pub mod game;
pub mod grid;
pub mod rng;
pub mod types;

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use std::sync::{Mutex, MutexGuard};

    use once_cell::sync::Lazy;
    use wasm_bindgen::prelude::*;

    use crate::game::{DEFAULT_HEIGHT, DEFAULT_WIDTH, GameInstance};

    /// The single game the JS frontend talks to.
    static GAME: Lazy<Mutex<Option<GameInstance>>> = Lazy::new(|| Mutex::new(None));

    fn lock_game() -> Result<MutexGuard<'static, Option<GameInstance>>, JsValue> {
        GAME.lock()
            .map_err(|_| JsValue::from_str("game state poisoned"))
    }

    fn with_game(
        f: impl FnOnce(&mut GameInstance) -> Result<JsValue, JsValue>,
    ) -> Result<JsValue, JsValue> {
        let mut guard = lock_game()?;
        let game = guard
            .as_mut()
            .ok_or_else(|| JsValue::from_str("no active game; call newGame first"))?;
        f(game)
    }

    fn snapshot_of(game: &GameInstance) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&game.to_snapshot())?)
    }

    /// Start a fresh game. Defaults to the 6x6 board when no dimensions
    /// are passed. Returns the initial snapshot.
    #[wasm_bindgen(js_name = "newGame")]
    pub fn wasm_new_game(width: Option<usize>, height: Option<usize>) -> Result<JsValue, JsValue> {
        let width = width.unwrap_or(DEFAULT_WIDTH);
        let height = height.unwrap_or(DEFAULT_HEIGHT);
        if width == 0 || height == 0 {
            return Err(JsValue::from_str("board dimensions must be nonzero"));
        }

        let game = GameInstance::new_with_default_opponent(width, height);
        let snapshot = snapshot_of(&game)?;
        *lock_game()? = Some(game);
        Ok(snapshot)
    }

    /// Add one cell to the current selection. Returns the new snapshot.
    #[wasm_bindgen(js_name = "place")]
    pub fn wasm_place(index: usize) -> Result<JsValue, JsValue> {
        with_game(|game| {
            game.place(index).map_err(|e| JsValue::from_str(&e))?;
            snapshot_of(game)
        })
    }

    /// Clear the current selection.
    #[wasm_bindgen(js_name = "eraseAll")]
    pub fn wasm_erase_all() -> Result<JsValue, JsValue> {
        with_game(|game| {
            game.erase_all();
            snapshot_of(game)
        })
    }

    /// Submit the selection. On success the snapshot's mode carries
    /// `delay_ms`; the caller schedules a timer for that long and then
    /// calls `opponentTurn` exactly once.
    #[wasm_bindgen(js_name = "submitClaim")]
    pub fn wasm_submit_claim() -> Result<JsValue, JsValue> {
        with_game(|game| {
            game.submit();
            snapshot_of(game)
        })
    }

    /// Complete the opponent wait and compare the claims.
    #[wasm_bindgen(js_name = "opponentTurn")]
    pub fn wasm_opponent_turn() -> Result<JsValue, JsValue> {
        with_game(|game| {
            game.opponent_turn();
            snapshot_of(game)
        })
    }

    /// Acknowledge the compared round and open the next day.
    #[wasm_bindgen(js_name = "finalizeRound")]
    pub fn wasm_finalize_round() -> Result<JsValue, JsValue> {
        with_game(|game| {
            game.finalize();
            snapshot_of(game)
        })
    }

    /// Read the current snapshot without mutating anything.
    #[wasm_bindgen(js_name = "gameState")]
    pub fn wasm_game_state() -> Result<JsValue, JsValue> {
        with_game(|game| snapshot_of(game))
    }
}
