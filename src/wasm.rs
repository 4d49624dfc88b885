use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::interaction::{ClickOutcome, Selection};
use crate::types::Position;

/// A game plus the click cursor, as driven by the browser board.
#[wasm_bindgen]
pub struct CheckersGame {
    game: Game,
    selection: Selection,
}

#[wasm_bindgen]
impl CheckersGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> CheckersGame {
        CheckersGame {
            game: Game::new(),
            selection: Selection::new(),
        }
    }

    /// Feeds one square click. Returns true when the click completed a move.
    #[wasm_bindgen(js_name = clickSquare)]
    pub fn click_square(&mut self, row: u8, col: u8) -> Result<bool, JsError> {
        let outcome = self.selection.click(&mut self.game, Position::new(row, col))?;
        Ok(matches!(outcome, ClickOutcome::Moved(_)))
    }

    /// Plays a move directly, bypassing the selection cursor.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(
        &mut self,
        from_row: u8,
        from_col: u8,
        to_row: u8,
        to_col: u8,
    ) -> Result<(), JsError> {
        self.game.attempt_move(
            Position::new(from_row, from_col),
            Position::new(to_row, to_col),
        )?;
        self.selection.clear();
        Ok(())
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.selection.clear();
    }

    /// Current snapshot as a plain JS object.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.snapshot())?)
    }

    /// Selected square as `[row, col]`, or an empty array.
    pub fn selected(&self) -> Vec<u8> {
        self.selection
            .selected()
            .map(|p| vec![p.row, p.col])
            .unwrap_or_default()
    }

    #[wasm_bindgen(js_name = statusText)]
    pub fn status_text(&self) -> String {
        self.game.snapshot().status_text()
    }

    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.game.is_game_over()
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new()
    }
}
