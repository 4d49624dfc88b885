use log::trace;

use crate::error::Result;
use crate::game::{Game, MoveRecord};
use crate::types::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked piece is now selected.
    Selected(Position),
    /// The click completed a move.
    Moved(MoveRecord),
    /// Nothing selected and the click was not on a piece of the player on turn.
    Ignored,
}

/// The transient "currently selected piece" cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    selected: Option<Position>,
}

impl Selection {
    pub const fn new() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<Position> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Handles one click on `position`.
    ///
    /// Errors come from the attempted move; the selection survives them.
    pub fn click(&mut self, game: &mut Game, position: Position) -> Result<ClickOutcome> {
        if let Some(from) = self.selected {
            let record = game.attempt_move(from, position)?;
            self.selected = None;
            return Ok(ClickOutcome::Moved(record));
        }

        let owned = game
            .board()
            .get(position)
            .is_ok_and(|cell| cell.color == Some(game.turn()));
        if !owned {
            trace!("ignored click on {position}");
            return Ok(ClickOutcome::Ignored);
        }

        self.selected = Some(position);
        Ok(ClickOutcome::Selected(position))
    }
}
