pub mod board;
pub mod error;
pub mod game;
pub mod interaction;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use error::{CheckersError, Result};
pub use game::{Game, MoveRecord};
pub use interaction::{ClickOutcome, Selection};
pub use types::{Cell, Color, GameSnapshot, GameStatus, MoveKind, Position};
