use thiserror::Error;

use crate::types::{Color, Position};

pub type Result<T> = std::result::Result<T, CheckersError>;

/// Everything a caller can get wrong. None of these are fatal; the attempted
/// action is simply not performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CheckersError {
    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("({row}, {col}) is a light square and cannot hold a piece")]
    LightSquare { row: u8, col: u8 },

    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("game is already over, {winner} won")]
    GameAlreadyOver { winner: Color },
}
