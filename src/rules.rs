use crate::board::{Board, in_bounds};
use crate::error::Result;
use crate::types::{Cell, Color, MoveKind, Position};

/// Decides whether `from -> to` is legal for `turn`, and what kind of move it is.
///
/// Only the destination and the jumped piece are checked, not who owns `from`.
pub fn classify(board: &Board, turn: Color, from: Position, to: Position) -> Option<MoveKind> {
    if !in_bounds(to) || !to.is_dark() {
        return None;
    }
    if !board.get(to).ok()?.is_empty() {
        return None;
    }

    let row_diff = to.row.abs_diff(from.row);
    let col_diff = to.col.abs_diff(from.col);

    match (row_diff, col_diff) {
        (1, 1) => Some(MoveKind::Step),
        (2, 2) => {
            let captured = midpoint(from, to);
            let jumped = board.get(captured).ok()?.color?;
            (jumped != turn).then_some(MoveKind::Jump { captured })
        }
        _ => None,
    }
}

pub fn is_legal(board: &Board, turn: Color, from: Position, to: Position) -> bool {
    classify(board, turn, from, to).is_some()
}

/// Moves the piece on `from` to `to`, removing the jumped piece on a jump.
///
/// The move is trusted to be legal. Returns the captured square, if any.
pub fn apply(board: &mut Board, from: Position, to: Position) -> Result<Option<Position>> {
    let piece = board.get(from)?;
    board.set(to, piece)?;

    let captured = if to.row.abs_diff(from.row) == 2 {
        let captured = midpoint(from, to);
        board.set(captured, Cell::EMPTY)?;
        Some(captured)
    } else {
        None
    };

    board.set(from, Cell::EMPTY)?;

    Ok(captured)
}

fn midpoint(from: Position, to: Position) -> Position {
    Position::new(
        ((from.row as u16 + to.row as u16) / 2) as u8,
        ((from.col as u16 + to.col as u16) / 2) as u8,
    )
}
