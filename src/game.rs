use log::{debug, info, trace};

use crate::board::{Board, in_bounds};
use crate::error::{CheckersError, Result};
use crate::rules;
use crate::types::{Color, GameSnapshot, GameStatus, MoveKind, Position};

pub const STARTING_TURN: Color = Color::Red;

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub mover: Color,
    pub kind: MoveKind,
    pub status: GameStatus,
}

/// Owns the board and the turn, and decides when the game ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Color,
    status: GameStatus,
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: STARTING_TURN,
            status: GameStatus::InProgress,
        }
    }

    /// Starts from an arbitrary position, e.g. a puzzle or a test fixture.
    ///
    /// The status is derived from the board, so a position where one side
    /// has no pieces left starts out finished.
    pub fn from_position(board: Board, turn: Color) -> Self {
        let mut game = Self {
            board,
            turn,
            status: GameStatus::InProgress,
        };
        game.status = game.evaluate_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_over()
    }

    /// Validates and plays one move for the player on turn.
    ///
    /// On error nothing changes: board, turn and status are as before.
    pub fn attempt_move(&mut self, from: Position, to: Position) -> Result<MoveRecord> {
        if let GameStatus::Over { winner } = self.status {
            return Err(CheckersError::GameAlreadyOver { winner });
        }
        for position in [from, to] {
            if !in_bounds(position) {
                return Err(CheckersError::OutOfBounds {
                    row: position.row,
                    col: position.col,
                });
            }
        }

        let Some(kind) = rules::classify(&self.board, self.turn, from, to) else {
            trace!("rejected {} move {from} -> {to}", self.turn);
            return Err(CheckersError::IllegalMove { from, to });
        };

        rules::apply(&mut self.board, from, to)?;
        let mover = self.turn;
        debug!("{mover} moved {from} -> {to} ({kind:?})");
        trace!("board after move:\n{}", self.board);

        self.status = self.evaluate_status();
        match self.status {
            GameStatus::Over { winner } => info!("game over, {winner} wins"),
            GameStatus::InProgress => self.turn = self.turn.opponent(),
        }

        Ok(MoveRecord {
            from,
            to,
            mover,
            kind,
            status: self.status,
        })
    }

    /// Discards the current board and starts a fresh game with Red to move.
    pub fn reset(&mut self) {
        info!("game reset");
        *self = Self::new();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let (red_count, green_count) = self.board.count();
        GameSnapshot {
            board: self.board.cells(),
            turn: self.turn,
            status: self.status,
            red_count,
            green_count,
        }
    }

    fn evaluate_status(&self) -> GameStatus {
        match self.board.count() {
            (0, 0) => GameStatus::Over { winner: self.turn },
            (0, _) => GameStatus::Over {
                winner: Color::Green,
            },
            (_, 0) => GameStatus::Over { winner: Color::Red },
            _ => GameStatus::InProgress,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn game_with(pieces: &[(u8, u8, Color)], turn: Color) -> Game {
        let mut board = Board::empty();
        for &(row, col, color) in pieces {
            board.set(pos(row, col), Cell::piece(color)).unwrap();
        }
        Game::from_position(board, turn)
    }

    #[test]
    fn initial_state_is_correct() {
        let game = Game::new();
        let state = game.snapshot();

        assert_eq!(state.turn, Color::Red);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.red_count, 12);
        assert_eq!(state.green_count, 12);
        assert_eq!(state.status_text(), "Red's Turn");
    }

    #[test]
    fn legal_move_flips_turn_once() {
        let mut game = Game::new();

        let record = game.attempt_move(pos(5, 0), pos(4, 1)).unwrap();
        assert_eq!(record.mover, Color::Red);
        assert_eq!(record.kind, MoveKind::Step);
        assert_eq!(game.turn(), Color::Green);

        game.attempt_move(pos(2, 1), pos(3, 2)).unwrap();
        assert_eq!(game.turn(), Color::Red);
    }

    #[test]
    fn illegal_move_changes_nothing() {
        let mut game = Game::new();
        let before = game.clone();

        let err = game.attempt_move(pos(5, 0), pos(4, 0)).unwrap_err();

        assert_eq!(
            err,
            CheckersError::IllegalMove {
                from: pos(5, 0),
                to: pos(4, 0)
            }
        );
        assert_eq!(game, before);
    }

    #[test]
    fn move_from_empty_square_still_passes_the_turn() {
        let mut game = Game::new();
        let board_before = *game.board();

        let record = game.attempt_move(pos(4, 3), pos(3, 4)).unwrap();

        assert_eq!(record.kind, MoveKind::Step);
        assert_eq!(record.mover, Color::Red);
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.turn(), Color::Green);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn off_board_endpoints_report_out_of_bounds() {
        let mut game = Game::new();
        let before = game.clone();

        assert_eq!(
            game.attempt_move(pos(5, 0), pos(4, 8)),
            Err(CheckersError::OutOfBounds { row: 4, col: 8 })
        );
        assert_eq!(
            game.attempt_move(pos(9, 0), pos(4, 1)),
            Err(CheckersError::OutOfBounds { row: 9, col: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn capturing_last_piece_ends_game_without_flipping_turn() {
        let mut game = game_with(&[(4, 3, Color::Green), (5, 2, Color::Red)], Color::Red);

        let record = game.attempt_move(pos(5, 2), pos(3, 4)).unwrap();

        assert_eq!(
            record.kind,
            MoveKind::Jump {
                captured: pos(4, 3)
            }
        );
        assert_eq!(record.status, GameStatus::Over { winner: Color::Red });
        assert_eq!(game.turn(), Color::Red);
        assert_eq!(game.snapshot().status_text(), "Red wins!");
    }

    #[test]
    fn green_can_win_too() {
        let mut game = game_with(&[(2, 3, Color::Green), (3, 4, Color::Red)], Color::Green);

        game.attempt_move(pos(2, 3), pos(4, 5)).unwrap();

        assert_eq!(
            game.status(),
            GameStatus::Over {
                winner: Color::Green
            }
        );
    }

    #[test]
    fn finished_game_rejects_moves() {
        let mut game = game_with(&[(4, 3, Color::Green), (5, 2, Color::Red)], Color::Red);
        game.attempt_move(pos(5, 2), pos(3, 4)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.attempt_move(pos(3, 4), pos(2, 5)),
            Err(CheckersError::GameAlreadyOver { winner: Color::Red })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn position_without_opponents_starts_finished() {
        let game = game_with(&[(5, 2, Color::Red)], Color::Green);
        assert_eq!(game.status(), GameStatus::Over { winner: Color::Red });
    }

    #[test]
    fn reset_restores_the_initial_game() {
        let mut game = game_with(&[(4, 3, Color::Green), (5, 2, Color::Red)], Color::Red);
        game.attempt_move(pos(5, 2), pos(3, 4)).unwrap();

        game.reset();

        assert_eq!(game, Game::new());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.turn(), Color::Red);
        assert!(!game.is_game_over());
    }
}
