use std::fmt;

use serde::Serialize;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
}

impl Color {
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Green => f.write_str("Green"),
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Dark cells are the only ones that ever hold a piece.
    pub const fn is_dark(self) -> bool {
        (self.row as u16 + self.col as u16) % 2 == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Contents of a single square. `color: None` is an empty square.
///
/// `king` is never set; it is carried so the shape matches what renderers
/// already expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Cell {
    pub color: Option<Color>,
    pub king: bool,
}

impl Cell {
    pub const EMPTY: Cell = Cell {
        color: None,
        king: false,
    };

    pub const fn piece(color: Color) -> Self {
        Self {
            color: Some(color),
            king: false,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.color.is_none()
    }
}

/// Whether play continues, and who won once it doesn't.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Over { winner: Color },
}

impl GameStatus {
    pub const fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over { winner } => Some(*winner),
        }
    }

    pub const fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }
}

/// Read-only view handed to renderers after every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: [[Cell; 8]; 8],
    pub turn: Color,
    pub status: GameStatus,
    pub red_count: u8,
    pub green_count: u8,
}

impl GameSnapshot {
    /// Human-readable status line, e.g. "Red's Turn" or "Green wins!".
    pub fn status_text(&self) -> String {
        match self.status.winner() {
            Some(winner) => format!("{winner} wins!"),
            None => format!("{}'s Turn", self.turn),
        }
    }
}

/// How a legal move relates its two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Step,
    Jump { captured: Position },
}
