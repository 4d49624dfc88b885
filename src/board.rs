use std::fmt;

use crate::error::{CheckersError, Result};
use crate::types::{Cell, Color, Position};

pub const BOARD_SIZE: usize = 8;
const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

/// Green fills the dark squares of rows `0..GREEN_ROWS_END`.
const GREEN_ROWS_END: u8 = 3;
/// Red fills the dark squares of rows `RED_ROWS_START..8`.
const RED_ROWS_START: u8 = 5;

/// Checkers board state represented by three bitboards.
///
/// Bit `row * 8 + col` is set in `red`/`green` when that color occupies the
/// square. `kings` marks crowned pieces and stays zero, since nothing in the
/// rules ever crowns one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    red: u64,
    green: u64,
    kings: u64,
}

impl Board {
    /// Creates the starting board: twelve Green pieces on the dark squares of
    /// rows 0-2, twelve Red pieces on the dark squares of rows 5-7.
    pub fn new() -> Self {
        let mut red = 0u64;
        let mut green = 0u64;

        for pos in 0..NUM_SQUARES {
            let position = index_to_position(pos);
            if !position.is_dark() {
                continue;
            }
            if position.row < GREEN_ROWS_END {
                green |= bit(pos);
            } else if position.row >= RED_ROWS_START {
                red |= bit(pos);
            }
        }

        Self {
            red,
            green,
            kings: 0,
        }
    }

    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            red: 0,
            green: 0,
            kings: 0,
        }
    }

    pub fn get(&self, position: Position) -> Result<Cell> {
        let square = bit(index_of(position)?);
        let color = if (self.red & square) != 0 {
            Some(Color::Red)
        } else if (self.green & square) != 0 {
            Some(Color::Green)
        } else {
            None
        };

        Ok(Cell {
            color,
            king: (self.kings & square) != 0,
        })
    }

    /// Overwrites one square. Pieces may only go on dark squares.
    pub fn set(&mut self, position: Position, cell: Cell) -> Result<()> {
        let square = bit(index_of(position)?);
        if cell.color.is_some() && !position.is_dark() {
            return Err(CheckersError::LightSquare {
                row: position.row,
                col: position.col,
            });
        }

        self.red &= !square;
        self.green &= !square;
        self.kings &= !square;

        match cell.color {
            Some(Color::Red) => self.red |= square,
            Some(Color::Green) => self.green |= square,
            None => return Ok(()),
        }
        if cell.king {
            self.kings |= square;
        }

        Ok(())
    }

    /// Returns `(red_count, green_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.red.count_ones() as u8, self.green.count_ones() as u8)
    }

    /// Expands the board into a row-major grid of cells.
    pub fn cells(&self) -> [[Cell; BOARD_SIZE]; BOARD_SIZE] {
        let mut cells = [[Cell::EMPTY; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                let square = bit(row * BOARD_SIZE + col);
                cell.color = if (self.red & square) != 0 {
                    Some(Color::Red)
                } else if (self.green & square) != 0 {
                    Some(Color::Green)
                } else {
                    None
                };
                cell.king = (self.kings & square) != 0;
            }
        }
        cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per row, `r`/`g` for pieces, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells() {
            for cell in line {
                let symbol = match (cell.color, cell.king) {
                    (Some(Color::Red), false) => 'r',
                    (Some(Color::Red), true) => 'R',
                    (Some(Color::Green), false) => 'g',
                    (Some(Color::Green), true) => 'G',
                    (None, _) => '.',
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn in_bounds(position: Position) -> bool {
    (position.row as usize) < BOARD_SIZE && (position.col as usize) < BOARD_SIZE
}

fn index_of(position: Position) -> Result<usize> {
    if !in_bounds(position) {
        return Err(CheckersError::OutOfBounds {
            row: position.row,
            col: position.col,
        });
    }
    Ok(position.row as usize * BOARD_SIZE + position.col as usize)
}

fn bit(pos: usize) -> u64 {
    if pos < NUM_SQUARES { 1u64 << pos } else { 0 }
}

fn index_to_position(pos: usize) -> Position {
    Position::new((pos / BOARD_SIZE) as u8, (pos % BOARD_SIZE) as u8)
}
