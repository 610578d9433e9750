//! Connect Four board state.
//!
//! Connect Four is a two-player connection game where players drop colored
//! discs into a 7-column, 6-row vertically suspended grid. The first player
//! to form a horizontal, vertical, or diagonal line of four discs wins.
//!
//! # Board Layout
//!
//! The board is stored in row-major order, with row 0 at the bottom:
//! ```text
//! Row 5: [35][36][37][38][39][40][41]  <- Top
//! Row 4: [28][29][30][31][32][33][34]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```
//!
//! Unlike a full game engine state, [`Board`] carries no current-player or
//! winner field: whose turn it is belongs to the caller, and the outcome is
//! recomputed from the last placed piece via [`Board::outcome_after`]. This
//! keeps the board a plain value that search code can clone and mutate freely.
//!
//! # Usage
//!
//! ```rust
//! use connect4::{Board, Player};
//!
//! let mut board = Board::new();
//! let placed = board.drop_piece(3, Player::Red).unwrap();
//! assert_eq!(placed, (0, 3));
//! assert_eq!(board.outcome_after(placed), None); // game still in progress
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Board dimensions.
pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const BOARD_SIZE: usize = ROWS * COLS;

/// One of the two sides.
///
/// By convention Red is the minimizing player and Yellow the maximizing
/// player when outcomes are scored (see [`Outcome::score`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    /// The other side.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }

    /// The cell occupied by this player.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }

    /// Single-character token used in board files and display.
    pub fn token(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Yellow => 'Y',
        }
    }
}

/// Error parsing a player token.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid player token '{0}': expected R or Y")]
pub struct ParsePlayerError(pub String);

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Player::Red),
            "Y" => Ok(Player::Yellow),
            other => Err(ParsePlayerError(other.to_string())),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// Contents of one grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The player occupying this cell, if any.
    #[inline]
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    /// Single-character token: `O` for empty, `R`/`Y` for the players.
    pub fn token(self) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }

    fn from_token(c: char) -> Option<Cell> {
        match c {
            'O' => Some(Cell::Empty),
            'R' => Some(Cell::Red),
            'Y' => Some(Cell::Yellow),
            _ => None,
        }
    }
}

/// Terminal result of a game.
///
/// Absent (`None` from [`Board::outcome_after`]) while the game is still in
/// progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Player),
    Draw,
}

impl Outcome {
    /// Signed score: +1 for a Yellow win, -1 for a Red win, 0 for a draw.
    #[inline]
    pub fn score(self) -> f64 {
        match self {
            Outcome::Win(Player::Yellow) => 1.0,
            Outcome::Win(Player::Red) => -1.0,
            Outcome::Draw => 0.0,
        }
    }
}

/// A move was applied to a column with no empty cell left.
///
/// This indicates a caller contract violation (legality was not checked
/// first), not a runtime game event.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("column {column} is full")]
pub struct ColumnFullError {
    pub column: usize,
}

/// Error parsing a board from its six-row text form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    #[error("expected 6 board rows, got {0}")]
    WrongRowCount(usize),

    #[error("board row {row} has {len} cells, expected 7")]
    WrongRowLength { row: usize, len: usize },

    #[error("invalid cell token '{token}' at row {row}, column {column}")]
    InvalidToken {
        token: char,
        row: usize,
        column: usize,
    },

    #[error("floating piece in column {column}: pieces must rest on the stack below")]
    FloatingPiece { column: usize },
}

/// The 6x7 grid plus per-column piece counts.
///
/// A plain value: cloning yields a fully independent board, so search code
/// can branch without aliasing the original storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
    heights: [u8; COLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
            heights: [0; COLS],
        }
    }

    /// Convert column and row to board index.
    #[inline]
    fn pos(col: usize, row: usize) -> usize {
        row * COLS + col
    }

    /// Cell at the given position (row 0 is the bottom).
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::pos(col, row)]
    }

    /// Number of pieces stacked in the given column.
    #[inline]
    pub fn height(&self, col: usize) -> usize {
        self.heights[col] as usize
    }

    /// Whether a piece can be dropped into the given column.
    #[inline]
    pub fn is_legal(&self, column: usize) -> bool {
        column < COLS && (self.heights[column] as usize) < ROWS
    }

    /// Columns that can still receive a piece, in ascending order.
    ///
    /// An empty result signals a full board.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_legal(col)).collect()
    }

    /// Whether every column is full.
    pub fn is_full(&self) -> bool {
        self.heights.iter().all(|&h| h as usize >= ROWS)
    }

    /// Number of empty cells remaining.
    pub fn empty_cells(&self) -> usize {
        BOARD_SIZE - self.heights.iter().map(|&h| h as usize).sum::<usize>()
    }

    /// Drop `player`'s piece into `column` and return where it landed.
    ///
    /// The piece lands in the lowest empty cell of the column. Fails with
    /// [`ColumnFullError`] when the column has no empty cell (or does not
    /// exist); callers are expected to check legality first, so the error
    /// marks a contract violation rather than a normal game event. The
    /// board is left unchanged on error.
    pub fn drop_piece(
        &mut self,
        column: usize,
        player: Player,
    ) -> Result<(usize, usize), ColumnFullError> {
        if !self.is_legal(column) {
            return Err(ColumnFullError { column });
        }

        let row = self.heights[column] as usize;
        self.cells[Self::pos(column, row)] = player.cell();
        self.heights[column] += 1;
        Ok((row, column))
    }

    /// Resolve the game relative to the most recently placed piece.
    ///
    /// Counts contiguous same-player cells through `last_move` along the
    /// four axes (horizontal, vertical, both diagonals); a run of four or
    /// more wins for that piece's owner. With no win and no legal moves
    /// left the game is a draw. Returns `None` while the game is still in
    /// progress.
    ///
    /// The scan is bounded by the board dimensions and never rescans the
    /// whole grid, so it must only be called with the coordinates returned
    /// by the latest [`Board::drop_piece`].
    pub fn outcome_after(&self, last_move: (usize, usize)) -> Option<Outcome> {
        let (row, col) = last_move;
        let player = self.cells[Self::pos(col, row)].player()?;

        // Axis directions: horizontal, vertical, diagonal /, diagonal \
        const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

        for (dc, dr) in DIRECTIONS {
            // The origin cell is shared by both half-runs, hence the 1.
            let count =
                1 + self.run_length(col, row, dc, dr, player)
                    + self.run_length(col, row, -dc, -dr, player);
            if count >= 4 {
                return Some(Outcome::Win(player));
            }
        }

        if self.is_full() {
            return Some(Outcome::Draw);
        }

        None
    }

    /// Count contiguous `player` cells starting one step from (col, row)
    /// along (dc, dr).
    fn run_length(&self, col: usize, row: usize, dc: i32, dr: i32, player: Player) -> usize {
        let mut count = 0;
        let (mut c, mut r) = (col as i32 + dc, row as i32 + dr);
        while (0..COLS as i32).contains(&c)
            && (0..ROWS as i32).contains(&r)
            && self.cells[Self::pos(c as usize, r as usize)] == player.cell()
        {
            count += 1;
            c += dc;
            r += dr;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parse the six-row text form, top row first, as used in board files.
    ///
    /// Tokens may be contiguous (`RYOOOOO`) or space-separated
    /// (`R Y O O O O O`); blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != ROWS {
            return Err(ParseBoardError::WrongRowCount(lines.len()));
        }

        let mut board = Board::new();
        for (i, line) in lines.iter().enumerate() {
            // The file lists the top row first; row 0 is the bottom.
            let row = ROWS - 1 - i;
            let tokens: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if tokens.len() != COLS {
                return Err(ParseBoardError::WrongRowLength {
                    row: i,
                    len: tokens.len(),
                });
            }
            for (col, &token) in tokens.iter().enumerate() {
                let cell = Cell::from_token(token).ok_or(ParseBoardError::InvalidToken {
                    token,
                    row: i,
                    column: col,
                })?;
                board.cells[Self::pos(col, row)] = cell;
            }
        }

        // Derive column heights, rejecting boards where a piece floats
        // above an empty cell.
        for col in 0..COLS {
            let mut height = 0;
            while height < ROWS && board.cells[Self::pos(col, height)] != Cell::Empty {
                height += 1;
            }
            for row in height..ROWS {
                if board.cells[Self::pos(col, row)] != Cell::Empty {
                    return Err(ParseBoardError::FloatingPiece { column: col });
                }
            }
            board.heights[col] = height as u8;
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    /// Space-separated tokens, top row first, one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[Self::pos(col, row)].token())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
