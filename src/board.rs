use anyhow::{anyhow, Result};

use crate::{CELLS, SIZE};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Cross,
    Nought,
    Empty,
}

impl Cell {
    fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

/// One of the two players, named for the symbol they place
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    /// The player who moves after this one
    pub fn opponent(self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// The symbol this player places on the board
    pub fn cell(self) -> Cell {
        match self {
            Player::Cross => Cell::Cross,
            Player::Nought => Cell::Nought,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Cross => write!(f, "X"),
            Player::Nought => write!(f, "O"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    cells: [Cell; CELLS], // cells are stored row-major, top-to-bottom
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Builds a position from a row-major string of 'X', 'O' and '.'
    /// characters, ignoring whitespace
    pub fn from_str<S: AsRef<str>>(position: S) -> Result<Self> {
        let mut board = Self::new();
        let mut symbols = position.as_ref().chars().filter(|c| !c.is_whitespace());

        for row in 0..SIZE {
            for col in 0..SIZE {
                let cell = match symbols.next() {
                    Some('X') | Some('x') => Cell::Cross,
                    Some('O') | Some('o') => Cell::Nought,
                    Some('.') => Cell::Empty,
                    Some(other) => {
                        return Err(anyhow!("could not parse '{}' as a cell", other));
                    }
                    None => {
                        return Err(anyhow!("position too short, expected {} cells", CELLS));
                    }
                };
                board.set(row, col, cell)?;
            }
        }
        if symbols.next().is_some() {
            return Err(anyhow!("position too long, expected {} cells", CELLS));
        }
        Ok(board)
    }

    fn index(row: usize, col: usize) -> Result<usize> {
        if row >= SIZE || col >= SIZE {
            return Err(anyhow!(
                "cell ({}, {}) out of range, rows and columns run from 0 to {}",
                row,
                col,
                SIZE - 1
            ));
        }
        Ok(row * SIZE + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Ok(self.cells[Self::index(row, col)?])
    }

    /// Overwrites a cell unconditionally; callers are responsible for only
    /// placing symbols on empty cells and for restoring any cell they
    /// speculated on
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        self.cells[Self::index(row, col)?] = cell;
        Ok(())
    }

    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    // for the outcome rules, which only index with the const line table
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * SIZE + col]
    }

    /// Writes a cell and returns a guard that restores the previous value
    /// when dropped, whichever way control leaves the enclosing scope
    pub fn place(&mut self, row: usize, col: usize, cell: Cell) -> Result<Placement<'_>> {
        let index = Self::index(row, col)?;
        let previous = self.cells[index];
        self.cells[index] = cell;

        Ok(Placement {
            board: self,
            index,
            previous,
        })
    }
}

/// A speculative move on a board, undone when the guard is dropped
pub struct Placement<'a> {
    board: &'a mut Board,
    index: usize,
    previous: Cell,
}

impl Drop for Placement<'_> {
    fn drop(&mut self) {
        self.board.cells[self.index] = self.previous;
    }
}

impl std::ops::Deref for Placement<'_> {
    type Target = Board;

    fn deref(&self) -> &Self::Target {
        self.board
    }
}

impl std::ops::DerefMut for Placement<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.board
    }
}
