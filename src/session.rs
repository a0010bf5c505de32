//! State for a single game between two players

use anyhow::{anyhow, Result};

use crate::{
    board::{Board, Cell, Player},
    rules::{evaluate, GameState},
};

/// A game in progress: the board together with the player whose turn it is
///
/// The outcome is recomputed from the board on every query, never stored.
pub struct Session {
    board: Board,
    to_move: Player,
}

impl Session {
    /// Starts a fresh game on an empty board, crosses to move first
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Cross,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Exclusive board access, used by the search for the duration of one
    /// solve call; the search restores every speculative move it makes
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> GameState {
        evaluate(&self.board)
    }

    pub fn is_over(&self) -> bool {
        self.state() != GameState::Playing
    }

    /// Applies a move for the player whose turn it is
    ///
    /// Fails without passing the turn if the game is over, the coordinates
    /// are out of range or the target cell is occupied. On success the turn
    /// passes to the opponent and the new outcome is returned.
    pub fn play_checked(&mut self, row: usize, col: usize) -> Result<GameState> {
        if self.is_over() {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        if self.board.get(row, col)? != Cell::Empty {
            return Err(anyhow!("Invalid move, cell ({}, {}) is taken", row, col));
        }

        self.board.set(row, col, self.to_move.cell())?;
        self.to_move = self.to_move.opponent();

        Ok(self.state())
    }
}
