//! A perfect agent for playing or analysing the board game 'tic-tac-toe'
//!
//! This agent searches the full game tree to find the mathematically
//! optimal move for any position.
//!
//! # Basic Usage
//!
//! ```
//! use tictactoe_ai::{Board, Player, Solver};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut board = Board::from_str("X.. .X. OO.")?;
//! let mut solver = Solver::new(Player::Cross);
//! let (score, best_move) = solver.solve(&mut board)?;
//!
//! assert!((score, best_move) == (10, (2, 2)));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod analysis;

pub mod board;

pub mod rules;

pub mod session;

pub mod solver;


pub use board::{Board, Cell, Placement, Player};
pub use rules::{evaluate, GameState};
pub use session::Session;
pub use solver::Solver;

/// The width and height of the square game board in cells
pub const SIZE: usize = 3;

/// The total number of cells on the board
pub const CELLS: usize = SIZE * SIZE;

// the winning line table in `rules` is written for a 3x3 board
const_assert_eq!(SIZE, 3);
