//! Perfect-play analysis of the opening moves

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    board::{Board, Player},
    solver::Solver,
    SIZE,
};

/// Scores every opening move for the first player by full game tree search,
/// one search per cell, run in parallel
///
/// Returns (row, column, score) triples in row-major order. Positive scores
/// favour the opening player (every opening in tic-tac-toe draws under
/// perfect play).
pub fn opening_scores() -> Result<Vec<(usize, usize, i32)>> {
    let openings: Vec<(usize, usize)> = (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |col| (row, col)))
        .collect();

    openings
        .par_iter()
        .map(|&(row, col)| -> Result<(usize, usize, i32)> {
            let mut board = Board::new();
            board.set(row, col, Player::Cross.cell())?;

            let mut solver = Solver::new(Player::Cross);
            let score = solver.minimax(&mut board, false)?;

            Ok((row, col, score))
        })
        .collect()
}
