//! An agent to play perfect tic-tac-toe

use anyhow::{anyhow, Result};

use crate::{
    board::{Board, Cell, Player},
    rules::{evaluate, GameState},
    SIZE,
};

/// The score of a position the maximizing player has won
pub const WIN_SCORE: i32 = 10;
/// The score of a position the minimizing player has won
pub const LOSS_SCORE: i32 = -10;
/// The score of a drawn position
pub const DRAW_SCORE: i32 = 0;

/// An agent to choose optimal tic-tac-toe moves
///
/// # Notes
/// This agent searches the complete game tree below a position to find the
/// mathematically best move, assuming the opponent also plays perfectly.
/// The 9-cell tree is small enough that no pruning or caching is needed.
///
/// # Position Scoring
/// Positions are scored from the point of view of the maximizing player:
/// +10 for a position they have won, -10 for a position their opponent has
/// won and 0 for a draw. Any other position scores as the best reachable
/// child score for whichever side is to move.
pub struct Solver {
    maximizer: Player,

    /// The number of nodes searched by this `Solver` so far (for diagnostics only)
    pub node_count: usize,
}

impl Solver {
    /// Creates a new `Solver` that picks moves for the given player
    pub fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            node_count: 0,
        }
    }

    fn terminal_score(&self, state: GameState) -> Option<i32> {
        let maximizer_win = match self.maximizer {
            Player::Cross => GameState::CrossWin,
            Player::Nought => GameState::NoughtWin,
        };

        match state {
            GameState::Playing => None,
            GameState::Draw => Some(DRAW_SCORE),
            state if state == maximizer_win => Some(WIN_SCORE),
            _ => Some(LOSS_SCORE),
        }
    }

    /// Scores a position by exhaustive game tree search
    ///
    /// `maximizing` selects the side to move at this ply: the maximizing
    /// player when true, their opponent when false. Every speculative move
    /// is undone before returning, so the board is unchanged on exit.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Result<i32> {
        self.node_count += 1;

        // terminal positions score directly
        if let Some(score) = self.terminal_score(evaluate(board)) {
            return Ok(score);
        }

        let to_move = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for row in 0..SIZE {
            for col in 0..SIZE {
                if board.get(row, col)? != Cell::Empty {
                    continue;
                }

                let mut placement = board.place(row, col, to_move.cell())?;
                let score = self.minimax(&mut placement, !maximizing)?;

                best_score = if maximizing {
                    score.max(best_score)
                } else {
                    score.min(best_score)
                };
            }
        }

        Ok(best_score)
    }

    /// Finds the optimal move for the maximizing player in the given position
    ///
    /// Returns the score of the position and the chosen move as (row, column).
    /// Candidate cells are tried in row-major order and only a strictly
    /// better score replaces the held candidate, so ties keep the first move
    /// found. A candidate that already scores a win ends the search early.
    ///
    /// Calling this on a position that is already decided is an error.
    pub fn solve(&mut self, board: &mut Board) -> Result<(i32, (usize, usize))> {
        if evaluate(board) != GameState::Playing {
            return Err(anyhow!("no move to make, the game is already over"));
        }
        self.node_count += 1;

        let mut best_score = i32::MIN;
        let mut best_move = None;

        for row in 0..SIZE {
            for col in 0..SIZE {
                if board.get(row, col)? != Cell::Empty {
                    continue;
                }

                let mut placement = board.place(row, col, self.maximizer.cell())?;
                let score = self.minimax(&mut placement, false)?;

                if score > best_score {
                    best_score = score;
                    best_move = Some((row, col));

                    if score == WIN_SCORE {
                        return Ok((score, (row, col)));
                    }
                }
            }
        }

        let best_move = best_move.ok_or_else(|| anyhow!("no empty cell to play"))?;
        Ok((best_score, best_move))
    }
}
