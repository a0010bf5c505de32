use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use tictactoe_ai::{Board, Cell, SIZE};

/// Draws the board as a coloured grid with 1-indexed row and column labels
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=SIZE).map(|col| col.to_string()).collect();
    stdout.queue(PrintStyledContent(style(format!("  {}\n", cols))))?;

    for row in 0..SIZE {
        stdout.queue(PrintStyledContent(style(format!("{} ", row + 1))))?;
        for col in 0..SIZE {
            let cell = board.get(row, col)?;
            let symbol = match cell {
                Cell::Cross => "X",
                Cell::Nought => "O",
                Cell::Empty => ".",
            };

            stdout.queue(PrintStyledContent(
                style(symbol)
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(match cell {
                        Cell::Cross => Color::Red,
                        Cell::Nought => Color::Yellow,
                        Cell::Empty => Color::Grey,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
