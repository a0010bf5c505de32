use anyhow::Result;

use std::cmp::Ordering;
use std::io::{stdin, stdout, Write};

use tictactoe_ai::*;

mod display;
use display::*;

fn main() -> Result<()> {
    let mut session = Session::new();

    let stdin = stdin();

    println!("Welcome to Tic-Tac-Toe\n");

    // offer a perfect-play preview of the opening moves
    loop {
        let mut buffer = String::new();
        print!("Analyse the opening moves before playing? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                println!("Score of each opening cell for X (0 is a draw):");
                for (_row, col, score) in analysis::opening_scores()? {
                    print!("{:>3}", score);
                    if col == SIZE - 1 {
                        println!();
                    }
                }
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    let mut ai_players = (false, false);

    // choose AI control of player X
    loop {
        let mut buffer = String::new();
        print!("Is player X AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.0 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // choose AI control of player O
    loop {
        let mut buffer = String::new();
        print!("Is player O AI controlled? y/n: ");
        stdout().flush().expect("failed to flush to stdout!");
        stdin.read_line(&mut buffer)?;
        match buffer.to_lowercase().chars().next() {
            Some(_letter @ 'y') => {
                ai_players.1 = true;
                break;
            }
            Some(_letter @ 'n') => break,
            _ => println!("Unknown answer given"),
        }
    }

    // game loop
    loop {
        draw_board(session.board()).expect("Failed to draw board!");

        match session.state() {
            GameState::Playing => {
                let to_move = session.to_move();
                let ai_turn = match to_move {
                    Player::Cross => ai_players.0,
                    Player::Nought => ai_players.1,
                };

                let next_move =
                    // AI player
                    if ai_turn {
                        println!("AI is thinking...");
                        stdout().flush().expect("Failed to flush to stdout!");

                        // slow down play if both players are AI
                        if ai_players == (true, true) {
                            std::thread::sleep(std::time::Duration::new(1, 0));
                        }

                        let mut solver = Solver::new(to_move);
                        let (score, best_move) = solver.solve(session.board_mut())?;

                        match score.cmp(&0) {
                            Ordering::Greater => {
                                println!("Player {} can force a win.", to_move);
                            }
                            Ordering::Less => {
                                println!("Player {} can force a win.", to_move.opponent());
                            }
                            Ordering::Equal => {
                                println!("Best play from here is a draw.");
                            }
                        }

                        println!("Best move: row {} column {}", best_move.0 + 1, best_move.1 + 1);
                        best_move

                    // human player
                    } else {
                        print!("Move input (row column) > ");
                        stdout().flush().expect("Failed to flush to stdout!");
                        let mut input_str = String::new();
                        stdin.read_line(&mut input_str)?;

                        let (row, col) = match parse_move(&input_str) {
                            None => {
                                println!(
                                    "Moves are two numbers from 1 to {}, e.g. '1 3' for the top right cell",
                                    SIZE
                                );
                                continue;
                            }
                            Some(cell) => cell,
                        };

                        if session.board().get(row, col)? != Cell::Empty {
                            println!("That cell is already taken");
                            continue;
                        }
                        (row, col)
                    };

                if let Err(err) = session.play_checked(next_move.0, next_move.1) {
                    println!("{}", err);
                    // try the move again
                    continue;
                }
            }

            // end states
            GameState::CrossWin => {
                println!("Player X wins!");
                break;
            }
            GameState::NoughtWin => {
                println!("Player O wins!");
                break;
            }
            GameState::Draw => {
                println!("Draw!");
                break;
            }
        }
    }
    Ok(())
}

/// Translates a "row column" line of 1-indexed input into board coordinates
fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut numbers = input.split_whitespace().map(|token| token.parse::<usize>());

    let row = numbers.next()?.ok()?;
    let col = numbers.next()?.ok()?;
    if numbers.next().is_some() {
        return None;
    }
    if !(1..=SIZE).contains(&row) || !(1..=SIZE).contains(&col) {
        return None;
    }

    Some((row - 1, col - 1))
}
