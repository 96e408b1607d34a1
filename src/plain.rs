//! Plain console front-end.
//!
//! Prints the board as text and reads one command per line: `w`/`a`/`s`/`d`
//! (or `up`/`left`/...) to move, `r` to restart, `q` to quit. Useful over
//! pipes and on terminals without raw mode.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::core::GameState;
use crate::types::GameAction;

const PROMPT: &str = "Direction (w: up, a: left, s: down, d: right, r: restart, q: quit): ";

/// Play until the input ends, the player quits or the game is over.
pub fn run<R: BufRead, W: Write>(game: &mut GameState, input: R, out: &mut W) -> Result<()> {
    print_state(game, out)?;
    write!(out, "{}", PROMPT)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let cmd = line.trim();
        if cmd.eq_ignore_ascii_case("q") || cmd.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some(action) = GameAction::from_str(cmd) else {
            writeln!(out, "Invalid input, please try again!")?;
            write!(out, "{}", PROMPT)?;
            out.flush()?;
            continue;
        };

        let changed = game.apply(action);
        if action.direction().is_some() && !changed {
            writeln!(out, "Can't move that way, try another direction.")?;
        }

        print_state(game, out)?;
        if game.is_over() {
            writeln!(out, "Game over! Final score: {}", game.score())?;
            out.flush()?;
            return Ok(());
        }

        write!(out, "{}", PROMPT)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

fn print_state<W: Write>(game: &GameState, out: &mut W) -> Result<()> {
    writeln!(out, "{}", game.board())?;
    writeln!(out, "Score: {}", game.score())?;
    Ok(())
}
