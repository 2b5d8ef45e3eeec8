//! Interactive game loop for playing in the terminal.
//!
//! Reads one command per line, feeds it to the session and hands the results
//! to a [`Presenter`].

use std::io::BufRead;

use log::debug;

use crate::game::dice::Dice;
use crate::game::error::GameError;
use crate::game::state::{GameSession, TurnOutcome};
use crate::game::systems::Presenter;
use crate::game::types::Direction;

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Quit,
}

/// Map a trimmed input line to a command. Arrow-key escape sequences and w/a/s/d both work.
pub fn parse_command(input: &str) -> Option<Command> {
    match input.trim() {
        "\x1b[A" | "w" | "W" => Some(Command::Move(Direction::Up)),
        "\x1b[B" | "s" | "S" => Some(Command::Move(Direction::Down)),
        "\x1b[D" | "a" | "A" => Some(Command::Move(Direction::Left)),
        "\x1b[C" | "d" | "D" => Some(Command::Move(Direction::Right)),
        "q" | "Q" | "quit" => Some(Command::Quit),
        _ => None,
    }
}

/// Run until `input` is exhausted or the player quits.
pub fn run_game_loop<D, R, P>(
    session: &mut GameSession<D>,
    input: R,
    presenter: &mut P,
) -> Result<(), GameError>
where
    D: Dice,
    R: BufRead,
    P: Presenter,
{
    presenter.present(&session.snapshot())?;

    for line in input.lines() {
        let line = line?;
        let direction = match parse_command(&line) {
            Some(Command::Move(direction)) => direction,
            Some(Command::Quit) => break,
            None => {
                debug!("[GameLoop] Unrecognized input {:?}", line);
                continue;
            }
        };

        let report = session.submit_move(direction)?;
        if report.outcome == TurnOutcome::Ignored {
            continue;
        }

        presenter.present(&report.snapshot)?;
        for event in &report.events {
            presenter.announce(event)?;
        }
        if report.outcome != TurnOutcome::Playing {
            presenter.present(&session.snapshot())?;
        }
    }
    Ok(())
}
