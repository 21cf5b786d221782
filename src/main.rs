// Corgi block-push puzzle in the terminal.
// Controls: WASD or arrow keys to move, R reset, N/P level, C clear progress, Q quit.
// Tiles: '#' wall, '@' corgi, '$' block, 'o' treat, '.' goal, '!' poop, ' ' empty.

mod console_interface;
mod core;
mod error;
mod levels;
mod session;
mod solver;
#[cfg(test)]
mod test;

use crate::console_interface::{
    adjacent_level, cleanup_terminal, handle_input, render_session, setup_terminal, ConsoleInput,
};
use crate::levels::LEVELS;
use crate::session::{JsonScoreStore, Session};
use crate::solver::solve;

const SCORE_FILE: &str = "corgi_push_scores.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let switch = std::env::args().nth(1).unwrap_or("interactive".to_string());

    match switch.as_str() {
        "check" => {
            run_level_check()?;
        }
        "interactive" => {
            run_interactive()?;
        }
        _ => {
            println!(
                "Unknown mode: {}. Use 'interactive' or 'check'. defaulting to interactive",
                switch
            );
            run_interactive()?;
        }
    }

    Ok(())
}

/// Solves every shipped level and prints its par, flagging unwinnable ones.
fn run_level_check() -> Result<(), Box<dyn std::error::Error>> {
    for def in LEVELS.iter() {
        let board = def.board()?;
        match solve(&board) {
            Some(par) => println!("{} ({}): winnable, par {} moves", def.name, def.difficulty, par),
            None => println!("{} ({}): NOT WINNABLE", def.name, def.difficulty),
        }
    }
    Ok(())
}

fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let store = JsonScoreStore::open(SCORE_FILE)?;
    let mut session = Session::new(Box::new(store))?;
    let mut terminal = setup_terminal()?;

    render_session(&mut terminal, &session)?;

    loop {
        match handle_input()? {
            ConsoleInput::Quit => break,
            ConsoleInput::Move(direction) => {
                session.move_player(direction);
                render_session(&mut terminal, &session)?;
            }
            ConsoleInput::Reset => {
                session.reset()?;
                render_session(&mut terminal, &session)?;
            }
            ConsoleInput::NextLevel => {
                session.load_level(adjacent_level(session.level_index(), true))?;
                render_session(&mut terminal, &session)?;
            }
            ConsoleInput::PrevLevel => {
                session.load_level(adjacent_level(session.level_index(), false))?;
                render_session(&mut terminal, &session)?;
            }
            ConsoleInput::ClearProgress => {
                session.clear_all_progress();
                render_session(&mut terminal, &session)?;
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {
                // No input, continue polling
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
