// Terminal Sokoban: push every crate onto a trophy tile.
// Pass a level file name to play it (resolved against the configured
// levels directory), or run with no arguments for the built-in level.

use log::info;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;

use crate_escape::config::GameConfig;
use crate_escape::console_interface::{
    ConsoleInput, cleanup_terminal, handle_input, render_game, setup_terminal,
};
use crate_escape::core::{Board, parse};
use crate_escape::logging;
use crate_escape::models::RenderState;

const DEFAULT_LEVEL_NAME: &str = "level_1.txt";
const DEFAULT_LEVEL: &str = include_str!("../levels/level_1.txt");

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let config = GameConfig::load();

    let (level_name, level_text) = match std::env::args().nth(1) {
        Some(name) => {
            let path = config.levels_dir.join(&name);
            info!("loading level file {}", path.display());
            let text = std::fs::read_to_string(&path)?;
            (name, text)
        }
        None => (DEFAULT_LEVEL_NAME.to_string(), DEFAULT_LEVEL.to_string()),
    };

    let level = parse(&level_text)?;
    info!(
        "level {}: {} crates, {} trophies",
        level_name,
        level.initial_crates().len(),
        level.trophies().len()
    );

    let mut board = Board::new_game(&level);
    let mut terminal = setup_terminal()?;
    run_interactive(&mut board, &config, level_name, &mut terminal)?;

    Ok(())
}

fn run_interactive(
    board: &mut Board,
    config: &GameConfig,
    level_name: String,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut state = RenderState {
        level_name,
        won: false,
        last_outcome: None,
        moves_made: 0,
    };
    render_game(terminal, board, &state)?;

    loop {
        match handle_input(&config.keys)? {
            ConsoleInput::Quit => break,
            ConsoleInput::Move(direction) => {
                state.last_outcome = Some(board.attempt_move(direction));
                state.moves_made = board.moves_made();
                state.won = board.is_solved();
                render_game(terminal, board, &state)?;

                if state.won {
                    info!("{} solved in {} moves", state.level_name, state.moves_made);
                    // Keep showing the win screen until the user inputs.
                    loop {
                        match handle_input(&config.keys)? {
                            ConsoleInput::Timeout => {}
                            _ => break,
                        }
                    }
                    break;
                }
            }
            ConsoleInput::Undo => {
                board.undo();
                state.last_outcome = None;
                state.moves_made = board.moves_made();
                state.won = board.is_solved();
                render_game(terminal, board, &state)?;
            }
            ConsoleInput::Reset => {
                board.reset();
                state.last_outcome = None;
                state.moves_made = 0;
                state.won = board.is_solved();
                render_game(terminal, board, &state)?;
            }
            ConsoleInput::Timeout | ConsoleInput::Unknown => {
                // No input, continue polling
            }
        }
    }

    cleanup_terminal()?;

    Ok(())
}
