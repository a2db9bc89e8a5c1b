//! Terminal front-end: the collaborator that feeds inputs to the engine
//! and draws what the engine reports back. No game rules live here.

use crate::config::KeyConfig;
use crate::core::{Board, Direction, GRID_SIZE, MoveOutcome, Vec2};
use crate::models::RenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub enum ConsoleInput {
    Move(Direction),
    Undo,
    Reset,
    Quit,
    Timeout,
    Unknown,
}

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Lowercase token for a key event, in the vocabulary `config.toml` uses.
fn key_token(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_ascii_lowercase().to_string()),
        KeyCode::Up => Some("up".into()),
        KeyCode::Down => Some("down".into()),
        KeyCode::Left => Some("left".into()),
        KeyCode::Right => Some("right".into()),
        KeyCode::Esc => Some("esc".into()),
        KeyCode::Backspace => Some("backspace".into()),
        _ => None,
    }
}

/// Poll for one input and resolve it through the key table.
pub fn handle_input(keys: &KeyConfig) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            let Some(token) = key_token(code) else {
                return Ok(ConsoleInput::Unknown);
            };

            let bound = |bindings: &[String]| bindings.iter().any(|b| *b == token);

            return Ok(if bound(&keys.quit) {
                ConsoleInput::Quit
            } else if bound(&keys.up) {
                ConsoleInput::Move(Direction::Up)
            } else if bound(&keys.down) {
                ConsoleInput::Move(Direction::Down)
            } else if bound(&keys.left) {
                ConsoleInput::Move(Direction::Left)
            } else if bound(&keys.right) {
                ConsoleInput::Move(Direction::Right)
            } else if bound(&keys.undo) {
                ConsoleInput::Undo
            } else if bound(&keys.reset) {
                ConsoleInput::Reset
            } else {
                ConsoleInput::Unknown
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    board: &Board,
    state: &RenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Board area
        let board_text = render_board_to_string(board);
        let board_paragraph = Paragraph::new(board_text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(state.level_name.clone()),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        // Status bar
        let status = if state.won {
            format!("Solved in {} moves! Press any key to quit.", state.moves_made)
        } else {
            format!(
                "Moves: {} | Arrows/WASD move, U undo, R restart, Q quit",
                state.moves_made
            )
        };

        let status = if let Some(MoveOutcome::Blocked) = state.last_outcome {
            format!("{} | Blocked", status)
        } else {
            status
        };

        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// One character per cell: '#' wall, '@' character, '+' character on
/// trophy, '$' crate, '*' crate on trophy, '.' trophy, ' ' empty.
pub fn render_board_to_string(board: &Board) -> String {
    let level = board.level();
    let mut result = String::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let pos = Vec2::new(col as i32, row as i32);
            let on_trophy = level.is_trophy(pos);
            let ch = if level.is_wall(pos) {
                '#'
            } else if board.character_pos() == pos {
                if on_trophy { '+' } else { '@' }
            } else if board.crate_at(pos).is_some() {
                if on_trophy { '*' } else { '$' }
            } else if on_trophy {
                '.'
            } else {
                ' '
            };
            result.push(ch);
        }
        result.push('\n');
    }
    result
}
