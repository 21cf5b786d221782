use crate::core::{Board, Cell, Direction, EntityKind, MoveEvent, Vec2};
use crate::levels::LEVELS;
use crate::session::{AttemptState, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

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

pub fn render_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        let level = session.level();
        let title = format!("{} ({})", level.name, level.difficulty);
        let board_paragraph = Paragraph::new(render_board_to_string(session.board()))
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        let best = match session.best_moves() {
            Some(best) => format!("{best}"),
            None => "-".to_string(),
        };
        let treat = if session.has_treat() {
            "treat collected"
        } else {
            "find the treat first"
        };
        let status = format!(
            "Moves: {} | Best: {} | {}{}",
            session.move_count(),
            best,
            treat,
            match session.last_event() {
                Some(MoveEvent::Blocked) => " | bump!",
                _ => "",
            }
        );
        let status_paragraph = Paragraph::new(status)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center);
        f.render_widget(status_paragraph, chunks[1]);

        let instructions = match session.state() {
            AttemptState::Won if session.new_record() => {
                "You win - new record! R to retry, N/P to change level, Q to quit"
            }
            AttemptState::Won => "You win! R to retry, N/P to change level, Q to quit",
            AttemptState::Lost => "Stepped in it... R to retry, N/P to change level, Q to quit",
            AttemptState::Playing => {
                "WASD/arrows to move, R to reset, N/P to change level, C to clear progress, Q to quit"
            }
        };
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

/// Text snapshot of a board, one glyph per cell, topmost-relevant entity
/// wins. Doubles as the board oracle in tests.
pub fn render_board_to_string(board: &Board) -> String {
    let mut result = String::new();
    for y in 0..board.rows() {
        for x in 0..board.cols() {
            result.push(glyph_for(board.cell(Vec2 { x, y })));
        }
        result.push('\n');
    }
    result
}

fn glyph_for(cell: &Cell) -> char {
    // movers are appended, so the last entity is the one standing on top
    match cell.entities().last() {
        Some(entity) => match entity.kind {
            EntityKind::Corgi => '@',
            EntityKind::Block => '$',
            EntityKind::Wall => '#',
            EntityKind::Treat => 'o',
            EntityKind::Goal => '.',
            EntityKind::Poop => '!',
        },
        None => ' ',
    }
}

pub enum ConsoleInput {
    Move(Direction),
    Reset,
    NextLevel,
    PrevLevel,
    ClearProgress,
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input() -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(match code {
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                    ConsoleInput::Move(Direction::Up)
                }
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    ConsoleInput::Move(Direction::Down)
                }
                KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                    ConsoleInput::Move(Direction::Left)
                }
                KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                    ConsoleInput::Move(Direction::Right)
                }
                KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::Reset,
                KeyCode::Char('n') | KeyCode::Char('N') => ConsoleInput::NextLevel,
                KeyCode::Char('p') | KeyCode::Char('P') => ConsoleInput::PrevLevel,
                KeyCode::Char('c') | KeyCode::Char('C') => ConsoleInput::ClearProgress,
                _ => ConsoleInput::Unknown,
            });
        }
    }
    Ok(ConsoleInput::Timeout)
}

/// Wrap-around level stepping for the N/P keys.
pub fn adjacent_level(current: usize, forward: bool) -> usize {
    let count = LEVELS.len();
    if forward {
        (current + 1) % count
    } else {
        (current + count - 1) % count
    }
}
