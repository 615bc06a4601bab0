//! TUI (Terminal User Interface) module for the Wordle game.
//!
//! Renders the board, an on-screen keyboard with accumulated letter hints,
//! the score, and the current notification. Raw key events are decoded here
//! into the engine's logical input events; the engine itself never sees a
//! keyboard.

use crate::debug_log;
use crate::dictionary::Dictionary;
use crate::engine::{
    GameEngine, GameStatus, InputEvent, KeyHint, Notification, ROWS, TileState, WORD_LENGTH,
};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const ROW_SPACING: u16 = 2;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const NOTIFICATION_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const SOLVED_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const INSTRUCTIONS_STYLE: Style = Style::new().fg(Color::Gray);

/// What the player asked for, decoded from a raw key press.
#[derive(Debug, PartialEq, Eq)]
pub enum UserAction {
    Game(InputEvent),
    Exit,
}

/// Display copy for each notification kind.
fn notification_text(notification: Notification) -> &'static str {
    match notification {
        Notification::IncompleteWord => "FIVE LETTER WORDS ONLY",
        Notification::NotInList => "NOT IN THE WORD LIST",
        Notification::AlreadyTried => "WORD TRIED ALREADY",
        Notification::Solved => "WELL DONE",
        Notification::OutOfGuesses => "OUT OF GUESSES",
    }
}

fn tile_colors(state: TileState) -> (Color, Color) {
    match state {
        TileState::Empty | TileState::Pending => (Color::DarkGray, Color::White),
        TileState::Correct => (Color::Green, Color::Black),
        TileState::Present => (Color::Yellow, Color::Black),
        TileState::Absent => (Color::Gray, Color::White),
    }
}

fn key_colors(hint: KeyHint) -> (Color, Color) {
    match hint {
        KeyHint::Correct => (Color::Green, Color::Black),
        KeyHint::Present => (Color::Yellow, Color::Black),
        KeyHint::Absent => (Color::Gray, Color::White),
        KeyHint::Untouched => (Color::DarkGray, Color::White),
    }
}

/// Decode a raw key event into a [`UserAction`].
///
/// Alphabetic keys type letters while a game is running; once the game is
/// over, `N` starts a new one. Ctrl+N restarts at any point, ESC quits.
/// Everything else is ignored, so stray input can never corrupt the engine.
fn decode_key(key: KeyEvent, status: GameStatus) -> Option<UserAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Esc => Some(UserAction::Exit),
        KeyCode::Enter => Some(UserAction::Game(InputEvent::Enter)),
        KeyCode::Backspace => Some(UserAction::Game(InputEvent::Backspace)),
        KeyCode::Char(c) => {
            let has_alt = key.modifiers.contains(KeyModifiers::ALT);
            let has_ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
            if has_ctrl && c.eq_ignore_ascii_case(&'n') {
                return Some(UserAction::Game(InputEvent::NewGame));
            }
            if has_alt || has_ctrl {
                debug_log!("decode_key() - ignoring char with modifier: {:?}", key.modifiers);
                return None;
            }
            if status != GameStatus::InProgress && c.eq_ignore_ascii_case(&'n') {
                return Some(UserAction::Game(InputEvent::NewGame));
            }
            if c.is_ascii_alphabetic() {
                Some(UserAction::Game(InputEvent::Letter(c)))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Main TUI component. Owns the terminal for the lifetime of the game.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self, io::Error> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    /// Run the game until the player quits. One key event is processed to
    /// completion before the next is read, so engine inputs stay serialized.
    pub fn run<D: Dictionary>(&mut self, engine: &mut GameEngine<D>) -> Result<(), io::Error> {
        loop {
            self.draw(engine)?;

            if !event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => match decode_key(key, engine.status()) {
                    Some(UserAction::Exit) => break,
                    Some(UserAction::Game(input)) => engine.handle_event(input),
                    None => {}
                },
                other => {
                    debug_log!("run() - ignoring non-key event: {:?}", other);
                }
            }
        }
        Ok(())
    }

    fn draw<D: Dictionary>(&mut self, engine: &GameEngine<D>) -> Result<(), io::Error> {
        self.terminal.draw(|f| {
            render_frame(f, engine);
        })?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

fn render_frame<D: Dictionary>(f: &mut Frame, engine: &GameEngine<D>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title + score
            Constraint::Length(14), // Board
            Constraint::Length(8),  // Keyboard
            Constraint::Length(3),  // Notification
            Constraint::Length(3),  // Instructions
        ])
        .split(f.area());

    render_title(f, chunks[0], engine.score());
    render_board(f, chunks[1], engine);
    render_keyboard(f, chunks[2], engine);
    render_notification(f, chunks[3], engine);
    render_instructions(f, chunks[4], engine.status());
}

fn render_title(f: &mut Frame, area: Rect, score: i32) {
    let title = Paragraph::new(format!("WORDLE   Score: {score}"))
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_line(f: &mut Frame, area: Rect, y: u16, spans: Vec<Span>) {
    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);
    f.render_widget(
        paragraph,
        Rect {
            x: area.x,
            y,
            width: area.width,
            height: 1,
        },
    );
}

#[allow(clippy::cast_possible_truncation)]
fn render_board<D: Dictionary>(f: &mut Frame, area: Rect, engine: &GameEngine<D>) {
    let block = Block::default().title("Board").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (active_row, _) = engine.cursor();

    for row in 0..ROWS {
        let y = inner.y + (row as u16 * ROW_SPACING);
        if y >= inner.y + inner.height {
            return;
        }

        let mut spans = vec![Span::raw("  ")];
        for col in 0..WORD_LENGTH {
            let (letter, state) = engine.tile(row, col);
            let (bg_color, fg_color) = tile_colors(state);
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }
        if row == active_row && engine.status() == GameStatus::InProgress {
            spans.push(Span::raw(" <-"));
        }
        render_line(f, inner, y, spans);
    }
}

#[allow(clippy::cast_possible_truncation)]
fn render_keyboard<D: Dictionary>(f: &mut Frame, area: Rect, engine: &GameEngine<D>) {
    let block = Block::default().title("Keyboard").borders(Borders::ALL);
    let inner = block.inner(area);
    f.render_widget(block, area);

    for (row_index, keys) in KEYBOARD_ROWS.iter().enumerate() {
        let y = inner.y + (row_index as u16 * ROW_SPACING);
        if y >= inner.y + inner.height {
            return;
        }

        // Stagger the rows like a physical keyboard.
        let mut spans = vec![Span::raw("  ".repeat(row_index + 1))];
        for letter in keys.chars() {
            let (bg_color, fg_color) = key_colors(engine.key_hint(letter));
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default().fg(fg_color).bg(bg_color),
            ));
            spans.push(Span::raw(" "));
        }
        render_line(f, inner, y, spans);
    }
}

fn render_notification<D: Dictionary>(f: &mut Frame, area: Rect, engine: &GameEngine<D>) {
    let (text, style) = match engine.notification() {
        Some(Notification::Solved) => (notification_text(Notification::Solved), SOLVED_STYLE),
        Some(kind) => (notification_text(kind), NOTIFICATION_STYLE),
        None => ("", NOTIFICATION_STYLE),
    };
    let paragraph = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Message"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, status: GameStatus) {
    let text = match status {
        GameStatus::InProgress => {
            "Type your 5-letter guess | ENTER: Submit | BACKSPACE: Delete | CTRL+N: New Game | ESC: Quit"
        }
        GameStatus::Won | GameStatus::Lost => "N: New Game | ESC: Quit",
    };
    let paragraph = Paragraph::new(text)
        .style(INSTRUCTIONS_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_decode_letter_during_game() {
        let action = decode_key(press(KeyCode::Char('a')), GameStatus::InProgress);
        assert_eq!(action, Some(UserAction::Game(InputEvent::Letter('a'))));
    }

    #[test]
    fn test_decode_enter_and_backspace() {
        assert_eq!(
            decode_key(press(KeyCode::Enter), GameStatus::InProgress),
            Some(UserAction::Game(InputEvent::Enter))
        );
        assert_eq!(
            decode_key(press(KeyCode::Backspace), GameStatus::InProgress),
            Some(UserAction::Game(InputEvent::Backspace))
        );
    }

    #[test]
    fn test_decode_esc_exits() {
        assert_eq!(
            decode_key(press(KeyCode::Esc), GameStatus::InProgress),
            Some(UserAction::Exit)
        );
    }

    #[test]
    fn test_decode_n_is_a_letter_while_playing() {
        let action = decode_key(press(KeyCode::Char('n')), GameStatus::InProgress);
        assert_eq!(action, Some(UserAction::Game(InputEvent::Letter('n'))));
    }

    #[test]
    fn test_decode_n_starts_new_game_when_over() {
        assert_eq!(
            decode_key(press(KeyCode::Char('n')), GameStatus::Won),
            Some(UserAction::Game(InputEvent::NewGame))
        );
        assert_eq!(
            decode_key(press(KeyCode::Char('N')), GameStatus::Lost),
            Some(UserAction::Game(InputEvent::NewGame))
        );
    }

    #[test]
    fn test_decode_ctrl_n_restarts_mid_game() {
        let key = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(
            decode_key(key, GameStatus::InProgress),
            Some(UserAction::Game(InputEvent::NewGame))
        );
    }

    #[test]
    fn test_decode_ignores_modified_letters() {
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::ALT);
        assert_eq!(decode_key(key, GameStatus::InProgress), None);
        let key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert_eq!(decode_key(key, GameStatus::InProgress), None);
    }

    #[test]
    fn test_decode_ignores_non_letters() {
        assert_eq!(decode_key(press(KeyCode::Char('3')), GameStatus::InProgress), None);
        assert_eq!(decode_key(press(KeyCode::Char('!')), GameStatus::InProgress), None);
        assert_eq!(decode_key(press(KeyCode::Tab), GameStatus::InProgress), None);
        assert_eq!(decode_key(press(KeyCode::F(5)), GameStatus::InProgress), None);
    }

    #[test]
    fn test_decode_ignores_key_release() {
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        assert_eq!(decode_key(key, GameStatus::InProgress), None);
    }

    #[test]
    fn test_notification_copy() {
        assert_eq!(
            notification_text(Notification::IncompleteWord),
            "FIVE LETTER WORDS ONLY"
        );
        assert_eq!(notification_text(Notification::NotInList), "NOT IN THE WORD LIST");
        assert_eq!(notification_text(Notification::AlreadyTried), "WORD TRIED ALREADY");
        assert_eq!(notification_text(Notification::Solved), "WELL DONE");
        assert_eq!(notification_text(Notification::OutOfGuesses), "OUT OF GUESSES");
    }

    #[test]
    fn test_keyboard_layout_covers_alphabet_once() {
        let all: String = KEYBOARD_ROWS.concat();
        assert_eq!(all.len(), 26);
        let unique: std::collections::HashSet<char> = all.chars().collect();
        assert_eq!(unique.len(), 26);
    }
}
