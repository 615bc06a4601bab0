//! Game state engine.
//!
//! A single `GameEngine` owns all mutable state for one game session: the
//! board, the cursor, the accumulated letter classifications, the score, and
//! the win/loss status. Every operation is a synchronous, total state
//! transition — rejected input becomes a [`Notification`], never an error.

use crate::dictionary::Dictionary;
use crate::{debug_log, info_log};
use std::collections::HashSet;

pub const ROWS: usize = 6;
pub const WORD_LENGTH: usize = 5;
pub const BLANK: char = ' ';

const WIN_BONUS: i32 = 100;
const GUESS_PENALTY: i32 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Transient user-facing message kind. The display layer owns the copy;
/// the engine only reports which outcome occurred.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Notification {
    IncompleteWord,
    NotInList,
    AlreadyTried,
    Solved,
    OutOfGuesses,
}

/// Per-tile classification, derived on demand for rendering.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileState {
    Empty,
    /// Typed into the active row but not yet submitted.
    Pending,
    Correct,
    Present,
    Absent,
}

/// Keyboard hint for a single letter, priority correct > present > absent.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyHint {
    Correct,
    Present,
    Absent,
    Untouched,
}

/// Logical input event, decoded by the frontend from raw key presses.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InputEvent {
    Letter(char),
    Enter,
    Backspace,
    NewGame,
}

pub struct GameEngine<D: Dictionary> {
    dictionary: D,
    board: [[char; WORD_LENGTH]; ROWS],
    solution: String,
    active_row: usize,
    active_letter: usize,
    correct_letters: HashSet<char>,
    present_letters: HashSet<char>,
    absent_letters: HashSet<char>,
    failed_guesses: HashSet<String>,
    score: i32,
    status: GameStatus,
    notification: Option<Notification>,
}

impl<D: Dictionary> GameEngine<D> {
    pub fn new(dictionary: D) -> Self {
        let mut engine = Self {
            dictionary,
            board: [[BLANK; WORD_LENGTH]; ROWS],
            solution: String::new(),
            active_row: 0,
            active_letter: 0,
            correct_letters: HashSet::new(),
            present_letters: HashSet::new(),
            absent_letters: HashSet::new(),
            failed_guesses: HashSet::new(),
            score: 0,
            status: GameStatus::InProgress,
            notification: None,
        };
        engine.new_game();
        engine
    }

    /// Reset everything and draw a fresh solution. Callable from any state.
    pub fn new_game(&mut self) {
        self.board = [[BLANK; WORD_LENGTH]; ROWS];
        self.solution = self.dictionary.pick_solution();
        self.active_row = 0;
        self.active_letter = 0;
        self.correct_letters.clear();
        self.present_letters.clear();
        self.absent_letters.clear();
        self.failed_guesses.clear();
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.notification = None;
        debug_log!("new_game() - solution: {}", self.solution);
    }

    /// Write a letter into the active slot. Ignored when the game is over,
    /// the row is full, or `letter` is not an ASCII letter.
    pub fn type_letter(&mut self, letter: char) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if !letter.is_ascii_alphabetic() || self.active_letter >= WORD_LENGTH {
            return;
        }
        self.notification = None;
        self.board[self.active_row][self.active_letter] = letter.to_ascii_uppercase();
        self.active_letter += 1;
    }

    /// Blank the most recently typed slot. No-op on an empty row.
    pub fn backspace(&mut self) {
        if self.status != GameStatus::InProgress || self.active_letter == 0 {
            return;
        }
        self.notification = None;
        self.active_letter -= 1;
        self.board[self.active_row][self.active_letter] = BLANK;
    }

    /// Submit the active row. Validation failures set a notification and
    /// leave board, cursor, and score untouched.
    pub fn submit_guess(&mut self) {
        if self.status != GameStatus::InProgress {
            return;
        }
        if self.active_letter < WORD_LENGTH {
            self.notification = Some(Notification::IncompleteWord);
            return;
        }

        let guess: String = self.board[self.active_row].iter().collect();
        if !self.dictionary.is_valid_guess(&guess) {
            debug_log!("submit_guess() - '{}' not in vocabulary", guess);
            self.notification = Some(Notification::NotInList);
            return;
        }
        if self.failed_guesses.contains(&guess) {
            self.notification = Some(Notification::AlreadyTried);
            return;
        }

        if guess == self.solution {
            info_log!("submit_guess() - '{}' solved on row {}", guess, self.active_row);
            self.status = GameStatus::Won;
            self.notification = Some(Notification::Solved);
            self.correct_letters = self.solution.chars().collect();
            self.score += WIN_BONUS;
            return;
        }

        self.merge_feedback(&guess);
        self.failed_guesses.insert(guess);
        self.score -= GUESS_PENALTY;
        self.active_row += 1;
        self.active_letter = 0;
        if self.active_row == ROWS {
            info_log!("submit_guess() - out of guesses, solution was {}", self.solution);
            self.status = GameStatus::Lost;
            self.notification = Some(Notification::OutOfGuesses);
        } else {
            self.notification = None;
        }
    }

    /// Dispatch a logical input event to the matching operation.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::Letter(letter) => self.type_letter(letter),
            InputEvent::Enter => self.submit_guess(),
            InputEvent::Backspace => self.backspace(),
            InputEvent::NewGame => self.new_game(),
        }
    }

    // Merge per-position feedback for a non-winning guess into the
    // cumulative classification sets. Deliberately not frequency-aware:
    // a letter anywhere in the solution counts as present, however many
    // times the guess repeats it.
    fn merge_feedback(&mut self, guess: &str) {
        for (i, letter) in guess.chars().enumerate() {
            if self.solution.chars().nth(i) == Some(letter) {
                self.correct_letters.insert(letter);
            }
            if self.solution.contains(letter) {
                self.present_letters.insert(letter);
            } else {
                self.absent_letters.insert(letter);
            }
        }
    }

    fn row_is_submitted(&self, row: usize) -> bool {
        row < self.active_row || (self.status == GameStatus::Won && row == self.active_row)
    }

    /// Letter and classification for one board slot.
    pub fn tile(&self, row: usize, col: usize) -> (char, TileState) {
        let letter = self.board[row][col];
        if letter == BLANK {
            return (letter, TileState::Empty);
        }
        if !self.row_is_submitted(row) {
            return (letter, TileState::Pending);
        }
        let state = if self.solution.chars().nth(col) == Some(letter) {
            TileState::Correct
        } else if self.solution.contains(letter) {
            TileState::Present
        } else {
            TileState::Absent
        };
        (letter, state)
    }

    /// Display hint for a keyboard letter. A letter may sit in more than
    /// one classification set; the priority order here resolves it.
    pub fn key_hint(&self, letter: char) -> KeyHint {
        let letter = letter.to_ascii_uppercase();
        if self.correct_letters.contains(&letter) {
            KeyHint::Correct
        } else if self.present_letters.contains(&letter) {
            KeyHint::Present
        } else if self.absent_letters.contains(&letter) {
            KeyHint::Absent
        } else {
            KeyHint::Untouched
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notification
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// (active row, active letter) of the next slot to fill.
    pub fn cursor(&self) -> (usize, usize) {
        (self.active_row, self.active_letter)
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn correct_letters(&self) -> &HashSet<char> {
        &self.correct_letters
    }

    pub fn present_letters(&self) -> &HashSet<char> {
        &self.present_letters
    }

    pub fn absent_letters(&self) -> &HashSet<char> {
        &self.absent_letters
    }

    pub fn failed_guess_count(&self) -> usize {
        self.failed_guesses.len()
    }
}
