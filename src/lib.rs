// Library interface for wordle-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod dictionary;
pub mod engine;
pub mod logging;
pub mod tui;

// Re-export the core types for easier testing
pub use dictionary::{Dictionary, WordBank, load_wordbank_from_file, load_wordbank_from_str};
pub use engine::{GameEngine, GameStatus, InputEvent, KeyHint, Notification, TileState};
