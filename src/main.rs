use wordle_game::cli::parse_cli;
use wordle_game::dictionary::{EMBEDDED_WORDBANK, WordBank, load_wordbank_from_file, load_wordbank_from_str};
use wordle_game::engine::GameEngine;
use wordle_game::tui::Tui;

fn main() {
    env_logger::init();
    let cli = parse_cli();

    let solutions = match &cli.wordbank_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load word bank from '{path}': {e}");
                return;
            }
        },
        None => load_wordbank_from_str(EMBEDDED_WORDBANK),
    };
    if solutions.is_empty() {
        eprintln!("Word bank contains no five-letter words.");
        return;
    }

    let extra = match &cli.vocabulary_path {
        Some(path) => match load_wordbank_from_file(path) {
            Ok(words) => words,
            Err(e) => {
                eprintln!("Failed to load vocabulary from '{path}': {e}");
                return;
            }
        },
        None => Vec::new(),
    };

    let bank = WordBank::with_vocabulary(solutions, extra);
    let mut engine = GameEngine::new(bank);

    let mut tui = match Tui::new() {
        Ok(tui) => tui,
        Err(e) => {
            eprintln!("Failed to initialize terminal: {e}");
            return;
        }
    };

    if let Err(e) = tui.run(&mut engine) {
        let _ = tui.cleanup();
        eprintln!("Terminal error: {e}");
    }
}
