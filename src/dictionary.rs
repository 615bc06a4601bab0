//! Word source for the engine: a solution pool to draw from and a
//! vocabulary membership test for guesses.

use rand::seq::SliceRandom;
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

/// Injected word source. Substitutable so the engine can be driven with a
/// fixed solution in tests.
pub trait Dictionary {
    /// One five-letter word, drawn once per game. Must satisfy
    /// [`Dictionary::is_valid_guess`].
    fn pick_solution(&mut self) -> String;

    /// Membership test over the accepted-guess vocabulary.
    fn is_valid_guess(&self, word: &str) -> bool;
}

/// Dictionary backed by word lists: a solution pool plus a vocabulary that
/// always contains the pool.
pub struct WordBank {
    solutions: Vec<String>,
    vocabulary: HashSet<String>,
}

impl WordBank {
    /// Word bank whose vocabulary is exactly the solution pool.
    /// The pool must be non-empty.
    pub fn new(solutions: Vec<String>) -> Self {
        Self::with_vocabulary(solutions, Vec::new())
    }

    /// Word bank accepting extra valid guesses beyond the solution pool.
    pub fn with_vocabulary(solutions: Vec<String>, extra: Vec<String>) -> Self {
        let mut vocabulary: HashSet<String> = solutions.iter().cloned().collect();
        vocabulary.extend(extra);
        Self { solutions, vocabulary }
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

impl Dictionary for WordBank {
    fn pick_solution(&mut self) -> String {
        self.solutions
            .choose(&mut rand::thread_rng())
            .cloned()
            .expect("word bank is empty")
    }

    fn is_valid_guess(&self, word: &str) -> bool {
        self.vocabulary.contains(word)
    }
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_uppercase())
        .filter(|word| word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_uppercase();
        if word.len() == 5 && word.chars().all(|c| c.is_ascii_alphabetic()) {
            words.push(word);
        }
    }
    Ok(words)
}
