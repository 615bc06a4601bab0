use clap::Parser;

/// Wordle game CLI options
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited solution-pool file
    #[arg(short = 'i', long = "input")]
    pub wordbank_path: Option<String>,

    /// Path to a file of extra words accepted as guesses but never drawn
    /// as solutions
    #[arg(short = 'v', long = "vocabulary")]
    pub vocabulary_path: Option<String>,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
