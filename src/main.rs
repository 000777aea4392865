//! Wordle Game - CLI
//!
//! Playable Wordle in the terminal, with saved-game resume and a one-shot
//! feedback checker.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    core::Word,
    engine::GameEngine,
    interactive::{App, run_tui},
    output::print_check_result,
    persistence::{GameStore, JsonFileStore},
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle-style word guessing game with persistent state",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal (default), resuming a saved game if one exists
    Play {
        /// Discard any saved game and start fresh
        #[arg(long)]
        new: bool,

        /// Save file location (default: wordle_save.json in the data dir)
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show the feedback a guess would receive against a target
    Check {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Load the target-word pool based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(loader::words_from_slice(WORDS)),
        path => {
            let words = loader::load_from_file(path)
                .with_context(|| format!("Cannot load word list from '{path}'"))?;
            Ok(words)
        }
    }
}

fn save_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| {
        std::env::var_os("HOME").map_or_else(
            || PathBuf::from("wordle_save.json"),
            |home| PathBuf::from(home).join(".wordle_save.json"),
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        new: false,
        save: None,
    }) {
        Commands::Play { new, save } => {
            let words = load_words(&cli.wordlist)?;
            let engine = GameEngine::new(words);
            let store = GameStore::new(JsonFileStore::open(save_path(save)));
            let app = App::new(engine, store, new)?;
            run_tui(app)
        }
        Commands::Check { guess, target } => {
            let guess = Word::new(guess.as_str())
                .with_context(|| format!("Invalid guess '{guess}'"))?;
            let target = Word::new(target.as_str())
                .with_context(|| format!("Invalid target '{target}'"))?;
            print_check_result(&guess, &target);
            Ok(())
        }
    }
}
