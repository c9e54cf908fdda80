//! Boggle CLI
//!
//! Interactive command-line game on top of the Boggle engine.

mod cli;
mod logging;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use boggle_engine::{load_dictionary, Board, Game, PlayOutcome, WordCheck, WordList};
use cli::{BoardArgs, Cli, Commands};

const BANNER_TEXT: &str = include_str!("text/banner.txt");

/// One line typed at the prompt. Commands start with `:` so that every
/// bare word, including "score" or "new", is played.
#[derive(Debug, PartialEq, Eq)]
enum ReplInput<'a> {
    Help,
    Quit,
    Board,
    Score,
    New,
    Unknown(&'a str),
    Word(&'a str),
}

fn parse_input(input: &str) -> ReplInput<'_> {
    let Some(command) = input.strip_prefix(':') else {
        return ReplInput::Word(input);
    };
    match command.to_lowercase().as_str() {
        "help" | "h" | "?" => ReplInput::Help,
        "quit" | "exit" | "q" => ReplInput::Quit,
        "board" | "b" => ReplInput::Board,
        "score" | "s" => ReplInput::Score,
        "new" | "n" => ReplInput::New,
        _ => ReplInput::Unknown(input),
    }
}

fn outcome_message(word: &str, outcome: PlayOutcome) -> String {
    let word = word.to_uppercase();
    match outcome {
        PlayOutcome::Accepted { points, total } => {
            format!("✓ {} (+{}, total {})", word, points, total)
        }
        PlayOutcome::AlreadyPlayed => format!("{} was already played.", word),
        PlayOutcome::Rejected(WordCheck::NotWord) => format!("✗ {} is not a word.", word),
        PlayOutcome::Rejected(_) => format!("✗ {} is not on the board.", word),
    }
}

fn print_banner() {
    for line in BANNER_TEXT.lines().take(6) {
        println!("{}", line);
    }
}

fn print_help() {
    println!("{}", BANNER_TEXT);
}

fn make_rng(args: &BoardArgs) -> StdRng {
    match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn open_word_list(args: &BoardArgs) -> Result<Arc<WordList>> {
    let words = match &args.dict {
        Some(path) => WordList::load(path)?,
        None => load_dictionary(),
    };
    info!(words = words.len(), "word list ready");
    Ok(Arc::new(words))
}

fn print_board(board: &Board) {
    println!();
    for line in board.to_string().lines() {
        println!("  {}", line);
    }
    println!();
}

fn run_interactive(args: &BoardArgs) -> Result<()> {
    print_banner();

    let words = open_word_list(args)?;
    let mut rng = make_rng(args);
    let mut game = Game::start(args.size, words, &mut rng)?;

    println!("Type ':help' for commands. Enter words to score them.");
    print_board(game.board());

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match parse_input(input) {
            ReplInput::Help => {
                print_help();
            }
            ReplInput::Quit => {
                println!("Final score: {}", game.score());
                println!("Goodbye!");
                break;
            }
            ReplInput::Board => {
                print_board(game.board());
            }
            ReplInput::Score => {
                println!();
                println!("Score: {}", game.score());
                if !game.played_words().is_empty() {
                    println!("Words: {}", game.played_words().join(", "));
                }
                println!();
            }
            ReplInput::New => {
                println!("Final score: {}", game.score());
                game.new_board(&mut rng)?;
                print_board(game.board());
            }
            ReplInput::Unknown(command) => {
                println!("Unknown command: {}", command);
                println!("Type ':help' for available commands.");
            }
            ReplInput::Word(word) => {
                println!("{}", outcome_message(word, game.play_word(word)));
            }
        }
    }

    Ok(())
}

fn run_check(args: &BoardArgs, words: &[String]) -> Result<()> {
    let word_list = open_word_list(args)?;
    let mut rng = make_rng(args);
    let game = Game::start(args.size, word_list, &mut rng)?;

    print_board(game.board());
    for (word, check) in words.iter().zip(game.check_words(words)) {
        println!("{:>12} {}", word.to_uppercase(), check);
    }
    Ok(())
}

fn run_board(args: &BoardArgs) -> Result<()> {
    let mut rng = make_rng(args);
    let board = Board::create(args.size, &mut rng)?;
    print!("{}", board);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet);

    if let Some(threads) = cli.threads {
        info!(threads, "configuring rayon thread pool");
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to build global thread pool")?;
    }

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_interactive(&cli.board),
        Commands::Check { words } => run_check(&cli.board, &words),
        Commands::Board => run_board(&cli.board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_words_are_played() {
        for word in ["score", "new", "board", "s", "b", "n", "quit", "help"] {
            assert_eq!(parse_input(word), ReplInput::Word(word));
        }
    }

    #[test]
    fn test_prefixed_commands() {
        assert_eq!(parse_input(":score"), ReplInput::Score);
        assert_eq!(parse_input(":S"), ReplInput::Score);
        assert_eq!(parse_input(":board"), ReplInput::Board);
        assert_eq!(parse_input(":n"), ReplInput::New);
        assert_eq!(parse_input(":?"), ReplInput::Help);
        assert_eq!(parse_input(":exit"), ReplInput::Quit);
        assert_eq!(parse_input(":puree"), ReplInput::Unknown(":puree"));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(
            outcome_message("pet", PlayOutcome::Rejected(WordCheck::NotOnBoard)),
            "✗ PET is not on the board."
        );
        assert_eq!(
            outcome_message("xat", PlayOutcome::Rejected(WordCheck::NotWord)),
            "✗ XAT is not a word."
        );
        assert_eq!(
            outcome_message("cat", PlayOutcome::Accepted { points: 3, total: 7 }),
            "✓ CAT (+3, total 7)"
        );
        assert_eq!(
            outcome_message("cat", PlayOutcome::AlreadyPlayed),
            "CAT was already played."
        );
    }
}
