use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use boggle_engine::DEFAULT_BOARD_SIZE;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Boggle - find words on a grid of letters",
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub board: BoardArgs,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Number of threads for batch word checks.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively (the default)
    Play,
    /// Check words against one board and print a verdict for each
    Check {
        /// Words to check
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print a freshly dealt board
    Board,
}

#[derive(Args, Debug)]
pub struct BoardArgs {
    /// Board width and height
    #[arg(short, long, global = true, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Newline-separated word file. Defaults to the built-in list.
    #[arg(short, long, global = true, value_name = "PATH")]
    pub dict: Option<PathBuf>,

    /// Seed for a reproducible board
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,
}
