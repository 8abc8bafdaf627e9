//! td-tictactoe CLI - self-play temporal-difference learning for tic-tac-toe
//!
//! Two agents share one table of board values and learn it by playing each
//! other; the trained agent can then be played from the terminal.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

#[derive(Parser)]
#[command(name = "td-tictactoe")]
#[command(version, about = "Temporal-difference learning for tic-tac-toe", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run self-play training and print the results
    Train(td_tictactoe::cli::commands::train::TrainArgs),

    /// Train, then play the trained agent from the terminal
    Play(td_tictactoe::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Train(args) => td_tictactoe::cli::commands::train::execute(args),
        Commands::Play(args) => td_tictactoe::cli::commands::play::execute(args),
    }
}
