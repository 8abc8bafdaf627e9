//! Play command - train, then play the frozen agent against a human

use std::io::{self, ErrorKind};

use anyhow::Result;
use clap::{Parser, ValueEnum};

use super::SessionArgs;
use crate::{
    Error,
    adapters::HumanPlayer,
    cli::output::{print_board_value, print_section, print_subsection, print_summary},
    pipeline::{GameEnd, SessionSummary},
    tictactoe::{GameResult, Mark},
};

#[derive(Parser, Debug)]
#[command(about = "Train, then play the trained agent from the terminal")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Side the human plays
    #[arg(long, value_enum, default_value_t = Side::O)]
    pub human: Side,

    /// Number of games against the human (defaults to the configured count)
    #[arg(long, short = 'n')]
    pub showcase: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    X,
    O,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Mark::X,
            Side::O => Mark::O,
        }
    }
}

/// Execute the play command
pub fn execute(args: PlayArgs) -> Result<()> {
    let mut config = args.session.resolve()?;
    if let Some(games) = args.showcase {
        config = config.with_showcase_games(games);
    }
    let showcase_games = config.showcase_games;
    let human_mark = Mark::from(args.human);

    print_section("Training");
    let mut session = args.session.build_session(config)?;
    let summary = session.run()?;
    print_summary(&summary);

    session.freeze();
    let table = session.table().clone();

    print_section(&format!("You play {human_mark}"));
    println!("Enter moves as `row col`, both 0-2.");

    let mut human = HumanPlayer::new(io::stdin().lock(), io::stdout(), human_mark);
    let mut tally = SessionSummary::default();

    for game in 0..showcase_games {
        print_subsection(&format!("Game {} of {}", game + 1, showcase_games));

        let outcome = session.play_against(&mut human, human_mark, |state| {
            print_board_value(state, table.borrow().get(&state.canonical_key()));
            Ok(())
        });

        let end = match outcome {
            Ok(end) => end,
            Err(Error::Io { source, .. }) if source.kind() == ErrorKind::UnexpectedEof => {
                println!("\nInput closed.");
                break;
            }
            Err(err) => return Err(err.into()),
        };

        tally.record(&end);
        match end {
            GameEnd::Finished(GameResult::Draw) => println!("Game drawn"),
            GameEnd::Finished(GameResult::Decisive { winner, .. }) => {
                println!("Winner is {winner}")
            }
            GameEnd::Aborted { offender } => println!("Game aborted: illegal move by {offender}"),
        }
    }

    if tally.games > 0 {
        print_subsection("Showcase results");
        print_summary(&tally);
    }

    Ok(())
}
