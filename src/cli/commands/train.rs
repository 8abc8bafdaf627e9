//! Train command - self-play training of the two agents

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::SessionArgs;
use crate::{
    cli::output::{format_number, print_kv, print_section, print_subsection, print_summary},
    tictactoe::Mark,
};

#[derive(Parser, Debug)]
#[command(about = "Run self-play training")]
pub struct TrainArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Write the resolved session configuration to this JSON file
    #[arg(long)]
    pub save_config: Option<PathBuf>,
}

/// Execute the train command
pub fn execute(args: TrainArgs) -> Result<()> {
    let config = args.session.resolve()?;
    if let Some(path) = &args.save_config {
        config.save(path)?;
        log::info!("saved configuration to {}", path.display());
    }

    print_section("Self-play training");
    print_kv("Games", &format_number(config.training_games));
    print_kv(
        "Seed",
        &config
            .seed
            .map_or_else(|| "random".to_string(), |seed| seed.to_string()),
    );
    for mark in [Mark::X, Mark::O] {
        if let Some(params) = config.agent_parameters(mark) {
            print_kv(
                &format!("{mark} agent"),
                &format!(
                    "{:?}, explore {}, learning rate {}",
                    params.mode, params.exploration_probability, params.learning_rate
                ),
            );
        }
    }

    let mut session = args.session.build_session(config)?;

    let stats = *session.enumeration_stats();
    print_subsection("Value table");
    print_kv("Positions", &format_number(session.table().borrow().len()));
    print_kv("Visited", &format_number(stats.positions_visited));
    print_kv("Terminal visits", &format_number(stats.terminal_visits()));

    let summary = session.run()?;

    print_subsection("Results");
    print_summary(&summary);

    Ok(())
}
