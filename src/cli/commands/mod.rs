//! Command implementations

pub mod play;
pub mod train;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use crate::{
    app::SessionConfig,
    pipeline::{HistoryLogObserver, ProgressObserver, TrainingSession},
};

/// Flags shared by every command that runs a training session
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// JSON session configuration; flags override its values
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Number of self-play training games
    #[arg(long, short = 'g')]
    pub games: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log the history of every n-th training game at debug level (0 disables)
    #[arg(long)]
    pub report_every: Option<usize>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

impl SessionArgs {
    /// Load the configuration file, if any, and apply flag overrides
    pub fn resolve(&self) -> Result<SessionConfig> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => SessionConfig::default(),
        };
        if let Some(games) = self.games {
            config = config.with_training_games(games);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(every) = self.report_every {
            config = config.with_report_every(every);
        }
        Ok(config)
    }

    /// Build a session for `config` with the observers these flags ask for
    pub fn build_session(&self, config: SessionConfig) -> Result<TrainingSession> {
        let report_every = config.report_every;
        let mut session = TrainingSession::new(config)?
            .with_observer(Box::new(HistoryLogObserver::new(report_every)));
        if !self.no_progress {
            session = session.with_observer(Box::new(ProgressObserver::new()));
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = SessionArgs {
            games: Some(25),
            seed: Some(9),
            report_every: Some(0),
            ..SessionArgs::default()
        };

        let config = args.resolve().unwrap();

        assert_eq!(config.training_games, 25);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.report_every, 0);
        assert_eq!(config.showcase_games, SessionConfig::default().showcase_games);
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        SessionConfig::default()
            .with_training_games(40)
            .with_seed(1)
            .save(&path)
            .unwrap();

        let args = SessionArgs {
            config: Some(path),
            seed: Some(2),
            ..SessionArgs::default()
        };
        let config = args.resolve().unwrap();

        assert_eq!(config.training_games, 40);
        assert_eq!(config.seed, Some(2));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let args = SessionArgs {
            config: Some(PathBuf::from("/nonexistent/session.json")),
            ..SessionArgs::default()
        };

        let err = args.resolve().unwrap_err();

        assert!(format!("{err:#}").contains("/nonexistent/session.json"));
    }
}
