//! Configuration of a training session.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    td_learning::AgentParameters,
    tictactoe::Mark,
};

/// Configuration for a self-play training session.
///
/// Every field has a default, so a JSON file only needs the values it
/// changes.
///
/// # Examples
///
/// ```
/// use td_tictactoe::app::SessionConfig;
/// use td_tictactoe::td_learning::AgentParameters;
///
/// let config = SessionConfig::default()
///     .with_training_games(500)
///     .with_seed(42)
///     .with_o_agent(AgentParameters::learn(0.2, 0.05));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of self-play games
    pub training_games: usize,
    /// Number of games against a human after training
    pub showcase_games: usize,
    /// Log the full history of every n-th game (0 disables it)
    pub report_every: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
    /// Parameters of the agent playing X
    pub x_agent: AgentParameters,
    /// Parameters of the agent playing O
    pub o_agent: AgentParameters,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            training_games: 10_000,
            showcase_games: 20,
            report_every: 100,
            seed: None,
            x_agent: AgentParameters::learn(0.1, 0.01),
            o_agent: AgentParameters::learn(0.1, 0.1),
        }
    }
}

impl SessionConfig {
    pub fn with_training_games(mut self, games: usize) -> Self {
        self.training_games = games;
        self
    }

    pub fn with_showcase_games(mut self, games: usize) -> Self {
        self.showcase_games = games;
        self
    }

    pub fn with_report_every(mut self, every: usize) -> Self {
        self.report_every = every;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_x_agent(mut self, params: AgentParameters) -> Self {
        self.x_agent = params;
        self
    }

    pub fn with_o_agent(mut self, params: AgentParameters) -> Self {
        self.o_agent = params;
        self
    }

    /// Parameters for the agent playing `mark`
    pub fn agent_parameters(&self, mark: Mark) -> Option<AgentParameters> {
        match mark {
            Mark::X => Some(self.x_agent),
            Mark::O => Some(self.o_agent),
            Mark::Empty => None,
        }
    }

    /// Check both agents' parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending agent.
    pub fn validate(&self) -> Result<()> {
        for (mark, params) in [(Mark::X, &self.x_agent), (Mark::O, &self.o_agent)] {
            params.validate().map_err(|err| Error::InvalidConfiguration {
                message: format!("{mark} agent: {err}"),
            })?;
        }
        Ok(())
    }

    /// Load a configuration from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| Error::Io {
            operation: format!("open config '{}'", path.display()),
            source,
        })?;
        let config: SessionConfig = serde_json::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = std::fs::File::create(path).map_err(|source| Error::Io {
            operation: format!("create config '{}'", path.display()),
            source,
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
