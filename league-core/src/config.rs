//! League configuration
//!
//! Which teams take part, how strong they are, and an optional RNG seed.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{LeagueError, Result};

/// One entrant as written in a config file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub name: String,
    pub strength: u32,
}

impl TeamSpec {
    pub fn new(name: impl Into<String>, strength: u32) -> Self {
        Self {
            name: name.into(),
            strength,
        }
    }
}

/// League configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    #[serde(default = "default_name")]
    pub name: String,
    pub teams: Vec<TeamSpec>,
    /// Random seed for reproducible seasons (None = random)
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_name() -> String {
    "Super Lig".to_string()
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            teams: vec![
                TeamSpec::new("Galatasaray", 90),
                TeamSpec::new("Fenerbahçe", 85),
                TeamSpec::new("Beşiktaş", 80),
                TeamSpec::new("Trabzonspor", 75),
            ],
            seed: None,
        }
    }
}

impl LeagueConfig {
    /// Config with the given teams and no seed
    pub fn new(teams: Vec<TeamSpec>) -> Self {
        Self {
            teams,
            ..Default::default()
        }
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Add a team
    pub fn with_team(mut self, name: impl Into<String>, strength: u32) -> Self {
        self.teams.push(TeamSpec::new(name, strength));
        self
    }

    /// Check the team list can form a round-robin league
    pub fn validate(&self) -> Result<()> {
        let count = self.teams.len();
        if count < 2 || count % 2 != 0 {
            return Err(LeagueError::InvalidTeamCount { count });
        }

        let mut names = HashSet::new();
        for team in &self.teams {
            if team.name.trim().is_empty() {
                return Err(LeagueError::invalid_input("team name must not be empty"));
            }
            if !names.insert(team.name.as_str()) {
                return Err(LeagueError::invalid_input(format!(
                    "duplicate team name: {}",
                    team.name
                )));
            }
        }

        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read league config: {}", path.display()))?;
        let config: LeagueConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse league config: {}", path.display()))?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
