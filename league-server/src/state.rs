//! Server state management
//!
//! One league engine and its store behind a single mutex. Every handler,
//! read or write, holds the lock for its whole duration so no response can
//! observe a half-played week.

use std::sync::{Mutex, MutexGuard, PoisonError};

use anyhow::Context;

use league_core::{seed_teams, League, LeagueStore, MatchSummary, MemoryStore};

use crate::sqlite::SqliteStore;
use crate::ServerConfig;

/// The engine plus the store that mirrors its results
pub struct LeagueSession {
    pub league: League,
    pub store: Box<dyn LeagueStore>,
}

impl LeagueSession {
    /// Write results through to the store.
    ///
    /// The engine stays authoritative: a failed write is returned but the
    /// in-memory state is never rolled back.
    pub fn persist(&mut self, results: &[MatchSummary]) -> anyhow::Result<()> {
        for result in results {
            self.store.upsert_result(result)?;
        }
        Ok(())
    }
}

/// Server-wide shared state
pub struct ServerState {
    session: Mutex<LeagueSession>,
}

impl ServerState {
    pub fn new(league: League, store: Box<dyn LeagueStore>) -> Self {
        Self {
            session: Mutex::new(LeagueSession { league, store }),
        }
    }

    /// Open the configured store, seed teams on first run and build the league
    pub fn from_config(config: &ServerConfig) -> anyhow::Result<Self> {
        config
            .league
            .validate()
            .with_context(|| format!("Invalid league config '{}'", config.league.name))?;

        let mut store: Box<dyn LeagueStore> = match &config.db_path {
            Some(path) => {
                tracing::info!("Using SQLite store at {}", path.display());
                Box::new(SqliteStore::open(path)?)
            }
            None => {
                tracing::info!("Using in-memory store");
                Box::new(MemoryStore::new())
            }
        };

        let specs = config
            .league
            .teams
            .iter()
            .map(|t| (t.name.as_str(), t.strength));
        let teams = seed_teams(store.as_mut(), specs)?;

        let league = match config.league.seed {
            Some(seed) => League::with_seed(teams, seed)?,
            None => League::new(teams)?,
        };
        store.replace_fixtures(&league.summaries())?;

        tracing::info!(
            "League ready: {} teams, {} weeks, {} matches",
            league.table().len(),
            league.total_weeks(),
            league.matches().len()
        );

        Ok(Self::new(league, store))
    }

    /// Acquire the league lock
    pub fn lock(&self) -> MutexGuard<'_, LeagueSession> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::LeagueConfig;

    fn config_with(league: LeagueConfig) -> ServerConfig {
        ServerConfig {
            league,
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_builds_league() {
        let state = ServerState::from_config(&config_with(LeagueConfig::default().with_seed(1))).unwrap();
        let session = state.lock();

        assert_eq!(session.league.table().len(), 4);
        assert_eq!(session.store.load_week(0).unwrap().len(), 2);
    }

    #[test]
    fn test_from_config_rejects_invalid_teams() {
        let duplicate = LeagueConfig::new(vec![])
            .with_team("Rovers", 50)
            .with_team("Rovers", 60);
        assert!(ServerState::from_config(&config_with(duplicate)).is_err());

        let blank = LeagueConfig::new(vec![]).with_team("", 50).with_team("United", 60);
        assert!(ServerState::from_config(&config_with(blank)).is_err());
    }

    #[test]
    fn test_invalid_config_leaves_database_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("league.db");
        let config = ServerConfig {
            db_path: Some(path.clone()),
            league: LeagueConfig::new(vec![]).with_team("Solo", 50),
            ..Default::default()
        };

        assert!(ServerState::from_config(&config).is_err());
        assert!(!path.exists());
    }
}
