//! League Core - round-robin league simulation
//!
//! This crate provides the league engine:
//! - Team ledger with reversible standings arithmetic
//! - Strength-weighted random match outcomes
//! - Circle-method fixture generation
//! - Week-by-week league progression and result corrections
//! - Storage collaborator contract

pub mod config;
pub mod error;
pub mod league;
pub mod match_play;
pub mod schedule;
pub mod store;
pub mod team;

// Re-exports for convenient access
pub use config::{LeagueConfig, TeamSpec};
pub use error::{LeagueError, Result};
pub use league::League;
pub use match_play::{
    goal_cap, simulate_score, Match, MatchId, MatchSummary, Score, MAX_CORRECTION_GOALS,
    MAX_GOALS,
};
pub use schedule::{generate_fixtures, weeks_for, Fixture};
pub use store::{seed_teams, LeagueStore, MemoryStore, TeamRecord};
pub use team::{Outcome, Side, Team, TeamId, TeamStats, POINTS_FOR_DRAW, POINTS_FOR_WIN};
