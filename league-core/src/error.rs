//! Engine error kinds
//!
//! All of these are recoverable and reported to the caller.

use thiserror::Error;

use crate::match_play::MatchId;

pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("a round-robin league needs an even number of teams (at least 2), got {count}")]
    InvalidTeamCount { count: usize },

    #[error("no weeks remaining: all {total_weeks} weeks have been played")]
    NoWeeksRemaining { total_weeks: usize },

    #[error("match not found: {id}")]
    MatchNotFound { id: MatchId },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("week {week} is out of range (league has {total_weeks} weeks)")]
    WeekOutOfRange { week: usize, total_weeks: usize },
}

impl LeagueError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        LeagueError::InvalidInput {
            reason: reason.into(),
        }
    }
}
