//! Team ledger - identity, strength and cumulative standings
//!
//! Standings arithmetic lives in exactly two pure functions on [`TeamStats`]:
//! [`TeamStats::apply`] and its inverse [`TeamStats::reverse`]. Everything
//! else (match play, corrections, reset) composes those two.

use serde::{Deserialize, Serialize};

use crate::match_play::Score;

// ============================================================================
// CONSTANTS
// ============================================================================

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

pub type TeamId = u32;

/// Which side of a fixture a team played on
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// Result of a match from one team's point of view
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

impl Side {
    /// (goals for, goals against) from this side's perspective
    pub fn goals(self, score: Score) -> (u32, u32) {
        match self {
            Side::Home => (score.home, score.away),
            Side::Away => (score.away, score.home),
        }
    }

    pub fn outcome(self, score: Score) -> Outcome {
        let (goals_for, goals_against) = self.goals(score);
        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Equal => Outcome::Draw,
            std::cmp::Ordering::Less => Outcome::Loss,
        }
    }
}

// ============================================================================
// STATS
// ============================================================================

/// Cumulative standings counters for one team
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStats {
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,
}

impl TeamStats {
    /// Stats after adding one match result seen from `side`.
    ///
    /// Counters saturate at `u32::MAX` instead of wrapping.
    #[must_use]
    pub fn apply(self, score: Score, side: Side) -> Self {
        let (goals_for, goals_against) = side.goals(score);
        let mut next = Self {
            played: self.played.saturating_add(1),
            goals_for: self.goals_for.saturating_add(goals_for),
            goals_against: self.goals_against.saturating_add(goals_against),
            ..self
        };

        match side.outcome(score) {
            Outcome::Win => {
                next.won = next.won.saturating_add(1);
                next.points = next.points.saturating_add(POINTS_FOR_WIN);
            }
            Outcome::Draw => {
                next.drawn = next.drawn.saturating_add(1);
                next.points = next.points.saturating_add(POINTS_FOR_DRAW);
            }
            Outcome::Loss => next.lost = next.lost.saturating_add(1),
        }

        next
    }

    /// Exact inverse of [`TeamStats::apply`] with the same arguments.
    ///
    /// Every counter is floored at zero instead of wrapping.
    #[must_use]
    pub fn reverse(self, score: Score, side: Side) -> Self {
        let (goals_for, goals_against) = side.goals(score);
        let mut prev = Self {
            played: self.played.saturating_sub(1),
            goals_for: self.goals_for.saturating_sub(goals_for),
            goals_against: self.goals_against.saturating_sub(goals_against),
            ..self
        };

        match side.outcome(score) {
            Outcome::Win => {
                prev.won = prev.won.saturating_sub(1);
                prev.points = prev.points.saturating_sub(POINTS_FOR_WIN);
            }
            Outcome::Draw => {
                prev.drawn = prev.drawn.saturating_sub(1);
                prev.points = prev.points.saturating_sub(POINTS_FOR_DRAW);
            }
            Outcome::Loss => prev.lost = prev.lost.saturating_sub(1),
        }

        prev
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// `played == won + drawn + lost` and `points == 3*won + drawn`
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.drawn + self.lost
            && self.points == POINTS_FOR_WIN * self.won + POINTS_FOR_DRAW * self.drawn
    }
}

// ============================================================================
// TEAM
// ============================================================================

/// A team and its running record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub strength: u32,
    #[serde(flatten)]
    stats: TeamStats,
}

impl Team {
    pub fn new(id: TeamId, name: impl Into<String>, strength: u32) -> Self {
        Self {
            id,
            name: name.into(),
            strength,
            stats: TeamStats::default(),
        }
    }

    pub fn stats(&self) -> &TeamStats {
        &self.stats
    }

    pub fn points(&self) -> u32 {
        self.stats.points
    }

    pub fn goal_difference(&self) -> i64 {
        self.stats.goal_difference()
    }

    /// Record one match result for this team
    pub fn update_stats(&mut self, score: Score, side: Side) {
        self.stats = self.stats.apply(score, side);
    }

    /// Undo a result previously recorded with [`Team::update_stats`]
    pub fn reverse_stats(&mut self, score: Score, side: Side) {
        self.stats = self.stats.reverse(score, side);
    }

    /// Zero the record, keeping identity and strength
    pub fn reset_stats(&mut self) {
        self.stats = TeamStats::default();
    }
}
