//! Match - one fixture and its outcome model
//!
//! A match draws each side's goals independently from `[0, cap]` where
//! `cap = min(strength / 10, 5)`. Playing applies the result to both teams'
//! ledgers in one step. There is no "already played" guard here; the league
//! engine reverses an existing result before replaying or correcting.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::team::{Side, Team, TeamId};

// ============================================================================
// CONSTANTS
// ============================================================================

/// Strength points per unit of goal cap
const STRENGTH_PER_GOAL: u32 = 10;

/// Upper bound on goals a single side can score
pub const MAX_GOALS: u32 = 5;

/// Largest goal count a manual correction may record for one side
pub const MAX_CORRECTION_GOALS: u32 = 99;

pub type MatchId = u32;

// ============================================================================
// SCORE
// ============================================================================

/// Final score of a match
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub home: u32,
    pub away: u32,
}

impl Score {
    pub fn new(home: u32, away: u32) -> Self {
        Self { home, away }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.home, self.away)
    }
}

/// Highest number of goals a team of this strength can score
pub fn goal_cap(strength: u32) -> u32 {
    (strength / STRENGTH_PER_GOAL).min(MAX_GOALS)
}

/// Draw a score for a fixture between teams of the given strengths
pub fn simulate_score<R: Rng + ?Sized>(home_strength: u32, away_strength: u32, rng: &mut R) -> Score {
    let home = rng.gen_range(0..=goal_cap(home_strength));
    let away = rng.gen_range(0..=goal_cap(away_strength));
    Score::new(home, away)
}

// ============================================================================
// MATCH
// ============================================================================

/// A fixture between two teams of the league table.
///
/// `home` and `away` are positions in the owning league's team list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match {
    pub id: MatchId,
    pub week: usize,
    home: usize,
    away: usize,
    result: Option<Score>,
}

impl Match {
    pub(crate) fn new(id: MatchId, week: usize, home: usize, away: usize) -> Self {
        debug_assert_ne!(home, away, "a team cannot play itself");
        Self {
            id,
            week,
            home,
            away,
            result: None,
        }
    }

    pub fn home_index(&self) -> usize {
        self.home
    }

    pub fn away_index(&self) -> usize {
        self.away
    }

    pub fn result(&self) -> Option<Score> {
        self.result
    }

    pub fn is_played(&self) -> bool {
        self.result.is_some()
    }

    /// Draw a result and record it on both teams
    pub fn play<R: Rng + ?Sized>(&mut self, teams: &mut [Team], rng: &mut R) -> Score {
        let score = simulate_score(teams[self.home].strength, teams[self.away].strength, rng);
        self.record(teams, score);
        score
    }

    /// Set the result and add it to both teams' records
    pub(crate) fn record(&mut self, teams: &mut [Team], score: Score) {
        let (home, away) = pair_mut(teams, self.home, self.away);
        home.update_stats(score, Side::Home);
        away.update_stats(score, Side::Away);
        self.result = Some(score);
    }

    /// Remove the recorded result (if any) from both teams' records.
    ///
    /// Returns the score that was withdrawn.
    pub(crate) fn withdraw(&mut self, teams: &mut [Team]) -> Option<Score> {
        let score = self.result.take()?;
        let (home, away) = pair_mut(teams, self.home, self.away);
        home.reverse_stats(score, Side::Home);
        away.reverse_stats(score, Side::Away);
        Some(score)
    }

    /// Forget the result without touching team records
    pub(crate) fn clear(&mut self) {
        self.result = None;
    }

    pub fn summary(&self, teams: &[Team]) -> MatchSummary {
        let home = &teams[self.home];
        let away = &teams[self.away];
        let score = self.result.unwrap_or_default();

        MatchSummary {
            id: self.id,
            week: self.week,
            home_team_id: home.id,
            home_team: home.name.clone(),
            away_team_id: away.id,
            away_team: away.name.clone(),
            home_goals: score.home,
            away_goals: score.away,
            played: self.is_played(),
        }
    }
}

/// Reporting view of a match. Unplayed matches report 0 - 0.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub id: MatchId,
    pub week: usize,
    pub home_team_id: TeamId,
    pub home_team: String,
    pub away_team_id: TeamId,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub played: bool,
}

/// Borrow two distinct teams mutably
fn pair_mut(teams: &mut [Team], a: usize, b: usize) -> (&mut Team, &mut Team) {
    if a < b {
        let (left, right) = teams.split_at_mut(b);
        (&mut left[a], &mut right[0])
    } else {
        let (left, right) = teams.split_at_mut(a);
        (&mut right[0], &mut left[b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn two_teams() -> Vec<Team> {
        vec![Team::new(1, "Home FC", 90), Team::new(2, "Away FC", 25)]
    }

    #[test]
    fn test_goal_cap() {
        assert_eq!(goal_cap(0), 0);
        assert_eq!(goal_cap(9), 0);
        assert_eq!(goal_cap(25), 2);
        assert_eq!(goal_cap(50), 5);
        assert_eq!(goal_cap(90), 5);
        assert_eq!(goal_cap(1000), 5);
    }

    #[test]
    fn test_simulated_goals_stay_within_cap() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..500 {
            let score = simulate_score(90, 25, &mut rng);
            assert!(score.home <= 5);
            assert!(score.away <= 2);
        }
    }

    #[test]
    fn test_zero_strength_never_scores() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(simulate_score(5, 0, &mut rng), Score::new(0, 0));
        }
    }

    #[test]
    fn test_cap_range_is_inclusive() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = [false; 3];
        for _ in 0..500 {
            let score = simulate_score(25, 0, &mut rng);
            seen[score.home as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "0, 1 and 2 should all occur");
    }

    #[test]
    fn test_play_updates_both_teams() {
        let mut teams = two_teams();
        let mut m = Match::new(1, 0, 0, 1);
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        let score = m.play(&mut teams, &mut rng);

        assert_eq!(m.result(), Some(score));
        assert_eq!(teams[0].stats().played, 1);
        assert_eq!(teams[1].stats().played, 1);
        assert_eq!(teams[0].stats().goals_for, score.home);
        assert_eq!(teams[1].stats().goals_for, score.away);
    }

    #[test]
    fn test_withdraw_restores_records() {
        let mut teams = two_teams();
        let before = teams.clone();
        let mut m = Match::new(1, 0, 1, 0);

        m.record(&mut teams, Score::new(2, 2));
        assert_eq!(teams[0].stats().drawn, 1);

        assert_eq!(m.withdraw(&mut teams), Some(Score::new(2, 2)));
        assert_eq!(teams, before);
        assert!(!m.is_played());
        assert_eq!(m.withdraw(&mut teams), None);
    }

    #[test]
    fn test_summary_of_unplayed_match() {
        let teams = two_teams();
        let summary = Match::new(4, 2, 0, 1).summary(&teams);

        assert_eq!(summary.id, 4);
        assert_eq!(summary.week, 2);
        assert_eq!(summary.home_team, "Home FC");
        assert_eq!(summary.away_team, "Away FC");
        assert_eq!((summary.home_goals, summary.away_goals), (0, 0));
        assert!(!summary.played);
    }
}
