//! League engine - schedule, week cursor and standings
//!
//! The engine exclusively owns its teams and fixtures. Weeks before the
//! cursor have been played; weeks at or after it have not. Callers that share
//! a `League` across threads must serialize every call (reads included)
//! behind one lock.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;

use crate::config::LeagueConfig;
use crate::error::{LeagueError, Result};
use crate::match_play::{Match, MatchId, MatchSummary, Score, MAX_CORRECTION_GOALS};
use crate::schedule::{generate_fixtures, weeks_for};
use crate::team::{Team, TeamId};

/// A single round-robin league
#[derive(Clone, Debug)]
pub struct League {
    teams: Vec<Team>,
    matches: Vec<Match>,
    match_index: FxHashMap<MatchId, usize>,
    week: usize,
    total_weeks: usize,
    matches_per_week: usize,
    rng: ChaCha8Rng,
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

impl League {
    /// Build a league with a randomly seeded RNG
    pub fn new(teams: Vec<Team>) -> Result<Self> {
        Self::with_rng(teams, ChaCha8Rng::from_entropy())
    }

    /// Build a league whose results are reproducible from `seed`
    pub fn with_seed(teams: Vec<Team>, seed: u64) -> Result<Self> {
        Self::with_rng(teams, ChaCha8Rng::seed_from_u64(seed))
    }

    /// Build a league from config. Team ids are assigned 1.. in config order.
    pub fn from_config(config: &LeagueConfig) -> Result<Self> {
        config.validate()?;

        let teams = config
            .teams
            .iter()
            .zip(1..)
            .map(|(spec, id): (_, TeamId)| Team::new(id, spec.name.clone(), spec.strength))
            .collect();

        match config.seed {
            Some(seed) => Self::with_seed(teams, seed),
            None => Self::new(teams),
        }
    }

    pub fn with_rng(mut teams: Vec<Team>, rng: ChaCha8Rng) -> Result<Self> {
        let total_weeks = weeks_for(teams.len());
        if total_weeks == 0 {
            return Err(LeagueError::InvalidTeamCount { count: teams.len() });
        }

        for team in &mut teams {
            team.reset_stats();
        }

        let positions: Vec<usize> = (0..teams.len()).collect();
        let matches: Vec<Match> = generate_fixtures(&positions)
            .into_iter()
            .zip(1..)
            .map(|(fixture, id)| Match::new(id, fixture.week, fixture.home, fixture.away))
            .collect();

        let match_index = matches
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id, i))
            .collect();

        tracing::debug!(
            teams = teams.len(),
            matches = matches.len(),
            weeks = total_weeks,
            "league created"
        );

        Ok(Self {
            matches_per_week: teams.len() / 2,
            teams,
            matches,
            match_index,
            week: 0,
            total_weeks,
            rng,
        })
    }
}

// ============================================================================
// ACCESSORS
// ============================================================================

impl League {
    /// Teams in creation order. No sorting is applied.
    pub fn table(&self) -> &[Team] {
        &self.teams
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Number of weeks already played (0-based cursor)
    pub fn current_week(&self) -> usize {
        self.week
    }

    pub fn total_weeks(&self) -> usize {
        self.total_weeks
    }

    pub fn matches_per_week(&self) -> usize {
        self.matches_per_week
    }

    pub fn is_complete(&self) -> bool {
        self.week >= self.total_weeks
    }

    pub fn find_match(&self, id: MatchId) -> Option<&Match> {
        self.match_index.get(&id).map(|&i| &self.matches[i])
    }

    pub fn summary(&self, m: &Match) -> MatchSummary {
        m.summary(&self.teams)
    }

    /// Every fixture, in schedule order
    pub fn summaries(&self) -> Vec<MatchSummary> {
        self.matches.iter().map(|m| m.summary(&self.teams)).collect()
    }

    /// Fixtures of one 0-based week
    pub fn matches_for_week(&self, week: usize) -> Result<Vec<MatchSummary>> {
        if week >= self.total_weeks {
            return Err(LeagueError::WeekOutOfRange {
                week,
                total_weeks: self.total_weeks,
            });
        }

        Ok(self.matches[self.week_range(week)]
            .iter()
            .map(|m| m.summary(&self.teams))
            .collect())
    }

    fn week_range(&self, week: usize) -> std::ops::Range<usize> {
        let start = (week * self.matches_per_week).min(self.matches.len());
        let end = (start + self.matches_per_week).min(self.matches.len());
        start..end
    }
}

// ============================================================================
// MUTATORS
// ============================================================================

impl League {
    /// Play every match of the current week and advance the cursor.
    ///
    /// Returns the week's results. On a finished league nothing changes.
    pub fn play_week(&mut self) -> Result<Vec<MatchSummary>> {
        if self.is_complete() {
            return Err(LeagueError::NoWeeksRemaining {
                total_weeks: self.total_weeks,
            });
        }

        let range = self.week_range(self.week);
        for m in &mut self.matches[range.clone()] {
            // Corrected ahead of schedule: take the old result out first
            if let Some(previous) = m.withdraw(&mut self.teams) {
                tracing::debug!(id = m.id, %previous, "replacing pre-recorded result");
            }

            let score = m.play(&mut self.teams, &mut self.rng);
            tracing::debug!(
                "Week {}: {} {} {}",
                self.week + 1,
                self.teams[m.home_index()].name,
                score,
                self.teams[m.away_index()].name
            );
        }

        self.week += 1;
        tracing::info!(week = self.week, total = self.total_weeks, "week played");

        Ok(self.matches[range]
            .iter()
            .map(|m| m.summary(&self.teams))
            .collect())
    }

    /// Play the remaining weeks one at a time until the league is finished.
    ///
    /// Returns every result played by this call, in schedule order.
    pub fn play_all_weeks(&mut self) -> Result<Vec<MatchSummary>> {
        if self.is_complete() {
            return Err(LeagueError::NoWeeksRemaining {
                total_weeks: self.total_weeks,
            });
        }

        let mut played = Vec::new();
        while !self.is_complete() {
            played.extend(self.play_week()?);
        }
        Ok(played)
    }

    /// Rewind to week 0 with zeroed standings.
    ///
    /// Fixtures keep their order; recorded results are cleared so the next
    /// season draws fresh outcomes.
    pub fn reset(&mut self) {
        self.week = 0;
        for team in &mut self.teams {
            team.reset_stats();
        }
        for m in &mut self.matches {
            m.clear();
        }
        tracing::info!("league reset");
    }

    /// Replace the recorded result of a match.
    ///
    /// The old result (if any) is reversed from both teams before the new one
    /// is applied. Works on any match, whether or not its week has been played.
    pub fn correct_match_result(
        &mut self,
        id: MatchId,
        home_goals: i64,
        away_goals: i64,
    ) -> Result<MatchSummary> {
        let score = Score::new(parse_goals(home_goals)?, parse_goals(away_goals)?);
        let index = *self
            .match_index
            .get(&id)
            .ok_or(LeagueError::MatchNotFound { id })?;

        let m = &mut self.matches[index];
        let previous = m.withdraw(&mut self.teams);
        m.record(&mut self.teams, score);

        tracing::info!(
            id,
            previous = ?previous,
            corrected = %score,
            "match result corrected"
        );

        Ok(m.summary(&self.teams))
    }
}

fn parse_goals(goals: i64) -> Result<u32> {
    match u32::try_from(goals) {
        Ok(goals) if goals <= MAX_CORRECTION_GOALS => Ok(goals),
        _ => Err(LeagueError::invalid_input(format!(
            "goals must be between 0 and {}, got {}",
            MAX_CORRECTION_GOALS, goals
        ))),
    }
}
