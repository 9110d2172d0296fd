//! Storage collaborator contract
//!
//! The engine never talks to storage itself. Whoever owns the engine loads
//! teams through a [`LeagueStore`] at startup and writes results back after
//! each mutation. Result writes are idempotent, keyed by match id.

use anyhow::bail;

use crate::match_play::MatchSummary;
use crate::team::{Team, TeamId};

/// A stored team row (identity and strength only, never standings)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub strength: u32,
}

impl TeamRecord {
    pub fn into_team(self) -> Team {
        Team::new(self.id, self.name, self.strength)
    }
}

pub trait LeagueStore: Send {
    /// All teams in insertion order
    fn load_teams(&self) -> anyhow::Result<Vec<TeamRecord>>;

    fn insert_team(&mut self, name: &str, strength: u32) -> anyhow::Result<TeamId>;

    /// Replace the stored fixture list with a freshly generated schedule
    fn replace_fixtures(&mut self, fixtures: &[MatchSummary]) -> anyhow::Result<()>;

    /// Write the current result of one match
    fn upsert_result(&mut self, result: &MatchSummary) -> anyhow::Result<()>;

    /// Stored fixtures of one 0-based week
    fn load_week(&self, week: usize) -> anyhow::Result<Vec<MatchSummary>>;
}

/// In-process store, for tests and runs without a database
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    teams: Vec<TeamRecord>,
    matches: Vec<MatchSummary>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self) -> &[MatchSummary] {
        &self.matches
    }
}

impl LeagueStore for MemoryStore {
    fn load_teams(&self) -> anyhow::Result<Vec<TeamRecord>> {
        Ok(self.teams.clone())
    }

    fn insert_team(&mut self, name: &str, strength: u32) -> anyhow::Result<TeamId> {
        let id = self.teams.last().map_or(1, |t| t.id + 1);
        self.teams.push(TeamRecord {
            id,
            name: name.to_string(),
            strength,
        });
        Ok(id)
    }

    fn replace_fixtures(&mut self, fixtures: &[MatchSummary]) -> anyhow::Result<()> {
        self.matches = fixtures.to_vec();
        Ok(())
    }

    fn upsert_result(&mut self, result: &MatchSummary) -> anyhow::Result<()> {
        match self.matches.iter_mut().find(|m| m.id == result.id) {
            Some(existing) => *existing = result.clone(),
            None => self.matches.push(result.clone()),
        }
        Ok(())
    }

    fn load_week(&self, week: usize) -> anyhow::Result<Vec<MatchSummary>> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.week == week)
            .cloned()
            .collect())
    }
}

/// Insert `specs` when the store holds no teams yet, then return what is stored
pub fn seed_teams<'a, S, I>(store: &mut S, specs: I) -> anyhow::Result<Vec<Team>>
where
    S: LeagueStore + ?Sized,
    I: IntoIterator<Item = (&'a str, u32)>,
{
    if store.load_teams()?.is_empty() {
        for (name, strength) in specs {
            store.insert_team(name, strength)?;
        }
    }

    let teams: Vec<Team> = store
        .load_teams()?
        .into_iter()
        .map(TeamRecord::into_team)
        .collect();

    if teams.is_empty() {
        bail!("store holds no teams and none were configured");
    }
    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::League;

    #[test]
    fn test_seed_only_once() {
        let mut store = MemoryStore::new();

        let teams = seed_teams(&mut store, [("A", 50), ("B", 40)]).unwrap();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].id, 1);

        let again = seed_teams(&mut store, [("C", 10), ("D", 20)]).unwrap();
        assert_eq!(again, teams);
    }

    #[test]
    fn test_seed_nothing_fails() {
        let mut store = MemoryStore::new();
        assert!(seed_teams(&mut store, std::iter::empty::<(&str, u32)>()).is_err());
    }

    #[test]
    fn test_upsert_is_idempotent() {
        let mut store = MemoryStore::new();
        let teams = seed_teams(&mut store, [("A", 50), ("B", 40)]).unwrap();
        let mut league = League::with_seed(teams, 1).unwrap();
        store.replace_fixtures(&league.summaries()).unwrap();

        let corrected = league.correct_match_result(1, 2, 1).unwrap();
        store.upsert_result(&corrected).unwrap();
        store.upsert_result(&corrected).unwrap();

        assert_eq!(store.matches().len(), 1);
        let stored = store.matches().iter().find(|m| m.id == 1).unwrap();
        assert_eq!((stored.home_goals, stored.away_goals), (2, 1));
        assert_eq!(store.load_week(0).unwrap(), vec![corrected]);
    }
}
