//! SQLite-backed league store

use std::path::Path;

use anyhow::Result;
use league_core::{LeagueStore, MatchSummary, TeamId, TeamRecord};
use rusqlite::{params, Connection};

/// Teams and fixture results in a SQLite file
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) a database file and ensure tables exist
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let mut store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS teams (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                strength INTEGER NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS matches (
                id INTEGER PRIMARY KEY,
                home_team_id INTEGER NOT NULL,
                away_team_id INTEGER NOT NULL,
                home_goals INTEGER NOT NULL DEFAULT 0,
                away_goals INTEGER NOT NULL DEFAULT 0,
                played INTEGER NOT NULL DEFAULT 0,
                week INTEGER NOT NULL,
                FOREIGN KEY (home_team_id) REFERENCES teams(id),
                FOREIGN KEY (away_team_id) REFERENCES teams(id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_matches_week ON matches(week)",
            [],
        )?;

        Ok(())
    }
}

impl LeagueStore for SqliteStore {
    fn load_teams(&self) -> Result<Vec<TeamRecord>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, strength FROM teams ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(TeamRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                strength: row.get(2)?,
            })
        })?;

        let mut teams = Vec::new();
        for row in rows {
            teams.push(row?);
        }
        Ok(teams)
    }

    fn insert_team(&mut self, name: &str, strength: u32) -> Result<TeamId> {
        self.conn.execute(
            "INSERT INTO teams (name, strength) VALUES (?1, ?2)",
            params![name, strength],
        )?;
        Ok(TeamId::try_from(self.conn.last_insert_rowid())?)
    }

    fn replace_fixtures(&mut self, fixtures: &[MatchSummary]) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM matches", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO matches (id, home_team_id, away_team_id, home_goals, away_goals, played, week)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for m in fixtures {
                stmt.execute(params![
                    m.id,
                    m.home_team_id,
                    m.away_team_id,
                    m.home_goals,
                    m.away_goals,
                    m.played,
                    i64::try_from(m.week)?,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn upsert_result(&mut self, result: &MatchSummary) -> Result<()> {
        self.conn.execute(
            "INSERT INTO matches (id, home_team_id, away_team_id, home_goals, away_goals, played, week)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                home_goals = excluded.home_goals,
                away_goals = excluded.away_goals,
                played = excluded.played",
            params![
                result.id,
                result.home_team_id,
                result.away_team_id,
                result.home_goals,
                result.away_goals,
                result.played,
                i64::try_from(result.week)?,
            ],
        )?;
        Ok(())
    }

    fn load_week(&self, week: usize) -> Result<Vec<MatchSummary>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.id, m.week, m.home_team_id, t1.name, m.away_team_id, t2.name,
                    m.home_goals, m.away_goals, m.played
             FROM matches m
             JOIN teams t1 ON m.home_team_id = t1.id
             JOIN teams t2 ON m.away_team_id = t2.id
             WHERE m.week = ?1
             ORDER BY m.id",
        )?;

        let rows = stmt.query_map(params![i64::try_from(week)?], |row| {
            Ok(MatchSummary {
                id: row.get(0)?,
                week: week_column(1, row.get(1)?)?,
                home_team_id: row.get(2)?,
                home_team: row.get(3)?,
                away_team_id: row.get(4)?,
                away_team: row.get(5)?,
                home_goals: row.get(6)?,
                away_goals: row.get(7)?,
                played: row.get(8)?,
            })
        })?;

        let mut matches = Vec::new();
        for row in rows {
            matches.push(row?);
        }
        Ok(matches)
    }
}

/// Convert a stored week number, rejecting negative values
fn week_column(index: usize, week: i64) -> rusqlite::Result<usize> {
    usize::try_from(week).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(index, week))
}
