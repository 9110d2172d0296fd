//! Standings and league progress

use axum::{extract::State, Json};
use league_core::Team;
use serde::Serialize;
use std::sync::Arc;

use crate::state::ServerState;

/// Standings in team creation order
pub async fn get_table(State(state): State<Arc<ServerState>>) -> Json<Vec<Team>> {
    let session = state.lock();
    Json(session.league.table().to_vec())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueInfo {
    pub week: usize,
    pub total_weeks: usize,
    pub matches_per_week: usize,
    pub complete: bool,
}

/// Week cursor and schedule shape
pub async fn get_league_info(State(state): State<Arc<ServerState>>) -> Json<LeagueInfo> {
    let session = state.lock();
    let league = &session.league;
    Json(LeagueInfo {
        week: league.current_week(),
        total_weeks: league.total_weeks(),
        matches_per_week: league.matches_per_week(),
        complete: league.is_complete(),
    })
}
