//! Week progression endpoints
//!
//! Play the next week, play the rest of the season, reset, and list a
//! week's fixtures.

use axum::{
    extract::{Path, State},
    Json,
};
use league_core::{LeagueError, MatchSummary};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::ServerState;

/// Play the current week
pub async fn play_week(State(state): State<Arc<ServerState>>) -> Result<Json<Value>, ApiError> {
    let mut session = state.lock();

    let results = session.league.play_week()?;
    session.persist(&results)?;

    Ok(Json(json!({
        "week": session.league.current_week(),
        "message": "Week played",
        "matches": results,
    })))
}

/// Play every remaining week
pub async fn play_all(State(state): State<Arc<ServerState>>) -> Result<Json<Value>, ApiError> {
    let mut session = state.lock();

    let results = session.league.play_all_weeks()?;
    session.persist(&results)?;

    Ok(Json(json!({
        "week": session.league.current_week(),
        "message": "All league matches played",
        "played": results.len(),
    })))
}

/// Rewind the league to week 0
pub async fn reset(State(state): State<Arc<ServerState>>) -> Result<Json<Value>, ApiError> {
    let mut session = state.lock();

    session.league.reset();
    let cleared = session.league.summaries();
    session.persist(&cleared)?;

    Ok(Json(json!({ "message": "League reset" })))
}

/// Fixtures and results of one 0-based week, as stored
pub async fn matches_for_week(
    State(state): State<Arc<ServerState>>,
    Path(week): Path<usize>,
) -> Result<Json<Vec<MatchSummary>>, ApiError> {
    let session = state.lock();

    let total_weeks = session.league.total_weeks();
    if week >= total_weeks {
        return Err(LeagueError::WeekOutOfRange { week, total_weeks }.into());
    }

    Ok(Json(session.store.load_week(week)?))
}
