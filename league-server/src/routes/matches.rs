//! Match result correction

use axum::{
    extract::{Query, State},
    Json,
};
use league_core::{MatchId, MatchSummary};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::ApiError;
use crate::state::ServerState;

#[derive(Deserialize)]
pub struct MatchQuery {
    pub id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionRequest {
    pub home_goals: i64,
    pub away_goals: i64,
}

/// Overwrite a match result, reversing the old one from the standings
pub async fn correct_match(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<MatchQuery>,
    Json(req): Json<CorrectionRequest>,
) -> Result<Json<MatchSummary>, ApiError> {
    let id = parse_id(query.id.as_deref())?;

    let mut session = state.lock();
    let corrected = session
        .league
        .correct_match_result(id, req.home_goals, req.away_goals)?;
    session.persist(std::slice::from_ref(&corrected))?;

    Ok(Json(corrected))
}

fn parse_id(raw: Option<&str>) -> Result<MatchId, ApiError> {
    let raw = raw.ok_or_else(|| ApiError::BadRequest("missing match id".to_string()))?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid match id: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(Some("12")).unwrap(), 12);
        assert!(parse_id(None).is_err());
        assert!(parse_id(Some("abc")).is_err());
        assert!(parse_id(Some("-1")).is_err());
    }
}
