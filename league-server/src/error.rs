//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use league_core::LeagueError;
use serde_json::json;

/// Everything a handler can fail with
#[derive(Debug)]
pub enum ApiError {
    League(LeagueError),
    BadRequest(String),
    Storage(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::League(LeagueError::MatchNotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::League(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        ApiError::League(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::League(err) => write!(f, "{}", err),
            ApiError::BadRequest(msg) => write!(f, "{}", msg),
            ApiError::Storage(err) => write!(f, "storage error: {:#}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let not_found: ApiError = LeagueError::MatchNotFound { id: 3 }.into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let exhausted: ApiError = LeagueError::NoWeeksRemaining { total_weeks: 3 }.into();
        assert_eq!(exhausted.status(), StatusCode::BAD_REQUEST);

        let invalid: ApiError = LeagueError::invalid_input("negative goals").into();
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let storage: ApiError = anyhow::anyhow!("disk full").into();
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_message() {
        let err: ApiError = LeagueError::MatchNotFound { id: 42 }.into();
        assert_eq!(err.to_string(), "match not found: 42");
    }
}
