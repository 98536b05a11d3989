use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::draft::DraftError;

/// API error type with HTTP status code and message
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    /// Creates a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Creates a 404 Not Found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Creates a 409 Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl From<String> for ApiError {
    fn from(message: String) -> Self {
        Self::internal_server_error(message)
    }
}

impl From<&str> for ApiError {
    fn from(message: &str) -> Self {
        Self::internal_server_error(message)
    }
}

impl From<DraftError> for ApiError {
    fn from(err: DraftError) -> Self {
        match err {
            DraftError::TournamentNotFound(_) => Self::not_found(err.to_string()),
            DraftError::InvalidInput(_) => Self::bad_request(err.to_string()),
            DraftError::NoCaptainsRegistered
            | DraftError::PreconditionNotMet(_)
            | DraftError::AlreadyNominated { .. }
            | DraftError::DraftNotInProgress => Self::conflict(err.to_string()),
            DraftError::ResetFailure(_) | DraftError::Storage(_) => {
                Self::internal_server_error(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn tournament_not_found_maps_to_404() {
        let err = ApiError::from(DraftError::TournamentNotFound(Uuid::new_v4()));

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }

    #[test]
    fn invalid_input_maps_to_400() {
        let err = ApiError::from(DraftError::InvalidInput("missing id".to_string()));

        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn draft_state_violations_map_to_409() {
        let already = ApiError::from(DraftError::AlreadyNominated {
            captain_id: Uuid::new_v4(),
            participant_id: Uuid::new_v4(),
        });
        let not_running = ApiError::from(DraftError::DraftNotInProgress);
        let no_captains = ApiError::from(DraftError::NoCaptainsRegistered);

        assert_eq!(already.status, StatusCode::CONFLICT);
        assert_eq!(not_running.status, StatusCode::CONFLICT);
        assert_eq!(no_captains.status, StatusCode::CONFLICT);
    }

    #[test]
    fn storage_failures_map_to_500() {
        let storage = ApiError::from(DraftError::Storage("connection refused".to_string()));
        let reset = ApiError::from(DraftError::ResetFailure("teams stuck".to_string()));

        assert_eq!(storage.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reset.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
