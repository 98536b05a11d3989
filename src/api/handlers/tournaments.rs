use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::repositories::TournamentRepository;
use crate::domain::tournament::Tournament;
use crate::infrastructure::repositories::PostgresTournamentRepository;

/// Request body for creating a tournament
#[derive(Debug, Deserialize)]
pub struct CreateTournamentRequest {
    pub name: String,
}

/// Response for a single tournament
#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub id: Uuid,
    pub name: String,
    pub draft_state: String,
    pub draft_round: i32,
    pub draft_turn: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&Tournament> for TournamentResponse {
    fn from(tournament: &Tournament) -> Self {
        let status = tournament.draft_status();
        Self {
            id: tournament.id(),
            name: tournament.name().to_string(),
            draft_state: status.state().to_string(),
            draft_round: status.round(),
            draft_turn: status.turn(),
            created_at: tournament.created_at(),
        }
    }
}

/// Create a new tournament
///
/// POST /api/tournaments
pub async fn create_tournament(
    State(state): State<AppState>,
    Json(req): Json<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<TournamentResponse>), ApiError> {
    let (tournament, _events) = Tournament::new(req.name).map_err(ApiError::bad_request)?;

    let repo = PostgresTournamentRepository::new(state.pool.clone());
    repo.save(&tournament)
        .await
        .map_err(ApiError::internal_server_error)?;

    Ok((StatusCode::CREATED, Json(TournamentResponse::from(&tournament))))
}

/// List all tournaments, newest first
///
/// GET /api/tournaments
pub async fn list_tournaments(
    State(state): State<AppState>,
) -> Result<Json<Vec<TournamentResponse>>, ApiError> {
    let repo = PostgresTournamentRepository::new(state.pool.clone());
    let tournaments = repo
        .find_all()
        .await
        .map_err(ApiError::internal_server_error)?;

    let responses = tournaments.iter().map(TournamentResponse::from).collect();

    Ok(Json(responses))
}

/// Get a tournament by ID
///
/// GET /api/tournaments/:id
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let repo = PostgresTournamentRepository::new(state.pool.clone());
    let tournament = repo
        .find_by_id(id)
        .await
        .map_err(ApiError::internal_server_error)?
        .ok_or_else(|| ApiError::not_found(format!("Tournament not found: {}", id)))?;

    Ok(Json(TournamentResponse::from(&tournament)))
}

/// Delete a tournament and everything it owns
///
/// DELETE /api/tournaments/:id
///
/// Runs a draft reset first so team-member links are cleared in order;
/// memberships and any remaining rows then go with the tournament itself.
pub async fn delete_tournament(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.drafts.reset_draft(id).await?;

    let repo = PostgresTournamentRepository::new(state.pool.clone());
    repo.delete(id).await.map_err(|e| {
        if e.contains("not found") {
            ApiError::not_found(e)
        } else {
            ApiError::internal_server_error(format!("Failed to delete tournament: {}", e))
        }
    })?;

    Ok(StatusCode::NO_CONTENT)
}
