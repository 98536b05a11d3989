use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;
use crate::infrastructure::repositories::PostgresTeamRepository;

/// Response for a drafted team with its roster in draft order
#[derive(Debug, Serialize)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    pub captain_id: Uuid,
    pub tournament_id: Uuid,
    pub members: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id(),
            name: team.name().to_string(),
            captain_id: team.captain_id(),
            tournament_id: team.tournament_id(),
            members: team.members().to_vec(),
            created_at: team.created_at(),
        }
    }
}

/// List a tournament's active teams
///
/// GET /api/tournaments/:id/teams
pub async fn list_teams(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<Vec<TeamResponse>>, ApiError> {
    let teams = PostgresTeamRepository::new(state.pool.clone());
    let teams = teams
        .find_by_tournament(tournament_id)
        .await
        .map_err(ApiError::internal_server_error)?;

    let responses = teams.iter().map(TeamResponse::from).collect();

    Ok(Json(responses))
}
