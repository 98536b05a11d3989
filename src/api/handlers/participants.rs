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
use crate::domain::registration::Registration;
use crate::domain::repositories::{RegistrationRepository, TournamentRepository};
use crate::infrastructure::repositories::{
    PostgresRegistrationRepository, PostgresTournamentRepository,
};

/// Request body for joining a tournament
#[derive(Debug, Deserialize)]
pub struct JoinTournamentRequest {
    pub participant_id: Uuid,
    pub display_name: String,
    #[serde(default)]
    pub is_captain: bool,
}

/// Request body for toggling a participant's captain flag
#[derive(Debug, Deserialize)]
pub struct SetCaptainRequest {
    pub is_captain: bool,
}

/// Response for a tournament membership
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub participant_id: Uuid,
    pub display_name: String,
    pub is_captain: bool,
    pub team_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            id: registration.id(),
            tournament_id: registration.tournament_id(),
            participant_id: registration.participant_id(),
            display_name: registration.display_name().to_string(),
            is_captain: registration.is_captain(),
            team_id: registration.team_id(),
            created_at: registration.created_at(),
        }
    }
}

/// Register a participant for a tournament
///
/// POST /api/tournaments/:id/participants
///
/// Joining as a captain is rejected with 409 while the draft is in
/// progress; the captain set is fixed once teams are formed.
pub async fn join_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<JoinTournamentRequest>,
) -> Result<(StatusCode, Json<RegistrationResponse>), ApiError> {
    let tournaments = PostgresTournamentRepository::new(state.pool.clone());
    let tournament = tournaments
        .find_by_id(tournament_id)
        .await
        .map_err(ApiError::internal_server_error)?
        .ok_or_else(|| ApiError::not_found(format!("Tournament not found: {}", tournament_id)))?;

    if req.is_captain && !tournament.allows_captain_changes() {
        return Err(ApiError::conflict(
            "Captains cannot join while the draft is in progress",
        ));
    }

    let registrations = PostgresRegistrationRepository::new(state.pool.clone());
    let existing = registrations
        .find_by_tournament_and_participant(tournament_id, req.participant_id)
        .await
        .map_err(ApiError::internal_server_error)?;
    if existing.is_some() {
        return Err(ApiError::conflict(format!(
            "Participant {} is already registered for this tournament",
            req.participant_id
        )));
    }

    let registration = Registration::new(
        tournament_id,
        req.participant_id,
        req.display_name,
        req.is_captain,
    )
    .map_err(ApiError::bad_request)?;

    registrations
        .save(&registration)
        .await
        .map_err(ApiError::internal_server_error)?;

    Ok((
        StatusCode::CREATED,
        Json(RegistrationResponse::from(&registration)),
    ))
}

/// List a tournament's memberships in join order
///
/// GET /api/tournaments/:id/participants
pub async fn list_participants(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<Vec<RegistrationResponse>>, ApiError> {
    let registrations = PostgresRegistrationRepository::new(state.pool.clone());
    let memberships = registrations
        .find_by_tournament(tournament_id)
        .await
        .map_err(ApiError::internal_server_error)?;

    let responses = memberships.iter().map(RegistrationResponse::from).collect();

    Ok(Json(responses))
}

/// Toggle a participant's captain flag
///
/// PUT /api/tournaments/:id/participants/:participant_id/captain
///
/// Rejected with 409 while the draft is in progress; changing the captain
/// set mid-draft would invalidate the round's nomination check.
pub async fn set_captain(
    State(state): State<AppState>,
    Path((tournament_id, participant_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<SetCaptainRequest>,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let tournaments = PostgresTournamentRepository::new(state.pool.clone());
    let tournament = tournaments
        .find_by_id(tournament_id)
        .await
        .map_err(ApiError::internal_server_error)?
        .ok_or_else(|| ApiError::not_found(format!("Tournament not found: {}", tournament_id)))?;

    if !tournament.allows_captain_changes() {
        return Err(ApiError::conflict(
            "Captain flags cannot change while the draft is in progress",
        ));
    }

    let registrations = PostgresRegistrationRepository::new(state.pool.clone());
    let mut membership = registrations
        .find_by_tournament_and_participant(tournament_id, participant_id)
        .await
        .map_err(ApiError::internal_server_error)?
        .ok_or_else(|| {
            ApiError::not_found(format!(
                "Participant {} is not registered for this tournament",
                participant_id
            ))
        })?;

    membership.set_captain(req.is_captain);
    registrations
        .save(&membership)
        .await
        .map_err(ApiError::internal_server_error)?;

    Ok(Json(RegistrationResponse::from(&membership)))
}
