use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::AppState;
use crate::domain::tournament::DraftStatus;
use crate::draft::NominationReceipt;

/// Request body for a captain's nomination
#[derive(Debug, Deserialize)]
pub struct NominateRequest {
    pub captain_id: Uuid,
    pub participant_id: Uuid,
}

/// Response describing a tournament's draft progress
#[derive(Debug, Serialize)]
pub struct DraftStatusResponse {
    pub state: String,
    pub round: i32,
    pub turn: i32,
}

impl From<&DraftStatus> for DraftStatusResponse {
    fn from(status: &DraftStatus) -> Self {
        Self {
            state: status.state().to_string(),
            round: status.round(),
            turn: status.turn(),
        }
    }
}

/// Response for a recorded nomination
///
/// The status reflects any resolution pass that ran within the same
/// request, so it can come back already confirmed or cancelled.
#[derive(Debug, Serialize)]
pub struct NominationReceiptResponse {
    pub id: Uuid,
    pub status: String,
}

impl From<&NominationReceipt> for NominationReceiptResponse {
    fn from(receipt: &NominationReceipt) -> Self {
        Self {
            id: receipt.id,
            status: receipt.status.to_string(),
        }
    }
}

/// Response for a completed draft reset
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub success: bool,
}

/// Get the tournament's draft progress
///
/// GET /api/tournaments/:id/draft
pub async fn draft_status(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<DraftStatusResponse>, ApiError> {
    let status = state.drafts.status(tournament_id).await?;

    Ok(Json(DraftStatusResponse::from(&status)))
}

/// Start the tournament's draft
///
/// POST /api/tournaments/:id/draft/start
pub async fn start_draft(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<DraftStatusResponse>, ApiError> {
    let status = state.drafts.start_draft(tournament_id).await?;

    Ok(Json(DraftStatusResponse::from(&status)))
}

/// Record a captain's nomination
///
/// POST /api/tournaments/:id/draft/nominations
pub async fn nominate(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
    Json(req): Json<NominateRequest>,
) -> Result<(StatusCode, Json<NominationReceiptResponse>), ApiError> {
    let receipt = state
        .drafts
        .nominate(tournament_id, req.captain_id, req.participant_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(NominationReceiptResponse::from(&receipt)),
    ))
}

/// Wipe the tournament's draft state
///
/// POST /api/tournaments/:id/draft/reset
pub async fn reset_draft(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<ResetResponse>, ApiError> {
    let success = state.drafts.reset_draft(tournament_id).await?;

    Ok(Json(ResetResponse { success }))
}
