use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur in the draft subsystem
#[derive(Debug, Error)]
pub enum DraftError {
    #[error("Tournament not found: {0}")]
    TournamentNotFound(Uuid),

    #[error("No captains are registered for this tournament")]
    NoCaptainsRegistered,

    #[error("Draft precondition not met: {0}")]
    PreconditionNotMet(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Captain {captain_id} has already nominated participant {participant_id}")]
    AlreadyNominated {
        captain_id: Uuid,
        participant_id: Uuid,
    },

    #[error("The draft is not in progress")]
    DraftNotInProgress,

    #[error("Draft reset failed: {0}")]
    ResetFailure(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

pub type DraftResult<T> = Result<T, DraftError>;
