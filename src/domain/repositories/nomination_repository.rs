use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::nomination::Nomination;

/// Repository trait for nomination records
///
/// Nominations are tournament-scoped working records; the resolution pass
/// reads them in bulk and the uniqueness check looks up one triple.
#[async_trait]
pub trait NominationRepository: Send + Sync {
    /// Save a nomination (insert or update)
    async fn save(&self, nomination: &Nomination) -> Result<(), String>;

    /// Find all nominations for a tournament
    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Nomination>, String>;

    /// Find the nomination for a (tournament, captain, participant) triple
    async fn find_by_tournament_captain_participant(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<Nomination>, String>;

    /// Delete all nominations for a tournament
    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String>;
}
