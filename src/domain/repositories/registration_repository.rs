use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::registration::Registration;

/// Repository trait for tournament membership records
///
/// Defines the contract for persisting and retrieving the link between
/// participants and tournaments, including captain flags and team
/// assignments.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Save a membership (insert or update)
    async fn save(&self, registration: &Registration) -> Result<(), String>;

    /// Find all memberships for a tournament
    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Registration>, String>;

    /// Find a participant's membership within a tournament
    async fn find_by_tournament_and_participant(
        &self,
        tournament_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<Registration>, String>;

    /// Clear the team assignment on every membership of a tournament
    async fn clear_team_assignments(&self, tournament_id: Uuid) -> Result<(), String>;
}
