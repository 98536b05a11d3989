use async_trait::async_trait;
use uuid::Uuid;
use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details; soft-deleted
/// teams are excluded from all find results.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team and its member list (insert or update)
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Find all active teams for a tournament
    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, String>;

    /// Find a captain's team within a tournament
    async fn find_by_tournament_and_captain(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
    ) -> Result<Option<Team>, String>;

    /// Delete all teams for a tournament
    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String>;
}
