use crate::domain::tournament::Tournament;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for the Tournament aggregate
///
/// Defines the contract for persisting and retrieving tournaments.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Save a tournament (insert or update)
    async fn save(&self, tournament: &Tournament) -> Result<(), String>;

    /// Find a tournament by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tournament>, String>;

    /// List all tournaments, newest first
    async fn find_all(&self) -> Result<Vec<Tournament>, String>;

    /// Delete a tournament by ID
    async fn delete(&self, id: Uuid) -> Result<(), String>;
}
