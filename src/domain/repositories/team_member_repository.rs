use async_trait::async_trait;
use uuid::Uuid;

/// Repository trait for the team-member link rows
///
/// The member list itself is saved through `TeamRepository::save`; this
/// contract exists for the reset path, which must clear the link rows of a
/// tournament's teams before the team rows can be deleted.
#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    /// Delete the member links of every team in the tournament, soft-deleted
    /// teams included
    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String>;
}
