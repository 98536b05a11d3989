use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::TeamMemberRepository;

/// PostgreSQL implementation of TeamMemberRepository
///
/// The link table carries no cascade from teams, so a draft reset must
/// clear the tournament's rows here before its team rows can go. The
/// subquery covers soft-deleted teams, which the team finders exclude.
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    /// Creates a new PostgresTeamMemberRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String> {
        sqlx::query(
            "DELETE FROM team_members
             WHERE team_id IN (SELECT id FROM teams WHERE tournament_id = $1)",
        )
        .bind(tournament_id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete team members: {}", e))?;

        Ok(())
    }
}
