use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
///
/// The roster lives in the team_members link table, ordered by a position
/// column; `save` reconciles the link rows against the aggregate's member
/// list. All find queries exclude soft-deleted teams.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn team_from_row(row: &PgRow) -> Result<Team, sqlx::Error> {
    Ok(Team::from_persistence(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("captain_id")?,
        row.try_get("tournament_id")?,
        row.try_get("members")?,
        row.try_get("created_at")?,
        row.try_get("is_deleted")?,
    ))
}

const SELECT_TEAM: &str = r#"
    SELECT
        t.id, t.name, t.captain_id, t.tournament_id, t.created_at, t.is_deleted,
        COALESCE(
            array_agg(tm.participant_id ORDER BY tm.position)
                FILTER (WHERE tm.participant_id IS NOT NULL),
            ARRAY[]::uuid[]
        ) AS members
    FROM teams t
    LEFT JOIN team_members tm ON tm.team_id = t.id
"#;

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, captain_id, tournament_id, created_at, is_deleted)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                is_deleted = EXCLUDED.is_deleted
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.captain_id())
        .bind(team.tournament_id())
        .bind(team.created_at())
        .bind(team.is_deleted())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        // Reconcile link rows with the aggregate's roster
        sqlx::query("DELETE FROM team_members WHERE team_id = $1 AND participant_id <> ALL($2)")
            .bind(team.id())
            .bind(team.members().to_vec())
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to prune team members: {}", e))?;

        for (position, participant_id) in team.members().iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO team_members (team_id, participant_id, position)
                VALUES ($1, $2, $3)
                ON CONFLICT (team_id, participant_id) DO UPDATE SET
                    position = EXCLUDED.position
                "#,
            )
            .bind(team.id())
            .bind(participant_id)
            .bind(position as i32)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to save team member: {}", e))?;
        }

        Ok(())
    }

    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Team>, String> {
        let query = format!(
            "{SELECT_TEAM} WHERE t.tournament_id = $1 AND NOT t.is_deleted
             GROUP BY t.id ORDER BY t.created_at"
        );

        let rows = sqlx::query(&query)
            .bind(tournament_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| format!("Failed to find teams by tournament: {}", e))?;

        rows.iter()
            .map(team_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to map team row: {}", e))
    }

    async fn find_by_tournament_and_captain(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
    ) -> Result<Option<Team>, String> {
        let query = format!(
            "{SELECT_TEAM} WHERE t.tournament_id = $1 AND t.captain_id = $2 AND NOT t.is_deleted
             GROUP BY t.id"
        );

        let row = sqlx::query(&query)
            .bind(tournament_id)
            .bind(captain_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to find team by captain: {}", e))?;

        row.as_ref()
            .map(team_from_row)
            .transpose()
            .map_err(|e| format!("Failed to map team row: {}", e))
    }

    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String> {
        sqlx::query("DELETE FROM teams WHERE tournament_id = $1")
            .bind(tournament_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete teams: {}", e))?;

        Ok(())
    }
}
