use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::nomination::Nomination;
use crate::domain::repositories::NominationRepository;

/// PostgreSQL implementation of NominationRepository
pub struct PostgresNominationRepository {
    pool: PgPool,
}

impl PostgresNominationRepository {
    /// Creates a new PostgresNominationRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn nomination_from_row(row: &PgRow) -> Result<Nomination, sqlx::Error> {
    Ok(Nomination::from_persistence(
        row.try_get("id")?,
        row.try_get("tournament_id")?,
        row.try_get("captain_id")?,
        row.try_get("participant_id")?,
        row.try_get("round")?,
        row.try_get("turn")?,
        row.try_get("status")?,
        row.try_get("created_at")?,
    ))
}

#[async_trait]
impl NominationRepository for PostgresNominationRepository {
    async fn save(&self, nomination: &Nomination) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO nominations (
                id, tournament_id, captain_id, participant_id,
                round, turn, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                status = EXCLUDED.status
            "#,
        )
        .bind(nomination.id())
        .bind(nomination.tournament_id())
        .bind(nomination.captain_id())
        .bind(nomination.participant_id())
        .bind(nomination.round())
        .bind(nomination.turn())
        .bind(nomination.status())
        .bind(nomination.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save nomination: {}", e))?;

        Ok(())
    }

    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Nomination>, String> {
        let rows = sqlx::query(
            r#"
            SELECT id, tournament_id, captain_id, participant_id,
                   round, turn, status, created_at
            FROM nominations
            WHERE tournament_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find nominations by tournament: {}", e))?;

        rows.iter()
            .map(nomination_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to map nomination row: {}", e))
    }

    async fn find_by_tournament_captain_participant(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<Nomination>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, tournament_id, captain_id, participant_id,
                   round, turn, status, created_at
            FROM nominations
            WHERE tournament_id = $1 AND captain_id = $2 AND participant_id = $3
            "#,
        )
        .bind(tournament_id)
        .bind(captain_id)
        .bind(participant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find nomination: {}", e))?;

        row.as_ref()
            .map(nomination_from_row)
            .transpose()
            .map_err(|e| format!("Failed to map nomination row: {}", e))
    }

    async fn delete_by_tournament(&self, tournament_id: Uuid) -> Result<(), String> {
        sqlx::query("DELETE FROM nominations WHERE tournament_id = $1")
            .bind(tournament_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete nominations: {}", e))?;

        Ok(())
    }
}
