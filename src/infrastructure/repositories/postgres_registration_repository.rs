use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::registration::Registration;
use crate::domain::repositories::RegistrationRepository;

/// PostgreSQL implementation of RegistrationRepository
///
/// One row per (tournament, participant) pair, enforced by a unique
/// constraint; a duplicate join surfaces as a save error.
pub struct PostgresRegistrationRepository {
    pool: PgPool,
}

impl PostgresRegistrationRepository {
    /// Creates a new PostgresRegistrationRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn registration_from_row(row: &PgRow) -> Result<Registration, sqlx::Error> {
    Ok(Registration::from_persistence(
        row.try_get("id")?,
        row.try_get("tournament_id")?,
        row.try_get("participant_id")?,
        row.try_get("display_name")?,
        row.try_get("is_captain")?,
        row.try_get("team_id")?,
        row.try_get("created_at")?,
    ))
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepository {
    async fn save(&self, registration: &Registration) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO registrations (
                id, tournament_id, participant_id, display_name,
                is_captain, team_id, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                display_name = EXCLUDED.display_name,
                is_captain = EXCLUDED.is_captain,
                team_id = EXCLUDED.team_id
            "#,
        )
        .bind(registration.id())
        .bind(registration.tournament_id())
        .bind(registration.participant_id())
        .bind(registration.display_name())
        .bind(registration.is_captain())
        .bind(registration.team_id())
        .bind(registration.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save registration: {}", e))?;

        Ok(())
    }

    async fn find_by_tournament(&self, tournament_id: Uuid) -> Result<Vec<Registration>, String> {
        let rows = sqlx::query(
            r#"
            SELECT id, tournament_id, participant_id, display_name,
                   is_captain, team_id, created_at
            FROM registrations
            WHERE tournament_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to find registrations by tournament: {}", e))?;

        rows.iter()
            .map(registration_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to map registration row: {}", e))
    }

    async fn find_by_tournament_and_participant(
        &self,
        tournament_id: Uuid,
        participant_id: Uuid,
    ) -> Result<Option<Registration>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, tournament_id, participant_id, display_name,
                   is_captain, team_id, created_at
            FROM registrations
            WHERE tournament_id = $1 AND participant_id = $2
            "#,
        )
        .bind(tournament_id)
        .bind(participant_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find registration: {}", e))?;

        row.as_ref()
            .map(registration_from_row)
            .transpose()
            .map_err(|e| format!("Failed to map registration row: {}", e))
    }

    async fn clear_team_assignments(&self, tournament_id: Uuid) -> Result<(), String> {
        sqlx::query("UPDATE registrations SET team_id = NULL WHERE tournament_id = $1")
            .bind(tournament_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to clear team assignments: {}", e))?;

        Ok(())
    }
}
