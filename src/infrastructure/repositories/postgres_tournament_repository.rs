use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::repositories::TournamentRepository;
use crate::domain::tournament::{DraftStatus, Tournament};

/// PostgreSQL implementation of TournamentRepository
///
/// Persists the Tournament aggregate with its embedded draft status flattened
/// into the tournaments table. Queries are bound at runtime so the crate
/// builds without a live database.
pub struct PostgresTournamentRepository {
    pool: PgPool,
}

impl PostgresTournamentRepository {
    /// Creates a new PostgresTournamentRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn tournament_from_row(row: &PgRow) -> Result<Tournament, sqlx::Error> {
    let status = DraftStatus::from_persistence(
        row.try_get("draft_state")?,
        row.try_get("draft_round")?,
        row.try_get("draft_turn")?,
    );

    Ok(Tournament::from_persistence(
        row.try_get("id")?,
        row.try_get("name")?,
        row.try_get("created_at")?,
        status,
    ))
}

#[async_trait]
impl TournamentRepository for PostgresTournamentRepository {
    async fn save(&self, tournament: &Tournament) -> Result<(), String> {
        let status = tournament.draft_status();

        sqlx::query(
            r#"
            INSERT INTO tournaments (id, name, draft_state, draft_round, draft_turn, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                draft_state = EXCLUDED.draft_state,
                draft_round = EXCLUDED.draft_round,
                draft_turn = EXCLUDED.draft_turn
            "#,
        )
        .bind(tournament.id())
        .bind(tournament.name())
        .bind(status.state())
        .bind(status.round())
        .bind(status.turn())
        .bind(tournament.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save tournament: {}", e))?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Tournament>, String> {
        let row = sqlx::query(
            r#"
            SELECT id, name, draft_state, draft_round, draft_turn, created_at
            FROM tournaments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find tournament by id: {}", e))?;

        row.as_ref()
            .map(tournament_from_row)
            .transpose()
            .map_err(|e| format!("Failed to map tournament row: {}", e))
    }

    async fn find_all(&self) -> Result<Vec<Tournament>, String> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, draft_state, draft_round, draft_turn, created_at
            FROM tournaments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list tournaments: {}", e))?;

        rows.iter()
            .map(tournament_from_row)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("Failed to map tournament row: {}", e))
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete tournament: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("Tournament not found: {}", id));
        }

        Ok(())
    }
}
