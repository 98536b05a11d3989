// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

use std::sync::Arc;

use sqlx::PgPool;

use crate::draft::DraftService;

pub mod errors;
pub mod handlers;

/// Shared state handed to every handler
///
/// Plain CRUD handlers build repositories straight off the pool; the draft
/// handlers go through the shared service so all draft operations for a
/// tournament funnel through its lock.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub drafts: Arc<DraftService>,
}
