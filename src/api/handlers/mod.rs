pub mod draft;
pub mod participants;
pub mod teams;
pub mod tournaments;

/// Liveness probe
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
