use axum::Json;
use shared::HealthStatus;

/// Liveness probe. Answers `{"ok": true}` whenever the process can serve HTTP.
pub async fn health() -> Json<HealthStatus> {
    tracing::debug!("health probe");
    Json(HealthStatus::alive())
}
