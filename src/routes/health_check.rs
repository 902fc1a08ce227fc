use axum::Json;

#[derive(serde::Serialize)]
pub struct HealthStatus {
    status: &'static str,
}

/// Health check endpoint
///
/// Returns 200 OK with `{"status": "ok"}` whenever the process is able
/// to answer HTTP at all. Liveness only: nothing downstream is probed.
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
