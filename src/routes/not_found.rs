use axum::Json;
use axum::http::StatusCode;

#[derive(serde::Serialize)]
pub struct NotFoundBody {
    error: &'static str,
}

/// Fallback handler for every unmatched path or method.
pub async fn not_found() -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody { error: "not_found" }),
    )
}
