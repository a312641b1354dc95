//! Health check handler

/// Liveness probe
#[utoipa::path(
    get,
    path = "/ping",
    responses(
        (status = 200, description = "Service is up", body = String)
    ),
    tag = "health"
)]
pub async fn ping() -> &'static str {
    "Pong!"
}
