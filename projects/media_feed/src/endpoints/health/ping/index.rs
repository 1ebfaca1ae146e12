/// Axum handler: GET /ping
pub async fn handler() -> &'static str {
    "pong"
}
