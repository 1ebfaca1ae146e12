pub const GREETING: &str = "instagram basic API";

/// Axum handler: GET /
pub async fn handler() -> &'static str {
    GREETING
}
