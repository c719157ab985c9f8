use crate::routes;
use axum::http::StatusCode;

pub const GREETING: &str = "hello, world!";

/// GET / handler - Static greeting
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Greeting", body = String, content_type = "text/plain")
    ),
    tag = "home"
)]
pub async fn home_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Entering GET home endpoint");
    (StatusCode::OK, GREETING)
}
