use crate::routes;
use axum::http::StatusCode;

pub const ALIVE_MESSAGE: &str = "It's...ALIVE!!!";

/// GET alive route handler - Liveness probe (`/api/v1/alive` by default,
/// see `Config::alive_route`)
///
/// Touches no dependencies, so a 200 here only means the process is up and
/// dispatching requests.
#[utoipa::path(
    get,
    path = routes::DEFAULT_ALIVE_ROUTE,
    responses(
        (status = 200, description = "Service is alive", body = String, content_type = "text/plain")
    ),
    tag = "health"
)]
pub async fn alive_handler() -> (StatusCode, &'static str) {
    tracing::debug!("Entering GET alive endpoint");
    (StatusCode::OK, ALIVE_MESSAGE)
}
