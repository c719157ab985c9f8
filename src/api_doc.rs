use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "avoxi-demo-app API",
        version = "1.0.0",
        description = "Demo service with a greeting route and a liveness probe"
    ),
    paths(
        handlers::home::home_handler,
        handlers::alive::alive_handler
    ),
    components(
        schemas(ErrorResponse)
    ),
    tags(
        (name = "home", description = "Greeting"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;
