// Route path defaults - overridable through Config

pub const HOME: &str = "/";
pub const API_GROUP: &str = "/api";
pub const V1_GROUP: &str = "/v1";
pub const ALIVE: &str = "/alive";

/// Alive route built from the defaults above. Only used for the OpenAPI
/// document; the router itself uses `Config::alive_route`.
pub const DEFAULT_ALIVE_ROUTE: &str = "/api/v1/alive";

pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
