//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Event Admin API",
        version = "0.1.0",
        description = "Manage events, their completion status and the packages offered per category",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/event", api = domain_events::ApiDoc),
        (path = "/api/package", api = domain_packages::ApiDoc)
    ),
    tags(
        (name = "events", description = "Event records and their completion lifecycle"),
        (name = "Packages", description = "Service packages offered per event category")
    )
)]
pub struct ApiDoc;
