//! OpenAPI documentation configuration

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        version = "0.1.0",
        description = "Create, read, update and delete user records",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation for Users API
///
/// The users routes are mounted at the root, so their paths are merged
/// rather than nested.
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_users::handlers::ApiDoc::openapi());
        doc
    }
}
