//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use veridoc_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Veridoc API",
        version = "0.1.0",
        description = "Document validation proxy: accepts identity-document uploads, forwards them to the validation service, and falls back to a deterministic built-in result when the service is unusable."
    ),
    paths(handlers::validate_docs::validate_docs),
    components(schemas(
        models::ValidationResult,
        models::DocumentValidation,
        models::FraudRisk,
        models::UploadRequest,
        error::ErrorResponse,
    )),
    tags(
        (name = "validation", description = "Document validation")
    )
)]
pub struct ApiDoc;

/// Returns the OpenAPI spec document.
pub fn openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
