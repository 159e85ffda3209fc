use crate::error::{ErrorResponse, HttpAppError};
use crate::services;
use crate::state::AppState;
use crate::utils::upload::extract_upload;
use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;
use veridoc_core::models::ValidationResult;
use veridoc_core::validation::validate_family_id;
use veridoc_core::AppError;

#[utoipa::path(
    post,
    path = "/api/validate-docs",
    tag = "validation",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Validation result, from the upstream service or the deterministic fallback", body = ValidationResult),
        (status = 400, description = "Missing family id or no valid files", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn validate_docs(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ValidationResult>, HttpAppError> {
    let upload = extract_upload(multipart).await.map_err(HttpAppError::from)?;

    let family_id = upload.family_id.unwrap_or_default();
    validate_family_id(&family_id).map_err(HttpAppError::from)?;

    if upload.files.is_empty() {
        return Err(HttpAppError(AppError::BadRequest(
            "No files uploaded".to_string(),
        )));
    }

    tracing::info!(
        family_id = %family_id,
        file_count = upload.files.len(),
        "Received validation request"
    );

    let outcome =
        services::validate_with_fallback(state.upstream.as_ref(), &family_id, &upload.files).await;

    tracing::info!(
        source = outcome.source(),
        file_count = upload.files.len(),
        "Returning validation result"
    );

    Ok(Json(outcome.into_result()))
}
