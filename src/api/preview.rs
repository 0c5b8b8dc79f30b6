use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::services::RenderService;

/// Error response for render endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Error message
    pub error: String,
}

/// Render the current image as the panel would show it
///
/// Resolves the active settings, reads the current source image, applies
/// the enhancement chain and dithers to the six-color palette. Rendered
/// afresh on every request.
#[utoipa::path(
    get,
    path = "/image",
    responses(
        (status = 200, description = "Palette-indexed PNG preview", content_type = "image/png"),
        (status = 404, description = "Source image not found", body = ErrorResponse),
        (status = 503, description = "Source image could not be decoded", body = ErrorResponse),
        (status = 500, description = "Render failure", body = ErrorResponse),
    ),
    tag = "Preview"
)]
pub async fn handle_image(
    State(renderer): State<Arc<RenderService>>,
) -> Result<Response, ApiError> {
    let output = renderer.render().await.inspect_err(|e| {
        tracing::warn!(error = %e, "Preview render failed");
    })?;

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, output.png.len().to_string()),
        ],
        Bytes::from(output.png),
    )
        .into_response())
}
