use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures of a single render request.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image not found on disk: {0}")]
    SourceNotFound(String),

    #[error("Source image unavailable after {attempts} attempts: {reason}")]
    SourceUnavailable { attempts: u32, reason: String },

    #[error("Unexpected render failure: {0}")]
    Unexpected(String),
}

impl From<eink_dither::DitherError> for RenderError {
    fn from(e: eink_dither::DitherError) -> Self {
        RenderError::Unexpected(e.to_string())
    }
}

/// One settings tier could not produce a record.
///
/// Never leaves the resolver; the next tier is tried instead.
#[derive(Debug, Error)]
pub enum SettingsSourceUnavailable {
    #[error("{0} does not exist")]
    Missing(String),

    #[error("read failed: {0}")]
    Read(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed settings: {0}")]
    Malformed(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Render(RenderError::SourceNotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Render(RenderError::SourceUnavailable { .. }) => {
                StatusCode::SERVICE_UNAVAILABLE
            }
            ApiError::Render(RenderError::Unexpected(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
