use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::SettingsRecord;
use crate::services::RenderService;

/// Get the active display settings
///
/// Local settings file first, then the display application's own config
/// endpoint, then defaults.
#[utoipa::path(
    get,
    path = "/get_current_config",
    responses(
        (status = 200, description = "Resolved settings", body = SettingsRecord),
    ),
    tag = "Settings"
)]
pub async fn handle_current_config(
    State(renderer): State<Arc<RenderService>>,
) -> Result<Json<SettingsRecord>, ApiError> {
    Ok(Json(renderer.settings().await?))
}
