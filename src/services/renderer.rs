use std::sync::Arc;

use crate::error::RenderError;
use crate::models::{AppConfig, SettingsRecord};
use crate::rendering::{RenderPipeline, RenderedOutput};
use crate::services::{SettingsResolver, SourceLoader};

/// High-level render service: resolve settings, load the source, render.
///
/// Holds no per-request state; every call resolves settings and reads the
/// source afresh.
pub struct RenderService {
    resolver: SettingsResolver,
    loader: SourceLoader,
    pipeline: RenderPipeline,
}

impl RenderService {
    pub fn new(resolver: SettingsResolver, loader: SourceLoader, pipeline: RenderPipeline) -> Self {
        Self {
            resolver,
            loader,
            pipeline,
        }
    }

    /// Wire the standard chain and the configured source path.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            SettingsResolver::from_config(config),
            SourceLoader::from_path(&config.image_path),
            RenderPipeline::default(),
        )
    }

    /// Resolve settings and render the current source. Blocking.
    ///
    /// A missing source is reported before any settings tier is consulted.
    pub fn render_current(&self) -> Result<(RenderedOutput, SettingsRecord), RenderError> {
        self.loader.ensure_present()?;
        let settings = self.resolver.resolve();
        let source = self.loader.load()?;
        let output = self.pipeline.render(&source, &settings)?;
        tracing::info!(
            width = output.width,
            height = output.height,
            size_bytes = output.png.len(),
            "Preview rendered"
        );
        Ok((output, settings))
    }

    /// Render in a blocking context
    ///
    /// Uses spawn_blocking to keep file I/O, the blocking settings request,
    /// retry sleeps and dithering off the async runtime.
    pub async fn render(self: Arc<Self>) -> Result<RenderedOutput, RenderError> {
        tokio::task::spawn_blocking(move || self.render_current().map(|(output, _)| output))
            .await
            .map_err(|e| RenderError::Unexpected(format!("Render task failed: {e}")))?
    }

    /// Resolve settings in a blocking context.
    pub async fn settings(self: Arc<Self>) -> Result<SettingsRecord, RenderError> {
        tokio::task::spawn_blocking(move || self.resolver.resolve())
            .await
            .map_err(|e| RenderError::Unexpected(format!("Settings task failed: {e}")))
    }
}
