//! Three-tier settings resolution.
//!
//! Tiers are tried in order and the first one that yields a record wins:
//! the local settings file, then the remote configuration endpoint, then
//! built-in defaults. Resolution never fails.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::SettingsSourceUnavailable;
use crate::models::{AppConfig, SettingsRecord};

/// One tier of the settings chain.
pub trait SettingsProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Produce a normalized record, or report that this tier is unavailable.
    fn fetch(&self) -> Result<SettingsRecord, SettingsSourceUnavailable>;
}

/// Settings document on the local filesystem.
pub struct LocalFileProvider {
    path: PathBuf,
}

impl LocalFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SettingsProvider for LocalFileProvider {
    fn name(&self) -> &'static str {
        "local_file"
    }

    fn fetch(&self) -> Result<SettingsRecord, SettingsSourceUnavailable> {
        if !self.path.exists() {
            return Err(SettingsSourceUnavailable::Missing(
                self.path.display().to_string(),
            ));
        }
        let bytes = std::fs::read(&self.path)
            .map_err(|e| SettingsSourceUnavailable::Read(e.to_string()))?;
        SettingsRecord::from_slice(&bytes)
    }
}

/// Read-only GET against the display application's config endpoint.
pub struct RemoteConfigProvider {
    url: String,
    timeout: Duration,
}

impl RemoteConfigProvider {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }
}

impl SettingsProvider for RemoteConfigProvider {
    fn name(&self) -> &'static str {
        "remote_config"
    }

    fn fetch(&self) -> Result<SettingsRecord, SettingsSourceUnavailable> {
        // Built per call: a blocking client must not be dropped on an async worker.
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| SettingsSourceUnavailable::Request(e.to_string()))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| SettingsSourceUnavailable::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SettingsSourceUnavailable::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .map_err(|e| SettingsSourceUnavailable::Request(e.to_string()))?;
        SettingsRecord::from_slice(&body)
    }
}

/// Walks the provider chain and falls back to defaults.
pub struct SettingsResolver {
    providers: Vec<Box<dyn SettingsProvider>>,
}

impl SettingsResolver {
    pub fn new(providers: Vec<Box<dyn SettingsProvider>>) -> Self {
        Self { providers }
    }

    /// The standard chain: local file, then remote endpoint.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(vec![
            Box::new(LocalFileProvider::new(&config.settings_file)),
            Box::new(RemoteConfigProvider::new(
                config.config_url.clone(),
                config.config_timeout,
            )),
        ])
    }

    /// Resolve the active settings. Blocking; never fails.
    pub fn resolve(&self) -> SettingsRecord {
        for provider in &self.providers {
            match provider.fetch() {
                Ok(record) => {
                    tracing::debug!(source = provider.name(), "Settings resolved");
                    return record;
                }
                Err(e) => {
                    tracing::debug!(source = provider.name(), error = %e, "Settings source unavailable");
                }
            }
        }
        tracing::debug!(source = "defaults", "Settings resolved");
        SettingsRecord::default()
    }
}
