use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_URL: &str = "http://127.0.0.1:5000/get_current_config";
pub const DEFAULT_CONFIG_TIMEOUT: Duration = Duration::from_millis(1000);
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5010";

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Root of the display application's tree (`INKYPI_SRC`)
    pub base_dir: PathBuf,
    /// Local settings document (`INKYPI_SETTINGS_FILE`)
    pub settings_file: PathBuf,
    /// Most recent source image (`INKYPI_IMAGE_PATH`)
    pub image_path: PathBuf,
    /// Remote settings endpoint (`INKYPI_CONFIG_URL`)
    pub config_url: String,
    /// Timeout for the remote settings request (`INKYPI_CONFIG_TIMEOUT_MS`)
    pub config_timeout: Duration,
    /// HTTP listen address (`BIND_ADDR`)
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// Without `INKYPI_SRC`, the base directory is discovered from the
    /// working directory (see [`discover_base_dir`]).
    pub fn from_env() -> Self {
        let start = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let home = std::env::var_os("HOME").map(PathBuf::from);
        let fallback = discover_base_dir(&start, home.as_deref());
        Self::from_lookup_with_base(|key| std::env::var(key).ok(), fallback)
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. The base directory defaults to `.`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_lookup_with_base(lookup, PathBuf::from("."))
    }

    /// Like [`AppConfig::from_lookup`] with an explicit fallback base directory.
    pub fn from_lookup_with_base(
        lookup: impl Fn(&str) -> Option<String>,
        default_base: PathBuf,
    ) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_dir = var("INKYPI_SRC")
            .map(PathBuf::from)
            .unwrap_or(default_base);
        let settings_file = var("INKYPI_SETTINGS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| base_dir.join("config").join("device_dev.json"));
        let image_path = var("INKYPI_IMAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| {
                base_dir
                    .join("static")
                    .join("images")
                    .join("current_image.png")
            });
        let config_timeout = var("INKYPI_CONFIG_TIMEOUT_MS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_CONFIG_TIMEOUT);

        Self {
            base_dir,
            settings_file,
            image_path,
            config_url: var("INKYPI_CONFIG_URL").unwrap_or_else(|| DEFAULT_CONFIG_URL.to_string()),
            config_timeout,
            bind_addr: var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}

/// Locate the display application's tree.
///
/// Walks `start` and its ancestors for a directory holding both
/// `config/device_dev.json` and `static/images`. Falls back to
/// `<home>/InkyPi/src`, or `.` without a home directory.
pub fn discover_base_dir(start: &Path, home: Option<&Path>) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join("config").join("device_dev.json").is_file()
            && dir.join("static").join("images").is_dir()
        {
            return dir.to_path_buf();
        }
    }
    match home {
        Some(home) => home.join("InkyPi").join("src"),
        None => PathBuf::from("."),
    }
}
