//! Test fixtures: a throwaway display tree with settings and source image.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Duration;

use inky_preview::models::AppConfig;
use tempfile::TempDir;

/// Remote settings URL nothing listens on.
pub const UNREACHABLE_CONFIG_URL: &str = "http://127.0.0.1:9/get_current_config";

/// Remote settings timeout used by tests.
pub const TEST_TIMEOUT_MS: u64 = 300;

/// Temporary `INKYPI_SRC` tree laid out like the display application's.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::create_dir_all(dir.path().join("static").join("images")).unwrap();
        Self { dir }
    }

    pub fn settings_path(&self) -> PathBuf {
        self.dir.path().join("config").join("device_dev.json")
    }

    pub fn image_path(&self) -> PathBuf {
        self.dir
            .path()
            .join("static")
            .join("images")
            .join("current_image.png")
    }

    /// Configuration pointing at this tree and the given remote endpoint.
    pub fn config(&self, config_url: &str) -> AppConfig {
        let src = self.dir.path().display().to_string();
        let timeout = TEST_TIMEOUT_MS.to_string();
        AppConfig::from_lookup(|key| match key {
            "INKYPI_SRC" => Some(src.clone()),
            "INKYPI_CONFIG_URL" => Some(config_url.to_string()),
            "INKYPI_CONFIG_TIMEOUT_MS" => Some(timeout.clone()),
            _ => None,
        })
    }

    /// Configuration with no reachable remote endpoint.
    pub fn offline_config(&self) -> AppConfig {
        self.config(UNREACHABLE_CONFIG_URL)
    }

    pub fn write_settings(&self, settings: serde_json::Value) {
        std::fs::write(self.settings_path(), settings.to_string()).unwrap();
    }

    pub fn write_settings_raw(&self, contents: &str) {
        std::fs::write(self.settings_path(), contents).unwrap();
    }

    pub fn write_image(&self, width: u32, height: u32, rgb: [u8; 3]) {
        std::fs::write(self.image_path(), solid_png(width, height, rgb)).unwrap();
    }

    pub fn write_image_bytes(&self, bytes: &[u8]) {
        std::fs::write(self.image_path(), bytes).unwrap();
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a solid-color RGB PNG.
pub fn solid_png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    encode_png(&image::RgbImage::from_pixel(width, height, image::Rgb(rgb)))
}

/// Encode a horizontal-gradient RGB PNG with some color in it.
pub fn gradient_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        image::Rgb([r, g, 255 - r / 2])
    });
    encode_png(&img)
}

fn encode_png(img: &image::RgbImage) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .expect("Failed to encode fixture PNG");
    buf.into_inner()
}

/// Shorthand for an `image_settings` document.
pub fn settings_doc(inverted: bool, brightness: f64, contrast: f64) -> serde_json::Value {
    serde_json::json!({
        "orientation": "horizontal",
        "inverted_image": inverted,
        "image_settings": {
            "brightness": brightness,
            "contrast": contrast,
            "sharpness": 1.0,
            "saturation": 1.0
        }
    })
}

pub fn timeout() -> Duration {
    Duration::from_millis(TEST_TIMEOUT_MS)
}
