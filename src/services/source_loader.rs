//! Reading and decoding the source image.
//!
//! The display application rewrites the source file in place, so a read can
//! observe a partially written image. Decoding is retried a few times with a
//! short pause before the source is declared unavailable.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use eink_dither::Raster;

use crate::error::RenderError;

/// Where source bytes come from. Read afresh on every attempt.
pub trait ImageSource: Send + Sync {
    fn read(&self) -> io::Result<Vec<u8>>;

    /// Whether the source is present at all.
    fn exists(&self) -> bool {
        true
    }

    /// Human-readable location for logs and errors.
    fn describe(&self) -> String;
}

/// Source image at a fixed filesystem path.
pub struct FileImageSource {
    path: PathBuf,
}

impl FileImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for FileImageSource {
    fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }

    fn exists(&self) -> bool {
        self.path.exists()
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Attempt budget for decoding a source that may be mid-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(50),
        }
    }
}

/// Decodes the source into an RGB raster under a [`RetryPolicy`].
pub struct SourceLoader {
    source: Box<dyn ImageSource>,
    retry: RetryPolicy,
}

impl SourceLoader {
    pub fn new(source: Box<dyn ImageSource>, retry: RetryPolicy) -> Self {
        Self { source, retry }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileImageSource::new(path)), RetryPolicy::default())
    }

    /// Fail with [`RenderError::SourceNotFound`] if the source is absent.
    pub fn ensure_present(&self) -> Result<(), RenderError> {
        if self.source.exists() {
            Ok(())
        } else {
            Err(RenderError::SourceNotFound(self.source.describe()))
        }
    }

    /// Read and decode the source, retrying transient failures.
    ///
    /// A source missing before the first read fails at once with
    /// [`RenderError::SourceNotFound`]. Once reading has started, any read
    /// failure (including the file vanishing while it is being replaced)
    /// counts against the attempt budget. Sleeps only between attempts.
    pub fn load(&self) -> Result<Raster, RenderError> {
        self.ensure_present()?;

        let attempts = self.retry.max_attempts.max(1);
        let mut last_error = String::new();

        for attempt in 1..=attempts {
            if attempt > 1 {
                std::thread::sleep(self.retry.backoff);
            }

            let bytes = match self.source.read() {
                Ok(bytes) => bytes,
                Err(e) if attempt == 1 && e.kind() == io::ErrorKind::NotFound => {
                    return Err(RenderError::SourceNotFound(self.source.describe()));
                }
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Source read failed");
                    last_error = e.to_string();
                    continue;
                }
            };

            match decode_rgb(&bytes) {
                Ok(raster) => {
                    tracing::debug!(
                        attempt,
                        width = raster.width(),
                        height = raster.height(),
                        "Source decoded"
                    );
                    return Ok(raster);
                }
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Source decode failed");
                    last_error = e;
                }
            }
        }

        tracing::warn!(
            source = %self.source.describe(),
            attempts,
            error = %last_error,
            "Source image unavailable"
        );
        Err(RenderError::SourceUnavailable {
            attempts,
            reason: last_error,
        })
    }
}

/// Decode any supported format and normalize to 8-bit RGB.
pub fn decode_rgb(bytes: &[u8]) -> Result<Raster, String> {
    let rgb = image::load_from_memory(bytes)
        .map_err(|e| e.to_string())?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Raster::from_rgb_bytes(width as usize, height as usize, rgb.as_raw())
        .map_err(|e| e.to_string())
}
