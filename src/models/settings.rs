use eink_dither::EnhanceOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::SettingsSourceUnavailable;

pub const DEFAULT_ORIENTATION: &str = "horizontal";
const DEFAULT_FACTOR: f32 = 1.0;

/// Display settings that drive one render.
///
/// Every field is always populated. Missing or malformed inputs fall back to
/// the defaults field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SettingsRecord {
    /// Advisory display orientation (not applied to the image)
    pub orientation: String,
    /// Invert all color channels before enhancement
    pub inverted_image: bool,
    /// Brightness factor (1.0 = unchanged)
    pub brightness: f32,
    /// Contrast factor (1.0 = unchanged)
    pub contrast: f32,
    /// Sharpness factor (1.0 = unchanged)
    pub sharpness: f32,
    /// Color saturation factor (1.0 = unchanged)
    pub saturation: f32,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self {
            orientation: DEFAULT_ORIENTATION.to_string(),
            inverted_image: false,
            brightness: DEFAULT_FACTOR,
            contrast: DEFAULT_FACTOR,
            sharpness: DEFAULT_FACTOR,
            saturation: DEFAULT_FACTOR,
        }
    }
}

impl SettingsRecord {
    /// Normalize a raw settings document.
    ///
    /// `null` yields the defaults. Any other non-object document is
    /// malformed, which makes the tier that produced it unavailable.
    pub fn from_document(doc: &Value) -> Result<Self, SettingsSourceUnavailable> {
        let data = match doc {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(SettingsSourceUnavailable::Malformed(format!(
                    "expected an object, got {}",
                    type_name(other)
                )))
            }
        };

        let image_settings = data.get("image_settings").and_then(Value::as_object);
        let factor = |key: &str| {
            image_settings
                .and_then(|opts| opts.get(key))
                .and_then(coerce_factor)
                .unwrap_or(DEFAULT_FACTOR)
        };

        Ok(Self {
            orientation: data
                .get("orientation")
                .and_then(Value::as_str)
                .unwrap_or(DEFAULT_ORIENTATION)
                .to_string(),
            inverted_image: data.get("inverted_image").is_some_and(truthy)
                || data.get("invertImage").is_some_and(truthy),
            brightness: factor("brightness"),
            contrast: factor("contrast"),
            sharpness: factor("sharpness"),
            saturation: factor("saturation"),
        })
    }

    /// Parse and normalize a settings document from raw bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SettingsSourceUnavailable> {
        let doc: Value = serde_json::from_slice(bytes)
            .map_err(|e| SettingsSourceUnavailable::Malformed(e.to_string()))?;
        Self::from_document(&doc)
    }

    /// The enhancement stages these settings ask for.
    pub fn enhance_options(&self) -> EnhanceOptions {
        EnhanceOptions::new()
            .invert(self.inverted_image)
            .brightness(self.brightness)
            .contrast(self.contrast)
            .saturation(self.saturation)
            .sharpness(self.sharpness)
    }
}

/// Numbers and numeric strings become factors; anything else is absent.
fn coerce_factor(value: &Value) -> Option<f32> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    let factor = parsed as f32;
    factor.is_finite().then_some(factor)
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
