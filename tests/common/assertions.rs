//! Assertion helpers for tests.

use std::io::Cursor;

use axum::http::StatusCode;
use eink_dither::{Rgb, SPECTRA6};
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an uncacheable PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );
    assert_eq!(
        response.header("content-type"),
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
    let expected_length = response.body.len().to_string();
    assert_eq!(
        response.header("content-length"),
        Some(expected_length.as_str())
    );
    assert_eq!(response.header("cache-control"), Some("no-store"));
}

/// Assert the body is a palette-indexed PNG whose PLTE is the panel palette
pub fn assert_indexed_png(response: &TestResponse) {
    let decoder = png::Decoder::new(Cursor::new(response.body.clone()));
    let reader = decoder.read_info().expect("Invalid PNG");
    let info = reader.info();
    assert_eq!(info.color_type, png::ColorType::Indexed);

    let plte = info.palette.as_ref().expect("Missing PLTE chunk");
    let expected: Vec<u8> = SPECTRA6.iter().flat_map(|c| c.to_bytes()).collect();
    assert_eq!(plte.to_vec(), expected);
}

/// Assert every decoded pixel is one of the six panel colors
pub fn assert_palette_only(response: &TestResponse) {
    for pixel in response.decode_rgb().pixels() {
        let color = Rgb::from_bytes(pixel.0);
        assert!(
            SPECTRA6.contains(&color),
            "Pixel {:?} is not a panel color",
            color
        );
    }
}

/// Assert a JSON error body with the given status field
pub fn assert_json_error(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert!(json["error"].is_string(), "Expected error message");
}

/// Count pixels of a given color in a decoded response
pub fn count_color(response: &TestResponse, color: Rgb) -> usize {
    response
        .decode_rgb()
        .pixels()
        .filter(|p| Rgb::from_bytes(p.0) == color)
        .count()
}
