//! Integration tests for POST /api/analyze

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, shades, GARBAGE};
use common::{assert_error_envelope, assert_ok, assert_valid_analysis, Part, TestApp};
use copperati::models::AppConfig;
use pretty_assertions::assert_eq;
use shade_match::ShadePalette;

#[tokio::test]
async fn test_solid_image_matches_exact_shade() {
    let app = TestApp::new();
    let image = fixtures::solid_png(100, 100, [0xC9, 0x69, 0x4A]);

    let response = app
        .post_multipart("/api/analyze", &[Part::File("image", "hair.png", &image)])
        .await;

    let json = assert_valid_analysis(&response);
    assert_eq!(json["sampledColor"], shades::MEDIUM_COPPER);
    assert_eq!(json["matchedShade"]["id"], "N3");
    assert_eq!(json["matchedShade"]["name"], "Medium Copper");
    assert_eq!(json["matchedShade"]["group"], "natural");
    assert_eq!(json["distance"], 0.0);
    assert_eq!(json["metric"], "euclidean");
    assert_eq!(json["source"], "average");
    assert!(json["rejectedOverride"].is_null());
}

#[tokio::test]
async fn test_override_skips_image_decoding() {
    let app = TestApp::new();

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "broken.jpg", GARBAGE),
                Part::Text("hexOverride", "#f8bf9a"),
            ],
        )
        .await;

    let json = assert_valid_analysis(&response);
    assert_eq!(json["sampledColor"], shades::VERY_LIGHT_COPPER_BLONDE);
    assert_eq!(json["matchedShade"]["name"], "Very Light Copper Blonde");
    assert_eq!(json["source"], "override");
}

#[tokio::test]
async fn test_invalid_override_falls_back_to_average() {
    let app = TestApp::new();
    let image = fixtures::solid_png(100, 100, [0xA9, 0x40, 0x2C]);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::Text("hexOverride", "#zzzzzz"),
                Part::File("image", "hair.png", &image),
            ],
        )
        .await;

    let json = assert_valid_analysis(&response);
    assert_eq!(json["sampledColor"], shades::DARK_COPPER_RED);
    assert_eq!(json["matchedShade"]["name"], "Dark Copper Red");
    assert_eq!(json["source"], "average");
    assert_eq!(json["rejectedOverride"], "#zzzzzz");
}

#[tokio::test]
async fn test_empty_override_is_ignored() {
    let app = TestApp::new();
    let image = fixtures::solid_png(100, 100, [0xA9, 0x40, 0x2C]);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "hair.png", &image),
                Part::Text("hexOverride", ""),
            ],
        )
        .await;

    let json = assert_valid_analysis(&response);
    assert_eq!(json["source"], "average");
    assert!(json["rejectedOverride"].is_null());
}

#[tokio::test]
async fn test_pick_point_samples_single_pixel() {
    let app = TestApp::new();
    let image = fixtures::png_with_pixel(40, 30, 12, 7, [0xC2, 0x18, 0x07]);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "hair.png", &image),
                Part::Text("pickX", "12"),
                Part::Text("pickY", "7"),
            ],
        )
        .await;

    let json = assert_valid_analysis(&response);
    assert_eq!(json["sampledColor"], shades::FIRE_ENGINE_RED);
    assert_eq!(json["matchedShade"]["id"], "F1");
    assert_eq!(json["matchedShade"]["group"], "fashion");
    assert_eq!(json["source"], "point");
}

#[tokio::test]
async fn test_pick_point_outside_image() {
    let app = TestApp::new();
    let image = fixtures::solid_png(10, 10, [0, 0, 0]);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "hair.png", &image),
                Part::Text("pickX", "10"),
                Part::Text("pickY", "0"),
            ],
        )
        .await;

    assert_error_envelope(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_half_pick_point_is_bad_request() {
    let app = TestApp::new();
    let image = fixtures::solid_png(10, 10, [0, 0, 0]);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "hair.png", &image),
                Part::Text("pickX", "3"),
            ],
        )
        .await;

    assert_error_envelope(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_jpeg_upload_is_accepted() {
    let app = TestApp::new();
    let image = fixtures::jpeg(image::RgbImage::from_pixel(
        64,
        64,
        image::Rgb([0xC9, 0x69, 0x4A]),
    ));

    let response = app
        .post_multipart("/api/analyze", &[Part::File("image", "hair.jpg", &image)])
        .await;

    // Lossy encoding shifts the color slightly; the nearest shade is stable
    let json = assert_valid_analysis(&response);
    assert_eq!(json["matchedShade"]["id"], "N3");
    assert!(json["distance"].as_f64().unwrap() < 10.0);
}

#[tokio::test]
async fn test_black_image_is_not_an_error() {
    let app = TestApp::new();
    let image = fixtures::solid_png(50, 80, [0, 0, 0]);

    let response = app
        .post_multipart("/api/analyze", &[Part::File("image", "black.png", &image)])
        .await;

    let json = assert_valid_analysis(&response);
    assert_eq!(json["sampledColor"], "#000000");
}

#[tokio::test]
async fn test_garbage_bytes_are_unprocessable() {
    let app = TestApp::new();

    let response = app
        .post_multipart("/api/analyze", &[Part::File("image", "hair.png", GARBAGE)])
        .await;

    assert_error_envelope(&response, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_missing_image_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_multipart("/api/analyze", &[Part::Text("hexOverride", "#C9694A")])
        .await;

    assert_error_envelope(&response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["error"], "Missing required field: image");
}

#[tokio::test]
async fn test_non_multipart_body_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_raw("/api/analyze", "application/json", b"{}".to_vec())
        .await;

    assert_error_envelope(&response, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_over_limit_is_rejected() {
    let mut config = AppConfig::default();
    config.limits.max_upload_bytes = 1024;
    let app = TestApp::with_config(config);

    // Above the image limit but inside the multipart allowance
    let image = vec![0u8; 4096];
    let response = app
        .post_multipart("/api/analyze", &[Part::File("image", "big.png", &image)])
        .await;
    assert_error_envelope(&response, StatusCode::PAYLOAD_TOO_LARGE);

    // Past the body limit entirely
    let image = vec![0u8; 256 * 1024];
    let response = app
        .post_multipart("/api/analyze", &[Part::File("image", "huge.png", &image)])
        .await;
    assert_error_envelope(&response, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_empty_palette_is_server_error() {
    let config = AppConfig {
        shades: ShadePalette::default(),
        ..AppConfig::default()
    };
    let app = TestApp::with_config(config);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "hair.png", GARBAGE),
                Part::Text("hexOverride", "#C9694A"),
            ],
        )
        .await;

    assert_error_envelope(&response, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_ciede2000_metric_from_config() {
    let config = AppConfig::from_yaml("matching:\n  metric: ciede2000\n").unwrap();
    let app = TestApp::with_config(config);

    let response = app
        .post_multipart(
            "/api/analyze",
            &[
                Part::File("image", "hair.png", GARBAGE),
                Part::Text("hexOverride", "#C9694A"),
            ],
        )
        .await;

    assert_ok(&response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["metric"], "ciede2000");
    assert_eq!(json["matchedShade"]["id"], "N3");
}
