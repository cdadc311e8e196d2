//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
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

/// Assert an error response carries the JSON envelope with a matching status
pub fn assert_error_envelope(response: &TestResponse, expected: StatusCode) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected.as_u16() as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected.as_u16(),
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(
        json["error"].is_string(),
        "Expected error message, got {json}"
    );
}

/// Assert a successful analysis and return its JSON
pub fn assert_valid_analysis(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    let sampled = json["sampledColor"].as_str().expect("sampledColor");
    assert_eq!(sampled.len(), 7, "sampledColor should be #RRGGBB");
    assert!(sampled.starts_with('#'));
    assert!(json["matchedShade"]["id"].is_string());
    assert!(json["matchedShade"]["name"].is_string());
    assert!(json["distance"].as_f64().expect("distance") >= 0.0);
    assert!(json["metric"].is_string());
    assert!(json["source"].is_string());

    json
}
