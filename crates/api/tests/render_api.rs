//! Integration tests for the render submission and status endpoints.
//!
//! No Shotstack credential is configured in the test app, so endpoints that
//! would reach the network answer with a configuration error instead. The
//! validation paths are all exercised before that check, so they are fully
//! testable without credentials.

mod common;

use axum::http::StatusCode;
use common::{assert_status_json, build_test_app, post_json};
use serde_json::{json, Value};

/// A minimal valid render document: one image track, mp4/hd output.
fn valid_payload() -> Value {
    json!({
        "timeline": {
            "background": "#000000",
            "tracks": [
                {
                    "clips": [
                        {
                            "asset": { "type": "image", "src": "https://cdn.acme.test/shot.png" },
                            "start": 0.0,
                            "length": 3.0,
                            "fit": "cover",
                            "effect": "zoomIn"
                        }
                    ]
                }
            ]
        },
        "output": { "format": "mp4", "resolution": "hd" }
    })
}

// ---------------------------------------------------------------------------
// POST /api/render
// ---------------------------------------------------------------------------

#[tokio::test]
async fn render_without_credentials_returns_configuration_error() {
    let app = build_test_app();
    let response = post_json(app, "/api/render", valid_payload()).await;

    // The payload is valid; the missing API key is the only failure.
    let body = assert_status_json(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(body["ok"], false);
    assert!(
        body["error"].as_str().unwrap().contains("Shotstack"),
        "Error should name the missing service, got: {}",
        body["error"]
    );
}

#[tokio::test]
async fn render_rejects_unknown_tts_voice_before_submission() {
    let mut payload = valid_payload();
    payload["timeline"]["tracks"].as_array_mut().unwrap().push(json!({
        "clips": [
            {
                "asset": { "type": "text-to-speech", "text": "Hello there", "voice": "NotAVoice" },
                "start": 0.0,
                "length": "auto"
            }
        ]
    }));

    let app = build_test_app();
    let response = post_json(app, "/api/render", payload).await;

    // Validation runs before the credential check, so an invalid voice is a
    // 400 even with no client configured.
    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["ok"], false);
    assert!(body["error"].as_str().unwrap().contains("voice"));
}

#[tokio::test]
async fn render_rejects_tts_text_over_limit() {
    let mut payload = valid_payload();
    payload["timeline"]["tracks"].as_array_mut().unwrap().push(json!({
        "clips": [
            {
                "asset": {
                    "type": "text-to-speech",
                    "text": "x".repeat(3001),
                    "voice": "Joanna"
                },
                "start": 0.0,
                "length": "auto"
            }
        ]
    }));

    let app = build_test_app();
    let response = post_json(app, "/api/render", payload).await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn render_rejects_audio_clip_with_invalid_src() {
    let mut payload = valid_payload();
    payload["timeline"]["tracks"].as_array_mut().unwrap().push(json!({
        "clips": [
            {
                "asset": { "type": "audio", "src": "not-a-url" },
                "start": 0.0,
                "length": 3.0
            }
        ]
    }));

    let app = build_test_app();
    let response = post_json(app, "/api/render", payload).await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["ok"], false);
}

// ---------------------------------------------------------------------------
// GET /api/render/status/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn render_status_rejects_blank_id() {
    let app = build_test_app();
    let response = common::get(app, "/api/render/status/%20").await;

    let body = assert_status_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["ok"], false);
    assert_eq!(body["error"], "Render ID is required");
}

#[tokio::test]
async fn render_status_without_credentials_returns_configuration_error() {
    let app = build_test_app();
    let response = common::get(app, "/api/render/status/some-render-id").await;

    let body = assert_status_json(response, StatusCode::INTERNAL_SERVER_ERROR).await;
    assert_eq!(body["ok"], false);
}
