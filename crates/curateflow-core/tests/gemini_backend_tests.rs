//! HTTP-level tests for the Gemini backend using a mock server.

use curateflow_core::{
    CurateClient, CurateOptions, DepthLevel, GENERATION_FAILED_MESSAGE, GeminiConfig,
    GenerationFailed, VibeType,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const ENDPOINT: &str = "/v1beta/models/gemini-test:generateContent";

fn config(server: &MockServer) -> GeminiConfig {
    GeminiConfig::new("test-key")
        .with_model(MODEL)
        .with_base_url(server.uri())
}

fn options(course: bool) -> CurateOptions {
    CurateOptions::new(45, DepthLevel::Beginner, VibeType::Workshop, course).unwrap()
}

fn candidate(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP",
            "index": 0
        }]
    })
}

fn playlist_text() -> String {
    json!({
        "playlistName": "React in an Afternoon",
        "totalDuration": "60 mins",
        "description": "Components, state, effects.",
        "items": [
            {"title": "React in 100 Seconds", "channelName": "Fireship", "duration": "2:10",
             "description": "Overview", "reasoning": "Fast orientation"},
            {"title": "useState Explained", "channelName": "Web Dev Simplified", "duration": "15:20",
             "description": "State basics", "reasoning": "Core hook"}
        ]
    })
    .to_string()
}

#[tokio::test]
async fn test_generate_content_request_shape() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "required": ["playlistName", "totalDuration", "description", "items"]
                }
            },
            "contents": [{ "role": "user" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&playlist_text())))
        .expect(1)
        .mount(&server)
        .await;

    let client = CurateClient::new(config(&server)).unwrap();
    let playlist = client
        .generate_curated_playlist("Intro to React", &options(true))
        .await
        .unwrap();

    assert_eq!(playlist.playlist_name, "React in an Afternoon");
    assert_eq!(playlist.items[1].channel_name, "Web Dev Simplified");

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = requests[0].body_json().unwrap();
    let user_text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(user_text.contains("User Request: \"Intro to React\""));
    assert!(user_text.contains("Enabled (Structure as a syllabus)"));
    let system_text = body["systemInstruction"]["parts"][0]["text"]
        .as_str()
        .unwrap();
    assert!(system_text.contains("CurateFlow"));
}

#[tokio::test]
async fn test_api_error_status_is_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = CurateClient::new(config(&server)).unwrap();
    let err = client
        .generate_curated_playlist("History of Rome", &options(false))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
}

#[tokio::test]
async fn test_no_candidates_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "promptFeedback": { "blockReason": "SAFETY" }
        })))
        .mount(&server)
        .await;

    let client = CurateClient::new(config(&server)).unwrap();
    let result = client
        .generate_curated_playlist("Jazz for Reading", &options(false))
        .await;

    assert_eq!(result, Err(GenerationFailed));
}

#[tokio::test]
async fn test_non_json_text_is_a_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(candidate("Here is your playlist: ...")),
        )
        .mount(&server)
        .await;

    let client = CurateClient::new(config(&server)).unwrap();
    let result = client
        .generate_curated_playlist("30m HIIT Workout", &options(false))
        .await;

    assert_eq!(result, Err(GenerationFailed));
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&playlist_text())))
        .expect(0)
        .mount(&server)
        .await;

    let config = GeminiConfig::default().with_base_url(server.uri());
    let client = CurateClient::new(config).unwrap();
    let result = client
        .generate_curated_playlist("Intro to React", &options(false))
        .await;

    assert_eq!(result, Err(GenerationFailed));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_is_normalized() {
    // Nothing listens on port 1
    let config = GeminiConfig::new("test-key").with_base_url("http://127.0.0.1:1");
    let client = CurateClient::new(config).unwrap();

    let err = client
        .generate_curated_playlist("Intro to React", &options(false))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), GENERATION_FAILED_MESSAGE);
}
