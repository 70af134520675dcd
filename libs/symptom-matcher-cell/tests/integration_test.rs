use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::json;
use tower::ServiceExt;

use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;
use shared_utils::test_utils::TestConfig;
use symptom_matcher_cell::symptom_routes;

fn create_test_app(config: AppConfig) -> Router {
    let directory = DoctorDirectory::builtin().expect("builtin roster should parse");
    symptom_routes(Arc::new(config), Arc::new(directory))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_match_endpoint() {
    let app = create_test_app(TestConfig::default().to_app_config());

    let (status, json) = send(app, post_json("/match", json!({ "symptoms": "Migraine and numbness" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["matchLevel"], "Medium");
    assert_eq!(json["recommendedSpecialty"], "Neurologist");
    assert_eq!(json["matchedKeywords"], json!(["migraine", "numbness"]));
}

#[tokio::test]
async fn test_match_endpoint_blank_input() {
    let app = create_test_app(TestConfig::default().to_app_config());

    let (status, json) = send(app, post_json("/match", json!({ "symptoms": "   " }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["reason"], "Please describe your symptoms for a better match.");
    assert_eq!(json["recommendedSpecialty"], "General Physician");
}

#[tokio::test]
async fn test_match_endpoint_rejects_oversized_input() {
    let config = TestConfig {
        max_symptom_chars: 10,
        ..TestConfig::default()
    };

    let (status, json) = send(
        create_test_app(config.to_app_config()),
        post_json("/match", json!({ "symptoms": "headache!!!" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("10 characters"));

    let (status, _) = send(
        create_test_app(config.to_app_config()),
        post_json("/match", json!({ "symptoms": "headache!!" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_recommend_endpoint_lists_specialists() {
    let app = create_test_app(TestConfig::default().to_app_config());

    let (status, json) = send(
        app,
        post_json("/recommend", json!({ "symptoms": "chest pain and palpitation" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["match"]["recommendedSpecialty"], "Cardiologist");
    assert_eq!(json["match"]["matchLevel"], "Medium");
    let doctors = json["doctors"].as_array().unwrap();
    assert_eq!(doctors.len(), 2);
    // accepting new patients first
    assert_eq!(doctors[0]["id"], "d12");
    assert_eq!(doctors[1]["id"], "d6");
}

#[tokio::test]
async fn test_keywords_endpoint() {
    let app = create_test_app(TestConfig::default().to_app_config());
    let request = Request::builder()
        .method("GET")
        .uri("/keywords")
        .body(Body::empty())
        .unwrap();

    let (status, json) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    let groups = json["specialties"].as_array().unwrap();
    assert_eq!(groups.len(), 6);
    assert_eq!(groups[0]["specialty"], "Dermatologist");
    assert_eq!(groups[3]["specialty"], "General Physician");
    assert_eq!(groups[0]["keywords"][0], "skin");
}

#[tokio::test]
async fn test_match_endpoint_requires_json_body() {
    let app = create_test_app(TestConfig::default().to_app_config());
    let request = Request::builder()
        .method("POST")
        .uri("/match")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"text\": \"fever\"}"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
