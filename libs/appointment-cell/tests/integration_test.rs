use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::{appointment_routes, AppointmentStore};
use doctor_cell::DoctorDirectory;
use shared_database::{KeyValueStore, MemoryStore};
use shared_utils::test_utils::MockRecords;

async fn create_test_app(kv: Arc<dyn KeyValueStore>) -> Router {
    let directory = DoctorDirectory::from_json(&MockRecords::roster().to_string()).unwrap();
    let store = AppointmentStore::load(kv, "appointments").await;
    appointment_routes(Arc::new(directory), Arc::new(store))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn booking(doctor_id: &str, date: &str, time_slot: &str) -> Value {
    json!({
        "doctorId": doctor_id,
        "date": date,
        "timeSlot": time_slot,
        "patientName": "Ravi Kumar",
        "reason": "Routine check"
    })
}

#[tokio::test]
async fn test_book_and_list() {
    let app = create_test_app(Arc::new(MemoryStore::new())).await;

    let (status, json) = send(&app, post_json("/", booking("t1", "2025-11-25", "09:00"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Your appointment with Dr. Asha Rao on November 25, 2025 at 09:00 has been confirmed."
    );
    let id = json["appointment"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["appointments"][0]["id"], id.as_str());
    assert_eq!(json["appointments"][0]["reason"], "Routine check");

    let (status, json) = send(&app, get(&format!("/{}", id))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["doctorId"], "t1");
}

#[tokio::test]
async fn test_booking_validation_errors() {
    let app = create_test_app(Arc::new(MemoryStore::new())).await;

    let (status, json) = send(&app, post_json("/", json!({ "doctorId": "t1" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        MockRecords::error_response("Please select a date; Please select a time slot; Patient name is required")
    );
}

#[tokio::test]
async fn test_booking_rejections() {
    let app = create_test_app(Arc::new(MemoryStore::new())).await;

    let (status, _) = send(&app, post_json("/", booking("zz", "2025-11-25", "09:00"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, post_json("/", booking("t3", "2025-11-27", "10:30"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, post_json("/", booking("t1", "2025-11-25", "13:00"))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(&app, post_json("/", booking("t2", "2025-11-25", "14:00"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (status, json) = send(&app, post_json("/", booking("t2", "2025-11-25", "14:00"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(json["error"].as_str().unwrap().contains("already booked"));
}

#[tokio::test]
async fn test_schedule_with_today_override() {
    let app = create_test_app(Arc::new(MemoryStore::new())).await;
    send(&app, post_json("/", booking("t1", "2025-11-26", "10:00"))).await;
    send(&app, post_json("/", booking("t1", "2025-11-25", "11:00"))).await;
    send(&app, post_json("/", booking("t1", "2025-11-25", "09:00"))).await;

    let (status, json) = send(&app, get("/schedule?today=2025-11-25")).await;

    assert_eq!(status, StatusCode::OK);
    let days = json["days"].as_array().unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[0]["label"], "Today");
    assert_eq!(days[0]["appointments"][0]["timeSlot"], "09:00");
    assert_eq!(days[0]["appointments"][1]["timeSlot"], "11:00");
    assert_eq!(days[1]["label"], "Tomorrow");

    let (status, _) = send(&app, get("/schedule?today=tomorrow")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_available_slots_and_cancel() {
    let app = create_test_app(Arc::new(MemoryStore::new())).await;

    let (_, json) = send(&app, post_json("/", booking("t1", "2025-11-25", "09:00"))).await;
    let id = json["appointment"]["id"].as_str().unwrap().to_string();

    let (status, json) = send(&app, get("/available-slots/t1?date=2025-11-25")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["slots"], json!(["11:00"]));
    assert_eq!(json["total"], 1);

    let delete = Request::builder()
        .method("DELETE")
        .uri(format!("/{}", id))
        .body(Body::empty())
        .unwrap();
    let (status, json) = send(&app, delete).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id.as_str());

    let (_, json) = send(&app, get("/available-slots/t1?date=2025-11-25")).await;
    assert_eq!(json["slots"], json!(["09:00", "11:00"]));

    let (status, _) = send(&app, get(&format!("/{}", id))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, get("/available-slots/zz?date=2025-11-25")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bookings_survive_restart() {
    let kv: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());

    let app = create_test_app(kv.clone()).await;
    send(&app, post_json("/", booking("t1", "2025-11-25", "09:00"))).await;

    let restarted = create_test_app(kv).await;
    let (_, json) = send(&restarted, get("/")).await;
    assert_eq!(json["total"], 1);

    let (status, _) = send(&restarted, post_json("/", booking("t1", "2025-11-25", "09:00"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
}
