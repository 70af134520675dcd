use std::sync::Arc;

use axum::{routing::get, Router};

use appointment_cell::{appointment_routes, AppointmentStore};
use doctor_cell::{doctor_routes, DoctorDirectory};
use shared_config::AppConfig;
use symptom_matcher_cell::symptom_routes;

pub fn create_router(
    config: Arc<AppConfig>,
    directory: Arc<DoctorDirectory>,
    store: Arc<AppointmentStore>,
) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic browse API is running!" }))
        .nest("/doctors", doctor_routes(directory.clone()))
        .nest("/symptoms", symptom_routes(config, directory.clone()))
        .nest("/appointments", appointment_routes(directory, store))
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use shared_database::MemoryStore;
    use tower::ServiceExt;

    async fn app() -> Router {
        let directory = Arc::new(DoctorDirectory::builtin().unwrap());
        let store = AppointmentStore::load(Arc::new(MemoryStore::new()), "appointments").await;
        create_router(Arc::new(AppConfig::default()), directory, Arc::new(store))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_root_health() {
        let response = app()
            .await
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_recommend_then_book() {
        let app = app().await;

        let request = Request::builder()
            .method("POST")
            .uri("/symptoms/recommend")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"symptoms":"itchy rash on my skin"}"#))
            .unwrap();
        let json = body_json(app.clone().oneshot(request).await.unwrap()).await;
        assert_eq!(json["match"]["recommendedSpecialty"], "Dermatologist");
        let doctor_id = json["doctors"][0]["id"].as_str().unwrap().to_string();
        let slot = json["doctors"][0]["availableSlots"][0].as_str().unwrap().to_string();
        let (date, time) = slot.split_once(' ').unwrap();

        let booking = serde_json::json!({
            "doctorId": doctor_id,
            "date": date,
            "timeSlot": time,
            "patientName": "Ravi Kumar"
        });
        let request = Request::builder()
            .method("POST")
            .uri("/appointments")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(booking.to_string()))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let request = Request::builder().uri(format!("/doctors/{}", doctor_id)).body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
