use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;

use crate::handlers::{self, SymptomState};

pub fn symptom_routes(config: Arc<AppConfig>, directory: Arc<DoctorDirectory>) -> Router {
    Router::new()
        .route("/match", post(handlers::match_symptoms_handler))
        .route("/recommend", post(handlers::recommend_doctors))
        .route("/keywords", get(handlers::list_keywords))
        .with_state(SymptomState { config, directory })
}
