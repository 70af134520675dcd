use std::sync::Arc;

use axum::{routing::get, Router};

use crate::handlers;
use crate::services::DoctorDirectory;

pub fn doctor_routes(directory: Arc<DoctorDirectory>) -> Router {
    Router::new()
        .route("/", get(handlers::search_doctors))
        .route("/specialties", get(handlers::list_specialties))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .with_state(directory)
}
