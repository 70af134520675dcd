// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{routing::get, Router};

use doctor_cell::DoctorDirectory;

use crate::handlers::{self, AppointmentState};
use crate::services::AppointmentStore;

pub fn appointment_routes(directory: Arc<DoctorDirectory>, store: Arc<AppointmentStore>) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::book_appointment))
        .route("/schedule", get(handlers::get_schedule))
        .route("/available-slots/{doctor_id}", get(handlers::get_available_slots))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment).delete(handlers::cancel_appointment),
        )
        .with_state(AppointmentState { directory, store })
}
