// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use doctor_cell::DoctorDirectory;
use shared_models::error::AppError;
use shared_utils::dates::{format_date, parse_date};

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::services::{group_by_date, AppointmentStore, BookingService};

#[derive(Clone)]
pub struct AppointmentState {
    pub directory: Arc<DoctorDirectory>,
    pub store: Arc<AppointmentStore>,
}

impl AppointmentState {
    fn booking(&self) -> BookingService {
        BookingService::new(self.directory.clone(), self.store.clone())
    }
}

// ==============================================================================
// QUERY PARAMETER STRUCTS
// ==============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ScheduleQuery {
    /// Overrides the server's local date for day labels.
    pub today: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AvailableSlotsQuery {
    pub date: String,
}

fn parse_day(raw: &str) -> Result<NaiveDate, AppError> {
    parse_date(raw).ok_or_else(|| AppError::BadRequest(format!("Invalid date {:?}, expected yyyy-MM-dd", raw)))
}

fn to_app_error(error: AppointmentError) -> AppError {
    match error {
        AppointmentError::NotFound(_) | AppointmentError::DoctorNotFound(_) => {
            AppError::NotFound(error.to_string())
        }
        AppointmentError::Validation(_) | AppointmentError::DoctorNotAccepting(_) => {
            AppError::ValidationError(error.to_string())
        }
        AppointmentError::SlotNotOffered { .. } | AppointmentError::SlotAlreadyBooked { .. } => {
            AppError::Conflict(error.to_string())
        }
        AppointmentError::Storage(e) => AppError::Storage(e.to_string()),
        AppointmentError::Serialization(e) => AppError::Internal(e.to_string()),
    }
}

fn confirmation_message(doctor_name: &str, date: &str, time_slot: &str) -> String {
    let when = parse_date(date)
        .map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| date.to_string());
    format!(
        "Your appointment with {} on {} at {} has been confirmed.",
        doctor_name, when, time_slot
    )
}

// ==============================================================================
// APPOINTMENT HANDLERS
// ==============================================================================

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentState>,
) -> Result<Json<Value>, AppError> {
    let appointments = state.store.list().await;

    Ok(Json(json!({
        "appointments": appointments,
        "total": appointments.len()
    })))
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<AppointmentState>,
    Query(query): Query<ScheduleQuery>,
) -> Result<Json<Value>, AppError> {
    let today = match query.today.as_deref().map(str::trim) {
        None | Some("") => Local::now().date_naive(),
        Some(raw) => parse_day(raw)?,
    };

    let appointments = state.store.list().await;
    let days = group_by_date(&appointments, today);
    debug!("Schedule has {} days relative to {}", days.len(), today);

    Ok(Json(json!({ "days": days })))
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    debug!("Booking request for doctor {}", request.doctor_id);

    let appointment = state.booking().book(request).await.map_err(|e| {
        warn!("Booking rejected: {}", e);
        to_app_error(e)
    })?;

    let message = confirmation_message(&appointment.doctor_name, &appointment.date, &appointment.time_slot);

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "appointment": appointment,
            "message": message
        })),
    ))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let appointment = state
        .store
        .get(&appointment_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", appointment_id)))?;

    Ok(Json(json!(appointment)))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentState>,
    Path(appointment_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let removed = state.booking().cancel(&appointment_id).await.map_err(to_app_error)?;

    Ok(Json(json!({
        "success": true,
        "id": removed.id
    })))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<AppointmentState>,
    Path(doctor_id): Path<String>,
    Query(query): Query<AvailableSlotsQuery>,
) -> Result<Json<Value>, AppError> {
    let date = parse_day(&query.date)?;
    let date = format_date(date);

    let slots = state
        .booking()
        .available_time_slots(&doctor_id, &date)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "date": date,
        "total": slots.len(),
        "slots": slots
    })))
}
