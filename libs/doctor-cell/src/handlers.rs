use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use shared_models::error::AppError;
use shared_models::Specialty;
use shared_utils::dates::parse_date;

use crate::models::{DoctorSearchFilters, SortOrder};
use crate::services::{doctor_detail, DoctorDirectory};

#[derive(Debug, Default, Deserialize)]
pub struct DoctorSearchQuery {
    pub name: Option<String>,
    pub specialty: Option<String>,
    pub accepting_only: Option<bool>,
    pub date: Option<String>,
    pub sort: Option<String>,
}

impl DoctorSearchQuery {
    pub fn into_filters(self) -> Result<DoctorSearchFilters, AppError> {
        let specialty = match self.specialty.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(s) if s.eq_ignore_ascii_case("all") => None,
            Some(s) => Some(
                s.parse::<Specialty>()
                    .map_err(|e| AppError::BadRequest(e.to_string()))?,
            ),
        };

        let available_on = match self.date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(
                parse_date(raw)
                    .ok_or_else(|| AppError::BadRequest(format!("Invalid date {:?}, expected yyyy-MM-dd", raw)))?,
            ),
        };

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<SortOrder>().map_err(AppError::BadRequest)?),
        };

        Ok(DoctorSearchFilters {
            name: self.name,
            specialty,
            accepting_only: self.accepting_only.unwrap_or(false),
            available_on,
            sort,
        })
    }
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
    Query(query): Query<DoctorSearchQuery>,
) -> Result<Json<Value>, AppError> {
    debug!("Searching doctors with {:?}", query);
    let filters = query.into_filters()?;

    let doctors = directory.search(&filters);

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn list_specialties(
    State(directory): State<Arc<DoctorDirectory>>,
) -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "specialties": directory.specialties()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(directory): State<Arc<DoctorDirectory>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = directory
        .get(&doctor_id)
        .ok_or_else(|| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    let today = Local::now().date_naive();
    Ok(Json(json!(doctor_detail(doctor, today))))
}
