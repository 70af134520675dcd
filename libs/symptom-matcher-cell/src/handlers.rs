use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::debug;

use doctor_cell::DoctorDirectory;
use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{MatchResult, Recommendation, SymptomRequest};
use crate::services::{keyword_groups, match_symptoms, recommend};

#[derive(Clone)]
pub struct SymptomState {
    pub config: Arc<AppConfig>,
    pub directory: Arc<DoctorDirectory>,
}

fn ensure_within_limit(config: &AppConfig, symptoms: &str) -> Result<(), AppError> {
    let limit = config.max_symptom_chars;
    if symptoms.chars().nth(limit).is_some() {
        return Err(AppError::ValidationError(format!(
            "Symptom description is limited to {} characters",
            limit
        )));
    }
    Ok(())
}

#[axum::debug_handler]
pub async fn match_symptoms_handler(
    State(state): State<SymptomState>,
    Json(request): Json<SymptomRequest>,
) -> Result<Json<MatchResult>, AppError> {
    ensure_within_limit(&state.config, &request.symptoms)?;

    let result = match_symptoms(&request.symptoms);
    debug!(
        "Symptoms matched {} with {} keywords",
        result.recommended_specialty,
        result.matched_keywords.len()
    );

    Ok(Json(result))
}

#[axum::debug_handler]
pub async fn recommend_doctors(
    State(state): State<SymptomState>,
    Json(request): Json<SymptomRequest>,
) -> Result<Json<Recommendation>, AppError> {
    ensure_within_limit(&state.config, &request.symptoms)?;

    Ok(Json(recommend(&request.symptoms, &state.directory)))
}

#[axum::debug_handler]
pub async fn list_keywords() -> Json<Value> {
    Json(json!({
        "specialties": keyword_groups()
    }))
}
