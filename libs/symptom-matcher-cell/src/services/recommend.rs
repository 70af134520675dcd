use tracing::debug;

use doctor_cell::DoctorDirectory;

use crate::models::Recommendation;
use crate::services::matcher::match_symptoms;

/// Match the symptoms, then list the directory's doctors for the recommended specialty.
pub fn recommend(symptoms: &str, directory: &DoctorDirectory) -> Recommendation {
    let match_result = match_symptoms(symptoms);
    let doctors = directory.for_specialty(match_result.recommended_specialty);

    debug!(
        "Recommending {} ({} match) with {} doctors",
        match_result.recommended_specialty,
        match_result.match_level,
        doctors.len()
    );

    Recommendation {
        match_result,
        doctors,
    }
}
