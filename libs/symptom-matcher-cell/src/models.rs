use std::fmt;

use serde::{Deserialize, Serialize};

use doctor_cell::Doctor;
use shared_models::Specialty;

pub const EMPTY_INPUT_REASON: &str = "Please describe your symptoms for a better match.";
pub const NO_MATCH_REASON: &str =
    "No specific specialty match found. A General Physician can help assess your symptoms.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLevel {
    High,
    Medium,
    Low,
}

impl MatchLevel {
    /// 3+ hits is High, 2 is Medium, anything less is Low.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 | 1 => MatchLevel::Low,
            2 => MatchLevel::Medium,
            _ => MatchLevel::High,
        }
    }
}

impl fmt::Display for MatchLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchLevel::High => write!(f, "High"),
            MatchLevel::Medium => write!(f, "Medium"),
            MatchLevel::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub match_level: MatchLevel,
    pub recommended_specialty: Specialty,
    pub reason: String,
    pub matched_keywords: Vec<String>,
}

impl MatchResult {
    pub fn empty_input() -> Self {
        Self {
            match_level: MatchLevel::Low,
            recommended_specialty: Specialty::GeneralPhysician,
            reason: EMPTY_INPUT_REASON.to_string(),
            matched_keywords: Vec::new(),
        }
    }

    pub fn no_match() -> Self {
        Self {
            match_level: MatchLevel::Low,
            recommended_specialty: Specialty::GeneralPhysician,
            reason: NO_MATCH_REASON.to_string(),
            matched_keywords: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymptomRequest {
    pub symptoms: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    #[serde(rename = "match")]
    pub match_result: MatchResult,
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordGroup {
    pub specialty: Specialty,
    pub keywords: &'static [&'static str],
}
