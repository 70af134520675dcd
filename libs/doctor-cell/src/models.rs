use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_models::Specialty;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: Specialty,
    pub years_experience: u32,
    pub location: String,
    pub rating: f32, // 1-5
    pub accepting_new_patients: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default)]
    pub conditions_treated: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<u32>,
    /// `"yyyy-MM-dd HH:mm"` entries.
    #[serde(default)]
    pub available_slots: Vec<String>,
}

impl Doctor {
    /// Avatar text: first letter of every word in the name ("Dr. Aisha Verma" -> "DAV").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }

    pub fn has_slot_on(&self, date: &str) -> bool {
        self.available_slots.iter().any(|slot| slot.starts_with(date))
    }

    pub fn offers_slot(&self, date: &str, time: &str) -> bool {
        let wanted = format!("{} {}", date, time);
        self.available_slots.iter().any(|slot| *slot == wanted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Highest rated first.
    Rating,
    /// Most experienced first.
    Experience,
    /// Name, A to Z.
    Alpha,
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rating" => Ok(SortOrder::Rating),
            "experience" => Ok(SortOrder::Experience),
            "alpha" | "name" => Ok(SortOrder::Alpha),
            other => Err(format!("Unknown sort order: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DoctorSearchFilters {
    pub name: Option<String>,
    pub specialty: Option<Specialty>,
    pub accepting_only: bool,
    pub available_on: Option<NaiveDate>,
    pub sort: Option<SortOrder>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDay {
    pub date: String,
    pub label: String,
    pub times: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDetail {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub initials: String,
    pub slots: Vec<SlotDay>,
}

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Failed to read doctor roster: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed doctor roster: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate doctor id: {0}")]
    DuplicateId(String),

    #[error("Doctor {doctor_id} has malformed slot {slot:?}, expected \"yyyy-MM-dd HH:mm\"")]
    InvalidSlot { doctor_id: String, slot: String },

    #[error("Doctor {doctor_id} has rating {rating} outside 1-5")]
    InvalidRating { doctor_id: String, rating: f32 },
}
