// libs/appointment-cell/src/models.rs
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use shared_database::StorageError;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub doctor_id: String,
    pub doctor_name: String,
    /// `yyyy-MM-dd`
    pub date: String,
    /// `HH:mm`
    pub time_slot: String,
    pub patient_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Appointment {
    /// First eight characters of the id, as shown on appointment badges.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    pub fn occupies(&self, doctor_id: &str, date: &str, time_slot: &str) -> bool {
        self.doctor_id == doctor_id && self.date == date && self.time_slot == time_slot
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub date: Option<String>,
    pub time_slot: Option<String>,
    #[serde(default)]
    pub patient_name: String,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDay {
    pub date: String,
    pub label: String,
    pub is_past: bool,
    pub is_today: bool,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingField {
    Date,
    TimeSlot,
    PatientName,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: BookingField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: BookingField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(pub Vec<FieldError>);

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        f.write_str(&messages.join("; "))
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(String),

    #[error("Doctor not found: {0}")]
    DoctorNotFound(String),

    #[error("{0} is not accepting new patients")]
    DoctorNotAccepting(String),

    #[error("{0}")]
    Validation(FieldErrors),

    #[error("{doctor_name} has no slot at {date} {time_slot}")]
    SlotNotOffered {
        doctor_name: String,
        date: String,
        time_slot: String,
    },

    #[error("The {date} {time_slot} slot with {doctor_name} is already booked")]
    SlotAlreadyBooked {
        doctor_name: String,
        date: String,
        time_slot: String,
    },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
