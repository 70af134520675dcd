use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::json;

use shared_config::{AppConfig, StorageBackend};

pub struct TestConfig {
    pub appointments_key: String,
    pub max_symptom_chars: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            appointments_key: "appointments".to_string(),
            max_symptom_chars: 2000,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            storage_backend: StorageBackend::Memory,
            appointments_key: self.appointments_key.clone(),
            max_symptom_chars: self.max_symptom_chars,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Fixed "today" matching the slot dates in the built-in roster.
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 25).unwrap_or_default()
}

pub struct MockRecords;

impl MockRecords {
    pub fn doctor(id: &str, name: &str, specialty: &str, accepting: bool, slots: &[&str]) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "specialty": specialty,
            "yearsExperience": 10,
            "location": "Delhi, India",
            "rating": 4.5,
            "acceptingNewPatients": accepting,
            "bio": format!("{} is a test doctor.", name),
            "conditionsTreated": [],
            "fee": 500,
            "availableSlots": slots
        })
    }

    pub fn roster() -> serde_json::Value {
        json!([
            Self::doctor("t1", "Dr. Asha Rao", "Cardiologist", true, &["2025-11-25 09:00", "2025-11-25 11:00", "2025-11-26 10:00"]),
            Self::doctor("t2", "Dr. Bilal Khan", "Dermatologist", true, &["2025-11-25 14:00"]),
            Self::doctor("t3", "Dr. Chitra Iyer", "Cardiologist", false, &["2025-11-27 10:30"]),
        ])
    }

    pub fn appointment(id: &str, doctor_id: &str, date: &str, time_slot: &str, patient_name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "doctorId": doctor_id,
            "doctorName": "Dr. Test",
            "date": date,
            "timeSlot": time_slot,
            "patientName": patient_name
        })
    }

    pub fn error_response(message: &str) -> serde_json::Value {
        json!({ "error": message })
    }
}
