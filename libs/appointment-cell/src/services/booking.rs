// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use tracing::{debug, info, warn};

use doctor_cell::{times_on, Doctor, DoctorDirectory};
use shared_utils::dates::{format_date, parse_date, parse_time};

use crate::models::{
    Appointment, AppointmentError, BookAppointmentRequest, BookingField, FieldError, FieldErrors,
};
use crate::services::store::AppointmentStore;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// `apt-<unix millis>-<9 base-36 chars>`
pub fn generate_appointment_id() -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("apt-{}-{}", Utc::now().timestamp_millis(), suffix)
}

/// A booking request whose fields passed validation, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBooking {
    pub doctor_id: String,
    pub date: String,
    pub time_slot: String,
    pub patient_name: String,
    pub reason: Option<String>,
}

/// Check every form field and report all problems at once.
pub fn validate_request(request: BookAppointmentRequest) -> Result<ValidatedBooking, AppointmentError> {
    let mut errors = Vec::new();

    let date = match request.date.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        None => {
            errors.push(FieldError::new(BookingField::Date, "Please select a date"));
            None
        }
        Some(raw) => match parse_date(raw) {
            Some(date) => Some(format_date(date)),
            None => {
                errors.push(FieldError::new(BookingField::Date, "Date must be in yyyy-MM-dd format"));
                None
            }
        },
    };

    let time_slot = match request.time_slot.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
        None => {
            errors.push(FieldError::new(BookingField::TimeSlot, "Please select a time slot"));
            None
        }
        Some(raw) => match parse_time(raw) {
            Some(time) => Some(time.format("%H:%M").to_string()),
            None => {
                errors.push(FieldError::new(BookingField::TimeSlot, "Time slot must be in HH:mm format"));
                None
            }
        },
    };

    let patient_name = request.patient_name.trim().to_string();
    if patient_name.is_empty() {
        errors.push(FieldError::new(BookingField::PatientName, "Patient name is required"));
    }

    match (date, time_slot) {
        (Some(date), Some(time_slot)) if errors.is_empty() => Ok(ValidatedBooking {
            doctor_id: request.doctor_id.trim().to_string(),
            date,
            time_slot,
            patient_name,
            reason: request
                .reason
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty()),
        }),
        _ => Err(AppointmentError::Validation(FieldErrors(errors))),
    }
}

pub struct BookingService {
    directory: Arc<DoctorDirectory>,
    store: Arc<AppointmentStore>,
}

impl BookingService {
    pub fn new(directory: Arc<DoctorDirectory>, store: Arc<AppointmentStore>) -> Self {
        Self { directory, store }
    }

    fn doctor(&self, doctor_id: &str) -> Result<&Doctor, AppointmentError> {
        self.directory
            .get(doctor_id)
            .ok_or_else(|| AppointmentError::DoctorNotFound(doctor_id.to_string()))
    }

    /// Times the doctor offers on `date` that nobody has booked yet.
    pub async fn available_time_slots(&self, doctor_id: &str, date: &str) -> Result<Vec<String>, AppointmentError> {
        let doctor = self.doctor(doctor_id)?;
        let booked = self.store.list().await;

        let slots: Vec<String> = times_on(doctor, date)
            .into_iter()
            .filter(|time| !booked.iter().any(|a| a.occupies(&doctor.id, date, time)))
            .collect();

        debug!("{} has {} open slots on {}", doctor.name, slots.len(), date);
        Ok(slots)
    }

    pub async fn book(&self, request: BookAppointmentRequest) -> Result<Appointment, AppointmentError> {
        let booking = validate_request(request)?;
        let doctor = self.doctor(&booking.doctor_id)?;

        if !doctor.accepting_new_patients {
            warn!("Rejected booking for {}: not accepting new patients", doctor.name);
            return Err(AppointmentError::DoctorNotAccepting(doctor.name.clone()));
        }

        if !doctor.offers_slot(&booking.date, &booking.time_slot) {
            return Err(AppointmentError::SlotNotOffered {
                doctor_name: doctor.name.clone(),
                date: booking.date,
                time_slot: booking.time_slot,
            });
        }

        let appointment = Appointment {
            id: generate_appointment_id(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            date: booking.date,
            time_slot: booking.time_slot,
            patient_name: booking.patient_name,
            reason: booking.reason,
        };

        self.store
            .append_checked(appointment.clone(), |existing| {
                let taken = existing
                    .iter()
                    .any(|a| a.occupies(&appointment.doctor_id, &appointment.date, &appointment.time_slot));
                if taken {
                    return Err(AppointmentError::SlotAlreadyBooked {
                        doctor_name: appointment.doctor_name.clone(),
                        date: appointment.date.clone(),
                        time_slot: appointment.time_slot.clone(),
                    });
                }
                Ok(())
            })
            .await?;

        info!(
            "Booked {} with {} on {} at {}",
            appointment.id, appointment.doctor_name, appointment.date, appointment.time_slot
        );
        Ok(appointment)
    }

    pub async fn cancel(&self, appointment_id: &str) -> Result<Appointment, AppointmentError> {
        let removed = self.store.remove(appointment_id).await?;
        info!("Cancelled appointment {} with {}", removed.id, removed.doctor_name);
        Ok(removed)
    }
}
