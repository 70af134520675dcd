use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use shared_models::Specialty;
use shared_utils::dates::{format_date, parse_date, parse_time, split_slot};

use crate::models::{DirectoryError, Doctor, DoctorSearchFilters, SortOrder};

const BUILTIN_ROSTER: &str = include_str!("../../data/doctors.json");

/// Read-only roster of doctors, loaded once at start-up.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    /// The roster shipped with the crate.
    pub fn builtin() -> Result<Self, DirectoryError> {
        Self::from_json(BUILTIN_ROSTER)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let directory = Self::from_json(&raw)?;
        info!("Loaded {} doctors from {}", directory.len(), path.display());
        Ok(directory)
    }

    pub fn from_json(raw: &str) -> Result<Self, DirectoryError> {
        let doctors: Vec<Doctor> = serde_json::from_str(raw)?;
        Self::from_doctors(doctors)
    }

    pub fn from_doctors(doctors: Vec<Doctor>) -> Result<Self, DirectoryError> {
        let mut seen = HashSet::new();
        for doctor in &doctors {
            if !seen.insert(doctor.id.as_str()) {
                return Err(DirectoryError::DuplicateId(doctor.id.clone()));
            }
            if !(1.0..=5.0).contains(&doctor.rating) {
                return Err(DirectoryError::InvalidRating {
                    doctor_id: doctor.id.clone(),
                    rating: doctor.rating,
                });
            }
            for slot in &doctor.available_slots {
                let well_formed = split_slot(slot)
                    .is_some_and(|(date, time)| parse_date(date).is_some() && parse_time(time).is_some());
                if !well_formed {
                    return Err(DirectoryError::InvalidSlot {
                        doctor_id: doctor.id.clone(),
                        slot: slot.clone(),
                    });
                }
            }
        }

        Ok(Self { doctors })
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn len(&self) -> usize {
        self.doctors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doctors.is_empty()
    }

    pub fn get(&self, doctor_id: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|doctor| doctor.id == doctor_id)
    }

    /// Distinct specialties in order of first appearance in the roster.
    pub fn specialties(&self) -> Vec<Specialty> {
        let mut specialties = Vec::new();
        for doctor in &self.doctors {
            if !specialties.contains(&doctor.specialty) {
                specialties.push(doctor.specialty);
            }
        }
        specialties
    }

    /// Filter and optionally sort the roster. Without a sort order, roster order is kept.
    pub fn search(&self, filters: &DoctorSearchFilters) -> Vec<Doctor> {
        let name_query = filters
            .name
            .as_deref()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty());
        let date_prefix = filters.available_on.map(format_date);

        let mut doctors: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|doctor| {
                name_query
                    .as_deref()
                    .map_or(true, |query| doctor.name.to_lowercase().contains(query))
            })
            .filter(|doctor| filters.specialty.map_or(true, |s| doctor.specialty == s))
            .filter(|doctor| !filters.accepting_only || doctor.accepting_new_patients)
            .filter(|doctor| date_prefix.as_deref().map_or(true, |date| doctor.has_slot_on(date)))
            .cloned()
            .collect();

        if let Some(order) = filters.sort {
            sort_doctors(&mut doctors, order);
        }

        debug!("Directory search matched {} of {} doctors", doctors.len(), self.doctors.len());
        doctors
    }

    /// Doctors of one specialty, those accepting new patients first, then by rating.
    pub fn for_specialty(&self, specialty: Specialty) -> Vec<Doctor> {
        let mut doctors: Vec<Doctor> = self
            .doctors
            .iter()
            .filter(|doctor| doctor.specialty == specialty)
            .cloned()
            .collect();

        doctors.sort_by(|a, b| {
            b.accepting_new_patients
                .cmp(&a.accepting_new_patients)
                .then_with(|| b.rating.total_cmp(&a.rating))
        });
        doctors
    }
}

fn sort_doctors(doctors: &mut [Doctor], order: SortOrder) {
    doctors.sort_by(|a, b| match order {
        SortOrder::Rating => b.rating.total_cmp(&a.rating),
        SortOrder::Experience => b.years_experience.cmp(&a.years_experience),
        SortOrder::Alpha => compare_names(&a.name, &b.name),
    });
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}
