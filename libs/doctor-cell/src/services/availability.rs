use std::collections::BTreeMap;

use chrono::NaiveDate;

use shared_utils::dates::{day_label, split_slot};

use crate::models::{Doctor, DoctorDetail, SlotDay};

/// Group a doctor's slots by calendar day, days and times ascending.
pub fn group_slots_by_day(doctor: &Doctor, today: NaiveDate) -> Vec<SlotDay> {
    let mut grouped: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for slot in &doctor.available_slots {
        if let Some((date, time)) = split_slot(slot) {
            grouped.entry(date).or_default().push(time.to_string());
        }
    }

    grouped
        .into_iter()
        .map(|(date, mut times)| {
            times.sort();
            SlotDay {
                date: date.to_string(),
                label: day_label(date, today),
                times,
            }
        })
        .collect()
}

/// Sorted `HH:mm` times the doctor offers on `date` (`yyyy-MM-dd`).
pub fn times_on(doctor: &Doctor, date: &str) -> Vec<String> {
    let mut times: Vec<String> = doctor
        .available_slots
        .iter()
        .filter_map(|slot| split_slot(slot))
        .filter(|(slot_date, _)| *slot_date == date)
        .map(|(_, time)| time.to_string())
        .collect();
    times.sort();
    times
}

pub fn doctor_detail(doctor: &Doctor, today: NaiveDate) -> DoctorDetail {
    DoctorDetail {
        initials: doctor.initials(),
        slots: group_slots_by_day(doctor, today),
        doctor: doctor.clone(),
    }
}
