use std::collections::BTreeMap;

use chrono::NaiveDate;

use shared_utils::dates::{day_label, is_past, is_today};

use crate::models::{Appointment, AppointmentDay};

/// Bucket appointments by date, days ascending and each day ordered by time.
pub fn group_by_date(appointments: &[Appointment], today: NaiveDate) -> Vec<AppointmentDay> {
    let mut by_date: BTreeMap<&str, Vec<Appointment>> = BTreeMap::new();
    for appointment in appointments {
        by_date
            .entry(appointment.date.as_str())
            .or_default()
            .push(appointment.clone());
    }

    by_date
        .into_iter()
        .map(|(date, mut appointments)| {
            // stable, so same-time bookings keep insertion order
            appointments.sort_by(|a, b| a.time_slot.cmp(&b.time_slot));
            AppointmentDay {
                date: date.to_string(),
                label: day_label(date, today),
                is_past: is_past(date, today),
                is_today: is_today(date, today),
                appointments,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_schedule() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        assert!(group_by_date(&[], today).is_empty());
    }
}
