use chrono::{Duration, NaiveDate, NaiveTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Split a `"yyyy-MM-dd HH:mm"` slot on its first space.
pub fn split_slot(slot: &str) -> Option<(&str, &str)> {
    slot.split_once(' ')
}

/// Heading for a calendar day: "Today", "Tomorrow" or e.g. "Tuesday, November 25, 2025".
/// Strings that are not `yyyy-MM-dd` come back unchanged.
pub fn day_label(date: &str, today: NaiveDate) -> String {
    match parse_date(date) {
        Some(day) if day == today => "Today".to_string(),
        Some(day) if Some(day) == today.checked_add_signed(Duration::days(1)) => {
            "Tomorrow".to_string()
        }
        Some(day) => day.format("%A, %B %-d, %Y").to_string(),
        None => date.to_string(),
    }
}

/// Strictly before `today`; unparsable dates are never past.
pub fn is_past(date: &str, today: NaiveDate) -> bool {
    parse_date(date).is_some_and(|day| day < today)
}

pub fn is_today(date: &str, today: NaiveDate) -> bool {
    parse_date(date).is_some_and(|day| day == today)
}
