pub mod availability;
pub mod directory;

pub use availability::{doctor_detail, group_slots_by_day, times_on};
pub use directory::DoctorDirectory;
