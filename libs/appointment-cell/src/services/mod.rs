pub mod booking;
pub mod schedule;
pub mod store;

pub use booking::{generate_appointment_id, validate_request, BookingService, ValidatedBooking};
pub use schedule::group_by_date;
pub use store::AppointmentStore;
