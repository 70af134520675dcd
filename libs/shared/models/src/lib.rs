pub mod error;
pub mod specialty;

pub use error::AppError;
pub use specialty::Specialty;
