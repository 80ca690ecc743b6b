pub mod appointment;
pub mod enums;

pub use appointment::{Appointment, DraftForm};
pub use enums::{AppointmentStatus, AppointmentType, FieldName, Severity, Step};
