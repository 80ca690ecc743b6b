use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{AppointmentStatus, AppointmentType, FieldName};

/// Wire format of `Appointment::date` and the draft date field.
pub const DATE_VALUE_FORMAT: &str = "%Y-%m-%d";

/// A booked appointment in the session's appointment list.
///
/// `email`, `phone` and `notes` may be empty: rows seeded for the demo
/// dashboard never had them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub department: String,
    pub doctor: String,
    pub date: NaiveDate,
    pub time: String,
    #[serde(default)]
    pub notes: String,
    #[serde(rename = "type", default)]
    pub appointment_type: AppointmentType,
    #[serde(default)]
    pub status: AppointmentStatus,
}

/// The single in-progress booking form.
///
/// Values are kept exactly as entered; they only become an `Appointment`
/// once the whole form validates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    #[serde(rename = "type")]
    pub appointment_type: AppointmentType,
}

impl DraftForm {
    /// Draft pre-filled from an existing appointment, for edit mode.
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            name: appointment.name.clone(),
            email: appointment.email.clone(),
            phone: appointment.phone.clone(),
            department: appointment.department.clone(),
            doctor: appointment.doctor.clone(),
            date: appointment.date.format(DATE_VALUE_FORMAT).to_string(),
            time: appointment.time.clone(),
            notes: appointment.notes.clone(),
            appointment_type: appointment.appointment_type,
        }
    }

    /// Current text of a field. `type` reads as its wire form.
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Department => &self.department,
            FieldName::Doctor => &self.doctor,
            FieldName::Date => &self.date,
            FieldName::Time => &self.time,
            FieldName::Notes => &self.notes,
            FieldName::Type => self.appointment_type.as_str(),
        }
    }

    /// Mutable slot for a text field; `None` for `type`, which is not free text.
    pub(crate) fn text_slot(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Name => Some(&mut self.name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Phone => Some(&mut self.phone),
            FieldName::Department => Some(&mut self.department),
            FieldName::Doctor => Some(&mut self.doctor),
            FieldName::Date => Some(&mut self.date),
            FieldName::Time => Some(&mut self.time),
            FieldName::Notes => Some(&mut self.notes),
            FieldName::Type => None,
        }
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_VALUE_FORMAT).ok()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Builds the appointment row this draft describes.
    pub fn to_appointment(&self, id: u32, date: NaiveDate, status: AppointmentStatus) -> Appointment {
        Appointment {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department.clone(),
            doctor: self.doctor.clone(),
            date,
            time: self.time.clone(),
            notes: self.notes.clone(),
            appointment_type: self.appointment_type,
            status,
        }
    }
}
