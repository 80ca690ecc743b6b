//! Booking form validation.
//!
//! Two levels: per-step checks gate `advance()` (required fields and the
//! email shape), and the full submission check adds the reference-data
//! consistency rules before a draft may become an appointment.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{DraftForm, FieldName, Step};
use crate::reference;
use crate::schedule;

/// `local@domain.tld` with no whitespace in any part.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Field → message map for the fields currently in error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<FieldName, String>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldName, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldName) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = FieldName> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            f.write_str(message)?;
            first = false;
        }
        Ok(())
    }
}

/// Context the submission check needs beyond the draft itself.
#[derive(Debug, Clone, Copy)]
pub struct SubmissionRules {
    pub today: NaiveDate,
    pub booking_window_days: u32,
    pub notes_max_len: usize,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

fn required_message(field: FieldName) -> String {
    format!("{} is required", field.label())
}

/// Required-field check for one field; email also gets its shape checked.
fn check_required(draft: &DraftForm, field: FieldName, errors: &mut ValidationErrors) {
    let value = draft.value(field).trim();
    if value.is_empty() {
        errors.insert(field, required_message(field));
    } else if field == FieldName::Email && !is_valid_email(value) {
        errors.insert(field, "Email is invalid");
    }
}

/// Violations that block leaving `step`. Pure: the draft is not touched.
pub fn validate_step(draft: &DraftForm, step: Step) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in step.required_fields() {
        check_required(draft, *field, &mut errors);
    }
    errors
}

/// Full check run on submit: both steps' required fields plus consistency
/// of the chosen department, doctor, date and time with the reference data.
pub fn validate_submission(draft: &DraftForm, rules: &SubmissionRules) -> ValidationErrors {
    let mut errors = validate_step(draft, Step::Contact);
    for field in Step::Details.required_fields() {
        check_required(draft, *field, &mut errors);
    }

    let department = draft.department.as_str();
    if !errors.contains(FieldName::Department) && !reference::is_department(department) {
        errors.insert(FieldName::Department, "Department is not available");
    }

    let doctor = draft.doctor.as_str();
    if !errors.contains(FieldName::Doctor)
        && !errors.contains(FieldName::Department)
        && !reference::is_doctor_in(department, doctor)
    {
        errors.insert(FieldName::Doctor, "Doctor is not available in this department");
    }

    if !errors.contains(FieldName::Date) {
        let offered = draft
            .parsed_date()
            .is_some_and(|date| schedule::is_offered(rules.today, rules.booking_window_days, date));
        if !offered {
            errors.insert(FieldName::Date, "Date is not available");
        }
    }

    if !errors.contains(FieldName::Time) && !reference::is_time_slot(&draft.time) {
        errors.insert(FieldName::Time, "Time is not available");
    }

    if draft.notes.chars().count() > rules.notes_max_len {
        errors.insert(
            FieldName::Notes,
            format!("Notes must be at most {} characters", rules.notes_max_len),
        );
    }

    errors
}
