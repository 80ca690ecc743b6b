use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, AppointmentStatus, AppointmentType, DraftForm, Step};
use crate::reference;
use crate::validation::ValidationErrors;

/// Everything the booking workflow owns: current step, the single draft,
/// its validation errors and the session's appointment list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowState {
    pub step: Step,
    pub draft: DraftForm,
    pub errors: ValidationErrors,
    pub appointments: Vec<Appointment>,
    /// Id of the appointment being edited; `None` when creating.
    pub edit_target: Option<u32>,
    /// Appointment shown on the confirmation step.
    pub confirmation: Option<Appointment>,
    next_id: u32,
}

impl WorkflowState {
    /// Fresh state over an existing appointment list.
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        let highest = appointments.iter().map(|a| a.id).max().unwrap_or(0);
        let next_id = highest.max(appointments.len() as u32) + 1;
        Self {
            appointments,
            next_id,
            ..Self::default()
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_target.is_some()
    }

    pub fn find(&self, id: u32) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Next appointment id. Ids are never handed out twice, even after the
    /// row holding one is deleted.
    pub(crate) fn allocate_id(&mut self) -> u32 {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        id
    }

    /// Empties the draft and leaves edit mode. Step and list are untouched.
    pub(crate) fn reset_form(&mut self) {
        self.draft = DraftForm::default();
        self.errors.clear();
        self.edit_target = None;
    }
}

/// Read-only copy of the workflow state handed to the presentation layer
/// after every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSnapshot {
    pub step: Step,
    pub draft: DraftForm,
    pub errors: ValidationErrors,
    pub appointments: Vec<Appointment>,
    pub edit_target: Option<u32>,
    pub is_edit_mode: bool,
    pub confirmation: Option<Appointment>,
    /// Doctors selectable for the draft's current department.
    pub doctor_options: Vec<String>,
}

impl From<&WorkflowState> for WorkflowSnapshot {
    fn from(state: &WorkflowState) -> Self {
        Self {
            step: state.step,
            draft: state.draft.clone(),
            errors: state.errors.clone(),
            appointments: state.appointments.clone(),
            edit_target: state.edit_target,
            is_edit_mode: state.is_edit_mode(),
            confirmation: state.confirmation.clone(),
            doctor_options: reference::doctors_for(&state.draft.department)
                .iter()
                .map(|d| d.to_string())
                .collect(),
        }
    }
}

/// The two appointments the demo dashboard starts with, dated relative to `today`.
pub fn demo_appointments(today: NaiveDate) -> Vec<Appointment> {
    let in_days = |n: u64| today.checked_add_days(Days::new(n)).unwrap_or(today);
    vec![
        Appointment {
            id: 1,
            name: "John Doe".into(),
            email: String::new(),
            phone: String::new(),
            department: "Cardiology".into(),
            doctor: "Dr. Sarah Johnson".into(),
            date: in_days(2),
            time: "10:00 AM".into(),
            notes: String::new(),
            appointment_type: AppointmentType::Regular,
            status: AppointmentStatus::Scheduled,
        },
        Appointment {
            id: 2,
            name: "Alice Smith".into(),
            email: String::new(),
            phone: String::new(),
            department: "Neurology".into(),
            doctor: "Dr. Michael Chen".into(),
            date: in_days(5),
            time: "2:30 PM".into(),
            notes: String::new(),
            appointment_type: AppointmentType::Regular,
            status: AppointmentStatus::Scheduled,
        },
    ]
}
