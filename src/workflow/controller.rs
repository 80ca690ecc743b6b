//! Booking workflow controller.
//!
//! Owns the `WorkflowState` and is the only thing that mutates it. Every
//! operation runs to completion synchronously, then publishes a fresh
//! `WorkflowSnapshot` on a `watch` channel for the presentation layer.
//!
//! Step flow: CONTACT → DETAILS → (submit) → CONFIRMATION → CONTACT
//! Edit flow:  any step → DETAILS (begin_edit) → (submit) → CONTACT

use std::sync::Arc;

use tokio::sync::watch;

use crate::config::BookingConfig;
use crate::error::WorkflowError;
use crate::models::{Appointment, AppointmentStatus, DraftForm, FieldName, Step};
use crate::notify::{
    Notification, Notifier, TracingNotifier, MSG_BOOKED, MSG_CANCELLED, MSG_FILL_REQUIRED,
    MSG_FIX_ERRORS, MSG_UPDATED,
};
use crate::reference::{self, DepartmentInfo};
use crate::schedule::{self, AvailableDates, Clock, SystemClock};
use crate::validation::{self, SubmissionRules, ValidationErrors};

use super::state::{demo_appointments, WorkflowSnapshot, WorkflowState};

pub struct BookingWorkflow {
    state: WorkflowState,
    config: BookingConfig,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
    snapshots: watch::Sender<WorkflowSnapshot>,
}

impl BookingWorkflow {
    /// Workflow on the wall clock, reporting notifications to the log.
    pub fn new(config: BookingConfig) -> Self {
        Self::with_services(config, Arc::new(TracingNotifier), Arc::new(SystemClock))
    }

    pub fn with_services(
        config: BookingConfig,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let appointments = if config.seed_demo_appointments {
            demo_appointments(clock.today())
        } else {
            Vec::new()
        };
        let state = WorkflowState::with_appointments(appointments);
        let (snapshots, _) = watch::channel(WorkflowSnapshot::from(&state));

        tracing::info!(
            appointments = state.appointments.len(),
            window_days = config.booking_window_days,
            "booking workflow ready"
        );

        Self {
            state,
            config,
            notifier,
            clock,
            snapshots,
        }
    }

    // ── Read access ─────────────────────────────────────────

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn draft(&self) -> &DraftForm {
        &self.state.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.state.errors
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.state.appointments
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.is_edit_mode()
    }

    pub fn config(&self) -> &BookingConfig {
        &self.config
    }

    pub fn snapshot(&self) -> WorkflowSnapshot {
        WorkflowSnapshot::from(&self.state)
    }

    /// Receiver that always holds the snapshot taken after the latest operation.
    pub fn subscribe(&self) -> watch::Receiver<WorkflowSnapshot> {
        self.snapshots.subscribe()
    }

    fn publish(&self) {
        self.snapshots.send_replace(WorkflowSnapshot::from(&self.state));
    }

    // ── Form editing ────────────────────────────────────────

    /// Sets one draft field and clears that field's error.
    ///
    /// Changing the department drops a doctor who does not work there.
    pub fn update_field(
        &mut self,
        field: FieldName,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        let value = value.into();
        let draft = &mut self.state.draft;

        if field == FieldName::Type {
            match value.parse() {
                Ok(appointment_type) => draft.appointment_type = appointment_type,
                Err(err) => {
                    tracing::warn!(field = field.as_str(), value = %value, "rejected field value");
                    return Err(err);
                }
            }
        } else if let Some(slot) = draft.text_slot(field) {
            *slot = if field == FieldName::Notes {
                value.chars().take(self.config.notes_max_len).collect()
            } else {
                value
            };
        }

        if field == FieldName::Department
            && !draft.doctor.is_empty()
            && !reference::is_doctor_in(&draft.department, &draft.doctor)
        {
            tracing::debug!(doctor = %draft.doctor, department = %draft.department, "doctor reset");
            draft.doctor.clear();
        }

        self.state.errors.remove(field);
        self.publish();
        Ok(())
    }

    /// String-keyed form of [`update_field`](Self::update_field) for hosts
    /// that forward raw form events.
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), WorkflowError> {
        let field: FieldName = name.parse()?;
        self.update_field(field, value)
    }

    /// Checks the fields `step` requires and records the result as the
    /// current validation errors.
    pub fn validate_step(&mut self, step: Step) -> ValidationErrors {
        let errors = validation::validate_step(&self.state.draft, step);
        self.state.errors = errors.clone();
        self.publish();
        errors
    }

    // ── Step navigation ─────────────────────────────────────

    /// Contact → Details, once name, email and phone are valid.
    pub fn advance(&mut self) -> Result<Step, WorkflowError> {
        let step = self.state.step;
        if step != Step::Contact {
            return Err(WorkflowError::InvalidTransition {
                step,
                action: "advance",
            });
        }

        let errors = self.validate_step(step);
        if !errors.is_empty() {
            tracing::debug!(fields = errors.len(), "advance blocked");
            self.notifier.notify(Notification::error(MSG_FILL_REQUIRED));
            return Err(WorkflowError::Validation(errors));
        }

        self.state.step = Step::Details;
        tracing::debug!(from = step.as_str(), to = "details", "step change");
        self.publish();
        Ok(self.state.step)
    }

    /// Details → Contact. No validation.
    pub fn retreat(&mut self) -> Result<Step, WorkflowError> {
        let step = self.state.step;
        if step != Step::Details {
            return Err(WorkflowError::InvalidTransition {
                step,
                action: "go back",
            });
        }
        self.state.step = Step::Contact;
        tracing::debug!(from = "details", to = "contact", "step change");
        self.publish();
        Ok(self.state.step)
    }

    /// Leaves the confirmation screen. The appointment list is kept.
    pub fn return_to_start(&mut self) -> Result<(), WorkflowError> {
        let step = self.state.step;
        if step != Step::Confirmation {
            return Err(WorkflowError::InvalidTransition {
                step,
                action: "return to start",
            });
        }
        self.state.confirmation = None;
        self.state.step = Step::Contact;
        self.publish();
        Ok(())
    }

    // ── Commit ──────────────────────────────────────────────

    fn submission_rules(&self) -> SubmissionRules {
        SubmissionRules {
            today: self.clock.today(),
            booking_window_days: self.config.booking_window_days,
            notes_max_len: self.config.notes_max_len,
        }
    }

    /// Validates the whole draft and books it, or updates the appointment
    /// under edit. Returns the stored row.
    ///
    /// A new booking moves to the confirmation step; an update returns to
    /// the contact step.
    pub fn submit(&mut self) -> Result<Appointment, WorkflowError> {
        let step = self.state.step;
        if step == Step::Confirmation {
            return Err(WorkflowError::InvalidTransition {
                step,
                action: "submit",
            });
        }

        let errors = validation::validate_submission(&self.state.draft, &self.submission_rules());
        let date = match self.state.draft.parsed_date() {
            Some(date) if errors.is_empty() => date,
            _ => return Err(self.reject_submission(errors)),
        };

        let saved = match self.state.edit_target {
            Some(id) => {
                let draft = &self.state.draft;
                let Some(slot) = self.state.appointments.iter_mut().find(|a| a.id == id) else {
                    let err = WorkflowError::NotFound {
                        entity_type: "Appointment".into(),
                        id: id.to_string(),
                    };
                    self.notifier.notify(Notification::error(err.to_string()));
                    return Err(err);
                };
                *slot = draft.to_appointment(slot.id, date, slot.status);
                let saved = slot.clone();
                tracing::info!(id, "appointment updated");
                self.notifier.notify(Notification::success(MSG_UPDATED));
                self.state.step = Step::Contact;
                self.state.confirmation = None;
                saved
            }
            None => {
                let id = self.state.allocate_id();
                let saved = self
                    .state
                    .draft
                    .to_appointment(id, date, AppointmentStatus::Scheduled);
                self.state.appointments.push(saved.clone());
                tracing::info!(id, department = %saved.department, "appointment booked");
                self.notifier.notify(Notification::success(MSG_BOOKED));
                self.state.step = Step::Confirmation;
                self.state.confirmation = Some(saved.clone());
                saved
            }
        };

        self.state.reset_form();
        self.publish();
        Ok(saved)
    }

    fn reject_submission(&mut self, mut errors: ValidationErrors) -> WorkflowError {
        if errors.is_empty() {
            errors.insert(FieldName::Date, "Date is not available");
        }
        tracing::debug!(fields = errors.len(), "submit rejected");
        self.state.errors = errors.clone();
        self.notifier.notify(Notification::error(MSG_FIX_ERRORS));
        self.publish();
        WorkflowError::Validation(errors)
    }

    /// Abandons the draft and any edit in progress.
    pub fn cancel(&mut self) {
        self.state.reset_form();
        self.state.confirmation = None;
        self.state.step = Step::Contact;
        tracing::debug!("draft cancelled");
        self.publish();
    }

    // ── Edit / delete ───────────────────────────────────────

    /// Loads `appointment` into the draft and jumps straight to the details
    /// step; the contact details are taken as already known.
    pub fn begin_edit(&mut self, appointment: &Appointment) {
        self.state.draft = DraftForm::from_appointment(appointment);
        self.state.errors.clear();
        self.state.edit_target = Some(appointment.id);
        self.state.confirmation = None;
        self.state.step = Step::Details;
        tracing::debug!(id = appointment.id, "editing appointment");
        self.publish();
    }

    pub fn begin_edit_by_id(&mut self, id: u32) -> Result<(), WorkflowError> {
        let appointment = self
            .state
            .find(id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound {
                entity_type: "Appointment".into(),
                id: id.to_string(),
            })?;
        self.begin_edit(&appointment);
        Ok(())
    }

    /// Removes the appointment with `id`. Returns `false`, without notifying,
    /// when no such appointment exists.
    pub fn delete_appointment(&mut self, id: u32) -> bool {
        let before = self.state.appointments.len();
        self.state.appointments.retain(|a| a.id != id);
        if self.state.appointments.len() == before {
            tracing::debug!(id, "delete of unknown appointment ignored");
            return false;
        }

        if self.state.edit_target == Some(id) {
            self.state.reset_form();
            self.state.step = Step::Contact;
        }
        if self.state.confirmation.as_ref().is_some_and(|c| c.id == id) {
            self.state.confirmation = None;
            self.state.step = Step::Contact;
        }

        tracing::info!(id, "appointment cancelled");
        self.notifier.notify(Notification::success(MSG_CANCELLED));
        self.publish();
        true
    }

    // ── Reference data ──────────────────────────────────────

    /// Dates currently offered, computed from the clock on every call.
    pub fn available_dates(&self) -> AvailableDates {
        schedule::available_dates(self.clock.today(), self.config.booking_window_days)
    }

    /// Looks up a department for the directory and announces it.
    pub fn view_department(&self, name: &str) -> Result<DepartmentInfo, WorkflowError> {
        let info = reference::department_info(name).ok_or_else(|| WorkflowError::NotFound {
            entity_type: "Department".into(),
            id: name.to_string(),
        })?;
        self.notifier.notify(Notification::info(format!(
            "Viewing {} department with {} doctors",
            info.name, info.doctor_count
        )));
        Ok(info)
    }
}
