//! Appointment booking workflow: the step machine, its state and the
//! snapshots published to the presentation layer.

pub mod controller;
pub mod state;

pub use controller::BookingWorkflow;
pub use state::{demo_appointments, WorkflowSnapshot, WorkflowState};
