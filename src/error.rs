use thiserror::Error;

use crate::models::enums::Step;
use crate::validation::ValidationErrors;

/// Errors returned by booking workflow operations.
///
/// None of these are fatal: the workflow stays usable and the appointment
/// list is left untouched whenever one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Cannot {action} from the {} step", .step.as_str())]
    InvalidTransition { step: Step, action: &'static str },

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

impl WorkflowError {
    /// Per-field messages when this is a validation failure.
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
