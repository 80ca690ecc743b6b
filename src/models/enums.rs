use serde::{Deserialize, Serialize};

use crate::error::WorkflowError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The wire form (serde and `as_str`) is the literal given per variant.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = WorkflowError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(WorkflowError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(AppointmentType {
    Regular => "regular",
    FollowUp => "follow-up",
    Emergency => "emergency",
});

str_enum!(AppointmentStatus {
    Scheduled => "scheduled",
});

str_enum!(Severity {
    Success => "success",
    Error => "error",
    Info => "info",
});

str_enum!(Step {
    Contact => "contact",
    Details => "details",
    Confirmation => "confirmation",
});

str_enum!(FieldName {
    Name => "name",
    Email => "email",
    Phone => "phone",
    Department => "department",
    Doctor => "doctor",
    Date => "date",
    Time => "time",
    Notes => "notes",
    Type => "type",
});

impl Default for AppointmentType {
    fn default() -> Self {
        Self::Regular
    }
}

impl AppointmentType {
    /// Label shown on the appointment type picker.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Regular => "Regular Visit",
            Self::FollowUp => "Follow-up",
            Self::Emergency => "Emergency",
        }
    }
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        Self::Scheduled
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::Contact
    }
}

impl Step {
    /// 1-based position in the booking flow.
    pub fn number(&self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Details => 2,
            Self::Confirmation => 3,
        }
    }

    /// Fields that must be filled before leaving this step.
    pub fn required_fields(&self) -> &'static [FieldName] {
        match self {
            Self::Contact => &[FieldName::Name, FieldName::Email, FieldName::Phone],
            Self::Details => &[
                FieldName::Department,
                FieldName::Doctor,
                FieldName::Date,
                FieldName::Time,
            ],
            Self::Confirmation => &[],
        }
    }
}

impl FieldName {
    /// Human-readable label used in validation messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Phone => "Phone number",
            Self::Department => "Department",
            Self::Doctor => "Doctor",
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Notes => "Notes",
            Self::Type => "Appointment type",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn appointment_type_round_trip() {
        for t in AppointmentType::ALL {
            assert_eq!(AppointmentType::from_str(t.as_str()).unwrap(), *t);
        }
    }

    #[test]
    fn appointment_type_defaults_to_regular() {
        assert_eq!(AppointmentType::default(), AppointmentType::Regular);
    }

    #[test]
    fn follow_up_uses_hyphenated_wire_form() {
        let json = serde_json::to_string(&AppointmentType::FollowUp).unwrap();
        assert_eq!(json, "\"follow-up\"");
        let back: AppointmentType = serde_json::from_str("\"follow-up\"").unwrap();
        assert_eq!(back, AppointmentType::FollowUp);
    }

    #[test]
    fn unknown_type_is_invalid_enum() {
        let err = AppointmentType::from_str("urgent").unwrap_err();
        assert_eq!(
            err,
            WorkflowError::InvalidEnum {
                field: "AppointmentType".into(),
                value: "urgent".into(),
            }
        );
    }

    #[test]
    fn field_name_parses_form_keys() {
        assert_eq!(FieldName::from_str("department").unwrap(), FieldName::Department);
        assert_eq!(FieldName::from_str("type").unwrap(), FieldName::Type);
        assert!(FieldName::from_str("status").is_err());
        assert_eq!(FieldName::ALL.len(), 9);
    }

    #[test]
    fn steps_are_numbered_in_order() {
        let numbers: Vec<u8> = Step::ALL.iter().map(Step::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(Step::default(), Step::Contact);
    }

    #[test]
    fn required_fields_per_step() {
        assert_eq!(
            Step::Contact.required_fields(),
            &[FieldName::Name, FieldName::Email, FieldName::Phone]
        );
        assert_eq!(Step::Details.required_fields().len(), 4);
        assert!(Step::Confirmation.required_fields().is_empty());
    }

    #[test]
    fn labels_are_human_readable() {
        assert_eq!(FieldName::Phone.label(), "Phone number");
        assert_eq!(AppointmentType::Emergency.label(), "Emergency");
        assert_eq!(Severity::Success.to_string(), "success");
    }
}
