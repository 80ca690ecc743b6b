//! Static reference data for the booking form: departments, the doctors
//! working in each, and the bookable time slots.
//!
//! Read-only for the lifetime of the process, so everything here is
//! `'static` and shared without synchronisation.

use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════
// Constants: Departments, Doctors, Time slots
// ═══════════════════════════════════════════

pub const DEPARTMENTS: &[&str] = &[
    "Cardiology",
    "Neurology",
    "Pediatrics",
    "Orthopedics",
    "Dermatology",
];

pub fn doctors_for(department: &str) -> &'static [&'static str] {
    match department {
        "Cardiology" => &["Dr. Sarah Johnson", "Dr. Robert Williams"],
        "Neurology" => &["Dr. Michael Chen", "Dr. Emily Parker"],
        "Pediatrics" => &["Dr. James Wilson", "Dr. Maria Rodriguez"],
        "Orthopedics" => &["Dr. David Thompson", "Dr. Lisa Crawford"],
        "Dermatology" => &["Dr. Jessica Lee", "Dr. Thomas Brown"],
        _ => &[],
    }
}

pub const TIME_SLOTS: &[&str] = &[
    "9:00 AM", "9:30 AM", "10:00 AM", "10:30 AM",
    "11:00 AM", "11:30 AM", "1:00 PM", "1:30 PM",
    "2:00 PM", "2:30 PM", "3:00 PM", "3:30 PM",
    "4:00 PM", "4:30 PM",
];

pub fn is_department(name: &str) -> bool {
    DEPARTMENTS.contains(&name)
}

pub fn is_doctor_in(department: &str, doctor: &str) -> bool {
    doctors_for(department).contains(&doctor)
}

pub fn is_time_slot(time: &str) -> bool {
    TIME_SLOTS.contains(&time)
}

// ═══════════════════════════════════════════
// Department directory
// ═══════════════════════════════════════════

/// Department card for the directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentInfo {
    pub id: u32,
    pub name: String,
    pub doctor_count: usize,
    pub doctors: Vec<String>,
}

pub fn department_info(name: &str) -> Option<DepartmentInfo> {
    let index = DEPARTMENTS.iter().position(|d| *d == name)?;
    let doctors = doctors_for(name);
    Some(DepartmentInfo {
        id: index as u32 + 1,
        name: name.to_string(),
        doctor_count: doctors.len(),
        doctors: doctors.iter().map(|d| d.to_string()).collect(),
    })
}

pub fn department_directory() -> Vec<DepartmentInfo> {
    DEPARTMENTS.iter().filter_map(|d| department_info(d)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_departments() {
        assert_eq!(DEPARTMENTS.len(), 5);
    }

    #[test]
    fn every_department_has_two_doctors() {
        for dept in DEPARTMENTS {
            assert_eq!(doctors_for(dept).len(), 2, "{dept}");
        }
    }

    #[test]
    fn unknown_department_has_no_doctors() {
        assert!(doctors_for("Radiology").is_empty());
        assert!(doctors_for("").is_empty());
    }

    #[test]
    fn doctors_belong_to_exactly_one_department() {
        for dept in DEPARTMENTS {
            for doctor in doctors_for(dept) {
                let owners = DEPARTMENTS.iter().filter(|d| is_doctor_in(d, doctor)).count();
                assert_eq!(owners, 1, "{doctor}");
            }
        }
    }

    #[test]
    fn sarah_johnson_is_cardiology_only() {
        assert!(is_doctor_in("Cardiology", "Dr. Sarah Johnson"));
        assert!(!is_doctor_in("Neurology", "Dr. Sarah Johnson"));
    }

    #[test]
    fn fourteen_time_slots_skip_lunch() {
        assert_eq!(TIME_SLOTS.len(), 14);
        assert!(is_time_slot("9:00 AM"));
        assert!(is_time_slot("4:30 PM"));
        assert!(!is_time_slot("12:00 PM"));
        assert!(!is_time_slot("5:00 PM"));
    }

    #[test]
    fn directory_ids_follow_listing_order() {
        let directory = department_directory();
        assert_eq!(directory.len(), 5);
        assert_eq!(directory[0].id, 1);
        assert_eq!(directory[0].name, "Cardiology");
        assert_eq!(directory[4].name, "Dermatology");
        assert!(directory.iter().all(|d| d.doctor_count == 2));
    }

    #[test]
    fn department_info_unknown_is_none() {
        assert!(department_info("Radiology").is_none());
        assert!(is_department("Pediatrics"));
        assert!(!is_department("pediatrics"));
    }
}
