use serde::{Deserialize, Serialize};

/// Application-level constants
pub const APP_NAME: &str = "MediSync";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of bookable days offered, starting tomorrow.
pub const BOOKING_WINDOW_DAYS: u32 = 14;

/// Maximum length of the free-text notes field, in characters.
pub const NOTES_MAX_LEN: usize = 200;

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    "medisync_lib=info"
}

/// Tunables for a booking workflow instance.
///
/// Every field has a default, so a host can deserialize a partial JSON
/// object (or none at all) and get a working configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    pub booking_window_days: u32,
    pub notes_max_len: usize,
    /// Start with the two demo appointments (John Doe, Alice Smith).
    pub seed_demo_appointments: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            booking_window_days: BOOKING_WINDOW_DAYS,
            notes_max_len: NOTES_MAX_LEN,
            seed_demo_appointments: false,
        }
    }
}

impl BookingConfig {
    /// Configuration matching the public demo: seeded appointment list.
    pub fn demo() -> Self {
        Self {
            seed_demo_appointments: true,
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
