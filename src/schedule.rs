//! Bookable dates: the rolling window of days offered in the date picker.
//!
//! The window is always computed from "today" at call time and never
//! stored, so a session left open over midnight offers the new window.

use std::sync::Mutex;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::appointment::DATE_VALUE_FORMAT;

/// Display format of a date option, e.g. "Oct 20, 2026".
pub const DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";

/// Source of "today" for the booking window.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Manually controlled date, for hosts that simulate time and for tests.
#[derive(Debug)]
pub struct FixedClock {
    today: Mutex<NaiveDate>,
}

impl FixedClock {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    pub fn set(&self, today: NaiveDate) {
        match self.today.lock() {
            Ok(mut guard) => *guard = today,
            Err(poisoned) => *poisoned.into_inner() = today,
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        match self.today.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// One entry of the date picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOption {
    pub date: NaiveDate,
    /// Machine value, `yyyy-MM-dd`.
    pub value: String,
    /// Display label, `MMM dd, yyyy`.
    pub display: String,
}

impl DateOption {
    fn new(date: NaiveDate) -> Self {
        Self {
            date,
            value: date.format(DATE_VALUE_FORMAT).to_string(),
            display: date.format(DATE_DISPLAY_FORMAT).to_string(),
        }
    }
}

/// Lazy sequence of the `window` days following `today`.
///
/// Finite and restartable: clone it (or call [`available_dates`] again) to
/// iterate from the first day.
#[derive(Debug, Clone)]
pub struct AvailableDates {
    today: NaiveDate,
    next_offset: u32,
    window: u32,
}

impl Iterator for AvailableDates {
    type Item = DateOption;

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_offset < self.window {
            self.next_offset += 1;
            // Days past NaiveDate::MAX are silently dropped.
            if let Some(date) = self.today.checked_add_days(Days::new(u64::from(self.next_offset))) {
                return Some(DateOption::new(date));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.window - self.next_offset) as usize;
        (0, Some(remaining))
    }
}

/// The `window` days starting tomorrow, relative to `today`.
pub fn available_dates(today: NaiveDate, window: u32) -> AvailableDates {
    AvailableDates {
        today,
        next_offset: 0,
        window,
    }
}

/// Whether `date` is inside the window offered on `today`.
pub fn is_offered(today: NaiveDate, window: u32, date: NaiveDate) -> bool {
    let days_ahead = (date - today).num_days();
    days_ahead >= 1 && days_ahead <= i64::from(window)
}
