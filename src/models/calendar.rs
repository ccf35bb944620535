use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::{DAYS_IN_CYCLE, MONTH_ABBREVIATIONS};

/// Days per month in the 365-day cycle (February never has a 29th)
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A (month, day) pair with the year stripped away.
///
/// Ordering is chronological: month first, then day. February 29 is not a
/// valid key, so every year maps onto the same 365 slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDayKey {
    pub month: u32,
    pub day: u32,
}

impl CalendarDayKey {
    /// Build a key, rejecting anything outside the 365-day cycle
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        if day == 0 || day > MONTH_LENGTHS[(month - 1) as usize] {
            return None;
        }
        Some(Self { month, day })
    }

    /// Key for a date, or `None` for February 29
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        Self::new(date.month(), date.day())
    }

    /// Zero-based position of this key in the canonical ordering
    pub fn day_of_year_index(&self) -> usize {
        let preceding: u32 = MONTH_LENGTHS[..(self.month - 1) as usize].iter().sum();
        (preceding + self.day - 1) as usize
    }

    pub fn month_abbreviation(&self) -> &'static str {
        MONTH_ABBREVIATIONS[(self.month - 1) as usize]
    }
}

impl fmt::Display for CalendarDayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:02}", self.month_abbreviation(), self.day)
    }
}

/// Is this date a leap day?
pub fn is_leap_day(date: NaiveDate) -> bool {
    date.month() == 2 && date.day() == 29
}

/// The canonical 365-day ordering, Jan 1 through Dec 31 without Feb 29.
///
/// Every positional series in the crate is indexed against this list.
pub fn canonical_calendar_days() -> Vec<CalendarDayKey> {
    let mut days = Vec::with_capacity(DAYS_IN_CYCLE);
    for (idx, &length) in MONTH_LENGTHS.iter().enumerate() {
        let month = idx as u32 + 1;
        for day in 1..=length {
            days.push(CalendarDayKey { month, day });
        }
    }
    days
}

/// Index of the first day of each month in the canonical ordering
pub fn month_start_indices() -> [usize; 12] {
    let mut starts = [0usize; 12];
    let mut offset = 0usize;
    for (idx, &length) in MONTH_LENGTHS.iter().enumerate() {
        starts[idx] = offset;
        offset += length as usize;
    }
    starts
}
