// Copyright 2025 Cowboy AI, LLC.

//! Exact durations and calendar spans.
//!
//! `chrono::Duration` covers exact (clock) intervals; [`CalendarSpan`] covers
//! the calendar-aware year/month/day kind, where "one month" means a
//! different number of days depending on where it lands.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{PrimerError, PrimerResult};

/// A calendar-aware span of years, months, and days.
///
/// Components are held as given, not normalized against each other, so
/// `1 month minus 15 days` stays `{0y, 1mo, -15d}` — the meaning of the day
/// component depends on the date the span is eventually applied to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarSpan {
    /// Whole years
    pub years: i32,
    /// Whole months, may exceed 12 until normalized by [`between`](Self::between)
    pub months: i32,
    /// Whole days
    pub days: i64,
}

impl CalendarSpan {
    /// A span with the given components
    pub fn new(years: i32, months: i32, days: i64) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A span of days only
    pub fn of_days(days: i64) -> Self {
        Self::new(0, 0, days)
    }

    /// A span of months only
    pub fn of_months(months: i32) -> Self {
        Self::new(0, months, 0)
    }

    /// A span of years only
    pub fn of_years(years: i32) -> Self {
        Self::new(years, 0, 0)
    }

    /// The normalized calendar span from `start` to `end`; negative in every
    /// component when `end` is earlier.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        if end < start {
            return -Self::between(end, start);
        }

        let mut months =
            (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        let mut anchor = shift_months(start, months);
        if anchor > end {
            months -= 1;
            anchor = shift_months(start, months);
        }
        let days = (end - anchor).num_days();

        Self::new(months / 12, months % 12, days)
    }

    /// Add months to the month component
    pub fn plus_months(mut self, months: i32) -> Self {
        self.months += months;
        self
    }

    /// Add days to the day component
    pub fn plus_days(mut self, days: i64) -> Self {
        self.days += days;
        self
    }

    /// Component-wise difference of two spans
    pub fn minus(self, other: Self) -> Self {
        Self::new(
            self.years - other.years,
            self.months - other.months,
            self.days - other.days,
        )
    }

    /// Apply the span to a date: years and months first (clamped to valid
    /// month ends), then days.
    pub fn added_to(self, date: NaiveDate) -> PrimerResult<NaiveDate> {
        let total_months = self.years * 12 + self.months;
        let shifted = checked_shift_months(date, total_months)
            .ok_or_else(|| PrimerError::invalid_datetime(format!("{date} {total_months:+}mo")))?;
        let with_days = if self.days >= 0 {
            shifted.checked_add_days(chrono::Days::new(self.days as u64))
        } else {
            shifted.checked_sub_days(chrono::Days::new(self.days.unsigned_abs()))
        };
        with_days.ok_or_else(|| {
            PrimerError::invalid_datetime(format!("{shifted} {:+}d", self.days))
        })
    }
}

impl std::ops::Neg for CalendarSpan {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.years, -self.months, -self.days)
    }
}

fn checked_shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

// Inside `between` the shifted anchor always lies between the two input
// dates, so the checked arithmetic cannot actually fail; fall back to the
// input to keep this total.
fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    checked_shift_months(date, months).unwrap_or(date)
}
