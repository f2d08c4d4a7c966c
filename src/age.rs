//! age.rs
//!
//! Elapsed age in whole years, months and days.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from previous month)
//!   • leap years
//!   • varying month lengths

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::calendar::{CalendarDate, days_in_month, previous_month};

/// Years, months and days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Age of someone born on `birthdate` as of `today`.
///
/// `birthdate` must not be after `today`; the validator guarantees this and
/// it is not re-checked here. With a later birthdate the result is meaningless.
pub fn calculate_age(birthdate: CalendarDate, today: CalendarDate) -> AgeResult {
    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow by borrowing whole months, starting with the one
    // before `today`'s month. A second borrow is only needed when that month
    // is shorter than the birth day (e.g. Jan 31 → Mar 1).
    let (mut borrow_year, mut borrow_month) = (today.year(), today.month());
    while days < 0 {
        months -= 1;
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        days += days_in_month(borrow_year, borrow_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    trace!(%birthdate, %today, years, months, days, "computed age");
    AgeResult {
        years,
        months,
        days,
    }
}

impl fmt::Display for AgeResult {
    /// Human age string: "X years, Y months, Z days".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: i32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
