//! Missed-day reconstruction: the school days since the watermark that still
//! need an attendance decision.

use crate::utils::date::{is_weekend, today};
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// Lazy, restartable sequence of days needing a decision.
///
/// Yields every weekday strictly after the watermark and strictly before
/// `today` that is not a holiday, in ascending order.
#[derive(Debug, Clone)]
pub struct MissedDays<'a> {
    next: Option<NaiveDate>,
    today: NaiveDate,
    holidays: &'a BTreeSet<NaiveDate>,
}

impl Iterator for MissedDays<'_> {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while let Some(day) = self.next {
            if day >= self.today {
                self.next = None;
                return None;
            }
            self.next = day.succ_opt();

            if !is_weekend(day) && !self.holidays.contains(&day) {
                return Some(day);
            }
        }
        None
    }
}

/// Days requiring attendance input since `last_processed`.
///
/// A missing watermark, or one before the semester start, is clamped to
/// `semester_start`: nothing before the semester can be missed.
pub fn missed_days<'a>(
    last_processed: Option<NaiveDate>,
    semester_start: NaiveDate,
    holidays: &'a BTreeSet<NaiveDate>,
    today: NaiveDate,
) -> MissedDays<'a> {
    let watermark = last_processed.map_or(semester_start, |d| d.max(semester_start));

    MissedDays {
        next: watermark.succ_opt(),
        today,
        holidays,
    }
}

/// Same as [`missed_days`] using the local calendar date as "today".
pub fn missed_days_until_today(
    last_processed: Option<NaiveDate>,
    semester_start: NaiveDate,
    holidays: &BTreeSet<NaiveDate>,
) -> MissedDays<'_> {
    missed_days(last_processed, semester_start, holidays, today())
}
