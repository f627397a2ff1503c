use crate::errors::{AppError, AppResult};
use crate::utils::date::weekday_name;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::{BTreeMap, BTreeSet};

/// Weekly schedule: the ordered subjects held on each weekday.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timetable {
    days: [Vec<String>; 7],
}

impl Timetable {
    /// Build from the raw document mapping (weekday name → subjects).
    /// Weekday names are matched case-insensitively; short forms are accepted.
    pub fn from_document(raw: &BTreeMap<String, Vec<String>>) -> AppResult<Self> {
        let mut timetable = Timetable::default();

        for (key, subjects) in raw {
            let weekday = key
                .trim()
                .parse::<Weekday>()
                .map_err(|_| AppError::InvalidTimetable(format!("unknown weekday '{}'", key)))?;

            timetable.days[weekday.num_days_from_monday() as usize].extend(
                subjects
                    .iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty()),
            );
        }

        Ok(timetable)
    }

    pub fn set_day(&mut self, weekday: Weekday, subjects: Vec<String>) {
        self.days[weekday.num_days_from_monday() as usize] = subjects;
    }

    pub fn subjects_on(&self, weekday: Weekday) -> &[String] {
        &self.days[weekday.num_days_from_monday() as usize]
    }

    pub fn subjects_for(&self, date: NaiveDate) -> &[String] {
        self.subjects_on(date.weekday())
    }

    /// Every distinct subject in the week, sorted.
    pub fn all_subjects(&self) -> BTreeSet<String> {
        self.days.iter().flatten().cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(|d| d.is_empty())
    }

    /// Weekdays in calendar order with their subjects (empty days included).
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &[String])> {
        WEEK.iter().map(|wd| (weekday_name(*wd), self.subjects_on(*wd)))
    }
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];
