use crate::models::record::AttendanceRecord;
use crate::models::semester::SemesterWindow;
use crate::models::status::AttendanceStatus;
use chrono::NaiveDate;
use std::collections::BTreeSet;

/// The mutable attendance bundle: records, holidays and the semester window.
/// Loaded wholesale, mutated in memory, persisted wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttendanceData {
    pub records: Vec<AttendanceRecord>,
    pub holidays: BTreeSet<NaiveDate>,
    pub semester: SemesterWindow,
    /// Last date through which `record check` has fully processed attendance.
    pub watermark: Option<NaiveDate>,
}

impl AttendanceData {
    /// The watermark, falling back to the semester start.
    pub fn last_processed(&self) -> Option<NaiveDate> {
        self.watermark.or(self.semester.start)
    }

    /// Move the watermark forward to `day`; it never moves back.
    /// Returns true when it moved.
    pub fn advance_watermark(&mut self, day: NaiveDate) -> bool {
        if self.watermark.is_some_and(|w| w >= day) {
            return false;
        }
        self.watermark = Some(day);
        true
    }

    /// Latest date with any record.
    pub fn latest_record_date(&self) -> Option<NaiveDate> {
        self.records.iter().map(|r| r.date).max()
    }

    pub fn records_on(&self, date: NaiveDate) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.iter().filter(move |r| r.date == date)
    }

    /// Subjects from `scheduled` that have no record on `date` yet.
    pub fn unrecorded_subjects(&self, date: NaiveDate, scheduled: &[String]) -> Vec<String> {
        scheduled
            .iter()
            .filter(|s| !self.records_on(date).any(|r| r.is_for(s)))
            .cloned()
            .collect()
    }

    pub fn push_record(&mut self, date: NaiveDate, subject: &str, status: AttendanceStatus) {
        self.records.push(AttendanceRecord::new(date, subject, status));
    }

    /// Returns false when the date was already a holiday.
    pub fn add_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.insert(date)
    }

    /// Returns false when the date was not a holiday.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> bool {
        self.holidays.remove(&date)
    }

    /// Mark the first matching class as cancelled, or append a cancelled record.
    /// Returns true when an existing record was updated.
    pub fn cancel_class(&mut self, date: NaiveDate, subject: &str) -> bool {
        match self
            .records
            .iter_mut()
            .find(|r| r.date == date && r.is_for(subject))
        {
            Some(record) => {
                record.status = AttendanceStatus::Cancelled;
                true
            }
            None => {
                self.push_record(date, subject, AttendanceStatus::Cancelled);
                false
            }
        }
    }

    /// Every subject that appears in the records.
    pub fn recorded_subjects(&self) -> BTreeSet<String> {
        self.records.iter().map(|r| r.subject.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn last_processed_ignores_records() {
        let mut data = AttendanceData::default();
        assert_eq!(data.last_processed(), None);

        data.semester.start = Some(d("2026-01-05"));
        assert_eq!(data.last_processed(), Some(d("2026-01-05")));

        data.push_record(d("2026-01-09"), "Math", AttendanceStatus::Present);
        assert_eq!(data.last_processed(), Some(d("2026-01-05")));
        assert_eq!(data.latest_record_date(), Some(d("2026-01-09")));

        assert!(data.advance_watermark(d("2026-01-07")));
        assert!(!data.advance_watermark(d("2026-01-06")));
        assert_eq!(data.last_processed(), Some(d("2026-01-07")));
    }

    #[test]
    fn cancel_class_updates_first_match_or_appends() {
        let mut data = AttendanceData::default();
        data.push_record(d("2026-01-06"), "Math", AttendanceStatus::Present);
        data.push_record(d("2026-01-06"), "Math", AttendanceStatus::Present);

        assert!(data.cancel_class(d("2026-01-06"), "Math"));
        assert_eq!(data.records[0].status, AttendanceStatus::Cancelled);
        assert_eq!(data.records[1].status, AttendanceStatus::Present);

        assert!(!data.cancel_class(d("2026-01-07"), "Physics"));
        assert_eq!(data.records.len(), 3);
        assert_eq!(data.records[2].status, AttendanceStatus::Cancelled);
    }

    #[test]
    fn unrecorded_subjects_is_per_subject() {
        let mut data = AttendanceData::default();
        data.push_record(d("2026-01-06"), "Math", AttendanceStatus::Present);
        let scheduled = vec!["Math".to_string(), "Physics".to_string()];
        assert_eq!(data.unrecorded_subjects(d("2026-01-06"), &scheduled), ["Physics"]);
        assert_eq!(data.unrecorded_subjects(d("2026-01-07"), &scheduled).len(), 2);
    }

    #[test]
    fn holidays_are_deduplicated() {
        let mut data = AttendanceData::default();
        assert!(data.add_holiday(d("2026-01-06")));
        assert!(!data.add_holiday(d("2026-01-06")));
        assert!(data.remove_holiday(d("2026-01-06")));
        assert!(!data.remove_holiday(d("2026-01-06")));
    }
}
