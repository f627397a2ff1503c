use crate::models::record::AttendanceRecord;

/// Counts of qualifying (non-cancelled) records for one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub present: u32,
    pub total: u32,
}

impl Tally {
    pub fn new(present: u32, total: u32) -> Self {
        debug_assert!(present <= total);
        Self { present, total }
    }

    pub fn for_subject(records: &[AttendanceRecord], subject: &str) -> Self {
        records
            .iter()
            .filter(|r| r.is_for(subject) && r.status.is_qualifying())
            .fold(Tally::default(), |mut t, r| {
                t.total += 1;
                if r.status.is_present() {
                    t.present += 1;
                }
                t
            })
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// 100.0 when nothing has been recorded yet.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        f64::from(self.present) / f64::from(self.total) * 100.0
    }
}

/// Attendance percentage in [0, 100] for `subject`, ignoring cancelled classes.
pub fn percentage(records: &[AttendanceRecord], subject: &str) -> f64 {
    Tally::for_subject(records, subject).percentage()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::AttendanceStatus::{self, *};
    use chrono::NaiveDate;

    fn rec(subject: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), subject, status)
    }

    #[test]
    fn percentage_per_subject() {
        let records = vec![
            rec("Math", Present),
            rec("Math", Present),
            rec("Math", Absent),
            rec("Physics", Present),
        ];

        assert!((percentage(&records, "Math") - 66.666).abs() < 0.01);
        assert_eq!(percentage(&records, "Physics"), 100.0);
        assert_eq!(percentage(&records, "Chemistry"), 100.0);
    }

    #[test]
    fn all_present_is_one_hundred() {
        let records: Vec<_> = (0..7).map(|_| rec("Math", Present)).collect();
        assert_eq!(percentage(&records, "Math"), 100.0);
    }

    #[test]
    fn only_cancelled_counts_as_no_records() {
        let records = vec![rec("Math", Cancelled), rec("Math", Cancelled)];
        let t = Tally::for_subject(&records, "Math");
        assert!(t.is_empty());
        assert_eq!(t.percentage(), 100.0);
    }

    #[test]
    fn cancelled_records_do_not_change_the_ratio() {
        let mut records = vec![rec("Math", Present), rec("Math", Absent)];
        let before = Tally::for_subject(&records, "Math");
        records.push(rec("Math", Cancelled));
        records.insert(0, rec("Math", Cancelled));
        assert_eq!(Tally::for_subject(&records, "Math"), before);
    }
}
