use crate::models::status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One subject's outcome on one calendar day.
///
/// Several records may share the same (date, subject) pair, e.g. an extra class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub subject: String,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(date: NaiveDate, subject: impl Into<String>, status: AttendanceStatus) -> Self {
        Self {
            date,
            subject: subject.into(),
            status,
        }
    }

    pub fn is_for(&self, subject: &str) -> bool {
        self.subject == subject
    }
}
