//! On-disk document shapes.
//!
//! Every optional field carries a serde default, so older documents load
//! without ad hoc key checks. Documents written before versioning have no
//! `schema_version` and are read as version 0.
//!
//! Version 2 adds `last_processed_date`. Older documents have no watermark,
//! so it is derived once from the latest record date.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceData;
use crate::models::record::AttendanceRecord;
use crate::models::semester::SemesterWindow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

/// Weekday name → ordered subject list.
pub type TimetableDocument = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceDocument {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
    #[serde(default)]
    pub holidays: Vec<NaiveDate>,
    #[serde(default)]
    pub semester_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub semester_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub last_processed_date: Option<NaiveDate>,
}

impl Default for AttendanceDocument {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            records: Vec::new(),
            holidays: Vec::new(),
            semester_start_date: None,
            semester_end_date: None,
            last_processed_date: None,
        }
    }
}

impl AttendanceDocument {
    /// Validate the version and convert to the in-memory bundle.
    pub fn into_data(self, path: &str) -> AppResult<AttendanceData> {
        if self.schema_version > CURRENT_SCHEMA_VERSION {
            return Err(AppError::UnsupportedSchema {
                path: path.to_string(),
                found: self.schema_version,
                supported: CURRENT_SCHEMA_VERSION,
            });
        }

        let watermark = match self.last_processed_date {
            Some(d) => Some(d),
            None if self.schema_version < 2 => self.records.iter().map(|r| r.date).max(),
            None => None,
        };

        Ok(AttendanceData {
            watermark,
            records: self.records,
            holidays: self.holidays.into_iter().collect(),
            semester: SemesterWindow {
                start: self.semester_start_date,
                end: self.semester_end_date,
            },
        })
    }
}

impl From<&AttendanceData> for AttendanceDocument {
    fn from(data: &AttendanceData) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            records: data.records.clone(),
            holidays: data.holidays.iter().copied().collect(),
            semester_start_date: data.semester.start,
            semester_end_date: data.semester.end,
            last_processed_date: data.watermark,
        }
    }
}
