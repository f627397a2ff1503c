use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of one class occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    Present,   // p
    Absent,    // a
    Cancelled, // c
}

impl AttendanceStatus {
    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "p",
            AttendanceStatus::Absent => "a",
            AttendanceStatus::Cancelled => "c",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Cancelled => "cancelled",
        }
    }

    /// Accepts the one-letter code or the full word, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "p" | "present" => Some(AttendanceStatus::Present),
            "a" | "absent" => Some(AttendanceStatus::Absent),
            "c" | "cancelled" | "canceled" => Some(AttendanceStatus::Cancelled),
            _ => None,
        }
    }

    /// Cancelled classes never took place and don't count towards the ratio.
    pub fn is_qualifying(&self) -> bool {
        !matches!(self, AttendanceStatus::Cancelled)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, AttendanceStatus::Present)
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
