//! Formatting utilities used for CLI outputs.

use crate::models::status::AttendanceStatus;
use crate::models::subject_summary::SubjectSummary;
use ansi_term::Colour::{Green, Red, Yellow};

pub fn bold(s: &str) -> String {
    ansi_term::Style::new().bold().paint(s).to_string()
}

/// "66.67%", green when compliant, red otherwise.
pub fn colorize_percentage(summary: &SubjectSummary) -> String {
    let text = format!("{:.2}%", summary.percentage);
    if summary.compliant {
        Green.paint(text).to_string()
    } else {
        Red.paint(text).to_string()
    }
}

pub fn colorize_status(status: AttendanceStatus) -> String {
    match status {
        AttendanceStatus::Present => Green.paint(status.as_str()).to_string(),
        AttendanceStatus::Absent => Red.paint(status.as_str()).to_string(),
        AttendanceStatus::Cancelled => Yellow.paint(status.as_str()).to_string(),
    }
}

/// "" for zero so the table only shows what matters.
pub fn count_or_blank(n: u32) -> String {
    if n == 0 { String::new() } else { n.to_string() }
}
