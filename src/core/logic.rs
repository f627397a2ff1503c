use crate::core::calculator::{
    COMPLIANCE_THRESHOLD, Tally, Threshold, is_compliant, missable_for, needed_for,
};
use crate::models::record::AttendanceRecord;
use crate::models::subject_summary::SubjectSummary;

pub struct Core;

impl Core {
    pub fn summarize_subject(
        records: &[AttendanceRecord],
        subject: &str,
        threshold: Threshold,
    ) -> SubjectSummary {
        let tally = Tally::for_subject(records, subject);

        SubjectSummary {
            subject: subject.to_string(),
            present: tally.present,
            total: tally.total,
            percentage: tally.percentage(),
            needed: needed_for(tally, threshold),
            missable: missable_for(tally, threshold),
            compliant: is_compliant(tally, threshold),
        }
    }

    /// One summary per subject, in the iteration order of `subjects`.
    pub fn build_summary<'a, I>(records: &[AttendanceRecord], subjects: I) -> Vec<SubjectSummary>
    where
        I: IntoIterator<Item = &'a String>,
    {
        subjects
            .into_iter()
            .map(|s| Self::summarize_subject(records, s, COMPLIANCE_THRESHOLD))
            .collect()
    }
}
