use crate::core::calculator::tally::Tally;
use crate::models::record::AttendanceRecord;

const BASIS: i64 = 10_000;

/// Minimum attendance ratio, stored as basis points (7500 = 75%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(u32);

/// Fixed compliance threshold of the tool: 75%.
pub const COMPLIANCE_THRESHOLD: Threshold = Threshold(7_500);

impl Threshold {
    /// Accepts ratios strictly between 0 and 1, rounded to the nearest basis point.
    pub fn from_ratio(ratio: f64) -> Option<Self> {
        let bp = (ratio * BASIS as f64).round();
        if bp >= 1.0 && bp < BASIS as f64 {
            Some(Threshold(bp as u32))
        } else {
            None
        }
    }

    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / BASIS as f64
    }

    pub fn percent(&self) -> f64 {
        self.ratio() * 100.0
    }

    fn bp(&self) -> i64 {
        i64::from(self.0)
    }

    /// present / total >= threshold, exact.
    fn is_met(&self, present: i64, total: i64) -> bool {
        total == 0 || BASIS * present >= self.bp() * total
    }
}

pub fn is_compliant(tally: Tally, threshold: Threshold) -> bool {
    threshold.is_met(tally.present.into(), tally.total.into())
}

/// Smallest `x` such that `(present + x) / (total + x) >= threshold`.
///
/// x = ceil((t·total − present) / (1 − t)), with t = bp / BASIS:
/// ceil((bp·total − BASIS·present) / (BASIS − bp)).
pub fn needed_for(tally: Tally, threshold: Threshold) -> u32 {
    if tally.is_empty() || is_compliant(tally, threshold) {
        return 0;
    }

    let num = threshold.bp() * i64::from(tally.total) - BASIS * i64::from(tally.present);
    let den = BASIS - threshold.bp();

    // num > 0 and den > 0 here, so integer ceil is exact.
    u32::try_from((num + den - 1) / den).unwrap_or(u32::MAX)
}

/// Largest `m` such that `present / (total + m) >= threshold`.
///
/// m = floor(present / t − total) = floor((BASIS·present − bp·total) / bp).
pub fn missable_for(tally: Tally, threshold: Threshold) -> u32 {
    if !is_compliant(tally, threshold) {
        return 0;
    }

    let num = BASIS * i64::from(tally.present) - threshold.bp() * i64::from(tally.total);
    if num <= 0 {
        return 0;
    }

    u32::try_from(num / threshold.bp()).unwrap_or(u32::MAX)
}

pub fn classes_needed(records: &[AttendanceRecord], subject: &str) -> u32 {
    classes_needed_with(records, subject, COMPLIANCE_THRESHOLD)
}

pub fn classes_needed_with(
    records: &[AttendanceRecord],
    subject: &str,
    threshold: Threshold,
) -> u32 {
    needed_for(Tally::for_subject(records, subject), threshold)
}

pub fn classes_missable(records: &[AttendanceRecord], subject: &str) -> u32 {
    classes_missable_with(records, subject, COMPLIANCE_THRESHOLD)
}

pub fn classes_missable_with(
    records: &[AttendanceRecord],
    subject: &str,
    threshold: Threshold,
) -> u32 {
    missable_for(Tally::for_subject(records, subject), threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::status::AttendanceStatus::{self, *};
    use chrono::NaiveDate;

    fn rec(subject: &str, status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord::new(NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(), subject, status)
    }

    fn ratio_ok(present: u32, total: u32) -> bool {
        // present / total >= 0.75
        4 * present >= 3 * total
    }

    #[test]
    fn half_attendance_needs_four_more() {
        let records = vec![
            rec("Math", Present),
            rec("Math", Present),
            rec("Math", Absent),
            rec("Math", Absent),
        ];
        assert_eq!(classes_needed(&records, "Math"), 4);
        assert_eq!(classes_missable(&records, "Math"), 0);
    }

    #[test]
    fn exactly_at_threshold_needs_nothing() {
        let records = vec![
            rec("Physics", Present),
            rec("Physics", Present),
            rec("Physics", Present),
            rec("Physics", Absent),
        ];
        assert_eq!(classes_needed(&records, "Physics"), 0);
        assert_eq!(classes_missable(&records, "Physics"), 0);
    }

    #[test]
    fn exact_need_is_not_rounded_up() {
        // 0 of 1: (0.75 - 0) / 0.25 = 3.0 exactly
        let t = Tally::new(0, 1);
        assert_eq!(needed_for(t, COMPLIANCE_THRESHOLD), 3);
    }

    #[test]
    fn no_records_needs_nothing() {
        let records = vec![rec("Math", Cancelled)];
        assert_eq!(classes_needed(&records, "Math"), 0);
        assert_eq!(classes_needed(&records, "Art"), 0);
        assert_eq!(classes_missable(&records, "Art"), 0);
    }

    #[test]
    fn perfect_record_can_skip_a_third() {
        // 6 / (6 + 2) = 0.75, 6 / 9 < 0.75
        let records: Vec<_> = (0..6).map(|_| rec("Math", Present)).collect();
        assert_eq!(classes_missable(&records, "Math"), 2);
    }

    #[test]
    fn needed_is_minimal_for_all_small_tallies() {
        for total in 1..=60u32 {
            for present in 0..=total {
                let x = needed_for(Tally::new(present, total), COMPLIANCE_THRESHOLD);
                assert!(ratio_ok(present + x, total + x), "{present}/{total} x={x}");
                if x > 0 {
                    assert!(
                        !ratio_ok(present + x - 1, total + x - 1),
                        "{present}/{total} x={x} not minimal"
                    );
                }
            }
        }
    }

    #[test]
    fn missable_is_tight_for_all_compliant_tallies() {
        for total in 1..=60u32 {
            for present in 0..=total {
                if !ratio_ok(present, total) {
                    assert_eq!(missable_for(Tally::new(present, total), COMPLIANCE_THRESHOLD), 0);
                    continue;
                }
                let m = missable_for(Tally::new(present, total), COMPLIANCE_THRESHOLD);
                assert!(ratio_ok(present, total + m), "{present}/{total} m={m}");
                assert!(!ratio_ok(present, total + m + 1), "{present}/{total} m={m} not tight");
            }
        }
    }

    #[test]
    fn cancelled_records_are_a_no_op() {
        let mut records = vec![rec("Math", Present), rec("Math", Absent), rec("Math", Absent)];
        let needed = classes_needed(&records, "Math");
        let missable = classes_missable(&records, "Math");

        records.push(rec("Math", Cancelled));
        records.push(rec("Math", Cancelled));

        assert_eq!(classes_needed(&records, "Math"), needed);
        assert_eq!(classes_missable(&records, "Math"), missable);
    }

    #[test]
    fn custom_threshold() {
        let half = Threshold::from_ratio(0.5).unwrap();
        // 1 of 4 → (1 + x) / (4 + x) >= 0.5 → x = 2
        assert_eq!(needed_for(Tally::new(1, 4), half), 2);
        // 4 of 4 → 4 / (4 + m) >= 0.5 → m = 4
        assert_eq!(missable_for(Tally::new(4, 4), half), 4);
        assert!(Threshold::from_ratio(1.0).is_none());
        assert!(Threshold::from_ratio(0.0).is_none());
    }
}
