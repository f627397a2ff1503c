use chrono::NaiveDate;

/// Inclusive range during which attendance obligations exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SemesterWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SemesterWindow {
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        self.end.is_some_and(|end| today > end)
    }

    /// True when `day` lies inside the window. Unset bounds are open.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.is_none_or(|start| day >= start) && self.end.is_none_or(|end| day <= end)
    }
}

#[cfg(test)]
mod tests {
    use super::SemesterWindow;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn window_bounds_are_inclusive() {
        let w = SemesterWindow {
            start: Some(d("2026-01-05")),
            end: Some(d("2026-05-29")),
        };
        assert!(w.contains(d("2026-01-05")));
        assert!(w.contains(d("2026-05-29")));
        assert!(!w.contains(d("2026-01-04")));
        assert!(!w.has_ended(d("2026-05-29")));
        assert!(w.has_ended(d("2026-05-30")));
    }

    #[test]
    fn unset_end_never_ends() {
        let w = SemesterWindow {
            start: Some(d("2026-01-05")),
            end: None,
        };
        assert!(!w.has_ended(d("2030-01-01")));
        assert!(w.contains(d("2030-01-01")));
    }
}
