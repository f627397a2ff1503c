//! `record check`: backfill missed school days and handle today.

use crate::core::reconstruct::missed_days;
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceData;
use crate::models::status::AttendanceStatus;
use crate::models::timetable::Timetable;
use crate::utils::date::is_weekend;
use chrono::NaiveDate;
use log::{debug, info};

/// What the user decided for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayDecision {
    Holiday,
    AllPresent,
    AllAbsent,
    PerSubject(Vec<(String, AttendanceStatus)>),
    /// Stop asking for this run; what was collected so far is kept.
    Postpone,
}

impl DayDecision {
    fn label(&self) -> &'static str {
        match self {
            DayDecision::Holiday => "holiday",
            DayDecision::AllPresent => "all_present",
            DayDecision::AllAbsent => "all_absent",
            DayDecision::PerSubject(_) => "per_subject",
            DayDecision::Postpone => "postpone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Postpone,
}

/// Source of per-day decisions (interactive prompt, scripted input, ...).
pub trait DayDecider {
    fn decide(&mut self, day: NaiveDate, subjects: &[String]) -> AppResult<DayDecision>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub days_prompted: usize,
    pub records_added: usize,
    pub holidays_added: usize,
    pub postponed: bool,
    pub today_already_recorded: bool,
    /// The processed-through date moved, even if nothing was recorded.
    pub watermark_moved: bool,
}

impl CheckReport {
    pub fn changed(&self) -> bool {
        self.records_added > 0 || self.holidays_added > 0
    }
}

pub struct CheckLogic;

impl CheckLogic {
    /// Reject the run before anything is touched.
    pub fn preconditions(data: &AttendanceData, today: NaiveDate) -> AppResult<NaiveDate> {
        let start = data.semester.start.ok_or(AppError::StartDateNotSet)?;

        if let Some(end) = data.semester.end
            && today > end
        {
            return Err(AppError::SemesterEnded(end.to_string()));
        }

        Ok(start)
    }

    /// Ask `decider` about every missed day and about today, applying each
    /// answer to `data` as it comes in.
    ///
    /// On a decider error the answers already applied stay in `data`, so the
    /// caller may still persist them.
    pub fn run<D: DayDecider>(
        data: &mut AttendanceData,
        timetable: &Timetable,
        today: NaiveDate,
        decider: &mut D,
    ) -> AppResult<CheckReport> {
        let start = Self::preconditions(data, today)?;
        let mut report = CheckReport::default();

        let pending: Vec<NaiveDate> =
            missed_days(data.last_processed(), start, &data.holidays, today)
                .filter(|day| data.semester.contains(*day))
                .collect();

        debug!(
            "event=check_start today={} watermark={:?} missed_days={}",
            today,
            data.last_processed(),
            pending.len()
        );

        for day in pending {
            let remaining = data.unrecorded_subjects(day, timetable.subjects_for(day));
            if !remaining.is_empty()
                && Self::ask(data, day, &remaining, decider, &mut report)? == Flow::Postpone
            {
                return Ok(report);
            }
            Self::advance(data, start, day, &mut report);
        }

        // every day before today has now been handled
        if let Some(yesterday) = today.pred_opt() {
            Self::advance(data, start, yesterday, &mut report);
        }

        let mut today_done = true;
        if Self::is_school_day(data, today) {
            let remaining = data.unrecorded_subjects(today, timetable.subjects_for(today));
            if remaining.is_empty() {
                report.today_already_recorded = !timetable.subjects_for(today).is_empty();
            } else {
                today_done =
                    Self::ask(data, today, &remaining, decider, &mut report)? == Flow::Continue;
            }
        }
        if today_done && data.semester.contains(today) {
            Self::advance(data, start, today, &mut report);
        }

        info!(
            "event=check_done status=ok prompted={} records={} holidays={} postponed={}",
            report.days_prompted, report.records_added, report.holidays_added, report.postponed
        );

        Ok(report)
    }

    fn advance(
        data: &mut AttendanceData,
        start: NaiveDate,
        day: NaiveDate,
        report: &mut CheckReport,
    ) {
        if day >= start && data.advance_watermark(day) {
            report.watermark_moved = true;
        }
    }

    fn is_school_day(data: &AttendanceData, day: NaiveDate) -> bool {
        !is_weekend(day) && !data.holidays.contains(&day) && data.semester.contains(day)
    }

    fn ask<D: DayDecider>(
        data: &mut AttendanceData,
        day: NaiveDate,
        subjects: &[String],
        decider: &mut D,
        report: &mut CheckReport,
    ) -> AppResult<Flow> {
        let decision = decider.decide(day, subjects)?;
        info!("event=check_day date={} decision={}", day, decision.label());

        if decision != DayDecision::Postpone {
            report.days_prompted += 1;
        }

        let (records_before, holidays_before) = (data.records.len(), data.holidays.len());
        let flow = apply_decision(data, day, subjects, decision);

        report.records_added += data.records.len() - records_before;
        report.holidays_added += data.holidays.len() - holidays_before;
        match flow {
            Flow::Postpone => report.postponed = true,
            Flow::Continue => {}
        }

        Ok(flow)
    }
}

/// Apply one day's decision to the attendance bundle.
pub fn apply_decision(
    data: &mut AttendanceData,
    day: NaiveDate,
    subjects: &[String],
    decision: DayDecision,
) -> Flow {
    match decision {
        DayDecision::Holiday => {
            data.add_holiday(day);
        }
        DayDecision::AllPresent => {
            for s in subjects {
                data.push_record(day, s, AttendanceStatus::Present);
            }
        }
        DayDecision::AllAbsent => {
            for s in subjects {
                data.push_record(day, s, AttendanceStatus::Absent);
            }
        }
        DayDecision::PerSubject(outcomes) => {
            for (s, status) in outcomes {
                data.push_record(day, &s, status);
            }
        }
        DayDecision::Postpone => return Flow::Postpone,
    }
    Flow::Continue
}
