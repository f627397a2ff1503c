use crate::cli::parser::RecordAction;
use crate::config::Config;
use crate::core::check::CheckLogic;
use crate::errors::{AppError, AppResult};
use crate::models::status::AttendanceStatus;
use crate::store::Store;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::date;
use log::warn;

pub fn handle(action: &RecordAction, cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_config());

    match action {
        RecordAction::Check { quiet } => check(&store, *quiet),
        RecordAction::AddClass {
            subject,
            date,
            status,
        } => add_class(&store, subject, date, status.as_deref()),
        RecordAction::CancelClass { subject, date } => cancel_class(&store, subject, date),
    }
}

fn check(store: &Store, quiet: bool) -> AppResult<()> {
    let timetable = store.load_timetable()?;
    let mut data = store.load_attendance()?;
    let snapshot = data.clone();
    let today = date::today();

    if timetable.is_empty() && !quiet {
        warning(format!(
            "The timetable is empty. Add your classes to {}",
            store.timetable_path().display()
        ));
    }

    let mut prompter = Prompter::stdio();
    let report = match CheckLogic::run(&mut data, &timetable, today, &mut prompter) {
        Ok(report) => report,
        Err(e) => {
            // keep the days answered before the failure
            if data != snapshot {
                warn!("event=check_failed status=partial_save error={}", e);
                store.save_attendance(&data)?;
            }
            return Err(e);
        }
    };

    if report.changed() || report.watermark_moved {
        store.save_attendance(&data)?;
    }

    if quiet {
        return Ok(());
    }

    if report.postponed {
        info(format!(
            "Postponed. {} day(s) recorded so far; run 'record check' again to continue.",
            report.days_prompted
        ));
    }
    if report.today_already_recorded {
        info("Attendance for today has already been recorded.");
    }
    if report.changed() {
        success("Attendance data saved.");
    } else if !report.postponed && !report.today_already_recorded {
        info("Nothing to record.");
    }

    Ok(())
}

fn add_class(store: &Store, subject: &str, date_str: &str, status: Option<&str>) -> AppResult<()> {
    let d = date::parse_date_arg(date_str)?;

    let status = match status {
        Some(code) => {
            AttendanceStatus::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.into()))?
        }
        None => {
            let mut prompter = Prompter::stdio();
            match prompter.choose_status(
                &format!("Status for {} on {}", subject, d),
                AttendanceStatus::Present,
            )? {
                Some(s) => s,
                None => {
                    info("No status given, nothing recorded.");
                    return Ok(());
                }
            }
        }
    };

    if status == AttendanceStatus::Cancelled {
        info(format!(
            "Class for {} on {} is cancelled, nothing recorded.",
            subject, d
        ));
        return Ok(());
    }

    let mut data = store.load_attendance()?;
    data.push_record(d, subject, status);
    store.save_attendance(&data)?;

    success(format!("Added extra class for {} on {} ({})", subject, d, status));
    Ok(())
}

fn cancel_class(store: &Store, subject: &str, date_str: &str) -> AppResult<()> {
    let d = date::parse_date_arg(date_str)?;

    let mut data = store.load_attendance()?;
    data.cancel_class(d, subject);
    store.save_attendance(&data)?;

    success(format!("Cancelled {} on {}", subject, d));
    Ok(())
}
