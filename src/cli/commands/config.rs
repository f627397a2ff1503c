use crate::cli::parser::ConfigAction;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::semester::SemesterWindow;
use crate::store::Store;
use crate::ui::messages::success;
use crate::utils::date;

/// Handle the `config` subcommand
pub fn handle(action: &ConfigAction, cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_config());

    match action {
        ConfigAction::SetStartDate { date: date_str } => {
            let d = date::parse_date_arg(date_str)?;
            let mut data = store.load_attendance()?;

            let window = SemesterWindow {
                start: Some(d),
                ..data.semester
            };
            validate_window(&window)?;
            data.semester = window;
            store.save_attendance(&data)?;

            success(format!("Semester start date set to {}", d));
        }

        ConfigAction::SetEndDate { date: date_str } => {
            let d = date::parse_date_arg(date_str)?;
            let mut data = store.load_attendance()?;

            let window = SemesterWindow {
                end: Some(d),
                ..data.semester
            };
            validate_window(&window)?;
            data.semester = window;
            store.save_attendance(&data)?;

            success(format!("Semester end date set to {}", d));
        }

        ConfigAction::Show => {
            let data = store.load_attendance()?;
            let unset = || "(not set)".to_string();

            println!("📄 Configuration ({}):\n", cfg.loaded_from.display());
            print!("{}", serde_yaml::to_string(cfg)?);
            println!();
            println!("🗂️  Timetable  : {}", store.timetable_path().display());
            println!("🗂️  Attendance : {}", store.attendance_path().display());
            println!(
                "📅 Semester   : {} → {}",
                data.semester.start.map_or_else(unset, |d| d.to_string()),
                data.semester.end.map_or_else(unset, |d| d.to_string())
            );
        }
    }

    Ok(())
}

fn validate_window(window: &SemesterWindow) -> AppResult<()> {
    if let (Some(start), Some(end)) = (window.start, window.end)
        && end < start
    {
        return Err(AppError::InvalidSemester {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}
