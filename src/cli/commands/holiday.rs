use crate::cli::parser::HolidayAction;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(action: &HolidayAction, cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_config());

    match action {
        HolidayAction::Add { date: date_str } => {
            let d = date::parse_date_arg(date_str)?;
            let mut data = store.load_attendance()?;

            if data.add_holiday(d) {
                store.save_attendance(&data)?;
                success(format!("Added {} as a holiday.", d));
            } else {
                info(format!("{} is already a holiday.", d));
            }
        }

        HolidayAction::Remove { date: date_str } => {
            let d = date::parse_date_arg(date_str)?;
            let mut data = store.load_attendance()?;

            if data.remove_holiday(d) {
                store.save_attendance(&data)?;
                success(format!("Removed {} from holidays.", d));
            } else {
                info(format!("{} was not found in holidays.", d));
            }
        }

        HolidayAction::List => {
            let data = store.load_attendance()?;
            if data.holidays.is_empty() {
                info("No holidays recorded.");
            }
            for d in &data.holidays {
                println!("{}", date::describe_day(*d));
            }
        }
    }

    Ok(())
}
