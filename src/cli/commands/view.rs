use crate::cli::parser::ViewAction;
use crate::config::Config;
use crate::core::calculator::COMPLIANCE_THRESHOLD;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::status::AttendanceStatus;
use crate::store::Store;
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::Prompter;
use crate::utils::formatting::{bold, colorize_percentage, colorize_status, count_or_blank};
use crate::utils::table::{Column, Table};
use std::collections::BTreeSet;

pub fn handle(action: &ViewAction, cfg: &Config) -> AppResult<()> {
    let store = Store::new(cfg.store_config());

    match action {
        ViewAction::Summary => summary(&store),
        ViewAction::Edit { index, status } => edit(&store, *index, status.as_deref()),
        ViewAction::Timetable => timetable(&store),
    }
}

fn summary(store: &Store) -> AppResult<()> {
    let timetable = store.load_timetable()?;
    let data = store.load_attendance()?;

    // subjects from the timetable plus any that only show up in records
    let subjects: BTreeSet<String> = timetable
        .all_subjects()
        .into_iter()
        .chain(data.recorded_subjects())
        .collect();

    if subjects.is_empty() {
        info(format!(
            "No subjects yet. Add your classes to {}",
            store.timetable_path().display()
        ));
        return Ok(());
    }

    let threshold = COMPLIANCE_THRESHOLD.percent();
    let summary = Core::build_summary(&data.records, &subjects);

    let mut table = Table::new(vec![
        Column::left("Subject"),
        Column::right("Attended"),
        Column::right("Percentage"),
        Column::left("Status"),
        Column::right("Need"),
        Column::right("Can skip"),
    ]);

    for s in &summary {
        let status = if s.compliant {
            format!(">= {threshold:.0}%")
        } else {
            format!("< {threshold:.0}%")
        };
        table.add_row(vec![
            s.subject.clone(),
            format!("{}/{}", s.present, s.total),
            colorize_percentage(s),
            status,
            count_or_blank(s.needed),
            count_or_blank(s.missable),
        ]);
    }

    header("Attendance summary");
    print!("{}", table.render());
    println!();

    for s in summary.iter().filter(|s| s.needed > 0) {
        warning(format!(
            "{}: you need to attend the next {} classes to reach {threshold:.0}%.",
            bold(&s.subject),
            s.needed
        ));
    }

    Ok(())
}

fn edit(store: &Store, index: Option<usize>, status: Option<&str>) -> AppResult<()> {
    let mut data = store.load_attendance()?;

    if data.records.is_empty() {
        info("No records to edit.");
        return Ok(());
    }

    for (i, r) in data.records.iter().enumerate() {
        println!(
            "{:>3}: {} - {} ({})",
            i + 1,
            r.date,
            r.subject,
            colorize_status(r.status)
        );
    }

    let mut prompter = Prompter::stdio();

    let number = match index {
        Some(n) => n,
        None => {
            let Some(answer) = prompter.ask("Enter the number of the record to edit")? else {
                info("No record number given, nothing changed.");
                return Ok(());
            };
            answer
                .parse::<usize>()
                .map_err(|_| AppError::InvalidRecordIndex(answer.clone()))?
        }
    };

    if number == 0 || number > data.records.len() {
        return Err(AppError::InvalidRecordIndex(number.to_string()));
    }
    let current = data.records[number - 1].status;

    let new_status = match status {
        Some(code) => {
            AttendanceStatus::from_code(code).ok_or_else(|| AppError::InvalidStatus(code.into()))?
        }
        None => match prompter.choose_status("New status", current)? {
            Some(s) => s,
            None => {
                info("No status given, nothing changed.");
                return Ok(());
            }
        },
    };

    let record = &mut data.records[number - 1];
    record.status = new_status;
    let (d, subject) = (record.date, record.subject.clone());
    store.save_attendance(&data)?;

    success(format!(
        "Record updated: {} - {} ({})",
        d, subject, new_status
    ));
    Ok(())
}

fn timetable(store: &Store) -> AppResult<()> {
    let timetable = store.load_timetable()?;

    if timetable.is_empty() {
        info(format!(
            "The timetable is empty. Add your classes to {}",
            store.timetable_path().display()
        ));
        return Ok(());
    }

    for (day, subjects) in timetable.iter() {
        if subjects.is_empty() {
            continue;
        }
        println!("{:<10} {}", day, subjects.join(", "));
    }

    Ok(())
}
