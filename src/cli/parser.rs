use clap::{Parser, Subcommand};

/// Command-line interface definition for attendance-tracker
#[derive(Parser)]
#[command(
    name = "attendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track class attendance and see how many classes you must attend (or may skip) to stay above 75%",
    long_about = None
)]
pub struct Cli {
    /// Override the data directory (useful for tests or multiple semesters)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Use an alternative configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Commands for recording attendance
    Record {
        #[command(subcommand)]
        action: RecordAction,
    },

    /// Commands for configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Commands for managing holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Commands for viewing attendance data
    View {
        #[command(subcommand)]
        action: ViewAction,
    },
}

#[derive(Subcommand)]
pub enum RecordAction {
    /// Check for missed days and prompt for today's attendance
    Check {
        #[arg(long, short, help = "Only print prompts, no informational messages")]
        quiet: bool,
    },

    /// Add an extra class
    AddClass {
        #[arg(long, help = "Subject name")]
        subject: String,

        #[arg(long, help = "Date of the class (YYYY-MM-DD)")]
        date: String,

        #[arg(long, help = "p = present, a = absent, c = cancelled (asked if omitted)")]
        status: Option<String>,
    },

    /// Cancel a class on a given date
    CancelClass {
        #[arg(long, help = "Subject name")]
        subject: String,

        #[arg(long, help = "Date of the class (YYYY-MM-DD)")]
        date: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Set the semester start date (YYYY-MM-DD)
    SetStartDate { date: String },

    /// Set the semester end date (YYYY-MM-DD)
    SetEndDate { date: String },

    /// Print the configuration, data files and semester window
    Show,
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// Mark a date as a holiday (YYYY-MM-DD)
    Add { date: String },

    /// Remove a holiday (YYYY-MM-DD)
    Remove { date: String },

    /// List all holidays
    List,
}

#[derive(Subcommand)]
pub enum ViewAction {
    /// Display the attendance summary
    Summary,

    /// Edit a past attendance record
    Edit {
        #[arg(long, help = "Number of the record to edit (asked if omitted)")]
        index: Option<usize>,

        #[arg(long, help = "New status: p, a or c (asked if omitted)")]
        status: Option<String>,
    },

    /// Print the weekly timetable
    Timetable,
}
