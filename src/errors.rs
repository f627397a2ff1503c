//! Unified application error type.
//! All modules (store, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store / documents
    // ---------------------------
    #[error("Malformed document {path}: {source}")]
    Document {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Document {path} uses schema version {found}, newest supported is {supported}")]
    UnsupportedSchema {
        path: String,
        found: u32,
        supported: u32,
    },

    #[error("Invalid timetable: {0}")]
    InvalidTimetable(String),

    // ---------------------------
    // Parsing / validation errors
    // ---------------------------
    #[error("Invalid date '{0}': dates must be in YYYY-MM-DD format")]
    InvalidDate(String),

    #[error("Invalid status '{0}': use p (present), a (absent) or c (cancelled)")]
    InvalidStatus(String),

    #[error("Invalid record number: {0}")]
    InvalidRecordIndex(String),

    // ---------------------------
    // Preconditions
    // ---------------------------
    #[error(
        "Semester start date is not set. Please set it using 'config set-start-date' command."
    )]
    StartDateNotSet,

    #[error("Semester has ended on {0}. No more attendance tracking.")]
    SemesterEnded(String),

    #[error("Invalid semester window: end date {end} is before start date {start}")]
    InvalidSemester { start: String, end: String },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
