//! Flat-file store for the timetable and attendance documents.
//!
//! Load strategy for each document: the primary file in the data directory;
//! otherwise a seed file of the same name, which is adopted by writing a copy
//! into the data directory (the seed itself is never touched); otherwise the
//! empty defaults.

pub mod schema;

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceData;
use crate::models::timetable::Timetable;
use log::{debug, info};
use schema::{AttendanceDocument, TimetableDocument};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

pub const TIMETABLE_FILE: &str = "timetable.json";
pub const ATTENDANCE_FILE: &str = "attendance.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Where the persisted documents live.
    pub data_directory: PathBuf,
    /// Optional directory with default documents used on first run.
    pub seed_directory: Option<PathBuf>,
}

pub struct Store {
    cfg: StoreConfig,
}

impl Store {
    pub fn new(cfg: StoreConfig) -> Self {
        Self { cfg }
    }

    pub fn data_directory(&self) -> &Path {
        &self.cfg.data_directory
    }

    pub fn timetable_path(&self) -> PathBuf {
        self.cfg.data_directory.join(TIMETABLE_FILE)
    }

    pub fn attendance_path(&self) -> PathBuf {
        self.cfg.data_directory.join(ATTENDANCE_FILE)
    }

    pub fn load_timetable(&self) -> AppResult<Timetable> {
        let raw: TimetableDocument = self.read_document(TIMETABLE_FILE)?;
        Timetable::from_document(&raw)
    }

    pub fn load_attendance(&self) -> AppResult<AttendanceData> {
        let doc: AttendanceDocument = self.read_document(ATTENDANCE_FILE)?;
        doc.into_data(&self.attendance_path().to_string_lossy())
    }

    /// Persist the attendance bundle wholesale, in the current schema.
    pub fn save_attendance(&self, data: &AttendanceData) -> AppResult<()> {
        let doc = AttendanceDocument::from(data);
        self.write_document(ATTENDANCE_FILE, &doc)?;
        info!(
            "event=attendance_saved status=ok records={} holidays={}",
            data.records.len(),
            data.holidays.len()
        );
        Ok(())
    }

    fn read_document<T: DeserializeOwned + Default>(&self, name: &str) -> AppResult<T> {
        let primary = self.cfg.data_directory.join(name);
        if primary.exists() {
            debug!("event=document_load source=primary path={}", primary.display());
            return parse_file(&primary);
        }

        if let Some(seed_dir) = &self.cfg.seed_directory {
            let seed = seed_dir.join(name);
            if seed.exists() {
                let doc: T = parse_file(&seed)?;
                fs::create_dir_all(&self.cfg.data_directory)?;
                fs::copy(&seed, &primary)?;
                info!(
                    "event=document_seeded status=ok seed={} path={}",
                    seed.display(),
                    primary.display()
                );
                return Ok(doc);
            }
        }

        debug!("event=document_load source=default name={}", name);
        Ok(T::default())
    }

    fn write_document<T: Serialize>(&self, name: &str, doc: &T) -> AppResult<()> {
        fs::create_dir_all(&self.cfg.data_directory)?;
        let path = self.cfg.data_directory.join(name);
        let json = serde_json::to_string_pretty(doc).map_err(|e| AppError::Document {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        fs::write(&path, json + "\n")?;
        Ok(())
    }
}

fn parse_file<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| AppError::Document {
        path: path.to_string_lossy().to_string(),
        source: e,
    })
}
