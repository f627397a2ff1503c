#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Duration, NaiveDate};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub fn att() -> Command {
    cargo_bin_cmd!("attendance")
}

/// An isolated data directory and config file per test.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join("data")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.yml")
    }

    pub fn attendance_path(&self) -> PathBuf {
        self.data_dir().join("attendance.json")
    }

    /// `attendance --data-dir <tmp>/data --config <tmp>/config.yml <args...>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = att();
        cmd.arg("--data-dir")
            .arg(self.data_dir())
            .arg("--config")
            .arg(self.config_path())
            .args(args);
        cmd
    }

    pub fn write_timetable(&self, json: &str) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        fs::write(self.data_dir().join("timetable.json"), json).expect("write timetable");
    }

    pub fn write_attendance(&self, json: &str) {
        fs::create_dir_all(self.data_dir()).expect("create data dir");
        fs::write(self.attendance_path(), json).expect("write attendance");
    }

    pub fn attendance(&self) -> serde_json::Value {
        let raw = fs::read_to_string(self.attendance_path()).expect("read attendance");
        serde_json::from_str(&raw).expect("parse attendance")
    }

    pub fn records(&self) -> Vec<serde_json::Value> {
        self.attendance()["records"]
            .as_array()
            .cloned()
            .unwrap_or_default()
    }

    /// Add an extra class with an explicit status.
    pub fn add(&self, subject: &str, date: &str, status: &str) {
        self.cmd(&[
            "record",
            "add-class",
            "--subject",
            subject,
            "--date",
            date,
            "--status",
            status,
        ])
        .assert()
        .success();
    }
}

pub const WEEKDAY_TIMETABLE: &str = r#"{
  "Monday": ["Math"],
  "Tuesday": ["Math"],
  "Wednesday": ["Math"],
  "Thursday": ["Math"],
  "Friday": ["Math"]
}"#;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn days_ago(n: i64) -> String {
    (today() - Duration::days(n)).format("%Y-%m-%d").to_string()
}
