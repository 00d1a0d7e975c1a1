//! Test harness for isolated tracker tests.
//!
//! Each `TestHarness` owns a temporary directory holding a real database
//! file and a resume directory, so every operation goes through the same
//! per-call connections as the application.

#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;

use jobtrack::{Config, IntakeForm, JobApplication, Stage, Tracker};

pub struct TestHarness {
    temp_dir: TempDir,
    pub config: Config,
    pub tracker: Tracker,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config = Config {
            upload_directory: temp_dir.path().join("resumes"),
            database_path: temp_dir.path().join("job_tracker.db"),
            ..Config::default()
        };
        let tracker = Tracker::open(&config).expect("Failed to open tracker");

        Self {
            temp_dir,
            config,
            tracker,
        }
    }

    /// A second tracker over the same files, as a restarted process would see them.
    pub fn reopen(&self) -> Tracker {
        Tracker::open(&self.config).expect("Failed to reopen tracker")
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.config.upload_directory.clone()
    }

    /// Submits a form with fixed date and returns the new id.
    pub fn add(&self, company: &str, position: &str, stage: Stage) -> i64 {
        self.tracker
            .submit(
                &IntakeForm::new(company, position)
                    .with_stage(stage)
                    .with_date(sample_date()),
            )
            .expect("submit failed")
            .id
    }

    pub fn all(&self) -> Vec<JobApplication> {
        self.tracker.applications().expect("listing failed")
    }

    pub fn status_of(&self, id: i64) -> Option<Stage> {
        self.tracker
            .find(id)
            .expect("lookup failed")
            .map(|app| app.status)
    }
}

pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}
