use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_UPLOAD_DIRECTORY: &str = "resumes";
pub const DEFAULT_DATABASE_PATH: &str = "job_tracker.db";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8501";

/// Tracker settings. Every field is optional in the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding uploaded resumes.
    pub upload_directory: PathBuf,
    /// SQLite database file.
    pub database_path: PathBuf,
    /// Address the web front end listens on.
    pub bind_address: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            upload_directory: PathBuf::from(DEFAULT_UPLOAD_DIRECTORY),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
        }
    }
}
