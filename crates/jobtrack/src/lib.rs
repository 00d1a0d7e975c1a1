pub mod application;
pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod intake;
pub mod sanitize;
pub mod stage;
pub mod storage;
pub mod tracker;

pub use application::{DateAdded, JobApplication, NewApplication};
pub use board::{Board, Card, Column};
pub use config::{load_config, Config};
pub use db::{Database, DatabaseError};
pub use error::{ConfigError, Result, StorageError, TrackerError, ValidationError};
pub use intake::{IntakeForm, Submission, Upload};
pub use stage::{next_stage, Stage};
pub use storage::ResumeStore;
pub use tracker::{ResumeDownload, Tracker};
