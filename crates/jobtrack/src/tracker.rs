//! The tracker service: the operations behind every button on the board.
//!
//! Mutations return nothing to render from. Callers re-read
//! [`Tracker::board`] after each one.

use crate::application::{JobApplication, NewApplication};
use crate::board::Board;
use crate::config::Config;
use crate::db::{job_repo, Database};
use crate::error::{Result, StorageError};
use crate::intake::{IntakeForm, Submission};
use crate::stage::{next_stage, Stage};
use crate::storage::ResumeStore;

/// A stored resume ready to be sent to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeDownload {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone)]
pub struct Tracker {
    db: Database,
    resumes: ResumeStore,
}

impl Tracker {
    pub fn new(db: Database, resumes: ResumeStore) -> Self {
        Self { db, resumes }
    }

    /// Creates the upload directory and opens the database named in `config`.
    pub fn open(config: &Config) -> Result<Self> {
        let resumes = ResumeStore::new(&config.upload_directory);
        resumes.ensure_root()?;
        let db = Database::open(&config.database_path)?;
        Ok(Self::new(db, resumes))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn resumes(&self) -> &ResumeStore {
        &self.resumes
    }

    /// Validates the form, stores its resume (if any), then inserts the record.
    ///
    /// Nothing is written when validation fails.
    pub fn submit(&self, form: &IntakeForm) -> Result<Submission> {
        form.validate()?;

        let resume_path = match form.attached_resume() {
            Some(upload) => Some(self.resumes.save(
                &form.company,
                &form.position,
                &upload.filename,
                &upload.bytes,
            )?),
            None => None,
        };

        let id = job_repo::insert(
            &self.db,
            &NewApplication {
                company: form.company.clone(),
                position: form.position.clone(),
                status: form.stage,
                date_added: form.date_discovered,
                resume_path: resume_path.clone(),
            },
        )?;

        log::info!(
            "Added job {} ({} at {}, {})",
            id,
            form.position,
            form.company,
            form.stage
        );
        Ok(Submission::new(id, form, resume_path))
    }

    /// Every record whose row maps onto a known stage, in insertion order.
    ///
    /// Rows with a status outside the pipeline belong to no column and are
    /// skipped with a warning.
    pub fn applications(&self) -> Result<Vec<JobApplication>> {
        let rows = job_repo::list_all(&self.db)?;
        let mut applications = Vec::with_capacity(rows.len());
        for row in rows {
            match JobApplication::try_from(row) {
                Ok(application) => applications.push(application),
                Err(e) => log::warn!("Skipping row: {}", e),
            }
        }
        Ok(applications)
    }

    pub fn find(&self, id: i64) -> Result<Option<JobApplication>> {
        match job_repo::find_by_id(&self.db, id)? {
            Some(row) => Ok(Some(JobApplication::try_from(row)?)),
            None => Ok(None),
        }
    }

    pub fn board(&self) -> Result<Board> {
        Ok(Board::build(self.applications()?, &self.resumes))
    }

    /// Moves a record one stage forward and returns the stage it moved to.
    ///
    /// `None` means nothing changed: the id is unknown, the record is at
    /// the terminal stage, or its stored status is not a stage.
    pub fn advance(&self, id: i64) -> Result<Option<Stage>> {
        let Some(row) = job_repo::find_by_id(&self.db, id)? else {
            log::debug!("Advance ignored: job {} not found", id);
            return Ok(None);
        };

        let current = row.status.as_deref().unwrap_or_default();
        let Some(next) = next_stage(current) else {
            log::debug!("Advance ignored: job {} has status {:?}", id, current);
            return Ok(None);
        };

        job_repo::update_status(&self.db, id, next)?;
        log::info!("Job {} moved from {} to {}", id, current, next);
        Ok(Some(next))
    }

    /// Removes the record. Its resume file, if any, stays on disk.
    pub fn delete(&self, id: i64) -> Result<()> {
        job_repo::delete(&self.db, id)?;
        log::info!("Deleted job {}", id);
        Ok(())
    }

    /// The resume attached to a record, `None` when there is none or its
    /// file has gone missing.
    pub fn resume(&self, id: i64) -> Result<Option<ResumeDownload>> {
        let Some(name) = job_repo::find_by_id(&self.db, id)?
            .and_then(|row| row.resume_path)
            .filter(|name| !name.is_empty())
        else {
            return Ok(None);
        };

        match self.resumes.read(&name) {
            Ok(bytes) => Ok(Some(ResumeDownload {
                content_type: ResumeStore::content_type(&name),
                filename: name,
                bytes,
            })),
            Err(StorageError::NotFound(_)) | Err(StorageError::InvalidName(_)) => {
                log::warn!("Resume {} for job {} is not available", name, id);
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
