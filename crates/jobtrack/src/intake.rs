//! The "add new job" form and its validation.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::stage::Stage;

/// An uploaded resume as received from the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// Name the client gave the file.
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// A filled-in intake form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntakeForm {
    pub company: String,
    pub position: String,
    pub stage: Stage,
    pub resume: Option<Upload>,
    pub date_discovered: NaiveDate,
}

impl IntakeForm {
    /// A form with the field defaults: first stage, no resume, today's date.
    pub fn new(company: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            position: position.into(),
            stage: Stage::default(),
            resume: None,
            date_discovered: today(),
        }
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stage = stage;
        self
    }

    pub fn with_resume(mut self, filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.resume = Some(Upload {
            filename: filename.into(),
            bytes,
        });
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date_discovered = date;
        self
    }

    /// Company and position must both be non-empty. With a resume
    /// attached they also name its file, so they must not contain path
    /// separators.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match (self.company.is_empty(), self.position.is_empty()) {
            (false, false) => {}
            (true, false) => return Err(ValidationError::MissingCompany),
            (false, true) => return Err(ValidationError::MissingPosition),
            (true, true) => return Err(ValidationError::MissingCompanyAndPosition),
        }

        if self.attached_resume().is_some()
            && (has_separator(&self.company) || has_separator(&self.position))
        {
            return Err(ValidationError::PathSeparator);
        }

        Ok(())
    }

    /// The attached file, ignoring a file input that was left empty.
    pub fn attached_resume(&self) -> Option<&Upload> {
        self.resume.as_ref().filter(|u| !u.filename.is_empty())
    }
}

/// Outcome of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: i64,
    pub resume_path: Option<String>,
    /// Confirmation shown to the user.
    pub message: String,
}

impl Submission {
    pub(crate) fn new(id: i64, form: &IntakeForm, resume_path: Option<String>) -> Self {
        Self {
            id,
            resume_path,
            message: confirmation(&form.position, &form.company),
        }
    }
}

/// Text shown after an application has been added.
pub fn confirmation(position: &str, company: &str) -> String {
    format!("Added {} at {}!", position, company)
}

fn has_separator(text: &str) -> bool {
    text.contains(['/', '\\', '\0'])
}

/// Today's date in the local time zone, the form's default.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
