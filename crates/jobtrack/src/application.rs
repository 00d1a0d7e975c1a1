//! The job application record.

use std::fmt;

use chrono::NaiveDate;

use crate::db::job_repo::JobRow;
use crate::db::DatabaseError;
use crate::stage::Stage;

/// Format of the `date_added` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The `date_added` column as read back.
///
/// Rows written here always hold an ISO date. Text edited in by other
/// tools is kept verbatim so it can still be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateAdded {
    Date(NaiveDate),
    Raw(String),
}

impl DateAdded {
    pub fn parse(text: &str) -> Self {
        match NaiveDate::parse_from_str(text, DATE_FORMAT) {
            Ok(date) => DateAdded::Date(date),
            Err(_) => DateAdded::Raw(text.to_string()),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateAdded::Date(date) => Some(*date),
            DateAdded::Raw(_) => None,
        }
    }
}

impl From<NaiveDate> for DateAdded {
    fn from(date: NaiveDate) -> Self {
        DateAdded::Date(date)
    }
}

impl fmt::Display for DateAdded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateAdded::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            DateAdded::Raw(text) => f.write_str(text),
        }
    }
}

/// A stored job application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobApplication {
    pub id: i64,
    pub company: String,
    pub position: String,
    pub status: Stage,
    pub date_added: DateAdded,
    /// Stored file name inside the resume directory, if one was uploaded.
    pub resume_path: Option<String>,
}

/// Fields of an application that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewApplication {
    pub company: String,
    pub position: String,
    pub status: Stage,
    pub date_added: NaiveDate,
    pub resume_path: Option<String>,
}

impl TryFrom<JobRow> for JobApplication {
    type Error = DatabaseError;

    /// Fails only when `status` is not one of the stages.
    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status_text = row.status.as_deref().unwrap_or_default();
        let status = status_text
            .parse::<Stage>()
            .map_err(|e| DatabaseError::MalformedRow {
                id: row.id,
                reason: e.to_string(),
            })?;

        Ok(Self {
            id: row.id,
            company: row.company.unwrap_or_default(),
            position: row.position.unwrap_or_default(),
            status,
            date_added: DateAdded::parse(row.date_added.as_deref().unwrap_or_default()),
            resume_path: row.resume_path.filter(|p| !p.is_empty()),
        })
    }
}
