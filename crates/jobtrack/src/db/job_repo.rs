//! Job repository: CRUD operations for the `jobs` table.
//!
//! Every function is a single statement on a connection scoped to the
//! call, so it commits immediately. Unknown ids are not errors.

use rusqlite::{params, OptionalExtension, Row};

use super::{Database, DatabaseError};
use crate::application::{NewApplication, DATE_FORMAT};
use crate::stage::Stage;

/// A raw job row from the database.
///
/// Text columns are nullable in the schema, hence the `Option`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRow {
    pub id: i64,
    pub company: Option<String>,
    pub position: Option<String>,
    pub status: Option<String>,
    pub date_added: Option<String>,
    pub resume_path: Option<String>,
}

impl JobRow {
    fn from_row(row: &Row<'_>) -> Result<Self, rusqlite::Error> {
        Ok(Self {
            id: row.get("id")?,
            company: row.get("company")?,
            position: row.get("position")?,
            status: row.get("status")?,
            date_added: row.get("date_added")?,
            resume_path: row.get("resume_path")?,
        })
    }
}

/// Inserts a new job row and returns its freshly assigned id.
pub fn insert(db: &Database, job: &NewApplication) -> Result<i64, DatabaseError> {
    db.with_conn(|conn| {
        conn.execute(
            "INSERT INTO jobs (company, position, status, date_added, resume_path)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                job.company,
                job.position,
                job.status.label(),
                job.date_added.format(DATE_FORMAT).to_string(),
                job.resume_path,
            ],
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("Inserted job {} ({})", id, job.status);
        Ok(id)
    })
}

/// Returns every row in insertion order.
pub fn list_all(db: &Database) -> Result<Vec<JobRow>, DatabaseError> {
    db.with_conn(|conn| {
        let mut stmt = conn.prepare(
            "SELECT id, company, position, status, date_added, resume_path
             FROM jobs ORDER BY id ASC",
        )?;
        let rows = stmt
            .query_map([], JobRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    })
}

/// Finds a job by its id.
pub fn find_by_id(db: &Database, id: i64) -> Result<Option<JobRow>, DatabaseError> {
    db.with_conn(|conn| {
        let row = conn
            .query_row(
                "SELECT id, company, position, status, date_added, resume_path
                 FROM jobs WHERE id = ?1",
                params![id],
                JobRow::from_row,
            )
            .optional()?;
        Ok(row)
    })
}

/// Overwrites the status of a job. A missing id changes nothing.
pub fn update_status(db: &Database, id: i64, status: Stage) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        let changed = conn.execute(
            "UPDATE jobs SET status = ?2 WHERE id = ?1",
            params![id, status.label()],
        )?;
        log::debug!("Set status of job {} to {} ({} row(s))", id, status, changed);
        Ok(())
    })
}

/// Removes a job. A missing id changes nothing.
pub fn delete(db: &Database, id: i64) -> Result<(), DatabaseError> {
    db.with_conn(|conn| {
        let removed = conn.execute("DELETE FROM jobs WHERE id = ?1", params![id])?;
        log::debug!("Deleted job {} ({} row(s))", id, removed);
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn test_db() -> Database {
        Database::open_in_memory().expect("Failed to create test database")
    }

    fn sample_job(company: &str) -> NewApplication {
        NewApplication {
            company: company.to_string(),
            position: "Python Developer".to_string(),
            status: Stage::ToApply,
            date_added: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            resume_path: None,
        }
    }

    #[test]
    fn test_insert_and_find() {
        let db = test_db();
        let id = insert(&db, &sample_job("Google")).unwrap();

        let found = find_by_id(&db, id).unwrap().unwrap();
        assert_eq!(found.company.as_deref(), Some("Google"));
        assert_eq!(found.status.as_deref(), Some("To Apply"));
        assert_eq!(found.date_added.as_deref(), Some("2026-01-15"));
        assert!(found.resume_path.is_none());
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let db = test_db();
        let a = insert(&db, &sample_job("A")).unwrap();
        let b = insert(&db, &sample_job("B")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_find_nonexistent() {
        let db = test_db();
        assert!(find_by_id(&db, 42).unwrap().is_none());
    }

    #[test]
    fn test_list_all_in_insertion_order() {
        let db = test_db();
        for company in ["First", "Second", "Third"] {
            insert(&db, &sample_job(company)).unwrap();
        }

        let rows = list_all(&db).unwrap();
        let companies: Vec<_> = rows.iter().filter_map(|r| r.company.as_deref()).collect();
        assert_eq!(companies, vec!["First", "Second", "Third"]);
        assert!(rows.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn test_update_status() {
        let db = test_db();
        let id = insert(&db, &sample_job("Acme")).unwrap();

        update_status(&db, id, Stage::Interviewing).unwrap();

        let found = find_by_id(&db, id).unwrap().unwrap();
        assert_eq!(found.status.as_deref(), Some("Interviewing"));
    }

    #[test]
    fn test_update_status_unknown_id_is_noop() {
        let db = test_db();
        let id = insert(&db, &sample_job("Acme")).unwrap();

        update_status(&db, id + 100, Stage::Offer).unwrap();

        let rows = list_all(&db).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status.as_deref(), Some("To Apply"));
    }

    #[test]
    fn test_delete_twice_is_noop() {
        let db = test_db();
        let keep = insert(&db, &sample_job("Keep")).unwrap();
        let gone = insert(&db, &sample_job("Gone")).unwrap();

        delete(&db, gone).unwrap();
        delete(&db, gone).unwrap();

        let ids: Vec<i64> = list_all(&db).unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let db = test_db();
        let first = insert(&db, &sample_job("A")).unwrap();
        delete(&db, first).unwrap();
        let second = insert(&db, &sample_job("B")).unwrap();
        assert!(second > first);
    }
}
