//! Database module for persistent storage.
//!
//! Uses rusqlite (SQLite). A file-backed `Database` opens a fresh
//! connection for every call and drops it afterwards, so each statement
//! commits on its own and no handle is shared between operations.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rusqlite::Connection;

pub mod error;
pub mod job_repo;
pub mod migrations;

pub use error::DatabaseError;

/// Where the jobs table lives.
#[derive(Clone)]
enum Location {
    File(PathBuf),
    /// In-memory databases vanish with their connection, so this one is
    /// kept open and shared.
    Memory(Arc<Mutex<Connection>>),
}

/// Handle to the job tracker database.
///
/// Cloning is cheap. The handle itself holds no connection for file
/// databases; see [`Database::with_conn`].
#[derive(Clone)]
pub struct Database {
    location: Location,
}

impl Database {
    /// Opens (or creates) the database at the given path and ensures the
    /// schema exists.
    pub fn open(path: &Path) -> Result<Self, DatabaseError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| DatabaseError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let conn = Connection::open(path)?;
        migrations::run_all(&conn)?;
        drop(conn);

        log::info!("Database opened at {}", path.display());

        Ok(Self {
            location: Location::File(path.to_path_buf()),
        })
    }

    /// Opens an in-memory database for testing.
    pub fn open_in_memory() -> Result<Self, DatabaseError> {
        let conn = Connection::open_in_memory()?;
        migrations::run_all(&conn)?;

        Ok(Self {
            location: Location::Memory(Arc::new(Mutex::new(conn))),
        })
    }

    /// Path of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        match &self.location {
            Location::File(path) => Some(path),
            Location::Memory(_) => None,
        }
    }

    /// Runs `f` against a connection scoped to this call.
    ///
    /// File databases get a new connection (schema ensured first, in case
    /// the file was replaced underneath us) which is closed when `f`
    /// returns.
    pub fn with_conn<F, T>(&self, f: F) -> Result<T, DatabaseError>
    where
        F: FnOnce(&Connection) -> Result<T, DatabaseError>,
    {
        match &self.location {
            Location::File(path) => {
                let conn = Connection::open(path)?;
                migrations::run_all(&conn)?;
                f(&conn)
            }
            Location::Memory(conn) => {
                let conn = conn.lock().map_err(|_| DatabaseError::LockPoisoned)?;
                f(&conn)
            }
        }
    }
}
