use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::sanitize::{is_flat_filename, redact_path, replace_whitespace, upload_basename};

/// Extensions the upload form offers. Not enforced here.
pub const ACCEPTED_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Flat directory of uploaded resumes.
///
/// Files are addressed by their stored name relative to the root. The
/// store never deletes anything, and a second save under the same name
/// replaces the first.
#[derive(Debug, Clone)]
pub struct ResumeStore {
    root: PathBuf,
}

impl ResumeStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the root directory if it does not exist yet.
    pub fn ensure_root(&self) -> Result<(), StorageError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| StorageError::CreateDirectory {
                path: self.root.clone(),
                source: e,
            })?;
        }
        Ok(())
    }

    /// Name under which an upload for this owner is stored:
    /// `{company}_{position}_{original}` with whitespace turned into `_`.
    pub fn stored_filename(company: &str, position: &str, original_filename: &str) -> String {
        replace_whitespace(&format!(
            "{}_{}_{}",
            company,
            position,
            upload_basename(original_filename)
        ))
    }

    /// Writes `content` and returns the stored name (not a full path).
    pub fn save(
        &self,
        company: &str,
        position: &str,
        original_filename: &str,
        content: &[u8],
    ) -> Result<String, StorageError> {
        let name = Self::stored_filename(company, position, original_filename);
        if !is_flat_filename(&name) {
            return Err(StorageError::InvalidName(name));
        }

        self.ensure_root()?;
        let path = self.root.join(&name);
        if path.exists() {
            log::debug!("Overwriting existing resume {}", redact_path(&path));
        }

        std::fs::write(&path, content).map_err(|e| StorageError::WriteFile {
            path: path.clone(),
            source: e,
        })?;

        log::debug!("Stored resume {} ({} bytes)", name, content.len());
        Ok(name)
    }

    /// Full path of a stored name, or `None` if the name would leave the root.
    pub fn path_of(&self, name: &str) -> Option<PathBuf> {
        is_flat_filename(name).then(|| self.root.join(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_of(name).is_some_and(|path| path.is_file())
    }

    pub fn read(&self, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self
            .path_of(name)
            .ok_or_else(|| StorageError::InvalidName(name.to_string()))?;

        std::fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::NotFound(path.clone())
            } else {
                StorageError::ReadFile {
                    path: path.clone(),
                    source: e,
                }
            }
        })
    }

    /// MIME type to serve a stored file with.
    pub fn content_type(name: &str) -> String {
        mime_guess::from_path(name)
            .first_or_octet_stream()
            .essence_str()
            .to_string()
    }
}
