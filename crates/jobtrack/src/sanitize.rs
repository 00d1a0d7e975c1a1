//! Helpers for turning user-supplied text into file names, and for keeping
//! full paths out of log lines.

use std::path::Path;

/// Returns only the filename component of a path (no directory).
///
/// Safe for log lines: reveals the file name without exposing the full path.
pub fn redact_path(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string()
}

/// Replaces every whitespace character with `_`.
pub fn replace_whitespace(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Strips any directory part a client may have sent along with an upload
/// name (browsers on Windows send `C:\Users\...\cv.pdf`).
pub fn upload_basename(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name)
}

/// True when `name` names a file directly inside a directory: no
/// separators, no `..`, not empty.
pub fn is_flat_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\', '\0'])
}
