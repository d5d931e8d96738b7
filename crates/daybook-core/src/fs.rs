//! Filesystem utilities for atomic operations.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Move `temp_path` into place at `destination`, replacing any existing file.
///
/// On some platforms (notably Windows), `fs::rename` fails when the
/// destination already exists; in that case the destination is removed and
/// the rename retried. If the retry also fails, the temp file is cleaned up
/// before the error is returned.
pub fn rename_or_replace(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(first_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!("rename failed (initial: {}, retry: {})", first_err, retry_err),
            )
        })?;
    }
    Ok(())
}

/// Removes the wrapped file on drop unless [`keep`](Self::keep) is called.
///
/// Scopes a reserved temp file to the operation that created it, so an early
/// return via `?` does not strand the file on disk.
pub struct TempFileGuard {
    path: PathBuf,
    armed: bool,
}

impl TempFileGuard {
    pub fn new(path: PathBuf) -> Self {
        Self { path, armed: true }
    }

    /// The file reached its final state; leave it in place.
    pub fn keep(mut self) {
        self.armed = false;
    }
}

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if self.armed {
            let _ = fs::remove_file(&self.path);
        }
    }
}
