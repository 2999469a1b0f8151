//! Writing documents to disk and clearing previous source output.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Filesystem failure while writing or purging output.
#[derive(Debug, Error)]
pub enum PersistError {
    /// IO error at a specific path.
    #[error("IO error at {path}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl PersistError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Writes `content` to `path`, creating missing parent directories.
///
/// The content goes to a hidden sibling file first and is renamed into place,
/// so a failed or interrupted write never leaves a truncated file at `path`.
/// An existing file at `path` is replaced.
///
/// Dropping the returned future does not cancel a write already handed to the
/// blocking pool, so an interrupted run can leave a `.<name>.partial` file in
/// the source directory. The next run's purge removes it.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if a directory cannot be created or the file
/// cannot be written or renamed.
pub async fn save(path: &Path, content: &str) -> Result<(), PersistError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| PersistError::io(parent, e))?;
    }

    let partial = partial_path(path);
    if let Err(e) = fs::write(&partial, content).await {
        debug!(path = %partial.display(), "cleaning up partial file after error");
        let _ = fs::remove_file(&partial).await;
        return Err(PersistError::io(path, e));
    }
    if let Err(e) = fs::rename(&partial, path).await {
        let _ = fs::remove_file(&partial).await;
        return Err(PersistError::io(path, e));
    }

    debug!(path = %path.display(), bytes = content.len(), "saved document");
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(".partial");
    path.with_file_name(name)
}

/// Removes `<root>/<name>` for every name that exists as a directory.
///
/// Nothing outside the named directories is touched. Returns the removed
/// directories in the order of `names`.
///
/// # Errors
///
/// Returns [`PersistError::Io`] if an existing directory cannot be removed.
pub async fn purge_source_dirs<S: AsRef<str>>(
    root: &Path,
    names: &[S],
) -> Result<Vec<PathBuf>, PersistError> {
    let mut purged = Vec::new();
    for name in names {
        let target = root.join(name.as_ref());
        if !fs::metadata(&target).await.is_ok_and(|m| m.is_dir()) {
            continue;
        }
        fs::remove_dir_all(&target)
            .await
            .map_err(|e| PersistError::io(&target, e))?;
        debug!(path = %target.display(), "purged source directory");
        purged.push(target);
    }
    Ok(purged)
}
