//! Post-run check for zero-byte Markdown files in the output tree.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// Returns every zero-byte `.md` file under `root`, sorted.
///
/// A missing `root` yields an empty list. Symlinked directories are not
/// followed.
///
/// # Errors
///
/// Returns an IO error if a directory under `root` cannot be read.
pub fn find_empty_markdown(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut empty = Vec::new();
    if !root.is_dir() {
        debug!(root = %root.display(), "output root missing, nothing to scan");
        return Ok(empty);
    }
    collect_empty_recursive(root, &mut empty)?;
    empty.sort();
    if !empty.is_empty() {
        warn!(count = empty.len(), "empty markdown files in output");
    }
    Ok(empty)
}

fn collect_empty_recursive(dir: &Path, empty: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        if file_type.is_dir() {
            collect_empty_recursive(&path, empty)?;
        } else if is_markdown_file(&path) && entry.metadata()?.len() == 0 {
            empty.push(path);
        }
    }
    Ok(())
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}
