use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All regular files under `root`, recursively, sorted by path.
///
/// Entries the walk cannot read are passed to `on_error` and skipped.
pub fn list_files<F>(root: &Path, mut on_error: F) -> Vec<PathBuf>
where
    F: FnMut(walkdir::Error),
{
    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        match entry {
            Ok(entry) if entry.file_type().is_file() => files.push(entry.into_path()),
            Ok(_) => {}
            Err(err) => on_error(err),
        }
    }
    files.sort();
    files
}

/// Path of `path` relative to the corpus root, as stored in the document list.
pub fn relative_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_string_lossy().into_owned()
}
