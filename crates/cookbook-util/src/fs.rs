use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Ensure a directory exists, creating it and any parents if needed.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Recursively collect every file below `root` whose extension is `ext`.
///
/// The result is sorted so callers see a stable order regardless of how the
/// filesystem enumerates directories. A missing `root` yields no files.
pub fn collect_files_with_extension(root: &Path, ext: &str) -> std::io::Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(std::io::Error::other)?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|e| e == ext) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

/// Write `contents` to `path`, creating the parent directory first.
pub fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }
    std::fs::write(path, contents)
}
