use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{InspectorError, InspectorResult};
use crate::metadata;
use crate::models::DirectoryEntry;

/// Immediate children of `folder`, sorted by file name.
///
/// Dot-prefixed names are skipped unless `show_hidden` is set.
pub fn try_list(folder: &Path, show_hidden: bool) -> InspectorResult<Vec<PathBuf>> {
    let entries = fs::read_dir(folder).map_err(|e| InspectorError::unreadable(folder, e))?;

    let mut paths: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let file_name = entry.file_name();
            if !show_hidden && file_name.to_string_lossy().starts_with('.') {
                return None;
            }
            Some(folder.join(file_name))
        })
        .collect();

    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Like [`try_list`], but an unreadable folder is just empty.
pub fn list(folder: &Path, show_hidden: bool) -> Vec<PathBuf> {
    try_list(folder, show_hidden).unwrap_or_else(|e| {
        debug!(error = %e, "listing folder failed, showing it as empty");
        Vec::new()
    })
}

pub fn list_entries(folder: &Path, show_hidden: bool) -> Vec<DirectoryEntry> {
    list(folder, show_hidden)
        .into_iter()
        .map(DirectoryEntry::new)
        .collect()
}

/// Writes the metadata report of `item` verbatim to `destination`.
pub fn export_report(item: &Path, destination: &Path) -> InspectorResult<()> {
    let text = metadata::describe(item).to_text();
    fs::write(destination, text).map_err(|e| InspectorError::write_failed(destination, e))?;
    info!(item = %item.display(), destination = %destination.display(), "exported metadata report");
    Ok(())
}

/// Default file name offered when exporting the report of `item`.
pub fn suggested_export_name(item: &Path) -> String {
    let stem = item
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "item".to_string());
    format!("{}_info.txt", stem)
}

/// Hands a non-folder item to the desktop's default application.
pub fn open_item(path: &Path) -> io::Result<()> {
    open::that(path)?;
    info!(path = %path.display(), "opened item");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn setup_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("nested.txt")).unwrap();
        dir
    }

    #[test]
    fn test_list_skips_hidden_entries() {
        let dir = setup_test_dir();
        let entries = list(dir.path(), false);
        assert_eq!(entries, vec![dir.path().join("a.txt"), dir.path().join("sub")]);
        assert!(entries.iter().all(|p| {
            !p.file_name().unwrap().to_string_lossy().starts_with('.')
        }));
    }

    #[test]
    fn test_list_with_hidden_is_superset() {
        let dir = setup_test_dir();
        let visible = list(dir.path(), false);
        let all = list(dir.path(), true);
        assert!(visible.iter().all(|p| all.contains(p)));
        assert!(all.contains(&dir.path().join(".hidden")));
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_list_does_not_recurse() {
        let dir = setup_test_dir();
        let entries = list(dir.path(), true);
        assert!(!entries.contains(&dir.path().join("sub").join("nested.txt")));
    }

    #[test]
    fn test_unreadable_folder_lists_empty() {
        let dir = setup_test_dir();
        assert!(list(&dir.path().join("missing"), true).is_empty());
        assert!(list(&dir.path().join("a.txt"), true).is_empty());
        assert!(matches!(
            try_list(&dir.path().join("missing"), false),
            Err(InspectorError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_list_entries_reports_folders() {
        let dir = setup_test_dir();
        let entries = list_entries(dir.path(), false);
        let sub = entries.iter().find(|e| e.name() == "sub").unwrap();
        assert!(sub.is_dir());
        let file = entries.iter().find(|e| e.name() == "a.txt").unwrap();
        assert!(!file.is_dir());
    }

    #[test]
    fn test_export_writes_report_text() {
        let dir = setup_test_dir();
        let item = dir.path().join("a.txt");
        let out = dir.path().join("a_info.txt");
        export_report(&item, &out).unwrap();
        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, metadata::describe(&item).to_text());
        assert_eq!(written.lines().next().unwrap(), item.display().to_string());
    }

    #[test]
    fn test_export_to_missing_folder_fails() {
        let dir = setup_test_dir();
        let out = dir.path().join("nowhere").join("out.txt");
        let result = export_report(&dir.path().join("a.txt"), &out);
        assert!(matches!(result, Err(InspectorError::WriteFailed { .. })));
    }

    #[test]
    fn test_suggested_export_name() {
        assert_eq!(suggested_export_name(Path::new("/tmp/demo/a.txt")), "a_info.txt");
        assert_eq!(suggested_export_name(Path::new("/tmp/demo")), "demo_info.txt");
        assert_eq!(suggested_export_name(Path::new("/")), "item_info.txt");
    }
}
