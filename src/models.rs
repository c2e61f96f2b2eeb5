use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Attribute key for the opaque extended attribute bag. Never rendered.
pub const EXTENDED_ATTRIBUTES_KEY: &str = "extended_attributes";

/// One immediate child of a listed folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub path: PathBuf,
}

impl DirectoryEntry {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Asks the filesystem every time; entries are short-lived.
    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn extension(&self) -> String {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string()
    }
}

/// The folder and item the user is looking at.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_folder: Option<PathBuf>,
    pub current_item: Option<PathBuf>,
}

impl SelectionState {
    pub fn new(folder: impl Into<PathBuf>, item: Option<PathBuf>) -> Self {
        Self {
            current_folder: Some(folder.into()),
            current_item: item,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current_folder.is_none() && self.current_item.is_none()
    }
}

/// Flat key/value rendering of one path's filesystem attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataReport {
    pub path: PathBuf,
    attributes: Option<Vec<(String, String)>>,
}

impl MetadataReport {
    pub fn from_attributes(path: &Path, attributes: BTreeMap<String, String>) -> Self {
        let attributes = attributes
            .into_iter()
            .filter(|(key, _)| key != EXTENDED_ATTRIBUTES_KEY)
            .collect();
        Self {
            path: path.to_path_buf(),
            attributes: Some(attributes),
        }
    }

    pub fn unavailable(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            attributes: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.attributes.is_some()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        self.attributes.as_deref().unwrap_or(&[])
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `path`, a blank line, then `key:\tvalue` per attribute.
    pub fn to_text(&self) -> String {
        let path = self.path.display();
        match &self.attributes {
            None => format!("No information available for {}", path),
            Some(attributes) => {
                let mut text = format!("{}\n\n", path);
                for (key, value) in attributes {
                    text.push_str(&format!("{}:\t{}\n", key, value));
                }
                text
            }
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub enum Theme {
    Light,
    Dark,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, String> {
        let mut attrs = BTreeMap::new();
        attrs.insert("type".to_string(), "regular".to_string());
        attrs.insert("size".to_string(), "42".to_string());
        attrs.insert(EXTENDED_ATTRIBUTES_KEY.to_string(), "user.a=1".to_string());
        attrs
    }

    #[test]
    fn test_report_drops_extended_attributes() {
        let report = MetadataReport::from_attributes(Path::new("/tmp/a.txt"), sample());
        assert_eq!(report.attributes().len(), 2);
        assert!(report.get(EXTENDED_ATTRIBUTES_KEY).is_none());
        assert!(!report.to_text().contains(EXTENDED_ATTRIBUTES_KEY));
    }

    #[test]
    fn test_report_text_layout() {
        let report = MetadataReport::from_attributes(Path::new("/tmp/a.txt"), sample());
        let text = report.to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["/tmp/a.txt", "", "size:\t42", "type:\tregular"]);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_unavailable_report_is_one_line() {
        let report = MetadataReport::unavailable(Path::new("/gone"));
        assert!(!report.is_available());
        assert_eq!(report.to_text().lines().count(), 1);
        assert_eq!(report.to_text(), "No information available for /gone");
    }

    #[test]
    fn test_entry_name_and_extension() {
        let entry = DirectoryEntry::new(PathBuf::from("/tmp/demo/notes.md"));
        assert_eq!(entry.name(), "notes.md");
        assert_eq!(entry.extension(), "md");
    }

    #[test]
    fn test_selection_state_empty() {
        assert!(SelectionState::default().is_empty());
        assert!(!SelectionState::new("/tmp", None).is_empty());
    }
}
