//! Remembers the selected folder and item between launches.
//!
//! The record is two `\n`-terminated lines: folder, then item. Either may be
//! empty. Nothing here checks that the paths still exist.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{InspectorError, InspectorResult};
use crate::models::SelectionState;

const APP_DIR: &str = "file-inspector";
const RECORD_NAME: &str = "selection.txt";

#[derive(Clone, Debug)]
pub struct SelectionStore {
    path: PathBuf,
}

impl SelectionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Per-user application data location.
    pub fn default_location() -> Self {
        let path = match dirs::data_dir() {
            Some(data_dir) => data_dir.join(APP_DIR).join(RECORD_NAME),
            None => PathBuf::from(".").join("file-inspector-selection.txt"),
        };
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replaces the record through a temp file + rename.
    pub fn save(&self, state: &SelectionState) -> InspectorResult<()> {
        encode(state)
            .and_then(|record| self.write_record(&record))
            .map_err(|e| InspectorError::write_failed(&self.path, e))?;
        info!(record = %self.path.display(), "saved selection");
        Ok(())
    }

    fn write_record(&self, contents: &str) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    pub fn try_restore(&self) -> InspectorResult<SelectionState> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                InspectorError::RecordMissing { path: self.path.clone() }
            } else {
                InspectorError::unreadable(&self.path, e)
            }
        })?;
        decode(&contents).ok_or_else(|| InspectorError::RecordMalformed { path: self.path.clone() })
    }

    /// Any problem with the record yields the empty state.
    pub fn restore(&self) -> SelectionState {
        self.try_restore().unwrap_or_else(|e| {
            debug!(error = %e, "starting without a previous selection");
            SelectionState::default()
        })
    }

    pub fn clear(&self) -> InspectorResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(InspectorError::write_failed(&self.path, e)),
        }
    }
}

fn encode(state: &SelectionState) -> io::Result<String> {
    let folder = record_line(state.current_folder.as_deref())?;
    let item = record_line(state.current_item.as_deref())?;
    Ok(format!("{}\n{}\n", folder, item))
}

/// A path must come back unchanged from its own line of the record.
fn record_line(path: Option<&Path>) -> io::Result<&str> {
    let Some(path) = path else {
        return Ok("");
    };
    let line = path.to_str().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("{} is not valid UTF-8", path.display()))
    })?;
    if line.contains('\n') || line.ends_with('\r') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{:?} cannot be stored on a single line", line),
        ));
    }
    Ok(line)
}

fn decode(contents: &str) -> Option<SelectionState> {
    let lines: Vec<&str> = contents
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    if lines.len() < 2 {
        return None;
    }

    if lines[0].is_empty() {
        return Some(SelectionState::default());
    }
    let item = Some(lines[1]).filter(|line| !line.is_empty()).map(PathBuf::from);
    Some(SelectionState::new(lines[0], item))
}
