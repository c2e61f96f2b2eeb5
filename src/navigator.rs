use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::metadata;
use crate::models::{DirectoryEntry, MetadataReport, SelectionState};
use crate::operations;

pub const APP_TITLE: &str = "File Inspector";

/// What activating (double-clicking) the selected item asks the shell to do.
#[derive(Debug, PartialEq, Eq)]
pub enum Activation {
    None,
    Entered,
    Open(PathBuf),
}

/// Owns the selection and the listing of the selected folder.
///
/// Every mutation relists or re-describes explicitly; shells only render.
#[derive(Debug, Default)]
pub struct Navigator {
    state: SelectionState,
    entries: Vec<DirectoryEntry>,
    show_hidden: bool,
}

impl Navigator {
    pub fn new(show_hidden: bool) -> Self {
        Self {
            show_hidden,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn current_folder(&self) -> Option<&Path> {
        self.state.current_folder.as_deref()
    }

    pub fn current_item(&self) -> Option<&Path> {
        self.state.current_item.as_deref()
    }

    /// Relative folders are anchored at the working directory first, so
    /// moving up and the persisted record never see a bare relative path.
    pub fn open_folder(&mut self, folder: impl Into<PathBuf>) {
        let folder = folder.into();
        let folder = std::path::absolute(&folder).unwrap_or(folder);
        info!(folder = %folder.display(), "opening folder");
        self.entries = operations::list_entries(&folder, self.show_hidden);
        self.state.current_folder = Some(folder);
        self.state.current_item = None;
    }

    pub fn refresh(&mut self) {
        let Some(folder) = self.state.current_folder.clone() else {
            return;
        };
        self.entries = operations::list_entries(&folder, self.show_hidden);
        if self.selected_row().is_none() {
            self.state.current_item = None;
        }
    }

    pub fn set_show_hidden(&mut self, show_hidden: bool) {
        if self.show_hidden == show_hidden {
            return;
        }
        self.show_hidden = show_hidden;
        self.refresh();
    }

    /// Selects the row at `index`; `None` or an out-of-range row deselects.
    pub fn select_item(&mut self, index: Option<usize>) -> Option<MetadataReport> {
        let entry = index.and_then(|i| self.entries.get(i)).cloned();
        self.state.current_item = entry.map(|e| e.path);
        self.report()
    }

    /// Selects `path` if it is one of the listed entries.
    pub fn select_path(&mut self, path: &Path) -> Option<MetadataReport> {
        let index = self.entries.iter().position(|e| e.path == path);
        self.select_item(index)
    }

    pub fn selected_row(&self) -> Option<usize> {
        let item = self.state.current_item.as_deref()?;
        self.entries.iter().position(|e| e.path == item)
    }

    pub fn report(&self) -> Option<MetadataReport> {
        self.state.current_item.as_deref().map(metadata::describe)
    }

    pub fn can_move_up(&self) -> bool {
        self.state.current_folder.is_some()
    }

    pub fn can_export(&self) -> bool {
        self.state.current_item.is_some()
    }

    pub fn move_up(&mut self) -> bool {
        let parent = self
            .current_folder()
            .and_then(Path::parent)
            .map(Path::to_path_buf);
        match parent {
            Some(parent) => {
                self.open_folder(parent);
                true
            }
            None => false,
        }
    }

    pub fn move_down(&mut self) -> Activation {
        let Some(item) = self.state.current_item.clone() else {
            return Activation::None;
        };
        if item.is_dir() {
            self.open_folder(item);
            Activation::Entered
        } else {
            Activation::Open(item)
        }
    }

    /// Reapplies a persisted selection.
    ///
    /// The item is kept only if the fresh listing still contains it.
    pub fn restore(&mut self, state: SelectionState) {
        let Some(folder) = state.current_folder else {
            return;
        };
        self.open_folder(folder);
        if let Some(item) = state.current_item {
            let item = std::path::absolute(&item).unwrap_or(item);
            if self.select_path(&item).is_none() {
                debug!(item = %item.display(), "restored item is no longer listed");
            }
        }
    }

    pub fn title(&self) -> String {
        match self.current_folder() {
            Some(folder) => folder.display().to_string(),
            None => APP_TITLE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn setup_test_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        File::create(dir.path().join("a.txt")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("sub").join("inner.txt")).unwrap();
        dir
    }

    #[test]
    fn test_initial_state() {
        let nav = Navigator::new(false);
        assert!(nav.state().is_empty());
        assert_eq!(nav.title(), APP_TITLE);
        assert!(!nav.can_move_up());
        assert!(!nav.can_export());
        assert!(nav.report().is_none());
    }

    #[test]
    fn test_open_folder_clears_item() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.open_folder(dir.path());
        nav.select_item(Some(0));
        assert!(nav.can_export());

        nav.open_folder(dir.path());
        assert!(nav.current_item().is_none());
        assert_eq!(nav.entries().len(), 2);
        assert_eq!(nav.title(), dir.path().display().to_string());
    }

    #[test]
    fn test_select_item_describes_it() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.open_folder(dir.path());

        let report = nav.select_item(Some(0)).unwrap();
        assert_eq!(report.path, dir.path().join("a.txt"));
        assert_eq!(nav.selected_row(), Some(0));

        assert!(nav.select_item(Some(99)).is_none());
        assert!(nav.current_item().is_none());
        assert!(nav.select_item(None).is_none());
    }

    #[test]
    fn test_move_down_and_up() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.open_folder(dir.path());

        nav.select_path(&dir.path().join("sub"));
        assert_eq!(nav.move_down(), Activation::Entered);
        assert_eq!(nav.current_folder(), Some(dir.path().join("sub").as_path()));
        assert_eq!(nav.entries().len(), 1);

        assert!(nav.move_up());
        assert_eq!(nav.current_folder(), Some(dir.path()));
        assert!(nav.current_item().is_none());
    }

    #[test]
    fn test_move_down_on_file_asks_to_open() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.open_folder(dir.path());
        assert_eq!(nav.move_down(), Activation::None);

        nav.select_path(&dir.path().join("a.txt"));
        assert_eq!(nav.move_down(), Activation::Open(dir.path().join("a.txt")));
        assert_eq!(nav.current_folder(), Some(dir.path()));
    }

    #[test]
    fn test_relative_folder_is_anchored() {
        let mut nav = Navigator::new(false);
        nav.open_folder("src");
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(nav.current_folder(), Some(cwd.join("src").as_path()));
        assert!(!nav.entries().is_empty());

        assert!(nav.move_up());
        assert_eq!(nav.current_folder(), Some(cwd.as_path()));
        assert_eq!(nav.title(), cwd.display().to_string());
        assert!(!nav.entries().is_empty());
        assert!(nav.can_move_up());
    }

    #[test]
    fn test_restore_relative_record() {
        let mut nav = Navigator::new(false);
        nav.restore(SelectionState::new("src", Some(PathBuf::from("src/main.rs"))));
        let src = std::env::current_dir().unwrap().join("src");
        assert_eq!(nav.current_folder(), Some(src.as_path()));
        assert_eq!(nav.current_item(), Some(src.join("main.rs").as_path()));
    }

    #[test]
    fn test_move_up_at_root() {
        let mut nav = Navigator::new(false);
        assert!(!nav.move_up());
        nav.open_folder("/");
        assert!(!nav.move_up());
        assert_eq!(nav.current_folder(), Some(Path::new("/")));
    }

    #[test]
    fn test_toggle_hidden_keeps_visible_item() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(true);
        nav.open_folder(dir.path());
        assert_eq!(nav.entries().len(), 3);

        nav.select_path(&dir.path().join(".hidden"));
        nav.set_show_hidden(false);
        assert!(nav.current_item().is_none());

        nav.select_path(&dir.path().join("a.txt"));
        nav.set_show_hidden(true);
        assert_eq!(nav.current_item(), Some(dir.path().join("a.txt").as_path()));
        assert_eq!(nav.selected_row(), Some(1));
    }

    #[test]
    fn test_restore_reselects_row() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.restore(SelectionState::new(dir.path(), Some(dir.path().join("sub"))));
        assert_eq!(nav.selected_row(), Some(1));
        assert!(nav.report().unwrap().is_available());
    }

    #[test]
    fn test_restore_drops_stale_item() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.restore(SelectionState::new(dir.path(), Some(dir.path().join("deleted.txt"))));
        assert_eq!(nav.current_folder(), Some(dir.path()));
        assert!(nav.current_item().is_none());

        let mut nav = Navigator::new(false);
        nav.restore(SelectionState::new(dir.path(), Some(dir.path().join(".hidden"))));
        assert!(nav.current_item().is_none());
    }

    #[test]
    fn test_restore_missing_folder_is_empty() {
        let dir = setup_test_dir();
        let mut nav = Navigator::new(false);
        nav.restore(SelectionState::new(dir.path().join("gone"), None));
        assert!(nav.entries().is_empty());
        assert!(nav.can_move_up());
    }
}
