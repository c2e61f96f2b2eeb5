use std::path::{Path, PathBuf};

use crate::metadata;
use crate::models::DirectoryEntry;

/// Size in the largest binary unit that keeps the value at or above one.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} bytes", bytes);
    }
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}

/// Icon for a report's `type` attribute.
pub fn type_icon(kind: &str) -> &'static str {
    match kind {
        "directory" => "📁",
        "regular" => "📄",
        "symbolic_link" => "🔗",
        "block_special" | "character_special" => "💽",
        "fifo" | "socket" => "🔌",
        _ => "❔",
    }
}

pub fn entry_icon(entry: &DirectoryEntry) -> &'static str {
    type_icon(metadata::kind_of(&entry.path).unwrap_or("unknown"))
}

/// `(label, path)` for every ancestor of `path`, root first.
pub fn path_segments(path: &Path) -> Vec<(String, PathBuf)> {
    let mut segments: Vec<(String, PathBuf)> = path
        .ancestors()
        .map(|ancestor| {
            let label = match ancestor.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => ancestor.display().to_string(),
            };
            (label, ancestor.to_path_buf())
        })
        .filter(|(label, _)| !label.is_empty())
        .collect();
    segments.reverse();
    segments
}
