//! Filesystem metadata of a single path, flattened into a [`MetadataReport`].
//!
//! Attributes come out of `symlink_metadata`, so a link is described as a
//! link rather than as its target. Keys are ordered alphabetically.

use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fs::{self, FileType, Metadata};
use std::io;
use std::path::Path;
use std::time::SystemTime;
use tracing::debug;

use crate::models::MetadataReport;

pub fn describe(path: &Path) -> MetadataReport {
    match collect_attributes(path) {
        Ok(attributes) => MetadataReport::from_attributes(path, attributes),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "no metadata available");
            MetadataReport::unavailable(path)
        }
    }
}

pub fn collect_attributes(path: &Path) -> io::Result<BTreeMap<String, String>> {
    let meta = fs::symlink_metadata(path)?;
    let mut attributes = BTreeMap::new();

    attributes.insert("type".to_string(), file_type_name(&meta.file_type()).to_string());
    attributes.insert("size".to_string(), meta.len().to_string());
    attributes.insert("read_only".to_string(), meta.permissions().readonly().to_string());

    let times = [
        ("creation_date", meta.created()),
        ("modification_date", meta.modified()),
        ("access_date", meta.accessed()),
    ];
    for (key, time) in times {
        // Not every filesystem records every timestamp.
        if let Ok(time) = time {
            attributes.insert(key.to_string(), format_timestamp(time));
        }
    }

    insert_platform_attributes(&meta, &mut attributes);
    Ok(attributes)
}

/// The `type` attribute of `path` without building a whole report.
pub fn kind_of(path: &Path) -> Option<&'static str> {
    fs::symlink_metadata(path)
        .ok()
        .map(|meta| file_type_name(&meta.file_type()))
}

fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S %z")
        .to_string()
}

#[cfg(unix)]
fn file_type_name(file_type: &FileType) -> &'static str {
    use std::os::unix::fs::FileTypeExt;

    if file_type.is_dir() {
        "directory"
    } else if file_type.is_file() {
        "regular"
    } else if file_type.is_symlink() {
        "symbolic_link"
    } else if file_type.is_block_device() {
        "block_special"
    } else if file_type.is_char_device() {
        "character_special"
    } else if file_type.is_fifo() {
        "fifo"
    } else if file_type.is_socket() {
        "socket"
    } else {
        "unknown"
    }
}

#[cfg(not(unix))]
fn file_type_name(file_type: &FileType) -> &'static str {
    if file_type.is_dir() {
        "directory"
    } else if file_type.is_file() {
        "regular"
    } else if file_type.is_symlink() {
        "symbolic_link"
    } else {
        "unknown"
    }
}

#[cfg(unix)]
fn insert_platform_attributes(meta: &Metadata, attributes: &mut BTreeMap<String, String>) {
    use nix::unistd::{Gid, Group, Uid, User};
    use std::os::unix::fs::MetadataExt;

    attributes.insert("posix_permissions".to_string(), format!("{:04o}", meta.mode() & 0o7777));
    attributes.insert("reference_count".to_string(), meta.nlink().to_string());
    attributes.insert("owner_account_id".to_string(), meta.uid().to_string());
    attributes.insert("group_owner_account_id".to_string(), meta.gid().to_string());
    attributes.insert("system_number".to_string(), meta.dev().to_string());
    attributes.insert("system_file_number".to_string(), meta.ino().to_string());

    if let Ok(Some(user)) = User::from_uid(Uid::from_raw(meta.uid())) {
        attributes.insert("owner_account_name".to_string(), user.name);
    }
    if let Ok(Some(group)) = Group::from_gid(Gid::from_raw(meta.gid())) {
        attributes.insert("group_owner_account_name".to_string(), group.name);
    }
}

#[cfg(not(unix))]
fn insert_platform_attributes(_meta: &Metadata, _attributes: &mut BTreeMap<String, String>) {}
