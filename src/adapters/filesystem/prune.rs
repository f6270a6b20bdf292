//! Raw removal primitives. Protection checks live in the callers.

use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;

/// What happened to a single directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryRemoval {
    File,
    /// A directory and everything below it.
    Directory,
    Missing,
}

/// Remove a single entry. Directories go with their contents; symlinks are
/// unlinked, never followed.
pub fn remove_entry(path: &Path) -> Result<EntryRemoval, AppError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(EntryRemoval::Missing),
        Err(err) => return Err(AppError::from(err)),
    };

    let (result, removed) = if metadata.is_dir() {
        (fs::remove_dir_all(path), EntryRemoval::Directory)
    } else {
        (fs::remove_file(path), EntryRemoval::File)
    };
    match result {
        Ok(()) => Ok(removed),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(EntryRemoval::Missing),
        Err(err) => Err(AppError::from(err)),
    }
}

/// Recursively remove a directory. Returns `false` when nothing existed.
///
/// Symlinks are not followed; a path that is not a real directory is an
/// `InvalidArgument`.
pub fn remove_tree(path: &Path) -> Result<bool, AppError> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(AppError::from(err)),
    };

    if !metadata.is_dir() {
        return Err(AppError::invalid_argument(format!(
            "'{}' is not a directory",
            path.display()
        )));
    }

    match fs::remove_dir_all(path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(AppError::from(err)),
    }
}
