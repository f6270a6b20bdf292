//! Filesystem adapters.
//!
//! `FilesystemStore` implements `DescriptorStore` on top of `std::fs`, with
//! temp-file-then-rename writes. The `prune` module holds the raw removal
//! primitives used by the pruning commands.

pub mod prune;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::AppError;
use crate::ports::DescriptorStore;

/// Descriptor store backed by the local filesystem. Paths are used as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemStore;

impl FilesystemStore {
    pub fn new() -> Self {
        Self
    }
}

impl DescriptorStore for FilesystemStore {
    fn read_descriptor(&self, path: &Path) -> Result<Option<String>, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(AppError::from(err)),
        }
    }

    fn write_descriptor(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).ok_or_else(|| {
            AppError::invalid_argument(format!(
                "descriptor path has no parent directory: {}",
                path.display()
            ))
        })?;

        // Fails with NotFound when the project directory is missing.
        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;
        temp.as_file().sync_all()?;

        if let Ok(existing) = fs::metadata(path) {
            temp.as_file().set_permissions(existing.permissions())?;
        }

        temp.persist(path).map_err(|err| AppError::Io(err.error))?;
        Ok(())
    }

    fn descriptor_exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(AppError::from(err)),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::debug!(
                    dir = %dir.display(),
                    name = %raw.to_string_lossy(),
                    "skipping directory with non UTF-8 name"
                ),
            }
        }
        names.sort();
        Ok(names)
    }
}
