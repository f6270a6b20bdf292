//! Descriptor file access.
//!
//! This port moves descriptor text in and out of storage. It does not know
//! about JSON or project layout; parsing and path derivation belong to the
//! domain and the commands that use this port.

use std::path::Path;

use crate::domain::AppError;

/// Port for reading and writing descriptor files.
pub trait DescriptorStore {
    /// Read a descriptor as UTF-8 text. `Ok(None)` when nothing exists at `path`.
    fn read_descriptor(&self, path: &Path) -> Result<Option<String>, AppError>;

    /// Replace the descriptor at `path` with `content`.
    ///
    /// Readers must never observe a partially written file. The parent
    /// directory is not created; a missing parent is an `io::ErrorKind::NotFound`.
    fn write_descriptor(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Check whether a descriptor file exists at `path`.
    fn descriptor_exists(&self, path: &Path) -> bool;

    /// Names of the immediate subdirectories of `dir`. Empty when `dir` is absent.
    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>, AppError>;
}
