use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::DescriptorStore;

/// In-memory descriptor store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryDescriptorStore {
    // Arc<Mutex> so clones share the same files
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryDescriptorStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory so writes into it succeed.
    pub fn add_dir(&self, dir: impl AsRef<Path>) {
        self.dirs.lock().unwrap().insert(dir.as_ref().to_path_buf());
    }

    /// Seed a file, registering its parent directory.
    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl DescriptorStore for MemoryDescriptorStore {
    fn read_descriptor(&self, path: &Path) -> Result<Option<String>, AppError> {
        Ok(self.file(path))
    }

    fn write_descriptor(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let parent = path.parent().unwrap_or(Path::new(""));
        if !self.dirs.lock().unwrap().contains(parent) {
            return Err(AppError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", parent.display()),
            )));
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn descriptor_exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn list_subdirectories(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let dirs = self.dirs.lock().unwrap();
        Ok(dirs
            .iter()
            .filter(|candidate| candidate.parent() == Some(dir))
            .filter_map(|candidate| candidate.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }
}
