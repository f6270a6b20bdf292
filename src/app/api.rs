//! API Facade for collaborators.
//!
//! Each function builds a filesystem-backed `AppContext` from a
//! `StoreConfig` and runs the matching command.

use std::path::Path;

use crate::adapters::FilesystemStore;
use crate::app::AppContext;
use crate::app::commands::{prune, read, update};
use crate::domain::project;

pub use crate::domain::{
    AppError, ProjectInfo, ProjectMetadata, ProjmetaConfig, StoreConfig, UpdateProjectInfoPair,
};

fn create_context(config: &StoreConfig) -> AppContext<FilesystemStore> {
    AppContext::new(config.clone(), FilesystemStore::new())
}

// =============================================================================
// Path Resolver
// =============================================================================

/// Compute the metadata paths of `project_id`. No filesystem access.
pub fn resolve_metadata(config: &StoreConfig, project_id: &str) -> ProjectMetadata {
    project::resolve_metadata(config, project_id)
}

// =============================================================================
// Descriptor Reader
// =============================================================================

/// Read a descriptor file, yielding `None` when the path is absent or unusable.
pub fn read_descriptor(path: Option<&Path>) -> Option<ProjectInfo> {
    read::read_descriptor(&FilesystemStore::new(), path)
}

/// Read a descriptor file, distinguishing "missing" from hard failures.
pub fn load_descriptor(path: &Path) -> Result<Option<ProjectInfo>, AppError> {
    read::load_descriptor(&FilesystemStore::new(), path)
}

/// Read the descriptor of `project_id`.
pub fn project_info(config: &StoreConfig, project_id: &str) -> Option<ProjectInfo> {
    read::project_info(&create_context(config), project_id)
}

/// List project IDs with a descriptor under the data root.
pub fn list_projects(config: &StoreConfig) -> Result<Vec<String>, AppError> {
    read::list_projects(&create_context(config))
}

// =============================================================================
// Descriptor Mutator
// =============================================================================

/// Apply one key/value change to the descriptor of `project_id`.
pub fn update_descriptor(
    config: &StoreConfig,
    project_id: &str,
    pair: &UpdateProjectInfoPair,
) -> Result<ProjectInfo, AppError> {
    update::update_descriptor(&create_context(config), project_id, pair)
}

/// Persist `info` as the descriptor of `project_id` when `should_save` is set.
pub fn save_descriptor(
    config: &StoreConfig,
    project_id: &str,
    info: &ProjectInfo,
    should_save: bool,
) -> Result<(), AppError> {
    update::save_descriptor(&create_context(config), project_id, info, should_save)
}

// =============================================================================
// Filesystem Pruner
// =============================================================================

/// Delete `file_name` inside `dir`. Idempotent.
pub fn delete_file(dir: &Path, file_name: &str) -> Result<(), AppError> {
    prune::delete_file(dir, file_name)
}

/// Recursively delete `path`, refusing the filesystem root. Idempotent.
pub fn delete_folder(path: &Path) -> Result<(), AppError> {
    prune::delete_folder(path)
}

/// Recursively delete `path`, also refusing the configured roots.
pub fn delete_store_folder(config: &StoreConfig, path: &Path) -> Result<(), AppError> {
    prune::delete_store_folder(&create_context(config), path)
}

/// Delete the metadata directory of `project_id`. Idempotent.
pub fn remove_project(config: &StoreConfig, project_id: &str) -> Result<(), AppError> {
    prune::remove_project(&create_context(config), project_id)
}
