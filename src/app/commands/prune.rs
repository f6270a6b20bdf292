//! Guarded deletion of descriptor files and project directories.

use std::path::{Component, Path};

use crate::adapters::filesystem::prune::{EntryRemoval, remove_entry, remove_tree};
use crate::app::AppContext;
use crate::domain::protected_path::ensure_deletable;
use crate::domain::{AppError, resolve_metadata};
use crate::ports::DescriptorStore;

/// Delete `file_name` inside `dir`.
///
/// Missing entries are not an error. A directory entry is removed together
/// with its contents, so `dir/file_name` is gone afterwards either way.
pub fn delete_file(dir: &Path, file_name: &str) -> Result<(), AppError> {
    if !is_single_component(file_name) {
        return Err(AppError::invalid_argument(format!(
            "'{file_name}' is not a plain entry name"
        )));
    }

    let target = dir.join(file_name);
    match remove_entry(&target)? {
        EntryRemoval::File => tracing::debug!(path = %target.display(), "deleted file"),
        EntryRemoval::Directory => tracing::info!(path = %target.display(), "deleted directory"),
        EntryRemoval::Missing => tracing::debug!(path = %target.display(), "nothing to delete"),
    }
    Ok(())
}

/// Recursively delete `path`. The filesystem root is always refused.
pub fn delete_folder(path: &Path) -> Result<(), AppError> {
    delete_folder_guarded(path, &[])
}

/// Recursively delete `path`, also refusing the configured data and log roots.
pub fn delete_store_folder<S: DescriptorStore>(
    ctx: &AppContext<S>,
    path: &Path,
) -> Result<(), AppError> {
    let config = ctx.config();
    delete_folder_guarded(path, &[config.data_root.as_path(), config.log_root.as_path()])
}

/// Delete the whole metadata directory of `project_id`, descriptor included.
pub fn remove_project<S: DescriptorStore>(
    ctx: &AppContext<S>,
    project_id: &str,
) -> Result<(), AppError> {
    if !is_single_component(project_id) {
        return Err(AppError::invalid_argument(format!(
            "'{project_id}' is not a valid project ID"
        )));
    }

    let metadata = resolve_metadata(ctx.config(), project_id);
    delete_store_folder(ctx, &metadata.dir)
}

fn delete_folder_guarded(path: &Path, protected: &[&Path]) -> Result<(), AppError> {
    ensure_deletable(path, protected)?;

    if remove_tree(path)? {
        tracing::info!(path = %path.display(), "deleted folder");
    } else {
        tracing::debug!(path = %path.display(), "folder already absent");
    }
    Ok(())
}

fn is_single_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!((components.next(), components.next()), (Some(Component::Normal(_)), None))
}
