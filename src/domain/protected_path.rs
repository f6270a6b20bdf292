//! Guard against recursive deletion of paths that must never be pruned.

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}

/// Fail with `InvalidArgument` when `path` is empty, a filesystem root, or
/// one of `protected` (or an ancestor of one) after normalization.
pub fn ensure_deletable(path: &Path, protected: &[&Path]) -> Result<(), AppError> {
    if path.as_os_str().is_empty() {
        return Err(AppError::invalid_argument("refusing to delete an empty path"));
    }

    let normalized = normalize_path(path);
    if normalized.as_os_str().is_empty() || normalized.parent().is_none() {
        return Err(AppError::invalid_argument(format!(
            "refusing to delete filesystem root '{}'",
            path.display()
        )));
    }

    if protected.iter().any(|root| normalize_path(root).starts_with(&normalized)) {
        return Err(AppError::invalid_argument(format!(
            "refusing to delete protected directory '{}'",
            path.display()
        )));
    }

    Ok(())
}
