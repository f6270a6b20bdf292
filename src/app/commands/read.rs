//! Descriptor reading.
//!
//! `load_descriptor` distinguishes "no such file" (`Ok(None)`) from hard
//! failures. `read_descriptor` collapses every failure into `None` for
//! callers that only care whether usable data exists.

use std::path::Path;

use serde_json::Value;

use crate::app::AppContext;
use crate::domain::project::{PROJECT_ID_KEY, descriptor_file_name};
use crate::domain::{AppError, ProjectInfo, resolve_metadata};
use crate::ports::DescriptorStore;

/// Load and parse the descriptor at `path`.
pub fn load_descriptor<S: DescriptorStore>(
    store: &S,
    path: &Path,
) -> Result<Option<ProjectInfo>, AppError> {
    let Some(content) = store.read_descriptor(path)? else {
        return Ok(None);
    };

    let value: Value = serde_json::from_str(&content).map_err(|err| {
        AppError::MalformedDescriptor { path: path.to_path_buf(), details: err.to_string() }
    })?;

    match value {
        Value::Object(entries) => Ok(Some(ProjectInfo::from(entries))),
        other => Err(AppError::MalformedDescriptor {
            path: path.to_path_buf(),
            details: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
    }
}

/// Read the descriptor at `path`, yielding `None` on any failure.
pub fn read_descriptor<S: DescriptorStore>(store: &S, path: Option<&Path>) -> Option<ProjectInfo> {
    let Some(path) = path.filter(|p| !p.as_os_str().is_empty()) else {
        tracing::debug!("no descriptor path given");
        return None;
    };

    match load_descriptor(store, path) {
        Ok(Some(info)) => Some(info),
        Ok(None) => {
            tracing::debug!(path = %path.display(), "descriptor not found");
            None
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "descriptor unreadable");
            None
        }
    }
}

/// Resolve `project_id` and read its descriptor.
pub fn project_info<S: DescriptorStore>(
    ctx: &AppContext<S>,
    project_id: &str,
) -> Option<ProjectInfo> {
    let metadata = resolve_metadata(ctx.config(), project_id);
    let info = read_descriptor(ctx.store(), Some(metadata.info_file.as_path()))?;

    if info.project_id().is_some_and(|embedded| embedded != project_id) {
        tracing::warn!(
            project_id,
            embedded = info.get_str(PROJECT_ID_KEY),
            "descriptor projectID does not match its directory"
        );
    }
    Some(info)
}

/// Every project ID under the data root with a descriptor at its canonical location.
pub fn list_projects<S: DescriptorStore>(ctx: &AppContext<S>) -> Result<Vec<String>, AppError> {
    let data_root = &ctx.config().data_root;
    let mut projects: Vec<String> = ctx
        .store()
        .list_subdirectories(data_root)?
        .into_iter()
        .filter(|id| {
            ctx.store().descriptor_exists(&data_root.join(id).join(descriptor_file_name(id)))
        })
        .collect();
    projects.sort();
    Ok(projects)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
