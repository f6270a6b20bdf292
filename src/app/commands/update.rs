//! Descriptor mutation and persistence.

use crate::app::AppContext;
use crate::app::commands::read::load_descriptor;
use crate::domain::{AppError, ProjectInfo, UpdateProjectInfoPair, resolve_metadata};
use crate::ports::DescriptorStore;

/// Apply `pair` to the descriptor of `project_id`.
///
/// The change is written back only when `pair.save_into_json_file` is set;
/// the updated in-memory descriptor is returned either way.
pub fn update_descriptor<S: DescriptorStore>(
    ctx: &AppContext<S>,
    project_id: &str,
    pair: &UpdateProjectInfoPair,
) -> Result<ProjectInfo, AppError> {
    let metadata = resolve_metadata(ctx.config(), project_id);
    let Some(mut info) = load_descriptor(ctx.store(), &metadata.info_file)? else {
        return Err(AppError::ProjectNotFound {
            project_id: project_id.to_string(),
            path: metadata.info_file,
        });
    };

    let previous = info.set(pair.key.clone(), pair.value.clone());
    tracing::debug!(
        project_id,
        key = %pair.key,
        value = %pair.value,
        replaced = previous.is_some(),
        persist = pair.save_into_json_file,
        "updating project info"
    );

    save_descriptor(ctx, project_id, &info, pair.save_into_json_file)?;
    Ok(info)
}

/// Write `info` over the descriptor of `project_id` when `should_save` is set.
pub fn save_descriptor<S: DescriptorStore>(
    ctx: &AppContext<S>,
    project_id: &str,
    info: &ProjectInfo,
    should_save: bool,
) -> Result<(), AppError> {
    if !should_save {
        return Ok(());
    }

    let metadata = resolve_metadata(ctx.config(), project_id);
    let mut content = serde_json::to_string_pretty(info)?;
    content.push('\n');

    ctx.store().write_descriptor(&metadata.info_file, &content)?;
    tracing::info!(project_id, path = %metadata.info_file.display(), "saved project info");
    Ok(())
}
