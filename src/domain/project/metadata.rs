//! Canonical on-disk locations for a project.
//!
//! Paths are computed as strings so that trailing separators survive:
//! `dir` always ends with `/`, and `info_file` is `dir` plus the
//! descriptor file name. Nothing here touches the filesystem, so a
//! resolved path says nothing about whether the project exists.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::StoreConfig;

/// File extension of a project descriptor.
pub const DESCRIPTOR_EXTENSION: &str = "json";

/// Paths derived from a project ID. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMetadata {
    /// `<dataRoot>/<projectID>/`
    pub dir: PathBuf,
    /// `<dataRoot>/<projectID>/<projectID>.json`
    pub info_file: PathBuf,
    /// Shared `<logRoot>/`, identical for every project.
    pub log_dir: PathBuf,
}

/// Resolve the metadata paths for `project_id`. Any string is accepted.
pub fn resolve_metadata(config: &StoreConfig, project_id: &str) -> ProjectMetadata {
    let dir = format!("{}{}/", with_trailing_separator(&config.data_root), project_id);
    let info_file = format!("{}{}", dir, descriptor_file_name(project_id));
    let log_dir = with_trailing_separator(&config.log_root);

    ProjectMetadata {
        dir: PathBuf::from(dir),
        info_file: PathBuf::from(info_file),
        log_dir: PathBuf::from(log_dir),
    }
}

/// `<projectID>.json`
pub fn descriptor_file_name(project_id: &str) -> String {
    format!("{project_id}.{DESCRIPTOR_EXTENSION}")
}

fn with_trailing_separator(root: &Path) -> String {
    let mut rendered = root.to_string_lossy().into_owned();
    if !rendered.ends_with('/') {
        rendered.push('/');
    }
    rendered
}
