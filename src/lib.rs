//! projmeta: per-project metadata store for file-watcher projects.
//!
//! A project ID maps to `<dataRoot>/<projectID>/<projectID>.json`. This crate
//! resolves those paths, reads and partially updates the JSON descriptor,
//! and prunes descriptor files and project directories. It keeps no cache
//! and takes no locks; callers that need per-project serialization provide
//! it themselves.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    delete_file, delete_folder, delete_store_folder, list_projects, load_descriptor, project_info,
    read_descriptor, remove_project, resolve_metadata, save_descriptor, update_descriptor,
};
pub use app::config::load_config;
pub use domain::{
    AppError, ProjectInfo, ProjectMetadata, ProjmetaConfig, StoreConfig, UpdateProjectInfoPair,
};
