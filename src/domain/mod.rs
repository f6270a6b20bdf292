pub mod config;
pub mod error;
pub mod project;
pub mod protected_path;

pub use config::{ProjmetaConfig, StoreConfig};
pub use error::AppError;
pub use project::{ProjectInfo, ProjectMetadata, UpdateProjectInfoPair, resolve_metadata};
