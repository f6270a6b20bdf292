mod info;
mod metadata;

pub use info::{
    AUTO_BUILD_ENABLED_KEY, LOCATION_KEY, PROJECT_ID_KEY, PROJECT_TYPE_KEY, ProjectInfo,
    START_MODE_KEY, UpdateProjectInfoPair, WELL_KNOWN_KEYS,
};
pub use metadata::{DESCRIPTOR_EXTENSION, ProjectMetadata, descriptor_file_name, resolve_metadata};
