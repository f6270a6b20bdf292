//! Project descriptor: an open-ended JSON object with a few well-known keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key holding the project identifier.
pub const PROJECT_ID_KEY: &str = "projectID";
/// Key holding the project type (e.g. `nodejs`, `liberty`).
pub const PROJECT_TYPE_KEY: &str = "projectType";
/// Key holding the project source location.
pub const LOCATION_KEY: &str = "location";
/// Key holding the auto-build toggle.
pub const AUTO_BUILD_ENABLED_KEY: &str = "autoBuildEnabled";
/// Key holding the start mode (`run`, `debug`, ...).
pub const START_MODE_KEY: &str = "startMode";

/// Keys every healthy descriptor carries.
pub const WELL_KNOWN_KEYS: [&str; 5] =
    [PROJECT_ID_KEY, PROJECT_TYPE_KEY, LOCATION_KEY, AUTO_BUILD_ENABLED_KEY, START_MODE_KEY];

/// In-memory copy of a project descriptor.
///
/// Any key is accepted and preserved in insertion order, so unknown keys
/// survive a load/save cycle untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectInfo {
    entries: Map<String, Value>,
}

impl ProjectInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// String value of `key`, if present and a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Set `key` to `value`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn project_id(&self) -> Option<&str> {
        self.get_str(PROJECT_ID_KEY)
    }

    pub fn project_type(&self) -> Option<&str> {
        self.get_str(PROJECT_TYPE_KEY)
    }

    pub fn location(&self) -> Option<&str> {
        self.get_str(LOCATION_KEY)
    }

    /// Auto-build flag. Older descriptors store it as `"true"`/`"false"`.
    pub fn auto_build_enabled(&self) -> Option<bool> {
        match self.entries.get(AUTO_BUILD_ENABLED_KEY)? {
            Value::Bool(enabled) => Some(*enabled),
            Value::String(raw) => raw.parse().ok(),
            _ => None,
        }
    }

    pub fn start_mode(&self) -> Option<&str> {
        self.get_str(START_MODE_KEY)
    }

    /// Well-known keys absent from this descriptor.
    pub fn missing_well_known_keys(&self) -> Vec<&'static str> {
        WELL_KNOWN_KEYS.iter().copied().filter(|key| !self.contains_key(key)).collect()
    }
}

impl From<Map<String, Value>> for ProjectInfo {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

/// A single pending descriptor change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectInfoPair {
    pub key: String,
    pub value: Value,
    /// Flush the change to disk immediately instead of keeping it in memory only.
    pub save_into_json_file: bool,
}

impl UpdateProjectInfoPair {
    pub fn new(key: impl Into<String>, value: impl Into<Value>, save_into_json_file: bool) -> Self {
        Self { key: key.into(), value: value.into(), save_into_json_file }
    }
}
