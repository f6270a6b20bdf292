//! Shared testing utilities for projmeta tests.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::prelude::*;
use projmeta::StoreConfig;
use std::path::{Path, PathBuf};

pub const GOOD_PROJECT_ID: &str = "dummynodeproject";
pub const BAD_PROJECT_ID: &str = "badProjectID";

/// Descriptor as written by the project-creation collaborator.
pub const DUMMY_DESCRIPTOR: &str = r#"{"projectID":"dummynodeproject","projectType":"nodejs","location":"/codewind-workspace/dummynodeproject","autoBuildEnabled":true,"startMode":"run","language":"javascript"}"#;

/// Isolated data and log roots inside a temporary directory.
pub struct TestContext {
    root: TempDir,
    config: StoreConfig,
}

impl TestContext {
    /// Create an empty store layout.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        root.child("projects").create_dir_all().expect("Failed to create data root");
        root.child("logs").create_dir_all().expect("Failed to create log root");

        let config = StoreConfig::new(root.path().join("projects"), root.path().join("logs"));
        Self { root, config }
    }

    /// Create a store layout seeded with the dummy node project.
    pub fn with_dummy_project() -> Self {
        let ctx = Self::new();
        ctx.add_project(GOOD_PROJECT_ID, DUMMY_DESCRIPTOR);
        ctx
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn data_root(&self) -> &Path {
        &self.config.data_root
    }

    /// Write `<dataRoot>/<id>/<id>.json`.
    pub fn add_project(&self, project_id: &str, descriptor: &str) {
        self.root
            .child("projects")
            .child(project_id)
            .child(format!("{project_id}.json"))
            .write_str(descriptor)
            .expect("Failed to write descriptor");
    }

    pub fn info_file(&self, project_id: &str) -> PathBuf {
        self.data_root().join(project_id).join(format!("{project_id}.json"))
    }

    pub fn read_info_file(&self, project_id: &str) -> serde_json::Value {
        let content = std::fs::read_to_string(self.info_file(project_id))
            .expect("Failed to read descriptor");
        serde_json::from_str(&content).expect("Descriptor should be valid JSON")
    }

    /// Build a command for invoking the compiled `projmeta` binary against this store.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("projmeta").expect("Failed to locate projmeta binary");
        cmd.current_dir(self.root())
            .env_remove("PROJMETA_CONFIG")
            .env_remove("RUST_LOG")
            .env("PROJMETA_DATA_ROOT", self.data_root())
            .env("PROJMETA_LOG_ROOT", &self.config.log_root);
        cmd
    }
}
