#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{ffi::OsString, path::PathBuf};

use anyhow::Result;
use bon::Builder;

use crate::{
    constants::{AGGREGATION_PREFIX, PROJECT_GROUP, WORKSPACE_FILE},
    graph::Exclusions,
    metadata::MetadataTable,
    util::bazel_path,
};

/// Environment variable naming the bazel binary.
pub const BAZEL_ENV: &str = "POMGEN_BAZEL";
/// Environment variable naming the build-configuration file.
pub const WORKSPACE_ENV: &str = "POMGEN_WORKSPACE";
/// Environment variable naming the directory POMs are written to.
pub const OUTPUT_DIR_ENV: &str = "POMGEN_OUTPUT_DIR";

/// Reads a non-empty, trimmed environment variable.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Builder)]
#[builder(on(String, into), on(PathBuf, into))]
/// Settings for one release run.
pub struct ReleaseConfig {
    /// The build-configuration file declaring third-party jars.
    #[builder(default = PathBuf::from(WORKSPACE_FILE))]
    workspace:          PathBuf,
    /// Directory generated POMs are written to.
    #[builder(default = PathBuf::from("."))]
    output_dir:         PathBuf,
    /// Explicit bazel binary; looked up on `PATH` when absent.
    bazel:              Option<PathBuf>,
    /// JSON metadata table replacing the built-in one.
    metadata:           Option<PathBuf>,
    /// Maven group the project publishes under.
    #[builder(default = PROJECT_GROUP.to_string())]
    group:              String,
    /// Label prefix of re-export aggregates.
    #[builder(default = AGGREGATION_PREFIX.to_string())]
    aggregation_prefix: String,
    /// Dependencies left out of every closure.
    #[builder(default)]
    exclusions:         Exclusions,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ReleaseConfig {
    /// Defaults overridden by `POMGEN_*` environment variables.
    pub fn from_env() -> Self {
        Self::builder()
            .maybe_workspace(env_var(WORKSPACE_ENV).map(PathBuf::from))
            .maybe_output_dir(env_var(OUTPUT_DIR_ENV).map(PathBuf::from))
            .maybe_bazel(env_var(BAZEL_ENV).map(PathBuf::from))
            .build()
    }

    /// Returns a copy with the non-`None` overrides applied.
    pub fn with_overrides(
        mut self,
        workspace: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        bazel: Option<PathBuf>,
        metadata: Option<PathBuf>,
    ) -> Self {
        if let Some(workspace) = workspace {
            self.workspace = workspace;
        }
        if let Some(output_dir) = output_dir {
            self.output_dir = output_dir;
        }
        if bazel.is_some() {
            self.bazel = bazel;
        }
        if metadata.is_some() {
            self.metadata = metadata;
        }
        self
    }

    /// The build-configuration file.
    pub fn workspace(&self) -> &PathBuf {
        &self.workspace
    }

    /// Directory POMs are written to.
    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    /// Maven group the project publishes under.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Label prefix of re-export aggregates.
    pub fn aggregation_prefix(&self) -> &str {
        &self.aggregation_prefix
    }

    /// Dependencies left out of every closure.
    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// The configured bazel binary, or the one found on `PATH`.
    pub fn bazel_binary(&self) -> Result<OsString> {
        match &self.bazel {
            Some(path) => Ok(path.clone().into_os_string()),
            None => bazel_path(),
        }
    }

    /// The configured metadata table, or the built-in one.
    pub fn metadata_table(&self) -> Result<MetadataTable> {
        match &self.metadata {
            Some(path) => MetadataTable::load(path),
            None => Ok(MetadataTable::builtin()),
        }
    }
}
