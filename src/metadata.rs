#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::constants::VERSION_PLACEHOLDER;

/// Default packaging for published artifacts.
fn default_packaging() -> String {
    "jar".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
/// Describes one artifact the project publishes.
pub struct ArtifactMetadata {
    /// Human readable `<name>` of the POM.
    pub name:                String,
    /// Maven artifact id, also the stem of the generated file name.
    pub artifact:            String,
    /// `<packaging>` of the POM.
    #[serde(default = "default_packaging")]
    #[builder(default = default_packaging())]
    pub packaging:           String,
    /// Another label that refers to the same artifact.
    #[serde(default)]
    pub alias:               Option<String>,
    /// Coordinates added verbatim to the dependency list. `{version}` is
    /// replaced by the release version.
    #[serde(default)]
    #[builder(default)]
    pub manual_dependencies: Vec<String>,
}

impl ArtifactMetadata {
    /// Manual dependencies with the version placeholder expanded.
    pub fn manual_dependencies_for(&self, version: &str) -> Vec<String> {
        self.manual_dependencies
            .iter()
            .map(|dep| dep.replace(VERSION_PLACEHOLDER, version))
            .collect()
    }
}

/// The static table of published artifacts, keyed by build label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataTable {
    /// Label to metadata.
    entries: BTreeMap<String, ArtifactMetadata>,
}

impl MetadataTable {
    /// Creates a table from `(label, metadata)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (String, ArtifactMetadata)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Loads a table from a JSON object of `label -> metadata`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Could not parse metadata table")
    }

    /// Reads and parses a JSON metadata file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid metadata in {}", path.display()))
    }

    /// Looks up a target by its label.
    pub fn get(&self, label: &str) -> Option<&ArtifactMetadata> {
        self.entries.get(label)
    }

    /// Iterates over `(label, metadata)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArtifactMetadata)> {
        self.entries.iter().map(|(label, meta)| (label.as_str(), meta))
    }

    /// Maps every label and alias to `<group>:<artifact>:<version>`.
    pub fn project_artifacts(&self, group: &str, version: &str) -> BTreeMap<String, String> {
        let mut artifacts = BTreeMap::new();
        for (label, meta) in self.iter() {
            let coordinate = format!("{group}:{}:{version}", meta.artifact);
            if let Some(alias) = &meta.alias {
                artifacts.insert(alias.clone(), coordinate.clone());
            }
            artifacts.insert(label.to_string(), coordinate);
        }
        artifacts
    }

    /// The artifacts published by the library's release process.
    pub fn builtin() -> Self {
        let entry = |label: &str, meta: ArtifactMetadata| (label.to_string(), meta);

        Self::new([
            entry(
                "//java/dagger:core",
                ArtifactMetadata::builder()
                    .name("Dagger")
                    .artifact("dagger")
                    .alias("//core:core".to_string())
                    .build(),
            ),
            entry(
                "//gwt:gwt",
                ArtifactMetadata::builder()
                    .name("Dagger GWT")
                    .artifact("dagger-gwt")
                    .manual_dependencies(vec![
                        "com.google.dagger:dagger:{version}:jar:sources".into(),
                        "javax.inject:javax.inject:1:jar:sources".into(),
                    ])
                    .build(),
            ),
            entry(
                "//java/dagger/internal/codegen:processor",
                ArtifactMetadata::builder()
                    .name("Dagger Compiler")
                    .artifact("dagger-compiler")
                    .build(),
            ),
            entry(
                "//java/dagger/producers:producers",
                ArtifactMetadata::builder()
                    .name("Dagger Producers")
                    .artifact("dagger-producers")
                    .build(),
            ),
            entry(
                "//java/dagger/spi:spi",
                ArtifactMetadata::builder()
                    .name("Dagger SPI")
                    .artifact("dagger-spi")
                    .build(),
            ),
            entry(
                "//java/dagger/android:android",
                ArtifactMetadata::builder()
                    .name("Dagger Android")
                    .artifact("dagger-android")
                    .packaging("aar")
                    .build(),
            ),
            entry(
                "//java/dagger/android/support:support",
                ArtifactMetadata::builder()
                    .name("Dagger Android Support")
                    .artifact("dagger-android-support")
                    .packaging("aar")
                    .build(),
            ),
            entry(
                "//java/dagger/android/processor:processor",
                ArtifactMetadata::builder()
                    .name("Dagger Android Processor")
                    .artifact("dagger-android-processor")
                    .build(),
            ),
            entry(
                "//java/dagger/grpc/server:server",
                ArtifactMetadata::builder()
                    .name("Dagger gRPC Server")
                    .artifact("dagger-grpc-server")
                    .build(),
            ),
            entry(
                "//java/dagger/grpc/server:annotations",
                ArtifactMetadata::builder()
                    .name("Dagger gRPC Server Annotations")
                    .artifact("dagger-grpc-server-annotations")
                    .build(),
            ),
            entry(
                "//java/dagger/grpc/server/processor:processor",
                ArtifactMetadata::builder()
                    .name("Dagger gRPC Server Processor")
                    .artifact("dagger-grpc-server-processor")
                    .build(),
            ),
        ])
    }
}
