#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Generates one POM per requested target.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::{
    coordinate::Coordinate,
    error::ReleaseError,
    graph::BuildGraph,
    metadata::{ArtifactMetadata, MetadataTable},
    pom::{generate_pom, write_pom},
    resolver::Resolver,
    workspace::Workspace,
};

/// Everything needed to turn build targets into POM files.
pub struct PomGenerator<'g> {
    /// Published artifacts.
    metadata:   MetadataTable,
    /// Label to coordinate resolution.
    resolver:   Resolver,
    /// Source of dependency edges.
    graph:      &'g dyn BuildGraph,
    /// Release version.
    version:    String,
    /// Where POMs are written.
    output_dir: PathBuf,
}

impl<'g> PomGenerator<'g> {
    /// Builds a generator whose resolver knows the workspace's jars and the
    /// project's own artifacts at `version`.
    pub fn new(
        workspace: &Workspace,
        metadata: MetadataTable,
        graph: &'g dyn BuildGraph,
        group: &str,
        version: impl Into<String>,
    ) -> Result<Self> {
        let version = version.into();
        let mut artifacts = workspace.maven_artifacts()?;
        artifacts.extend(metadata.project_artifacts(group, &version));

        Ok(Self {
            resolver: Resolver::new(artifacts)?,
            metadata,
            graph,
            version,
            output_dir: PathBuf::from("."),
        })
    }

    /// Writes POMs into `dir` instead of the current directory.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Replaces the resolver's aggregation prefix.
    pub fn with_aggregation_prefix(mut self, prefix: &str) -> Self {
        self.resolver = self.resolver.with_aggregation_prefix(prefix);
        self
    }

    /// Renders the POM for `target` without writing it.
    pub fn render(&self, target: &str) -> Result<String> {
        self.render_target(target).map(|(_, pom)| pom)
    }

    /// Renders and writes the POM for `target`. Nothing is written if any
    /// dependency fails to resolve.
    pub fn generate(&self, target: &str) -> Result<PathBuf> {
        let (metadata, pom) = self.render_target(target)?;
        let path = write_pom(&self.output_dir, metadata, &pom)?;
        tracing::info!("Wrote {}", path.display());
        Ok(path)
    }

    /// Looks up the metadata for `target` and renders its POM.
    fn render_target(&self, target: &str) -> Result<(&ArtifactMetadata, String)> {
        let metadata = self
            .metadata
            .get(target)
            .ok_or_else(|| ReleaseError::UnknownTarget(target.to_string()))?;
        let coordinate: Coordinate = self.resolver.resolve(target)?.parse()?;

        let dependencies = self
            .resolver
            .resolved_closure(self.graph, target)
            .with_context(|| format!("Could not resolve dependencies of {target}"))?;
        tracing::debug!("{target}: {} dependencies", dependencies.len());

        let pom = generate_pom(&coordinate, metadata, dependencies, &self.version)?;
        Ok((metadata, pom))
    }

    /// Generates every target in order, stopping at the first failure. Files
    /// written for earlier targets are left in place.
    pub fn generate_all<S: AsRef<str>>(&self, targets: &[S]) -> Result<Vec<PathBuf>> {
        targets
            .iter()
            .map(|target| self.generate(target.as_ref()))
            .collect()
    }
}
