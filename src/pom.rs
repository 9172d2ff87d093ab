#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Renders Maven project descriptors.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quick_xml::escape::escape;

use crate::{
    coordinate::{Coordinate, sort_coordinates},
    metadata::ArtifactMetadata,
};

/// Renders one `<dependency>` element.
///
/// Three-field coordinates render group, artifact and version only. A fourth
/// field adds `<type>`, a fifth adds `<classifier>`.
pub fn dependency_block(coordinate: &Coordinate) -> String {
    let mut lines = vec![
        String::from("    <dependency>"),
        format!("      <groupId>{}</groupId>", escape(coordinate.group.as_str())),
        format!("      <artifactId>{}</artifactId>", escape(coordinate.artifact.as_str())),
        format!("      <version>{}</version>", escape(coordinate.version.as_str())),
    ];
    if let Some(packaging) = &coordinate.packaging {
        lines.push(format!("      <type>{}</type>", escape(packaging.as_str())));
    }
    if let Some(classifier) = &coordinate.classifier {
        lines.push(format!("      <classifier>{}</classifier>", escape(classifier.as_str())));
    }
    lines.push(String::from("    </dependency>"));
    lines.join("\n")
}

/// Renders a complete POM for `target`.
///
/// * `target`: coordinate of the artifact being described
/// * `metadata`: its entry in the metadata table
/// * `dependencies`: resolved dependency coordinates, in any order
/// * `version`: release version, substituted into manual dependencies
pub fn generate_pom(
    target: &Coordinate,
    metadata: &ArtifactMetadata,
    dependencies: impl IntoIterator<Item = String>,
    version: &str,
) -> Result<String> {
    let all = dependencies
        .into_iter()
        .chain(metadata.manual_dependencies_for(version));

    let blocks: Vec<String> = sort_coordinates(all, &target.group)
        .iter()
        .map(|dep| {
            dep.parse::<Coordinate>()
                .map(|c| dependency_block(&c))
                .with_context(|| format!("Bad dependency of {}", metadata.artifact))
        })
        .collect::<Result<_>>()?;

    Ok(format!(
        include_str!("templates/pom.xml"),
        group = escape(target.group.as_str()),
        artifact = escape(target.artifact.as_str()),
        name = escape(metadata.name.as_str()),
        version = escape(target.version.as_str()),
        packaging = escape(metadata.packaging.as_str()),
        dependencies = blocks.join("\n"),
    ))
}

/// File name the POM for `metadata` is written to.
pub fn pom_file_name(metadata: &ArtifactMetadata) -> String {
    format!("{}.pom.xml", metadata.artifact)
}

/// Writes `pom` to `<dir>/<artifact>.pom.xml` and returns the path.
pub fn write_pom(dir: &Path, metadata: &ArtifactMetadata, pom: &str) -> Result<PathBuf> {
    let path = dir.join(pom_file_name(metadata));
    std::fs::write(&path, pom).with_context(|| format!("Could not write {}", path.display()))?;
    Ok(path)
}
