#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Turns a build target into the set of Maven coordinates it depends on.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use anyhow::{Context, Result};
use regex::Regex;

use crate::{
    constants::{AGGREGATION_PREFIX, SDK_LABEL_PATTERN},
    error::ReleaseError,
    graph::BuildGraph,
};

/// Rewrites `@repo//jar:jar` to `@repo//jar`, the form declared jars are
/// keyed under. Every other label is returned unchanged.
pub fn normalize_label(label: &str) -> String {
    match label.strip_suffix(":jar") {
        Some(short) if short.starts_with('@') && short.ends_with("//jar") => short.to_string(),
        _ => label.to_string(),
    }
}

/// Resolves labels to coordinates and computes dependency closures.
#[derive(Debug, Clone)]
pub struct Resolver {
    /// Label to coordinate, for declared jars and the project's own targets.
    artifacts:          BTreeMap<String, String>,
    /// Recognizes platform SDK labels.
    sdk_pattern:        Regex,
    /// Labels under this prefix only re-export other targets.
    aggregation_prefix: String,
}

impl Resolver {
    /// Creates a resolver over the combined label to coordinate mapping.
    pub fn new(artifacts: BTreeMap<String, String>) -> Result<Self> {
        Ok(Self {
            artifacts,
            sdk_pattern: Regex::new(SDK_LABEL_PATTERN)
                .context("Could not compile the SDK label pattern")?,
            aggregation_prefix: AGGREGATION_PREFIX.to_string(),
        })
    }

    /// Treats labels under `prefix` as re-export aggregates.
    pub fn with_aggregation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.aggregation_prefix = prefix.into();
        self
    }

    /// Resolves one label to a coordinate.
    ///
    /// Direct lookup wins over the SDK pattern; anything else is an
    /// [`ReleaseError::UnknownDependency`].
    pub fn resolve(&self, label: &str) -> Result<String, ReleaseError> {
        if let Some(coordinate) = self.artifacts.get(label) {
            return Ok(coordinate.clone());
        }

        if let Some(caps) = self.sdk_pattern.captures(label) {
            return Ok(format!("{}:{}:{}", &caps[1], &caps[2], &caps[3]));
        }

        Err(ReleaseError::UnknownDependency(label.to_string()))
    }

    /// Labels `target` transitively depends on, as far as a POM needs them.
    ///
    /// Direct dependencies are kept as-is. Aggregates are replaced by what
    /// they export, and each export's own closure is folded in.
    pub fn closure(&self, graph: &dyn BuildGraph, target: &str) -> Result<BTreeSet<String>> {
        let mut visited = HashSet::new();
        let mut labels = BTreeSet::new();
        self.collect(graph, target, &mut visited, &mut labels)?;
        Ok(labels)
    }

    /// Resolved coordinates of [`Resolver::closure`].
    pub fn resolved_closure(
        &self,
        graph: &dyn BuildGraph,
        target: &str,
    ) -> Result<BTreeSet<String>> {
        let mut coordinates = BTreeSet::new();
        for label in self.closure(graph, target)? {
            coordinates.insert(self.resolve(&label)?);
        }
        Ok(coordinates)
    }

    /// True if `label` only re-exports other targets.
    fn is_aggregate(&self, label: &str) -> bool {
        label.starts_with(&self.aggregation_prefix)
    }

    /// Adds the dependencies of `target` to `labels`.
    fn collect(
        &self,
        graph: &dyn BuildGraph,
        target: &str,
        visited: &mut HashSet<String>,
        labels: &mut BTreeSet<String>,
    ) -> Result<()> {
        if !visited.insert(target.to_string()) {
            return Ok(());
        }

        for dep in graph.direct_deps(target)? {
            self.add_dependency(graph, &normalize_label(&dep), visited, labels)?;
        }
        Ok(())
    }

    /// Adds one dependency, expanding aggregates into their exports.
    fn add_dependency(
        &self,
        graph: &dyn BuildGraph,
        dep: &str,
        visited: &mut HashSet<String>,
        labels: &mut BTreeSet<String>,
    ) -> Result<()> {
        if !self.is_aggregate(dep) {
            labels.insert(dep.to_string());
            return Ok(());
        }
        if !visited.insert(dep.to_string()) {
            return Ok(());
        }

        for export in graph.exports(dep)? {
            let export = normalize_label(&export);
            if self.is_aggregate(&export) {
                self.add_dependency(graph, &export, visited, labels)?;
                continue;
            }
            labels.insert(export.clone());
            self.collect(graph, &export, visited, labels)?;
        }
        Ok(())
    }
}
