#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use anyhow::Result;
use bon::Builder;

use crate::constants::{COMPILE_ONLY_TAG, JDK_LABEL};

/// Dependencies left out of every closure.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Exclusions {
    /// Targets carrying this tag are compile-time only.
    #[builder(default = COMPILE_ONLY_TAG.to_string())]
    compile_only_tag: String,
    /// Implicit JDK dependency.
    #[builder(default = JDK_LABEL.to_string())]
    jdk_label:        String,
}

impl Exclusions {
    /// Tag marking compile-time only targets.
    pub fn compile_only_tag(&self) -> &str {
        &self.compile_only_tag
    }

    /// The excluded JDK label.
    pub fn jdk_label(&self) -> &str {
        &self.jdk_label
    }
}

impl Default for Exclusions {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Read access to a build graph.
pub trait BuildGraph {
    /// Direct dependencies of `label`, minus compile-only targets and the JDK.
    fn direct_deps(&self, label: &str) -> Result<Vec<String>>;

    /// Labels that `label` re-exports to its dependents.
    fn exports(&self, label: &str) -> Result<Vec<String>>;
}

/// A build graph held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGraph {
    /// Label to direct dependency labels.
    deps:       BTreeMap<String, Vec<String>>,
    /// Label to exported labels.
    exports:    BTreeMap<String, Vec<String>>,
    /// Label to tags.
    tags:       BTreeMap<String, Vec<String>>,
    /// Dependencies filtered out of [`BuildGraph::direct_deps`].
    exclusions: Exclusions,
}

impl InMemoryGraph {
    /// Creates an empty graph with the default exclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the exclusions applied by [`BuildGraph::direct_deps`].
    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Adds an edge `from -> to`.
    pub fn dep(mut self, from: &str, to: &str) -> Self {
        self.deps
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        self
    }

    /// Records that `from` re-exports `to`.
    pub fn export(mut self, from: &str, to: &str) -> Self {
        self.exports
            .entry(from.to_string())
            .or_default()
            .push(to.to_string());
        self
    }

    /// Attaches a tag to `label`.
    pub fn tag(mut self, label: &str, tag: &str) -> Self {
        self.tags
            .entry(label.to_string())
            .or_default()
            .push(tag.to_string());
        self
    }

    /// True if `label` is tagged compile-only.
    fn is_compile_only(&self, label: &str) -> bool {
        self.tags
            .get(label)
            .is_some_and(|tags| tags.iter().any(|t| t == self.exclusions.compile_only_tag()))
    }
}

impl BuildGraph for InMemoryGraph {
    fn direct_deps(&self, label: &str) -> Result<Vec<String>> {
        Ok(self
            .deps
            .get(label)
            .into_iter()
            .flatten()
            .filter(|dep| dep.as_str() != self.exclusions.jdk_label())
            .filter(|dep| !self.is_compile_only(dep))
            .cloned()
            .collect())
    }

    fn exports(&self, label: &str) -> Result<Vec<String>> {
        Ok(self.exports.get(label).cloned().unwrap_or_default())
    }
}
