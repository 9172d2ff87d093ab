#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! [`BuildGraph`] backed by `bazel query`.

use std::{ffi::OsString, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    error::ReleaseError,
    graph::{BuildGraph, Exclusions},
    process::run_collect,
};

/// Runs `bazel query` against a workspace.
#[derive(Debug, Clone)]
pub struct Bazel {
    /// Path to the bazel binary.
    binary:     OsString,
    /// Directory the query runs in; the current directory if `None`.
    root:       Option<PathBuf>,
    /// Dependencies filtered out of `direct_deps`.
    exclusions: Exclusions,
}

impl Bazel {
    /// Creates a query client for `binary`.
    pub fn new(binary: impl Into<OsString>, exclusions: Exclusions) -> Self {
        Self {
            binary: binary.into(),
            root: None,
            exclusions,
        }
    }

    /// Runs queries from `root` instead of the current directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Query expression for the direct dependencies of `label`.
    pub fn deps_expression(&self, label: &str) -> String {
        format!(
            "labels(deps, {label}) except attr(tags, '{tag}', labels(deps, {label})) except \
             {jdk}",
            tag = self.exclusions.compile_only_tag(),
            jdk = self.exclusions.jdk_label(),
        )
    }

    /// Query expression for the labels `label` exports.
    pub fn exports_expression(&self, label: &str) -> String {
        format!("labels(exports, {label})")
    }

    /// Runs `bazel query <expression>` and returns the printed labels.
    pub fn query(&self, expression: &str) -> Result<Vec<String>> {
        tracing::debug!("bazel query {expression}");
        let args = [OsString::from("query"), OsString::from(expression)];
        let out = run_collect(&self.binary, &args, self.root.as_deref())
            .with_context(|| format!("Could not run {}", self.binary.to_string_lossy()))?;

        if !out.status.success() {
            return Err(ReleaseError::QueryFailed {
                expression: expression.to_string(),
                status:     out.status.to_string(),
            }
            .into());
        }
        Ok(out.lines())
    }
}

impl BuildGraph for Bazel {
    fn direct_deps(&self, label: &str) -> Result<Vec<String>> {
        self.query(&self.deps_expression(label))
    }

    fn exports(&self, label: &str) -> Result<Vec<String>> {
        self.query(&self.exports_expression(label))
    }
}
