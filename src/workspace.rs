#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Reads `maven_jar` declarations out of the build-configuration file.

use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};

use crate::{constants::MAVEN_JAR_RULE, error::ReleaseError, parser::Parser};

/// Label under which the build graph refers to the jar declared by
/// `maven_jar(name = <name>)`.
pub fn jar_label(name: &str) -> String {
    format!("@{name}//jar")
}

/// Parsed build-configuration file.
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Syntax tree of the file.
    parser: Parser,
}

impl Workspace {
    /// Parses the contents of a build-configuration file.
    pub fn parse(contents: impl Into<String>) -> Result<Self> {
        let parser = Parser::new(contents.into())?;
        parser.ensure_valid()?;
        Ok(Self { parser })
    }

    /// Reads and parses the build-configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Self::parse(contents).with_context(|| format!("Could not parse {}", path.display()))
    }

    /// Maps `@<name>//jar` to the declared `artifact` coordinate for every
    /// `maven_jar` declaration.
    ///
    /// Declarations without an `artifact` are left out. `name` and
    /// `artifact` must be string literals.
    pub fn maven_artifacts(&self) -> Result<BTreeMap<String, String>> {
        let mut artifacts = BTreeMap::new();

        for call in self.parser.rule_calls(MAVEN_JAR_RULE)? {
            let Some(artifact) = call.literal("artifact")? else {
                tracing::debug!("Skipping {} on line {}: no artifact", call.rule(), call.line());
                continue;
            };
            let name = call.literal("name")?.ok_or_else(|| ReleaseError::UnsupportedArgument {
                rule:  call.rule().to_string(),
                field: "name".into(),
                line:  call.line(),
                found: "<missing>".into(),
            })?;

            artifacts.insert(jar_label(name), artifact.to_string());
        }

        Ok(artifacts)
    }

    /// Returns the `name` of every `maven_jar` declaration with no `sha1`,
    /// in declaration order.
    pub fn missing_checksums(&self) -> Result<Vec<String>> {
        let mut missing = Vec::new();

        for call in self.parser.rule_calls(MAVEN_JAR_RULE)? {
            if call.keyword("sha1").is_some() {
                continue;
            }
            let name = call
                .literal("name")?
                .map(str::to_string)
                .unwrap_or_else(|| format!("<unnamed maven_jar on line {}>", call.line()));
            missing.push(name);
        }

        Ok(missing)
    }
}
