#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::ReleaseError;

peg::parser! {
    /// grammar for maven coordinates: `group:artifact:version[:type[:classifier]]`
    grammar coordinate_parser() for str {
        /// matches one non-empty field, anything but a colon or whitespace
        rule field() -> String
            = f:$([^ ':' | ' ' | '\t' | '\n' | '\r']+) { f.to_string() }

        /// parses 3 to 5 colon separated fields
        pub rule fields() -> Vec<String>
            = f:(field() **<3,5> ":") { f }
    }
}

/// A parsed artifact coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    /// Maven group id.
    pub group:      String,
    /// Maven artifact id.
    pub artifact:   String,
    /// Version string.
    pub version:    String,
    /// Packaging type, e.g. `jar` or `aar`.
    pub packaging:  Option<String>,
    /// Classifier, e.g. `sources`.
    pub classifier: Option<String>,
}

impl Coordinate {
    /// Creates a 3-field coordinate.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group:      group.into(),
            artifact:   artifact.into(),
            version:    version.into(),
            packaging:  None,
            classifier: None,
        }
    }
}

impl FromStr for Coordinate {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = coordinate_parser::fields(s)
            .map_err(|_| ReleaseError::InvalidCoordinate(s.to_string()))?
            .into_iter();

        // The grammar guarantees at least three fields.
        let (Some(group), Some(artifact), Some(version)) =
            (fields.next(), fields.next(), fields.next())
        else {
            return Err(ReleaseError::InvalidCoordinate(s.to_string()));
        };

        Ok(Self {
            group,
            artifact,
            version,
            packaging: fields.next(),
            classifier: fields.next(),
        })
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)?;
        if let Some(packaging) = &self.packaging {
            write!(f, ":{packaging}")?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{classifier}")?;
        }
        Ok(())
    }
}

/// Sorts coordinate strings for output: `project_group` first, then
/// lexicographically by the whole string. Duplicates are dropped.
pub fn sort_coordinates<I, S>(coordinates: I, project_group: &str) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let prefix = format!("{project_group}:");
    coordinates
        .into_iter()
        .map(Into::into)
        .unique()
        .sorted_by(|a, b| {
            let a_foreign = !a.starts_with(&prefix);
            let b_foreign = !b.starts_with(&prefix);
            (a_foreign, a).cmp(&(b_foreign, b))
        })
        .collect()
}
