#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use itertools::Itertools;

/// Failures raised by the release tooling itself, as opposed to I/O or
/// subprocess plumbing (which travel as `anyhow::Error`).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ReleaseError {
    /// A label matched neither a declared artifact nor the SDK naming pattern.
    /// Every new dependency has to be accounted for explicitly.
    #[error("Unknown dependency: {0}")]
    UnknownDependency(String),
    /// A requested target has no entry in the metadata table.
    #[error("No metadata configured for target `{0}`")]
    UnknownTarget(String),
    /// A rule argument was not a plain string literal.
    #[error(
        "Unsupported value for `{field}` in `{rule}` call on line {line}: expected a string \
         literal, found `{found}`"
    )]
    UnsupportedArgument {
        /// The rule being called, e.g. `maven_jar`.
        rule:  String,
        /// The keyword argument name.
        field: String,
        /// 1-based line of the call.
        line:  usize,
        /// Source text of the offending expression.
        found: String,
    },
    /// A string literal argument contains an escape sequence that does not
    /// decode.
    #[error("Invalid escape sequence in `{field}` of `{rule}` call on line {line}: `{found}`")]
    InvalidEscape {
        /// The rule being called.
        rule:  String,
        /// The keyword argument name.
        field: String,
        /// 1-based line of the call.
        line:  usize,
        /// Source text of the literal.
        found: String,
    },
    /// The build-configuration file did not parse.
    #[error("Syntax error in build file near line {0}")]
    Syntax(usize),
    /// One or more `maven_jar` declarations lack a `sha1`.
    #[error("Missing sha1 for: {}", .0.iter().join(", "))]
    MissingChecksums(Vec<String>),
    /// An artifact coordinate did not have 3 to 5 non-empty fields.
    #[error("Invalid artifact coordinate `{0}`")]
    InvalidCoordinate(String),
    /// A build-graph query exited unsuccessfully.
    #[error("Query `{expression}` failed with {status}")]
    QueryFailed {
        /// The query expression passed to the build tool.
        expression: String,
        /// Rendered exit status.
        status:     String,
    },
    /// The requested field is not a child of the POM root element.
    #[error("Field `{0}` not found in POM")]
    PomFieldNotFound(String),
}
