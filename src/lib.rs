//! # pomgen
//!
//! Release tooling for a Bazel-built Java library: checks that every
//! third-party jar pins a checksum, reads single fields out of POM files, and
//! generates Maven POMs from `bazel query` results.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// `bazel query` backed build graph
pub mod bazel;
/// Checks that every declared jar pins a sha1
pub mod checksum;
/// Settings for a release run
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Maven coordinates
pub mod coordinate;
/// Error types
pub mod error;
/// POM generation driver
pub mod generator;
/// Build graph abstraction
pub mod graph;
/// Static table of published artifacts
pub mod metadata;
/// Tree-sitter parser wrapper for build files
pub mod parser;
/// POM rendering
pub mod pom;
/// Reads single fields out of POM files
pub mod pom_reader;
/// Blocking subprocess helper
pub mod process;
/// Dependency closure and label resolution
pub mod resolver;
/// Utility functions for convenience
pub mod util;
/// Build-configuration file parsing
pub mod workspace;

pub use error::ReleaseError;
