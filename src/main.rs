#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! `generate_poms <version> <target>...`
//!
//! Writes `<artifact>.pom.xml` for every target.

use std::path::PathBuf;

use anyhow::{Context, Result};
use bpaf::*;
use dotenvy::dotenv;
use pomgen::{
    bazel::Bazel, config::ReleaseConfig, generator::PomGenerator, util::init_logging,
    workspace::Workspace,
};

/// Parsed command line.
#[derive(Debug, Clone)]
struct Args {
    /// Overrides the build-configuration file.
    workspace:  Option<PathBuf>,
    /// Overrides the metadata table.
    metadata:   Option<PathBuf>,
    /// Overrides the output directory.
    output_dir: Option<PathBuf>,
    /// Overrides the bazel binary.
    bazel:      Option<PathBuf>,
    /// Release version.
    version:    String,
    /// Targets to generate POMs for.
    targets:    Vec<String>,
}

/// Parse the command line arguments and return `Args`
fn options() -> Args {
    let workspace = long("workspace")
        .help("Build file declaring maven_jar dependencies")
        .argument::<PathBuf>("PATH")
        .optional();
    let metadata = long("metadata")
        .help("JSON metadata table to use instead of the built-in one")
        .argument::<PathBuf>("PATH")
        .optional();
    let output_dir = long("output-dir")
        .help("Directory to write POM files to")
        .argument::<PathBuf>("DIR")
        .optional();
    let bazel = long("bazel")
        .help("Path to the bazel binary")
        .argument::<PathBuf>("PATH")
        .optional();
    let version = positional::<String>("VERSION").help("Release version");
    let targets = positional::<String>("TARGET")
        .help("Bazel target to generate a POM for")
        .some("at least one target is required");

    construct!(Args {
        workspace,
        metadata,
        output_dir,
        bazel,
        version,
        targets
    })
    .to_options()
    .descr("Generates Maven POM files from bazel dependency queries")
    .run()
}

fn main() -> Result<()> {
    dotenv().ok();
    init_logging();

    let args = options();
    let config = ReleaseConfig::from_env().with_overrides(
        args.workspace,
        args.output_dir,
        args.bazel,
        args.metadata,
    );

    let workspace = Workspace::load(config.workspace())?;
    let metadata = config.metadata_table()?;
    let bazel = Bazel::new(config.bazel_binary()?, config.exclusions().clone());

    let generator =
        PomGenerator::new(&workspace, metadata, &bazel, config.group(), args.version.as_str())?
            .with_output_dir(config.output_dir().clone())
            .with_aggregation_prefix(config.aggregation_prefix());

    generator
        .generate_all(&args.targets)
        .context("POM generation failed")?;

    Ok(())
}
