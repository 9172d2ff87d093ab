#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Fails if any `maven_jar` declaration lacks a `sha1`.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use pomgen::{
    ReleaseError, checksum::check_sha1_file, config::ReleaseConfig, util::init_logging,
};

/// Parse the command line arguments and return the workspace override
fn options() -> Option<PathBuf> {
    long("workspace")
        .help("Build file declaring maven_jar dependencies")
        .argument::<PathBuf>("PATH")
        .optional()
        .to_options()
        .descr("Checks that every maven_jar declaration pins a sha1")
        .run()
}

fn main() -> Result<ExitCode> {
    dotenv().ok();
    init_logging();

    let config = ReleaseConfig::from_env().with_overrides(options(), None, None, None);

    match check_sha1_file(config.workspace()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<ReleaseError>() {
            Some(ReleaseError::MissingChecksums(names)) => {
                eprintln!("{}", "The following dependencies are missing a sha1:".red().bold());
                for name in names {
                    eprintln!("  {name}");
                }
                Ok(ExitCode::FAILURE)
            }
            _ => Err(e),
        },
    }
}
