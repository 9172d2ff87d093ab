#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::{ffi::OsString, path::PathBuf};

use anyhow::{Context, Result};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};
use which::which;

use crate::constants::BAZEL_BINARY;

/// Finds and returns the path to the bazel binary
pub fn bazel_path() -> Result<OsString> {
    which(BAZEL_BINARY)
        .map(PathBuf::into_os_string)
        .context("Cannot find bazel on path")
}

/// Installs the stderr log subscriber shared by the binaries.
pub fn init_logging() {
    let fmt = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();
}
