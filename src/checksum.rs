#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::Result;

use crate::{error::ReleaseError, workspace::Workspace};

/// Fails with [`ReleaseError::MissingChecksums`] naming every `maven_jar`
/// declaration that does not pin a `sha1`.
pub fn check_sha1(workspace: &Workspace) -> Result<()> {
    let missing = workspace.missing_checksums()?;
    if missing.is_empty() {
        tracing::info!("Every maven_jar declaration pins a sha1");
        return Ok(());
    }

    for name in &missing {
        tracing::warn!("{name} has no sha1");
    }
    Err(ReleaseError::MissingChecksums(missing).into())
}

/// Loads the build-configuration file at `path` and checks it.
pub fn check_sha1_file(path: &Path) -> Result<()> {
    check_sha1(&Workspace::load(path)?)
}
