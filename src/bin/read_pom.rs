#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! `read_pom <pom> <field>`: prints one top-level field of a POM.

use std::path::PathBuf;

use anyhow::Result;
use bpaf::*;
use pomgen::{pom_reader::read_field_from_file, util::init_logging};

/// Parse the command line arguments and return `(pom, field)`
fn options() -> (PathBuf, String) {
    let pom = positional::<PathBuf>("POM").help("POM file to read");
    let field = positional::<String>("FIELD").help("Top-level field, e.g. version");

    construct!(pom, field)
        .to_options()
        .descr("Prints one top-level field of a POM file")
        .run()
}

fn main() -> Result<()> {
    init_logging();

    let (pom, field) = options();
    println!("{}", read_field_from_file(&pom, &field)?);
    Ok(())
}
