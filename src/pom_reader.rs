#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::{Reader, escape::resolve_predefined_entity, events::Event};

use crate::error::ReleaseError;

/// Returns the text of the `<field>` element directly under the POM's root
/// element, e.g. `version` or `artifactId`. Namespace prefixes are ignored.
pub fn read_field(xml: &str, field: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut depth = 0usize;
    let mut capturing = false;
    let mut value = String::new();

    loop {
        match reader.read_event().context("Malformed POM")? {
            Event::Start(ref e) => {
                depth += 1;
                if depth == 2 && e.local_name().as_ref() == field.as_bytes() {
                    capturing = true;
                }
            }
            Event::Empty(ref e) => {
                if depth == 1 && e.local_name().as_ref() == field.as_bytes() {
                    return Ok(String::new());
                }
            }
            Event::End(_) => {
                if capturing && depth == 2 {
                    return Ok(value.trim().to_string());
                }
                depth = depth.saturating_sub(1);
            }
            Event::Text(ref e) if capturing => {
                let text = e.decode().context("POM text is not valid UTF-8")?;
                value.push_str(&text);
            }
            Event::CData(ref e) if capturing => {
                value.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Event::GeneralRef(ref e) if capturing => {
                if let Some(ch) = e.resolve_char_ref().context("Bad character reference")? {
                    value.push(ch);
                } else {
                    let name = e.decode().context("POM text is not valid UTF-8")?;
                    let resolved = resolve_predefined_entity(&name)
                        .with_context(|| format!("Unknown entity &{name};"))?;
                    value.push_str(resolved);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Err(ReleaseError::PomFieldNotFound(field.to_string()).into())
}

/// Reads the POM at `path` and returns one top-level field.
pub fn read_field_from_file(path: &Path, field: &str) -> Result<String> {
    let xml = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;
    read_field(&xml, field).with_context(|| format!("In {}", path.display()))
}
