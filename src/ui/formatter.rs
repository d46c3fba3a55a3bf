//! Pure formatting functions for command output.
//!
//! `render_version` builds the text printed by `parse`; the `display_*`
//! functions write styled diagnostics to stderr so stdout only ever carries
//! the result.

use console::style;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::boundary::BoundaryWarning;
use crate::config::{OutputConfig, OutputFormat};
use crate::domain::Version;
use crate::error::Result;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Render a parsed version in the configured output format.
///
/// JSON keys follow the `Version` serialization (`Major`, `Minor`, `Patch`,
/// `Prerelease`, `Metadata`); text output is one lowercase `key: value` line
/// per component.
pub fn render_version(version: &Version, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => render_json(version, output.indent),
        OutputFormat::Text => Ok(render_text(version)),
    }
}

fn render_json(version: &Version, indent: usize) -> Result<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    version.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn render_text(version: &Version) -> String {
    format!(
        "major: {}\nminor: {}\npatch: {}\nprerelease: {}\nmetadata: {}",
        version.major, version.minor, version.patch, version.prerelease, version.metadata
    )
}
