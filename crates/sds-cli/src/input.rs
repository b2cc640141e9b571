//! Raw input acquisition for the analyze command.

use std::io::Read;
use std::path::Path;

use anyhow::Context;

/// Read the raw delimited text to analyze.
///
/// A path of `-` reads from stdin; anything else is read as a file.
pub fn read_input(path: &Path) -> anyhow::Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("read data from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("read data file {}", path.display()))
    }
}
