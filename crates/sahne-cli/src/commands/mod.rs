//! CLI command implementations

pub mod analyze;
pub mod check;
pub mod resolution;
pub mod split;
pub mod styles;

use anyhow::{Context, Result};
use std::io::Read;

/// Read the whole input file, or stdin when no path is given
pub fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path)),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
