//! Content screening command

use anyhow::Result;
use sahne_analysis::check_content_warnings;

use super::read_input;

/// Print the warning, if any. The screen is advisory, so the command
/// succeeds either way.
pub fn run(file: Option<&str>) -> Result<()> {
    let text = read_input(file)?;
    match check_content_warnings(&text) {
        Some(warning) => println!("{}", warning),
        None => println!("No sensitive content found."),
    }
    Ok(())
}
