//! Segmentation command

use anyhow::Result;
use sahne_analysis::split_into_scenes;

use super::read_input;

pub fn run(file: Option<&str>) -> Result<()> {
    let text = read_input(file)?;
    let segments = split_into_scenes(&text);
    if segments.is_empty() {
        println!("No scenes found.");
        return Ok(());
    }
    println!("{}", format_segments(&segments));
    Ok(())
}

fn format_segments(segments: &[String]) -> String {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            format!(
                "--- Sahne {} ({} karakter) ---\n{}",
                i + 1,
                segment.chars().count(),
                segment
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_segments_numbers_in_order() {
        let segments = vec!["Birinci".to_string(), "İkinci".to_string()];
        let out = format_segments(&segments);
        assert_eq!(
            out,
            "--- Sahne 1 (7 karakter) ---\nBirinci\n\n--- Sahne 2 (6 karakter) ---\nİkinci"
        );
    }
}
