//! Resolution calculator command

use anyhow::{bail, Result};
use sahne_analysis::{
    calculate_resolution_for_format, find_format, find_tier, FORMATS, QUALITY_PRESETS, TIERS,
};

pub fn run(tier: Option<&str>, format: Option<&str>, list: bool) -> Result<()> {
    if list {
        println!("{}", format_catalog());
        return Ok(());
    }

    let (Some(tier), Some(format)) = (tier, format) else {
        bail!("Expected <TIER> <FORMAT>, or --list");
    };
    if find_tier(tier).is_none() {
        eprintln!("Warning: unknown tier '{}', using 1080p", tier);
    }
    if find_format(format).is_none() {
        eprintln!("Warning: unknown format '{}', using 16:9", format);
    }

    let res = calculate_resolution_for_format(tier, format);
    println!("{} {}: {}x{}", res.id, format, res.width, res.height);
    Ok(())
}

fn format_catalog() -> String {
    let mut out = String::from("Tiers:\n");
    for tier in TIERS {
        out.push_str(&format!(
            "  {:<6} {:>4}x{:<4}  {:<6} {:<6} {}\n",
            tier.id, tier.width, tier.height, tier.vram, tier.time, tier.description
        ));
    }
    out.push_str("\nQuality presets:\n");
    for preset in QUALITY_PRESETS {
        out.push_str(&format!(
            "  {:<9} {}: {}\n",
            preset.name,
            preset.resolutions.join(", "),
            preset.description
        ));
    }
    out.push_str("\nFormats:\n");
    for format in FORMATS {
        out.push_str(&format!("  {:<5} {}\n", format.id, format.description));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_every_tier_and_format() {
        let out = format_catalog();
        for tier in TIERS {
            assert!(out.contains(tier.id));
        }
        for format in FORMATS {
            assert!(out.contains(format.id));
        }
    }

    #[test]
    fn test_missing_arguments_fail() {
        assert!(run(Some("1080p"), None, false).is_err());
        assert!(run(Some("1080p"), Some("9:16"), false).is_ok());
    }
}
