//! Style catalog listing

use anyhow::Result;
use sahne_analysis::FORMATS;
use sahne_core::{CompositionId, PaletteId, StyleId};

pub fn run() -> Result<()> {
    println!("{}", format_catalogs());
    Ok(())
}

fn format_catalogs() -> String {
    let mut out = String::from("Styles:\n");
    for style in StyleId::ALL {
        out.push_str(&format!(
            "  {:<11} {:<20} {}\n",
            style.id(),
            style.name(),
            style.prompt("")
        ));
    }
    out.push_str("\nPalettes:\n");
    for palette in PaletteId::ALL {
        out.push_str(&format!(
            "  {:<11} {:<20} {}\n",
            palette.id(),
            palette.name(),
            palette.colors().join(" ")
        ));
    }
    out.push_str("\nCompositions:\n");
    for composition in CompositionId::ALL {
        out.push_str(&format!("  {:<16} {}\n", composition.id(), composition.name()));
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
    fn test_catalogs_list_every_id() {
        let out = format_catalogs();
        assert!(out.contains("watercolor"));
        assert!(out.contains("monochrome"));
        assert!(out.contains("extreme-closeup"));
        assert!(out.contains("21:9"));
    }
}
