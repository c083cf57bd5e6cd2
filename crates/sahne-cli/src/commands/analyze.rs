//! Scene analysis command

use anyhow::{bail, Context, Result};
use sahne_analysis::{analyze_text, SahneConfig};
use sahne_core::Scene;
use serde::Serialize;

use super::read_input;

pub struct AnalyzeArgs {
    pub file: Option<String>,
    pub style: Option<String>,
    pub custom_style: Option<String>,
    pub palette: Option<String>,
    pub composition: Option<String>,
    pub format: Option<String>,
    pub resolution: Option<String>,
    pub seed: Option<u64>,
    pub output: String,
    pub sequential: bool,
}

/// Root table for TOML output
#[derive(Serialize)]
struct SceneList<'a> {
    scenes: &'a [Scene],
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    if !matches!(args.output.as_str(), "json" | "toml" | "text") {
        bail!("Unknown output format: {}", args.output);
    }

    let mut config = SahneConfig::load().context("Failed to load config")?;
    apply_flags(&mut config, &args);

    let (settings, rejected) = config.style_settings();
    for err in &rejected {
        eprintln!("Warning: {} (using default)", err);
    }

    let text = read_input(args.file.as_deref())?;

    let scenes = analyze_text(&text, &settings, &config.characters, &config.analysis);

    let output = match args.output.as_str() {
        "json" => serde_json::to_string_pretty(&scenes)?,
        "toml" => toml::to_string_pretty(&SceneList { scenes: &scenes })?,
        _ => format_text(&scenes),
    };
    println!("{}", output);

    Ok(())
}

/// Command-line flags override every config layer
fn apply_flags(config: &mut SahneConfig, args: &AnalyzeArgs) {
    let style = &mut config.style;
    for (flag, slot) in [
        (&args.style, &mut style.style),
        (&args.custom_style, &mut style.custom_style),
        (&args.palette, &mut style.palette),
        (&args.composition, &mut style.composition),
        (&args.format, &mut style.format),
        (&args.resolution, &mut style.resolution),
    ] {
        if flag.is_some() {
            slot.clone_from(flag);
        }
    }
    if args.seed.is_some() {
        config.analysis.seed = args.seed;
    }
    if args.sequential {
        config.analysis.parallel = false;
    }
}

fn format_text(scenes: &[Scene]) -> String {
    if scenes.is_empty() {
        return "No scenes found.".to_string();
    }

    let mut out = String::new();
    for scene in scenes {
        out.push_str(&format!("== {} ({}) ==\n", scene.title, scene.id));
        out.push_str(&format!("Ruh hali:   {}\n", scene.mood));
        out.push_str(&format!("Işık:       {}\n", scene.lighting));
        out.push_str(&format!("Ortam:      {}\n", scene.environment));
        out.push_str(&format!("Nesneler:   {}\n", scene.objects.join(", ")));
        out.push_str(&format!(
            "Çözünürlük: {} {}x{}\n",
            scene.resolution.id, scene.resolution.width, scene.resolution.height
        ));
        out.push_str(&format!("Sadık:      {}\n", scene.faithful_prompt));
        out.push_str(&format!("Yaratıcı:   {}\n", scene.creative_prompt));
        out.push_str(&format!("Negatif:    {}\n", scene.negative_prompt));
        out.push_str("Detaylar:\n");
        for detail in &scene.important_details {
            out.push_str(&format!("  {}\n", detail));
        }
        out.push('\n');
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahne_analysis::AnalysisConfig;
    use sahne_core::StyleSettings;

    fn args() -> AnalyzeArgs {
        AnalyzeArgs {
            file: None,
            style: None,
            custom_style: None,
            palette: None,
            composition: None,
            format: None,
            resolution: None,
            seed: None,
            output: "json".to_string(),
            sequential: false,
        }
    }

    #[test]
    fn test_flags_override_config() {
        let mut config = SahneConfig::default();
        config.style.palette = Some("dark".to_string());
        config.style.style = Some("anime".to_string());

        let flags = AnalyzeArgs {
            palette: Some("pastel".to_string()),
            seed: Some(9),
            sequential: true,
            ..args()
        };
        apply_flags(&mut config, &flags);

        assert_eq!(config.style.palette.as_deref(), Some("pastel"));
        assert_eq!(config.style.style.as_deref(), Some("anime"));
        assert_eq!(config.analysis.seed, Some(9));
        assert!(!config.analysis.parallel);
    }

    #[test]
    fn test_format_text_lists_scenes() {
        let scenes = analyze_text(
            "Güneş batarken, yaşlı adam sahilde yürüyordu.",
            &StyleSettings::default(),
            &[],
            &AnalysisConfig::default(),
        );
        let text = format_text(&scenes);
        assert!(text.starts_with("== Sahne 1 (scene-"));
        assert!(text.contains("Çözünürlük: 1080p 1920x1080"));
    }

    #[test]
    fn test_format_text_empty() {
        assert_eq!(format_text(&[]), "No scenes found.");
    }

    #[test]
    fn test_scene_list_serializes_to_toml() {
        let scenes = analyze_text(
            "Kalbi kırık kadın ağladı.",
            &StyleSettings::default(),
            &[],
            &AnalysisConfig::default(),
        );
        let out = toml::to_string_pretty(&SceneList { scenes: &scenes }).unwrap();
        assert!(out.contains("[[scenes]]"));
        assert!(out.contains("heartbroken"));
    }
}
