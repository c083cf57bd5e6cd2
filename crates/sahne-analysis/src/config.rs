//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `SAHNE_STYLE`, `SAHNE_PALETTE`, `SAHNE_FORMAT`,
//!    `SAHNE_RESOLUTION`, `SAHNE_SEED`
//! 2. Project-local: `.sahne/config.toml`
//! 3. Global: `~/.sahne/config.toml`

use sahne_core::{Character, Result, SahneError, StyleSettings};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::negative::DEFAULT_MAX_NEGATIVE_TERMS;
use crate::resolution::{find_format, find_tier, DEFAULT_FORMAT, DEFAULT_TIER, FORMATS, TIERS};

/// `[style]` table. Ids stay raw strings until [`SahneConfig::style_settings`]
/// resolves them, so a later layer can still replace a bad value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub style: Option<String>,
    #[serde(default)]
    pub custom_style: Option<String>,
    #[serde(default)]
    pub palette: Option<String>,
    #[serde(default)]
    pub composition: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Analysis limits and switches, resolved from every layer
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Analyze segments on the rayon pool
    pub parallel: bool,
    pub max_negative_terms: usize,
    pub max_support_keywords: usize,
    pub max_style_tags: usize,
    /// Fixed seed for the variety pickers. Derived from each scene's text
    /// when unset.
    pub seed: Option<u64>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisLayer::default().resolve()
    }
}

const DEFAULT_MAX_SUPPORT_KEYWORDS: usize = 8;
const DEFAULT_MAX_STYLE_TAGS: usize = 4;

/// `[analysis]` table of a single config file. Keys left out do not touch
/// what earlier layers set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisLayer {
    #[serde(default)]
    pub parallel: Option<bool>,
    #[serde(default)]
    pub max_negative_terms: Option<usize>,
    #[serde(default)]
    pub max_support_keywords: Option<usize>,
    #[serde(default)]
    pub max_style_tags: Option<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl AnalysisLayer {
    pub fn resolve(self) -> AnalysisConfig {
        AnalysisConfig {
            parallel: self.parallel.unwrap_or(true),
            max_negative_terms: self.max_negative_terms.unwrap_or(DEFAULT_MAX_NEGATIVE_TERMS),
            max_support_keywords: self
                .max_support_keywords
                .unwrap_or(DEFAULT_MAX_SUPPORT_KEYWORDS),
            max_style_tags: self.max_style_tags.unwrap_or(DEFAULT_MAX_STYLE_TAGS),
            seed: self.seed,
        }
    }
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SahneConfigFile {
    #[serde(default)]
    pub style: StyleConfig,
    #[serde(default)]
    pub analysis: AnalysisLayer,
    #[serde(default)]
    pub characters: Vec<Character>,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, Default)]
pub struct SahneConfig {
    pub style: StyleConfig,
    pub analysis: AnalysisConfig,
    pub characters: Vec<Character>,
}

impl From<SahneConfigFile> for SahneConfig {
    fn from(file: SahneConfigFile) -> Self {
        Self {
            style: file.style,
            analysis: file.analysis.resolve(),
            characters: file.characters,
        }
    }
}

impl SahneConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = SahneConfigFile::default();

        // Layer 1: Global config (~/.sahne/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        // Layer 2: Project-local config (.sahne/config.toml)
        let local_path = PathBuf::from(".sahne/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        // Layer 3: Environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(config.into())
    }

    /// Load config from a specific file path only, then apply env overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config);
        Ok(config.into())
    }

    /// Resolve the `[style]` ids into [`StyleSettings`].
    ///
    /// Unknown ids are replaced by their defaults and returned alongside the
    /// settings so callers can report them.
    pub fn style_settings(&self) -> (StyleSettings, Vec<SahneError>) {
        let mut settings = StyleSettings::default();
        let mut rejected = Vec::new();
        let style = &self.style;

        if let Some(value) = &style.style {
            match value.parse() {
                Ok(id) => settings.style = id,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(value) = &style.palette {
            match value.parse() {
                Ok(id) => settings.palette = id,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(value) = &style.composition {
            match value.parse() {
                Ok(id) => settings.composition = id,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(custom) = &style.custom_style {
            settings.custom_style = custom.clone();
        }
        if let Some(format) = &style.format {
            if find_format(format).is_some() {
                settings.format = format.clone();
            } else {
                let allowed: Vec<&str> = FORMATS.iter().map(|f| f.id).collect();
                rejected.push(SahneError::invalid_value(format, &allowed));
                settings.format = DEFAULT_FORMAT.to_string();
            }
        }
        if let Some(tier) = &style.resolution {
            if find_tier(tier).is_some() {
                settings.resolution = tier.clone();
            } else {
                let allowed: Vec<&str> = TIERS.iter().map(|t| t.id).collect();
                rejected.push(SahneError::invalid_value(tier, &allowed));
                settings.resolution = DEFAULT_TIER.to_string();
            }
        }

        (settings, rejected)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".sahne").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<SahneConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: SahneConfigFile = toml::from_str(&content).map_err(|e| {
            SahneError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut SahneConfigFile, overlay: SahneConfigFile) {
        let style = overlay.style;
        if style.style.is_some() {
            base.style.style = style.style;
        }
        if style.custom_style.is_some() {
            base.style.custom_style = style.custom_style;
        }
        if style.palette.is_some() {
            base.style.palette = style.palette;
        }
        if style.composition.is_some() {
            base.style.composition = style.composition;
        }
        if style.format.is_some() {
            base.style.format = style.format;
        }
        if style.resolution.is_some() {
            base.style.resolution = style.resolution;
        }

        let analysis = overlay.analysis;
        if analysis.parallel.is_some() {
            base.analysis.parallel = analysis.parallel;
        }
        if analysis.max_negative_terms.is_some() {
            base.analysis.max_negative_terms = analysis.max_negative_terms;
        }
        if analysis.max_support_keywords.is_some() {
            base.analysis.max_support_keywords = analysis.max_support_keywords;
        }
        if analysis.max_style_tags.is_some() {
            base.analysis.max_style_tags = analysis.max_style_tags;
        }
        if analysis.seed.is_some() {
            base.analysis.seed = analysis.seed;
        }

        if !overlay.characters.is_empty() {
            base.characters = overlay.characters;
        }
    }

    fn apply_env_overrides(config: &mut SahneConfigFile) {
        Self::apply_overrides(config, |key| std::env::var(key).ok());
    }

    fn apply_overrides(config: &mut SahneConfigFile, lookup: impl Fn(&str) -> Option<String>) {
        let style = &mut config.style;
        for (key, slot) in [
            ("SAHNE_STYLE", &mut style.style),
            ("SAHNE_PALETTE", &mut style.palette),
            ("SAHNE_FORMAT", &mut style.format),
            ("SAHNE_RESOLUTION", &mut style.resolution),
        ] {
            if let Some(value) = lookup(key) {
                *slot = Some(value);
            }
        }

        if let Some(seed) = lookup("SAHNE_SEED") {
            match seed.trim().parse::<u64>() {
                Ok(seed) => config.analysis.seed = Some(seed),
                Err(_) => warn!(value = %seed, "Ignoring SAHNE_SEED that is not an unsigned integer"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sahne_core::{PaletteId, StyleId};
    use std::io::Write;

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sahne_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    fn cleanup(path: &Path) {
        std::fs::remove_file(path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    fn parse(content: &str) -> SahneConfigFile {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn test_load_config_from_file() {
        let config_str = r#"
[style]
palette = "cool"
format = "9:16"
resolution = "720p"

[analysis]
parallel = false
max_negative_terms = 20

[[characters]]
name = "Ayşe"
appearance = "long black hair"
clothing = "red coat"
"#;
        let path = temp_config(config_str);
        let mut file = SahneConfig::load_file(&path).unwrap();
        SahneConfig::apply_overrides(&mut file, |_| None);
        let config = SahneConfig::from(file);

        assert!(!config.analysis.parallel);
        assert_eq!(config.analysis.max_negative_terms, 20);
        assert_eq!(config.analysis.max_style_tags, 4);
        assert_eq!(config.characters.len(), 1);
        assert_eq!(config.characters[0].name, "Ayşe");

        let (settings, rejected) = config.style_settings();
        assert!(rejected.is_empty());
        assert_eq!(settings.style, StyleId::Cinematic);
        assert_eq!(settings.palette, PaletteId::Cool);
        assert_eq!(settings.format, "9:16");
        assert_eq!(settings.resolution, "720p");

        cleanup(&path);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let path = temp_config("[analysis\nparallel = ");
        let err = SahneConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SahneError::ConfigError(_)));
        cleanup(&path);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir()
            .join(format!("sahne_missing_{}", uuid::Uuid::new_v4()))
            .join("config.toml");
        let err = SahneConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, SahneError::IoError(_)));
    }

    #[test]
    fn test_project_layer_overrides_global() {
        let mut base = parse(
            r#"
[style]
style = "anime"
palette = "dark"

[analysis]
seed = 7
"#,
        );
        let overlay = parse(
            r#"
[style]
palette = "pastel"

[analysis]
max_support_keywords = 5
"#,
        );
        SahneConfig::merge_into(&mut base, overlay);

        assert_eq!(base.style.style.as_deref(), Some("anime"));
        assert_eq!(base.style.palette.as_deref(), Some("pastel"));
        assert_eq!(base.analysis.seed, Some(7));
        assert_eq!(base.analysis.max_support_keywords, Some(5));
        assert_eq!(base.analysis.parallel, None);
        assert!(SahneConfig::from(base).analysis.parallel);
    }

    #[test]
    fn test_project_layer_can_restore_defaults() {
        let mut base = parse(
            r#"
[analysis]
parallel = false
max_negative_terms = 20
max_style_tags = 2
"#,
        );
        let overlay = parse(
            r#"
[analysis]
parallel = true
max_negative_terms = 35
max_style_tags = 4
"#,
        );
        SahneConfig::merge_into(&mut base, overlay);

        let config = SahneConfig::from(base);
        assert!(config.analysis.parallel);
        assert_eq!(config.analysis.max_negative_terms, 35);
        assert_eq!(config.analysis.max_style_tags, 4);
    }

    #[test]
    fn test_layer_without_analysis_keeps_earlier_values() {
        let mut base = parse("[analysis]\nparallel = false\nmax_negative_terms = 20\n");
        SahneConfig::merge_into(&mut base, parse("[style]\npalette = \"cool\"\n"));
        let config = SahneConfig::from(base);
        assert!(!config.analysis.parallel);
        assert_eq!(config.analysis.max_negative_terms, 20);
    }

    #[test]
    fn test_env_overrides_win() {
        let mut file = parse("[style]\nstyle = \"anime\"\n");
        SahneConfig::apply_overrides(&mut file, |key| match key {
            "SAHNE_STYLE" => Some("oil".to_string()),
            "SAHNE_SEED" => Some("42".to_string()),
            _ => None,
        });
        assert_eq!(file.style.style.as_deref(), Some("oil"));
        assert_eq!(file.analysis.seed, Some(42));
    }

    #[test]
    fn test_bad_seed_override_is_ignored() {
        let mut file = parse("[analysis]\nseed = 3\n");
        SahneConfig::apply_overrides(&mut file, |key| {
            (key == "SAHNE_SEED").then(|| "many".to_string())
        });
        assert_eq!(file.analysis.seed, Some(3));
    }

    #[test]
    fn test_unknown_ids_fall_back_and_are_reported() {
        let config = SahneConfig {
            style: StyleConfig {
                style: Some("sepia".into()),
                palette: Some("warm".into()),
                format: Some("3:2".into()),
                resolution: Some("8k".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        let (settings, rejected) = config.style_settings();
        assert_eq!(settings.style, StyleId::Cinematic);
        assert_eq!(settings.palette, PaletteId::Warm);
        assert_eq!(settings.format, DEFAULT_FORMAT);
        assert_eq!(settings.resolution, DEFAULT_TIER);
        assert_eq!(rejected.len(), 3);
        assert!(rejected
            .iter()
            .all(|e| matches!(e, SahneError::InvalidEnumValue { .. })));
    }

    #[test]
    fn test_defaults() {
        let config = SahneConfig::default();
        assert!(config.analysis.parallel);
        assert_eq!(config.analysis.max_negative_terms, 35);
        assert_eq!(config.analysis.max_support_keywords, 8);
        assert!(config.analysis.seed.is_none());
        assert!(config.characters.is_empty());
        let (settings, rejected) = config.style_settings();
        assert_eq!(settings, StyleSettings::default());
        assert!(rejected.is_empty());
    }
}
