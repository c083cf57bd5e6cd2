//! Style, palette and composition catalogs selected by the user

use crate::{Result, SahneError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual style of the generated image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleId {
    #[default]
    Cinematic,
    Anime,
    Comic,
    Digital,
    Oil,
    Watercolor,
    Minimal,
    Custom,
}

impl StyleId {
    pub const ALL: [StyleId; 8] = [
        StyleId::Cinematic,
        StyleId::Anime,
        StyleId::Comic,
        StyleId::Digital,
        StyleId::Oil,
        StyleId::Watercolor,
        StyleId::Minimal,
        StyleId::Custom,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StyleId::Cinematic => "cinematic",
            StyleId::Anime => "anime",
            StyleId::Comic => "comic",
            StyleId::Digital => "digital",
            StyleId::Oil => "oil",
            StyleId::Watercolor => "watercolor",
            StyleId::Minimal => "minimal",
            StyleId::Custom => "custom",
        }
    }

    /// Turkish display name
    pub fn name(&self) -> &'static str {
        match self {
            StyleId::Cinematic => "Sinematik Gerçekçi",
            StyleId::Anime => "Anime / Manga",
            StyleId::Comic => "Çizgi Roman",
            StyleId::Digital => "Dijital İllüstrasyon",
            StyleId::Oil => "Yağlı Boya",
            StyleId::Watercolor => "Suluboya",
            StyleId::Minimal => "Minimal",
            StyleId::Custom => "Özel",
        }
    }

    /// English prompt descriptor. `custom` falls back to "artistic style" when
    /// no custom text is given.
    pub fn prompt(&self, custom: &str) -> String {
        let text = match self {
            StyleId::Cinematic => {
                "cinematic film still, movie scene, 35mm film, anamorphic lens, depth of field"
            }
            StyleId::Anime => {
                "anime style, studio ghibli inspired, vibrant colors, detailed illustration, cel shading"
            }
            StyleId::Comic => {
                "comic book art, bold outlines, halftone dots, dynamic composition, graphic novel style"
            }
            StyleId::Digital => {
                "digital art, trending on artstation, highly detailed, concept art, matte painting"
            }
            StyleId::Oil => {
                "oil painting, classical art, visible brushstrokes, renaissance style, museum quality"
            }
            StyleId::Watercolor => {
                "watercolor painting, soft edges, flowing colors, paper texture, delicate washes"
            }
            StyleId::Minimal => {
                "minimalist design, clean lines, simple shapes, flat design, modern aesthetic"
            }
            StyleId::Custom if custom.trim().is_empty() => "artistic style",
            StyleId::Custom => custom.trim(),
        };
        text.to_string()
    }

    /// The leading comma-separated part of [`StyleId::prompt`]
    pub fn lead(&self, custom: &str) -> String {
        first_part(&self.prompt(custom))
    }
}

/// Color palette applied to the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteId {
    #[default]
    Warm,
    Cool,
    Pastel,
    Dark,
    Vibrant,
    Earthy,
    Monochrome,
}

impl PaletteId {
    pub const ALL: [PaletteId; 7] = [
        PaletteId::Warm,
        PaletteId::Cool,
        PaletteId::Pastel,
        PaletteId::Dark,
        PaletteId::Vibrant,
        PaletteId::Earthy,
        PaletteId::Monochrome,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            PaletteId::Warm => "warm",
            PaletteId::Cool => "cool",
            PaletteId::Pastel => "pastel",
            PaletteId::Dark => "dark",
            PaletteId::Vibrant => "vibrant",
            PaletteId::Earthy => "earthy",
            PaletteId::Monochrome => "monochrome",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PaletteId::Warm => "Sıcak Tonlar",
            PaletteId::Cool => "Soğuk Tonlar",
            PaletteId::Pastel => "Pastel",
            PaletteId::Dark => "Karanlık / Noir",
            PaletteId::Vibrant => "Canlı / Yüksek Kontrast",
            PaletteId::Earthy => "Toprak Tonları",
            PaletteId::Monochrome => "Monokrom",
        }
    }

    /// Swatch colors shown next to the palette name
    pub fn colors(&self) -> [&'static str; 3] {
        match self {
            PaletteId::Warm => ["#FF6B35", "#F7931E", "#FFD700"],
            PaletteId::Cool => ["#4A90D9", "#5B5EA6", "#9B4DCA"],
            PaletteId::Pastel => ["#FFB5BA", "#B5D8FF", "#C8FFB5"],
            PaletteId::Dark => ["#1a1a2e", "#16213e", "#0f3460"],
            PaletteId::Vibrant => ["#FF0080", "#00FF80", "#0080FF"],
            PaletteId::Earthy => ["#8B7355", "#C4A77D", "#556B2F"],
            PaletteId::Monochrome => ["#2d2d2d", "#5c5c5c", "#8c8c8c"],
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            PaletteId::Warm => "warm color palette, orange and red tones, cozy atmosphere",
            PaletteId::Cool => "cool color palette, blue and purple tones, calm atmosphere",
            PaletteId::Pastel => "soft pastel colors, dreamy aesthetic, gentle tones",
            PaletteId::Dark => "dark moody colors, noir aesthetic, shadows and contrast",
            PaletteId::Vibrant => "vibrant saturated colors, high contrast, bold palette",
            PaletteId::Earthy => "earth tones, natural browns and greens, organic feel",
            PaletteId::Monochrome => "monochromatic, black and white, grayscale",
        }
    }
}

/// Camera composition preference. Carried through to the scene settings but
/// not consulted by the detectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositionId {
    Wide,
    Medium,
    Closeup,
    ExtremeCloseup,
    Overhead,
    Lowangle,
    Dutch,
    #[default]
    Auto,
}

impl CompositionId {
    pub const ALL: [CompositionId; 8] = [
        CompositionId::Wide,
        CompositionId::Medium,
        CompositionId::Closeup,
        CompositionId::ExtremeCloseup,
        CompositionId::Overhead,
        CompositionId::Lowangle,
        CompositionId::Dutch,
        CompositionId::Auto,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CompositionId::Wide => "wide",
            CompositionId::Medium => "medium",
            CompositionId::Closeup => "closeup",
            CompositionId::ExtremeCloseup => "extreme-closeup",
            CompositionId::Overhead => "overhead",
            CompositionId::Lowangle => "lowangle",
            CompositionId::Dutch => "dutch",
            CompositionId::Auto => "auto",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CompositionId::Wide => "Geniş Açı",
            CompositionId::Medium => "Orta Plan",
            CompositionId::Closeup => "Yakın Plan",
            CompositionId::ExtremeCloseup => "Aşırı Yakın",
            CompositionId::Overhead => "Kuşbakışı",
            CompositionId::Lowangle => "Alt Açı",
            CompositionId::Dutch => "Dutch Angle",
            CompositionId::Auto => "Otomatik",
        }
    }
}

macro_rules! catalog_traits {
    ($ty:ident) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.id())
            }
        }

        impl FromStr for $ty {
            type Err = SahneError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim().to_lowercase();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|v| v.id() == wanted)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = $ty::ALL.iter().map(|v| v.id()).collect();
                        SahneError::invalid_value(s, &allowed)
                    })
            }
        }
    };
}

catalog_traits!(StyleId);
catalog_traits!(PaletteId);
catalog_traits!(CompositionId);

/// User-selected rendering preferences, read-only input to the assembler.
///
/// `format` and `resolution` stay free-form ids: unknown values resolve to
/// 16:9 and 1080p when dimensions are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSettings {
    #[serde(default)]
    pub style: StyleId,
    #[serde(default)]
    pub custom_style: String,
    #[serde(default)]
    pub palette: PaletteId,
    #[serde(default)]
    pub composition: CompositionId,
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_resolution")]
    pub resolution: String,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            style: StyleId::default(),
            custom_style: String::new(),
            palette: PaletteId::default(),
            composition: CompositionId::default(),
            format: default_format(),
            resolution: default_resolution(),
        }
    }
}

pub fn default_format() -> String {
    "16:9".to_string()
}

pub fn default_resolution() -> String {
    "1080p".to_string()
}

/// Text before the first comma, trimmed
pub fn first_part(text: &str) -> String {
    text.split(',').next().unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ids() {
        assert_eq!("anime".parse::<StyleId>().unwrap(), StyleId::Anime);
        assert_eq!(" Warm ".parse::<PaletteId>().unwrap(), PaletteId::Warm);
        assert_eq!(
            "extreme-closeup".parse::<CompositionId>().unwrap(),
            CompositionId::ExtremeCloseup
        );
    }

    #[test]
    fn test_parse_unknown_id_lists_allowed() {
        let err = "sepia".parse::<PaletteId>().unwrap_err();
        match err {
            SahneError::InvalidEnumValue { value, allowed } => {
                assert_eq!(value, "sepia");
                assert_eq!(allowed.len(), 7);
                assert!(allowed.contains(&"monochrome".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_style_lead_part() {
        assert_eq!(StyleId::Cinematic.lead(""), "cinematic film still");
        assert_eq!(StyleId::Oil.lead(""), "oil painting");
    }

    #[test]
    fn test_custom_style_text() {
        assert_eq!(StyleId::Custom.prompt(""), "artistic style");
        assert_eq!(
            StyleId::Custom.prompt("  ukiyo-e woodblock, flat color "),
            "ukiyo-e woodblock, flat color"
        );
        assert_eq!(StyleId::Custom.lead("ukiyo-e woodblock, flat color"), "ukiyo-e woodblock");
    }

    #[test]
    fn test_settings_defaults_from_empty_toml() {
        let settings: StyleSettings = toml::from_str("").unwrap();
        assert_eq!(settings, StyleSettings::default());
        assert_eq!(settings.format, "16:9");
        assert_eq!(settings.resolution, "1080p");
    }

    #[test]
    fn test_settings_serde_ids() {
        let settings: StyleSettings =
            toml::from_str("style = \"watercolor\"\ncomposition = \"extreme-closeup\"").unwrap();
        assert_eq!(settings.style, StyleId::Watercolor);
        assert_eq!(settings.composition, CompositionId::ExtremeCloseup);
    }
}
