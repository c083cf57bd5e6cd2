//! Resolution tiers and aspect-ratio formats
//!
//! Dimensions always keep the tier's canonical height and derive the width
//! from the format ratio, portrait formats included.

use sahne_core::ResolutionSpec;
use serde::Serialize;

/// Tier used when the requested id is unknown
pub const DEFAULT_TIER: &str = "1080p";
/// Format used when the requested id is unknown
pub const DEFAULT_FORMAT: &str = "16:9";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityClass {
    Draft,
    Standard,
    High,
    Ultra,
}

/// A named output size with rough hardware and time estimates
#[derive(Debug, Serialize)]
pub struct ResolutionTier {
    pub id: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
    pub description: &'static str,
    pub vram: &'static str,
    pub time: &'static str,
    pub quality: QualityClass,
}

#[derive(Debug, Serialize)]
pub struct FormatSpec {
    pub id: &'static str,
    pub description: &'static str,
    pub ratio: f64,
}

/// Tiers grouped under a quality class
#[derive(Debug, Serialize)]
pub struct QualityPreset {
    pub id: QualityClass,
    pub name: &'static str,
    pub description: &'static str,
    pub resolutions: &'static [&'static str],
}

pub static TIERS: &[ResolutionTier] = &[
    ResolutionTier {
        id: "360p",
        label: "360p",
        width: 640,
        height: 360,
        description: "Düşük kalite, hızlı",
        vram: "2GB",
        time: "~5s",
        quality: QualityClass::Draft,
    },
    ResolutionTier {
        id: "480p",
        label: "480p",
        width: 854,
        height: 480,
        description: "SD kalite",
        vram: "3GB",
        time: "~8s",
        quality: QualityClass::Draft,
    },
    ResolutionTier {
        id: "720p",
        label: "720p (HD)",
        width: 1280,
        height: 720,
        description: "HD kalite",
        vram: "4GB",
        time: "~15s",
        quality: QualityClass::Standard,
    },
    ResolutionTier {
        id: "1080p",
        label: "1080p (Full HD)",
        width: 1920,
        height: 1080,
        description: "Full HD kalite",
        vram: "6GB",
        time: "~30s",
        quality: QualityClass::Standard,
    },
    ResolutionTier {
        id: "1440p",
        label: "1440p (2K)",
        width: 2560,
        height: 1440,
        description: "2K kalite",
        vram: "8GB",
        time: "~60s",
        quality: QualityClass::High,
    },
    ResolutionTier {
        id: "2160p",
        label: "2160p (4K)",
        width: 3840,
        height: 2160,
        description: "4K Ultra HD",
        vram: "12GB+",
        time: "~120s",
        quality: QualityClass::Ultra,
    },
];

pub static FORMATS: &[FormatSpec] = &[
    FormatSpec {
        id: "16:9",
        description: "Sinematik yatay",
        ratio: 16.0 / 9.0,
    },
    FormatSpec {
        id: "9:16",
        description: "Dikey / Mobil",
        ratio: 9.0 / 16.0,
    },
    FormatSpec {
        id: "1:1",
        description: "Kare",
        ratio: 1.0,
    },
    FormatSpec {
        id: "4:3",
        description: "Klasik",
        ratio: 4.0 / 3.0,
    },
    FormatSpec {
        id: "21:9",
        description: "Ultra geniş",
        ratio: 21.0 / 9.0,
    },
];

pub static QUALITY_PRESETS: &[QualityPreset] = &[
    QualityPreset {
        id: QualityClass::Draft,
        name: "Taslak",
        description: "Hızlı önizleme için",
        resolutions: &["360p", "480p"],
    },
    QualityPreset {
        id: QualityClass::Standard,
        name: "Standart",
        description: "Günlük kullanım için ideal",
        resolutions: &["720p", "1080p"],
    },
    QualityPreset {
        id: QualityClass::High,
        name: "Yüksek",
        description: "Profesyonel kalite",
        resolutions: &["1440p"],
    },
    QualityPreset {
        id: QualityClass::Ultra,
        name: "Ultra",
        description: "Maksimum kalite, yavaş",
        resolutions: &["2160p"],
    },
];

pub fn find_tier(id: &str) -> Option<&'static ResolutionTier> {
    TIERS.iter().find(|t| t.id == id)
}

pub fn find_format(id: &str) -> Option<&'static FormatSpec> {
    FORMATS.iter().find(|f| f.id == id)
}

fn tier_or_default(id: &str) -> &'static ResolutionTier {
    find_tier(id)
        .or_else(|| find_tier(DEFAULT_TIER))
        .unwrap_or(&TIERS[3])
}

fn ratio_or_default(id: &str) -> f64 {
    find_format(id).map(|f| f.ratio).unwrap_or(16.0 / 9.0)
}

/// Pixel dimensions for a tier and aspect-ratio format.
///
/// Height is the tier's canonical height and width is `round(height * ratio)`.
/// Unknown tiers resolve to 1080p and unknown formats to 16:9; the returned
/// id is the tier actually used.
pub fn calculate_resolution_for_format(tier: &str, format: &str) -> ResolutionSpec {
    let tier = tier_or_default(tier);
    let width = (f64::from(tier.height) * ratio_or_default(format)).round() as u32;
    ResolutionSpec {
        id: tier.id.to_string(),
        width,
        height: tier.height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portrait_keeps_tier_height() {
        let res = calculate_resolution_for_format("1080p", "9:16");
        assert_eq!(res.height, 1080);
        assert_eq!(res.width, 608);
        assert_eq!(res.id, "1080p");
    }

    #[test]
    fn test_landscape_formats() {
        assert_eq!(calculate_resolution_for_format("1080p", "16:9").width, 1920);
        assert_eq!(calculate_resolution_for_format("720p", "1:1").width, 720);
        assert_eq!(calculate_resolution_for_format("1440p", "4:3").width, 1920);
        assert_eq!(calculate_resolution_for_format("2160p", "21:9").width, 5040);
        assert_eq!(calculate_resolution_for_format("480p", "16:9").width, 853);
    }

    #[test]
    fn test_unknown_ids_fall_back() {
        let res = calculate_resolution_for_format("8k", "3:2");
        assert_eq!(res, calculate_resolution_for_format("1080p", "16:9"));
        assert_eq!(res.id, "1080p");
        assert_eq!(calculate_resolution_for_format("720p", "bogus").width, 1280);
    }

    #[test]
    fn test_calculation_is_deterministic() {
        for tier in TIERS {
            for format in FORMATS {
                let a = calculate_resolution_for_format(tier.id, format.id);
                let b = calculate_resolution_for_format(tier.id, format.id);
                assert_eq!(a, b);
                assert_eq!(a.height, tier.height);
                assert!(a.width > 0);
            }
        }
    }

    #[test]
    fn test_presets_cover_every_tier() {
        for tier in TIERS {
            let preset = QUALITY_PRESETS.iter().find(|p| p.id == tier.quality).unwrap();
            assert!(preset.resolutions.contains(&tier.id));
        }
        let standard = QUALITY_PRESETS
            .iter()
            .find(|p| p.id == QualityClass::Standard)
            .unwrap();
        assert_eq!(standard.resolutions, ["720p", "1080p"]);
    }
}
