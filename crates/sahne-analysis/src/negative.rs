//! Negative prompt synthesis

use sahne_core::StyleId;

/// Upper bound on negative prompt terms unless configured otherwise
pub const DEFAULT_MAX_NEGATIVE_TERMS: usize = 35;

/// How many anatomy terms are kept for scenes without people
const ANATOMY_TERMS_WITHOUT_PEOPLE: usize = 5;

const CORE_TERMS: &[&str] = &[
    "worst quality",
    "low quality",
    "blurry",
    "pixelated",
    "jpeg artifacts",
    "compression artifacts",
    "watermark",
    "signature",
    "text",
    "logo",
    "username",
    "artist name",
    "title",
    "frame",
    "border",
];

const ANATOMY_TERMS: &[&str] = &[
    "bad anatomy",
    "bad proportions",
    "deformed",
    "disfigured",
    "mutated",
    "extra limbs",
    "missing limbs",
    "floating limbs",
    "disconnected limbs",
    "malformed",
    "ugly",
    "poorly drawn",
];

const HAND_AND_FACE_TERMS: &[&str] = &[
    "bad hands",
    "missing fingers",
    "extra fingers",
    "fused fingers",
    "too many fingers",
    "mutated hands",
    "poorly drawn hands",
    "bad face",
    "ugly face",
    "deformed face",
    "asymmetric face",
];

/// Rendering family a style belongs to. Negative terms, quality tags and
/// artist references are keyed by family rather than by the user-facing style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleFamily {
    Photorealistic,
    Anime,
    DigitalArt,
    OilPainting,
    Watercolor,
    Cinematic,
    FantasyArt,
}

impl StyleFamily {
    pub fn of(style: StyleId) -> Self {
        match style {
            StyleId::Cinematic => StyleFamily::Cinematic,
            StyleId::Anime => StyleFamily::Anime,
            StyleId::Oil => StyleFamily::OilPainting,
            StyleId::Watercolor => StyleFamily::Watercolor,
            StyleId::Digital => StyleFamily::DigitalArt,
            StyleId::Comic | StyleId::Minimal | StyleId::Custom => StyleFamily::Photorealistic,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            StyleFamily::Photorealistic => "photorealistic",
            StyleFamily::Anime => "anime",
            StyleFamily::DigitalArt => "digital_art",
            StyleFamily::OilPainting => "oil_painting",
            StyleFamily::Watercolor => "watercolor",
            StyleFamily::Cinematic => "cinematic",
            StyleFamily::FantasyArt => "fantasy_art",
        }
    }

    fn negative_terms(&self) -> &'static [&'static str] {
        match self {
            StyleFamily::Photorealistic => &[
                "cartoon",
                "anime",
                "illustration",
                "painting",
                "drawing",
                "3d render",
                "cgi",
            ],
            StyleFamily::Anime => &[
                "realistic",
                "photorealistic",
                "photograph",
                "3d",
                "western cartoon",
            ],
            StyleFamily::DigitalArt => &["photo", "photograph", "realistic skin", "pores"],
            StyleFamily::OilPainting => &[
                "digital art",
                "photograph",
                "anime",
                "sharp edges",
                "clean lines",
            ],
            StyleFamily::Cinematic => &["amateur", "home video", "low budget", "indie film look"],
            StyleFamily::Watercolor | StyleFamily::FantasyArt => &[],
        }
    }
}

fn genre_negative_terms(genre: &str) -> &'static [&'static str] {
    match genre {
        "horror" => &[
            "bright", "cheerful", "happy", "cute", "kawaii", "colorful", "rainbow",
        ],
        "romance" => &[
            "gore",
            "blood",
            "violence",
            "scary",
            "dark",
            "gloomy",
            "depressing",
        ],
        "sci-fi" => &[
            "medieval",
            "ancient",
            "rustic",
            "old fashioned",
            "primitive",
        ],
        "fantasy" => &[
            "modern",
            "contemporary",
            "urban",
            "technology",
            "industrial",
        ],
        "action" => &["static", "boring", "calm", "peaceful", "slow", "still"],
        "drama" => &[
            "cartoon",
            "exaggerated",
            "silly",
            "comedic",
            "unrealistic",
        ],
        _ => &[],
    }
}

/// Core exclusions, anatomy terms (all of them when people are in the scene),
/// then style and genre additions, cut to `max_terms`.
pub fn build_negative_prompt(
    has_people: bool,
    family: StyleFamily,
    genre: &str,
    max_terms: usize,
) -> String {
    let anatomy = if has_people {
        ANATOMY_TERMS
    } else {
        &ANATOMY_TERMS[..ANATOMY_TERMS_WITHOUT_PEOPLE]
    };
    let hands_and_face: &[&str] = if has_people { HAND_AND_FACE_TERMS } else { &[] };

    CORE_TERMS
        .iter()
        .chain(anatomy)
        .chain(hands_and_face)
        .chain(family.negative_terms())
        .chain(genre_negative_terms(genre))
        .take(max_terms)
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// Number of comma-separated terms in a negative prompt
pub fn term_count(prompt: &str) -> usize {
    prompt.split(", ").filter(|t| !t.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_without_people_keeps_few_anatomy_terms() {
        let prompt = build_negative_prompt(false, StyleFamily::Watercolor, "general", 35);
        assert_eq!(term_count(&prompt), CORE_TERMS.len() + 5);
        assert!(prompt.contains("mutated"));
        assert!(!prompt.contains("extra limbs"));
        assert!(!prompt.contains("bad hands"));
    }

    #[test]
    fn test_with_people_truncates_to_max() {
        let prompt = build_negative_prompt(true, StyleFamily::Photorealistic, "horror", 35);
        assert_eq!(term_count(&prompt), 35);
        assert!(prompt.starts_with("worst quality, low quality"));
        // 15 core + 12 anatomy + 11 hands/face already exceed the cap.
        assert!(!prompt.contains("cartoon"));
        assert!(!prompt.contains("kawaii"));
    }

    #[test]
    fn test_style_and_genre_terms_appended() {
        let prompt = build_negative_prompt(false, StyleFamily::Cinematic, "romance", 100);
        assert!(prompt.ends_with("home video, low budget, indie film look, gore, blood, violence, scary, dark, gloomy, depressing"));
    }

    #[test]
    fn test_negative_prompt_never_exceeds_max() {
        for max in [0, 1, 10, 35, 60] {
            for has_people in [false, true] {
                let prompt = build_negative_prompt(has_people, StyleFamily::Anime, "action", max);
                assert!(term_count(&prompt) <= max);
            }
        }
    }

    #[test]
    fn test_style_family_mapping() {
        assert_eq!(StyleFamily::of(StyleId::Oil), StyleFamily::OilPainting);
        assert_eq!(StyleFamily::of(StyleId::Digital), StyleFamily::DigitalArt);
        assert_eq!(StyleFamily::of(StyleId::Comic), StyleFamily::Photorealistic);
        assert_eq!(StyleFamily::of(StyleId::Cinematic).id(), "cinematic");
    }
}
