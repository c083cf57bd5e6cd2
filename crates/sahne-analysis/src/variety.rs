//! Camera, lighting, artist and quality variety
//!
//! Each picker draws one entry from a small table keyed by scene type, mood,
//! time of day or genre. Draws come from a seeded [`StdRng`], so the same seed
//! always yields the same picks.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use sahne_core::VarietyPicks;

use crate::detect::SceneType;
use crate::negative::StyleFamily;

const BASE_QUALITY: &[&str] = &[
    "masterpiece",
    "best quality",
    "highly detailed",
    "ultra-detailed",
    "sharp focus",
    "8k uhd",
    "high resolution",
    "professional",
];

const CREATIVE_BOOSTS: &[&str] = &[
    "award winning",
    "stunning",
    "breathtaking",
    "gorgeous",
    "intricate details",
    "exceptional quality",
    "trending on artstation",
];

/// Boosts added to creative quality tags
const CREATIVE_BOOST_COUNT: usize = 4;

fn style_quality(family: StyleFamily) -> &'static [&'static str] {
    match family {
        StyleFamily::Cinematic => &[
            "cinematic color grading",
            "film grain",
            "anamorphic lens",
            "movie still",
            "cinematography",
        ],
        StyleFamily::Photorealistic => &[
            "hyperrealistic",
            "photorealism",
            "RAW photo",
            "DSLR quality",
            "35mm film",
        ],
        StyleFamily::DigitalArt => &[
            "digital painting",
            "concept art",
            "artstation quality",
            "vibrant colors",
        ],
        StyleFamily::OilPainting => &[
            "oil painting",
            "brush strokes visible",
            "museum quality",
            "classical art",
        ],
        StyleFamily::Watercolor => &[
            "watercolor painting",
            "soft edges",
            "artistic",
            "delicate washes",
        ],
        StyleFamily::Anime => &[
            "anime style",
            "detailed anime",
            "studio quality anime",
            "vibrant anime colors",
        ],
        StyleFamily::FantasyArt => &[
            "fantasy illustration",
            "epic fantasy art",
            "magical atmosphere",
            "otherworldly",
        ],
    }
}

/// Quality tags for a style family; creative prompts get a few extra boosts.
pub fn quality_tags(family: StyleFamily, creative: bool) -> String {
    let boosts: &[&str] = if creative {
        &CREATIVE_BOOSTS[..CREATIVE_BOOST_COUNT]
    } else {
        &[]
    };
    BASE_QUALITY
        .iter()
        .chain(boosts)
        .chain(style_quality(family))
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

fn camera_angles(scene_type: SceneType) -> &'static [&'static str] {
    match scene_type {
        SceneType::Action => &[
            "dutch angle, dynamic perspective",
            "low angle hero shot",
            "overhead action view",
            "tracking shot motion",
            "extreme close-up impact moment",
        ],
        SceneType::Dialogue => &[
            "over the shoulder shot",
            "medium two-shot",
            "close-up conversation",
            "profile view dialogue",
            "symmetrical framing",
        ],
        SceneType::Introspection => &[
            "extreme close-up eyes",
            "soft focus portrait",
            "silhouette against light",
            "reflection shot",
            "isolated figure wide shot",
        ],
        SceneType::Description => &[
            "establishing wide shot",
            "panoramic vista",
            "birds eye view",
            "atmospheric long shot",
            "layered depth composition",
        ],
        SceneType::General => &[
            "rule of thirds composition",
            "centered subject",
            "golden ratio framing",
            "diagonal composition",
            "symmetrical balance",
        ],
    }
}

/// Lighting compositions by mood label. Moods without a table of their own
/// share the dramatic one.
fn compositions(mood_label: &str) -> &'static [&'static str] {
    match mood_label {
        "Huzurlu" => &[
            "soft natural light",
            "even lighting",
            "gentle shadows",
            "warm ambient",
        ],
        "Gizemli" => &[
            "low key lighting",
            "silhouette",
            "fog atmosphere",
            "partial illumination",
        ],
        "Romantik" => &[
            "golden hour glow",
            "soft bokeh",
            "warm tones",
            "intimate lighting",
        ],
        "Gerilimli" => &[
            "harsh shadows",
            "stark contrast",
            "cold lighting",
            "angular shadows",
        ],
        _ => &[
            "high contrast lighting",
            "chiaroscuro",
            "rim lighting",
            "dramatic shadows",
        ],
    }
}

const DEPTH_EFFECTS: &[&str] = &[
    "shallow depth of field, bokeh background",
    "deep focus, everything sharp",
    "selective focus on subject",
    "atmospheric perspective, hazy distance",
    "tilt-shift miniature effect",
];

/// Lighting presets by time of day. The label is matched loosely: anything
/// that is not night, evening or morning counts as daytime.
fn lighting_presets(time_label: &str) -> &'static [&'static str] {
    let time = time_label.to_lowercase();
    if time.contains("gece") {
        &[
            "moonlit night, silver glow",
            "city lights at night, neon reflections",
            "starlit darkness, cosmic ambient",
            "candlelit interior, warm flicker",
            "street lamp pools of light, noir",
        ]
    } else if time.contains("akşam") {
        &[
            "golden hour sunset, warm orange",
            "magic hour, pink and purple sky",
            "twilight blue, fading light",
            "dramatic sunset silhouette",
            "dusk ambient, soft transition",
        ]
    } else if time.contains("sabah") {
        &[
            "dawn breaking, soft pink light",
            "early morning mist, ethereal",
            "sunrise golden rays, hope",
            "blue hour, pre-dawn calm",
            "morning dew, fresh light",
        ]
    } else {
        &[
            "bright natural daylight, sun high",
            "soft overcast lighting, diffused",
            "harsh midday sun, strong shadows",
            "golden morning light, warm rays",
            "blue sky ambient, outdoor natural",
        ]
    }
}

fn atmospheres(genre: &str) -> &'static [&'static str] {
    match genre {
        "horror" => &[
            "eerie mist, unsettling",
            "ominous shadows lurking",
            "sickly green undertones",
            "oppressive darkness",
        ],
        "romance" => &[
            "dreamy soft glow",
            "intimate warmth",
            "rose-tinted atmosphere",
            "magical sparkles",
        ],
        "sci-fi" => &[
            "neon-lit cyberpunk",
            "sterile white technology",
            "holographic ambient",
            "space nebula colors",
        ],
        "fantasy" => &[
            "magical particle effects",
            "ethereal glow",
            "enchanted forest mist",
            "mystical aurora",
        ],
        "action" => &[
            "dust particles in light",
            "smoke and debris",
            "dynamic lighting",
            "high energy atmosphere",
        ],
        "drama" => &[
            "moody atmospheric",
            "emotionally charged lighting",
            "subtle shadows",
            "naturalistic",
        ],
        _ => &[
            "balanced natural",
            "cinematic atmosphere",
            "professional lighting setup",
            "studio quality",
        ],
    }
}

fn color_grades(genre: &str) -> &'static [&'static str] {
    match genre {
        "horror" => &[
            "desaturated cold",
            "sickly green tint",
            "blood red accents",
            "muted with dark contrast",
        ],
        "romance" => &[
            "warm peachy tones",
            "soft pink palette",
            "golden warm filter",
            "dreamy pastel",
        ],
        "sci-fi" => &[
            "cyan and magenta",
            "cool blue technology",
            "neon accent colors",
            "futuristic chrome",
        ],
        "fantasy" => &[
            "rich saturated colors",
            "magical purple and gold",
            "enchanted greens and blues",
            "mystical color palette",
        ],
        "action" => &[
            "high contrast punchy",
            "teal and orange",
            "desaturated with color pop",
            "gritty realistic",
        ],
        "drama" => &[
            "muted earth tones",
            "subtle color grading",
            "naturalistic palette",
            "emotional color story",
        ],
        _ => &[
            "balanced color",
            "cinematic LUT",
            "natural vibrant",
            "professional color grade",
        ],
    }
}

fn genre_artists(genre: &str) -> &'static [&'static str] {
    match genre {
        "horror" => &[
            "H.R. Giger biomechanical",
            "Zdzisław Beksiński nightmarish",
            "Junji Ito horror manga",
            "Wayne Barlowe dark vision",
            "Clive Barker imagination",
        ],
        "romance" => &[
            "Thomas Kinkade warmth",
            "Alphonse Mucha art nouveau",
            "J.C. Leyendecker romantic",
            "Pre-Raphaelite beauty",
            "romantic impressionism",
        ],
        _ => &[],
    }
}

fn style_artists(family: StyleFamily) -> &'static [&'static str] {
    match family {
        StyleFamily::Cinematic => &[
            "in the style of Roger Deakins cinematography",
            "Ridley Scott visual aesthetic",
            "Christopher Nolan atmospheric",
            "Denis Villeneuve visual storytelling",
            "Emmanuel Lubezki natural lighting",
        ],
        StyleFamily::FantasyArt => &[
            "in the style of Frank Frazetta",
            "Boris Vallejo fantasy art",
            "Alan Lee illustration style",
            "John Howe middle-earth aesthetic",
            "Brom dark fantasy style",
        ],
        StyleFamily::DigitalArt => &[
            "in the style of Craig Mullins",
            "Maciej Kuciara concept art",
            "Sparth digital painting",
            "Jaime Jones illustration",
            "Wojtek Fus atmosphere",
        ],
        StyleFamily::Anime => &[
            "Studio Ghibli style",
            "Makoto Shinkai visual quality",
            "Ufotable animation quality",
            "MAPPA studio aesthetic",
            "Kyoto Animation detail",
        ],
        StyleFamily::Photorealistic => &[
            "Peter Lindbergh photography",
            "Annie Leibovitz portrait style",
            "National Geographic quality",
            "Steve McCurry color",
            "documentary photography style",
        ],
        StyleFamily::OilPainting => &[
            "Rembrandt lighting and style",
            "Caravaggio chiaroscuro",
            "John Singer Sargent brushwork",
            "Joaquin Sorolla light",
            "Anders Zorn technique",
        ],
        StyleFamily::Watercolor => &[],
    }
}

/// Artist references for a genre if it has its own list, else for the style
/// family, else the cinematic list.
fn artists(genre: &str, family: StyleFamily) -> &'static [&'static str] {
    [genre_artists(genre), style_artists(family)]
        .into_iter()
        .find(|list| !list.is_empty())
        .unwrap_or_else(|| style_artists(StyleFamily::Cinematic))
}

fn scene_details(scene_type: SceneType) -> &'static [&'static str] {
    match scene_type {
        SceneType::Action => &[
            "motion lines",
            "dynamic energy",
            "impact effects",
            "debris flying",
            "speed blur trails",
            "action poses",
        ],
        SceneType::Dialogue => &[
            "expressive faces",
            "hand gestures",
            "eye contact",
            "body language",
            "subtle expressions",
            "conversation atmosphere",
        ],
        SceneType::Introspection => &[
            "thoughtful expression",
            "contemplative pose",
            "internal emotion visible",
            "subtle facial details",
            "soul visible in eyes",
        ],
        SceneType::Description => &[
            "environmental storytelling",
            "rich background details",
            "textures visible",
            "atmospheric elements",
            "layered scene depth",
        ],
        SceneType::General => &[
            "fine details",
            "intricate elements",
            "rich textures",
            "careful composition",
            "balanced elements",
        ],
    }
}

const CHARACTER_DETAILS: &[&str] = &[
    "detailed clothing",
    "fabric textures",
    "hair strands visible",
    "skin pores",
    "realistic eyes",
    "natural pose",
];

const ENVIRONMENT_DETAILS: &[&str] = &[
    "atmospheric perspective",
    "environmental textures",
    "natural elements",
    "architectural details",
    "material surfaces",
];

const EXTRA_DETAILS: usize = 3;

/// Detail keywords for the scene type plus a few about people or about the
/// surroundings.
pub fn detail_enhancer(scene_type: SceneType, has_people: bool) -> String {
    let extra = if has_people {
        CHARACTER_DETAILS
    } else {
        ENVIRONMENT_DETAILS
    };
    scene_details(scene_type)
        .iter()
        .chain(extra.iter().take(EXTRA_DETAILS))
        .copied()
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the pickers need to know about a scene
#[derive(Debug, Clone, Copy)]
pub struct VarietyInput<'a> {
    pub scene_type: SceneType,
    pub mood_label: &'a str,
    pub time_label: &'a str,
    pub genre: &'a str,
    pub family: StyleFamily,
    pub has_people: bool,
}

/// Seeded source of variety picks
#[derive(Debug, Clone)]
pub struct VarietyPicker {
    rng: StdRng,
}

impl VarietyPicker {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn pick(&mut self, options: &'static [&'static str]) -> String {
        options
            .choose(&mut self.rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }

    /// Draw every pick for one scene. Draw order is fixed so a seed maps to
    /// one set of picks.
    pub fn picks(&mut self, input: &VarietyInput) -> VarietyPicks {
        VarietyPicks {
            camera: self.pick(camera_angles(input.scene_type)),
            composition: self.pick(compositions(input.mood_label)),
            depth: self.pick(DEPTH_EFFECTS),
            lighting: self.pick(lighting_presets(input.time_label)),
            atmosphere: self.pick(atmospheres(input.genre)),
            color_grade: self.pick(color_grades(input.genre)),
            artist: self.pick(artists(input.genre, input.family)),
            quality_tags: quality_tags(input.family, false),
            detail_enhancer: detail_enhancer(input.scene_type, input.has_people),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> VarietyInput<'static> {
        VarietyInput {
            scene_type: SceneType::Action,
            mood_label: "Gizemli",
            time_label: "Gece",
            genre: "horror",
            family: StyleFamily::Cinematic,
            has_people: true,
        }
    }

    #[test]
    fn test_same_seed_same_picks() {
        let a = VarietyPicker::seeded(42).picks(&input());
        let b = VarietyPicker::seeded(42).picks(&input());
        assert_eq!(a, b);
    }

    #[test]
    fn test_picks_come_from_keyed_tables() {
        for seed in 0..20 {
            let picks = VarietyPicker::seeded(seed).picks(&input());
            assert!(camera_angles(SceneType::Action).contains(&picks.camera.as_str()));
            assert!(compositions("Gizemli").contains(&picks.composition.as_str()));
            assert!(lighting_presets("Gece").contains(&picks.lighting.as_str()));
            assert!(atmospheres("horror").contains(&picks.atmosphere.as_str()));
            assert!(genre_artists("horror").contains(&picks.artist.as_str()));
        }
    }

    #[test]
    fn test_lighting_key_from_time_label() {
        assert_eq!(lighting_presets("Akşam")[0], "golden hour sunset, warm orange");
        assert_eq!(lighting_presets("Sabah")[0], "dawn breaking, soft pink light");
        assert_eq!(lighting_presets("Gün batımı")[0], "bright natural daylight, sun high");
        assert_eq!(lighting_presets("Belirsiz"), lighting_presets("Öğle"));
    }

    #[test]
    fn test_artist_fallbacks() {
        assert_eq!(
            artists("fantasy", StyleFamily::Anime)[0],
            "Studio Ghibli style"
        );
        assert_eq!(
            artists("general", StyleFamily::Watercolor)[0],
            "in the style of Roger Deakins cinematography"
        );
    }

    #[test]
    fn test_quality_tags() {
        let plain = quality_tags(StyleFamily::Anime, false);
        assert!(plain.starts_with("masterpiece, best quality"));
        assert!(plain.ends_with("vibrant anime colors"));
        assert!(!plain.contains("award winning"));
        let creative = quality_tags(StyleFamily::Anime, true);
        assert!(creative.contains("professional, award winning, stunning, breathtaking, gorgeous, anime style"));
    }

    #[test]
    fn test_detail_enhancer() {
        assert_eq!(
            detail_enhancer(SceneType::Introspection, false),
            "thoughtful expression, contemplative pose, internal emotion visible, subtle facial details, soul visible in eyes, atmospheric perspective, environmental textures, natural elements"
        );
        assert!(detail_enhancer(SceneType::General, true).ends_with("hair strands visible"));
    }
}
