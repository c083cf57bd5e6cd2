//! Scene assembly
//!
//! Prompts are built from three bounded parts so the most decisive words come
//! first: a core clause (who, what, where), a short list of supporting
//! keywords, and a few style tags. Everything else the detectors found goes
//! into the scene's annotations instead.

use sahne_core::{
    excerpt, first_part, scene_title, Character, ContentHash, GenerationState, Scene,
    StyleSettings, UNSPECIFIED_OBJECT,
};
use tracing::debug;

use crate::config::AnalysisConfig;
use crate::details::{important_details, variety_line};
use crate::detect::{CoreContent, EnvironmentReading, SceneFeatures};
use crate::negative::{build_negative_prompt, StyleFamily};
use crate::resolution::calculate_resolution_for_format;
use crate::variety::{VarietyInput, VarietyPicker};

/// Emotion level from which a non-neutral mood is worth a keyword
const STRONG_EMOTION: u8 = 5;
const SUPPORT_ACTIONS: usize = 2;
const SUPPORT_KEYWORDS: usize = 4;
const CORE_OBJECTS_IN_PROMPT: usize = 3;
const CREATIVE_STYLE_PARTS: usize = 5;
/// Camera value that adds nothing to the style tags
const GENERIC_CAMERA: &str = "dynamic shot";

fn setting_phrase(environment: &EnvironmentReading) -> Option<String> {
    environment
        .is_known()
        .then(|| format!("in {}", environment.english))
}

/// `<subject> <action> in <setting> with <a and b and c>`, degrading to
/// whatever parts were found.
pub fn core_prompt(core: &CoreContent, environment: &EnvironmentReading) -> String {
    let mut parts: Vec<String> = Vec::new();
    match (core.subject, core.action) {
        (Some(subject), Some(action)) => parts.push(format!("{} {}", subject, action)),
        (Some(subject), None) => parts.push(subject.to_string()),
        _ if !core.description.is_empty() => parts.push(core.description.clone()),
        _ => {}
    }
    parts.extend(setting_phrase(environment));
    if !core.objects.is_empty() {
        let objects: Vec<&str> = core
            .objects
            .iter()
            .take(CORE_OBJECTS_IN_PROMPT)
            .copied()
            .collect();
        parts.push(format!("with {}", objects.join(" and ")));
    }
    parts.join(" ")
}

/// Weather, light, a strong mood, two actions and four keywords, cut to `max`
pub fn support_keywords(features: &SceneFeatures, max: usize) -> String {
    let mut keywords: Vec<&str> = Vec::new();
    keywords.extend(features.weather);
    keywords.push(features.lighting.english);
    if features.emotion.level >= STRONG_EMOTION && !features.mood.is_neutral() {
        keywords.push(&features.mood.english);
    }
    keywords.extend(features.actions.iter().take(SUPPORT_ACTIONS));
    keywords.extend(features.keywords.iter().take(SUPPORT_KEYWORDS));
    keywords.truncate(max);
    keywords.join(", ")
}

/// Style lead, two quality tokens and the leading part of the camera
pub fn style_tags(style_lead: &str, camera: &str, max: usize) -> String {
    let mut tags: Vec<String> = Vec::new();
    if !style_lead.is_empty() {
        tags.push(style_lead.to_string());
    }
    tags.push("highly detailed".to_string());
    tags.push("professional".to_string());
    if !camera.is_empty() && camera != GENERIC_CAMERA {
        tags.push(first_part(camera));
    }
    tags.truncate(max);
    tags.join(", ")
}

fn join_non_empty<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(AsRef::as_ref)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn faithful_prompt(characters: &str, core: &str, support: &str, style: &str) -> String {
    join_non_empty(&[characters, core, support, style])
}

/// Evocative framing of the core content followed by mood, light, quality and
/// style tokens, then the palette.
pub fn creative_prompt(features: &SceneFeatures, style_lead: &str, palette_lead: &str) -> String {
    let core = &features.core;
    let mut base: Vec<String> = Vec::new();
    match (core.subject, core.action) {
        (Some(subject), Some(action)) => {
            base.push(format!("dramatic scene of {} {}", subject, action))
        }
        _ if !core.description.is_empty() => base.push(format!("artistic {}", core.description)),
        _ => {}
    }
    base.extend(setting_phrase(&features.environment));

    let mut style: Vec<&str> = Vec::new();
    if !features.mood.is_neutral() {
        style.push(&features.mood.english);
    }
    style.push(features.lighting.english);
    style.push("masterpiece");
    style.push("award winning");
    if !style_lead.is_empty() {
        style.push(style_lead);
    }
    style.truncate(CREATIVE_STYLE_PARTS);

    join_non_empty(&[base.join(" "), style.join(", "), palette_lead.to_string()])
}

fn character_prefix(characters: &[Character]) -> String {
    characters
        .iter()
        .map(Character::describe)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Stable id from the scene text and its position
pub fn scene_id(text: &str, ordinal: usize) -> String {
    format!("scene-{}-{}", ContentHash::from_text(text).short(), ordinal)
}

/// Build the scene record for one segment from its detected features.
pub fn build_scene(
    text: &str,
    ordinal: usize,
    features: &SceneFeatures,
    settings: &StyleSettings,
    characters: &[Character],
    config: &AnalysisConfig,
) -> Scene {
    let style_lead = settings.style.lead(&settings.custom_style);
    let family = StyleFamily::of(settings.style);
    let camera = features.enhanced_camera();
    let has_people = features.has_people(!characters.is_empty());

    let core = core_prompt(&features.core, &features.environment);
    let support = support_keywords(features, config.max_support_keywords);
    let tags = style_tags(&style_lead, camera, config.max_style_tags);
    let mut faithful = faithful_prompt(&character_prefix(characters), &core, &support, &tags);
    let mut creative = creative_prompt(features, &style_lead, &first_part(settings.palette.prompt()));
    if faithful.is_empty() {
        faithful = excerpt(text);
    }
    if creative.is_empty() {
        creative = excerpt(text);
    }

    let seed = config
        .seed
        .unwrap_or_else(|| ContentHash::from_text(text).seed());
    let variety = VarietyPicker::seeded(seed).picks(&VarietyInput {
        scene_type: features.scene_type,
        mood_label: features.mood.label,
        time_label: features.lighting.label,
        genre: features.genre_id(),
        family,
        has_people,
    });

    let mut details = important_details(features, camera, text);
    details.push(variety_line(&variety));

    let (mood, lighting) = match &features.idiom {
        Some(idiom) => (
            format!("{} - {}", idiom.key, idiom.mood),
            idiom.lighting.clone(),
        ),
        None => (
            format!("{} ({})", features.mood.label, features.mood.english),
            format!(
                "{} ({})",
                features.lighting.label, features.lighting.english
            ),
        ),
    };

    let objects = if features.objects.is_empty() {
        vec![UNSPECIFIED_OBJECT.to_string()]
    } else {
        features.objects.clone()
    };

    debug!(
        ordinal,
        faithful_words = faithful.split_whitespace().count(),
        creative_words = creative.split_whitespace().count(),
        "Assembled scene prompts"
    );

    Scene {
        id: scene_id(text, ordinal),
        title: scene_title(ordinal),
        description: excerpt(text),
        objects,
        mood,
        lighting,
        environment: format!(
            "{} ({})",
            features.environment.label, features.environment.english
        ),
        important_details: details,
        faithful_prompt: faithful,
        creative_prompt: creative,
        negative_prompt: build_negative_prompt(
            has_people,
            family,
            features.genre_id(),
            config.max_negative_terms,
        ),
        resolution: calculate_resolution_for_format(&settings.resolution, &settings.format),
        genre: features.genre_id().to_string(),
        scene_type: features.scene_type.id().to_string(),
        emotion_intensity: features.emotion.level,
        action_intensity: features.action_intensity.level,
        variety: Some(variety),
        generation: GenerationState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::DEFAULT_ENVIRONMENT_EN;
    use crate::matcher::SceneText;
    use sahne_core::StyleId;

    fn features(text: &str) -> SceneFeatures {
        SceneFeatures::detect(&SceneText::new(text))
    }

    fn unknown_environment() -> EnvironmentReading {
        features("").environment
    }

    #[test]
    fn test_core_prompt_degrades() {
        let env = unknown_environment();
        assert_eq!(env.english, DEFAULT_ENVIRONMENT_EN);
        assert_eq!(core_prompt(&CoreContent::default(), &env), "");

        let core = CoreContent {
            subject: Some("a woman"),
            action: None,
            objects: vec!["candle", "letter", "mirror", "door"],
            description: String::new(),
        };
        assert_eq!(
            core_prompt(&core, &env),
            "a woman with candle and letter and mirror"
        );
    }

    #[test]
    fn test_core_prompt_with_setting() {
        let f = features("Güneş batarken, yaşlı adam sahilde yürüyordu.");
        let core = core_prompt(&f.core, &f.environment);
        assert!(core.starts_with("a man walking in "));
        assert!(core.contains(" with sun"));
    }

    #[test]
    fn test_style_tags_bounded() {
        assert_eq!(
            style_tags("oil painting", "third person cinematic, external observer angle", 4),
            "oil painting, highly detailed, professional, third person cinematic"
        );
        assert_eq!(
            style_tags("oil painting", GENERIC_CAMERA, 4),
            "oil painting, highly detailed, professional"
        );
        assert_eq!(style_tags("anime style", "x", 2), "anime style, highly detailed");
    }

    #[test]
    fn test_support_keywords_bounded() {
        let f = features("Yağmur yağarken adam ve kadın ormanda koşuyor, ağlıyor ve bağırıyordu.");
        let support = support_keywords(&f, 8);
        assert!(support.split(", ").count() <= 8);
        assert!(support.starts_with(f.weather.unwrap_or(f.lighting.english)));
        assert!(support_keywords(&f, 2).split(", ").count() <= 2);
    }

    #[test]
    fn test_faithful_prompt_skips_empty_parts() {
        assert_eq!(faithful_prompt("", "a man", "", "cinematic"), "a man, cinematic");
        assert_eq!(faithful_prompt("", "", "", ""), "");
    }

    #[test]
    fn test_creative_prompt_framing() {
        let f = features("Güneş batarken, yaşlı adam sahilde yürüyordu.");
        let creative = creative_prompt(&f, "cinematic film still", "warm color palette");
        assert!(creative.starts_with("dramatic scene of a man walking in "));
        assert!(creative.contains("masterpiece, award winning"));
        assert!(creative.ends_with("warm color palette"));
    }

    #[test]
    fn test_build_scene_invariants() {
        let text = "...";
        let f = features(text);
        let scene = build_scene(
            text,
            1,
            &f,
            &StyleSettings::default(),
            &[],
            &AnalysisConfig::default(),
        );
        assert_eq!(scene.objects, vec![UNSPECIFIED_OBJECT.to_string()]);
        assert!(!scene.faithful_prompt.is_empty());
        assert!(!scene.creative_prompt.is_empty());
        assert_eq!(scene.title, "Sahne 1");
        assert_eq!((scene.resolution.width, scene.resolution.height), (1920, 1080));
        assert!(scene.variety.is_some());
        assert!(scene.generation.is_idle());
    }

    #[test]
    fn test_characters_prefix_faithful_prompt() {
        let text = "Kadın pencereden baktı.";
        let ayse = Character {
            name: "Ayşe".into(),
            appearance: "long black hair".into(),
            clothing: "red coat".into(),
            ..Default::default()
        };
        let settings = StyleSettings {
            style: StyleId::Watercolor,
            ..Default::default()
        };
        let scene = build_scene(
            text,
            2,
            &features(text),
            &settings,
            &[ayse],
            &AnalysisConfig::default(),
        );
        assert!(scene
            .faithful_prompt
            .starts_with("Ayşe (long black hair, red coat), "));
        assert!(scene.faithful_prompt.contains("watercolor painting"));
        assert!(scene.negative_prompt.contains("bad hands"));
    }

    #[test]
    fn test_scene_id_is_stable() {
        assert_eq!(scene_id("deniz", 1), scene_id("deniz", 1));
        assert_ne!(scene_id("deniz", 1), scene_id("deniz", 2));
        assert!(scene_id("deniz", 3).starts_with("scene-"));
    }
}
