//! Who does what where: objects, actions, the core clause, action intensity
//! and the suggested camera

use std::sync::OnceLock;

use regex::Regex;

use crate::lexicon::{ACTIONS, CORE_ACTIONS, CORE_OBJECTS, OBJECT_ROOTS, SUBJECTS, TRANSLATIONS};
use crate::matcher::{cached_regex, SceneText};

/// Most actions reported for one scene
pub const MAX_ACTIONS: usize = 3;
/// Most objects carried by the core clause
pub const MAX_CORE_OBJECTS: usize = 5;

/// English gloss for a Turkish root, if the dictionary has one
pub fn translate(root: &str) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(tr, _)| *tr == root)
        .map(|(_, en)| *en)
}

/// Object roots found in the text, glossed in English where possible.
/// Roots without a gloss are reported as written.
pub fn detect_objects(text: &SceneText) -> Vec<String> {
    OBJECT_ROOTS
        .iter()
        .filter(|root| text.has_root(root))
        .map(|root| translate(root).unwrap_or(root).to_string())
        .collect()
}

/// Actions whose root is present and not negated
pub fn detect_actions(text: &SceneText) -> Vec<&'static str> {
    ACTIONS
        .iter()
        .filter(|a| a.patterns.iter().any(|kw| text.has_affirmed_root(kw)))
        .map(|a| a.text)
        .take(MAX_ACTIONS)
        .collect()
}

/// Every dictionary word found, translated, without repeats
pub fn english_keywords(text: &SceneText) -> Vec<&'static str> {
    let mut keywords: Vec<&'static str> = Vec::new();
    for (tr, en) in TRANSLATIONS {
        if text.has_root(tr) && !keywords.contains(en) {
            keywords.push(en);
        }
    }
    keywords
}

/// Subject, action and setting nouns of a scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoreContent {
    pub subject: Option<&'static str>,
    pub action: Option<&'static str>,
    pub objects: Vec<&'static str>,
    /// Short English clause, empty when nothing was found
    pub description: String,
}

pub fn extract_core_content(text: &SceneText) -> CoreContent {
    let first = |table: &'static [(&'static str, &'static str)]| {
        table
            .iter()
            .find(|(tr, _)| text.has_root(tr))
            .map(|(_, en)| *en)
    };
    let subject = first(SUBJECTS);
    let action = first(CORE_ACTIONS);
    let objects: Vec<&'static str> = CORE_OBJECTS
        .iter()
        .filter(|(tr, _)| text.has_root(tr))
        .map(|(_, en)| *en)
        .collect();

    let listed = |n: usize| objects.iter().take(n).copied().collect::<Vec<_>>().join(", ");
    let description = match (subject, action) {
        (Some(s), Some(a)) if objects.is_empty() => format!("{} {}", s, a),
        (Some(s), Some(a)) => format!("{} {} near {}", s, a, listed(3)),
        (Some(s), None) if objects.is_empty() => s.to_string(),
        (Some(s), None) => format!("{} in a scene with {}", s, listed(3)),
        (None, _) if objects.is_empty() => String::new(),
        (None, _) => format!("scene featuring {}", listed(4)),
    };

    CoreContent {
        subject,
        action,
        objects: objects.into_iter().take(MAX_CORE_OBJECTS).collect(),
        description,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntensityTier {
    Low,
    Medium,
    High,
    Extreme,
}

impl IntensityTier {
    pub fn id(&self) -> &'static str {
        match self {
            IntensityTier::Low => "low",
            IntensityTier::Medium => "medium",
            IntensityTier::High => "high",
            IntensityTier::Extreme => "extreme",
        }
    }
}

/// Physical action intensity on a 1–10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionIntensity {
    pub level: u8,
    pub tier: IntensityTier,
    pub visual: &'static str,
    pub camera_effect: &'static str,
}

const LOW_ACTIONS: &[&str] = &["yürüdü", "oturdu", "baktı", "durdu", "bekledi", "dinledi"];
const MEDIUM_ACTIONS: &[&str] = &[
    "koştu", "atladı", "tuttu", "itti", "çekti", "yakaladı", "kovaladı",
];
const HIGH_ACTIONS: &[&str] = &[
    "saldırdı", "vurdu", "patlattı", "parçaladı", "yıktı", "ezdi", "öldürdü",
];
const EXTREME_ACTIONS: &[&str] = &["katliam", "kıyamet", "yok etti", "mahvetti", "havaya uçurdu"];
const ACTION_INTENSIFIERS: &[&str] = &["aniden", "şiddetle", "delicesine", "vahşice", "acımasızca"];

/// The strongest tier with a verb present sets the level. An intensifier adds
/// two, capped at 10.
pub fn detect_action_intensity(text: &SceneText) -> ActionIntensity {
    let mut reading = if text.contains_any(EXTREME_ACTIONS) {
        ActionIntensity {
            level: 10,
            tier: IntensityTier::Extreme,
            visual: "catastrophic destruction, explosive chaos",
            camera_effect: "shaky cam, rapid cuts, extreme angles",
        }
    } else if text.contains_any(HIGH_ACTIONS) {
        ActionIntensity {
            level: 8,
            tier: IntensityTier::High,
            visual: "violent impact, aggressive action",
            camera_effect: "dynamic action camera, motion blur",
        }
    } else if text.contains_any(MEDIUM_ACTIONS) {
        ActionIntensity {
            level: 5,
            tier: IntensityTier::Medium,
            visual: "active movement, athletic action",
            camera_effect: "tracking shot, following action",
        }
    } else if text.contains_any(LOW_ACTIONS) {
        ActionIntensity {
            level: 2,
            tier: IntensityTier::Low,
            visual: "subtle movement, gentle action",
            camera_effect: "steady contemplative shot",
        }
    } else {
        ActionIntensity {
            level: 3,
            tier: IntensityTier::Low,
            visual: "calm subtle motion",
            camera_effect: "steady stable shot",
        }
    };
    if text.contains_any(ACTION_INTENSIFIERS) {
        reading.level = (reading.level + 2).min(10);
    }
    reading
}

pub const DEFAULT_CAMERA: &str = "cinematic medium shot, balanced composition";

/// Camera suggestion from the detected actions first, then from framing
/// words in the text.
pub fn suggest_camera_angle(text: &SceneText, actions: &[&str]) -> &'static str {
    let has = |action: &str| actions.contains(&action);
    if has("running fast") || has("fighting intensely") {
        "dynamic action shot, motion blur, dramatic angle"
    } else if has("deep in thought") || has("crying with tears") {
        "close-up portrait, emotional, shallow depth of field"
    } else if has("embracing lovingly") {
        "intimate medium shot, soft focus background"
    } else if text.contains_any(&["manzara", "uzak", "ufuk"]) {
        "wide establishing shot, panoramic view"
    } else if text.contains_any(&["yüz", "göz", "bakış"]) {
        "extreme close-up, detailed face, expressive eyes"
    } else if text.contains_any(&["yukarıdan", "tepeden"]) {
        "bird's eye view, overhead shot"
    } else if text.contains_any(&["aşağıdan", "devasa", "koca"]) {
        "low angle shot, imposing perspective"
    } else {
        DEFAULT_CAMERA
    }
}

const PEOPLE: &str = r"(?i)adam|kadın|çocuk|kız|oğlan|insan|karakter|kahraman|kişi";
static PEOPLE_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Whether the text mentions a person
pub fn mentions_people(text: &SceneText) -> bool {
    cached_regex(&PEOPLE_RE, PEOPLE).is_some_and(|re| re.is_match(text.raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SceneText<'_> {
        SceneText::new(s)
    }

    #[test]
    fn test_core_content_subject_and_action() {
        let core = extract_core_content(&text("Güneş batarken, yaşlı adam sahilde yürüyordu."));
        assert_eq!(core.subject, Some("a man"));
        assert_eq!(core.action, Some("walking"));
        assert!(core.description.starts_with("a man walking near sun"));
    }

    #[test]
    fn test_core_content_objects_only() {
        let core = extract_core_content(&text("Mum ve mektup"));
        assert_eq!(core.subject, None);
        assert_eq!(core.objects, vec!["letter", "candle"]);
        assert_eq!(core.description, "scene featuring letter, candle");
    }

    #[test]
    fn test_core_content_empty() {
        let core = extract_core_content(&text("..."));
        assert_eq!(core, CoreContent::default());
    }

    #[test]
    fn test_objects_translated() {
        let objects = detect_objects(&text("Denizde bir gemi"));
        assert!(objects.contains(&"sea".to_string()));
        assert!(objects.contains(&"gemi".to_string()));
        assert!(detect_objects(&text("...")).is_empty());
    }

    #[test]
    fn test_negated_action_dropped() {
        let actions = detect_actions(&text("Hiç koşmadı, sadece yürüdü."));
        assert!(actions.contains(&"walking slowly"));
        assert!(!actions.contains(&"running fast"));
    }

    #[test]
    fn test_keywords_deduplicated() {
        let keywords = english_keywords(&text("adam ve adam"));
        assert_eq!(keywords.iter().filter(|k| **k == "man").count(), 1);
    }

    #[test]
    fn test_action_intensity_tiers() {
        assert_eq!(detect_action_intensity(&text("Sessizlik.")).level, 3);
        assert_eq!(detect_action_intensity(&text("Yürüdü.")).level, 2);
        assert_eq!(detect_action_intensity(&text("Koştu.")).level, 5);
        assert_eq!(detect_action_intensity(&text("Koştu ve vurdu.")).level, 8);
        let extreme = detect_action_intensity(&text("Şehri havaya uçurdu."));
        assert_eq!(extreme.tier, IntensityTier::Extreme);
        assert_eq!(extreme.level, 10);
    }

    #[test]
    fn test_intensifier_adds_two_capped() {
        assert_eq!(detect_action_intensity(&text("Aniden koştu.")).level, 7);
        assert_eq!(detect_action_intensity(&text("Aniden kıyamet koptu.")).level, 10);
    }

    #[test]
    fn test_camera_suggestions() {
        let scene = text("Ufka baktı");
        assert_eq!(
            suggest_camera_angle(&scene, &["running fast"]),
            "dynamic action shot, motion blur, dramatic angle"
        );
        assert_eq!(
            suggest_camera_angle(&text("Uzak dağlar"), &[]),
            "wide establishing shot, panoramic view"
        );
        assert_eq!(suggest_camera_angle(&text("Sessizlik"), &[]), DEFAULT_CAMERA);
    }

    #[test]
    fn test_thinking_scene_gets_close_up() {
        let scene = text("Kadın pencerenin önünde düşünüyordu.");
        let actions = detect_actions(&scene);
        assert!(actions.contains(&"deep in thought"));
        assert_eq!(
            suggest_camera_angle(&scene, &actions),
            "close-up portrait, emotional, shallow depth of field"
        );
    }

    #[test]
    fn test_mentions_people() {
        assert!(mentions_people(&text("Yaşlı ADAM")));
        assert!(!mentions_people(&text("Boş bir sokak")));
    }
}
