//! Feature detectors
//!
//! Each detector reads one semantic dimension out of a scene's text and
//! returns an explicit empty value when nothing matches. Detectors never fail
//! and never depend on each other; [`SceneFeatures::detect`] runs them all.

mod atmosphere;
mod content;
mod figurative;
mod narrative;
mod sensory;

pub use atmosphere::{
    analyze_emotion_intensity, detect_environment, detect_lighting, detect_mood, detect_pose,
    detect_weather, EmotionIntensity, EnvironmentReading, LightReading, MoodReading,
    DEFAULT_ENVIRONMENT_EN, DEFAULT_LIGHT_EN, NATURAL_POSE, NEUTRAL_MOOD, NEUTRAL_MOOD_EN,
    UNKNOWN_ENVIRONMENT, UNKNOWN_TIME,
};
pub use content::{
    detect_action_intensity, detect_actions, detect_objects, english_keywords,
    extract_core_content, mentions_people, suggest_camera_angle, translate, ActionIntensity,
    CoreContent, IntensityTier, DEFAULT_CAMERA, MAX_ACTIONS, MAX_CORE_OBJECTS,
};
pub use figurative::{
    blend_idioms, find_color_metaphor, find_concepts, find_contrast, find_idioms, IdiomHit,
    IdiomReading,
};
pub use narrative::{
    detect_genre, detect_multi_event, detect_perspective, detect_scene_type, MultiEvent,
    Perspective, SceneType, MULTI_EVENT_NARRATIVE, SINGLE_EVENT_NARRATIVE,
};
pub use sensory::{find_symbols, SensoryDetails, MAX_SYMBOLS};

use tracing::debug;

use crate::lexicon::{
    Concept, Contrast, Cue, Genre, Gloss, CONDITIONALS, DIALOGUE_TONES, INTENTS, INTERACTIONS,
    PERIODS, RELATIONSHIPS, SPATIAL, TEMPORALS,
};
use crate::matcher::SceneText;

/// First cue in table order with any pattern in the text
pub fn first_cue(text: &SceneText, table: &'static [Cue]) -> Option<&'static Cue> {
    table.iter().find(|cue| text.contains_any(cue.patterns))
}

pub fn first_gloss(text: &SceneText, table: &'static [Gloss]) -> Option<&'static Gloss> {
    table.iter().find(|gloss| text.contains_any(gloss.patterns))
}

/// Every gloss with a pattern in the text, in table order
pub fn all_glosses<'t>(
    text: &'t SceneText<'t>,
    table: &'static [Gloss],
) -> impl Iterator<Item = &'static Gloss> + 't {
    table.iter().filter(move |gloss| text.contains_any(gloss.patterns))
}

/// Everything the detectors found in one scene
#[derive(Debug, Clone)]
pub struct SceneFeatures {
    pub idioms: Vec<IdiomHit>,
    pub idiom: Option<IdiomReading>,
    pub concepts: Vec<&'static Concept>,
    pub contrast: Option<&'static Contrast>,
    pub color_metaphor: Option<&'static Cue>,
    pub intent: Option<&'static Cue>,
    pub conditional: Option<&'static Cue>,
    pub temporal: Option<&'static Cue>,
    pub interaction: Option<&'static Cue>,
    pub perspective: Perspective,
    pub symbols: Vec<&'static Cue>,
    pub sensory: SensoryDetails,
    pub spatial: Option<&'static Cue>,
    pub multi_event: Option<MultiEvent>,
    pub scene_type: SceneType,
    pub emotion: EmotionIntensity,
    pub objects: Vec<String>,
    pub actions: Vec<&'static str>,
    pub weather: Option<&'static str>,
    pub pose: &'static str,
    pub camera: &'static str,
    pub mood: MoodReading,
    pub lighting: LightReading,
    pub environment: EnvironmentReading,
    pub genre: Option<&'static Genre>,
    pub dialogue_tone: Option<&'static Cue>,
    pub relationship: Option<&'static Cue>,
    pub action_intensity: ActionIntensity,
    pub period: Option<&'static Cue>,
    pub keywords: Vec<&'static str>,
    pub core: CoreContent,
    pub has_humans: bool,
}

impl SceneFeatures {
    pub fn detect(text: &SceneText) -> Self {
        let idioms = find_idioms(text);
        let idiom = blend_idioms(&idioms);
        let actions = detect_actions(text);
        let camera = suggest_camera_angle(text, &actions);
        let features = Self {
            idiom,
            idioms,
            concepts: find_concepts(text),
            contrast: find_contrast(text),
            color_metaphor: find_color_metaphor(text),
            intent: first_cue(text, INTENTS),
            conditional: first_cue(text, CONDITIONALS),
            temporal: first_cue(text, TEMPORALS),
            interaction: first_cue(text, INTERACTIONS),
            perspective: detect_perspective(text),
            symbols: find_symbols(text),
            sensory: SensoryDetails::detect(text),
            spatial: first_cue(text, SPATIAL),
            multi_event: detect_multi_event(text),
            scene_type: detect_scene_type(text),
            emotion: analyze_emotion_intensity(text),
            objects: detect_objects(text),
            actions,
            weather: detect_weather(text),
            pose: detect_pose(text),
            camera,
            mood: detect_mood(text),
            lighting: detect_lighting(text),
            environment: detect_environment(text),
            genre: detect_genre(text),
            dialogue_tone: first_cue(text, DIALOGUE_TONES),
            relationship: first_cue(text, RELATIONSHIPS),
            action_intensity: detect_action_intensity(text),
            period: first_cue(text, PERIODS),
            keywords: english_keywords(text),
            core: extract_core_content(text),
            has_humans: mentions_people(text),
        };
        debug!(
            idioms = features.idioms.len(),
            concepts = features.concepts.len(),
            objects = features.objects.len(),
            mood = features.mood.label,
            environment = features.environment.label,
            genre = features.genre_id(),
            "Detected scene features"
        );
        features
    }

    /// Genre id, `general` when none matched
    pub fn genre_id(&self) -> &'static str {
        self.genre.map_or("general", |g| g.id)
    }

    /// The scene's camera. Narrative perspective always supplies one, so the
    /// scene-type and suggested cameras are only reached if it comes back
    /// empty.
    pub fn enhanced_camera(&self) -> &'static str {
        [
            self.perspective.camera(),
            self.scene_type.camera_style(),
            self.camera,
        ]
        .into_iter()
        .find(|c| !c.is_empty())
        .unwrap_or(DEFAULT_CAMERA)
    }

    /// Characters were declared or the text itself mentions people
    pub fn has_people(&self, declared_characters: bool) -> bool {
        declared_characters || self.has_humans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{POSES, SOUNDS};

    #[test]
    fn test_first_cue_respects_table_order() {
        let text = SceneText::new("Onu istiyor ama korkuyor.");
        assert_eq!(first_cue(&text, INTENTS).map(|c| c.id), Some("desire"));
        assert!(first_cue(&SceneText::new(""), INTENTS).is_none());
    }

    #[test]
    fn test_all_glosses_in_table_order() {
        let text = SceneText::new("Müzik ve fısıltı");
        let found: Vec<&str> = all_glosses(&text, SOUNDS).map(|g| g.text).collect();
        assert_eq!(
            found,
            vec!["soft whispers, quiet murmurs", "music playing, melodic atmosphere"]
        );
    }

    #[test]
    fn test_first_gloss_none_on_empty_text() {
        assert!(first_gloss(&SceneText::new(""), POSES).is_none());
    }

    #[test]
    fn test_features_of_beach_walk() {
        let text = SceneText::new("Güneş batarken, yaşlı adam sahilde yürüyordu.");
        let features = SceneFeatures::detect(&text);
        assert_eq!(features.environment.label, "Deniz kenarı");
        assert!(features.actions.contains(&"walking slowly"));
        assert_eq!(features.core.subject, Some("a man"));
        assert!(features.has_humans);
    }

    #[test]
    fn test_features_of_empty_text() {
        let features = SceneFeatures::detect(&SceneText::new(""));
        assert!(features.objects.is_empty());
        assert!(features.mood.is_neutral());
        assert_eq!(features.genre_id(), "general");
        assert_eq!(features.perspective, Perspective::ThirdPerson);
        assert!(!features.has_people(false));
        assert!(features.has_people(true));
    }

    #[test]
    fn test_enhanced_camera_is_perspective_camera() {
        let features = SceneFeatures::detect(&SceneText::new("Uzak dağlara baktı."));
        assert_eq!(features.enhanced_camera(), Perspective::ThirdPerson.camera());
    }
}
