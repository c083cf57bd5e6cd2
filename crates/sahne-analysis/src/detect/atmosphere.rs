//! Mood, light, place, weather, pose and emotional intensity

use crate::lexicon::{ENVIRONMENTS, LIGHTING_STYLES, MOODS, POSES, TIMES_OF_DAY, WEATHER};
use crate::matcher::SceneText;

use super::first_gloss;

pub const NEUTRAL_MOOD: &str = "Nötr";
pub const NEUTRAL_MOOD_EN: &str = "neutral atmosphere";
pub const UNKNOWN_TIME: &str = "Belirsiz";
pub const DEFAULT_LIGHT_EN: &str = "natural lighting";
pub const UNKNOWN_ENVIRONMENT: &str = "Belirsiz";
pub const DEFAULT_ENVIRONMENT_EN: &str = "scenic background";
pub const NATURAL_POSE: &str = "natural pose";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodReading {
    pub label: &'static str,
    /// English gloss, prefixed with "intense" when an intensity phrase of this
    /// mood was found
    pub english: String,
    pub score: u32,
    pub intense: bool,
}

impl MoodReading {
    pub fn is_neutral(&self) -> bool {
        self.score == 0
    }
}

/// Score every mood and keep the best.
///
/// Each affirmed keyword root is worth one point and each intensity phrase
/// two. Only a strictly higher score replaces the leader, so ties go to the
/// earlier mood in the table.
pub fn detect_mood(text: &SceneText) -> MoodReading {
    let mut best = MoodReading {
        label: NEUTRAL_MOOD,
        english: NEUTRAL_MOOD_EN.to_string(),
        score: 0,
        intense: false,
    };
    for mood in MOODS {
        let keyword_points = mood
            .keywords
            .iter()
            .filter(|kw| text.has_affirmed_root(kw))
            .count() as u32;
        let intensity_hits = text.count_found(mood.intensity) as u32;
        let score = keyword_points + 2 * intensity_hits;
        if score > best.score {
            let intense = intensity_hits > 0;
            best = MoodReading {
                label: mood.label,
                english: if intense {
                    format!("intense {}", mood.english)
                } else {
                    mood.english.to_string()
                },
                score,
                intense,
            };
        }
    }
    best
}

/// Time of day with its light, possibly restyled by a lighting cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightReading {
    /// Turkish time-of-day label
    pub label: &'static str,
    pub english: &'static str,
}

pub fn detect_lighting(text: &SceneText) -> LightReading {
    let (label, mut english) = TIMES_OF_DAY
        .iter()
        .find(|t| text.contains_any(t.patterns))
        .map(|t| (t.label, t.english))
        .unwrap_or((UNKNOWN_TIME, DEFAULT_LIGHT_EN));
    if let Some(style) = LIGHTING_STYLES
        .iter()
        .find(|s| text.has_any_root(s.patterns))
    {
        english = style.english;
    }
    LightReading { label, english }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvironmentReading {
    pub label: &'static str,
    pub english: &'static str,
    pub score: u32,
}

impl EnvironmentReading {
    pub fn is_known(&self) -> bool {
        self.score > 0
    }
}

/// Matched keyword count times the environment's priority, highest wins,
/// earlier entries winning ties.
pub fn detect_environment(text: &SceneText) -> EnvironmentReading {
    let mut best = EnvironmentReading {
        label: UNKNOWN_ENVIRONMENT,
        english: DEFAULT_ENVIRONMENT_EN,
        score: 0,
    };
    for env in ENVIRONMENTS {
        let matches = env.keywords.iter().filter(|kw| text.has_root(kw)).count() as u32;
        let score = matches * env.priority;
        if score > best.score {
            best = EnvironmentReading {
                label: env.label,
                english: env.english,
                score,
            };
        }
    }
    best
}

pub fn detect_weather(text: &SceneText) -> Option<&'static str> {
    WEATHER
        .iter()
        .find(|w| text.has_any_root(w.patterns))
        .map(|w| w.text)
}

pub fn detect_pose(text: &SceneText) -> &'static str {
    first_gloss(text, POSES).map_or(NATURAL_POSE, |g| g.text)
}

const EXTREME_WORDS: &[&str] = &[
    "çok", "aşırı", "son derece", "inanılmaz", "delicesine", "müthiş", "korkunç", "berbat",
];
const HIGH_WORDS: &[&str] = &["oldukça", "epey", "bayağı", "hayli", "fazla", "büyük"];
const MODERATE_WORDS: &[&str] = &["biraz", "hafif", "az", "azıcık", "ufak"];
const LOW_WORDS: &[&str] = &["pek", "hiç", "asla", "zerre", "katiyen"];

/// Emotional intensity on a 1–10 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionIntensity {
    pub level: u8,
    pub visual: &'static str,
}

/// Start at 5, then apply intensifiers from strongest to weakest. Damping words
/// are applied last, so "hiç" always brings the level down to 2.
pub fn analyze_emotion_intensity(text: &SceneText) -> EmotionIntensity {
    let mut level = 5u8;
    if text.contains_any(EXTREME_WORDS) {
        level = 10;
    }
    if text.contains_any(HIGH_WORDS) && level < 8 {
        level = 8;
    }
    if text.contains_any(MODERATE_WORDS) && level > 3 {
        level = 4;
    }
    if text.contains_any(LOW_WORDS) {
        level = 2;
    }

    let visual = match level {
        9.. => "overwhelming dramatic impact, extreme emotions visible, powerful composition",
        7..=8 => "strong emotional presence, expressive, impactful",
        5..=6 => "moderate emotional expression, balanced",
        3..=4 => "subtle emotional hints, understated",
        _ => "minimal expression, neutral, calm",
    };
    EmotionIntensity { level, visual }
}
