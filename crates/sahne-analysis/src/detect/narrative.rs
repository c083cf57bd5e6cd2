//! Narrative structure: perspective, scene type, genre and multi-event prose

use std::sync::OnceLock;

use regex::Regex;

use crate::lexicon::{Genre, GENRES, MULTI_EVENT_INDICATORS};
use crate::matcher::{cached_regex, SceneText};

/// Grammatical point of view of the narration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Perspective {
    FirstPerson,
    FirstPersonPlural,
    SecondPerson,
    ThirdPerson,
}

const FIRST_SINGULAR_MARKERS: &[&str] = &[
    "ben ", "benim", "bana", "beni", "benimle", "-dim", "-dım", "-düm", "-dum", "gördüm",
    "hissettim", "düşündüm",
];
const FIRST_PLURAL_MARKERS: &[&str] = &[
    "biz ", "bizim", "bize", "bizi", "-dik", "-dık", "-dük", "-duk",
];
const SECOND_MARKERS: &[&str] = &[
    "sen ", "senin", "sana", "seni", "-din", "-dın", "-dün", "-dun",
];
const THIRD_MARKERS: &[&str] = &[
    "o ", "onun", "ona", "onu", "onlar", "-di", "-dı", "-dü", "-du",
];

impl Perspective {
    pub fn id(&self) -> &'static str {
        match self {
            Perspective::FirstPerson => "first_person",
            Perspective::FirstPersonPlural => "first_person_plural",
            Perspective::SecondPerson => "second_person",
            Perspective::ThirdPerson => "third_person",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Perspective::FirstPerson => "Birinci şahıs (Ben)",
            Perspective::FirstPersonPlural => "Birinci çoğul (Biz)",
            Perspective::SecondPerson => "İkinci şahıs (Sen)",
            Perspective::ThirdPerson => "Üçüncü şahıs (O)",
        }
    }

    pub fn visual(&self) -> &'static str {
        match self {
            Perspective::FirstPerson => {
                "subjective POV elements, personal intimate view, internal experience"
            }
            Perspective::FirstPersonPlural => {
                "group perspective, collective experience, shared viewpoint"
            }
            Perspective::SecondPerson => {
                "direct address composition, viewer involvement, you-are-there feeling"
            }
            Perspective::ThirdPerson => {
                "objective observer view, character from outside, omniscient framing"
            }
        }
    }

    /// Camera approach that suits the point of view
    pub fn camera(&self) -> &'static str {
        match self {
            Perspective::FirstPerson => "first person POV shot, subjective camera angle",
            Perspective::FirstPersonPlural => "group shot, inclusive framing, we-perspective",
            Perspective::SecondPerson => "direct address angle, immersive second person view",
            Perspective::ThirdPerson => "third person cinematic, external observer angle",
        }
    }
}

/// Count distinct pronoun and suffix markers per person. Third person wins
/// ties and the no-marker case.
pub fn detect_perspective(text: &SceneText) -> Perspective {
    let first = text.count_found(FIRST_SINGULAR_MARKERS);
    let plural = text.count_found(FIRST_PLURAL_MARKERS);
    let second = text.count_found(SECOND_MARKERS);
    let third = text.count_found(THIRD_MARKERS);
    let max = first.max(plural).max(second).max(third);

    if max == 0 || third >= max {
        Perspective::ThirdPerson
    } else if first >= max {
        Perspective::FirstPerson
    } else if plural >= max {
        Perspective::FirstPersonPlural
    } else {
        Perspective::SecondPerson
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneType {
    Action,
    Dialogue,
    Introspection,
    Description,
    General,
}

const DIALOGUE_MARKERS: &[&str] = &[
    "\"", "'", "dedi", "sordu", "cevapladı", "bağırdı", "fısıldadı", "söyledi",
];
const ACTION_MARKERS: &[&str] = &[
    "koştu", "atladı", "vurdu", "kaçtı", "saldırdı", "patladı", "düştü", "yakaladı", "kovaladı",
];
const INNER_MARKERS: &[&str] = &[
    "düşündü", "hissetti", "merak etti", "aklından geçirdi", "içinden", "kendi kendine",
];
const DESCRIPTION_MARKERS: &[&str] = &[
    "vardı", "uzanıyordu", "görünüyordu", "bulunuyordu", "duruyordu", "yayılıyordu",
];

impl SceneType {
    pub fn id(&self) -> &'static str {
        match self {
            SceneType::Action => "action",
            SceneType::Dialogue => "dialogue",
            SceneType::Introspection => "introspection",
            SceneType::Description => "description",
            SceneType::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SceneType::Action => "Aksiyon",
            SceneType::Dialogue => "Diyalog",
            SceneType::Introspection => "İç monolog",
            SceneType::Description => "Betimleme",
            SceneType::General => "Genel",
        }
    }

    pub fn camera_style(&self) -> &'static str {
        match self {
            SceneType::Action => "dynamic action camera, motion blur, dramatic angles, fast pacing",
            SceneType::Dialogue => "shot-reverse-shot, medium close-up, conversation framing",
            SceneType::Introspection => {
                "close-up on face, shallow depth of field, contemplative framing"
            }
            SceneType::Description => "establishing shot, wide angle, atmospheric composition",
            SceneType::General => "cinematic medium shot, balanced composition",
        }
    }
}

/// Action beats outrank dialogue, which outranks inner monologue and then
/// description.
pub fn detect_scene_type(text: &SceneText) -> SceneType {
    if text.contains_any(ACTION_MARKERS) {
        SceneType::Action
    } else if text.contains_any(DIALOGUE_MARKERS) {
        SceneType::Dialogue
    } else if text.contains_any(INNER_MARKERS) {
        SceneType::Introspection
    } else if text.contains_any(DESCRIPTION_MARKERS) {
        SceneType::Description
    } else {
        SceneType::General
    }
}

/// A genre needs two keyword hits to be picked outright. Failing that the
/// first genre with any hit is used, and `None` means "general".
pub fn detect_genre(text: &SceneText) -> Option<&'static Genre> {
    GENRES
        .iter()
        .find(|g| text.count_found(g.patterns) >= 2)
        .or_else(|| GENRES.iter().find(|g| text.contains_any(g.patterns)))
}

pub const SINGLE_EVENT_NARRATIVE: &str = "single focused scene";
pub const MULTI_EVENT_NARRATIVE: &str =
    "multi-layered scene, split composition showing simultaneous events";

/// Most events reported for one scene
const MAX_EVENTS: usize = 3;
const MIN_EVENT_CHARS: usize = 10;
const EVENT_SEPARATOR: &str = r"(?i)(?:ve|ama|fakat|ancak|iken|sırada)\s+";

static EVENT_SEPARATOR_RE: OnceLock<Option<Regex>> = OnceLock::new();

/// Clauses of a scene that describes several things happening at once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiEvent {
    pub events: Vec<String>,
}

/// Two or more distinct conjunction markers make a scene multi-event. The raw
/// text is then cut at conjunctions and the longer clauses kept.
pub fn detect_multi_event(text: &SceneText) -> Option<MultiEvent> {
    if text.count_found(MULTI_EVENT_INDICATORS) < 2 {
        return None;
    }
    let raw = text.raw();
    let events = match cached_regex(&EVENT_SEPARATOR_RE, EVENT_SEPARATOR) {
        Some(re) => re
            .split(raw)
            .filter(|p| p.trim().chars().count() > MIN_EVENT_CHARS)
            .take(MAX_EVENTS)
            .map(str::to_string)
            .collect(),
        None => vec![raw.to_string()],
    };
    Some(MultiEvent { events })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SceneText<'_> {
        SceneText::new(s)
    }

    #[test]
    fn test_perspective_defaults_to_third_person() {
        assert_eq!(detect_perspective(&text("")), Perspective::ThirdPerson);
        assert_eq!(
            detect_perspective(&text("Rüzgar esti.")),
            Perspective::ThirdPerson
        );
    }

    #[test]
    fn test_first_person() {
        let p = detect_perspective(&text("Ben o gece bana bakan gözleri gördüm, beni korkuttu."));
        // first: "ben ", "bana", "beni", "gördüm" = 4; third: "o " = 1
        assert_eq!(p, Perspective::FirstPerson);
        assert_eq!(p.camera(), "first person POV shot, subjective camera angle");
    }

    #[test]
    fn test_third_person_wins_ties() {
        // "bize" against "onu"
        assert_eq!(
            detect_perspective(&text("bize yardım etti, onu tanıyorduk")),
            Perspective::ThirdPerson
        );
    }

    #[test]
    fn test_scene_type_precedence() {
        assert_eq!(
            detect_scene_type(&text("\"Dur!\" dedi ve koştu.")),
            SceneType::Action
        );
        assert_eq!(detect_scene_type(&text("Yavaşça sordu.")), SceneType::Dialogue);
        assert_eq!(
            detect_scene_type(&text("Uzun uzun düşündü.")),
            SceneType::Introspection
        );
        assert_eq!(
            detect_scene_type(&text("Tepede eski bir kule vardı.")),
            SceneType::Description
        );
        assert_eq!(detect_scene_type(&text("Sabah")), SceneType::General);
    }

    #[test]
    fn test_genre_prefers_two_hits() {
        // Romance comes first in the table but fantasy has two hits.
        let genre = detect_genre(&text("aşk, ejderha ve büyü hikayesi")).unwrap();
        assert_eq!(genre.id, "fantasy");
        let genre = detect_genre(&text("bir aşk hikayesi")).unwrap();
        assert_eq!(genre.id, "romance");
        assert!(detect_genre(&text("sabah kahvaltısı")).is_none());
    }

    #[test]
    fn test_multi_event_split() {
        let scene = text("Kadın pencereden bakıyordu ama adam kapıyı çoktan kilitlemişti ve anahtarı saklamıştı.");
        let multi = detect_multi_event(&scene).unwrap();
        assert_eq!(multi.events.len(), 3);
        assert!(multi.events[0].starts_with("Kadın pencereden"));
    }

    #[test]
    fn test_single_event() {
        assert!(detect_multi_event(&text("Kadın pencereden dışarı baktı.")).is_none());
    }
}
