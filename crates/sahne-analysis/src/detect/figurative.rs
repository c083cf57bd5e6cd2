//! Idioms, abstract concepts, contrasting pairs and color metaphors

use crate::lexicon::{Concept, Contrast, Cue, Idiom, COLOR_METAPHORS, CONCEPTS, CONTRASTS, IDIOMS};
use crate::matcher::SceneText;

use super::first_cue;

/// How many idiom visuals are blended together
const BLENDED_IDIOMS: usize = 3;

/// An idiom family found in the text
#[derive(Debug, Clone, Copy)]
pub struct IdiomHit {
    pub idiom: &'static Idiom,
    /// Character length of the phrase that matched. Longer phrases are more
    /// specific and rank first.
    pub priority: usize,
}

/// The combined reading of every idiom in a scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdiomReading {
    /// Family keys by priority, joined with ` + `
    pub key: String,
    pub visual: String,
    pub mood: String,
    pub lighting: String,
}

/// Every idiom family with a phrase in the text, in table order.
///
/// Within a family the first listed phrase that matches sets the priority.
pub fn find_idioms(text: &SceneText) -> Vec<IdiomHit> {
    IDIOMS
        .iter()
        .filter_map(|idiom| {
            text.first_found(idiom.patterns).map(|phrase| IdiomHit {
                idiom,
                priority: phrase.chars().count(),
            })
        })
        .collect()
}

/// Blend idiom hits into a single reading.
///
/// Hits are ranked by priority, ties keeping table order. With several hits the
/// top visuals are joined with "blending with" and the mood transitions from
/// the first to the second.
pub fn blend_idioms(hits: &[IdiomHit]) -> Option<IdiomReading> {
    let mut ranked = hits.to_vec();
    ranked.sort_by(|a, b| b.priority.cmp(&a.priority));
    let top = ranked.first()?.idiom;

    if ranked.len() == 1 {
        return Some(IdiomReading {
            key: top.key.to_string(),
            visual: top.visual.to_string(),
            mood: top.mood.to_string(),
            lighting: top.lighting.to_string(),
        });
    }

    let key = ranked
        .iter()
        .map(|h| h.idiom.key)
        .collect::<Vec<_>>()
        .join(" + ");
    let visual = ranked
        .iter()
        .take(BLENDED_IDIOMS)
        .map(|h| h.idiom.visual)
        .collect::<Vec<_>>()
        .join(", blending with ");
    let mood = format!("{} transitioning to {}", top.mood, ranked[1].idiom.mood);

    Some(IdiomReading {
        key,
        visual,
        mood,
        lighting: top.lighting.to_string(),
    })
}

/// Abstract concepts with at least one suffix-matched keyword, in table order
pub fn find_concepts(text: &SceneText) -> Vec<&'static Concept> {
    CONCEPTS
        .iter()
        .filter(|c| text.has_any_root(c.keywords))
        .collect()
}

/// The first opposing pair with both sides present
pub fn find_contrast(text: &SceneText) -> Option<&'static Contrast> {
    let side = |words: &str| words.split(' ').any(|w| text.contains(w));
    CONTRASTS
        .iter()
        .find(|c| side(c.first) && side(c.second))
}

pub fn find_color_metaphor(text: &SceneText) -> Option<&'static Cue> {
    first_cue(text, COLOR_METAPHORS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> SceneText<'_> {
        SceneText::new(s)
    }

    #[test]
    fn test_single_idiom_reading() {
        let hits = find_idioms(&text("Kalbi kırık kadın ağladı."));
        assert_eq!(hits.len(), 1);
        let reading = blend_idioms(&hits).unwrap();
        assert_eq!(reading.key, "heartbroken");
        assert_eq!(reading.mood, "devastating sadness");
        assert!(reading.lighting.contains("cold blue"));
    }

    #[test]
    fn test_longer_phrase_ranks_first() {
        // "kalbi kırık" and "küplere bin" are the same length, so table order holds.
        let hits = find_idioms(&text("Kalbi kırık adam küplere bindi."));
        assert_eq!(hits.len(), 2);
        let reading = blend_idioms(&hits).unwrap();
        assert_eq!(reading.key, "heartbroken + burning_anger");
        assert_eq!(reading.mood, "devastating sadness transitioning to explosive rage");
        assert!(reading.visual.contains(", blending with "));

        let hits = find_idioms(&text("Gözü döndü, kalbi kırık kaldı."));
        let reading = blend_idioms(&hits).unwrap();
        // "kalbi kırık" is longer than "gözü dön".
        assert!(reading.key.starts_with("heartbroken"));
    }

    #[test]
    fn test_no_idiom() {
        let hits = find_idioms(&text("Sabah erkenden kalktı."));
        assert!(hits.is_empty());
        assert_eq!(blend_idioms(&hits), None);
    }

    #[test]
    fn test_contrast_needs_both_sides() {
        let pair = find_contrast(&text("ışık ile karanlık arasında kaldı")).unwrap();
        assert_eq!(pair.first, "ışık");
        assert!(find_contrast(&text("ışık her yeri sardı")).is_none());
    }

    #[test]
    fn test_color_metaphor() {
        let cue = find_color_metaphor(&text("O kara gün hiç unutulmadı")).unwrap();
        assert_eq!(cue.id, "black");
        assert_eq!(cue.extra, "tragedy");
        assert!(find_color_metaphor(&text("mavi gökyüzü")).is_none());
    }
}
