//! Static lexicon tables
//!
//! Every table is an ordered slice. Detectors walk them front to back, so
//! table order is the tie-break wherever two entries score the same.

mod atmosphere;
mod figurative;
mod narrative;
mod sensory;
mod vocabulary;

pub use atmosphere::{ENVIRONMENTS, LIGHTING_STYLES, MOODS, POSES, TIMES_OF_DAY, WEATHER};
pub use figurative::{COLOR_METAPHORS, CONCEPTS, CONTRASTS, IDIOMS};
pub use narrative::{
    CONDITIONALS, DIALOGUE_TONES, GENRES, INTENTS, INTERACTIONS, MULTI_EVENT_INDICATORS, PERIODS,
    RELATIONSHIPS, SPATIAL, TEMPORALS,
};
pub use sensory::{SMELLS, SOUNDS, SYMBOLS, TASTES, TEXTURES};
pub use vocabulary::{ACTIONS, CORE_ACTIONS, CORE_OBJECTS, OBJECT_ROOTS, SUBJECTS, TRANSLATIONS};

/// A figurative phrase family and the literal scene it stands for
#[derive(Debug)]
pub struct Idiom {
    pub key: &'static str,
    pub patterns: &'static [&'static str],
    pub visual: &'static str,
    pub mood: &'static str,
    pub lighting: &'static str,
}

#[derive(Debug)]
pub struct Concept {
    pub key: &'static str,
    pub keywords: &'static [&'static str],
    pub visual: &'static str,
}

/// Two opposing words that, found together, suggest a duality composition
#[derive(Debug)]
pub struct Contrast {
    pub first: &'static str,
    pub second: &'static str,
    pub visual: &'static str,
}

/// A category with a visual fragment and one extra payload whose meaning
/// depends on the table (mood, pacing, pose, props...).
#[derive(Debug)]
pub struct Cue {
    pub id: &'static str,
    pub patterns: &'static [&'static str],
    pub visual: &'static str,
    pub extra: &'static str,
}

/// Phrases that map to a single English gloss
#[derive(Debug)]
pub struct Gloss {
    pub patterns: &'static [&'static str],
    pub text: &'static str,
}

/// A Turkish-labelled category with an English rendering
#[derive(Debug)]
pub struct Labeled {
    pub label: &'static str,
    pub patterns: &'static [&'static str],
    pub english: &'static str,
}

#[derive(Debug)]
pub struct Mood {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    /// Phrases worth two points that mark the mood as intense
    pub intensity: &'static [&'static str],
    pub english: &'static str,
}

#[derive(Debug)]
pub struct Environment {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub priority: u32,
    pub english: &'static str,
}

#[derive(Debug)]
pub struct Genre {
    pub id: &'static str,
    pub patterns: &'static [&'static str],
    pub visual: &'static str,
    pub atmosphere: &'static str,
    pub color_scheme: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lowercase(patterns: &[&str]) -> bool {
        patterns.iter().all(|p| p.to_lowercase() == *p && !p.is_empty())
    }

    #[test]
    fn test_table_sizes() {
        assert_eq!(IDIOMS.len(), 36);
        assert_eq!(CONCEPTS.len(), 49);
        assert_eq!(MOODS.len(), 9);
        assert_eq!(ENVIRONMENTS.len(), 12);
        assert_eq!(GENRES.len(), 8);
        assert_eq!(TIMES_OF_DAY.len(), 7);
    }

    #[test]
    fn test_patterns_are_lowercase() {
        // Detectors lowercase the text once and compare directly.
        assert!(IDIOMS.iter().all(|i| lowercase(i.patterns)));
        assert!(CONCEPTS.iter().all(|c| lowercase(c.keywords)));
        assert!(MOODS.iter().all(|m| lowercase(m.keywords) && lowercase(m.intensity)));
        assert!(ENVIRONMENTS.iter().all(|e| lowercase(e.keywords)));
        assert!(GENRES.iter().all(|g| lowercase(g.patterns)));
        assert!(SUBJECTS.iter().all(|(tr, _)| tr.to_lowercase() == *tr));
    }

    #[test]
    fn test_table_order_is_stable() {
        assert_eq!(MOODS[0].label, "Huzurlu");
        assert_eq!(MOODS[8].label, "Fantastik");
        assert_eq!(ENVIRONMENTS[0].label, "Deniz kenarı");
        assert_eq!(ENVIRONMENTS[11].label, "İç mekan");
        assert_eq!(TIMES_OF_DAY[0].label, "Şafak");
        assert_eq!(IDIOMS[0].key, "heartbroken");
    }

    #[test]
    fn test_object_roots_have_translations() {
        let missing: Vec<&str> = OBJECT_ROOTS
            .iter()
            .copied()
            .filter(|root| !TRANSLATIONS.iter().any(|(tr, _)| tr == root))
            .collect();
        // Roots without a glossary entry are reported as-is.
        assert!(missing.contains(&"gemi"));
        assert!(!missing.contains(&"deniz"));
    }
}
