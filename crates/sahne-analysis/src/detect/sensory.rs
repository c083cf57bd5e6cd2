//! Symbolic objects and non-visual senses

use crate::lexicon::{Cue, Gloss, SMELLS, SOUNDS, SYMBOLS, TASTES, TEXTURES};
use crate::matcher::SceneText;

use super::all_glosses;

/// Most symbols reported for one scene
pub const MAX_SYMBOLS: usize = 5;

/// Symbolic objects in table order
pub fn find_symbols(text: &SceneText) -> Vec<&'static Cue> {
    SYMBOLS
        .iter()
        .filter(|s| text.contains_any(s.patterns))
        .take(MAX_SYMBOLS)
        .collect()
}

/// Sounds, smells, textures and tastes mentioned in a scene
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SensoryDetails {
    pub sounds: Vec<&'static str>,
    pub smells: Vec<&'static str>,
    pub textures: Vec<&'static str>,
    pub tastes: Vec<&'static str>,
}

impl SensoryDetails {
    pub fn detect(text: &SceneText) -> Self {
        let texts = |table: &'static [Gloss]| -> Vec<&'static str> {
            all_glosses(text, table).map(|g| g.text).collect()
        };
        Self {
            sounds: texts(SOUNDS),
            smells: texts(SMELLS),
            textures: texts(TEXTURES),
            tastes: texts(TASTES),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
            && self.smells.is_empty()
            && self.textures.is_empty()
            && self.tastes.is_empty()
    }

    /// Visual hint built from sounds, smells and textures. Tastes have no
    /// visual rendering.
    pub fn visual(&self) -> String {
        let mut visual = String::new();
        if !self.sounds.is_empty() {
            visual = format!("auditory atmosphere: {}", self.sounds.join(", "));
        }
        if !self.smells.is_empty() {
            let prefix = if visual.is_empty() {
                "atmospheric scent"
            } else {
                ", olfactory hint"
            };
            visual.push_str(&format!("{}: {}", prefix, self.smells.join(", ")));
        }
        if !self.textures.is_empty() {
            let prefix = if visual.is_empty() {
                "surface detail"
            } else {
                ", tactile quality"
            };
            visual.push_str(&format!("{}: {}", prefix, self.textures.join(", ")));
        }
        visual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_capped() {
        let text = SceneText::new("gül, kelebek, kuş, ağaç, nehir, ateş, ayna ve kapı");
        let symbols = find_symbols(&text);
        assert_eq!(symbols.len(), MAX_SYMBOLS);
        assert_eq!(symbols[0].id, "rose");
    }

    #[test]
    fn test_sensory_visual_joiners() {
        let text = SceneText::new("Uzaktan müzik geliyordu, havada yanık kokusu ve kadife perdeler");
        let details = SensoryDetails::detect(&text);
        assert_eq!(details.sounds, vec!["music playing, melodic atmosphere"]);
        let visual = details.visual();
        assert!(visual.starts_with("auditory atmosphere: music playing"));
        assert!(visual.contains(", olfactory hint: smoke smell, burning scent"));
        assert!(visual.contains(", tactile quality: soft silky texture"));
    }

    #[test]
    fn test_smell_without_sound_leads() {
        let details = SensoryDetails::detect(&SceneText::new("tuzlu bir esinti"));
        assert!(details.visual().starts_with("atmospheric scent: ocean salt"));
        assert_eq!(details.tastes, vec!["salty taste"]);
    }

    #[test]
    fn test_nothing_sensed() {
        let details = SensoryDetails::detect(&SceneText::new("Bir gün"));
        assert!(details.is_empty());
        assert_eq!(details.visual(), "");
    }
}
