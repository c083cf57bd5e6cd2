//! Scene records produced by the analysis engine

use serde::{Deserialize, Serialize};

/// Sentinel used when no object is detected
pub const UNSPECIFIED_OBJECT: &str = "unspecified";

/// Negative prompt attached to fallback scenes
pub const FALLBACK_NEGATIVE_PROMPT: &str =
    "blurry, low quality, bad anatomy, bad hands, text, error";

/// A user-declared character, prefixed to prompts when present
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub appearance: String,
    #[serde(default)]
    pub clothing: String,
    #[serde(default)]
    pub traits: String,
}

impl Character {
    /// Render as `Name (appearance, clothing[, traits])`
    pub fn describe(&self) -> String {
        let mut out = format!("{} ({}, {}", self.name, self.appearance, self.clothing);
        if !self.traits.is_empty() {
            out.push_str(", ");
            out.push_str(&self.traits);
        }
        out.push(')');
        out
    }
}

/// Resolved output dimensions for a scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionSpec {
    /// Tier id, e.g. "1080p"
    pub id: String,
    pub width: u32,
    pub height: u32,
}

/// Seeded picks from the camera, lighting and artist variety tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarietyPicks {
    pub camera: String,
    pub composition: String,
    pub depth: String,
    pub lighting: String,
    pub atmosphere: String,
    pub color_grade: String,
    pub artist: String,
    pub quality_tags: String,
    pub detail_enhancer: String,
}

/// Generation state owned by whatever submits jobs to an image backend.
/// The analysis engine creates it idle and never touches it again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationState {
    #[serde(default)]
    pub generating_faithful: bool,
    #[serde(default)]
    pub generating_creative: bool,
    #[serde(default)]
    pub faithful_job_id: Option<String>,
    #[serde(default)]
    pub creative_job_id: Option<String>,
    #[serde(default)]
    pub faithful_image_url: Option<String>,
    #[serde(default)]
    pub creative_image_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerationState {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

/// Which of the two prompts to send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptVariant {
    Faithful,
    Creative,
}

/// Request body for an external image generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub negative_prompt: String,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
}

/// One segmented unit of narrative with its derived attributes and prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: String,
    /// Ordinal title, `Sahne {n}`
    pub title: String,
    /// Source excerpt, truncated to 300 characters
    pub description: String,
    /// Detected objects in English, never empty
    pub objects: Vec<String>,
    pub mood: String,
    pub lighting: String,
    pub environment: String,
    pub important_details: Vec<String>,
    pub faithful_prompt: String,
    pub creative_prompt: String,
    pub negative_prompt: String,
    pub resolution: ResolutionSpec,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub scene_type: String,
    #[serde(default)]
    pub emotion_intensity: u8,
    #[serde(default)]
    pub action_intensity: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variety: Option<VarietyPicks>,
    #[serde(default, skip_serializing_if = "GenerationState::is_idle")]
    pub generation: GenerationState,
}

/// Maximum characters kept in [`Scene::description`]
pub const DESCRIPTION_LIMIT: usize = 300;

/// Truncate to [`DESCRIPTION_LIMIT`] characters, marking the cut with `...`
pub fn excerpt(text: &str) -> String {
    if text.chars().count() > DESCRIPTION_LIMIT {
        let head: String = text.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

pub fn scene_title(ordinal: usize) -> String {
    format!("Sahne {}", ordinal)
}

impl Scene {
    /// A minimal valid scene for text whose analysis failed.
    ///
    /// Both prompts carry the raw text so the scene can still be generated.
    pub fn fallback(
        id: String,
        ordinal: usize,
        text: &str,
        resolution: ResolutionSpec,
        note: &str,
    ) -> Self {
        let prompt = if text.trim().is_empty() {
            scene_title(ordinal)
        } else {
            text.to_string()
        };
        Self {
            id,
            title: scene_title(ordinal),
            description: excerpt(text),
            objects: vec![UNSPECIFIED_OBJECT.to_string()],
            mood: "Nötr".to_string(),
            lighting: "Doğal".to_string(),
            environment: "Belirsiz".to_string(),
            important_details: vec![note.to_string()],
            faithful_prompt: prompt.clone(),
            creative_prompt: prompt,
            negative_prompt: FALLBACK_NEGATIVE_PROMPT.to_string(),
            resolution,
            genre: "general".to_string(),
            scene_type: "general".to_string(),
            emotion_intensity: 5,
            action_intensity: 3,
            variety: None,
            generation: GenerationState::default(),
        }
    }

    pub fn prompt(&self, variant: PromptVariant) -> &str {
        match variant {
            PromptVariant::Faithful => &self.faithful_prompt,
            PromptVariant::Creative => &self.creative_prompt,
        }
    }

    /// Build the payload an image backend expects for this scene
    pub fn generation_request(&self, variant: PromptVariant, steps: u32) -> GenerationRequest {
        GenerationRequest {
            prompt: self.prompt(variant).to_string(),
            negative_prompt: self.negative_prompt.clone(),
            width: self.resolution.width,
            height: self.resolution.height,
            steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_hd() -> ResolutionSpec {
        ResolutionSpec {
            id: "1080p".to_string(),
            width: 1920,
            height: 1080,
        }
    }

    #[test]
    fn test_character_describe() {
        let mut c = Character {
            name: "Ayşe".to_string(),
            appearance: "long black hair".to_string(),
            clothing: "red coat".to_string(),
            ..Default::default()
        };
        assert_eq!(c.describe(), "Ayşe (long black hair, red coat)");
        c.traits = "brave".to_string();
        assert_eq!(c.describe(), "Ayşe (long black hair, red coat, brave)");
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        let long = "ş".repeat(310);
        let cut = excerpt(&long);
        assert!(cut.ends_with("..."));
        assert_eq!(cut.chars().count(), DESCRIPTION_LIMIT + 3);
        assert_eq!(excerpt("kısa"), "kısa");
    }

    #[test]
    fn test_fallback_scene_is_valid() {
        let scene = Scene::fallback(
            "s1".into(),
            2,
            "Bir metin.",
            full_hd(),
            "Analiz hatası oluştu",
        );
        assert_eq!(scene.title, "Sahne 2");
        assert_eq!(scene.objects, vec!["unspecified"]);
        assert_eq!(scene.faithful_prompt, "Bir metin.");
        assert_eq!(scene.creative_prompt, "Bir metin.");
        assert_eq!(scene.important_details, vec!["Analiz hatası oluştu"]);
        assert!(scene.generation.is_idle());
    }

    #[test]
    fn test_fallback_prompt_never_empty() {
        let scene = Scene::fallback("s".into(), 1, "   ", full_hd(), "x");
        assert_eq!(scene.faithful_prompt, "Sahne 1");
    }

    #[test]
    fn test_generation_request() {
        let scene = Scene::fallback("s".into(), 1, "deniz", full_hd(), "x");
        let req = scene.generation_request(PromptVariant::Creative, 30);
        assert_eq!(req.prompt, "deniz");
        assert_eq!((req.width, req.height, req.steps), (1920, 1080, 30));
        assert_eq!(req.negative_prompt, FALLBACK_NEGATIVE_PROMPT);
    }

    #[test]
    fn test_idle_generation_state_is_skipped() {
        let scene = Scene::fallback("s".into(), 1, "deniz", full_hd(), "x");
        let json = serde_json::to_string(&scene).unwrap();
        assert!(!json.contains("generation"));
        assert!(!json.contains("variety"));
    }
}
