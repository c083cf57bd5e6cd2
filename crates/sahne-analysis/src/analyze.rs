//! Top-level analysis entry points
//!
//! Text is segmented, each segment runs through the detectors and the
//! assembler, and a failing segment degrades to a fallback scene instead of
//! taking the batch down with it.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;
use sahne_core::{Character, Scene, StyleSettings};
use tracing::{info, warn};

use crate::assemble::{build_scene, scene_id};
use crate::config::AnalysisConfig;
use crate::detect::SceneFeatures;
use crate::matcher::SceneText;
use crate::resolution::calculate_resolution_for_format;
use crate::safety::check_content_warnings;
use crate::segment::split_into_scenes;

/// Note attached to a scene whose analysis failed
pub const SCENE_FAILURE_NOTE: &str = "Analiz hatası oluştu";
/// Note attached to the single scene emitted when segmentation itself fails
pub const INPUT_FAILURE_NOTE: &str = "Analiz sırasında hata oluştu, lütfen tekrar deneyin";

/// Analyze one segment into a scene. Never fails: a panic inside the
/// detectors yields [`Scene::fallback`].
pub fn analyze_scene(
    text: &str,
    ordinal: usize,
    settings: &StyleSettings,
    characters: &[Character],
    config: &AnalysisConfig,
) -> Scene {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let features = SceneFeatures::detect(&SceneText::new(text));
        build_scene(text, ordinal, &features, settings, characters, config)
    }));

    match result {
        Ok(scene) => scene,
        Err(_) => {
            warn!(ordinal, "Scene analysis failed, using fallback scene");
            Scene::fallback(
                scene_id(text, ordinal),
                ordinal,
                text,
                calculate_resolution_for_format(&settings.resolution, &settings.format),
                SCENE_FAILURE_NOTE,
            )
        }
    }
}

/// The whole input as one fallback scene
fn whole_input_fallback(text: &str, settings: &StyleSettings) -> Scene {
    let trimmed = text.trim();
    Scene::fallback(
        scene_id(trimmed, 1),
        1,
        trimmed,
        calculate_resolution_for_format(&settings.resolution, &settings.format),
        INPUT_FAILURE_NOTE,
    )
}

/// Segment `text` and analyze every segment, keeping source order.
///
/// Blank input yields no scenes. Otherwise there is exactly one scene per
/// segment returned by [`split_into_scenes`].
pub fn analyze_text(
    text: &str,
    settings: &StyleSettings,
    characters: &[Character],
    config: &AnalysisConfig,
) -> Vec<Scene> {
    if let Some(warning) = check_content_warnings(text) {
        warn!("{}", warning);
    }

    let segments = match catch_unwind(|| split_into_scenes(text)) {
        Ok(segments) => segments,
        Err(_) => {
            warn!("Segmentation failed, analyzing the whole input as one scene");
            return vec![whole_input_fallback(text, settings)];
        }
    };
    info!(
        segments = segments.len(),
        parallel = config.parallel,
        "Analyzing narrative text"
    );

    let analyze = |(i, segment): (usize, &String)| {
        analyze_scene(segment, i + 1, settings, characters, config)
    };
    if config.parallel {
        segments.par_iter().enumerate().map(analyze).collect()
    } else {
        segments.iter().enumerate().map(analyze).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::negative::term_count;

    fn defaults() -> (StyleSettings, AnalysisConfig) {
        (StyleSettings::default(), AnalysisConfig::default())
    }

    fn long_story() -> String {
        [
            "Sabah güneşi köyün üzerine doğarken yaşlı kadın bahçede çiçekleri suluyordu.",
            "Öğleden sonra gökyüzü karardı ve şiddetli bir fırtına ormanın üzerinden geçti.",
            "Gece olduğunda genç asker kalenin surlarında nöbet tutuyor, uzaktaki ateşlere bakıyordu.",
        ]
        .join("\n---\n")
    }

    #[test]
    fn test_beach_walk_scene() {
        let (settings, config) = defaults();
        let scenes = analyze_text(
            "Güneş batarken, yaşlı adam sahilde yürüyordu.",
            &settings,
            &[],
            &config,
        );
        assert_eq!(scenes.len(), 1);
        let scene = &scenes[0];
        assert!(scene.environment.starts_with("Deniz kenarı"));
        assert!(scene.faithful_prompt.contains("walking"));
        assert!(scene.faithful_prompt.contains("beach"));
        assert!(!scene.objects.is_empty());
        assert_eq!(scene.title, "Sahne 1");
    }

    #[test]
    fn test_heartbroken_scene() {
        let (settings, config) = defaults();
        let scene = analyze_scene("Kalbi kırık kadın ağladı.", 1, &settings, &[], &config);
        assert!(scene.mood.contains("heartbroken"));
        assert!(scene.mood.contains("devastating sadness"));
        assert!(scene.lighting.contains("cold blue"));
    }

    #[test]
    fn test_negated_happiness_is_not_happy() {
        let (settings, config) = defaults();
        let scene = analyze_scene(
            "Kadın bugün hiç mutlu değil, pencereden dışarı bakıyor.",
            1,
            &settings,
            &[],
            &config,
        );
        assert!(!scene.mood.starts_with("Mutlu"));
    }

    #[test]
    fn test_blank_input_yields_no_scenes() {
        let (settings, config) = defaults();
        assert!(analyze_text("", &settings, &[], &config).is_empty());
        assert!(analyze_text("  \n\t ", &settings, &[], &config).is_empty());
    }

    #[derive(Clone, Default)]
    struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_content_warning_logged_once() {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let settings = StyleSettings::default();
        let config = AnalysisConfig {
            parallel: false,
            ..AnalysisConfig::default()
        };
        tracing::subscriber::with_default(subscriber, || {
            analyze_text("Adam silahını çekti ve kan aktı.", &settings, &[], &config);
        });
        let logged = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
        assert_eq!(logged.matches("hassas içerik").count(), 1);
    }

    #[test]
    fn test_whole_input_fallback() {
        let scene = whole_input_fallback("  Bir şeyler oldu.  ", &StyleSettings::default());
        assert_eq!(scene.faithful_prompt, "Bir şeyler oldu.");
        assert_eq!(scene.important_details, vec![INPUT_FAILURE_NOTE.to_string()]);
        assert_eq!(scene.objects, vec!["unspecified".to_string()]);
    }

    #[test]
    fn test_scene_count_matches_segments() {
        let (settings, config) = defaults();
        let story = long_story();
        let segments = split_into_scenes(&story);
        let scenes = analyze_text(&story, &settings, &[], &config);
        assert_eq!(segments.len(), 3);
        assert_eq!(scenes.len(), segments.len());
        for (i, scene) in scenes.iter().enumerate() {
            assert_eq!(scene.title, format!("Sahne {}", i + 1));
        }
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let settings = StyleSettings::default();
        let parallel = AnalysisConfig::default();
        let sequential = AnalysisConfig {
            parallel: false,
            ..AnalysisConfig::default()
        };
        let story = long_story();
        assert_eq!(
            analyze_text(&story, &settings, &[], &parallel),
            analyze_text(&story, &settings, &[], &sequential)
        );
    }

    #[test]
    fn test_output_is_reproducible() {
        let (settings, config) = defaults();
        let first = analyze_scene("Ormanda bir kurt uludu.", 1, &settings, &[], &config);
        let second = analyze_scene("Ormanda bir kurt uludu.", 1, &settings, &[], &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_prompt_respects_configured_max() {
        let settings = StyleSettings::default();
        let config = AnalysisConfig {
            max_negative_terms: 12,
            ..AnalysisConfig::default()
        };
        let scene = analyze_scene(
            "Vampir karanlık şatoda kan içti, adam korkuyla kaçtı.",
            1,
            &settings,
            &[],
            &config,
        );
        assert!(term_count(&scene.negative_prompt) <= 12);
    }

    #[test]
    fn test_resolution_follows_settings() {
        let settings = StyleSettings {
            format: "9:16".to_string(),
            resolution: "1080p".to_string(),
            ..StyleSettings::default()
        };
        let scene = analyze_scene(
            "Kuş gökyüzünde uçuyordu.",
            1,
            &settings,
            &[],
            &AnalysisConfig::default(),
        );
        assert_eq!(scene.resolution.height, 1080);
        assert_eq!(scene.resolution.width, 608);
    }
}
