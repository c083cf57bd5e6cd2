//! Sahne Analysis - Turkish narrative text to image-generation scenes
//!
//! Splits prose into scenes and reads each one with lexicon-driven detectors
//! (idioms, mood, light, setting, genre, action, senses...), then assembles
//! length-bounded faithful and creative prompts, a negative prompt and
//! output dimensions for every scene. Matching is purely lexical: substring
//! tests, a suffix-tolerant root match and a local negation veto.

pub mod analyze;
pub mod assemble;
pub mod config;
pub mod details;
pub mod detect;
pub mod lexicon;
pub mod matcher;
pub mod negative;
pub mod resolution;
pub mod safety;
pub mod segment;
pub mod variety;

pub use analyze::{analyze_scene, analyze_text, INPUT_FAILURE_NOTE, SCENE_FAILURE_NOTE};
pub use config::{AnalysisConfig, AnalysisLayer, SahneConfig, StyleConfig};
pub use detect::SceneFeatures;
pub use matcher::{contains_pattern, is_negated, matches_with_suffix, SceneText};
pub use negative::{build_negative_prompt, StyleFamily};
pub use resolution::{
    calculate_resolution_for_format, find_format, find_tier, FormatSpec, QualityClass,
    ResolutionTier, FORMATS, QUALITY_PRESETS, TIERS,
};
pub use safety::check_content_warnings;
pub use segment::split_into_scenes;
pub use variety::{VarietyInput, VarietyPicker};
