//! Sahne Core - Foundational types for the Sahne scene engine
//!
//! This crate provides the types shared by the analysis engine and its callers:
//! - `Scene`, `Character`, `ResolutionSpec` - the engine's input and output records
//! - `StyleSettings` with the style, palette and composition catalogs
//! - `ContentHash` - SHA-256 hashing for stable scene ids and seeds
//! - Error types and Result alias

mod error;
mod hash;
mod scene;
mod style;

pub use error::{Result, SahneError};
pub use hash::ContentHash;
pub use scene::{
    excerpt, scene_title, Character, GenerationRequest, GenerationState, PromptVariant,
    ResolutionSpec, Scene, VarietyPicks, DESCRIPTION_LIMIT, FALLBACK_NEGATIVE_PROMPT,
    UNSPECIFIED_OBJECT,
};
pub use style::{
    default_format, default_resolution, first_part, CompositionId, PaletteId, StyleId,
    StyleSettings,
};
