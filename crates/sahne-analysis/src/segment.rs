//! Scene segmentation
//!
//! Input is first split on explicit scene-break markers. When that finds no
//! real break, consecutive paragraphs are grouped greedily until a group is
//! long enough or closes on a line of dialogue.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::matcher::cached_regex;

/// Inputs shorter than this are never split
pub const SHORT_INPUT_CHARS: usize = 50;
/// Fragments from a marker split must be longer than this
pub const MIN_BREAK_FRAGMENT_CHARS: usize = 30;
/// A paragraph group is flushed once it grows past this
pub const PARAGRAPH_GROUP_CHARS: usize = 300;
/// Scenes of this length or shorter are dropped
pub const MIN_SCENE_CHARS: usize = 10;

const SCENE_BREAK: &str =
    r"(?i)\n[-*=]{3,}\n|\n\[.+?\]\n|\nChapter\s*\d*|\nBölüm\s*\d*|\nSahne\s*\d*";
const PARAGRAPH_BREAK: &str = r"\n\n+";

static SCENE_BREAK_RE: OnceLock<Option<Regex>> = OnceLock::new();
static PARAGRAPH_BREAK_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split raw narrative text into scene-sized chunks in source order.
///
/// Blank input yields no scenes. Any other input yields at least one.
pub fn split_into_scenes(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    if char_len(trimmed) < SHORT_INPUT_CHARS {
        return vec![trimmed.to_string()];
    }

    let mut fragments = split_on_markers(text);
    if fragments.len() <= 1 {
        fragments = group_paragraphs(text);
        debug!(groups = fragments.len(), "no scene markers, grouped paragraphs");
    }

    let scenes: Vec<String> = fragments
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| char_len(f) > MIN_SCENE_CHARS)
        .collect();

    if scenes.is_empty() {
        vec![trimmed.to_string()]
    } else {
        scenes
    }
}

fn split_on_markers(text: &str) -> Vec<String> {
    let Some(re) = cached_regex(&SCENE_BREAK_RE, SCENE_BREAK) else {
        return vec![text.to_string()];
    };
    re.split(text)
        .filter(|f| char_len(f.trim()) > MIN_BREAK_FRAGMENT_CHARS)
        .map(str::to_string)
        .collect()
}

fn group_paragraphs(text: &str) -> Vec<String> {
    let paragraphs: Vec<&str> = match cached_regex(&PARAGRAPH_BREAK_RE, PARAGRAPH_BREAK) {
        Some(re) => re.split(text).collect(),
        None => text.split("\n\n").collect(),
    };

    let mut groups = Vec::new();
    let mut current = String::new();
    for para in paragraphs.into_iter().filter(|p| !p.trim().is_empty()) {
        if !current.is_empty() {
            current.push_str("\n\n");
        }
        current.push_str(para);
        if char_len(&current) > PARAGRAPH_GROUP_CHARS || para.ends_with('"') || para.ends_with('\'')
        {
            groups.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        groups.push(current);
    }
    groups
}
