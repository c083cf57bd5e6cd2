//! Human-readable scene annotations
//!
//! Every detector that found something contributes one short, emoji-tagged
//! Turkish line. The lines explain the output to the user and never feed back
//! into the prompts.

use std::sync::OnceLock;

use regex::Regex;
use sahne_core::VarietyPicks;

use crate::detect::{SceneFeatures, NATURAL_POSE};
use crate::matcher::cached_regex;

/// Shown when the text has no quotes, numbers or named colors
pub const NO_DETAILS: &str = "Özel detay bulunamadı";

const MAX_QUOTES: usize = 3;
const MAX_NUMBERS: usize = 3;
/// Action intensity above this level gets its own line
const NOTABLE_ACTION_LEVEL: u8 = 3;

const NAMED_COLORS: &[&str] = &[
    "kırmızı", "mavi", "yeşil", "sarı", "siyah", "beyaz", "mor", "turuncu",
];

const QUOTE: &str = r#""[^"]+""#;
const NUMBER: &str = r"[0-9]+";
static QUOTE_RE: OnceLock<Option<Regex>> = OnceLock::new();
static NUMBER_RE: OnceLock<Option<Regex>> = OnceLock::new();

pub fn intent_label(id: &str) -> &str {
    match id {
        "desire" => "Arzu/İstek",
        "seeking" => "Arayış",
        "waiting" => "Bekleme",
        "remembering" => "Hatırlama",
        "deciding" => "Karar",
        "dreaming" => "Hayal",
        "struggling" => "Mücadele",
        other => other,
    }
}

pub fn conditional_label(id: &str) -> &str {
    match id {
        "regret_wish" => "Keşke/Pişmanlık",
        "as_if" => "Sanki/Benzetme",
        "conditional" => "Eğer/Koşul",
        "possibility" => "Belki/Olasılık",
        "impossible" => "İmkansız",
        other => other,
    }
}

pub fn temporal_label(id: &str) -> &str {
    match id {
        "sudden" => "Ani",
        "slow" => "Yavaş",
        "continuous" => "Sürekli",
        "sequence" => "Ardışık",
        "before" => "Geçmiş",
        "present" => "Şimdi",
        "future" => "Gelecek",
        other => other,
    }
}

pub fn interaction_label(id: &str) -> &str {
    match id {
        "dialogue" => "Diyalog",
        "physical_contact" => "Fiziksel Temas",
        "conflict" => "Çatışma",
        "chase" => "Takip",
        "together" => "Birlikte",
        "encounter" => "Karşılaşma",
        "farewell" => "Vedalaşma",
        "protection" => "Koruma",
        other => other,
    }
}

pub fn spatial_label(id: &str) -> &str {
    match id {
        "above" => "Yukarıda",
        "below" => "Aşağıda",
        "behind" => "Arkada",
        "in_front" => "Önde",
        "beside" => "Yanında",
        "inside" => "İçinde",
        "outside" => "Dışında",
        "around" => "Etrafında",
        other => other,
    }
}

pub fn genre_label(id: &str) -> &str {
    match id {
        "horror" => "Korku",
        "romance" => "Romantik",
        "sci-fi" => "Bilim Kurgu",
        "fantasy" => "Fantastik",
        "action" => "Aksiyon",
        "thriller" => "Gerilim",
        "drama" => "Dram",
        "historical" => "Tarihi",
        other => other,
    }
}

pub fn dialogue_tone_label(id: &str) -> &str {
    match id {
        "shouting" => "Bağırma",
        "whisper" => "Fısıltı",
        "crying" => "Ağlama",
        "laughing" => "Gülme",
        "threatening" => "Tehdit",
        "pleading" => "Yalvarma",
        other => other,
    }
}

pub fn relationship_label(id: &str) -> &str {
    match id {
        "family" => "Aile bağı",
        "romantic" => "Romantik",
        "enemies" => "Düşmanlık",
        "friends" => "Dostluk",
        "mentor" => "Mentor-öğrenci",
        other => other,
    }
}

pub fn period_label(id: &str) -> &str {
    match id {
        "ancient" => "Antik çağ",
        "medieval" => "Ortaçağ",
        "ottoman" => "Osmanlı dönemi",
        "victorian" => "Viktorya dönemi",
        "future" => "Gelecek",
        other => other,
    }
}

/// Quoted dialogue, numbers and named colors found in the raw text
pub fn extract_details(text: &str) -> Vec<String> {
    let mut details: Vec<String> = Vec::new();

    if let Some(re) = cached_regex(&QUOTE_RE, QUOTE) {
        details.extend(
            re.find_iter(text)
                .take(MAX_QUOTES)
                .map(|m| m.as_str().to_string()),
        );
    }

    if let Some(re) = cached_regex(&NUMBER_RE, NUMBER) {
        let numbers: Vec<&str> = re
            .find_iter(text)
            .take(MAX_NUMBERS)
            .map(|m| m.as_str())
            .collect();
        if !numbers.is_empty() {
            details.push(format!("Sayılar: {}", numbers.join(", ")));
        }
    }

    let lower = text.to_lowercase();
    let colors: Vec<&str> = NAMED_COLORS
        .iter()
        .copied()
        .filter(|c| lower.contains(c))
        .collect();
    if !colors.is_empty() {
        details.push(format!("Renkler: {}", colors.join(", ")));
    }

    if details.is_empty() {
        details.push(NO_DETAILS.to_string());
    }
    details
}

/// Annotation lines for one scene, in a fixed order. Perspective, scene type,
/// emotion intensity and camera are always present.
pub fn important_details(features: &SceneFeatures, camera: &str, text: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    if !features.idioms.is_empty() {
        let keys: Vec<String> = features
            .idioms
            .iter()
            .map(|h| format!("\"{}\"", h.idiom.key))
            .collect();
        lines.push(format!("🎭 Deyim/Mecaz: {} algılandı", keys.join(", ")));
    }
    if features.idioms.len() > 1 {
        lines.push(format!(
            "✨ Karma duygu: {} farklı deyim birleştirildi",
            features.idioms.len()
        ));
    }
    if features.contrast.is_some() {
        lines.push("⚖️ Karşıt kavramlar algılandı".to_string());
    }
    if let Some(color) = features.color_metaphor {
        lines.push(format!("🎨 Metaforik renk: {} ({})", color.id, color.extra));
    }
    if !features.concepts.is_empty() {
        let keys: Vec<&str> = features.concepts.iter().map(|c| c.key).collect();
        lines.push(format!("💭 Soyut kavramlar: {}", keys.join(", ")));
    }
    if let Some(intent) = features.intent {
        lines.push(format!(
            "🎯 Niyet: {} ({})",
            intent_label(intent.id),
            intent.extra
        ));
    }
    if let Some(cond) = features.conditional {
        lines.push(format!("🌀 Varsayımsal: {}", conditional_label(cond.id)));
    }
    if let Some(temporal) = features.temporal {
        lines.push(format!(
            "⏱️ Zamanlama: {} ({})",
            temporal_label(temporal.id),
            temporal.extra
        ));
    }
    if let Some(interaction) = features.interaction {
        lines.push(format!(
            "👥 Etkileşim: {}",
            interaction_label(interaction.id)
        ));
    }
    lines.push(format!("👁️ Perspektif: {}", features.perspective.label()));

    if !features.symbols.is_empty() {
        let symbols: Vec<String> = features
            .symbols
            .iter()
            .map(|s| format!("{} ({})", s.id, s.extra))
            .collect();
        lines.push(format!("🔮 Semboller: {}", symbols.join(", ")));
    }
    let sensory = &features.sensory;
    for (tag, found) in [
        ("🔊 Sesler", &sensory.sounds),
        ("👃 Kokular", &sensory.smells),
        ("✋ Dokular", &sensory.textures),
    ] {
        if !found.is_empty() {
            lines.push(format!("{}: {}", tag, found.join(", ")));
        }
    }
    if let Some(spatial) = features.spatial {
        lines.push(format!("📍 Mekan: {}", spatial_label(spatial.id)));
    }
    if let Some(multi) = &features.multi_event {
        lines.push(format!(
            "📚 Karmaşık anlatı: {} farklı olay algılandı",
            multi.events.len()
        ));
    }
    lines.push(format!("📽️ Sahne tipi: {}", features.scene_type.label()));
    lines.push(format!("🔥 Duygu yoğunluğu: {}/10", features.emotion.level));
    if !features.actions.is_empty() {
        lines.push(format!("⚡ Eylemler: {}", features.actions.join(", ")));
    }
    if let Some(weather) = features.weather {
        lines.push(format!("🌤️ Hava: {}", weather));
    }
    if features.pose != NATURAL_POSE {
        lines.push(format!("🧍 Poz: {}", features.pose));
    }
    if let Some(genre) = features.genre {
        lines.push(format!("🎬 Tür: {}", genre_label(genre.id)));
    }
    if let Some(tone) = features.dialogue_tone {
        lines.push(format!("🗣️ Diyalog tonu: {}", dialogue_tone_label(tone.id)));
    }
    if let Some(rel) = features.relationship {
        lines.push(format!("❤️ İlişki: {}", relationship_label(rel.id)));
    }
    let action = &features.action_intensity;
    if action.level > NOTABLE_ACTION_LEVEL {
        lines.push(format!(
            "💥 Aksiyon yoğunluğu: {} ({}/10)",
            action.tier.id(),
            action.level
        ));
    }
    if let Some(period) = features.period {
        lines.push(format!("🏛️ Dönem: {}", period_label(period.id)));
    }
    lines.push(format!("📷 Kamera: {}", camera));

    lines.extend(extract_details(text));
    lines
}

/// One line summarizing the seeded variety picks
pub fn variety_line(picks: &VarietyPicks) -> String {
    format!(
        "🎲 Çeşitlilik: {}; {}; {}",
        picks.camera, picks.lighting, picks.artist
    )
}
