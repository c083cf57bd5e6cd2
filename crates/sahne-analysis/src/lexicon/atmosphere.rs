//! Mood, light, place and weather tables

use super::{Environment, Gloss, Labeled, Mood};

/// Scored in table order; the first mood to reach the top score keeps it.
pub static MOODS: &[Mood] = &[
    Mood {
        label: "Huzurlu",
        keywords: &["sakin", "huzur", "sessiz", "dingin", "rahat", "ferah"],
        intensity: &["çok sakin", "son derece huzurlu"],
        english: "peaceful, serene, tranquil atmosphere",
    },
    Mood {
        label: "Gerilimli",
        keywords: &["korku", "endişe", "tedirgin", "gölge", "tehlike", "gerilim", "kabus"],
        intensity: &["çok korkutucu", "dehşet verici"],
        english: "tense, suspenseful, ominous atmosphere",
    },
    Mood {
        label: "Mutlu",
        keywords: &["mutlu", "neşe", "gülümse", "sevinç", "kahkaha", "keyif", "eğlence"],
        intensity: &["aşırı mutlu", "coşkulu"],
        english: "joyful, cheerful, bright happy mood",
    },
    Mood {
        label: "Hüzünlü",
        keywords: &["üzgün", "gözyaşı", "ağla", "keder", "yalnız", "hüzün", "acı", "kayıp"],
        intensity: &["derin hüzün", "yıkılmış"],
        english: "melancholic, sorrowful, emotional sadness",
    },
    Mood {
        label: "Romantik",
        keywords: &["aşk", "sevgi", "kalp", "öpücük", "sarıl", "sevgili", "tutku", "arzu"],
        intensity: &["tutkulu", "ateşli"],
        english: "romantic, passionate, intimate love",
    },
    Mood {
        label: "Gizemli",
        keywords: &["gizem", "sır", "bilinmeyen", "tuhaf", "garip", "esrar", "karanlık"],
        intensity: &["derin gizem", "anlaşılmaz"],
        english: "mysterious, enigmatic, secretive atmosphere",
    },
    Mood {
        label: "Epik",
        keywords: &["savaş", "kahraman", "zafer", "mücadele", "güç", "ordu", "kılıç", "destan"],
        intensity: &["destansı", "efsanevi"],
        english: "epic, heroic, grand battle atmosphere",
    },
    Mood {
        label: "Nostaljik",
        keywords: &["geçmiş", "anı", "hatıra", "eski", "çocukluk", "zamanda"],
        intensity: &["derin nostalji"],
        english: "nostalgic, vintage, memory-like quality",
    },
    Mood {
        label: "Fantastik",
        keywords: &["büyü", "sihir", "ejderha", "peri", "fantezi", "mitoloji", "efsane"],
        intensity: &["saf fantezi"],
        english: "magical fantasy, mythical, enchanted",
    },
];

/// Times of day, checked in order: dawn, morning, noon, afternoon, sunset, evening, night.
pub static TIMES_OF_DAY: &[Labeled] = &[
    Labeled {
        label: "Şafak",
        patterns: &["şafak", "tan", "gün ağar"],
        english: "dawn, early morning light, pink and orange sky",
    },
    Labeled {
        label: "Sabah",
        patterns: &["sabah", "erken", "kahvaltı"],
        english: "morning light, soft golden sun",
    },
    Labeled {
        label: "Öğle",
        patterns: &["öğle", "öğlen", "gün ortası"],
        english: "midday sun, bright overhead lighting",
    },
    Labeled {
        label: "İkindi",
        patterns: &["öğleden sonra", "ikindi"],
        english: "afternoon light, warm tones",
    },
    Labeled {
        label: "Gün batımı",
        patterns: &["gün batımı", "akşam üzeri", "batarken", "alacakaranlık"],
        english: "golden hour, sunset, dramatic orange and purple sky",
    },
    Labeled {
        label: "Akşam",
        patterns: &["akşam", "karanlık çök"],
        english: "evening atmosphere, dim ambient light",
    },
    Labeled {
        label: "Gece",
        patterns: &["gece", "geceyarısı", "karanlık", "yıldız", "ay ışığı"],
        english: "night scene, moonlight, starry sky, dark atmosphere",
    },
];

pub static LIGHTING_STYLES: &[Labeled] = &[
    Labeled {
        label: "Dramatik",
        patterns: &["gölge", "ışık huzmesi", "spot", "kontrast", "siluet"],
        english: "dramatic lighting, high contrast, chiaroscuro",
    },
    Labeled {
        label: "Yumuşak",
        patterns: &["lamba", "mum", "şömine", "avize", "loş"],
        english: "soft ambient lighting, warm glow",
    },
    Labeled {
        label: "Neon",
        patterns: &["neon", "floresan", "parlak ışık"],
        english: "neon lights, cyberpunk lighting, vibrant colors",
    },
    Labeled {
        label: "Doğal",
        patterns: &["gün ışığı", "pencereden", "doğal ışık"],
        english: "natural lighting, soft shadows",
    },
];

/// Score is matched keywords times priority.
pub static ENVIRONMENTS: &[Environment] = &[
    Environment {
        label: "Deniz kenarı",
        keywords: &["deniz", "kumsal", "dalga", "sahil", "okyanus", "plaj"],
        priority: 3,
        english: "beach, ocean waves, sandy shore, coastal scenery",
    },
    Environment {
        label: "Dağ",
        keywords: &["dağ", "zirve", "yamaç", "kayalık", "uçurum"],
        priority: 3,
        english: "mountain landscape, rocky peaks, alpine scenery",
    },
    Environment {
        label: "Orman",
        keywords: &["orman", "ağaçlar", "yaprak", "çalılık", "koruluk"],
        priority: 2,
        english: "dense forest, tall trees, lush vegetation",
    },
    Environment {
        label: "Çöl",
        keywords: &["çöl", "kum tepesi", "vaha", "deve"],
        priority: 3,
        english: "desert landscape, sand dunes, arid",
    },
    Environment {
        label: "Kar",
        keywords: &["kar", "buz", "kış", "soğuk", "don"],
        priority: 2,
        english: "snowy landscape, winter scenery, frozen",
    },
    Environment {
        label: "Şehir",
        keywords: &["şehir", "sokak", "cadde", "trafik", "kaldırım", "bina", "gökdelen"],
        priority: 2,
        english: "urban city, streets, buildings, metropolitan",
    },
    Environment {
        label: "Köy",
        keywords: &["köy", "kır", "tarla", "çiftlik", "ahır"],
        priority: 2,
        english: "rural village, countryside, farmland",
    },
    Environment {
        label: "Saray",
        keywords: &["saray", "kale", "taht", "krallık", "şato"],
        priority: 3,
        english: "grand palace, castle interior, royal architecture",
    },
    Environment {
        label: "Mağara",
        keywords: &["mağara", "yeraltı", "tünel", "karanlık delik"],
        priority: 3,
        english: "dark cave, underground cavern, stalactites",
    },
    Environment {
        label: "Uzay",
        keywords: &["uzay", "galaksi", "yıldız", "gezegen", "nebula"],
        priority: 3,
        english: "outer space, galaxy, stars, cosmic scenery",
    },
    Environment {
        label: "Su altı",
        keywords: &["su altı", "denizaltı", "mercan", "balık sürüsü"],
        priority: 3,
        english: "underwater scene, coral reef, marine life",
    },
    Environment {
        label: "İç mekan",
        keywords: &["oda", "salon", "koridor", "mutfak", "yatak", "içeri"],
        priority: 1,
        english: "interior room, indoor setting",
    },
];

pub static WEATHER: &[Gloss] = &[
    Gloss {
        patterns: &["yağmur", "yağ", "ısla", "sağanak"],
        text: "rainy weather, raindrops",
    },
    Gloss {
        patterns: &["kar", "tipi", "beyaz örtü", "buz"],
        text: "snowy weather, snowflakes falling",
    },
    Gloss {
        patterns: &["güneş", "sıcak", "parlak", "açık hava"],
        text: "bright sunny day, clear sky",
    },
    Gloss {
        patterns: &["bulut", "kapalı", "gri gökyüzü"],
        text: "overcast cloudy sky",
    },
    Gloss {
        patterns: &["sis", "pus", "buğu", "duman"],
        text: "thick fog, misty atmosphere",
    },
    Gloss {
        patterns: &["fırtına", "şimşek", "yıldırım", "gök gürültü"],
        text: "dramatic storm, lightning",
    },
    Gloss {
        patterns: &["rüzgar", "esinti", "dalga"],
        text: "windy, hair blowing",
    },
];

pub static POSES: &[Gloss] = &[
    Gloss {
        patterns: &["kendinden emin", "dik dur", "kararlı"],
        text: "standing confidently, hands on hips",
    },
    Gloss {
        patterns: &["rahat", "gevşe", "keyifli otur"],
        text: "sitting relaxed, casual pose",
    },
    Gloss {
        patterns: &["yaslan", "duvara", "sırtını day"],
        text: "leaning against wall, cool pose",
    },
    Gloss {
        patterns: &["çömel", "eğil", "saklan"],
        text: "crouching down, defensive stance",
    },
    Gloss {
        patterns: &["kollar", "bağla", "ciddi"],
        text: "arms crossed, stern expression",
    },
    Gloss {
        patterns: &["uzan", "elini uzat", "dokun"],
        text: "reaching out, extending hand",
    },
    Gloss {
        patterns: &["arkasına bak", "omzunun üzerin"],
        text: "looking over shoulder, mysterious",
    },
    Gloss {
        patterns: &["profil", "yandan", "düşünceli"],
        text: "profile view, contemplative",
    },
];
