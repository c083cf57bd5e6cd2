//! Symbolic objects and sensory vocabulary

use super::{Cue, Gloss};

/// `id` is the object, `extra` what it stands for.
pub static SYMBOLS: &[Cue] = &[
    Cue {
        id: "rose",
        patterns: &["gül", "güller"],
        visual: "symbolic red rose, romantic flower imagery",
        extra: "love, passion, beauty",
    },
    Cue {
        id: "thorns",
        patterns: &["dikenli", "diken"],
        visual: "sharp thorns, painful beauty contrast",
        extra: "pain, protection, sacrifice",
    },
    Cue {
        id: "butterfly",
        patterns: &["kelebek"],
        visual: "butterfly metamorphosis, delicate wings, transformation symbol",
        extra: "transformation, freedom, soul",
    },
    Cue {
        id: "bird",
        patterns: &["kuş", "serçe", "güvercin"],
        visual: "bird in flight, freedom wings, soaring spirit",
        extra: "freedom, spirit, hope",
    },
    Cue {
        id: "tree",
        patterns: &["ağaç", "meşe", "çınar"],
        visual: "majestic tree, roots and branches, tree of life",
        extra: "life, growth, ancestry",
    },
    Cue {
        id: "water",
        patterns: &["su", "nehir", "dere"],
        visual: "flowing water, emotional currents, cleansing stream",
        extra: "emotion, purification, flow",
    },
    Cue {
        id: "fire",
        patterns: &["ateş", "alev", "yangın"],
        visual: "flames dancing, passionate fire, transformative blaze",
        extra: "passion, destruction, rebirth",
    },
    Cue {
        id: "mirror",
        patterns: &["ayna"],
        visual: "mirror reflection, self-examination, truth revealed",
        extra: "self-reflection, truth, duality",
    },
    Cue {
        id: "door",
        patterns: &["kapı"],
        visual: "doorway to unknown, threshold moment, portal imagery",
        extra: "opportunity, transition, mystery",
    },
    Cue {
        id: "window",
        patterns: &["pencere"],
        visual: "window looking out, hopeful gaze, framed view",
        extra: "hope, perspective, longing",
    },
    Cue {
        id: "bridge",
        patterns: &["köprü"],
        visual: "bridge spanning gap, connection across divide, crossing threshold",
        extra: "connection, transition, overcoming",
    },
    Cue {
        id: "stairs",
        patterns: &["merdiven"],
        visual: "ascending staircase, upward journey, spiritual climb",
        extra: "progress, journey, spiritual ascent",
    },
    Cue {
        id: "clock",
        patterns: &["saat"],
        visual: "clock ticking, time pressure, mortality reminder",
        extra: "mortality, urgency, passing time",
    },
    Cue {
        id: "chain",
        patterns: &["zincir"],
        visual: "chains binding, connection links, restriction imagery",
        extra: "bondage, connection, restriction",
    },
    Cue {
        id: "key",
        patterns: &["anahtar"],
        visual: "golden key, unlocking secrets, solution symbol",
        extra: "access, secrets, solutions",
    },
    Cue {
        id: "mask",
        patterns: &["maske"],
        visual: "mask concealing, hidden face, performance persona",
        extra: "deception, hidden identity, performance",
    },
    Cue {
        id: "crown",
        patterns: &["taç", "kron"],
        visual: "royal crown, authority symbol, achievement crown",
        extra: "power, authority, achievement",
    },
    Cue {
        id: "sword",
        patterns: &["kılıç"],
        visual: "gleaming sword, justice blade, warrior courage",
        extra: "justice, courage, conflict",
    },
    Cue {
        id: "shield",
        patterns: &["kalkan"],
        visual: "protective shield, defensive stance, faith shield",
        extra: "protection, defense, faith",
    },
];

pub static SOUNDS: &[Gloss] = &[
    Gloss {
        patterns: &["sessiz", "sessizlik", "sükut"],
        text: "complete silence, soundless void",
    },
    Gloss {
        patterns: &["gürültü", "gürült", "patırtı"],
        text: "loud noise, chaotic sounds",
    },
    Gloss {
        patterns: &["fısıltı", "fısılda"],
        text: "soft whispers, quiet murmurs",
    },
    Gloss {
        patterns: &["çığlık", "bağır", "haykır"],
        text: "screaming, loud cry",
    },
    Gloss {
        patterns: &["müzik", "melodi", "şarkı"],
        text: "music playing, melodic atmosphere",
    },
    Gloss {
        patterns: &["rüzgar sesi", "rüzgar", "uğultu"],
        text: "wind howling, breeze sounds",
    },
    Gloss {
        patterns: &["yağmur sesi", "damla"],
        text: "rain drops, water sounds",
    },
    Gloss {
        patterns: &["gök gürültüsü", "şimşek"],
        text: "thunder rumbling, storm sounds",
    },
    Gloss {
        patterns: &["kuş sesi", "cıvıltı", "ötüş"],
        text: "birdsong, chirping",
    },
    Gloss {
        patterns: &["ayak sesi", "adım"],
        text: "footsteps echoing",
    },
];

pub static SMELLS: &[Gloss] = &[
    Gloss {
        patterns: &["çiçek kokusu", "gül kokusu", "parfüm"],
        text: "floral fragrance, sweet scent",
    },
    Gloss {
        patterns: &["yemek kokusu", "lezzetli koku"],
        text: "delicious food aroma",
    },
    Gloss {
        patterns: &["duman kokusu", "yanık"],
        text: "smoke smell, burning scent",
    },
    Gloss {
        patterns: &["yağmur kokusu", "toprak kokusu", "ıslak"],
        text: "petrichor, rain on earth",
    },
    Gloss {
        patterns: &["deniz kokusu", "tuzlu"],
        text: "ocean salt, sea breeze",
    },
    Gloss {
        patterns: &["orman", "çam", "ağaç kokusu"],
        text: "forest pine, woody scent",
    },
    Gloss {
        patterns: &["pis koku", "leş", "çürük"],
        text: "foul stench, decay",
    },
];

pub static TEXTURES: &[Gloss] = &[
    Gloss {
        patterns: &["yumuşak", "kadife", "ipek"],
        text: "soft silky texture",
    },
    Gloss {
        patterns: &["sert", "kaba", "pürüzlü"],
        text: "rough hard texture",
    },
    Gloss {
        patterns: &["ıslak", "nemli", "kaygan"],
        text: "wet slippery surface",
    },
    Gloss {
        patterns: &["kuru", "çatlamış", "kurak"],
        text: "dry cracked texture",
    },
    Gloss {
        patterns: &["sıcak", "ılık", "yakıcı"],
        text: "warm hot surface",
    },
    Gloss {
        patterns: &["soğuk", "buz gibi", "dondurucu"],
        text: "cold icy touch",
    },
    Gloss {
        patterns: &["tüylü", "kürk"],
        text: "furry soft fur",
    },
    Gloss {
        patterns: &["metalik", "metal"],
        text: "cold metallic surface",
    },
];

pub static TASTES: &[Gloss] = &[
    Gloss {
        patterns: &["tatlı", "şeker"],
        text: "sweet flavor",
    },
    Gloss {
        patterns: &["acı", "ekşi"],
        text: "bitter sour taste",
    },
    Gloss {
        patterns: &["tuzlu"],
        text: "salty taste",
    },
    Gloss {
        patterns: &["baharatlı", "acılı"],
        text: "spicy hot flavor",
    },
];
