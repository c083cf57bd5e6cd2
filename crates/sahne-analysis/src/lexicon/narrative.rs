//! Narrative structure cues: intent, conditionals, timing, interaction, tone, relationships

use super::{Cue, Genre};

/// `extra` is the mood phrase.
pub static INTENTS: &[Cue] = &[
    Cue {
        id: "desire",
        patterns: &[
            "istiyorum", "istiyor", "istedim", "ister", "arzul", "dilek", "temenni", "umut ed",
        ],
        visual: "yearning expression, reaching hands, hopeful gaze toward goal, desire symbolism",
        extra: "longing",
    },
    Cue {
        id: "avoidance",
        patterns: &["istemiy", "korkuyor", "kaçın", "uzak dur", "reddet", "çekin"],
        visual: "backing away, defensive posture, fear in eyes, protective gesture",
        extra: "fearful avoidance",
    },
    Cue {
        id: "seeking",
        patterns: &["arıyor", "arıyorum", "aradım", "bul", "keşfet", "merak", "sorgula"],
        visual: "searching gaze, exploring posture, discovery moment, curiosity expression",
        extra: "curious exploration",
    },
    Cue {
        id: "waiting",
        patterns: &["bekliyor", "bekliyorum", "sabır", "süre", "umut"],
        visual: "patient waiting posture, looking at horizon, time passing imagery",
        extra: "patient anticipation",
    },
    Cue {
        id: "remembering",
        patterns: &["hatırl", "anımsa", "geçmiş", "eskiden", "zamanlar"],
        visual: "distant gaze, sepia memory overlay, past scenes fading in background",
        extra: "nostalgic remembrance",
    },
    Cue {
        id: "deciding",
        patterns: &["karar ver", "seçmek", "tercih", "iki yol", "ya da"],
        visual: "crossroads imagery, forked path, weighing options, contemplative stance",
        extra: "decisive moment",
    },
    Cue {
        id: "dreaming",
        patterns: &["hayal", "düşle", "fantezi", "rüya gör", "imgele"],
        visual: "dream bubbles, fantasy clouds, surreal floating elements, soft focus",
        extra: "dreamy fantasy",
    },
    Cue {
        id: "struggling",
        patterns: &["mücadele", "çabal", "uğraş", "savaş", "direniş", "hayatta kal"],
        visual: "struggling against obstacles, determination in face, fighting spirit",
        extra: "determined struggle",
    },
];

/// `extra` is the atmosphere phrase.
pub static CONDITIONALS: &[Cue] = &[
    Cue {
        id: "regret_wish",
        patterns: &["keşke", "keşki", "ah keşke", "bir bilseydi"],
        visual: "ghost of alternate reality, faded what-could-have-been scene, melancholic longing",
        extra: "bittersweet regret",
    },
    Cue {
        id: "as_if",
        patterns: &["sanki", "güya", "adeta", "tıpkı", "gibi görün"],
        visual: "reality bending, dreamlike quality, surreal comparison overlay",
        extra: "surreal dreamscape",
    },
    Cue {
        id: "conditional",
        patterns: &["eğer", "şayet", "olsa", "olsaydı", "varsayalım"],
        visual: "two parallel realities, split scene, branching paths",
        extra: "uncertain possibility",
    },
    Cue {
        id: "possibility",
        patterns: &["belki", "muhtemelen", "olabilir", "ihtimal", "şans"],
        visual: "probability visualization, dice rolling, uncertain fog edges",
        extra: "uncertain potential",
    },
    Cue {
        id: "impossible",
        patterns: &["imkansız", "olamaz", "asla", "hiçbir zaman", "mümkün değil"],
        visual: "shattered impossible scene, breaking reality, forbidden imagery",
        extra: "absolute impossibility",
    },
];

/// `extra` is the pacing phrase.
pub static TEMPORALS: &[Cue] = &[
    Cue {
        id: "sudden",
        patterns: &["aniden", "birden", "birdenbire", "ansızın", "pat diye", "şak diye"],
        visual: "motion blur, freeze frame at impact moment, sudden action capture",
        extra: "explosive instant",
    },
    Cue {
        id: "slow",
        patterns: &["yavaşça", "ağır ağır", "yavaş yavaş", "usul usul", "süzül"],
        visual: "slow motion effect, graceful flowing movement, time stretched",
        extra: "slow contemplative",
    },
    Cue {
        id: "continuous",
        patterns: &["hep", "sürekli", "durmadan", "devamlı", "boyunca", "kesintisiz"],
        visual: "ongoing action, loop imagery, persistent movement",
        extra: "continuous flow",
    },
    Cue {
        id: "sequence",
        patterns: &["sonra", "ardından", "akabinde", "bunun üzerine", "peşinden"],
        visual: "sequential panels, before-after composition, time progression",
        extra: "sequential narrative",
    },
    Cue {
        id: "before",
        patterns: &["önce", "evvel", "önceden", "daha önce", "başlangıçta"],
        visual: "flashback vignette, faded earlier scene, origin moment",
        extra: "backstory reveal",
    },
    Cue {
        id: "present",
        patterns: &["şimdi", "şu an", "tam o anda", "bu dakika", "işte"],
        visual: "crystal clear present moment, sharp focus, immediate action",
        extra: "immediate now",
    },
    Cue {
        id: "future",
        patterns: &["yakında", "birazdan", "ileride", "gelecekte", "bir gün"],
        visual: "hazy future vision, prophetic glimpse, coming events silhouette",
        extra: "anticipated future",
    },
];

/// `extra` is the dynamic pose.
pub static INTERACTIONS: &[Cue] = &[
    Cue {
        id: "dialogue",
        patterns: &["konuştu", "dedi", "sordu", "cevapladı", "söyledi", "bağırdı", "fısıldadı"],
        visual: "two characters facing each other, conversation poses, speech dynamics",
        extra: "conversational stance",
    },
    Cue {
        id: "physical_contact",
        patterns: &["dokundu", "tuttu", "sarıldı", "öptü", "kucakladı", "elini uzattı", "omzuna"],
        visual: "intimate touch moment, connected poses, physical closeness",
        extra: "touching embrace",
    },
    Cue {
        id: "conflict",
        patterns: &["vurdu", "saldırdı", "kavga", "dövüştü", "itişti", "kapıştı"],
        visual: "fighting poses, combat dynamics, aggressive confrontation",
        extra: "combat stance",
    },
    Cue {
        id: "chase",
        patterns: &["kovaladı", "takip", "peşinden", "arkasından", "kaçtı"],
        visual: "pursuit scene, running chase, hunter and hunted dynamic",
        extra: "chase motion",
    },
    Cue {
        id: "together",
        patterns: &["birlikte", "beraber", "yanyana", "el ele", "omuz omuza"],
        visual: "unified movement, side by side, synchronized action",
        extra: "unified stance",
    },
    Cue {
        id: "encounter",
        patterns: &["karşılaştı", "rastladı", "buluştu", "gördü", "tanıdı"],
        visual: "meeting moment, recognition scene, encounter composition",
        extra: "meeting pose",
    },
    Cue {
        id: "farewell",
        patterns: &["veda", "ayrıl", "hoşça kal", "gitti", "terk", "bıraktı"],
        visual: "parting scene, waving goodbye, separated figures, growing distance",
        extra: "farewell gesture",
    },
    Cue {
        id: "protection",
        patterns: &["korudu", "savundu", "kalkan oldu", "önüne geçti", "siper"],
        visual: "protective stance, shielding pose, guardian position",
        extra: "protective shield",
    },
];

pub static SPATIAL: &[Cue] = &[
    Cue {
        id: "above",
        patterns: &["yukarıda", "üstünde", "tepesinde", "gökte"],
        visual: "subject positioned above, looking up composition",
        extra: "",
    },
    Cue {
        id: "below",
        patterns: &["aşağıda", "altında", "dipte", "yerde"],
        visual: "subject below, looking down angle",
        extra: "",
    },
    Cue {
        id: "behind",
        patterns: &["arkasında", "gerisinde", "ötesinde"],
        visual: "depth layering, background emphasis",
        extra: "",
    },
    Cue {
        id: "in_front",
        patterns: &["önünde", "karşısında", "yüzünde"],
        visual: "foreground focus, direct facing",
        extra: "",
    },
    Cue {
        id: "beside",
        patterns: &["yanında", "bitişiğinde", "yakınında"],
        visual: "side by side composition, horizontal balance",
        extra: "",
    },
    Cue {
        id: "inside",
        patterns: &["içinde", "ortasında", "merkezinde"],
        visual: "enclosed space, interior framing, central focus",
        extra: "",
    },
    Cue {
        id: "outside",
        patterns: &["dışında", "uzağında", "ötede"],
        visual: "exterior view, distance emphasized",
        extra: "",
    },
    Cue {
        id: "around",
        patterns: &["etrafında", "çevresinde", "kuşatarak"],
        visual: "surrounding elements, circular composition",
        extra: "",
    },
    Cue {
        id: "between",
        patterns: &["arasında", "ortasında"],
        visual: "positioned between elements, transitional space",
        extra: "",
    },
];

/// `extra` is the character expression.
pub static DIALOGUE_TONES: &[Cue] = &[
    Cue {
        id: "shouting",
        patterns: &["bağırdı", "haykırdı", "kükredi", "çığlık attı", "gürledi"],
        visual: "intense shouting expression",
        extra: "screaming face, wide open mouth, intense anger",
    },
    Cue {
        id: "whisper",
        patterns: &["fısıldadı", "usulca", "gizlice", "kulağına eğildi", "alçak sesle"],
        visual: "intimate whispering, close proximity",
        extra: "leaning close, conspiratorial look",
    },
    Cue {
        id: "crying",
        patterns: &["hıçkırdı", "ağlayarak", "gözyaşları", "titrek sesle", "boğuk sesle"],
        visual: "tearful speaking, emotional breakdown",
        extra: "tears streaming, trembling lips",
    },
    Cue {
        id: "laughing",
        patterns: &["gülerek", "kahkahayla", "neşeyle", "şakacı", "eğlenerek"],
        visual: "joyful laughter, bright expression",
        extra: "laughing face, crinkled eyes, genuine joy",
    },
    Cue {
        id: "threatening",
        patterns: &["tehdit etti", "dişlerini sıkarak", "sert bir şekilde", "soğuk bir sesle"],
        visual: "menacing demeanor, cold threatening presence",
        extra: "cold stare, clenched jaw",
    },
    Cue {
        id: "pleading",
        patterns: &["yalvardı", "rica etti", "lütfen dedi", "diz çöktü", "aman dedi"],
        visual: "desperate pleading, vulnerable posture",
        extra: "pleading eyes, clasped hands",
    },
];

pub static RELATIONSHIPS: &[Cue] = &[
    Cue {
        id: "family",
        patterns: &[
            "anne", "baba", "oğul", "kız", "kardeş", "aile", "evlat", "torun", "dede", "nine",
        ],
        visual: "family bond imagery, generational connection",
        extra: "familial embrace, protective stance",
    },
    Cue {
        id: "romantic",
        patterns: &["sevgili", "eş", "karı", "koca", "nişanlı", "partner", "aşık", "çift"],
        visual: "romantic couple dynamic, intimate connection",
        extra: "couple pose, intertwined hands",
    },
    Cue {
        id: "enemies",
        patterns: &["düşman", "rakip", "hasım", "karşıt", "ezeli düşman", "intikam"],
        visual: "hostile confrontation, opposing forces",
        extra: "face-off stance, aggressive opposition",
    },
    Cue {
        id: "friends",
        patterns: &["arkadaş", "dost", "yoldaş", "kafadar", "ahbap", "birader"],
        visual: "friendly camaraderie, loyal friendship",
        extra: "friendly arm around shoulder, laughing together",
    },
    Cue {
        id: "mentor",
        patterns: &["öğretmen", "usta", "çırak", "öğrenci", "mentor", "hoca"],
        visual: "wisdom passing, teaching moment",
        extra: "master teaching apprentice, guidance gesture",
    },
];

/// `extra` lists period props.
pub static PERIODS: &[Cue] = &[
    Cue {
        id: "ancient",
        patterns: &["antik", "roma", "yunan", "mısır", "firavun", "piramit", "gladyatör"],
        visual: "ancient civilization aesthetic, classical architecture",
        extra: "togas, sandals, marble columns, ancient weapons",
    },
    Cue {
        id: "medieval",
        patterns: &["ortaçağ", "şövalye", "kral", "kraliçe", "kale", "şato", "feodal"],
        visual: "medieval setting, castle architecture",
        extra: "armor, swords, crowns, castle interiors, torches",
    },
    Cue {
        id: "ottoman",
        patterns: &["osmanlı", "sultan", "padişah", "harem", "vezir", "yeniçeri", "cami"],
        visual: "Ottoman empire aesthetic, Islamic architecture",
        extra: "turbans, kaftans, kilims, arabesque patterns",
    },
    Cue {
        id: "victorian",
        patterns: &["viktorya", "ingiliz", "londra", "beyefendi", "hanım", "aristokrat"],
        visual: "Victorian era aesthetic, refined elegance",
        extra: "top hats, corsets, gas lamps, horse carriages",
    },
    Cue {
        id: "future",
        patterns: &["gelecek", "ütopya", "distopya", "siber", "yapay zeka", "2100"],
        visual: "futuristic setting, advanced technology",
        extra: "holograms, robots, neon lights, sleek surfaces",
    },
];

pub static GENRES: &[Genre] = &[
    Genre {
        id: "horror",
        patterns: &[
            "korku", "dehşet", "kabus", "hayalet", "lanet", "ürperti", "vampir", "zombi", "canavar",
            "cehennem", "şeytan",
        ],
        visual: "horror movie aesthetic, terrifying atmosphere",
        atmosphere: "dread and terror",
        color_scheme: "dark desaturated with blood red",
    },
    Genre {
        id: "romance",
        patterns: &[
            "aşk", "sevgi", "tutku", "öpücük", "sarıl", "kalp", "romantik", "sevgili", "flört",
            "çift", "evlilik", "düğün",
        ],
        visual: "romantic movie aesthetic, soft focus, dreamy",
        atmosphere: "warm and intimate",
        color_scheme: "warm pinks, soft reds, golden hour",
    },
    Genre {
        id: "sci-fi",
        patterns: &[
            "uzay", "galaksi", "robot", "yapay zeka", "gelecek", "teknoloji", "lazer",
            "uzay gemisi", "hologram", "siber",
        ],
        visual: "science fiction aesthetic, futuristic technology",
        atmosphere: "technological wonder",
        color_scheme: "cool blues, neon accents",
    },
    Genre {
        id: "fantasy",
        patterns: &[
            "büyü", "sihir", "ejderha", "peri", "elf", "krallık", "kılıç", "büyücü", "efsane",
            "mitoloji", "destan",
        ],
        visual: "high fantasy aesthetic, magical elements",
        atmosphere: "magical and wondrous",
        color_scheme: "rich purples, mystical greens",
    },
    Genre {
        id: "action",
        patterns: &[
            "savaş", "kavga", "patlama", "kaçış", "takip", "tehlike", "macera", "keşif", "hazine",
            "kahraman",
        ],
        visual: "action movie aesthetic, dynamic movement",
        atmosphere: "adrenaline-pumping",
        color_scheme: "high contrast, explosive oranges",
    },
    Genre {
        id: "thriller",
        patterns: &[
            "gerilim", "şüphe", "gizem", "cinayet", "dedektif", "suç", "hırsız", "komplo", "ihanet",
        ],
        visual: "thriller aesthetic, tension-filled, noir",
        atmosphere: "suspenseful",
        color_scheme: "dark noir, harsh shadows",
    },
    Genre {
        id: "drama",
        patterns: &[
            "acı", "kayıp", "ölüm", "veda", "hüzün", "gözyaşı", "pişmanlık", "vicdan", "ayrılık",
        ],
        visual: "dramatic movie aesthetic, emotional depth",
        atmosphere: "emotionally heavy",
        color_scheme: "muted tones, melancholic blues",
    },
    Genre {
        id: "historical",
        patterns: &[
            "osmanlı", "roma", "yunan", "mısır", "ortaçağ", "antik", "imparatorluk", "sultan",
            "padişah",
        ],
        visual: "period drama aesthetic, historically accurate",
        atmosphere: "epic historical",
        color_scheme: "earthy period-accurate colors",
    },
];

pub static MULTI_EVENT_INDICATORS: &[&str] = &[
    "aynı anda", "ve", "hem...hem", "iken", "sırada", "bir yandan", "öte yandan", "fakat", "ama",
    "ancak", "lakin", "oysa", "rağmen", "karşın",
];
