//! Figurative language: idioms, abstract concepts, contrasts and color metaphors

use super::{Concept, Contrast, Cue, Idiom};

/// Idiom families. A family matches when any phrase is a substring of the text.
pub static IDIOMS: &[Idiom] = &[
    Idiom {
        key: "heartbroken",
        patterns: &[
            "kalbi kırık", "kalbi parça", "yüreği sızla", "içi kan ağla", "yüreği yana",
            "kalbi ezil", "gönlü yaralı", "aşk acısı", "kalp yarası",
        ],
        visual: "person with broken heart symbolism, shattered glass effect around chest, tears streaming, emotional devastation visible, cracked heart imagery",
        mood: "devastating sadness",
        lighting: "dark moody lighting with cold blue tones, rain effect",
    },
    Idiom {
        key: "burning_anger",
        patterns: &[
            "ateş püskür", "küplere bin", "kan beyin", "öfkeden kudur", "gözü dön",
            "sinirden çıldır", "deliye dön", "çılgına dön", "tepesi at", "köpür", "kudur",
        ],
        visual: "person surrounded by flames and smoke, intense red aura emanating, fierce expression with veins visible, clenched fists, burning environment",
        mood: "explosive rage",
        lighting: "dramatic red and orange lighting, high contrast, flames illuminating",
    },
    Idiom {
        key: "deep_fear",
        patterns: &[
            "can boğaz", "yüreği ağzına gel", "tüyleri diken", "kanı don", "beti benzi at",
            "ödü kopuk", "ödü pat", "korku sal", "dehşet düş", "donup kal", "taş kesil",
        ],
        visual: "terrified person with wide eyes and dilated pupils, pale ghostly face, shadows creeping from all sides, horror atmosphere, trembling hands",
        mood: "primal terror",
        lighting: "harsh shadows, flickering unstable light, darkness closing in",
    },
    Idiom {
        key: "overwhelming_joy",
        patterns: &[
            "sevinçten uç", "havalara uç", "mutluluktan öl", "dünyalar benim", "göklere çık",
            "zıplayıp dur", "çocuk gibi sevin", "bayram et", "coş",
        ],
        visual: "person floating or leaping with pure joy, golden light rays emanating, flowers blooming around, confetti and celebration atmosphere, wide genuine smile",
        mood: "ecstatic happiness",
        lighting: "bright golden sunshine, lens flares, warm glowing light everywhere",
    },
    Idiom {
        key: "deep_loneliness",
        patterns: &[
            "yapayalnız", "tek başına", "kimsesiz", "terk edil", "yalnızlık çök", "boşlukta kaybol",
            "yalnız kal", "dört duvar", "garip gureba", "öksüz",
        ],
        visual: "solitary small figure in vast empty space, isolated on bench, tiny person in enormous desolate landscape, melancholic posture, empty streets",
        mood: "profound isolation",
        lighting: "cold blue ambient light, fog obscuring distance, empty negative space",
    },
    Idiom {
        key: "falling_in_love",
        patterns: &[
            "aşık ol", "gönül ver", "kalbi çarp", "kelebek uç", "başı dön", "tutku yak", "vur",
            "yürek çarp", "sev", "aşk", "gönül düş",
        ],
        visual: "couple with floating hearts, butterflies surrounding, romantic soft glow, dreamy atmosphere with bokeh, gentle touch, longing gaze",
        mood: "passionate romance",
        lighting: "warm sunset glow, soft diffused pink and orange light, golden hour",
    },
    Idiom {
        key: "betrayal",
        patterns: &[
            "sırtından bıçak", "ihanet", "arkadan vur", "güveni kır", "kandır", "aldatıl", "satıl",
            "hainlik", "dönek", "yüzüne gül arkadan vur",
        ],
        visual: "knife in back symbolism, broken trust imagery with cracked glass, dark silhouette lurking behind, shattered mirror reflection, two-faced imagery",
        mood: "dark betrayal",
        lighting: "harsh dramatic noir shadows, stark contrast, cold harsh light",
    },
    Idiom {
        key: "hope_rising",
        patterns: &[
            "umut doğ", "ışık görün", "tünel sonu", "yeni başlangıç", "şafak sök", "gün doğ",
            "yarın var", "umut ışığı", "ışık hüzme",
        ],
        visual: "light breaking through dark storm clouds, golden sunrise on horizon, person looking ahead with hope, new dawn breaking, crack of light in darkness",
        mood: "hopeful anticipation",
        lighting: "dawn light breaking through darkness, golden hour rays of hope penetrating",
    },
    Idiom {
        key: "inner_peace",
        patterns: &[
            "iç huzur", "ruhun dinlen", "meditasyon", "kendini bul", "zen", "sessizlik",
            "huzur bul", "dingin", "sakin", "ferah",
        ],
        visual: "peaceful meditation pose in nature, zen garden with raked sand, calm mirror-like water reflection, serene mountain temple, lotus flower",
        mood: "transcendent peace",
        lighting: "soft diffused natural light, gentle warm glow, dappled sunlight",
    },
    Idiom {
        key: "power_dominance",
        patterns: &[
            "güç elde", "hükmet", "kontrol al", "efen", "hakim ol", "taht", "saltanat", "imparator",
            "kral", "hükümdar", "otorite",
        ],
        visual: "powerful imposing figure on ornate throne, golden crown with gems, commanding regal pose, subjects bowing in reverence, vast empire behind",
        mood: "authoritative power",
        lighting: "dramatic spotlight from above, god rays through windows, royal gold tones",
    },
    Idiom {
        key: "freedom",
        patterns: &[
            "özgürlük", "kanatlan", "zincir kır", "serbest kal", "uç", "bağımsız", "hür", "özgür",
            "kurtul", "serbest bırak",
        ],
        visual: "person with arms spread wide on cliff edge, birds soaring in flight, broken chains falling away, endless open sky, wind in flowing hair",
        mood: "liberating freedom",
        lighting: "bright open sky backlight, sun behind subject creating silhouette, vast horizon",
    },
    Idiom {
        key: "mystery_intrigue",
        patterns: &[
            "gizemli", "sır sakla", "bilinmeyen", "karanlık güç", "esrar", "gölgeler", "muamma",
            "sır", "meçhul", "belirsiz",
        ],
        visual: "mysterious hooded figure in fog, hidden faces in shadow, cryptic ancient symbols glowing, secret passage with candlelight, masked stranger",
        mood: "enigmatic mystery",
        lighting: "chiaroscuro with deep shadows, mysterious single light source, fog diffusion",
    },
    Idiom {
        key: "time_passing",
        patterns: &[
            "zaman geç", "yıllar akıp", "eskiden", "bir zamanlar", "hatırla", "nostalji",
            "eski günler", "geçmiş", "anı",
        ],
        visual: "antique clock with flowing sand, old sepia photographs, faded memories transitioning, time lapse aging effect, vintage objects",
        mood: "nostalgic melancholy",
        lighting: "soft vintage sepia tones, warm faded nostalgic light, dust particles in light",
    },
    Idiom {
        key: "transformation",
        patterns: &[
            "dönüşüm", "değişim", "evril", "metamorfoz", "başka biri ol", "yeniden doğ", "dönüş",
            "farklılaş", "evrimleş",
        ],
        visual: "butterfly emerging from cocoon, phoenix rising from ashes, person mid-transformation with magical particles, caterpillar to butterfly sequence",
        mood: "magical transformation",
        lighting: "ethereal glowing light, magical sparkles and particles, aurora effects",
    },
    Idiom {
        key: "nightmare",
        patterns: &[
            "kabus", "kötü rüya", "karanlık düş", "kabuslar", "korkunç rüya", "uyku kaç",
            "terler içinde uyan",
        ],
        visual: "distorted surreal reality, twisted impossible shapes, grotesque monster shadows on wall, person sweating in bed, sleep paralysis demon",
        mood: "nightmarish horror",
        lighting: "surreal distorted unnatural lighting, blood red accents, oppressive darkness",
    },
    Idiom {
        key: "epic_battle",
        patterns: &[
            "destansı savaş", "büyük mücadele", "son savaş", "ölüm kalım", "kahramanca", "destan",
            "savaş meydan", "harp",
        ],
        visual: "massive epic battle scene with armies clashing, dramatic stormy sky with lightning, lone hero standing in center, flags waving, weapons clashing",
        mood: "epic grandeur",
        lighting: "dramatic stormy sky with lightning strikes, fire glow on faces, dust and smoke",
    },
    Idiom {
        key: "exhaustion",
        patterns: &[
            "bitkin düş", "tükenmişlik", "ayakta dur", "enerji kal", "yorgunluk çök", "halsiz",
            "mecal kal",
        ],
        visual: "person collapsed on floor, heavy eyelids, drained posture, scattered papers, coffee cups, dark circles under eyes",
        mood: "complete exhaustion",
        lighting: "dim tired lighting, fluorescent office lights, late night atmosphere",
    },
    Idiom {
        key: "nervous_tension",
        patterns: &[
            "gerilim", "stres", "sinir", "baskı altında", "bunalım", "patlama noktası", "asabi",
        ],
        visual: "person with tense shoulders and clenched jaw, breaking pencil, veins showing, pressure cooker imagery, cracking surface",
        mood: "intense stress",
        lighting: "harsh overhead lighting, pressure cooker steam, tight framing",
    },
    Idiom {
        key: "stomach_churning",
        patterns: &["midesi bulan", "içi kalk", "mide bulantı", "tiksinti", "iğren", "kusas"],
        visual: "person with hand on stomach, green-tinged face, wavy distorted vision, queasy expression, swirling background",
        mood: "physical revulsion",
        lighting: "sickly green tint, nauseating swirl effects",
    },
    Idiom {
        key: "storm_brewing",
        patterns: &[
            "fırtına yaklaş", "bulutlar top", "kara bulut", "fırtına öncesi sessizlik", "gök gürle",
        ],
        visual: "massive dark storm clouds gathering on horizon, lightning in distance, ominous calm before storm, wind starting to pick up",
        mood: "impending danger",
        lighting: "pre-storm dramatic lighting, dark clouds with bright horizon",
    },
    Idiom {
        key: "spring_awakening",
        patterns: &["bahar gel", "çiçek aç", "tabiat uyan", "tomurcuk pat", "yeşer", "canlan"],
        visual: "flowers bursting into bloom, ice melting to reveal green, birds returning, streams flowing, new life everywhere",
        mood: "renewal and rebirth",
        lighting: "fresh spring sunlight, soft green tones, dewy morning light",
    },
    Idiom {
        key: "autumn_melancholy",
        patterns: &["yaprak dök", "sonbahar", "solgun", "kuruyup git", "hüzünlü son"],
        visual: "falling golden and red leaves, bare tree branches, misty park, person walking alone on leaf-covered path, geese flying south",
        mood: "bittersweet ending",
        lighting: "golden autumn afternoon, soft melancholic amber tones",
    },
    Idiom {
        key: "frozen_stillness",
        patterns: &["buz kes", "donuk", "soğuk", "kış uykusu", "hiç hareket yok", "kıpırdama"],
        visual: "frozen lake surface, ice crystals on window, snow-covered landscape, frosted trees, breath visible in cold air",
        mood: "suspended animation",
        lighting: "cold blue-white winter light, crisp sharp shadows",
    },
    Idiom {
        key: "spiritual_awakening",
        patterns: &["ruh uyan", "aydınlan", "farkındalık", "üçüncü göz", "nirvana", "erişim"],
        visual: "person meditating with cosmic energy around, third eye opening, chakras glowing, universe expanding from mind, enlightenment rays",
        mood: "transcendent awareness",
        lighting: "divine light from above, cosmic purple and gold, ethereal glow",
    },
    Idiom {
        key: "dark_magic",
        patterns: &["kara büyü", "lanet", "bedduva", "kötü göz", "nazar", "karanlık güç"],
        visual: "dark ritual circle, black candles, swirling dark energy, evil eye imagery, cursed objects, shadowy summoning",
        mood: "malevolent darkness",
        lighting: "sickly green and purple, candlelight in darkness, ominous glow",
    },
    Idiom {
        key: "divine_intervention",
        patterns: &["ilahi yardım", "tanrı elini uzat", "mucize", "gökten ışık", "melek gel"],
        visual: "rays of divine light breaking through, angelic figure descending, miracle happening, hands reaching from sky, sacred golden glow",
        mood: "divine grace",
        lighting: "heavenly bright light from above, sacred golden rays, lens flares",
    },
    Idiom {
        key: "crowd_pressure",
        patterns: &["kalabalık", "sürü", "herkes gibi", "baskı hisset", "farklı olma"],
        visual: "lone person standing against crowd of identical figures, pressure from all sides, conformity imagery, being crushed by masses",
        mood: "social suffocation",
        lighting: "overwhelming harsh light, crowd creating shadows, claustrophobic",
    },
    Idiom {
        key: "secret_meeting",
        patterns: &["gizli buluş", "karanlıkta buluş", "kimse görme", "sır paylaş", "fısıldaş"],
        visual: "two figures meeting in shadows, whispered conversation, hidden corner of city, spy thriller atmosphere, coats and hats",
        mood: "clandestine intrigue",
        lighting: "noir street lamp, shadows hiding faces, limited visibility",
    },
    Idiom {
        key: "public_shame",
        patterns: &["utanç", "rezil ol", "yerin dibine gir", "herkes gör", "mahcup", "yüzü kızar"],
        visual: "person in spotlight with crowd pointing and laughing, face burning red, wanting to disappear, ground opening up beneath",
        mood: "crushing embarrassment",
        lighting: "harsh unflattering spotlight, everyone else in shadow",
    },
    Idiom {
        key: "crossroads",
        patterns: &["yol ayrımı", "karar ver", "iki yol", "tercih yap", "hayatım değiş"],
        visual: "person standing at literal crossroads, two paths diverging in forest, signposts pointing different directions, fork in the road",
        mood: "decisive moment",
        lighting: "one path in light, one in shadow, dramatic choice lighting",
    },
    Idiom {
        key: "climbing_mountain",
        patterns: &["zirve", "tırman", "hedefe ulaş", "başarı yolu", "tepe noktası"],
        visual: "person climbing steep mountain, summit visible above, determination in pose, challenging terrain, flag at peak",
        mood: "ambitious struggle",
        lighting: "sunrise at mountain peak, challenging shadows, goal lit up",
    },
    Idiom {
        key: "sinking_ship",
        patterns: &["bat", "batar", "batık gemi", "çökme", "son bul", "felaket"],
        visual: "ship sinking in stormy sea, people abandoning ship, water rushing in, tilted deck, desperate situation",
        mood: "catastrophic failure",
        lighting: "stormy dark sky, lightning flashes, dramatic waves",
    },
    Idiom {
        key: "phoenix_rise",
        patterns: &[
            "küllerinden doğ", "yeniden ayağa kalk", "baştan başla", "yıkılıp yeniden yap",
            "anka kuşu",
        ],
        visual: "magnificent phoenix bird rising from flames and ashes, rebirth symbolism, wings spreading, fire becoming new life",
        mood: "triumphant rebirth",
        lighting: "fiery orange and gold, rising flames becoming light, majestic glow",
    },
    Idiom {
        key: "mind_blown",
        patterns: &[
            "kafası pat", "akıl almaz", "inanamadı", "şok", "aklı git", "donup kal", "ağzı açık",
        ],
        visual: "person with exploding mind imagery, cosmic explosion from head, shocked wide eyes, brain fireworks, reality shattering",
        mood: "utter astonishment",
        lighting: "explosive bright light, cosmic effects, electric energy",
    },
    Idiom {
        key: "crystal_clear",
        patterns: &["kristal net", "ap açık", "belli", "anla", "kavra", "sır çöz"],
        visual: "fog clearing to reveal crystal landscape, puzzle pieces fitting together, lightbulb moment, clear water revealing truth",
        mood: "perfect clarity",
        lighting: "pure clean light, no shadows, pristine clarity",
    },
    Idiom {
        key: "lost_in_thoughts",
        patterns: &["dalgın", "düşünceli", "derin düşünce", "kaybol", "hayal kur", "dalıp git"],
        visual: "person staring into distance with dreamy expression, thought bubbles floating, abstract patterns emerging from head",
        mood: "deep contemplation",
        lighting: "soft unfocused background, spotlight on thinker, ethereal atmosphere",
    },
];

/// Abstract concepts, matched by root with suffix tolerance.
pub static CONCEPTS: &[Concept] = &[
    Concept {
        key: "time",
        keywords: &[
            "zaman", "saat", "dakika", "saniye", "geçmiş", "gelecek", "şimdi", "an", "süre",
            "dönem", "çağ", "devir",
        ],
        visual: "flowing hourglass sand, intricate clock gears turning, time spiral vortex, aging face sequence, melting clocks like Dali",
    },
    Concept {
        key: "death",
        keywords: &[
            "ölüm", "son", "veda", "kayıp", "yitir", "bitti", "gitti", "öldü", "ölü", "cenaze",
            "mezar", "son nefes",
        ],
        visual: "wilting black roses, autumn leaves falling into void, setting sun below horizon, empty chair with ghost outline, fading translucent figure",
    },
    Concept {
        key: "life",
        keywords: &[
            "hayat", "yaşam", "canlılık", "nefes", "doğum", "başlangıç", "var", "yaşa", "canlı",
            "diri",
        ],
        visual: "blooming colorful flowers in timelapse, rising golden sun, growing tree with deep roots, newborn hands, spring awakening with butterflies",
    },
    Concept {
        key: "love",
        keywords: &[
            "aşk", "sevgi", "tutku", "bağlılık", "sadakat", "özlem", "sev", "sevgili", "aşık",
            "gönül", "kalp",
        ],
        visual: "intertwined hands of lovers, glowing hearts, warm tender embrace, couple silhouette at sunset, red roses with dew drops",
    },
    Concept {
        key: "hate",
        keywords: &[
            "nefret", "kin", "düşmanlık", "öfke", "tiksin", "intikam", "kin güt", "lanetle",
        ],
        visual: "dark malevolent aura emanating, clenched white-knuckled fists, fire burning in eyes, cracked poisoned ground, venomous snake imagery",
    },
    Concept {
        key: "wisdom",
        keywords: &[
            "bilgelik", "akıl", "tecrübe", "öğren", "bilgi", "anlayış", "zeka", "felsefe", "ders",
            "hikmet",
        ],
        visual: "ancient sage surrounded by floating books, wise owl on branch, glowing ancient scrolls, light of knowledge beam, enlightened buddha figure",
    },
    Concept {
        key: "chaos",
        keywords: &[
            "kaos", "karmaşa", "düzensizlik", "kargaşa", "çalkantı", "karışık", "allak bullak",
            "darmadağın",
        ],
        visual: "swirling destructive vortex, scattered broken objects flying, shattered order, storm of conflicting elements, entropy visualization",
    },
    Concept {
        key: "order",
        keywords: &[
            "düzen", "tertip", "sıra", "organizasyon", "sistem", "kural", "disiplin", "yapı",
        ],
        visual: "perfect geometric sacred patterns, precisely aligned objects, clean minimalist lines, balanced symmetrical composition, crystal lattice",
    },
    Concept {
        key: "destiny",
        keywords: &[
            "kader", "yazgı", "alınyazısı", "mukadder", "kaçınılmaz", "kısmet", "nasip", "fal",
        ],
        visual: "red thread of fate connecting souls, cosmic star patterns, celestial bodies aligning, golden path leading to bright light, tarot cards",
    },
    Concept {
        key: "dream",
        keywords: &["hayal", "rüya", "düş", "fantezi", "ütopya", "hayal kur", "düşle", "kurgu"],
        visual: "floating impossible elements, surreal Escher landscape, clouds forming ground, dreamlike soft distortion, sleeping figure with vision bubbles",
    },
    Concept {
        key: "reality",
        keywords: &["gerçek", "hakikat", "somut", "var olan", "reel", "maddi", "elle tutulur"],
        visual: "sharp hyper-focused photograph, mundane everyday objects, ordinary street scene, raw unfiltered truth, mirror reflection",
    },
    Concept {
        key: "infinity",
        keywords: &[
            "sonsuz", "ebedi", "sonsuza", "bitmez", "ölümsüz", "sınırsız", "uçsuz bucaksız",
        ],
        visual: "glowing infinity symbol, endless mirror corridor, deep space nebula, eternal flame that never dies, recursive fractal patterns",
    },
    Concept {
        key: "darkness",
        keywords: &["karanlık", "zifiri", "kör", "siyah", "gölge", "koyu", "karartı", "kasvet"],
        visual: "deep impenetrable shadows, endless void, silhouettes lost in darkness, single candle struggling against black, abyss staring back",
    },
    Concept {
        key: "light",
        keywords: &[
            "ışık", "aydınlık", "parlak", "nurlu", "pırıl", "parla", "ışıl ışıl", "aydınlat",
        ],
        visual: "radiant sun beams breaking through, glowing ethereal orbs, divine golden light rays, illuminated figure with halo, bioluminescence",
    },
    Concept {
        key: "war",
        keywords: &["savaş", "çatışma", "harp", "mücadele", "kavga", "savaşan", "düşman", "ordu"],
        visual: "epic battlefield with armies, explosions and smoke, torn bloodied flags, weapons clashing, soldiers charging",
    },
    Concept {
        key: "peace",
        keywords: &["barış", "sulh", "uzlaşma", "huzur", "sessizlik", "sakin", "uyum", "denge"],
        visual: "white dove carrying olive branch, calm still waters reflecting sky, warm handshake, serene meadow landscape, yin yang balance",
    },
    Concept {
        key: "wealth",
        keywords: &["zengin", "servet", "para", "altın", "hazine", "lüks", "varlık", "bolluk"],
        visual: "overflowing gold coins and jewels, treasure chest bursting, luxurious palatial interior, diamond chandelier, opulent feast",
    },
    Concept {
        key: "poverty",
        keywords: &["fakir", "yoksul", "sefalet", "açlık", "muhtaç", "fukara", "dilenci", "yokluk"],
        visual: "empty cupped hands begging, worn tattered clothes, simple crumbling shelter, hungry hollow eyes, barren cracked landscape",
    },
    Concept {
        key: "loneliness",
        keywords: &["yalnızlık", "yalnız", "tek", "issız", "terkedilmiş", "kimsesiz", "garip"],
        visual: "single figure on empty bench, one person in vast crowd all backs turned, empty room with single chair, isolated island, rain on window alone",
    },
    Concept {
        key: "connection",
        keywords: &["bağ", "bağlantı", "ilişki", "birlik", "beraberlik", "ortaklık", "dostluk"],
        visual: "hands reaching and touching, network of glowing threads connecting people, bridge between two cliffs, puzzle pieces joining, roots intertwined",
    },
    Concept {
        key: "innocence",
        keywords: &["masumiyet", "masum", "saf", "temiz", "arı", "günahsız", "çocuksu"],
        visual: "child playing in sunlit meadow, white lamb, dewdrop on flower petal, curious wide eyes, untouched snow field, butterfly on finger",
    },
    Concept {
        key: "guilt",
        keywords: &["suçluluk", "suç", "vicdan", "pişmanlık", "günah", "utanç", "mahcubiyet"],
        visual: "heavy chains on shoulders, dark shadow following person, bloodstains that won't wash, haunted eyes in mirror, weight pressing down",
    },
    Concept {
        key: "redemption",
        keywords: &["kurtuluş", "kefaret", "arınma", "affedil", "temizlen", "bağışlan"],
        visual: "figure rising from darkness into light, chains breaking and falling, washing in pure waterfall, phoenix rebirth, burden lifting from shoulders",
    },
    Concept {
        key: "memory",
        keywords: &["anı", "hatıra", "geçmiş", "hatırla", "anımsa", "nostalji", "eskiden"],
        visual: "faded sepia photographs floating, ghostly figures from past, childhood home imagery, memory fragments like broken glass, old diary pages",
    },
    Concept {
        key: "ambition",
        keywords: &["hırs", "tutku", "hedef", "amaç", "istek", "azim", "kararlılık", "başarı"],
        visual: "person climbing endless staircase to stars, reaching hand toward distant peak, eagle soaring above clouds, arrow aimed at target, fire in eyes",
    },
    Concept {
        key: "regret",
        keywords: &["pişmanlık", "keşke", "yazık", "ah keşke", "vicdan azabı", "üzüntü"],
        visual: "figure looking back at fork in road not taken, tears on old photograph, missed train departing, wilted flower in hand, could-have-been scenes fading",
    },
    Concept {
        key: "truth",
        keywords: &["gerçek", "doğru", "hakikat", "sahici", "dürüst", "içten", "samimi"],
        visual: "veil being lifted to reveal light, mirror showing true reflection, blindfold being removed, scales of justice balanced, crystal clear water",
    },
    Concept {
        key: "lie",
        keywords: &["yalan", "aldatma", "hile", "düzen", "kandırma", "sahte", "uydurma"],
        visual: "snake with forked tongue, mask hiding true face, puppet strings controlling, house of cards, smoke and mirrors, cracked facade",
    },
    Concept {
        key: "justice",
        keywords: &["adalet", "hak", "hukuk", "eşitlik", "denge", "ceza", "ödül"],
        visual: "balanced golden scales, blindfolded lady justice statue, gavel striking, equal portions being distributed, broken chains of oppression",
    },
    Concept {
        key: "injustice",
        keywords: &["adaletsizlik", "haksızlık", "zulüm", "eşitsizlik", "ayrımcılık"],
        visual: "broken unbalanced scales, chains on innocent, powerful stepping on weak, bars imprisoning wrongly, weighted dice, crooked scales",
    },
    Concept {
        key: "faith",
        keywords: &["inanç", "iman", "güven", "itikat", "din", "maneviyat", "ruhaniyet"],
        visual: "person praying with light descending, candle in darkness, hands reaching to sky, dove descending, rosary beads, spiritual aura, temple interior",
    },
    Concept {
        key: "doubt",
        keywords: &["şüphe", "tereddüt", "kuşku", "belirsizlik", "kararsızlık", "soru"],
        visual: "forked path with question marks, person looking at two doors, fog obscuring path ahead, maze without clear exit, fractured reflection",
    },
    Concept {
        key: "courage",
        keywords: &["cesaret", "yürek", "gözüpek", "korkusuz", "mert", "yiğit", "kahraman"],
        visual: "small figure facing giant monster, standing alone against army, lion heart imagery, firefighter running into flames, first step off cliff",
    },
    Concept {
        key: "cowardice",
        keywords: &["korkaklık", "korkak", "ürkek", "pısırık", "yılgın", "kaçak"],
        visual: "person cowering in shadow, running away from small challenge, hiding behind others, trembling hands, avoiding gaze, shrinking figure",
    },
    Concept {
        key: "nature",
        keywords: &["doğa", "tabiat", "yeryüzü", "çevre", "ekosistem", "vahşi"],
        visual: "lush forest ecosystem teeming with life, waterfall in jungle, diverse wildlife harmony, earth from space showing blue and green, roots and branches",
    },
    Concept {
        key: "cosmos",
        keywords: &["evren", "kozmos", "uzay", "galaksi", "yıldız", "gezegen", "nebula"],
        visual: "vast spiral galaxy, nebula birth of stars, planets in orbit, astronaut floating in space, cosmic web of universe, meteor shower",
    },
    Concept {
        key: "creation",
        keywords: &["yaratılış", "oluşum", "başlangıç", "genesis", "köken", "kaynak"],
        visual: "big bang explosion of light, hands sculpting from clay, artist at canvas, seed sprouting from earth, spark of life moment, first light",
    },
    Concept {
        key: "destruction",
        keywords: &["yıkım", "tahribat", "harap", "yok oluş", "felaket", "çöküş"],
        visual: "crumbling ancient ruins, explosion destroying building, earthquake splitting ground, empire falling, ash and debris, entropy decay",
    },
    Concept {
        key: "cycle",
        keywords: &["döngü", "tekrar", "çark", "devir", "sonsuz döngü", "ouroboros"],
        visual: "ouroboros snake eating tail, seasons wheel turning, moon phases circle, life cycle from birth to death, water cycle, eternal return",
    },
    Concept {
        key: "nostalgia",
        keywords: &["özlem", "hasret", "sıla", "vatan", "aile", "eski günler"],
        visual: "sepia-toned childhood home, old toy forgotten in attic, faded family photograph, hometown skyline at sunset, grandmother's kitchen",
    },
    Concept {
        key: "melancholy",
        keywords: &["hüzün", "keder", "elem", "dert", "tasa", "gamlı", "mahzun"],
        visual: "rain on window with figure watching, willow tree by still pond, blue hour lonely scene, teardrop on cheek, gray autumn day",
    },
    Concept {
        key: "ecstasy",
        keywords: &["vecd", "kendinden geçme", "coşku", "esrime", "zevk", "sarhoşluk"],
        visual: "person in rapture arms raised, transcendent dance, explosion of colors from figure, eyes rolled back in bliss, energy emanating",
    },
    Concept {
        key: "serenity",
        keywords: &["sükunet", "durgunluk", "huzur", "dinginlik", "sükun", "rahat"],
        visual: "still lake at dawn, zen rock garden, sleeping baby, meditation lotus position, gentle stream, Buddha smile, mountain at peace",
    },
    Concept {
        key: "anxiety",
        keywords: &["kaygı", "endişe", "tedirgin", "gergin", "panik", "telaş"],
        visual: "tangled threads around figure, clock hands spinning fast, person in corner with shadows closing in, heart racing imagery, maze with no exit",
    },
    Concept {
        key: "despair",
        keywords: &["umutsuzluk", "çaresizlik", "karanlık", "yeis", "ümitsiz"],
        visual: "figure collapsed at bottom of pit, endless dark tunnel with no light, reaching hand finding nothing, storm with no shelter, sinking",
    },
    Concept {
        key: "revolution",
        keywords: &["devrim", "isyan", "ayaklanma", "başkaldırı", "reform", "değişim"],
        visual: "raised fist breaking chains, crowd storming gates, old order crumbling, phoenix rising from ash, red flags waving, statue toppling",
    },
    Concept {
        key: "tradition",
        keywords: &["gelenek", "görenek", "adet", "töre", "miras", "kültür"],
        visual: "elder passing scroll to young, ancient ceremony, ancestral home, family gathering around table, heritage artifacts, ritual performance",
    },
    Concept {
        key: "progress",
        keywords: &["ilerleme", "gelişme", "modernleşme", "yenilik", "atılım"],
        visual: "arrow pointing upward, rocket launch, evolution sequence, old to new transition, building rising, innovation sparks, technology advance",
    },
    Concept {
        key: "identity",
        keywords: &["kimlik", "benlik", "özlük", "karakter", "kişilik", "ben"],
        visual: "mirror showing multiple reflections, mask being removed, fingerprint close-up, DNA helix, person looking at childhood photo of self",
    },
];

pub static CONTRASTS: &[Contrast] = &[
    Contrast {
        first: "ışık",
        second: "karanlık",
        visual: "stark contrast between light and shadow, yin yang duality, half illuminated half dark",
    },
    Contrast {
        first: "sevgi",
        second: "nefret",
        visual: "love hate duality, rose with thorns, beautiful yet dangerous",
    },
    Contrast {
        first: "hayat",
        second: "ölüm",
        visual: "life death cycle, skeleton and newborn, withering and blooming simultaneously",
    },
    Contrast {
        first: "geçmiş",
        second: "gelecek",
        visual: "past meets future, old and new juxtaposed, time bridge",
    },
    Contrast {
        first: "umut",
        second: "umutsuzluk",
        visual: "hope amidst despair, single flower in wasteland, light crack in darkness",
    },
    Contrast {
        first: "savaş",
        second: "barış",
        visual: "war and peace imagery, dove on cannon, soldiers embracing",
    },
    Contrast {
        first: "zengin",
        second: "fakir",
        visual: "wealth poverty contrast, divided world, mansion next to slum",
    },
    Contrast {
        first: "gerçek",
        second: "hayal",
        visual: "reality dream blur, surreal transition, waking dreaming merge",
    },
    Contrast {
        first: "düzen",
        second: "kaos",
        visual: "order chaos boundary, organized mess, entropy edge",
    },
    Contrast {
        first: "cesaret",
        second: "korku",
        visual: "courage fear duality, brave heart trembling hands, facing fear",
    },
];

/// `id` is the color, `extra` its figurative meaning.
pub static COLOR_METAPHORS: &[Cue] = &[
    Cue {
        id: "black",
        patterns: &["siyah gün", "kara gün", "kara haber"],
        visual: "dark ominous atmosphere, black clouds, mourning imagery",
        extra: "tragedy",
    },
    Cue {
        id: "white",
        patterns: &["beyaz sayfa", "temiz sayfa", "ak pak"],
        visual: "pristine white environment, clean slate, innocent light",
        extra: "purity",
    },
    Cue {
        id: "red",
        patterns: &["kırmızı görmek", "kan kırmızı", "al kan"],
        visual: "intense red tones, blood red accents, passionate fire",
        extra: "anger/passion",
    },
    Cue {
        id: "blue",
        patterns: &["maviye boyamak", "mavi ruh", "hüzün mavisi"],
        visual: "melancholic blue tones, sad blue hour, blue tears",
        extra: "sadness",
    },
    Cue {
        id: "green",
        patterns: &["yeşil gözlü", "kıskanç"],
        visual: "envious green aura, jealousy imagery, green-eyed monster",
        extra: "jealousy",
    },
    Cue {
        id: "gold",
        patterns: &["altın değer", "altın kalp", "altın gibi"],
        visual: "golden glow, precious golden light, treasure imagery",
        extra: "precious",
    },
    Cue {
        id: "gray",
        patterns: &["gri bölge", "belirsiz", "ne siyah ne beyaz"],
        visual: "gray ambiguous atmosphere, fog of uncertainty, muted tones",
        extra: "ambiguity",
    },
    Cue {
        id: "purple",
        patterns: &["mor hayaller", "hayal dünyası"],
        visual: "dreamy purple haze, imaginative purple clouds, fantasy purple",
        extra: "imagination",
    },
];
