//! Turkish to English vocabulary used for subjects, actions and objects

use super::Gloss;

/// Keyword glossary; every root found in the text contributes its gloss once.
pub static TRANSLATIONS: &[(&str, &str)] = &[
    ("ev", "house"),
    ("oda", "room"),
    ("masa", "table"),
    ("pencere", "window"),
    ("kapı", "door"),
    ("ağaç", "tree"),
    ("araba", "car"),
    ("yol", "road"),
    ("gökyüzü", "sky"),
    ("deniz", "sea"),
    ("dağ", "mountain"),
    ("orman", "forest"),
    ("şehir", "city"),
    ("sokak", "street"),
    ("kitap", "book"),
    ("sandalye", "chair"),
    ("lamba", "lamp"),
    ("ayna", "mirror"),
    ("duvar", "wall"),
    ("bahçe", "garden"),
    ("köprü", "bridge"),
    ("nehir", "river"),
    ("göl", "lake"),
    ("kale", "castle"),
    ("saray", "palace"),
    ("kulübe", "cabin"),
    ("mağara", "cave"),
    ("tepe", "hill"),
    ("vadi", "valley"),
    ("bulut", "cloud"),
    ("yağmur", "rain"),
    ("kar", "snow"),
    ("güneş", "sun"),
    ("ay", "moon"),
    ("yıldız", "stars"),
    ("çiçek", "flower"),
    ("çimen", "grass"),
    ("taş", "stone"),
    ("kaya", "rock"),
    ("kum", "sand"),
    ("adam", "man"),
    ("kadın", "woman"),
    ("çocuk", "child"),
    ("bebek", "baby"),
    ("yaşlı", "elderly"),
    ("genç", "young"),
    ("kız", "girl"),
    ("oğlan", "boy"),
    ("anne", "mother"),
    ("baba", "father"),
    ("kardeş", "sibling"),
    ("arkadaş", "friend"),
    ("düşman", "enemy"),
    ("sevgili", "lover"),
    ("kahraman", "hero"),
    ("kötü", "villain"),
    ("savaşçı", "warrior"),
    ("büyücü", "wizard"),
    ("kırmızı", "red"),
    ("mavi", "blue"),
    ("yeşil", "green"),
    ("sarı", "yellow"),
    ("siyah", "black"),
    ("beyaz", "white"),
    ("mor", "purple"),
    ("turuncu", "orange"),
    ("pembe", "pink"),
    ("gri", "gray"),
    ("kahverengi", "brown"),
    ("altın", "golden"),
    ("gümüş", "silver"),
    ("lacivert", "navy blue"),
    ("yürü", "walking"),
    ("koş", "running"),
    ("otur", "sitting"),
    ("bak", "looking"),
    ("düşün", "thinking"),
    ("gülümse", "smiling"),
    ("ağla", "crying"),
    ("konuş", "talking"),
    ("dinle", "listening"),
    ("uyu", "sleeping"),
    ("uyan", "waking"),
    ("bekle", "waiting"),
    ("ara", "searching"),
    ("saklan", "hiding"),
    ("kaç", "fleeing"),
    ("savaş", "fighting"),
    ("dans", "dancing"),
    ("atla", "jumping"),
    ("uç", "flying"),
    ("yüz", "swimming"),
    ("tırman", "climbing"),
    ("mutlu", "happy"),
    ("üzgün", "sad"),
    ("kızgın", "angry"),
    ("korku", "fearful"),
    ("şaşkın", "surprised"),
    ("heyecan", "excited"),
    ("endişe", "worried"),
    ("sakin", "calm"),
    ("yorgun", "tired"),
    ("umutsuz", "hopeless"),
    ("umutlu", "hopeful"),
    ("cesur", "brave"),
    ("korkak", "cowardly"),
    ("fırtına", "storm"),
    ("sis", "fog"),
    ("duman", "smoke"),
    ("alev", "flame"),
    ("buz", "ice"),
    ("pus", "mist"),
    ("toz", "dust"),
    ("rüzgar", "wind"),
    ("sel", "flood"),
    ("deprem", "earthquake"),
    ("ejderha", "dragon"),
    ("peri", "fairy"),
    ("cin", "genie"),
    ("canavar", "monster"),
    ("hayalet", "ghost"),
    ("vampir", "vampire"),
    ("kurt adam", "werewolf"),
    ("melek", "angel"),
    ("iblis", "demon"),
    ("büyü", "magic"),
    ("sihir", "spell"),
    ("lanet", "curse"),
    ("tılsım", "amulet"),
];

/// Object roots reported on the scene, glossed through [`TRANSLATIONS`].
pub static OBJECT_ROOTS: &[&str] = &[
    "ev", "oda", "masa", "pencere", "kapı", "ağaç", "araba", "yol", "gökyüzü", "deniz", "dağ",
    "orman", "şehir", "sokak", "kitap", "sandalye", "lamba", "ayna", "duvar", "bahçe", "köprü",
    "nehir", "göl", "kale", "saray", "kulübe", "mağara", "tepe", "vadi", "bulut", "yağmur", "kar",
    "güneş", "ay", "yıldız", "çiçek", "çimen", "taş", "kaya", "kum", "gemi", "tekne", "uçak",
    "tren", "bisiklet", "at", "kuş", "kedi", "köpek", "balık", "kılıç", "kalkan", "ok", "yay",
    "mızrak", "zırh", "taç", "mücevher", "hazine", "resim", "heykel", "müzik", "şarkı", "dans",
    "ateş", "alev", "duman", "su", "buz",
];

/// Negation-aware action cues.
pub static ACTIONS: &[Gloss] = &[
    Gloss {
        patterns: &["yürü", "adım", "ilerle", "gezin"],
        text: "walking slowly",
    },
    Gloss {
        patterns: &["koş", "kaç", "hızla", "acele"],
        text: "running fast",
    },
    Gloss {
        patterns: &["otur", "çökme", "yaslan"],
        text: "sitting down",
    },
    Gloss {
        patterns: &["ayakta", "dikil", "kalk"],
        text: "standing upright",
    },
    Gloss {
        patterns: &["bak", "izle", "gör", "seyre"],
        text: "looking intently",
    },
    Gloss {
        patterns: &["konuş", "söyle", "anlat", "fısılda"],
        text: "talking",
    },
    Gloss {
        patterns: &["ağla", "gözyaş", "hıçkır"],
        text: "crying with tears",
    },
    Gloss {
        patterns: &["gülümse", "gül", "kahkaha"],
        text: "smiling warmly",
    },
    Gloss {
        patterns: &["savaş", "dövüş", "vur", "saldır"],
        text: "fighting intensely",
    },
    Gloss {
        patterns: &["uyu", "uyukla", "rüya"],
        text: "sleeping peacefully",
    },
    Gloss {
        patterns: &["düşün", "hayal", "merak", "kafas"],
        text: "deep in thought",
    },
    Gloss {
        patterns: &["oku", "kitap", "gazete"],
        text: "reading carefully",
    },
    Gloss {
        patterns: &["yaz", "çiz", "kalem"],
        text: "writing",
    },
    Gloss {
        patterns: &["ye", "yemek", "içme"],
        text: "eating",
    },
    Gloss {
        patterns: &["dans", "oyna", "rakset"],
        text: "dancing gracefully",
    },
    Gloss {
        patterns: &["sarıl", "kucak", "tutun"],
        text: "embracing lovingly",
    },
];

/// Grammatical subjects; the first root found wins.
pub static SUBJECTS: &[(&str, &str)] = &[
    ("adam", "a man"),
    ("kadın", "a woman"),
    ("çocuk", "a child"),
    ("kız", "a girl"),
    ("oğlan", "a boy"),
    ("genç", "a young person"),
    ("yaşlı", "an elderly person"),
    ("anne", "a mother"),
    ("baba", "a father"),
    ("asker", "a soldier"),
    ("prenses", "a princess"),
    ("kral", "a king"),
    ("kraliçe", "a queen"),
    ("köylü", "a villager"),
    ("şövalye", "a knight"),
    ("büyücü", "a wizard"),
    ("cadı", "a witch"),
    ("hayalet", "a ghost"),
    ("canavar", "a monster"),
    ("ejderha", "a dragon"),
    ("peri", "a fairy"),
    ("kurt", "a wolf"),
    ("ayı", "a bear"),
    ("aslan", "a lion"),
    ("kartal", "an eagle"),
    ("at", "a horse"),
    ("kedi", "a cat"),
    ("köpek", "a dog"),
    ("kuş", "a bird"),
    ("denizci", "a sailor"),
    ("pilot", "a pilot"),
    ("doktor", "a doctor"),
    ("öğretmen", "a teacher"),
    ("ressam", "an artist"),
    ("müzisyen", "a musician"),
    ("yazar", "a writer"),
    ("şair", "a poet"),
    ("avcı", "a hunter"),
    ("balıkçı", "a fisherman"),
    ("çiftçi", "a farmer"),
    ("tüccar", "a merchant"),
    ("hırsız", "a thief"),
    ("dedektif", "a detective"),
    ("polis", "a police officer"),
    ("ninja", "a ninja"),
    ("samuray", "a samurai"),
    ("korsan", "a pirate"),
    ("robot", "a robot"),
    ("uzaylı", "an alien"),
    ("melek", "an angel"),
    ("şeytan", "a demon"),
    ("vampir", "a vampire"),
    ("zombi", "a zombie"),
    ("prens", "a prince"),
    ("kahraman", "a hero"),
    ("kötü adam", "a villain"),
    ("casus", "a spy"),
];

pub static CORE_ACTIONS: &[(&str, &str)] = &[
    ("yürü", "walking"),
    ("koş", "running"),
    ("atla", "jumping"),
    ("uç", "flying"),
    ("yüz", "swimming"),
    ("otur", "sitting"),
    ("yat", "lying down"),
    ("dur", "standing"),
    ("bekle", "waiting"),
    ("bak", "looking at"),
    ("izle", "watching"),
    ("gör", "seeing"),
    ("seyre", "observing"),
    ("tut", "holding"),
    ("al", "taking"),
    ("ver", "giving"),
    ("at", "throwing"),
    ("yakala", "catching"),
    ("aç", "opening"),
    ("kapa", "closing"),
    ("kır", "breaking"),
    ("yap", "making"),
    ("çiz", "drawing"),
    ("oku", "reading"),
    ("yaz", "writing"),
    ("dinle", "listening"),
    ("konuş", "talking"),
    ("bağır", "shouting"),
    ("fısılda", "whispering"),
    ("ağla", "crying"),
    ("gül", "laughing"),
    ("gülümse", "smiling"),
    ("savaş", "fighting"),
    ("vur", "hitting"),
    ("kes", "cutting"),
    ("öldür", "killing"),
    ("kurtar", "saving"),
    ("kaç", "escaping"),
    ("saklan", "hiding"),
    ("ara", "searching"),
    ("bul", "finding"),
    ("ye", "eating"),
    ("iç", "drinking"),
    ("pişir", "cooking"),
    ("uyu", "sleeping"),
    ("uyan", "waking up"),
    ("git", "going"),
    ("gel", "coming"),
    ("dön", "returning"),
    ("kal", "staying"),
    ("tırman", "climbing"),
    ("in", "descending"),
    ("düş", "falling"),
    ("kay", "sliding"),
    ("öp", "kissing"),
    ("sarıl", "hugging"),
    ("dokun", "touching"),
    ("it", "pushing"),
    ("çek", "pulling"),
    ("dans", "dancing"),
    ("şarkı söyle", "singing"),
    ("çal", "playing music"),
    ("oyna", "playing"),
];

pub static CORE_OBJECTS: &[(&str, &str)] = &[
    ("ev", "house"),
    ("oda", "room"),
    ("salon", "living room"),
    ("mutfak", "kitchen"),
    ("yatak odası", "bedroom"),
    ("bahçe", "garden"),
    ("sokak", "street"),
    ("yol", "road"),
    ("köprü", "bridge"),
    ("merdiven", "stairs"),
    ("orman", "forest"),
    ("ağaç", "tree"),
    ("çiçek", "flower"),
    ("çimen", "grass"),
    ("yaprak", "leaves"),
    ("dağ", "mountain"),
    ("tepe", "hill"),
    ("vadi", "valley"),
    ("mağara", "cave"),
    ("uçurum", "cliff"),
    ("deniz", "sea"),
    ("okyanus", "ocean"),
    ("göl", "lake"),
    ("nehir", "river"),
    ("şelale", "waterfall"),
    ("plaj", "beach"),
    ("kum", "sand"),
    ("dalga", "waves"),
    ("kayık", "boat"),
    ("gemi", "ship"),
    ("gökyüzü", "sky"),
    ("bulut", "cloud"),
    ("güneş", "sun"),
    ("ay", "moon"),
    ("yıldız", "stars"),
    ("yağmur", "rain"),
    ("kar", "snow"),
    ("fırtına", "storm"),
    ("şimşek", "lightning"),
    ("gökkuşağı", "rainbow"),
    ("kale", "castle"),
    ("saray", "palace"),
    ("kule", "tower"),
    ("köy", "village"),
    ("şehir", "city"),
    ("kilise", "church"),
    ("cami", "mosque"),
    ("tapınak", "temple"),
    ("mezarlık", "cemetery"),
    ("kılıç", "sword"),
    ("kalkan", "shield"),
    ("ok", "arrow"),
    ("yay", "bow"),
    ("mızrak", "spear"),
    ("kitap", "book"),
    ("kalem", "pen"),
    ("kağıt", "paper"),
    ("mektup", "letter"),
    ("harita", "map"),
    ("ayna", "mirror"),
    ("kapı", "door"),
    ("pencere", "window"),
    ("masa", "table"),
    ("sandalye", "chair"),
    ("yatak", "bed"),
    ("perde", "curtain"),
    ("mum", "candle"),
    ("lamba", "lamp"),
    ("ateş", "fire"),
    ("taç", "crown"),
    ("yüzük", "ring"),
    ("kolye", "necklace"),
    ("hazine", "treasure"),
    ("altın", "gold"),
    ("araba", "car"),
    ("tren", "train"),
    ("uçak", "airplane"),
    ("bisiklet", "bicycle"),
    ("motosiklet", "motorcycle"),
];
