//! Curated English word lists backing the rule-based morphology

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Base (dictionary) forms of verbs the rules recognize
pub static BASE_VERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "act", "add", "answer", "apply", "approach", "arrive", "ask", "assist", "bake", "be",
        "beat", "become", "beg", "begin", "believe", "bet", "bite", "bleed", "blow", "break",
        "bring", "build", "burn", "buy", "call", "care", "carry", "catch", "change", "chase",
        "clean", "climb", "close", "come", "compute", "cook", "cost", "crash", "crush", "cry",
        "cut", "dance", "deal", "decide", "despise", "destroy", "die", "dig", "discuss", "do",
        "draw", "dream", "drink", "drive", "drop", "eat", "edit", "educate", "end", "enjoy",
        "explain", "explode", "fall", "feed", "feel", "fetch", "fight", "fill", "find", "fish",
        "fix", "fly", "follow", "forget", "forgive", "freeze", "get", "give", "go", "grow",
        "guess", "hang", "happen", "hate", "have", "hear", "help", "hide", "hit", "hold",
        "hope", "hunt", "hurt", "insert", "jump", "keep", "kick", "kill", "kiss", "know",
        "laugh", "lead", "learn", "leave", "lend", "let", "lie", "like", "listen", "live",
        "loathe", "lobotomize", "look", "lose", "love", "make", "marry", "mean", "meet",
        "move", "munch", "name", "need", "offer", "open", "paint", "pay", "pick", "plan",
        "play", "please", "pop", "prepare", "produce", "pull", "push", "put", "rain", "read",
        "reckon", "rent", "require", "rest", "return", "ride", "ring", "rise", "run", "sail",
        "save", "say", "see", "seek", "sell", "send", "shake", "shine", "shoot", "shop",
        "shout", "show", "shut", "sing", "sink", "sit", "sleep", "smell", "smile", "speak",
        "spend", "stand", "start", "stay", "steal", "stink", "stop", "study", "swim", "take",
        "talk", "teach", "tear", "tell", "thank", "think", "throw", "touch", "translate",
        "travel", "try", "turn", "understand", "unleash", "use", "view", "visit", "wait",
        "wake", "walk", "want", "wash", "watch", "wear", "win", "wish", "work", "worry",
        "write",
    ] {
        set.insert(w);
    }
    set
});

/// Irregular verbs as (base, simple past)
pub const IRREGULAR_PAST: &[(&str, &str)] = &[
    ("be", "was"),
    ("beat", "beat"),
    ("become", "became"),
    ("begin", "began"),
    ("bet", "bet"),
    ("bite", "bit"),
    ("bleed", "bled"),
    ("blow", "blew"),
    ("break", "broke"),
    ("bring", "brought"),
    ("build", "built"),
    ("buy", "bought"),
    ("catch", "caught"),
    ("come", "came"),
    ("cost", "cost"),
    ("cut", "cut"),
    ("deal", "dealt"),
    ("dig", "dug"),
    ("do", "did"),
    ("draw", "drew"),
    ("drink", "drank"),
    ("drive", "drove"),
    ("eat", "ate"),
    ("fall", "fell"),
    ("feed", "fed"),
    ("feel", "felt"),
    ("fight", "fought"),
    ("find", "found"),
    ("fly", "flew"),
    ("forget", "forgot"),
    ("forgive", "forgave"),
    ("freeze", "froze"),
    ("get", "got"),
    ("give", "gave"),
    ("go", "went"),
    ("grow", "grew"),
    ("hang", "hung"),
    ("have", "had"),
    ("hear", "heard"),
    ("hide", "hid"),
    ("hit", "hit"),
    ("hold", "held"),
    ("hurt", "hurt"),
    ("keep", "kept"),
    ("know", "knew"),
    ("lead", "led"),
    ("leave", "left"),
    ("lend", "lent"),
    ("let", "let"),
    ("lose", "lost"),
    ("make", "made"),
    ("mean", "meant"),
    ("meet", "met"),
    ("pay", "paid"),
    ("put", "put"),
    ("read", "read"),
    ("ride", "rode"),
    ("ring", "rang"),
    ("rise", "rose"),
    ("run", "ran"),
    ("say", "said"),
    ("see", "saw"),
    ("seek", "sought"),
    ("sell", "sold"),
    ("send", "sent"),
    ("shake", "shook"),
    ("shine", "shone"),
    ("shoot", "shot"),
    ("shut", "shut"),
    ("sing", "sang"),
    ("sink", "sank"),
    ("sit", "sat"),
    ("sleep", "slept"),
    ("speak", "spoke"),
    ("spend", "spent"),
    ("stand", "stood"),
    ("steal", "stole"),
    ("stink", "stank"),
    ("swim", "swam"),
    ("take", "took"),
    ("teach", "taught"),
    ("tear", "tore"),
    ("tell", "told"),
    ("think", "thought"),
    ("throw", "threw"),
    ("understand", "understood"),
    ("wake", "woke"),
    ("wear", "wore"),
    ("win", "won"),
    ("write", "wrote"),
];

/// Past participles and other irregular forms that are not simple pasts
const IRREGULAR_EXTRA_FORMS: &[(&str, &str)] = &[
    ("were", "be"),
    ("been", "be"),
    ("begun", "begin"),
    ("bitten", "bite"),
    ("blown", "blow"),
    ("broken", "break"),
    ("done", "do"),
    ("drawn", "draw"),
    ("driven", "drive"),
    ("drunk", "drink"),
    ("eaten", "eat"),
    ("fallen", "fall"),
    ("flown", "fly"),
    ("forgotten", "forget"),
    ("frozen", "freeze"),
    ("given", "give"),
    ("gone", "go"),
    ("grown", "grow"),
    ("hidden", "hide"),
    ("known", "know"),
    ("ridden", "ride"),
    ("risen", "rise"),
    ("rung", "ring"),
    ("seen", "see"),
    ("shaken", "shake"),
    ("spoken", "speak"),
    ("stolen", "steal"),
    ("sung", "sing"),
    ("sunk", "sink"),
    ("swum", "swim"),
    ("taken", "take"),
    ("thrown", "throw"),
    ("torn", "tear"),
    ("woken", "wake"),
    ("worn", "wear"),
    ("written", "write"),
];

/// Every irregular inflected form mapped back to its base verb
pub static IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (base, past) in IRREGULAR_PAST {
        if base != past {
            map.insert(*past, *base);
        }
    }
    for (form, base) in IRREGULAR_EXTRA_FORMS {
        map.insert(*form, *base);
    }
    map
});

/// Irregular noun plurals as (singular, plural)
pub const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("person", "people"),
    ("mouse", "mice"),
    ("louse", "lice"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("goose", "geese"),
    ("ox", "oxen"),
    ("sheep", "sheep"),
    ("fish", "fish"),
    ("deer", "deer"),
    ("moose", "moose"),
    ("species", "species"),
    ("series", "series"),
    ("cactus", "cacti"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("loaf", "loaves"),
    ("wolf", "wolves"),
    ("half", "halves"),
    ("self", "selves"),
    ("shelf", "shelves"),
    ("thief", "thieves"),
    ("calf", "calves"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
];

/// Words ending in "s" that are not plurals
pub static NOT_PLURAL: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "is", "was", "has", "does", "this", "his", "hers", "its", "ours", "yours", "theirs",
        "us", "yes", "thus", "always", "sometimes", "perhaps", "news", "less", "unless",
        "across", "bus", "gas", "lens", "physics", "mathematics", "whereas", "christmas",
        "besides", "towards", "afterwards", "nowadays", "lgbtq+",
    ] {
        set.insert(w);
    }
    set
});

pub static PRONOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they", "them",
        "myself", "yourself", "himself", "herself", "itself", "ourselves", "yourselves",
        "themselves", "mine", "yours", "hers", "ours", "theirs", "what", "who", "whom",
        "which",
    ] {
        set.insert(w);
    }
    set
});

/// Possessive determiners (tagged as determiners, not pronouns)
pub static POSSESSIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in ["my", "your", "his", "its", "our", "their"] {
        set.insert(w);
    }
    set
});

pub static DETERMINERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "a", "an", "the", "this", "that", "these", "those", "many", "all", "some", "any",
        "every", "each", "few", "several", "much", "both", "either", "neither",
    ] {
        set.insert(w);
    }
    set
});

/// Question adverbs and interjections, collapsed into the particle bucket
pub static PARTICLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "how", "why", "when", "where", "hi", "hello", "hey", "sup", "bye", "goodbye", "oh",
        "well", "yes", "no", "please", "and", "or", "but", "nor", "so", "yet", "not",
    ] {
        set.insert(w);
    }
    set
});

pub static ADPOSITIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "in", "on", "at", "to", "from", "with", "without", "of", "for", "by", "about", "under",
        "over", "above", "below", "behind", "inside", "outside", "upon", "into", "onto",
        "off", "up", "down", "through", "between", "among", "because", "if", "than",
        "since", "until", "near", "across", "against", "during",
    ] {
        set.insert(w);
    }
    set
});

/// Copula, auxiliaries and modals
pub static AUXILIARIES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "is", "are", "am", "was", "were", "be", "been", "being", "will", "shall", "would",
        "should", "can", "could", "may", "might", "must", "do", "does", "did", "have", "has",
        "had",
    ] {
        set.insert(w);
    }
    set
});

pub static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "very", "too", "really", "so", "now", "often", "also", "always", "never", "ever",
        "again", "here", "there", "then", "soon", "fast", "just", "still", "already",
        "kinda", "somewhat", "more", "less", "most", "least", "quite", "almost", "only",
    ] {
        set.insert(w);
    }
    set
});

pub static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "cool", "good", "bad", "nice", "blue", "red", "green", "yellow", "black", "white",
        "brown", "angry", "happy", "sad", "new", "old", "big", "small", "little", "quick",
        "lazy", "fat", "hungry", "weak", "strong", "tasty", "yummy", "delicious", "stupid",
        "dumb", "awful", "terrible", "horrible", "incredible", "amazing", "spectacular",
        "disappointed", "broken", "destroyed", "wrong", "right", "smelly", "stinky", "gassy",
        "gay", "great", "silly", "ugly", "friendly", "lovely", "lonely", "holy", "democratic",
        "explosive", "correct", "incorrect", "quiet", "hot", "cold", "warm", "dark", "bright",
    ] {
        set.insert(w);
    }
    set
});

/// "-ing" words whose stem is a verb but which are normally nouns
pub static NOUN_ING: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "building", "painting", "wedding", "ceiling", "meeting", "ring", "string", "thing",
        "king", "wing", "spring", "morning", "evening", "nothing", "something", "anything",
        "everything", "pudding", "clothing", "feeling",
    ] {
        set.insert(w);
    }
    set
});

/// "-ly" words that are not adverbs
pub static NOT_ADVERB_LY: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let mut set = HashSet::new();
    for w in [
        "family", "fly", "reply", "supply", "apply", "ally", "belly", "jelly", "lily", "bully",
        "rely", "july", "italy", "holly", "rally", "assembly",
    ] {
        set.insert(w);
    }
    set
});
