//! The built-in word list.

use rand::Rng;

/// Lower-case English words to play with, sorted so they can be searched.
pub const WORDS: &[&str] = &[
    "able", "about", "above", "accept", "across", "action", "active", "actor",
    "adult", "advice", "afraid", "agent", "agree", "ahead", "alarm", "album",
    "alive", "allow", "almost", "alone", "along", "amount", "angle", "angry",
    "animal", "answer", "anyone", "apple", "april", "area", "argue", "army",
    "around", "arrive", "art", "artist", "aspect", "attack", "author", "autumn",
    "avoid", "award", "baby", "back", "badge", "baker", "balance", "ball",
    "banana", "band", "bank", "basket", "battle", "beach", "bear", "beauty",
    "become", "bedroom", "before", "begin", "behind", "belief", "bell", "bench",
    "berry", "better", "beyond", "bicycle", "bird", "birthday", "black", "blanket",
    "blood", "board", "boat", "body", "bone", "book", "border", "bottle",
    "bottom", "brain", "branch", "bread", "breakfast", "bridge", "bright", "broken",
    "brother", "brush", "bucket", "budget", "build", "butter", "button", "cabin",
    "cable", "cake", "camera", "candle", "canvas", "captain", "carbon", "carpet",
    "castle", "cattle", "ceiling", "center", "chair", "chalk", "change", "cheese",
    "cherry", "chicken", "church", "circle", "city", "claim", "clock", "cloud",
    "coast", "coffee", "collar", "colony", "common", "copper", "corner", "cotton",
    "country", "cousin", "cover", "crayon", "cream", "credit", "crowd", "crystal",
    "cup", "curtain", "cushion", "dance", "danger", "daughter", "desert", "design",
    "dinner", "doctor", "dog", "dollar", "donkey", "dragon", "drawer", "dream",
    "driver", "eagle", "earth", "editor", "effort", "elbow", "engine", "escape",
    "evening", "expert", "fabric", "factory", "family", "farmer", "father", "feather",
    "fence", "field", "finger", "flower", "forest", "fortune", "friend", "frozen",
    "galaxy", "garden", "garlic", "giant", "ginger", "glass", "global", "glove",
    "golden", "grape", "guitar", "hammer", "harbor", "harvest", "helmet", "honey",
    "horse", "hunter", "island", "jacket", "jelly", "jungle", "kettle", "kitchen",
    "knife", "ladder", "lemon", "letter", "library", "lizard", "magnet", "market",
    "meadow", "mirror", "monkey", "morning", "mountain", "museum", "needle", "number",
    "ocean", "office", "orange", "oxygen", "paddle", "palace", "paper", "parrot",
    "pencil", "pepper", "pillow", "planet", "pocket", "potato", "puzzle", "quartz",
    "rabbit", "rainbow", "river", "rocket", "saddle", "salmon", "school", "shadow",
    "silver", "spider", "squirrel", "station", "summer", "sunset", "switch", "ticket",
    "tiger", "tomato", "travel", "turtle", "umbrella", "valley", "velvet", "village",
    "violin", "wagon", "walnut", "window", "winter", "wizard", "yellow", "zebra",
];

/// Returns true if `word` is in [`WORDS`].
pub fn contains(word: &str) -> bool {
    WORDS.binary_search(&word).is_ok()
}

/// Picks a word from [`WORDS`] at random.
pub fn random_word<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WORDS[rng.gen_range(0..WORDS.len())]
}
