//! Valence tables. Word scores are on a -4..4 scale.

pub(super) const VALENCES: &[(&str, f64)] = &[
    // positive
    ("love", 3.2),
    ("loved", 2.9),
    ("loves", 2.7),
    ("lovely", 2.8),
    ("like", 1.5),
    ("liked", 1.8),
    ("likes", 1.8),
    ("good", 1.9),
    ("great", 3.1),
    ("awesome", 3.1),
    ("amazing", 2.8),
    ("excellent", 2.7),
    ("fantastic", 2.6),
    ("wonderful", 2.7),
    ("brilliant", 2.8),
    ("perfect", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("cool", 1.3),
    ("fun", 2.3),
    ("funny", 1.9),
    ("happy", 2.7),
    ("glad", 2.0),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("beautiful", 2.9),
    ("helpful", 1.8),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("agree", 1.5),
    ("win", 2.8),
    ("won", 2.7),
    ("winning", 2.4),
    ("success", 2.7),
    ("successful", 2.8),
    ("interesting", 1.7),
    ("impressive", 2.3),
    ("recommend", 1.5),
    ("support", 1.7),
    ("safe", 1.9),
    ("easy", 1.9),
    ("favorite", 2.0),
    ("hope", 1.9),
    ("hopefully", 1.7),
    ("proud", 2.1),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("yes", 1.7),
    ("lol", 1.8),
    ("haha", 2.0),
    ("wow", 2.8),
    ("solid", 1.5),
    ("clean", 1.7),
    ("fine", 0.8),
    ("ok", 1.2),
    ("okay", 0.9),
    ("useful", 1.9),
    ("respect", 2.1),
    ("fair", 1.3),
    ("kind", 2.4),
    ("care", 2.2),
    ("smart", 1.7),
    ("clever", 2.0),
    ("worth", 0.9),
    ("improve", 1.9),
    ("improved", 2.1),
    ("fixed", 0.7),
    ("congrats", 2.4),
    ("congratulations", 2.9),
    ("lucky", 1.8),
    ("free", 2.3),
    ("welcome", 2.0),
    ("peace", 2.5),
    ("trust", 2.3),
    ("true", 2.1),
    ("strong", 2.3),
    // negative
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("stupid", -2.4),
    ("dumb", -2.3),
    ("idiot", -2.3),
    ("ugly", -2.3),
    ("sad", -2.1),
    ("angry", -2.3),
    ("annoying", -1.7),
    ("annoyed", -1.6),
    ("boring", -1.3),
    ("broken", -2.1),
    ("bug", -1.1),
    ("crap", -1.6),
    ("shit", -2.6),
    ("sucks", -1.5),
    ("suck", -1.9),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("wrong", -2.1),
    ("problem", -1.7),
    ("problems", -1.7),
    ("issue", -0.6),
    ("useless", -1.8),
    ("waste", -1.8),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("pathetic", -2.7),
    ("ridiculous", -1.5),
    ("disgusting", -2.4),
    ("pain", -2.3),
    ("hurt", -2.4),
    ("kill", -3.7),
    ("killed", -3.5),
    ("dead", -3.3),
    ("die", -2.9),
    ("fear", -2.2),
    ("scared", -1.9),
    ("afraid", -2.0),
    ("worried", -1.2),
    ("worry", -1.9),
    ("lose", -1.7),
    ("lost", -1.3),
    ("loss", -1.3),
    ("sorry", -0.3),
    ("no", -1.2),
    ("unfortunately", -1.4),
    ("cry", -2.1),
    ("lies", -1.8),
    ("liar", -2.8),
    ("scam", -2.3),
    ("fraud", -2.8),
    ("toxic", -2.4),
    ("racist", -3.1),
    ("war", -2.9),
    ("attack", -2.1),
    ("mess", -1.5),
    ("lame", -1.8),
    ("weak", -1.9),
    ("sick", -2.3),
    ("tired", -1.9),
    ("confused", -1.3),
    ("hell", -3.6),
    ("damn", -1.7),
    ("ban", -2.6),
    ("banned", -2.0),
    ("trash", -2.7),
    ("garbage", -2.3),
    ("nonsense", -1.7),
    ("rude", -2.0),
    ("evil", -3.4),
    ("danger", -2.4),
    ("dangerous", -2.1),
    ("crisis", -3.1),
    ("risk", -1.1),
    ("miss", -0.6),
    ("missed", -1.2),
];

/// Words that scale the next sentiment word up or down.
pub(super) const BOOSTERS: &[(&str, f64)] = &[
    ("absolutely", B_INCR),
    ("amazingly", B_INCR),
    ("completely", B_INCR),
    ("deeply", B_INCR),
    ("enormously", B_INCR),
    ("entirely", B_INCR),
    ("especially", B_INCR),
    ("extremely", B_INCR),
    ("fully", B_INCR),
    ("greatly", B_INCR),
    ("highly", B_INCR),
    ("hugely", B_INCR),
    ("incredibly", B_INCR),
    ("really", B_INCR),
    ("so", B_INCR),
    ("super", B_INCR),
    ("totally", B_INCR),
    ("truly", B_INCR),
    ("very", B_INCR),
    ("barely", B_DECR),
    ("hardly", B_DECR),
    ("kinda", B_DECR),
    ("less", B_DECR),
    ("little", B_DECR),
    ("marginally", B_DECR),
    ("partly", B_DECR),
    ("slightly", B_DECR),
    ("somewhat", B_DECR),
    ("sorta", B_DECR),
];

pub(super) const NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "none", "nope", "nor",
    "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont", "wouldnt",
    "rarely", "seldom", "despite",
];

pub(super) const B_INCR: f64 = 0.293;
pub(super) const B_DECR: f64 = -0.293;
