//! Polarity lexicon for short-form video comments.
//!
//! Word scores, intensity modifiers, and negation terms. Scores are in
//! [-1, 1]; modifiers are multipliers applied to the next sentiment word.

use std::collections::HashMap;

/// Strongly positive terms (0.7 to 1.0).
const STRONG_POSITIVE: &[(&str, f64)] = &[
    ("amazing", 0.8),
    ("awesome", 0.75),
    ("beautiful", 0.75),
    ("best", 0.8),
    ("brilliant", 0.8),
    ("excellent", 0.8),
    ("fantastic", 0.8),
    ("fire", 0.8),
    ("flawless", 0.85),
    ("gorgeous", 0.8),
    ("great", 0.7),
    ("hilarious", 0.75),
    ("incredible", 0.85),
    ("legend", 0.75),
    ("legendary", 0.8),
    ("love", 0.7),
    ("loved", 0.7),
    ("masterpiece", 0.9),
    ("obsessed", 0.7),
    ("perfect", 0.85),
    ("perfection", 0.85),
    ("phenomenal", 0.85),
    ("queen", 0.7),
    ("slay", 0.75),
    ("stunning", 0.8),
    ("talented", 0.7),
    ("wholesome", 0.7),
    ("wonderful", 0.75),
];

/// Moderately positive terms (0.3 to 0.6).
const MODERATE_POSITIVE: &[(&str, f64)] = &[
    ("adorable", 0.6),
    ("cool", 0.4),
    ("cute", 0.55),
    ("enjoyed", 0.5),
    ("fun", 0.5),
    ("funny", 0.55),
    ("good", 0.5),
    ("happy", 0.55),
    ("helpful", 0.5),
    ("impressive", 0.6),
    ("interesting", 0.35),
    ("like", 0.35),
    ("liked", 0.4),
    ("lol", 0.3),
    ("nice", 0.45),
    ("relatable", 0.4),
    ("smooth", 0.4),
    ("solid", 0.4),
    ("sweet", 0.45),
    ("thanks", 0.45),
    ("underrated", 0.5),
    ("vibes", 0.35),
    ("win", 0.5),
    ("wow", 0.4),
];

/// Strongly negative terms (-0.7 to -1.0).
const STRONG_NEGATIVE: &[(&str, f64)] = &[
    ("awful", -0.8),
    ("cancelled", -0.7),
    ("cringe", -0.7),
    ("disgusting", -0.85),
    ("disaster", -0.85),
    ("dreadful", -0.8),
    ("fake", -0.7),
    ("fraud", -0.9),
    ("garbage", -0.8),
    ("gross", -0.7),
    ("hate", -0.75),
    ("hated", -0.75),
    ("horrible", -0.85),
    ("pathetic", -0.8),
    ("scam", -0.9),
    ("terrible", -0.8),
    ("trash", -0.8),
    ("unwatchable", -0.85),
    ("worst", -0.85),
];

/// Moderately negative terms (-0.3 to -0.6).
const MODERATE_NEGATIVE: &[(&str, f64)] = &[
    ("annoying", -0.55),
    ("bad", -0.5),
    ("boring", -0.55),
    ("cheap", -0.4),
    ("confusing", -0.4),
    ("copied", -0.45),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("dislike", -0.5),
    ("dumb", -0.55),
    ("lame", -0.5),
    ("loud", -0.3),
    ("mid", -0.4),
    ("overrated", -0.5),
    ("pointless", -0.55),
    ("sad", -0.4),
    ("staged", -0.45),
    ("stupid", -0.6),
    ("ugly", -0.55),
    ("weird", -0.3),
    ("wrong", -0.4),
];

/// Intensity modifiers: multiplier applied to the next sentiment word.
const MODIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.6),
    ("barely", 0.6),
    ("completely", 1.5),
    ("extremely", 1.8),
    ("highly", 1.4),
    ("incredibly", 1.7),
    ("kinda", 0.8),
    ("little", 0.7),
    ("maybe", 0.8),
    ("pretty", 1.2),
    ("quite", 1.2),
    ("really", 1.4),
    ("slightly", 0.7),
    ("so", 1.3),
    ("somewhat", 0.8),
    ("super", 1.5),
    ("totally", 1.4),
    ("very", 1.5),
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nobody", "nothing", "nowhere", "aint", "ain't", "cant",
    "can't", "couldnt", "couldn't", "didnt", "didn't", "doesnt", "doesn't", "dont", "don't",
    "hasnt", "hasn't", "havent", "haven't", "isnt", "isn't", "shouldnt", "shouldn't", "wasnt",
    "wasn't", "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't",
];

/// Case-insensitive word polarity lookup.
#[derive(Debug, Clone)]
pub struct Lexicon {
    scores: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
}

impl Lexicon {
    pub fn new() -> Self {
        let scores = STRONG_POSITIVE
            .iter()
            .chain(MODERATE_POSITIVE)
            .chain(STRONG_NEGATIVE)
            .chain(MODERATE_NEGATIVE)
            .copied()
            .collect();
        let modifiers = MODIFIERS.iter().copied().collect();
        Self { scores, modifiers }
    }

    /// Polarity of a word, if the lexicon knows it.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.scores.get(word.to_lowercase().as_str()).copied()
    }

    /// Intensity multiplier for a modifier word.
    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word.to_lowercase().as_str()).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        NEGATIONS.contains(&lower.as_str())
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
