//! Lexicon-based compound scorer.
//!
//! Walks the token stream once, applying intensity modifiers and a bounded
//! negation window, then normalizes the accumulated polarity into [-1, 1].

use crate::lexicon::Lexicon;
use crate::oracle::SentimentOracle;

/// Tokens after a negation that still get their polarity flipped.
const NEGATION_WINDOW: usize = 3;

/// Damping applied when a polarity is flipped by negation ("not great" is
/// negative, but less negative than "terrible").
const NEGATION_DAMPING: f64 = 0.8;

/// The bundled sentiment oracle.
#[derive(Debug, Clone)]
pub struct LexiconAnalyzer {
    lexicon: Lexicon,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    fn tokenize(text: &str) -> impl Iterator<Item = &str> {
        text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentOracle for LexiconAnalyzer {
    fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut scored_words = 0usize;
        let mut modifier = 1.0;
        let mut negated_tokens_left = 0usize;

        for token in Self::tokenize(text) {
            if self.lexicon.is_negation(token) {
                negated_tokens_left = NEGATION_WINDOW;
                continue;
            }

            if let Some(m) = self.lexicon.modifier(token) {
                modifier = m;
                continue;
            }

            if let Some(base) = self.lexicon.score(token) {
                let mut word_score = base * modifier;
                if negated_tokens_left > 0 {
                    word_score = -word_score * NEGATION_DAMPING;
                }
                total += word_score;
                scored_words += 1;
                modifier = 1.0;
            }

            negated_tokens_left = negated_tokens_left.saturating_sub(1);
        }

        if scored_words == 0 {
            return 0.0;
        }
        (total / scored_words as f64).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.score("this is amazing, love it") > 0.5);
    }

    #[test]
    fn test_negative_text() {
        let analyzer = LexiconAnalyzer::new();
        assert!(analyzer.score("terrible content, total trash") < -0.5);
    }

    #[test]
    fn test_empty_and_unknown_text_are_neutral() {
        let analyzer = LexiconAnalyzer::new();
        assert_eq!(analyzer.score(""), 0.0);
        assert_eq!(analyzer.score("   "), 0.0);
        assert_eq!(analyzer.score("the camera follows a dog"), 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let analyzer = LexiconAnalyzer::new();
        let plain = analyzer.score("great");
        let negated = analyzer.score("not great");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        // Damped, not a full mirror
        assert!(negated.abs() < plain.abs());
    }

    #[test]
    fn test_negation_window_expires() {
        let analyzer = LexiconAnalyzer::new();
        // "great" sits outside the 3-token window after "not"
        let score = analyzer.score("not that one thing over there great");
        assert!(score > 0.0);
    }

    #[test]
    fn test_modifier_intensifies() {
        let analyzer = LexiconAnalyzer::new();
        let plain = analyzer.score("good");
        let boosted = analyzer.score("really good");
        assert!(boosted > plain);
    }

    #[test]
    fn test_score_is_idempotent_and_bounded() {
        let analyzer = LexiconAnalyzer::new();
        let text = "extremely amazing incredible perfect masterpiece";
        let first = analyzer.score(text);
        let second = analyzer.score(text);
        assert_eq!(first, second);
        assert!((-1.0..=1.0).contains(&first));
    }

    #[test]
    fn test_shared_analyzer_is_idempotent() {
        let a = crate::shared_analyzer();
        let b = crate::shared_analyzer();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.score("nice"), b.score("nice"));
    }
}
