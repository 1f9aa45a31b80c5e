//! Suffix-stripping stemmer driven by [`ENGLISH_RULES`](super::rules::ENGLISH_RULES).

use super::rules::{contains_vowel, ends_with_collapsible_double, RuleCondition, SuffixRule, ENGLISH_RULES};
use super::traits::DEFAULT_MIN_STEM_LENGTH;

/// Rule-table stemmer.
#[derive(Debug, Clone, Copy)]
pub struct Stemmer {
    rules: &'static [SuffixRule],
    min_stem_length: usize,
}

impl Default for Stemmer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_STEM_LENGTH)
    }
}

impl Stemmer {
    /// Create an English stemmer. A `min_stem_length` of zero is treated as one.
    pub fn new(min_stem_length: usize) -> Self {
        Self::with_rules(ENGLISH_RULES, min_stem_length)
    }

    /// Create a stemmer over a custom, longest-suffix-first rule table.
    pub fn with_rules(rules: &'static [SuffixRule], min_stem_length: usize) -> Self {
        Self {
            rules,
            min_stem_length: min_stem_length.max(1),
        }
    }

    pub fn min_stem_length(&self) -> usize {
        self.min_stem_length
    }

    pub fn rules(&self) -> &'static [SuffixRule] {
        self.rules
    }

    /// Stem a word. The result is lowercase and never longer than the
    /// lowercased input.
    pub fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.chars().count() <= self.min_stem_length {
            return word;
        }

        let Some(rule) = self.rules.iter().find(|r| word.ends_with(r.suffix)) else {
            return word;
        };

        match self.apply(&word, rule) {
            Some(stem) => stem,
            None => word,
        }
    }

    fn apply(&self, word: &str, rule: &SuffixRule) -> Option<String> {
        let remainder = &word[..word.len() - rule.suffix.len()];
        let remainder_len = remainder.chars().count();
        if remainder_len < rule.min_remainder {
            return None;
        }
        if rule.condition == RuleCondition::ContainsVowel && !contains_vowel(remainder) {
            return None;
        }
        if remainder_len + rule.replacement.len() < self.min_stem_length {
            return None;
        }

        let mut stem = format!("{}{}", remainder, rule.replacement);
        if rule.condition == RuleCondition::ContainsVowel
            && ends_with_collapsible_double(&stem)
            && remainder_len > self.min_stem_length
        {
            stem.pop();
        }
        Some(stem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stemming() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.stem("running"), "run");
        assert_eq!(stemmer.stem("cats"), "cat");
        assert_eq!(stemmer.stem("played"), "play");
        assert_eq!(stemmer.stem("quickly"), "quick");
    }

    #[test]
    fn test_short_words_unchanged() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.stem(""), "");
        assert_eq!(stemmer.stem("a"), "a");
        assert_eq!(stemmer.stem("IS"), "is");
        assert_eq!(stemmer.stem("gas"), "gas");
    }

    #[test]
    fn test_guard_blocks_over_stemming() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.stem("ties"), "ties");
        assert_eq!(stemmer.stem("only"), "only");
        assert_eq!(stemmer.stem("sing"), "sing");
        assert_eq!(stemmer.stem("adding"), "add");
    }

    #[test]
    fn test_longest_match_wins() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.stem("caresses"), "caress");
        assert_eq!(stemmer.stem("kindness"), "kind");
        // "eed" is matched before "ed" and then guarded
        assert_eq!(stemmer.stem("feed"), "feed");
    }

    #[test]
    fn test_custom_min_length() {
        let stemmer = Stemmer::new(4);
        assert_eq!(stemmer.stem("cats"), "cats");
        assert_eq!(stemmer.stem("running"), "runn");
        assert_eq!(stemmer.stem("jumping"), "jump");
        assert_eq!(Stemmer::new(0).min_stem_length(), 1);
    }

    #[test]
    fn test_non_letters_are_deterministic() {
        let stemmer = Stemmer::default();
        assert_eq!(stemmer.stem("1990s"), "1990");
        assert_eq!(stemmer.stem("e-mails"), "e-mail");
        assert_eq!(stemmer.stem("!!!!"), "!!!!");
    }
}
