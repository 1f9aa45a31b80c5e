//! Word Tokenizer
//!
//! Splits text into lowercase word tokens. Punctuation is discarded and
//! apostrophes are resolved according to a [`ContractionPolicy`].
//!
//! Text is walked by extended grapheme cluster, so combining marks stay with
//! the letter they decorate (`cafe\u{301}` is one token, not `cafe`).

use unicode_segmentation::UnicodeSegmentation;

use super::traits::ContractionPolicy;

/// Fragments after an apostrophe that are dropped under `DropClitics`.
static ENGLISH_CLITICS: &[&str] = &["s", "t", "d", "m", "ll", "re", "ve"];

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cluster {
    Word,
    Apostrophe,
    Separator,
}

/// Classify a grapheme cluster by its base character.
fn classify(grapheme: &str) -> Cluster {
    match grapheme.chars().next() {
        Some(c) if is_apostrophe(c) => Cluster::Apostrophe,
        Some(c) if c.is_alphanumeric() => Cluster::Word,
        _ => Cluster::Separator,
    }
}

/// Word tokenizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tokenizer {
    policy: ContractionPolicy,
}

impl Tokenizer {
    pub fn new(policy: ContractionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ContractionPolicy {
        self.policy
    }

    /// Tokenize `text` into lowercase words in order of appearance.
    ///
    /// Every returned token is non-empty, each of its grapheme clusters starts
    /// with an alphanumeric character, and it is a substring of
    /// `text.to_lowercase()`.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let mut tokens = Vec::new();
        let mut fragment_start: Option<usize> = None;
        // a word already produced a token, so later clitics may be dropped
        let mut seen_first = false;

        for (idx, grapheme) in lowered.grapheme_indices(true) {
            match classify(grapheme) {
                Cluster::Word => {
                    fragment_start.get_or_insert(idx);
                }
                Cluster::Apostrophe => {
                    if let Some(start) = fragment_start.take() {
                        self.push_fragment(&lowered[start..idx], &mut seen_first, &mut tokens);
                    }
                }
                Cluster::Separator => {
                    if let Some(start) = fragment_start.take() {
                        self.push_fragment(&lowered[start..idx], &mut seen_first, &mut tokens);
                    }
                    seen_first = false;
                }
            }
        }
        if let Some(start) = fragment_start {
            self.push_fragment(&lowered[start..], &mut seen_first, &mut tokens);
        }

        tokens
    }

    fn push_fragment(&self, fragment: &str, seen_first: &mut bool, tokens: &mut Vec<String>) {
        if *seen_first && self.drops(fragment) {
            return;
        }
        *seen_first = true;
        tokens.push(fragment.to_string());
    }

    fn drops(&self, fragment: &str) -> bool {
        match self.policy {
            ContractionPolicy::DropClitics => ENGLISH_CLITICS.contains(&fragment),
            ContractionPolicy::Split => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        Tokenizer::default().tokenize(text)
    }

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(tokenize("Hello World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_contraction_drops_clitic() {
        assert_eq!(tokenize("who's on first?"), vec!["who", "on", "first"]);
        assert_eq!(tokenize("What's on second?"), vec!["what", "on", "second"]);
        assert_eq!(tokenize("I don't know"), vec!["i", "don", "know"]);
        assert_eq!(tokenize("they’re here"), vec!["they", "here"]);
    }

    #[test]
    fn test_non_clitic_fragments_are_kept() {
        assert_eq!(tokenize("five o'clock"), vec!["five", "o", "clock"]);
        assert_eq!(tokenize("rock'n'roll"), vec!["rock", "n", "roll"]);
    }

    #[test]
    fn test_quotes_and_possessive_plural() {
        assert_eq!(tokenize("'quoted' dogs'"), vec!["quoted", "dogs"]);
        // a leading fragment is kept even when it looks like a clitic
        assert_eq!(tokenize("'s"), vec!["s"]);
    }

    #[test]
    fn test_split_policy_keeps_everything() {
        let tokenizer = Tokenizer::new(ContractionPolicy::Split);
        assert_eq!(tokenizer.tokenize("who's there"), vec!["who", "s", "there"]);
    }

    #[test]
    fn test_punctuation_only_and_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ?!... ,, ''  ").is_empty());
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        assert_eq!(
            tokenize("Buffalo buffalo, BUFFALO!"),
            vec!["buffalo", "buffalo", "buffalo"]
        );
    }

    #[test]
    fn test_combining_marks_stay_in_word() {
        assert_eq!(
            tokenize("nai\u{0308}ve cafe\u{0301}"),
            vec!["nai\u{0308}ve", "cafe\u{0301}"]
        );
        assert_eq!(tokenize("na\u{00ef}ve caf\u{00e9}"), vec!["na\u{00ef}ve", "caf\u{00e9}"]);
        // a mark with no base letter is not a word
        assert_eq!(tokenize("\u{0301} ok"), vec!["ok"]);
        // clitic detection still applies after a decomposed letter
        assert_eq!(tokenize("Jose\u{0301}'s"), vec!["jose\u{0301}"]);
    }

    #[test]
    fn test_non_ascii_case_variants() {
        // lowercasing is not a case fold: these variants tokenize differently
        assert_eq!(tokenize("straße"), vec!["straße"]);
        assert_eq!(tokenize("STRASSE"), vec!["strasse"]);
        assert_eq!(tokenize("οδος's"), vec!["οδος"]);
        assert_eq!(tokenize("ΟΔΟΣ'S"), vec!["οδοσ"]);
        // Latin-1 letters without ß round-trip
        assert_eq!(tokenize("ÉLAN Über"), tokenize("élan über"));
    }

    #[test]
    fn test_digits_and_unicode_letters() {
        assert_eq!(tokenize("Route 66, café-au-lait"), vec!["route", "66", "café", "au", "lait"]);
    }
}
