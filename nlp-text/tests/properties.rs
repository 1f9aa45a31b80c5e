//! Property tests for the tokenizer and stemmer.

use nlp_text::{stem, tokenize, ContractionPolicy, Stemmer, Tokenizer, DEFAULT_MIN_STEM_LENGTH};
use proptest::prelude::*;
use rayon::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn tokens_are_substrings_of_lowercased_text(text in "\\PC*") {
        let lowered = text.to_lowercase();
        for token in tokenize(&text) {
            prop_assert!(lowered.contains(&token), "{token:?} not in {lowered:?}");
        }
    }

    #[test]
    fn tokens_are_clean(text in "\\PC*") {
        for policy in [ContractionPolicy::DropClitics, ContractionPolicy::Split] {
            for token in Tokenizer::new(policy).tokenize(&text) {
                prop_assert!(!token.is_empty());
                // combining marks may follow a letter, never start a cluster
                prop_assert!(
                    token
                        .graphemes(true)
                        .all(|g| g.chars().next().is_some_and(char::is_alphanumeric)),
                    "{token:?}"
                );
                prop_assert_eq!(token.to_lowercase(), token.clone());
            }
        }
    }

    #[test]
    // Letters whose upper and lower forms map one to one. `ß`, final sigma and
    // similar letters change under uppercasing and are pinned by unit tests.
    fn tokenize_ignores_case(text in "[a-zA-Z0-9à-öø-þÀ-ÖØ-Þ ,.?!'\\n]{0,64}") {
        prop_assert_eq!(tokenize(&text), tokenize(&text.to_uppercase()));
        prop_assert_eq!(tokenize(&text), tokenize(&text.to_lowercase()));
    }

    #[test]
    fn tokenize_is_deterministic(text in "\\PC*") {
        prop_assert_eq!(tokenize(&text), tokenize(&text));
    }

    #[test]
    fn stem_never_grows(word in "\\PC{0,24}") {
        let stemmed = stem(&word);
        prop_assert!(stemmed.len() <= word.to_lowercase().len());
        prop_assert_eq!(stemmed.to_lowercase(), stemmed.clone());
    }

    #[test]
    fn stem_is_deterministic(word in "[a-zA-Z]{0,16}") {
        prop_assert_eq!(stem(&word), stem(&word));
    }

    #[test]
    fn short_words_only_lowercased(word in "[a-zA-Z]{0,3}") {
        prop_assert_eq!(stem(&word), word.to_lowercase());
    }

    #[test]
    fn stems_respect_min_length(word in "[a-z]{4,16}", min in 1usize..6) {
        let stemmed = Stemmer::new(min).stem(&word);
        prop_assert!(stemmed.chars().count() >= min.min(word.chars().count()));
    }
}

#[test]
fn default_min_length_is_three() {
    assert_eq!(DEFAULT_MIN_STEM_LENGTH, 3);
    assert_eq!(Stemmer::default().min_stem_length(), 3);
}

#[test]
fn concurrent_callers_agree() {
    let text = "Who's on first? What's on second? I don't know's on third.";
    let expected = tokenize(text);
    let results: Vec<Vec<String>> = (0..256).into_par_iter().map(|_| tokenize(text)).collect();
    assert!(results.iter().all(|tokens| *tokens == expected));

    let stems: Vec<String> = (0..256).into_par_iter().map(|_| stem("running")).collect();
    assert!(stems.iter().all(|s| s == "run"));
}
