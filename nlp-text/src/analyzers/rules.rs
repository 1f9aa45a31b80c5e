//! English suffix rules.
//!
//! The table is ordered longest suffix first; the stemmer only ever considers
//! the first rule whose suffix matches.

/// Extra requirement a rule places on the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCondition {
    None,
    /// Remainder contains a vowel (`y` counts after the first letter).
    /// A doubled final consonant is collapsed afterwards.
    ContainsVowel,
}

/// One suffix-stripping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub replacement: &'static str,
    /// Minimum chars left after removing `suffix`.
    pub min_remainder: usize,
    pub condition: RuleCondition,
}

impl SuffixRule {
    const fn new(suffix: &'static str, replacement: &'static str, min_remainder: usize) -> Self {
        Self {
            suffix,
            replacement,
            min_remainder,
            condition: RuleCondition::None,
        }
    }

    const fn vowel(suffix: &'static str, min_remainder: usize) -> Self {
        Self {
            suffix,
            replacement: "",
            min_remainder,
            condition: RuleCondition::ContainsVowel,
        }
    }

    /// Rule that matches but leaves the word alone, shielding it from
    /// shorter rules.
    const fn keep(suffix: &'static str) -> Self {
        Self::new(suffix, suffix, 0)
    }

    pub fn is_protective(&self) -> bool {
        self.suffix == self.replacement
    }
}

pub static ENGLISH_RULES: &[SuffixRule] = &[
    SuffixRule::new("ness", "", 3),
    SuffixRule::new("ment", "", 3),
    SuffixRule::new("sses", "ss", 2),
    SuffixRule::new("ches", "ch", 1),
    SuffixRule::new("shes", "sh", 1),
    SuffixRule::new("ies", "y", 1),
    SuffixRule::new("eed", "ee", 3),
    SuffixRule::vowel("ing", 2),
    SuffixRule::new("xes", "x", 2),
    SuffixRule::vowel("ed", 2),
    SuffixRule::new("ly", "", 3),
    SuffixRule::keep("ss"),
    SuffixRule::keep("is"),
    SuffixRule::keep("us"),
    SuffixRule::new("s", "", 1),
];

pub(crate) fn contains_vowel(stem: &str) -> bool {
    stem.chars().enumerate().any(|(i, c)| {
        matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') || (c == 'y' && i > 0)
    })
}

/// Doubled final consonant that should collapse (`runn` -> `run`).
pub(crate) fn ends_with_collapsible_double(stem: &str) -> bool {
    let mut rev = stem.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(a), Some(b)) => {
            a == b
                && a.is_ascii_alphabetic()
                && !matches!(a, 'a' | 'e' | 'i' | 'o' | 'u' | 'y' | 'l' | 's' | 'z')
        }
        _ => false,
    }
}
