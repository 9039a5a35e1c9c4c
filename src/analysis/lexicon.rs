//! Language resources for the analytics operations
//!
//! One place owns the English stopword set and the word/sentence
//! segmentation rules (UAX #29 boundaries). The resources are compiled in
//! and built once on first use, so initialization is idempotent and cannot
//! fail at runtime.

use std::collections::HashSet;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

/// English stopwords excluded from frequency and salience weighting
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am",
    "an", "and", "any", "are", "aren", "as", "at", "be", "because", "been",
    "before", "being", "below", "between", "both", "but", "by", "can",
    "couldn", "d", "did", "didn", "do", "does", "doesn", "doing", "don",
    "down", "during", "each", "few", "for", "from", "further", "had", "hadn",
    "has", "hasn", "have", "haven", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is",
    "isn", "it", "its", "itself", "just", "ll", "m", "ma", "me", "mightn",
    "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our",
    "ours", "ourselves", "out", "over", "own", "re", "s", "same", "shan",
    "she", "should", "shouldn", "so", "some", "such", "t", "than", "that",
    "the", "their", "theirs", "them", "themselves", "then", "there", "these",
    "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "won",
    "wouldn", "y", "you", "your", "yours", "yourself", "yourselves",
];

/// Shared language resources: stopwords plus segmentation rules
pub struct Lexicon {
    stopwords: HashSet<&'static str>,
}

impl Lexicon {
    /// Returns the process-wide lexicon, building it on first use
    pub fn get() -> &'static Lexicon {
        static LEXICON: OnceLock<Lexicon> = OnceLock::new();
        LEXICON.get_or_init(|| Lexicon {
            stopwords: STOP_WORDS.iter().copied().collect(),
        })
    }

    /// Whether a lowercased word is in the stopword set
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Splits text into words at UAX #29 word boundaries
    pub fn words<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.unicode_words()
    }

    /// Splits text into trimmed, non-empty sentences at UAX #29 sentence
    /// boundaries
    pub fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        text.unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Lowercase alphabetic content words of a sentence, stopwords removed
    ///
    /// This is the shared token rule for both analytics: tokens must be
    /// entirely alphabetic (numbers and mixed tokens are dropped) and not in
    /// the stopword set.
    pub fn content_words(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.words(&lowered)
            .filter(|w| w.chars().all(char::is_alphabetic))
            .filter(|w| !self.is_stopword(w))
            .map(str::to_string)
            .collect()
    }
}
