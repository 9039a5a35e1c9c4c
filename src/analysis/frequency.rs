//! Word-frequency analysis
//!
//! Counts content words (lowercase, alphabetic, stopwords excluded) and
//! returns the top-N by count. Ties are broken by first occurrence in the
//! token stream, which keeps results deterministic across runs.

use crate::analysis::lexicon::Lexicon;
use crate::{AnalysisError, AnalysisResult};
use std::collections::HashMap;

/// One entry of a frequency ranking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    /// Lowercase alphabetic word
    pub word: String,

    /// Number of occurrences in the text
    pub count: usize,
}

/// Computes the top-N most frequent content words in the text
///
/// The text is lowercased and split at language-aware word boundaries;
/// tokens that are not entirely alphabetic or that are stopwords are
/// discarded before counting. The result is sorted by count descending,
/// ties by first occurrence, and truncated to `n` entries. Fewer than `n`
/// distinct words is a valid short result.
///
/// # Arguments
///
/// * `text` - The text to analyze
/// * `n` - Maximum number of entries to return; must be greater than zero
///
/// # Returns
///
/// * `Ok(Vec<WordCount>)` - Up to `n` entries, counts non-increasing
/// * `Err(AnalysisError::InvalidCount)` - `n` was zero
///
/// # Example
///
/// ```
/// use pagesift::top_words;
///
/// let top = top_words("the cat sat on the cat mat", 2).unwrap();
/// assert_eq!(top[0].word, "cat");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn top_words(text: &str, n: usize) -> AnalysisResult<Vec<WordCount>> {
    if n == 0 {
        return Err(AnalysisError::InvalidCount);
    }

    let lexicon = Lexicon::get();

    // count and first-occurrence position per word
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (position, word) in lexicon.content_words(text).into_iter().enumerate() {
        let entry = counts.entry(word).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    Ok(ranked
        .into_iter()
        .take(n)
        .map(|(word, (count, _))| WordCount { word, count })
        .collect())
}
