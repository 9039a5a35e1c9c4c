//! Extractive summarization by latent-semantic salience
//!
//! Sentences are ranked with the LSA approach: a term-by-sentence frequency
//! matrix over content words is factored with a singular value decomposition,
//! and each sentence is scored by the length of its projection across the
//! weighted singular components, `sqrt(sum_i (sigma_i * v_t[i][j])^2)`. The
//! top-k sentences by score form the summary, emitted in their original
//! document order.

use crate::analysis::lexicon::Lexicon;
use crate::{AnalysisError, AnalysisResult};
use nalgebra::DMatrix;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Produces an extractive summary of at most `k` sentences
///
/// The text is segmented at language-aware sentence boundaries. When the
/// text has `k` or fewer sentences, all of them are returned. Otherwise the
/// `k` most salient sentences are selected by the SVD ranking and joined in
/// document order with a single space.
///
/// # Arguments
///
/// * `text` - The text to summarize
/// * `k` - Number of sentences requested; must be greater than zero
///
/// # Returns
///
/// * `Ok(String)` - The summary
/// * `Err(AnalysisError::InvalidCount)` - `k` was zero
/// * `Err(AnalysisError::EmptyText)` - no sentences found in the text
pub fn summarize(text: &str, k: usize) -> AnalysisResult<String> {
    if k == 0 {
        return Err(AnalysisError::InvalidCount);
    }

    let lexicon = Lexicon::get();
    let sentences = lexicon.sentences(text);

    if sentences.is_empty() {
        return Err(AnalysisError::EmptyText);
    }

    if sentences.len() <= k {
        return Ok(sentences.join(" "));
    }

    let selected = rank_sentences(&sentences, k, lexicon);

    Ok(selected
        .iter()
        .map(|&j| sentences[j])
        .collect::<Vec<_>>()
        .join(" "))
}

/// Selects the indices of the `k` most salient sentences, sorted ascending
fn rank_sentences(sentences: &[&str], k: usize, lexicon: &Lexicon) -> Vec<usize> {
    // Assign an id to each distinct content word and record the term ids of
    // every sentence.
    let mut term_ids: HashMap<String, usize> = HashMap::new();
    let mut sentence_terms: Vec<Vec<usize>> = Vec::with_capacity(sentences.len());

    for sentence in sentences {
        let mut ids = Vec::new();
        for word in lexicon.content_words(sentence) {
            let next_id = term_ids.len();
            let id = *term_ids.entry(word).or_insert(next_id);
            ids.push(id);
        }
        sentence_terms.push(ids);
    }

    // No content words at all (e.g. every token is a stopword): salience is
    // undefined, fall back to document order.
    if term_ids.is_empty() {
        return (0..k).collect();
    }

    // Term-by-sentence frequency matrix.
    let mut matrix = DMatrix::<f64>::zeros(term_ids.len(), sentences.len());
    for (j, ids) in sentence_terms.iter().enumerate() {
        for &i in ids {
            matrix[(i, j)] += 1.0;
        }
    }

    let svd = matrix.svd(false, true);
    let Some(v_t) = svd.v_t else {
        return (0..k).collect();
    };
    let sigma = svd.singular_values;

    // Score each sentence across all singular triplets.
    let mut scores: Vec<(usize, f64)> = (0..sentences.len())
        .map(|j| {
            let mut sum = 0.0;
            for i in 0..sigma.len() {
                let component = sigma[i] * v_t[(i, j)];
                sum += component * component;
            }
            (j, sum.sqrt())
        })
        .collect();

    // Highest salience first; equal scores go to the earlier sentence.
    scores.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut selected: Vec<usize> = scores.into_iter().take(k).map(|(j, _)| j).collect();
    selected.sort_unstable();
    selected
}
