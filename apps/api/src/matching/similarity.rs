//! Pairwise lexical similarity: TF-IDF weighted cosine over unigrams and
//! bigrams, with the corpus restricted to the two documents being compared.
//!
//! This captures phrasing overlap beyond the fixed skill vocabulary
//! (responsibilities, domain language). Term maps are ordered so the
//! floating-point accumulation order, and therefore the score, is identical
//! on every run.

use std::collections::BTreeMap;

use crate::matching::normalizer::NormalizedDocument;

/// Documents in the pairwise corpus.
const CORPUS_SIZE: f64 = 2.0;

/// Similarity between two normalized documents, in [0, 1].
/// Defined as 0.0 when either side is empty after normalization.
pub fn similarity(a: &NormalizedDocument, b: &NormalizedDocument) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let counts_a = term_counts(a.tokens());
    let counts_b = term_counts(b.tokens());

    let weights_a = weighted_vector(&counts_a, &counts_b);
    let weights_b = weighted_vector(&counts_b, &counts_a);

    cosine(&weights_a, &weights_b)
}

/// Unigram and bigram occurrence counts for one document.
fn term_counts(tokens: &[String]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    for pair in tokens.windows(2) {
        *counts.entry(format!("{} {}", pair[0], pair[1])).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF weights for one document against the two-document corpus.
///
/// tf = term count / total terms in the document.
/// idf = ln((n + 1) / (df + 1)) + 1, the smoothed form, with n = 2.
fn weighted_vector(
    own: &BTreeMap<String, usize>,
    other: &BTreeMap<String, usize>,
) -> BTreeMap<String, f64> {
    let total: usize = own.values().sum();
    if total == 0 {
        return BTreeMap::new();
    }

    own.iter()
        .map(|(term, count)| {
            let tf = *count as f64 / total as f64;
            let df = 1.0 + if other.contains_key(term) { 1.0 } else { 0.0 };
            let idf = ((CORPUS_SIZE + 1.0) / (df + 1.0)).ln() + 1.0;
            (term.clone(), tf * idf)
        })
        .collect()
}

fn cosine(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, wa)| b.get(term).map(|wb| wa * wb))
        .sum();
    let norm_a: f64 = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}
