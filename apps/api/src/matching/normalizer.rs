//! Text normalization: lowercases raw text, folds known aliases into their
//! canonical skill spellings, strips noise characters, and drops stopwords.
//!
//! Normalization is a pure function over the read-only vocabulary tables.
//! Blank or unusable input produces an empty document, never an error;
//! callers treat an empty result as "no signal".

use std::collections::HashSet;
use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, MatchKind};

use crate::matching::vocabulary::SkillVocabulary;

/// A cleaned token sequence derived from one raw input document.
/// Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDocument {
    tokens: Vec<String>,
    text: String,
    source_len: usize,
}

impl NormalizedDocument {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Tokens joined with single spaces; the surface the extractor scans.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes of the raw input this document was derived from.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Alias-aware normalizer. Holds a leftmost-longest Aho-Corasick automaton
/// over every canonical name and alias, so overlapping aliases resolve to the
/// longest spelling and never double-substitute (the "js" inside "node.js"
/// loses to the full "node.js" pattern).
pub struct Normalizer {
    automaton: AhoCorasick,
    replacements: Vec<String>,
}

impl Normalizer {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self, aho_corasick::BuildError> {
        let mut patterns: Vec<String> = Vec::new();
        let mut replacements: Vec<String> = Vec::new();

        // Canonical spellings map to themselves; their patterns shield
        // embedded aliases from firing inside them.
        for entry in vocabulary.entries() {
            let canonical = entry.name.to_lowercase();
            patterns.push(canonical.clone());
            replacements.push(canonical);
        }
        for (alias, canonical) in vocabulary.alias_pairs() {
            let alias = alias.to_lowercase();
            let canonical = canonical.to_lowercase();
            if alias.is_empty() || alias == canonical {
                continue;
            }
            patterns.push(alias);
            replacements.push(canonical);
        }

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)?;

        Ok(Self {
            automaton,
            replacements,
        })
    }

    /// Normalizes raw text into a token document.
    ///
    /// Steps, in order: lowercase; canonicalize aliases; strip characters
    /// outside `[a-z0-9+#. ]`; collapse whitespace; drop stopwords and
    /// single-character tokens.
    pub fn normalize(&self, raw: &str) -> NormalizedDocument {
        let source_len = raw.len();
        if raw.trim().is_empty() {
            return NormalizedDocument {
                tokens: Vec::new(),
                text: String::new(),
                source_len,
            };
        }

        let lowered = raw.to_lowercase();
        let canonicalized = self.canonicalize(&lowered);

        let tokens: Vec<String> = fold_tokens(&canonicalized)
            .into_iter()
            .filter(|t| t.len() >= 2 && !STOPWORDS.contains(t.as_str()))
            .collect();
        let text = tokens.join(" ");

        NormalizedDocument {
            tokens,
            text,
            source_len,
        }
    }

    /// Replaces every boundary-delimited alias occurrence with its canonical
    /// spelling. Input must already be lowercased.
    fn canonicalize(&self, text: &str) -> String {
        let bytes = text.as_bytes();
        let mut out = String::with_capacity(text.len());
        let mut last_end = 0;

        for m in self.automaton.find_iter(text) {
            let bounded = (m.start() == 0 || !bytes[m.start() - 1].is_ascii_alphanumeric())
                && (m.end() == bytes.len() || !bytes[m.end()].is_ascii_alphanumeric());
            if !bounded {
                continue;
            }
            out.push_str(&text[last_end..m.start()]);
            out.push_str(&self.replacements[m.pattern().as_usize()]);
            last_end = m.end();
        }
        out.push_str(&text[last_end..]);
        out
    }
}

/// Lowercases, strips everything outside the token alphabet `[a-z0-9+#. ]`,
/// collapses whitespace, and trims dangling sentence periods from token ends
/// ("python." stays recognizable while "node.js" keeps its inner dot).
pub(crate) fn fold_tokens(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.') {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .map(|t| t.trim_matches('.'))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORD_LIST.iter().copied().collect());

/// English stopwords removed from normalized documents. Matches the stopword
/// filtering the similarity scorer's term space assumes.
const STOPWORD_LIST: &[&str] = &[
    "about", "above", "after", "again", "all", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "before", "being", "below", "between", "both", "but", "by", "can", "did",
    "do", "does", "doing", "down", "during", "each", "few", "for", "from", "further", "had",
    "has", "have", "having", "he", "her", "here", "hers", "him", "his", "how", "if", "in",
    "into", "is", "it", "its", "just", "me", "more", "most", "my", "no", "nor", "not", "now",
    "of", "off", "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
    "who", "whom", "why", "will", "with", "you", "your", "yours",
];
