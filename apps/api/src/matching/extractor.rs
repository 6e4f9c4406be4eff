//! Skill extraction: exact, word-boundary matches of vocabulary entries
//! against normalized text. Presence is recorded, not frequency.

use std::collections::BTreeSet;

use regex::{RegexSet, RegexSetBuilder};

use crate::matching::normalizer::{fold_tokens, NormalizedDocument};
use crate::matching::vocabulary::SkillVocabulary;

/// Canonical skill names found in one document. Ordered set; duplicates are
/// impossible by construction.
pub type ExtractedSkillSet = BTreeSet<String>;

/// Compiled word-boundary patterns for every vocabulary entry.
///
/// Pattern construction folds the canonical name through the same token
/// charset as document normalization, so entries like "scikit-learn" match
/// their normalized form. Internal spaces in multi-word entries match one or
/// more whitespace characters. Boundaries are `(?:^|\s)` / `(?:\s|$)` rather
/// than `\b`, because the token alphabet keeps `+`, `#` and `.` ("c++" has no
/// word boundary after the final plus).
pub struct SkillExtractor {
    patterns: RegexSet,
    names: Vec<String>,
}

impl SkillExtractor {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self, regex::Error> {
        let mut sources = Vec::with_capacity(vocabulary.len());
        let mut names = Vec::with_capacity(vocabulary.len());

        for entry in vocabulary.entries() {
            let folded = fold_tokens(&entry.name).join(" ");
            let body = regex::escape(&folded).replace(' ', r"\s+");
            sources.push(format!(r"(?:^|\s){body}(?:\s|$)"));
            names.push(entry.name.clone());
        }

        let patterns = RegexSetBuilder::new(&sources)
            .case_insensitive(true)
            .build()?;

        Ok(Self { patterns, names })
    }

    /// Collects the canonical names of every vocabulary entry present in the
    /// document. Same text always yields the same set.
    pub fn extract(&self, doc: &NormalizedDocument) -> ExtractedSkillSet {
        if doc.is_empty() {
            return ExtractedSkillSet::new();
        }
        self.patterns
            .matches(doc.text())
            .iter()
            .map(|idx| self.names[idx].clone())
            .collect()
    }
}
