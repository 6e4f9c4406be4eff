//! ATS scoring engine: combines skill-set overlap with lexical similarity
//! into one normalized compatibility score.
//!
//! The engine owns the fully built normalizer and extractor and is immutable
//! after construction. Scoring is a pure function of the two input texts and
//! the vocabulary: no interior mutability, safe to call concurrently.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::matching::extractor::{ExtractedSkillSet, SkillExtractor};
use crate::matching::normalizer::Normalizer;
use crate::matching::similarity::similarity;
use crate::matching::vocabulary::{SkillCategory, SkillVocabulary};

/// Weight on skill-set overlap in the blended policy.
pub const SKILL_WEIGHT: f64 = 0.7;
/// Weight on lexical similarity in the blended policy.
pub const SIMILARITY_WEIGHT: f64 = 0.3;

/// Named scoring policy. `Blended` is the canonical pipeline; the pure
/// variants make single-signal scoring a selectable configuration rather
/// than a separate code path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    #[default]
    Blended,
    SkillOnly,
    SimilarityOnly,
}

impl ScoringPolicy {
    /// (skill weight, similarity weight); each pair sums to 1.
    pub fn weights(self) -> (f64, f64) {
        match self {
            ScoringPolicy::Blended => (SKILL_WEIGHT, SIMILARITY_WEIGHT),
            ScoringPolicy::SkillOnly => (1.0, 0.0),
            ScoringPolicy::SimilarityOnly => (0.0, 1.0),
        }
    }
}

impl std::str::FromStr for ScoringPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blended" => Ok(ScoringPolicy::Blended),
            "skill-only" => Ok(ScoringPolicy::SkillOnly),
            "similarity-only" => Ok(ScoringPolicy::SimilarityOnly),
            other => Err(format!(
                "unknown scoring policy '{other}' (expected blended, skill-only or similarity-only)"
            )),
        }
    }
}

/// Engine construction failures. These are startup faults; scoring itself
/// cannot fail.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("skill vocabulary is empty")]
    EmptyVocabulary,

    #[error("failed to compile alias table: {0}")]
    AliasTable(#[from] aho_corasick::BuildError),

    #[error("failed to compile skill patterns: {0}")]
    SkillPatterns(#[from] regex::Error),
}

/// Matched and missing skills within one vocabulary category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySlice {
    pub category: SkillCategory,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Outcome of comparing one résumé against one job description.
/// Created once per comparison; immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Normalized compatibility score in [0, 100], rounded to a whole value.
    pub score: f64,
    /// Job-required skills present in the résumé, in vocabulary order.
    pub matched_skills: Vec<String>,
    /// Job-required skills absent from the résumé, in vocabulary order.
    pub missing_skills: Vec<String>,
    pub total_required_skills: usize,
    /// Fraction of job-required skills covered, in [0, 1].
    pub skill_component: f64,
    /// Lexical similarity between the documents, in [0, 1].
    pub similarity_component: f64,
    /// Per-category gap breakdown, only for categories the job touches.
    pub category_breakdown: Vec<CategorySlice>,
}

/// The scoring engine. Holds the read-only vocabulary plus the normalizer
/// and extractor compiled from it.
pub struct AtsEngine {
    vocabulary: SkillVocabulary,
    normalizer: Normalizer,
    extractor: SkillExtractor,
    policy: ScoringPolicy,
}

impl AtsEngine {
    pub fn new(vocabulary: SkillVocabulary, policy: ScoringPolicy) -> Result<Self, EngineError> {
        if vocabulary.is_empty() {
            return Err(EngineError::EmptyVocabulary);
        }
        let normalizer = Normalizer::new(&vocabulary)?;
        let extractor = SkillExtractor::new(&vocabulary)?;
        Ok(Self {
            vocabulary,
            normalizer,
            extractor,
            policy,
        })
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Scores a résumé against a job description.
    ///
    /// Pipeline: normalize both texts, extract both skill sets, intersect
    /// against the job's requirements, blend set overlap with lexical
    /// similarity under the configured policy, round to a whole score.
    /// A job description with no recognized skill falls back to the
    /// similarity signal alone and reports a zero skill component.
    pub fn score(&self, resume_text: &str, jd_text: &str) -> MatchResult {
        let resume_doc = self.normalizer.normalize(resume_text);
        let jd_doc = self.normalizer.normalize(jd_text);
        tracing::debug!(
            resume_len = resume_doc.source_len(),
            jd_len = jd_doc.source_len(),
            "scoring resume against job description"
        );

        let resume_skills = self.extractor.extract(&resume_doc);
        let jd_skills = self.extractor.extract(&jd_doc);

        let (matched_skills, missing_skills) = self.split_by_coverage(&resume_skills, &jd_skills);
        let total_required_skills = jd_skills.len();

        let skill_component = if total_required_skills > 0 {
            matched_skills.len() as f64 / total_required_skills as f64
        } else {
            0.0
        };
        let similarity_component = similarity(&resume_doc, &jd_doc);

        let score = if total_required_skills == 0 {
            (similarity_component * 100.0).round()
        } else {
            let (skill_w, sim_w) = self.policy.weights();
            ((skill_w * skill_component + sim_w * similarity_component) * 100.0).round()
        };

        let category_breakdown = self.breakdown(&matched_skills, &missing_skills);

        MatchResult {
            score,
            matched_skills,
            missing_skills,
            total_required_skills,
            skill_component,
            similarity_component,
            category_breakdown,
        }
    }

    /// Splits the job's required skills into matched and missing, preserving
    /// vocabulary order in both lists.
    fn split_by_coverage(
        &self,
        resume_skills: &ExtractedSkillSet,
        jd_skills: &ExtractedSkillSet,
    ) -> (Vec<String>, Vec<String>) {
        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for entry in self.vocabulary.entries() {
            if !jd_skills.contains(&entry.name) {
                continue;
            }
            if resume_skills.contains(&entry.name) {
                matched.push(entry.name.clone());
            } else {
                missing.push(entry.name.clone());
            }
        }
        (matched, missing)
    }

    fn breakdown(&self, matched: &[String], missing: &[String]) -> Vec<CategorySlice> {
        SkillCategory::ALL
            .iter()
            .filter_map(|category| {
                let in_category = |names: &[String]| {
                    names
                        .iter()
                        .filter(|n| self.vocabulary.category_of(n) == Some(*category))
                        .cloned()
                        .collect::<Vec<_>>()
                };
                let slice = CategorySlice {
                    category: *category,
                    matched: in_category(matched),
                    missing: in_category(missing),
                };
                if slice.matched.is_empty() && slice.missing.is_empty() {
                    None
                } else {
                    Some(slice)
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> AtsEngine {
        AtsEngine::new(SkillVocabulary::builtin(), ScoringPolicy::default()).unwrap()
    }

    const RESUME: &str = "Backend engineer. Python, React and Docker in production for five years.";
    const JD: &str = "Looking for Python, React, AWS and Docker experience.";

    #[test]
    fn scenario_matches_and_misses_as_specified() {
        let result = engine().score(RESUME, JD);
        assert_eq!(
            result.matched_skills,
            vec!["python", "react", "docker"]
        );
        assert_eq!(result.missing_skills, vec!["aws"]);
        assert_eq!(result.total_required_skills, 4);
        assert!((result.skill_component - 0.75).abs() < 1e-9);
    }

    #[test]
    fn scoring_is_deterministic() {
        let e = engine();
        let first = e.score(RESUME, JD);
        let second = e.score(RESUME, JD);
        assert_eq!(first, second);
    }

    #[test]
    fn matched_and_missing_are_disjoint_subsets_of_jd_skills() {
        let result = engine().score(RESUME, JD);
        for skill in &result.matched_skills {
            assert!(!result.missing_skills.contains(skill));
        }
        assert_eq!(
            result.matched_skills.len() + result.missing_skills.len(),
            result.total_required_skills
        );
    }

    #[test]
    fn empty_inputs_score_zero() {
        let result = engine().score("", "");
        assert_eq!(result.score, 0.0);
        assert_eq!(result.skill_component, 0.0);
        assert_eq!(result.similarity_component, 0.0);
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn jd_without_recognized_skills_falls_back_to_similarity() {
        let resume = "Shipped planning tools for warehouse teams";
        let jd = "Seeking someone who shipped planning tools for warehouse teams";
        let result = engine().score(resume, jd);
        assert_eq!(result.total_required_skills, 0);
        assert_eq!(result.skill_component, 0.0);
        assert_eq!(result.score, (result.similarity_component * 100.0).round());
        assert!(result.score > 0.0);
    }

    #[test]
    fn adding_a_required_skill_never_lowers_the_score() {
        let e = engine();
        let before = e.score(RESUME, JD);
        let richer = format!("{RESUME} Also comfortable operating AWS.");
        let after = e.score(&richer, JD);
        assert!(after.matched_skills.len() >= before.matched_skills.len());
        assert!(after.score >= before.score, "{} < {}", after.score, before.score);
    }

    #[test]
    fn alias_equivalence_feeds_matching() {
        let result = engine().score(
            "I use JS and Node JS",
            "Must know JavaScript and Node.js",
        );
        assert_eq!(
            result.matched_skills,
            vec!["javascript", "node.js"]
        );
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn java_resume_does_not_satisfy_javascript_requirement() {
        let result = engine().score("Senior Java developer", "JavaScript specialist wanted");
        assert!(result.missing_skills.contains(&"javascript".to_string()));
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn blended_score_uses_documented_weights() {
        let result = engine().score(RESUME, JD);
        let expected = ((SKILL_WEIGHT * result.skill_component
            + SIMILARITY_WEIGHT * result.similarity_component)
            * 100.0)
            .round();
        assert_eq!(result.score, expected);
    }

    #[test]
    fn pure_policies_ignore_the_other_signal() {
        let vocab = SkillVocabulary::builtin();
        let skill_only = AtsEngine::new(vocab.clone(), ScoringPolicy::SkillOnly).unwrap();
        let sim_only = AtsEngine::new(vocab, ScoringPolicy::SimilarityOnly).unwrap();

        let by_skill = skill_only.score(RESUME, JD);
        assert_eq!(by_skill.score, (by_skill.skill_component * 100.0).round());

        let by_sim = sim_only.score(RESUME, JD);
        assert_eq!(by_sim.score, (by_sim.similarity_component * 100.0).round());
    }

    #[test]
    fn breakdown_groups_by_category_and_skips_untouched_ones() {
        let result = engine().score(RESUME, JD);
        let devops = result
            .category_breakdown
            .iter()
            .find(|s| s.category == SkillCategory::CloudDevops)
            .unwrap();
        assert_eq!(devops.matched, vec!["docker"]);
        assert_eq!(devops.missing, vec!["aws"]);
        assert!(result
            .category_breakdown
            .iter()
            .all(|s| !s.matched.is_empty() || !s.missing.is_empty()));
    }

    #[test]
    fn empty_vocabulary_is_a_construction_error() {
        let err = AtsEngine::new(SkillVocabulary::new(vec![]), ScoringPolicy::default());
        assert!(matches!(err, Err(EngineError::EmptyVocabulary)));
    }

    #[test]
    fn policy_parses_from_config_strings() {
        assert_eq!("blended".parse::<ScoringPolicy>(), Ok(ScoringPolicy::Blended));
        assert_eq!(
            "skill-only".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::SkillOnly)
        );
        assert_eq!(
            "Similarity-Only".parse::<ScoringPolicy>(),
            Ok(ScoringPolicy::SimilarityOnly)
        );
        assert!("cosine".parse::<ScoringPolicy>().is_err());
    }
}
