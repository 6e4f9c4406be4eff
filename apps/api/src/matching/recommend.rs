//! Gap recommendations: turns a match result into a short, prioritized list
//! of human-readable guidance lines.
//!
//! The rule chain is fixed and evaluated in order; each rule appends at most
//! one line, and the output is capped so it stays actionable.

use crate::matching::engine::MatchResult;

/// Hard cap on the number of recommendation lines.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// How many missing skills the gap rule names, in vocabulary order.
const TOP_MISSING: usize = 3;

/// Below this many matched skills, suggest broadening coverage.
const BROAD_COVERAGE_MIN: usize = 3;

/// At or above this many matched skills, reinforce the strong coverage.
const STRONG_COVERAGE_MIN: usize = 8;

/// Builds the recommendation list for a match result. Deterministic: the
/// same result always produces the same lines in the same order.
pub fn recommend(result: &MatchResult) -> Vec<String> {
    let mut lines = Vec::new();

    if !result.missing_skills.is_empty() {
        let top: Vec<&str> = result
            .missing_skills
            .iter()
            .take(TOP_MISSING)
            .map(String::as_str)
            .collect();
        lines.push(format!(
            "Add evidence of {} to the resume; the job description lists {} required skill(s) the resume does not mention.",
            top.join(", "),
            result.missing_skills.len()
        ));
    }

    if result.matched_skills.len() < BROAD_COVERAGE_MIN {
        lines.push(
            "Few of the required skills are covered. Broaden the skills section with concrete projects that use the stack the role names."
                .to_string(),
        );
    }

    if let Some(only) = sole_matched_category(result) {
        lines.push(format!(
            "Matched skills are concentrated in {only}. Demonstrating strength in a second area would make the profile more resilient."
        ));
    }

    if result.matched_skills.len() >= STRONG_COVERAGE_MIN {
        lines.push(format!(
            "Strong coverage already: {} required skills are present. Keep them prominent near the top of the resume.",
            result.matched_skills.len()
        ));
    }

    lines.truncate(MAX_RECOMMENDATIONS);
    lines
}

/// The single category all matched skills fall into, if there is exactly one.
fn sole_matched_category(result: &MatchResult) -> Option<String> {
    let mut categories = result
        .category_breakdown
        .iter()
        .filter(|slice| !slice.matched.is_empty());
    let first = categories.next()?;
    if categories.next().is_some() {
        return None;
    }
    Some(first.category.label().to_string())
}
