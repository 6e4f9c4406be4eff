//! Request/response models for the matching API. The core returns plain
//! `MatchResult` structures; these wrappers add the transport-only fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::engine::MatchResult;
use crate::matching::vocabulary::SkillCategory;

/// Body of POST /api/v1/match and /api/v1/match/score.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub resume_text: String,
    pub job_description: String,
}

/// Full analysis response: the match result plus gap guidance.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub result: MatchResult,
    pub recommendations: Vec<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// Reduced response for the score-only endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub total_required_skills: usize,
}

impl From<MatchResult> for ScoreResponse {
    fn from(result: MatchResult) -> Self {
        Self {
            score: result.score,
            matched_skills: result.matched_skills,
            missing_skills: result.missing_skills,
            total_required_skills: result.total_required_skills,
        }
    }
}

/// One category group in the vocabulary listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryGroup {
    pub category: SkillCategory,
    pub skills: Vec<String>,
}

/// GET /api/v1/skills response.
#[derive(Debug, Clone, Serialize)]
pub struct VocabularyResponse {
    pub total: usize,
    pub categories: Vec<CategoryGroup>,
}
