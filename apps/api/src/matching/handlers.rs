use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;

use crate::errors::AppError;
use crate::matching::models::{
    CategoryGroup, MatchRequest, MatchResponse, ScoreResponse, VocabularyResponse,
};
use crate::matching::recommend::recommend;
use crate::matching::vocabulary::SkillCategory;
use crate::state::AppState;

/// POST /api/v1/match
pub async fn handle_match(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    validate(&req)?;
    let result = state.engine.score(&req.resume_text, &req.job_description);
    let recommendations = recommend(&result);
    Ok(Json(MatchResponse {
        result,
        recommendations,
        analyzed_at: Utc::now(),
    }))
}

/// POST /api/v1/match/score
pub async fn handle_score(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<ScoreResponse>, AppError> {
    validate(&req)?;
    let result = state.engine.score(&req.resume_text, &req.job_description);
    Ok(Json(result.into()))
}

/// GET /api/v1/skills
pub async fn handle_list_skills(
    State(state): State<AppState>,
) -> Result<Json<VocabularyResponse>, AppError> {
    let vocabulary = state.engine.vocabulary();
    let categories = SkillCategory::ALL
        .iter()
        .map(|category| group_for(&state, *category))
        .filter(|g| !g.skills.is_empty())
        .collect();
    Ok(Json(VocabularyResponse {
        total: vocabulary.len(),
        categories,
    }))
}

/// GET /api/v1/skills/:category
pub async fn handle_skills_by_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
) -> Result<Json<CategoryGroup>, AppError> {
    let category = serde_json::from_value::<SkillCategory>(serde_json::Value::String(
        category.clone(),
    ))
    .map_err(|_| AppError::NotFound(format!("Unknown skill category '{category}'")))?;
    Ok(Json(group_for(&state, category)))
}

fn group_for(state: &AppState, category: SkillCategory) -> CategoryGroup {
    let skills = state
        .engine
        .vocabulary()
        .entries()
        .iter()
        .filter(|e| e.category == category)
        .map(|e| e.name.clone())
        .collect();
    CategoryGroup { category, skills }
}

/// Missing required text is a client error, rejected before the engine runs.
/// Empty documents are well-defined for the core itself; the API treats a
/// blank field as a caller mistake rather than silently scoring zero.
fn validate(req: &MatchRequest) -> Result<(), AppError> {
    if req.resume_text.trim().is_empty() {
        return Err(AppError::Validation("resume_text must not be empty".into()));
    }
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::matching::engine::{AtsEngine, ScoringPolicy};
    use crate::matching::vocabulary::SkillVocabulary;
    use crate::routes::build_router;
    use crate::state::AppState;

    fn app() -> axum::Router {
        let engine =
            AtsEngine::new(SkillVocabulary::builtin(), ScoringPolicy::default()).unwrap();
        let state = AppState {
            engine: Arc::new(engine),
            config: Config {
                port: 8080,
                rust_log: "info".to_string(),
                vocab_path: None,
                scoring_policy: ScoringPolicy::default(),
            },
        };
        build_router(state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn match_endpoint_returns_full_analysis() {
        let req = post(
            "/api/v1/match",
            json!({
                "resume_text": "Python, React and Docker in production",
                "job_description": "Python, React, AWS and Docker required"
            }),
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["matched_skills"], json!(["python", "react", "docker"]));
        assert_eq!(body["missing_skills"], json!(["aws"]));
        assert_eq!(body["total_required_skills"], 4);
        assert!(body["recommendations"].as_array().unwrap().len() <= 5);
        assert!(body["analyzed_at"].is_string());
    }

    #[tokio::test]
    async fn score_endpoint_returns_reduced_shape() {
        let req = post(
            "/api/v1/match/score",
            json!({
                "resume_text": "Rust and Kubernetes",
                "job_description": "Rust, Kubernetes and Terraform"
            }),
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["score"].is_number());
        assert_eq!(body["missing_skills"], json!(["terraform"]));
        assert!(body.get("similarity_component").is_none());
    }

    #[tokio::test]
    async fn blank_resume_text_is_rejected() {
        let req = post(
            "/api/v1/match",
            json!({"resume_text": "   ", "job_description": "Python"}),
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn skills_listing_groups_by_category() {
        let req = Request::builder()
            .uri("/api/v1/skills")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["total"].as_u64().unwrap() > 100);
        let first = &body["categories"][0];
        assert_eq!(first["category"], "languages");
        assert!(first["skills"]
            .as_array()
            .unwrap()
            .contains(&json!("python")));
    }

    #[tokio::test]
    async fn unknown_category_is_not_found() {
        let req = Request::builder()
            .uri("/api/v1/skills/quantum")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn known_category_lists_its_skills() {
        let req = Request::builder()
            .uri("/api/v1/skills/databases")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert!(body["skills"]
            .as_array()
            .unwrap()
            .contains(&json!("postgresql")));
    }
}
