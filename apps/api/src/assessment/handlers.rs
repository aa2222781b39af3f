//! Axum route handlers for the Questionnaire, Content Type and Assessment APIs.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assessment::candidates::ContentTypeCandidate;
use crate::assessment::questionnaire::{QuestionCategory, Questionnaire};
use crate::assessment::recommender::{rank_content_types, AssessmentReport};
use crate::errors::AppError;
use crate::models::question::Responses;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct QuestionnaireQuery {
    pub category: Option<QuestionCategory>,
}

#[derive(Debug, Serialize)]
pub struct ContentTypeListResponse {
    pub content_types: Vec<ContentTypeCandidate>,
}

/// GET /api/v1/questionnaire?category=<category>
pub async fn handle_get_questionnaire(
    State(state): State<AppState>,
    Query(query): Query<QuestionnaireQuery>,
) -> Json<Questionnaire> {
    let questionnaire = match query.category {
        Some(category) => Questionnaire {
            items: state
                .questionnaire
                .questions_in(category)
                .into_iter()
                .cloned()
                .collect(),
        },
        None => state.questionnaire.as_ref().clone(),
    };
    Json(questionnaire)
}

/// GET /api/v1/content-types
pub async fn handle_list_content_types(
    State(state): State<AppState>,
) -> Json<ContentTypeListResponse> {
    Json(ContentTypeListResponse {
        content_types: state.catalog.candidates().to_vec(),
    })
}

/// GET /api/v1/content-types/:id
pub async fn handle_get_content_type(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ContentTypeCandidate>, AppError> {
    Ok(Json(state.catalog.get(&id)?.clone()))
}

/// POST /api/v1/assessments
///
/// Body is the raw responses object (question id → answer). Unanswered
/// questions fall back to extractor defaults and are only logged.
pub async fn handle_create_assessment(
    State(state): State<AppState>,
    Json(responses): Json<Responses>,
) -> Json<AssessmentReport> {
    let gaps = state.questionnaire.gaps(&responses);
    if !gaps.is_empty() {
        let fields: Vec<&str> = gaps.iter().map(|g| g.field.as_str()).collect();
        debug!("Assessment missing {} answers: {}", fields.len(), fields.join(", "));
        for gap in &gaps {
            debug!("Unanswered {}: {}", gap.field, gap.question);
        }
    }

    Json(rank_content_types(
        state.fit_scorer.as_ref(),
        &state.catalog,
        &responses,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_questionnaire_includes_conditional_follow_up() {
        let Json(questionnaire) = handle_get_questionnaire(
            State(AppState::default()),
            Query(QuestionnaireQuery::default()),
        )
        .await;
        assert!(questionnaire
            .items
            .iter()
            .any(|item| item.question.id() == "website_platform_other"));
    }

    #[tokio::test]
    async fn test_questionnaire_filters_by_category() {
        let query: QuestionnaireQuery =
            serde_json::from_value(json!({"category": "marketing_goals"})).unwrap();
        let Json(questionnaire) =
            handle_get_questionnaire(State(AppState::default()), Query(query)).await;
        assert_eq!(questionnaire.items.len(), 2);
        assert!(questionnaire
            .items
            .iter()
            .all(|item| item.category == QuestionCategory::MarketingGoals));
    }

    #[tokio::test]
    async fn test_content_types_list_and_get() {
        let Json(list) = handle_list_content_types(State(AppState::default())).await;
        assert_eq!(list.content_types.len(), 10);

        let Json(candidate) =
            handle_get_content_type(State(AppState::default()), Path("mini_course".to_string()))
                .await
                .unwrap();
        assert_eq!(candidate.name, "Personalized Mini-Course");
    }

    #[tokio::test]
    async fn test_unknown_content_type_is_not_found() {
        let result =
            handle_get_content_type(State(AppState::default()), Path("hologram".to_string())).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_assessment_ranks_top_three() {
        let responses: Responses = serde_json::from_value(json!({
            "business_type": "service",
            "customer_pain_points": ["knowledge", "complexity", "quality"],
            "tech_comfort": 4,
            "marketing_goals": ["leads", "authority", "conversion"],
            "lead_quality_importance": 4
        }))
        .unwrap();

        let Json(report) =
            handle_create_assessment(State(AppState::default()), Json(responses)).await;
        let ids: Vec<&str> = report.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["interactive_assessment", "personalized_plan", "diagnostic_tool"]
        );
        assert!(report.recommendations.iter().all(|r| r.score == 8.0));
    }
}
