//! Axum route handlers for the Template and Lead Magnet APIs.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::generator::{create_lead_magnet, render_template, LeadMagnet, LeadMagnetRequest};
use crate::generation::personalize::{Personalize, Substitutions};
use crate::generation::renderer::RenderedContent;
use crate::generation::template::{ResultCategory, Template, TemplateBody};
use crate::models::business::{BusinessProfileInput, CustomerRecord};
use crate::models::question::Responses;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct TemplateQuery {
    #[serde(rename = "type")]
    pub type_tag: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TemplateListResponse {
    pub templates: Vec<Template>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub business_profile: BusinessProfileInput,
    #[serde(default)]
    pub customer: Option<CustomerRecord>,
}

/// Either a precomputed `score` or the raw `responses` to total up.
/// `score` wins when both are present.
#[derive(Debug, Default, Deserialize)]
pub struct ResultRequest {
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub responses: Option<Responses>,
    #[serde(default)]
    pub business_profile: BusinessProfileInput,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/templates?type=<tag>
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(query): Query<TemplateQuery>,
) -> Json<TemplateListResponse> {
    let templates = match query.type_tag.as_deref() {
        Some(tag) => state.registry.get_by_type_tag(tag).into_iter().cloned().collect(),
        None => state.registry.templates().to_vec(),
    };
    Json(TemplateListResponse { templates })
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Template>, AppError> {
    Ok(Json(state.registry.get_by_id(&id)?.clone()))
}

/// POST /api/v1/templates/:id/render
///
/// Business-level substitution always applies; customer pre-fill only when
/// `customer` is present.
pub async fn handle_render_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RenderRequest>,
) -> Result<Json<RenderedContent>, AppError> {
    let rendered = render_template(
        &state.registry,
        &id,
        &request.business_profile,
        request.customer.as_ref(),
    )?;
    Ok(Json(rendered))
}

/// POST /api/v1/templates/:id/result
///
/// Maps a finished assessment's total score to its result category.
pub async fn handle_assessment_result(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ResultRequest>,
) -> Result<Json<ResultCategory>, AppError> {
    let template = state.registry.get_by_id(&id)?;
    let TemplateBody::Assessment(body) = &template.body else {
        return Err(AppError::Validation(format!(
            "Template '{id}' is a {} and has no scored results",
            template.body.kind()
        )));
    };
    let score = match (request.score, request.responses.as_ref()) {
        (Some(score), _) => score,
        (None, Some(responses)) => body.total_score(responses),
        (None, None) => {
            return Err(AppError::Validation(
                "either score or responses is required".to_string(),
            ))
        }
    };
    let category = body.result_for_score(score).ok_or_else(|| {
        AppError::NotFound(format!(
            "No result category for score {score} on template {id}"
        ))
    })?;

    let subs = Substitutions::from_profile(&request.business_profile);
    Ok(Json(category.personalize(&subs)))
}

/// POST /api/v1/lead-magnets
pub async fn handle_create_lead_magnet(
    State(state): State<AppState>,
    Json(request): Json<LeadMagnetRequest>,
) -> Result<(StatusCode, Json<LeadMagnet>), AppError> {
    let lead_magnet = create_lead_magnet(&state.registry, &request)?;
    Ok((StatusCode::CREATED, Json(lead_magnet)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn acme() -> BusinessProfileInput {
        BusinessProfileInput {
            business_name: Some("Acme".to_string()),
            industry: Some("Web Design".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_templates_filters_by_type() {
        let Json(all) =
            handle_list_templates(State(AppState::default()), Query(TemplateQuery::default())).await;
        assert_eq!(all.templates.len(), 3);

        let query = TemplateQuery {
            type_tag: Some("calculator".to_string()),
        };
        let Json(calculators) = handle_list_templates(State(AppState::default()), Query(query)).await;
        assert_eq!(calculators.templates.len(), 1);
        assert_eq!(calculators.templates[0].id, "roi_calculator");
    }

    #[tokio::test]
    async fn test_get_unknown_template_is_not_found() {
        let result =
            handle_get_template(State(AppState::default()), Path("nonexistent".to_string())).await;
        assert!(matches!(result, Err(AppError::TemplateNotFound(_))));
    }

    #[tokio::test]
    async fn test_render_endpoint_prefills_customer_values() {
        let request: RenderRequest = serde_json::from_value(json!({
            "business_profile": {"business_name": "Acme"},
            "customer": {"name": "Jo", "current_cost": 2500}
        }))
        .unwrap();
        let Json(rendered) = handle_render_template(
            State(AppState::default()),
            Path("roi_calculator".to_string()),
            Json(request),
        )
        .await
        .unwrap();

        assert_eq!(rendered.customer_name.as_deref(), Some("Jo"));
        let value = serde_json::to_value(&rendered).unwrap();
        assert_eq!(value["inputs"][0]["id"], "current_cost");
        assert_eq!(value["inputs"][0]["default_value"], json!(2500));
    }

    #[tokio::test]
    async fn test_result_for_score_is_personalized() {
        let request = ResultRequest {
            score: Some(18),
            business_profile: acme(),
            ..Default::default()
        };
        let Json(category) = handle_assessment_result(
            State(AppState::default()),
            Path("website_performance_assessment".to_string()),
            Json(request),
        )
        .await
        .unwrap();
        assert_eq!(category.id, "high_performance");
        assert!(category
            .recommendations
            .iter()
            .any(|r| r.starts_with("Talk to Acme")));
    }

    #[tokio::test]
    async fn test_result_out_of_range_is_not_found() {
        let result = handle_assessment_result(
            State(AppState::default()),
            Path("website_performance_assessment".to_string()),
            Json(ResultRequest {
                score: Some(99),
                ..Default::default()
            }),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_result_on_calculator_is_validation_error() {
        let result = handle_assessment_result(
            State(AppState::default()),
            Path("roi_calculator".to_string()),
            Json(ResultRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_lead_magnet_returns_created() {
        let request = LeadMagnetRequest {
            content_type: Some("assessment".to_string()),
            business_profile: acme(),
            ..Default::default()
        };
        let (status, Json(lead_magnet)) =
            handle_create_lead_magnet(State(AppState::default()), Json(request))
                .await
                .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(lead_magnet.content.template_id, "website_performance_assessment");
    }

    #[tokio::test]
    async fn test_result_from_responses_totals_option_points() {
        let request: ResultRequest = serde_json::from_value(json!({
            "responses": {
                "website_speed": "average",
                "mobile_friendly": "mostly",
                "content_quality": "good",
                "conversion_elements": "few",
                "seo_status": "basic"
            }
        }))
        .unwrap();
        let Json(category) = handle_assessment_result(
            State(AppState::default()),
            Path("website_performance_assessment".to_string()),
            Json(request),
        )
        .await
        .unwrap();
        // 2 + 3 + 3 + 2 + 2
        assert_eq!(category.id, "average_performance");
    }

    #[tokio::test]
    async fn test_result_without_score_or_responses_is_validation_error() {
        let result = handle_assessment_result(
            State(AppState::default()),
            Path("website_performance_assessment".to_string()),
            Json(ResultRequest::default()),
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
