//! Recommender: runs the assessment pipeline.
//!
//! Flow: raw responses → NormalizedProfile::extract → score every catalog
//! candidate → stable rank → top-3 recommendations.

use serde::Serialize;
use tracing::info;

use crate::assessment::candidates::ContentTypeCatalog;
use crate::assessment::fit_scoring::{rank_candidates, FitAnalysis, FitScorer, TOP_N};
use crate::assessment::profile::NormalizedProfile;
use crate::models::question::Responses;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub description: String,
    pub score: f64,
    pub fit_analysis: FitAnalysis,
    pub example: String,
}

/// The normalized views alongside the ranked recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub profile: NormalizedProfile,
    pub recommendations: Vec<Recommendation>,
    pub scorer_backend: String,
}

pub fn rank_content_types(
    scorer: &dyn FitScorer,
    catalog: &ContentTypeCatalog,
    responses: &Responses,
) -> AssessmentReport {
    let profile = NormalizedProfile::extract(responses);

    let recommendations: Vec<Recommendation> =
        rank_candidates(scorer, catalog.candidates(), &profile, TOP_N)
            .into_iter()
            .map(|scored| Recommendation {
                id: scored.candidate.id.clone(),
                name: scored.candidate.name.clone(),
                description: scored.candidate.description.clone(),
                score: scored.score,
                fit_analysis: scored.fit_analysis,
                example: scored.candidate.example.clone(),
            })
            .collect();

    if let Some(top) = recommendations.first() {
        info!(
            "Top recommendation: {} ({:.1}) for business kind {:?}",
            top.id, top.score, profile.business_profile.business_kind
        );
    }

    AssessmentReport {
        profile,
        recommendations,
        scorer_backend: scorer.backend().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::fit_scoring::AdditiveFitScorer;
    use serde_json::json;

    #[test]
    fn test_report_carries_profile_and_top_three() {
        let responses: Responses = json!({
            "business_type": "service",
            "customer_pain_points": ["knowledge", "complexity", "quality"],
            "tech_comfort": 4,
            "marketing_goals": ["leads", "authority", "conversion"],
            "lead_quality_importance": 4
        })
        .as_object()
        .cloned()
        .unwrap();

        let report =
            rank_content_types(&AdditiveFitScorer, &ContentTypeCatalog::default(), &responses);
        assert_eq!(report.recommendations.len(), 3);
        assert_eq!(report.recommendations[0].id, "interactive_assessment");
        assert_eq!(report.recommendations[0].name, "Interactive Assessment Tool");
        assert_eq!(report.profile.technical_capability.comfort_level, 4);
        assert_eq!(report.scorer_backend, "additive");
    }

    #[test]
    fn test_empty_responses_still_recommend() {
        let report = rank_content_types(
            &AdditiveFitScorer,
            &ContentTypeCatalog::default(),
            &Responses::new(),
        );
        assert_eq!(report.recommendations.len(), 3);
        // wildcard, low-tech candidates lead when nothing is known
        assert_eq!(report.recommendations[0].id, "interactive_quiz");
        assert_eq!(report.recommendations[1].id, "template_library");
    }

    #[test]
    fn test_report_serializes_flat_views() {
        let report = rank_content_types(
            &AdditiveFitScorer,
            &ContentTypeCatalog::default(),
            &Responses::new(),
        );
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("business_profile").is_some());
        assert!(value.get("marketing_goals").is_some());
        assert_eq!(value["recommendations"][0]["fit_analysis"]["strengths"].as_array().unwrap().len(), 2);
    }
}
