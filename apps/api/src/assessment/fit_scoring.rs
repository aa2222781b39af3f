//! Fit Scoring: pluggable, trait-based scorer that measures how well a
//! content type suits a normalized business profile.
//!
//! Default: `AdditiveFitScorer` (fixed point weights, deterministic).
//! `AppState` holds an `Arc<dyn FitScorer>`.

use serde::{Deserialize, Serialize};

use crate::assessment::candidates::{ContentTypeCandidate, LeadPreference};
use crate::assessment::profile::NormalizedProfile;

// ────────────────────────────────────────────────────────────────────────────
// Weights
// ────────────────────────────────────────────────────────────────────────────

pub const BUSINESS_KIND_MATCH: f64 = 2.0;
pub const BUSINESS_KIND_WILDCARD: f64 = 1.0;
pub const NEED_MATCH: f64 = 1.5;
pub const TECHNICAL_FIT: f64 = 1.0;
/// Per level the candidate exceeds the respondent's comfort.
pub const TECHNICAL_GAP_PENALTY: f64 = 0.5;
pub const LEAD_PREFERENCE_BONUS: f64 = 1.0;

/// Independent, summable goal bonuses.
const GOAL_BONUSES: &[(&str, f64)] = &[("leads", 1.0), ("conversion", 0.5), ("authority", 0.5)];

/// Recommendations returned per assessment.
pub const TOP_N: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Human-readable reasons a candidate does or does not fit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FitAnalysis {
    pub strengths: Vec<String>,
    #[serde(rename = "potential_issues")]
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredFit {
    pub score: f64,
    pub fit_analysis: FitAnalysis,
}

/// A candidate paired with its score; lives only for the ranking pass.
#[derive(Debug, Clone)]
pub struct ScoredCandidate<'a> {
    pub candidate: &'a ContentTypeCandidate,
    pub score: f64,
    pub fit_analysis: FitAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The fit scorer trait. Implement this to swap scoring backends without
/// touching the recommender or handlers.
pub trait FitScorer: Send + Sync {
    fn score(&self, candidate: &ContentTypeCandidate, profile: &NormalizedProfile) -> ScoredFit;

    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// AdditiveFitScorer (default implementation)
// ────────────────────────────────────────────────────────────────────────────

/// Additive point model. No clamp: totals may go negative.
///
/// 1. Business kind: +2.0 literal match, else +1.0 for wildcard candidates
/// 2. Needs: +1.5 per addressed need found in the pain points
/// 3. Technical: +1.0 when level ≤ comfort, else −0.5 per level over
/// 4. Goals: leads +1.0, conversion +0.5, authority +0.5
/// 5. Lead preference: +1.0 for quality (importance ≥ 4) or quantity (≤ 2)
pub struct AdditiveFitScorer;

impl FitScorer for AdditiveFitScorer {
    fn score(&self, candidate: &ContentTypeCandidate, profile: &NormalizedProfile) -> ScoredFit {
        ScoredFit {
            score: compute_score(candidate, profile),
            fit_analysis: analyze_fit(candidate, profile),
        }
    }

    fn backend(&self) -> &'static str {
        "additive"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Core scoring algorithm
// ────────────────────────────────────────────────────────────────────────────

fn compute_score(candidate: &ContentTypeCandidate, profile: &NormalizedProfile) -> f64 {
    let mut score = 0.0;

    let kind = profile.business_profile.business_kind.as_deref();
    if candidate.serves_business_kind(kind) {
        score += BUSINESS_KIND_MATCH;
    } else if candidate.applies_to_any_business {
        score += BUSINESS_KIND_WILDCARD;
    }

    score += NEED_MATCH * matched_needs(candidate, profile).len() as f64;

    let comfort = profile.technical_capability.comfort_level;
    if candidate.technical_level <= comfort {
        score += TECHNICAL_FIT;
    } else {
        score -= TECHNICAL_GAP_PENALTY * (candidate.technical_level - comfort) as f64;
    }

    let goals = &profile.marketing_goals;
    score += GOAL_BONUSES
        .iter()
        .filter(|(goal, _)| goals.has_goal(goal))
        .map(|(_, bonus)| bonus)
        .sum::<f64>();

    let importance = goals.lead_quality_importance;
    let preference_match = match candidate.lead_preference {
        LeadPreference::Quality => importance >= 4,
        LeadPreference::Quantity => importance <= 2,
        LeadPreference::None => false,
    };
    if preference_match {
        score += LEAD_PREFERENCE_BONUS;
    }

    score
}

/// Addressed needs that appear in the pain points, in the candidate's
/// declared order.
fn matched_needs<'a>(
    candidate: &'a ContentTypeCandidate,
    profile: &NormalizedProfile,
) -> Vec<&'a str> {
    candidate
        .addressed_needs
        .iter()
        .filter(|need| profile.customer_needs.has_pain_point(need))
        .map(String::as_str)
        .collect()
}

fn analyze_fit(candidate: &ContentTypeCandidate, profile: &NormalizedProfile) -> FitAnalysis {
    let mut analysis = FitAnalysis::default();

    let kind = profile.business_profile.business_kind.as_deref();
    if candidate.serves_business_kind(kind) {
        analysis
            .strengths
            .push("Well-suited for your business type".to_string());
    } else if candidate.applies_to_any_business {
        analysis
            .strengths
            .push("Adaptable to various business types including yours".to_string());
    } else {
        analysis
            .issues
            .push("Not typically used by your business type, but can be adapted".to_string());
    }

    let matched = matched_needs(candidate, profile);
    if matched.is_empty() {
        analysis
            .issues
            .push("May not directly address your customers' main pain points".to_string());
    } else {
        analysis.strengths.push(format!(
            "Addresses key customer pain points: {}",
            matched.join(", ")
        ));
    }

    if candidate.technical_level <= profile.technical_capability.comfort_level {
        analysis
            .strengths
            .push("Matches your technical capabilities".to_string());
    } else {
        analysis
            .issues
            .push("May require more technical expertise than you currently have".to_string());
    }

    analysis
}

/// Scores every candidate, stable-sorts by score descending (ties keep
/// catalog order) and keeps the first `limit`.
pub fn rank_candidates<'a>(
    scorer: &dyn FitScorer,
    candidates: &'a [ContentTypeCandidate],
    profile: &NormalizedProfile,
    limit: usize,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = candidates
        .iter()
        .map(|candidate| {
            let fit = scorer.score(candidate, profile);
            ScoredCandidate {
                candidate,
                score: fit.score,
                fit_analysis: fit.fit_analysis,
            }
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
