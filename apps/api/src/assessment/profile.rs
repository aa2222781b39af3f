//! Profile extraction: maps raw questionnaire responses into the four
//! normalized views the scorer consumes. Total: absent or mistyped answers
//! fall back to defaults, never to errors.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::question::Responses;

/// Neutral midpoint used when a 1–5 scale answer is missing.
pub const DEFAULT_SCALE_VALUE: i64 = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_kind: Option<String>,
    pub size: Option<String>,
    pub description: Option<String>,
    pub target_audience: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerNeeds {
    pub pain_points: Vec<String>,
    pub sales_cycle_length: Option<i64>,
    pub common_questions: Option<String>,
}

impl CustomerNeeds {
    pub fn has_pain_point(&self, tag: &str) -> bool {
        self.pain_points.iter().any(|p| p == tag)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalCapability {
    pub platform: Option<String>,
    pub resources: Option<String>,
    pub comfort_level: i64,
}

impl Default for TechnicalCapability {
    fn default() -> Self {
        Self {
            platform: None,
            resources: None,
            comfort_level: DEFAULT_SCALE_VALUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingGoals {
    pub primary_goals: Vec<String>,
    pub lead_quality_importance: i64,
}

impl Default for MarketingGoals {
    fn default() -> Self {
        Self {
            primary_goals: Vec::new(),
            lead_quality_importance: DEFAULT_SCALE_VALUE,
        }
    }
}

impl MarketingGoals {
    pub fn has_goal(&self, tag: &str) -> bool {
        self.primary_goals.iter().any(|g| g == tag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedProfile {
    pub business_profile: BusinessProfile,
    pub customer_needs: CustomerNeeds,
    pub technical_capability: TechnicalCapability,
    pub marketing_goals: MarketingGoals,
}

impl NormalizedProfile {
    pub fn extract(responses: &Responses) -> Self {
        Self {
            business_profile: BusinessProfile {
                business_kind: text(responses, "business_type"),
                size: text(responses, "business_size"),
                description: text(responses, "business_description"),
                target_audience: text(responses, "target_audience"),
            },
            customer_needs: CustomerNeeds {
                pain_points: tags(responses, "customer_pain_points"),
                sales_cycle_length: scale(responses, "sales_cycle_length"),
                common_questions: text(responses, "customer_questions"),
            },
            technical_capability: TechnicalCapability {
                platform: text(responses, "website_platform"),
                resources: text(responses, "technical_resources"),
                comfort_level: scale(responses, "tech_comfort").unwrap_or(DEFAULT_SCALE_VALUE),
            },
            marketing_goals: MarketingGoals {
                primary_goals: tags(responses, "marketing_goals"),
                lead_quality_importance: scale(responses, "lead_quality_importance")
                    .unwrap_or(DEFAULT_SCALE_VALUE),
            },
        }
    }
}

fn text(responses: &Responses, key: &str) -> Option<String> {
    match responses.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Multi-select answer. A bare string is read as a single tag; duplicates
/// are dropped keeping first occurrence.
fn tags(responses: &Responses, key: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut push = |tag: &str| {
        if !out.iter().any(|t| t == tag) {
            out.push(tag.to_string());
        }
    };
    match responses.get(key) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).for_each(&mut push),
        Some(Value::String(s)) if !s.is_empty() => push(s.as_str()),
        _ => {}
    }
    out
}

/// Integer scale answer; accepts integral floats and numeric strings.
fn scale(responses: &Responses, key: &str) -> Option<i64> {
    match responses.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
