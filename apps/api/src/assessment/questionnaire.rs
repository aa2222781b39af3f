//! Intake questionnaire: the industry-agnostic questions whose answers feed
//! the profile extractor.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::question::{
    ChoiceOption, ConditionalQuestion, MultipleChoiceQuestion, OpenTextQuestion, Question,
    QuestionCondition, Responses, ScaleLabel, ScaleQuestion,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    BusinessProfile,
    CustomerJourney,
    ValueProposition,
    TechnicalCapability,
    MarketingGoals,
}

fn default_weight() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireItem {
    pub category: QuestionCategory,
    #[serde(default = "default_weight")]
    pub weight: f64,
    #[serde(flatten)]
    pub question: Question,
}

/// A question the respondent left unanswered. Recovered by the extractor's
/// defaults; only ever logged.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationGap {
    pub field: String,
    pub question: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Questionnaire {
    pub items: Vec<QuestionnaireItem>,
}

impl Questionnaire {
    pub fn questions_in(&self, category: QuestionCategory) -> Vec<&QuestionnaireItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Visible questions with no usable answer, in questionnaire order.
    pub fn gaps(&self, responses: &Responses) -> Vec<ValidationGap> {
        self.items
            .iter()
            .map(|item| &item.question)
            .filter(|q| q.is_visible(responses))
            .filter(|q| !is_answered(responses.get(q.id())))
            .map(|q| ValidationGap {
                field: q.id().to_string(),
                question: q.text().to_string(),
            })
            .collect()
    }

    pub fn default_questionnaire() -> Self {
        use QuestionCategory::*;

        let items = vec![
            item(
                BusinessProfile,
                1.5,
                choice(
                    "business_type",
                    "Which of the following best describes your business?",
                    &[
                        ("service", "Service-based business"),
                        ("product", "Product-based business"),
                        ("hybrid", "Both services and products"),
                        ("content", "Content or information business"),
                        ("nonprofit", "Nonprofit organization"),
                    ],
                    false,
                ),
            ),
            item(
                BusinessProfile,
                1.0,
                choice(
                    "business_size",
                    "How many people work in your business?",
                    &[
                        ("solo", "Just me"),
                        ("micro", "2-5 people"),
                        ("small", "6-20 people"),
                        ("medium", "21-100 people"),
                        ("large", "More than 100 people"),
                    ],
                    false,
                ),
            ),
            item(
                BusinessProfile,
                1.8,
                open_text(
                    "business_description",
                    "In a few sentences, describe what your business does and who you serve:",
                ),
            ),
            item(
                BusinessProfile,
                1.3,
                choice(
                    "target_audience",
                    "Who is your primary target audience?",
                    &[
                        ("b2c", "Individual consumers (B2C)"),
                        ("b2b_small", "Small businesses (B2B)"),
                        ("b2b_enterprise", "Large enterprises (B2B)"),
                        ("b2g", "Government or public sector"),
                        ("mixed", "Mixed audience"),
                    ],
                    false,
                ),
            ),
            item(
                CustomerJourney,
                1.7,
                choice(
                    "customer_pain_points",
                    "What are the main pain points your customers experience? (Select up to 3)",
                    &[
                        ("time", "Lack of time"),
                        ("knowledge", "Lack of knowledge or expertise"),
                        ("cost", "High costs or budget constraints"),
                        ("complexity", "Complexity or confusion"),
                        ("quality", "Poor quality alternatives"),
                        ("access", "Limited access to resources"),
                        ("risk", "Risk or uncertainty"),
                        ("support", "Lack of support or guidance"),
                    ],
                    true,
                ),
            ),
            item(
                CustomerJourney,
                1.2,
                scale(
                    "sales_cycle_length",
                    "How long is your typical sales cycle?",
                    &[
                        (1, "Very short (immediate purchase)"),
                        (2, "Short (days)"),
                        (3, "Medium (weeks)"),
                        (4, "Long (months)"),
                        (5, "Very long (6+ months)"),
                    ],
                ),
            ),
            item(
                CustomerJourney,
                1.6,
                open_text(
                    "customer_questions",
                    "What are the top 3 questions potential customers ask before buying?",
                ),
            ),
            item(
                ValueProposition,
                1.5,
                open_text(
                    "unique_value",
                    "What makes your business different from competitors?",
                ),
            ),
            item(
                ValueProposition,
                1.4,
                choice(
                    "customer_value",
                    "Which of these do your customers value most about your business?",
                    &[
                        ("quality", "Quality of products/services"),
                        ("price", "Competitive pricing"),
                        ("expertise", "Expertise and knowledge"),
                        ("convenience", "Convenience or ease of use"),
                        ("support", "Customer service and support"),
                        ("results", "Proven results or outcomes"),
                        ("innovation", "Innovation or unique approach"),
                    ],
                    false,
                ),
            ),
            item(
                TechnicalCapability,
                1.0,
                choice(
                    "website_platform",
                    "What platform is your website built on?",
                    &[
                        ("wordpress", "WordPress"),
                        ("shopify", "Shopify"),
                        ("wix", "Wix"),
                        ("squarespace", "Squarespace"),
                        ("custom", "Custom-built website"),
                        ("other", "Other platform"),
                        ("none", "Don't have a website yet"),
                    ],
                    false,
                ),
            ),
            item(
                TechnicalCapability,
                1.0,
                Question::Conditional(ConditionalQuestion {
                    id: "website_platform_other".to_string(),
                    text: "Which platform is your website built on?".to_string(),
                    condition: QuestionCondition {
                        question_id: "website_platform".to_string(),
                        values: vec!["other".to_string()],
                    },
                }),
            ),
            item(
                TechnicalCapability,
                1.0,
                choice(
                    "technical_resources",
                    "Who manages your website and digital marketing?",
                    &[
                        ("self", "I do it myself"),
                        ("internal", "Internal team member"),
                        ("freelancer", "Freelancer or contractor"),
                        ("agency", "External agency"),
                        ("nobody", "Nobody currently"),
                    ],
                    false,
                ),
            ),
            item(
                TechnicalCapability,
                1.0,
                scale(
                    "tech_comfort",
                    "How comfortable are you with implementing new technologies?",
                    &[
                        (1, "Not comfortable at all"),
                        (2, "Slightly comfortable"),
                        (3, "Moderately comfortable"),
                        (4, "Very comfortable"),
                        (5, "Extremely comfortable"),
                    ],
                ),
            ),
            item(
                MarketingGoals,
                1.6,
                choice(
                    "marketing_goals",
                    "What are your primary marketing goals? (Select up to 3)",
                    &[
                        ("awareness", "Increase brand awareness"),
                        ("leads", "Generate more leads"),
                        ("conversion", "Improve conversion rates"),
                        ("retention", "Increase customer retention"),
                        ("upsell", "Upsell or cross-sell to existing customers"),
                        ("authority", "Establish industry authority"),
                        ("engagement", "Increase audience engagement"),
                    ],
                    true,
                ),
            ),
            item(
                MarketingGoals,
                1.3,
                scale(
                    "lead_quality_importance",
                    "How important is lead quality vs. lead quantity for your business?",
                    &[
                        (1, "Quantity is much more important"),
                        (3, "Both are equally important"),
                        (5, "Quality is much more important"),
                    ],
                ),
            ),
        ];

        Self { items }
    }
}

fn is_answered(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

fn item(category: QuestionCategory, weight: f64, question: Question) -> QuestionnaireItem {
    QuestionnaireItem {
        category,
        weight,
        question,
    }
}

fn choice(id: &str, text: &str, options: &[(&str, &str)], allow_multiple: bool) -> Question {
    Question::MultipleChoice(MultipleChoiceQuestion {
        id: id.to_string(),
        text: text.to_string(),
        options: options
            .iter()
            .map(|(value, text)| ChoiceOption::new(value, text))
            .collect(),
        allow_multiple,
    })
}

fn open_text(id: &str, text: &str) -> Question {
    Question::OpenText(OpenTextQuestion {
        id: id.to_string(),
        text: text.to_string(),
        max_length: None,
    })
}

fn scale(id: &str, text: &str, labels: &[(i64, &str)]) -> Question {
    Question::Scale(ScaleQuestion {
        id: id.to_string(),
        text: text.to_string(),
        min_value: 1,
        max_value: 5,
        labels: labels
            .iter()
            .map(|(value, label)| ScaleLabel {
                value: *value,
                label: label.to_string(),
            })
            .collect(),
    })
}
