use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw questionnaire answers keyed by question id.
/// Multi-select answers are arrays of string tags, scale answers are integers.
pub type Responses = serde_json::Map<String, Value>;

/// A single selectable option of a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub text: String,
    /// Points awarded when the option is picked in a scored assessment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl ChoiceOption {
    pub fn new(value: &str, text: &str) -> Self {
        Self {
            value: value.to_string(),
            text: text.to_string(),
            score: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    pub id: String,
    pub text: String,
    pub options: Vec<ChoiceOption>,
    #[serde(default)]
    pub allow_multiple: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleQuestion {
    pub id: String,
    pub text: String,
    pub min_value: i64,
    pub max_value: i64,
    #[serde(default)]
    pub labels: Vec<ScaleLabel>,
}

/// Caption for one point on a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleLabel {
    pub value: i64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenTextQuestion {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

/// Shown only when an earlier answer matches one of `values`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionCondition {
    pub question_id: String,
    pub values: Vec<String>,
}

impl QuestionCondition {
    /// True when the referenced answer equals (or, for multi-select, contains)
    /// one of the expected values.
    pub fn is_met(&self, responses: &Responses) -> bool {
        match responses.get(&self.question_id) {
            Some(Value::String(answer)) => self.values.iter().any(|v| v == answer),
            Some(Value::Array(answers)) => answers
                .iter()
                .filter_map(Value::as_str)
                .any(|a| self.values.iter().any(|v| v == a)),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalQuestion {
    pub id: String,
    pub text: String,
    pub condition: QuestionCondition,
}

/// Typed question definition shared by the intake questionnaire and
/// assessment templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    MultipleChoice(MultipleChoiceQuestion),
    Scale(ScaleQuestion),
    OpenText(OpenTextQuestion),
    Conditional(ConditionalQuestion),
}

impl Question {
    pub fn id(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.id,
            Question::Scale(q) => &q.id,
            Question::OpenText(q) => &q.id,
            Question::Conditional(q) => &q.id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Question::MultipleChoice(q) => &q.text,
            Question::Scale(q) => &q.text,
            Question::OpenText(q) => &q.text,
            Question::Conditional(q) => &q.text,
        }
    }

    /// Whether the question applies given the answers collected so far.
    pub fn is_visible(&self, responses: &Responses) -> bool {
        match self {
            Question::Conditional(q) => q.condition.is_met(responses),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn responses(value: Value) -> Responses {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_question_serializes_with_type_tag() {
        let q = Question::OpenText(OpenTextQuestion {
            id: "unique_value".to_string(),
            text: "What makes you different?".to_string(),
            max_length: None,
        });
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["type"], "open_text");
        assert_eq!(value["id"], "unique_value");
        assert!(value.get("max_length").is_none());
    }

    #[test]
    fn test_scale_question_deserializes_labels() {
        let q: Question = serde_json::from_value(json!({
            "type": "scale",
            "id": "tech_comfort",
            "text": "How comfortable are you?",
            "min_value": 1,
            "max_value": 5,
            "labels": [
                {"value": 1, "label": "Not at all"},
                {"value": 5, "label": "Extremely"}
            ]
        }))
        .unwrap();
        match q {
            Question::Scale(s) => {
                assert_eq!(s.labels.len(), 2);
                assert_eq!(s.labels[0].value, 1);
                assert_eq!(s.labels[1].label, "Extremely");
            }
            other => panic!("expected scale question, got {other:?}"),
        }
    }

    #[test]
    fn test_condition_matches_single_answer() {
        let cond = QuestionCondition {
            question_id: "website_platform".to_string(),
            values: vec!["other".to_string()],
        };
        assert!(cond.is_met(&responses(json!({"website_platform": "other"}))));
        assert!(!cond.is_met(&responses(json!({"website_platform": "wix"}))));
        assert!(!cond.is_met(&responses(json!({}))));
    }

    #[test]
    fn test_condition_matches_multi_select_answer() {
        let cond = QuestionCondition {
            question_id: "marketing_goals".to_string(),
            values: vec!["leads".to_string()],
        };
        assert!(cond.is_met(&responses(json!({"marketing_goals": ["awareness", "leads"]}))));
        assert!(!cond.is_met(&responses(json!({"marketing_goals": ["awareness"]}))));
    }

    #[test]
    fn test_non_conditional_questions_always_visible() {
        let q = Question::MultipleChoice(MultipleChoiceQuestion {
            id: "business_type".to_string(),
            text: "Which best describes your business?".to_string(),
            options: vec![ChoiceOption::new("service", "Service-based business")],
            allow_multiple: false,
        });
        assert!(q.is_visible(&Responses::new()));
        assert_eq!(q.id(), "business_type");
    }
}
